// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.
use crate::command::{EDIT_USAGE, FIND_USAGE, INTERLEAVE_USAGE, LIST_ACTIVITY_USAGE};
use anyhow::{Result, bail};
use std::path::PathBuf;

/// What the binary should do, decided from its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Help,
    Run { root: Option<PathBuf> },
}

/// `args` excludes the binary name.
pub fn parse_args(args: &[String]) -> Result<CliAction> {
    let mut root = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(CliAction::Help),
            "--root" | "-r" => match iter.next() {
                Some(path) if !path.starts_with('-') => root = Some(PathBuf::from(path)),
                _ => bail!("{} requires a path", arg),
            },
            other => bail!("Unknown argument '{}'. Try --help", other),
        }
    }
    Ok(CliAction::Run { root })
}

pub fn print_help(binary_name: &str) {
    println!(
        "Contactbook v{} - A keyboard-driven contact book",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    print_command_help();
}

/// Printed by `--help` and by the `help` command inside the shell.
pub fn print_command_help() {
    println!("COMMANDS:");
    for usage in [EDIT_USAGE, INTERLEAVE_USAGE, LIST_ACTIVITY_USAGE, FIND_USAGE] {
        for line in usage.lines() {
            println!("    {}", line);
        }
        println!();
    }
    println!("    list              Show every contact");
    println!("    history           Show previously entered commands");
    println!("    help              Show this help");
    println!("    exit              Quit");
    println!();
    println!("FIELD PREFIXES:");
    println!("    n/NAME            ASCII letters, digits and spaces");
    println!("    p/PHONE           At least 3 digits");
    println!("    e/EMAIL           local-part@domain");
    println!("    a/ADDRESS         Any non-blank text");
    println!("    t/TAG             Repeatable, ASCII alphanumeric; a lone t/ clears all tags");
    println!("    m/MODULE          Repeatable; e.g. m/CS2103T");
    println!("    day/DAY           Weekday, e.g. day/mon");
    println!("    time/HHMM-HHMM    24-hour range, e.g. time/0900-1030");
    println!("    act/ACTIVITY      Activity label; needs day/ and time/ too");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_and_help() {
        assert_eq!(parse_args(&[]).unwrap(), CliAction::Run { root: None });
        assert_eq!(
            parse_args(&args(&["-r", "/tmp/book"])).unwrap(),
            CliAction::Run {
                root: Some(PathBuf::from("/tmp/book"))
            }
        );
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), CliAction::Help);
        assert_eq!(
            parse_args(&args(&["--root", "/tmp/book", "-h"])).unwrap(),
            CliAction::Help
        );
    }

    #[test]
    fn test_root_without_path_is_an_error() {
        let err = parse_args(&args(&["--root"])).unwrap_err();
        assert!(err.to_string().contains("--root requires a path"));
        assert!(parse_args(&args(&["-r", "--help"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }
}
