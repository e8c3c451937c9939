use anyhow::{Context, Result};
use contactbook::command::{CommandResult, View};
use contactbook::config::Config;
use contactbook::context::{AppContext, StandardContext};
use contactbook::history::CommandHistory;
use contactbook::model::Timetable;
use contactbook::parser::parse_command;
use contactbook::store::AddressBook;
use contactbook::cli::{self, CliAction};
use contactbook::sample;
use simplelog::WriteLogger;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .and_then(|a| PathBuf::from(a).file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "contactbook".to_string());

    let root = match cli::parse_args(args.get(1..).unwrap_or_default())? {
        CliAction::Help => {
            cli::print_help(&binary_name);
            return Ok(());
        }
        CliAction::Run { root } => root,
    };
    let ctx = StandardContext::new(root);
    let (config, found) = Config::load_or_default(&ctx)?;
    init_logging(&ctx, &config)?;
    if found {
        log::info!("Starting with config at {}", Config::get_path_string(&ctx)?);
    } else {
        log::info!(
            "No config file at {}, using defaults",
            Config::get_path_string(&ctx)?
        );
    }

    let mut book = if config.load_sample_data {
        AddressBook::with_persons(sample::sample_persons())
    } else {
        AddressBook::new()
    };
    let mut history = CommandHistory::new(config.history_limit);

    print_persons(&book);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{}", config.prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        history.add(line);

        let result = match parse_command(line) {
            Ok(command) => command.execute(&mut book, &history),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match result {
            Ok(result) => {
                if render(&book, &result) {
                    break;
                }
            }
            Err(e) => println!("{}", e),
        }
    }
    log::info!("Shutting down");
    Ok(())
}

fn init_logging(ctx: &dyn AppContext, config: &Config) -> Result<()> {
    let path = ctx.get_log_file_path()?;
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;
    WriteLogger::init(config.log_level.to_filter(), simplelog::Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Prints the outcome of a command. Returns true when the shell should exit.
fn render(book: &AddressBook, result: &CommandResult) -> bool {
    println!("{}", result.feedback);
    if result.show_help {
        cli::print_command_help();
    }
    match result.view {
        View::Persons => print_persons(book),
        View::Activities(index) => {
            if let Ok(person) = book.person_at(index) {
                println!("Activities of {}:", person.name);
                print_timetable(&person.timetable);
            }
        }
        View::Combined => {
            println!("Combined timetable:");
            print_timetable(&book.combined_timetable());
        }
    }
    result.exit
}

fn print_persons(book: &AddressBook) {
    for (i, person) in book.filtered_persons().iter().enumerate() {
        println!("{:>3}. {}", i + 1, person);
    }
}

fn print_timetable(timetable: &Timetable) {
    if timetable.is_empty() {
        println!("    (no activities)");
    }
    for entry in timetable.entries() {
        println!("    {}", entry);
    }
}
