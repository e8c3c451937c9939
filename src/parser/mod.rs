// File: ./src/parser/mod.rs
//! Turns a raw input line into a [`Command`].
pub mod edit;

pub use edit::parse_edit;

use crate::command::{
    Command, CommandVariant, FIND_USAGE, HELP_USAGE, LIST_ACTIVITY_USAGE, ListActivityCommand,
};
use crate::error::ParseError;
use crate::model::Index;
use std::str::FromStr;

pub const LIST_ACTIVITY_COMMAND: &str = "listactivity";

/// Splits off the command word and hands the remainder to its parser.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::format(HELP_USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(pos) => trimmed.split_at(pos),
        None => (trimmed, ""),
    };

    let result = if let Ok(variant) = CommandVariant::from_str(word) {
        parse_edit(variant, args).map(Command::Edit)
    } else {
        match word {
            LIST_ACTIVITY_COMMAND => parse_list_activity(args).map(Command::ListActivity),
            "list" => Ok(Command::List),
            "find" => parse_find(args),
            "history" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(ParseError::UnknownCommand {
                word: word.to_string(),
            }),
        }
    };

    if let Err(e) = &result {
        log::debug!("Rejected '{}': {:?}", line, e);
    }
    result
}

pub fn parse_list_activity(args: &str) -> Result<ListActivityCommand, ParseError> {
    Index::parse(args)
        .map(ListActivityCommand::new)
        .map_err(|e| ParseError::format_caused_by(LIST_ACTIVITY_USAGE, e))
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::format(FIND_USAGE));
    }
    Ok(Command::Find(keywords))
}
