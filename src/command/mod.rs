// File: ./src/command/mod.rs
pub mod edit;
pub mod list_activity;

pub use edit::{
    CommandVariant, EDIT_USAGE, EditCommand, INTERLEAVE_USAGE, MESSAGE_INTERLEAVE_CLASHES,
};
pub use list_activity::{LIST_ACTIVITY_USAGE, ListActivityCommand};

use crate::error::CommandError;
use crate::history::CommandHistory;
use crate::model::Index;
use crate::store::{AddressBook, Filter};

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all persons";
pub const MESSAGE_HISTORY_EMPTY: &str = "You have not yet entered any commands.";
pub const MESSAGE_EXIT: &str = "Exiting Address Book as requested ...";
pub const MESSAGE_HELP: &str = "Opened help window.";

/// Which panel the shell should refresh after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Persons,
    Activities(Index),
    Combined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    pub view: View,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>, view: View) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            view,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(EditCommand),
    ListActivity(ListActivityCommand),
    List,
    Find(Vec<String>),
    History,
    Help,
    Exit,
}

impl Command {
    pub fn execute(
        &self,
        book: &mut AddressBook,
        history: &CommandHistory,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Command::Edit(cmd) => cmd.execute(book),
            Command::ListActivity(cmd) => cmd.execute(book),
            Command::List => {
                book.update_filter(Filter::All);
                Ok(CommandResult::new(MESSAGE_LIST_SUCCESS, View::Persons))
            }
            Command::Find(keywords) => {
                book.update_filter(Filter::NameKeywords(keywords.clone()));
                let count = book.filtered_persons().len();
                Ok(CommandResult::new(
                    format!("{} persons listed!", count),
                    View::Persons,
                ))
            }
            Command::History => {
                if history.is_empty() {
                    return Ok(CommandResult::new(MESSAGE_HISTORY_EMPTY, View::Persons));
                }
                let lines: Vec<&str> = history.entries().rev().collect();
                Ok(CommandResult::new(
                    format!(
                        "Entered commands (from most recent to earliest):\n{}",
                        lines.join("\n")
                    ),
                    View::Persons,
                ))
            }
            Command::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(MESSAGE_HELP, View::Persons)
            }),
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(MESSAGE_EXIT, View::Persons)
            }),
        }
    }
}
