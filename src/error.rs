// File: ./src/error.rs
//! Error types surfaced by command parsing and command execution.
use crate::model::Field;
use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex { raw_input: String },

    #[error("{message}")]
    InvalidFieldValue {
        field: Field,
        raw_input: String,
        message: &'static str,
    },

    /// The arguments did not match the command's usage. `cause` holds the
    /// underlying failure when one exists (e.g. a malformed index).
    #[error("{}{usage}", MESSAGE_INVALID_COMMAND_FORMAT)]
    InvalidCommandFormat {
        usage: &'static str,
        #[source]
        cause: Option<Box<ParseError>>,
    },

    #[error("{}", MESSAGE_NOT_EDITED)]
    NoFieldsEdited,

    #[error("{}: {word}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand { word: String },
}

impl ParseError {
    pub fn invalid_field(field: Field, raw_input: &str, message: &'static str) -> Self {
        ParseError::InvalidFieldValue {
            field,
            raw_input: raw_input.to_string(),
            message,
        }
    }

    pub fn format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage, cause: None }
    }

    pub fn format_caused_by(usage: &'static str, cause: ParseError) -> Self {
        ParseError::InvalidCommandFormat {
            usage,
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns the innermost error, skipping format wrappers.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::InvalidCommandFormat {
                cause: Some(inner), ..
            } => inner.root_cause(),
            other => other,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PERSON_INDEX)]
    InvalidPersonIndex { index: usize, displayed: usize },

    #[error("{}", MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson { name: String },
}
