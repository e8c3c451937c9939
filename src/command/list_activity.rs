use crate::command::{CommandResult, View};
use crate::error::CommandError;
use crate::model::Index;
use crate::store::AddressBook;

pub const LIST_ACTIVITY_USAGE: &str = "listactivity: Lists activities of a person \
according to a given person index.\n\
Parameters: INDEX\n\
Example: listactivity 1";

pub const MESSAGE_LIST_ACTIVITY_SUCCESS: &str = "Listed all activities";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListActivityCommand {
    index: Index,
}

impl ListActivityCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn execute(&self, book: &AddressBook) -> Result<CommandResult, CommandError> {
        // Fail here rather than in the view if the index is out of range.
        book.person_at(self.index)?;
        Ok(CommandResult::new(
            MESSAGE_LIST_ACTIVITY_SUCCESS,
            View::Activities(self.index),
        ))
    }
}
