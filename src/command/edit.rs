// File: ./src/command/edit.rs
use crate::command::{CommandResult, View};
use crate::descriptor::EditDescriptor;
use crate::error::CommandError;
use crate::model::{Index, apply_descriptor};
use crate::store::AddressBook;
use strum::{Display, EnumString};

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified \
by the index number used in the displayed person list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) \
[n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [m/MODULE]... [t/TAG]... \
[day/DAY time/HHMM-HHMM act/ACTIVITY]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const INTERLEAVE_USAGE: &str = "interleave: Adds the timetable of the person \
identified by the index number used in the displayed person list to the combined \
timetable view, merged chronologically with the other interleaved persons.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: interleave 1";

pub const MESSAGE_EDIT_PERSON_SUCCESS: &str = "Edited Person: ";
pub const MESSAGE_INTERLEAVE_PERSON_SUCCESS: &str = "Interleaved Person: ";
pub const MESSAGE_INTERLEAVE_CLASHES: &str = "Clashes in the combined timetable:";

/// The two commands sharing the edit grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CommandVariant {
    /// Replace the given fields.
    Edit,
    /// Merge into the existing record.
    Interleave,
}

impl CommandVariant {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandVariant::Edit => EDIT_USAGE,
            CommandVariant::Interleave => INTERLEAVE_USAGE,
        }
    }

    fn success_prefix(&self) -> &'static str {
        match self {
            CommandVariant::Edit => MESSAGE_EDIT_PERSON_SUCCESS,
            CommandVariant::Interleave => MESSAGE_INTERLEAVE_PERSON_SUCCESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    variant: CommandVariant,
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub fn new(variant: CommandVariant, index: Index, descriptor: EditDescriptor) -> Self {
        Self {
            variant,
            index,
            descriptor,
        }
    }

    pub fn variant(&self) -> CommandVariant {
        self.variant
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        let current = book.person_at(self.index)?;
        let edited = apply_descriptor(current, &self.descriptor);

        if !current.is_same_person(&edited) && book.has_person(&edited) {
            return Err(CommandError::DuplicatePerson {
                name: edited.name.to_string(),
            });
        }

        let mut feedback = format!("{}{}", self.variant.success_prefix(), edited);
        let view = match self.variant {
            CommandVariant::Edit => View::Persons,
            CommandVariant::Interleave => View::Combined,
        };
        book.set_person(self.index, edited.clone())?;

        if self.variant == CommandVariant::Interleave {
            let clashes: Vec<String> = book
                .combined_clashes()
                .iter()
                .filter(|c| c.involves(&edited))
                .map(|c| c.to_string())
                .collect();
            if !clashes.is_empty() {
                log::warn!("{} clash(es) after interleaving {}", clashes.len(), edited.name);
                feedback.push('\n');
                feedback.push_str(MESSAGE_INTERLEAVE_CLASHES);
                for clash in clashes {
                    feedback.push_str("\n  ");
                    feedback.push_str(&clash);
                }
            }
        }

        Ok(CommandResult::new(feedback, view))
    }
}
