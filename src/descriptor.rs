// File: ./src/descriptor.rs
//! Sparse "which fields changed" description of an edit.
//!
//! `EditDescriptor` has no setters. The only way to obtain one is through
//! [`EditDescriptorBuilder::build`], which consumes the builder, so a
//! descriptor cannot change after it has been handed to a command.
use crate::model::{Address, Email, ModuleSet, Name, Phone, TagSet, Timetable};
use std::fmt;

/// A single slot assignment recorded by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(Name),
    Phone(Phone),
    Email(Email),
    Address(Address),
    Tags(TagSet),
    Modules(ModuleSet),
    Timetable(Timetable),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    tags: Option<TagSet>,
    modules: Option<ModuleSet>,
    timetable: Option<Timetable>,
    interleaved: bool,
}

impl EditDescriptor {
    pub fn builder() -> EditDescriptorBuilder {
        EditDescriptorBuilder::default()
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// `Some(empty)` means "clear all tags", `None` means "leave tags alone".
    pub fn tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }

    pub fn modules(&self) -> Option<&ModuleSet> {
        self.modules.as_ref()
    }

    pub fn timetable(&self) -> Option<&Timetable> {
        self.timetable.as_ref()
    }

    pub fn is_interleaved(&self) -> bool {
        self.interleaved
    }

    pub fn is_any_slot_set(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
            || self.modules.is_some()
            || self.timetable.is_some()
    }

    /// The interleave flag counts as an edit on its own.
    pub fn is_any_field_edited(&self) -> bool {
        self.interleaved || self.is_any_slot_set()
    }
}

/// Accumulates slot assignments; a later assignment to the same slot wins.
#[derive(Debug, Clone, Default)]
pub struct EditDescriptorBuilder {
    updates: Vec<FieldUpdate>,
    interleaved: bool,
}

impl EditDescriptorBuilder {
    pub fn set(mut self, update: FieldUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn set_if_some(self, update: Option<FieldUpdate>) -> Self {
        match update {
            Some(u) => self.set(u),
            None => self,
        }
    }

    pub fn interleaved(mut self) -> Self {
        self.interleaved = true;
        self
    }

    pub fn build(self) -> EditDescriptor {
        let mut d = EditDescriptor {
            interleaved: self.interleaved,
            ..EditDescriptor::default()
        };
        for update in self.updates {
            match update {
                FieldUpdate::Name(v) => d.name = Some(v),
                FieldUpdate::Phone(v) => d.phone = Some(v),
                FieldUpdate::Email(v) => d.email = Some(v),
                FieldUpdate::Address(v) => d.address = Some(v),
                FieldUpdate::Tags(v) => d.tags = Some(v),
                FieldUpdate::Modules(v) => d.modules = Some(v),
                FieldUpdate::Timetable(v) => d.timetable = Some(v),
            }
        }
        d
    }
}

impl fmt::Display for EditDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(n) = &self.name {
            parts.push(format!("name={}", n));
        }
        if let Some(p) = &self.phone {
            parts.push(format!("phone={}", p));
        }
        if let Some(e) = &self.email {
            parts.push(format!("email={}", e));
        }
        if let Some(a) = &self.address {
            parts.push(format!("address={}", a));
        }
        if let Some(t) = &self.tags {
            parts.push(format!("tags={}", t.len()));
        }
        if let Some(m) = &self.modules {
            parts.push(format!("modules={}", m.len()));
        }
        if let Some(t) = &self.timetable {
            parts.push(format!("timetable={}", t.entries().len()));
        }
        if self.interleaved {
            parts.push("interleaved".to_string());
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_yields_unedited_descriptor() {
        let d = EditDescriptor::builder().build();
        assert!(!d.is_any_field_edited());
        assert_eq!(d, EditDescriptor::default());
    }

    #[test]
    fn test_last_assignment_wins() {
        let d = EditDescriptor::builder()
            .set(FieldUpdate::Name(Name::parse("Amy").unwrap()))
            .set(FieldUpdate::Name(Name::parse("Bob").unwrap()))
            .build();
        assert_eq!(d.name().map(|n| n.as_str()), Some("Bob"));
        assert!(d.phone().is_none());
    }

    #[test]
    fn test_interleave_flag_alone_counts_as_edit() {
        let d = EditDescriptor::builder().interleaved().build();
        assert!(d.is_any_field_edited());
        assert!(!d.is_any_slot_set());
    }

    #[test]
    fn test_empty_tag_set_is_present_not_absent() {
        let d = EditDescriptor::builder()
            .set(FieldUpdate::Tags(TagSet::new()))
            .build();
        assert!(d.tags().is_some_and(|t| t.is_empty()));
        assert!(d.is_any_field_edited());
    }
}
