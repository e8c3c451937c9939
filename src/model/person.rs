// File: ./src/model/person.rs
use crate::model::{Address, Email, ModuleSet, Name, Phone, TagSet, Timetable};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default)]
    pub modules: ModuleSet,
    #[serde(default)]
    pub timetable: Timetable,
    /// Set once the contact's timetable has been interleaved with new entries.
    #[serde(default)]
    pub interleaved: bool,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: TagSet::new(),
            modules: ModuleSet::new(),
            timetable: Timetable::new(),
            interleaved: false,
        }
    }

    /// Identity check used for duplicate detection; weaker than `==`.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.modules.is_empty() {
            let codes: Vec<&str> = self.modules.iter().map(|m| m.as_str()).collect();
            write!(f, " Modules: {}", codes.join(", "))?;
        }
        if !self.tags.is_empty() {
            write!(f, " Tags: ")?;
            for tag in self.tags.iter() {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}
