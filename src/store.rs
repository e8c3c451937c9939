// File: src/store.rs
use crate::error::CommandError;
use crate::model::{Index, Person, Timetable, TimetableEntry};
use std::fmt;

/// Predicate applied to produce the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    /// Matches when any keyword equals a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
}

impl Filter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Filter::All => true,
            Filter::NameKeywords(keywords) => {
                let name = person.name.as_str().to_lowercase();
                name.split_whitespace()
                    .any(|word| keywords.iter().any(|k| k.to_lowercase() == word))
            }
        }
    }
}

/// Two overlapping entries from different interleaved persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clash<'a> {
    pub first: (&'a Person, &'a TimetableEntry),
    pub second: (&'a Person, &'a TimetableEntry),
}

impl Clash<'_> {
    pub fn involves(&self, person: &Person) -> bool {
        self.first.0.is_same_person(person) || self.second.0.is_same_person(person)
    }
}

impl fmt::Display for Clash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, a_entry) = self.first;
        let (b, b_entry) = self.second;
        write!(f, "{} ({}) overlaps {} ({})", a_entry, a.name, b_entry, b.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    filter: Filter,
    /// Positions into `persons` of the displayed entries.
    visible: Vec<usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persons(persons: Vec<Person>) -> Self {
        let mut book = Self::new();
        for p in persons {
            book.add_person(p);
        }
        book
    }

    /// Adds unconditionally; callers check `has_person` first when needed.
    pub fn add_person(&mut self, person: Person) {
        self.persons.push(person);
        self.refresh();
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.visible.iter().map(|&i| &self.persons[i]).collect()
    }

    pub fn update_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = self
            .persons
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p))
            .map(|(i, _)| i)
            .collect();
    }

    fn resolve(&self, index: Index) -> Result<usize, CommandError> {
        self.visible
            .get(index.zero_based())
            .copied()
            .ok_or(CommandError::InvalidPersonIndex {
                index: index.one_based(),
                displayed: self.visible.len(),
            })
    }

    /// Looks up a person by their position in the displayed list.
    pub fn person_at(&self, index: Index) -> Result<&Person, CommandError> {
        let pos = self.resolve(index)?;
        Ok(&self.persons[pos])
    }

    /// Replaces the person at a displayed position. The displayed list is
    /// recomputed, so an edited person may drop out of a name filter.
    pub fn set_person(&mut self, index: Index, person: Person) -> Result<(), CommandError> {
        let pos = self.resolve(index)?;
        log::info!("Updating person '{}'", self.persons[pos].name);
        self.persons[pos] = person;
        self.refresh();
        Ok(())
    }

    /// Chronological merge of the timetables of every interleaved person.
    pub fn combined_timetable(&self) -> Timetable {
        self.persons
            .iter()
            .filter(|p| p.interleaved)
            .fold(Timetable::new(), |acc, p| acc.interleave(&p.timetable))
    }

    /// Overlaps in the combined timetable, in person order. Entries of the
    /// same person never count against each other.
    pub fn combined_clashes(&self) -> Vec<Clash<'_>> {
        let interleaved: Vec<&Person> = self.persons.iter().filter(|p| p.interleaved).collect();
        let mut clashes = Vec::new();
        for (i, a) in interleaved.iter().enumerate() {
            for b in &interleaved[i + 1..] {
                for a_entry in a.timetable.entries() {
                    for b_entry in b.timetable.entries() {
                        if a_entry.clashes_with(b_entry) {
                            clashes.push(Clash {
                                first: (*a, a_entry),
                                second: (*b, b_entry),
                            });
                        }
                    }
                }
            }
        }
        clashes
    }
}
