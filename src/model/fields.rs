// File: ./src/model/fields.rs
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Every user-editable attribute of a person, plus the three parts of a
/// timetable entry. Used to tag validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    Module,
    #[strum(serialize = "activity day")]
    ActivityDay,
    #[strum(serialize = "activity time")]
    ActivityTime,
    Activity,
}

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and these special characters: +_.- \
and may not start or end with a special character. The domain is made up of labels separated \
by periods; each label starts and ends with an alphanumeric character, may contain hyphens, \
and the last label is at least 2 characters long.";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const MODULE_CONSTRAINTS: &str = "Module codes should be 2-3 letters, followed by 4 digits \
and an optional letter suffix, e.g. CS2103T";

/// ASCII alphanumeric words separated by spaces, first char alphanumeric.
fn is_alnum_words(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if !is_alnum_words(trimmed) {
            return Err(ParseError::invalid_field(Field::Name, raw, NAME_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.len() < 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::invalid_field(Field::Phone, raw, PHONE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

const EMAIL_SPECIAL: &[char] = &['+', '_', '.', '-'];

fn is_valid_local_part(local: &str) -> bool {
    let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_SPECIAL.contains(&c))
}

fn is_valid_domain_label(label: &str) -> bool {
    let (Some(first), Some(last)) = (label.chars().next(), label.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        let valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
            let labels: Vec<&str> = domain.split('.').collect();
            is_valid_local_part(local)
                && labels.iter().all(|l| is_valid_domain_label(l))
                && labels.last().is_some_and(|l| l.chars().count() >= 2)
        });
        if !valid {
            return Err(ParseError::invalid_field(Field::Email, raw, EMAIL_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::invalid_field(
                Field::Address,
                raw,
                ADDRESS_CONSTRAINTS,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseError::invalid_field(Field::Tag, raw, TAG_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Insertion-ordered set. Small enough that a linear scan beats hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedSet<T>(Vec<T>);

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns false if the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: PartialEq + Clone> OrderedSet<T> {
    /// Values of `self` first, then the values of `other` not yet present.
    pub fn union(&self, other: &OrderedSet<T>) -> OrderedSet<T> {
        let mut merged = self.clone();
        for value in other.iter() {
            merged.insert(value.clone());
        }
        merged
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

pub type TagSet = OrderedSet<Tag>;

impl TagSet {
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ParseError> {
        raw.iter().map(|t| Tag::parse(t.as_ref())).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleCode(String);

impl ModuleCode {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let code = raw.trim().to_uppercase();
        let letters = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        let rest = &code[letters..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let suffix = &rest[digits..];
        let valid = (2..=3).contains(&letters)
            && digits == 4
            && suffix.len() <= 1
            && suffix.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(ParseError::invalid_field(Field::Module, raw, MODULE_CONSTRAINTS));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub type ModuleSet = OrderedSet<ModuleCode>;

impl ModuleSet {
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ParseError> {
        raw.iter().map(|m| ModuleCode::parse(m.as_ref())).collect()
    }
}

macro_rules! display_inner {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_inner!(Name, Phone, Email, Address, ModuleCode);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(Name::parse("John Doe").is_ok());
        assert!(Name::parse("  Ng 2 ").is_ok());
        assert_eq!(Name::parse("  Alex  ").unwrap().as_str(), "Alex");
        assert!(Name::parse("").is_err());
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("J*hn").is_err());
        assert!(Name::parse("Ⅻ Zoë").is_err());
        assert!(Name::parse("Zoë").is_err());
    }

    #[test]
    fn test_tags_are_ascii_alphanumeric() {
        assert!(Tag::parse("owesMoney2").is_ok());
        for raw in ["²", "café", "友達", "best-friend"] {
            assert!(Tag::parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_phone_rules() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("98765432").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9011p041").is_err());
        assert!(Phone::parse("+6591234567").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(Email::parse("johnd@example.com").is_ok());
        assert!(Email::parse("a.b-c+d_e@sub-domain.example.co").is_ok());
        assert!(Email::parse("peter@x.c").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("peter@").is_err());
        assert!(Email::parse(".peter@example.com").is_err());
        assert!(Email::parse("peter.@example.com").is_err());
        assert!(Email::parse("peter@-example.com").is_err());
        assert!(Email::parse("peter@example..com").is_err());
        assert!(Email::parse("peterexample.com").is_err());
        assert!(Email::parse("zoë@example.com").is_err());
    }

    #[test]
    fn test_module_codes_are_normalized() {
        assert_eq!(ModuleCode::parse("cs2103t").unwrap().as_str(), "CS2103T");
        assert_eq!(ModuleCode::parse("GEA1000").unwrap().as_str(), "GEA1000");
        assert!(ModuleCode::parse("C2103").is_err());
        assert!(ModuleCode::parse("CS210").is_err());
        assert!(ModuleCode::parse("CS2103TT").is_err());
        assert!(ModuleCode::parse("CS2103-").is_err());
    }

    #[test]
    fn test_tag_set_keeps_first_occurrence_order() {
        let tags = TagSet::parse(&["friends", "owesMoney", "friends"]).unwrap();
        let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["friends", "owesMoney"]);
    }

    #[test]
    fn test_tag_set_rejects_blank_tag() {
        let err = TagSet::parse(&["friends", ""]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFieldValue {
                field: Field::Tag,
                ..
            }
        ));
    }
}
