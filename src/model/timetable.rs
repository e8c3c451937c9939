// File: ./src/model/timetable.rs
use crate::error::ParseError;
use crate::model::Field;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const DAY_CONSTRAINTS: &str =
    "Days should be a weekday name, e.g. monday or mon (case-insensitive)";
pub const TIME_CONSTRAINTS: &str = "Times should be a 24-hour range of the form HHMM-HHMM, \
and the start should be before the end, e.g. 0900-1030";
pub const ACTIVITY_CONSTRAINTS: &str =
    "Activities should only contain alphanumeric characters and spaces, and it should not be blank";

fn parse_day(raw: &str) -> Result<Weekday, ParseError> {
    // chrono accepts "mon" and "monday" in any case.
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| ParseError::invalid_field(Field::ActivityDay, raw, DAY_CONSTRAINTS))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::invalid_field(Field::ActivityTime, raw, TIME_CONSTRAINTS);
        let (start, end) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let parse_hhmm = |s: &str| {
            if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            NaiveTime::parse_from_str(s, "%H%M").ok()
        };
        let start = parse_hhmm(start.trim()).ok_or_else(invalid)?;
        let end = parse_hhmm(end.trim()).ok_or_else(invalid)?;
        if start >= end {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H%M"), self.end.format("%H%M"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub day: Weekday,
    pub slot: TimeSlot,
    pub activity: String,
}

impl TimetableEntry {
    /// Builds an entry from the three raw parts. Errors are reported for the
    /// first invalid part in day, time, activity order.
    pub fn parse(day: &str, time: &str, activity: &str) -> Result<Self, ParseError> {
        let day = parse_day(day)?;
        let slot = TimeSlot::parse(time)?;
        let label = activity.trim();
        let mut chars = label.chars();
        let valid_label = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid_label {
            return Err(ParseError::invalid_field(
                Field::Activity,
                activity,
                ACTIVITY_CONSTRAINTS,
            ));
        }
        Ok(Self {
            day,
            slot,
            activity: label.to_string(),
        })
    }

    /// Same day with overlapping slots.
    pub fn clashes_with(&self, other: &TimetableEntry) -> bool {
        self.day == other.day && self.slot.overlaps(&other.slot)
    }

    fn sort_key(&self) -> (u32, NaiveTime, NaiveTime) {
        (
            self.day.num_days_from_monday(),
            self.slot.start,
            self.slot.end,
        )
    }
}

impl Ord for TimetableEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.activity.cmp(&other.activity))
    }
}

impl PartialOrd for TimetableEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.slot, self.activity)
    }
}

/// Weekly schedule, always kept sorted by day and start time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(entry: TimetableEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts keeping chronological order. Identical entries are ignored.
    pub fn insert(&mut self, entry: TimetableEntry) -> bool {
        match self.entries.binary_search(&entry) {
            Ok(_) => false,
            Err(pos) => {
                self.entries.insert(pos, entry);
                true
            }
        }
    }

    /// Merges both schedules into one chronological sequence.
    pub fn interleave(&self, other: &Timetable) -> Timetable {
        let mut merged = self.clone();
        for entry in &other.entries {
            merged.insert(entry.clone());
        }
        merged
    }
}

impl FromIterator<TimetableEntry> for Timetable {
    fn from_iter<I: IntoIterator<Item = TimetableEntry>>(iter: I) -> Self {
        let mut timetable = Timetable::new();
        for entry in iter {
            timetable.insert(entry);
        }
        timetable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str, time: &str, label: &str) -> TimetableEntry {
        TimetableEntry::parse(day, time, label).unwrap()
    }

    #[test]
    fn test_day_names_case_insensitive() {
        assert_eq!(entry("MON", "0900-1000", "Lecture").day, Weekday::Mon);
        assert_eq!(entry("friday", "0900-1000", "Gym").day, Weekday::Fri);
        assert!(TimetableEntry::parse("funday", "0900-1000", "Gym").is_err());
    }

    #[test]
    fn test_time_slot_rules() {
        assert!(TimeSlot::parse("0900-1030").is_ok());
        assert!(TimeSlot::parse("1030-0900").is_err());
        assert!(TimeSlot::parse("0900-0900").is_err());
        assert!(TimeSlot::parse("900-1030").is_err());
        assert!(TimeSlot::parse("2500-2600").is_err());
        assert!(TimeSlot::parse("0900").is_err());
        assert_eq!(TimeSlot::parse("0905-1130").unwrap().to_string(), "0905-1130");
    }

    #[test]
    fn test_first_invalid_part_reported() {
        let err = TimetableEntry::parse("mon", "bad", "").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFieldValue {
                field: Field::ActivityTime,
                ..
            }
        ));
    }

    #[test]
    fn test_interleave_is_chronological_and_deduplicated() {
        let a: Timetable = [
            entry("wed", "1400-1500", "Tutorial"),
            entry("mon", "0900-1000", "Lecture"),
        ]
        .into_iter()
        .collect();
        let b: Timetable = [
            entry("tue", "1000-1200", "Lab"),
            entry("mon", "0900-1000", "Lecture"),
        ]
        .into_iter()
        .collect();

        let merged = a.interleave(&b);
        let labels: Vec<&str> = merged.entries().iter().map(|e| e.activity.as_str()).collect();
        assert_eq!(labels, vec!["Lecture", "Lab", "Tutorial"]);
    }

    #[test]
    fn test_clash_detection() {
        let lecture = entry("mon", "0900-1100", "Lecture");
        assert!(lecture.clashes_with(&entry("mon", "1000-1200", "Lab")));
        assert!(!lecture.clashes_with(&entry("tue", "1000-1200", "Lab")));
        // Back-to-back slots do not overlap.
        assert!(!lecture.clashes_with(&entry("mon", "1100-1200", "Lab")));
    }

    #[test]
    fn test_activity_label_is_ascii() {
        assert!(TimetableEntry::parse("mon", "0900-1000", "CS2103T Lecture").is_ok());
        for label in ["Café", "体育", "Lab²"] {
            assert!(matches!(
                TimetableEntry::parse("mon", "0900-1000", label),
                Err(ParseError::InvalidFieldValue {
                    field: Field::Activity,
                    ..
                })
            ));
        }
    }
}
