// File: ./src/tokenizer.rs
//! Lexical splitting of command arguments into `prefix/value` pairs.
use std::collections::HashMap;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Prefix {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    Module,
    ActivityDay,
    ActivityTime,
    Activity,
}

impl Prefix {
    pub fn marker(&self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Phone => "p/",
            Prefix::Email => "e/",
            Prefix::Address => "a/",
            Prefix::Tag => "t/",
            Prefix::Module => "m/",
            Prefix::ActivityDay => "day/",
            Prefix::ActivityTime => "time/",
            Prefix::Activity => "act/",
        }
    }

    pub fn all() -> Vec<Prefix> {
        Prefix::iter().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order. Empty when absent.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }
}

/// Occurrences of `prefix` that start the string or follow whitespace.
fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    args.match_indices(prefix.marker())
        .filter(|(pos, _)| {
            args[..*pos]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace)
        })
        .map(|(pos, _)| (pos, prefix))
        .collect()
}

/// Splits `args` into a preamble and the values following each of `prefixes`.
/// Values are trimmed; nothing else is interpreted.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|p| find_prefix_positions(args, *p))
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.marker().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
