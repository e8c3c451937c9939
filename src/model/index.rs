use crate::error::ParseError;
use std::fmt;

/// Position of a person in the displayed list. Stored zero-based, shown one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Panics on zero; only for literals in tests and sample data.
    pub fn from_one_based(i: usize) -> Self {
        assert!(i > 0, "one-based index must be positive");
        Self(i - 1)
    }

    /// Trims `raw` and accepts only unsigned, non-zero decimal integers.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        let invalid = || ParseError::InvalidIndex {
            raw_input: raw.to_string(),
        };
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Self(n - 1)),
            _ => Err(invalid()),
        }
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(Index::parse("1").unwrap().zero_based(), 0);
        assert_eq!(Index::parse("  42 ").unwrap().one_based(), 42);
        assert_eq!(Index::parse("007").unwrap().one_based(), 7);
    }

    #[test]
    fn test_rejects_everything_else() {
        for raw in ["", "  ", "0", "-1", "+1", "1a", "a", "1 2", "1.0", "99999999999999999999999"] {
            assert!(
                matches!(Index::parse(raw), Err(ParseError::InvalidIndex { .. })),
                "{raw:?} should be rejected"
            );
        }
    }
}
