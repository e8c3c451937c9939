// File: ./src/history.rs
use std::collections::VecDeque;

/// Bounded log of raw command lines, oldest first.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl CommandHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub fn add(&mut self, line: &str) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_dropped_first() {
        let mut h = CommandHistory::new(2);
        h.add("list");
        h.add("edit 1 n/Amy");
        h.add("listactivity 1");
        let all: Vec<&str> = h.entries().collect();
        assert_eq!(all, vec!["edit 1 n/Amy", "listactivity 1"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut h = CommandHistory::new(0);
        h.add("list");
        assert!(h.is_empty());
    }
}
