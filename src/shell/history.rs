//! Command history
//!
//! Append-only list of submitted lines with a navigation cursor. The cursor
//! lives in `[0, len]`; `len` is the fresh empty line below the newest entry.
//!
//! A line already present anywhere in history is not appended again.

/// Command history with a navigation cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History pre-filled with `entries` (duplicates dropped), cursor past the end
    pub fn seeded<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        history
    }

    /// Record a submitted line. Returns true if it was appended.
    ///
    /// Empty lines and lines already recorded are skipped. The cursor is
    /// reset past the end either way.
    pub fn push(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();
        let appended = if line.is_empty() || self.entries.contains(&line) {
            false
        } else {
            self.entries.push(line);
            true
        };
        self.cursor = self.entries.len();
        appended
    }

    /// Move towards older entries. Returns the entry now under the cursor.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Move towards newer entries. Returns None at the fresh line.
    pub fn newer(&mut self) -> Option<&str> {
        self.cursor = (self.cursor + 1).min(self.entries.len());
        self.current()
    }

    /// Entry under the cursor, None at the fresh line
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// `history` command listing: 1-based index right-aligned to 4
    pub fn listing(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>4} {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_resets_cursor() {
        let mut history = History::new();
        history.push("help");
        history.push("about");
        assert_eq!(history.cursor(), 2);
        history.older();
        assert_eq!(history.cursor(), 1);
        history.push("ls");
        assert_eq!(history.cursor(), 3);
    }

    #[test]
    fn test_push_skips_any_existing_entry() {
        let mut history = History::new();
        assert!(history.push("ls"));
        assert!(history.push("pwd"));
        assert!(!history.push("ls"));
        assert_eq!(history.entries(), &["ls".to_string(), "pwd".to_string()]);
    }

    #[test]
    fn test_push_skips_empty() {
        let mut history = History::new();
        assert!(!history.push(""));
        assert!(history.is_empty());
    }

    #[test]
    fn test_navigation() {
        let mut history = History::seeded(["help", "about"]);
        assert_eq!(history.older(), Some("about"));
        assert_eq!(history.older(), Some("help"));
        assert_eq!(history.newer(), Some("about"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_prev_clamps_at_oldest() {
        let mut history = History::seeded(["help"]);
        assert_eq!(history.older(), Some("help"));
        assert_eq!(history.older(), Some("help"));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_next_clamps_at_fresh_line() {
        let mut history = History::seeded(["help"]);
        assert_eq!(history.newer(), None);
        assert_eq!(history.newer(), None);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_prev_on_empty() {
        let mut history = History::new();
        assert_eq!(history.older(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_listing() {
        let history = History::seeded(["help", "about"]);
        assert_eq!(history.listing(), "   1 help\n   2 about");
    }
}
