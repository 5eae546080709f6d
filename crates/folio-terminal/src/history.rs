//! Chronological buffer of submitted input lines with recall navigation.

/// History of raw submitted lines, verbatim, in submission order.
///
/// No dedup, no trimming, no cap: every non-empty submission the executor
/// accepts is stored byte-for-byte. Navigation walks the buffer in
/// reverse-chronological order through a cursor.
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    /// Steps back from the newest entry (0 = newest). `None` = no selection.
    cursor: Option<usize>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw line unconditionally.
    pub fn push(&mut self, raw: &str) {
        self.entries.push(raw.to_string());
    }

    /// All entries in submission order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk backward from the most recent entry toward the oldest,
    /// clamping at the oldest. Returns the recalled line.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(c) => (c + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.entries.get(self.entries.len() - 1 - next).map(|s| s.as_str())
    }

    /// Walk forward toward the newest entry. Moving past the newest clears
    /// the cursor and returns `None` (the input resets to empty).
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(self.entries.len() - c).map(|s| s.as_str())
            },
            _ => {
                self.cursor = None;
                None
            },
        }
    }

    /// Drop the selection; the next `previous` starts from the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> HistoryBuffer {
        let mut h = HistoryBuffer::new();
        for line in lines {
            h.push(line);
        }
        h
    }

    #[test]
    fn push_stores_verbatim() {
        let mut h = HistoryBuffer::new();
        h.push("  ECHO Hello World  ");
        assert_eq!(h.entries(), &["  ECHO Hello World  ".to_string()]);
    }

    #[test]
    fn push_never_dedups() {
        let h = buffer(&["clear", "clear", "clear"]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn previous_walks_newest_to_oldest() {
        let mut h = buffer(&["one", "two", "three"]);
        assert_eq!(h.previous(), Some("three"));
        assert_eq!(h.previous(), Some("two"));
        assert_eq!(h.previous(), Some("one"));
    }

    #[test]
    fn previous_clamps_at_oldest() {
        let mut h = buffer(&["one", "two"]);
        h.previous();
        h.previous();
        assert_eq!(h.previous(), Some("one"));
        assert_eq!(h.previous(), Some("one"));
    }

    #[test]
    fn previous_on_empty_is_none() {
        let mut h = HistoryBuffer::new();
        assert_eq!(h.previous(), None);
    }

    #[test]
    fn next_walks_back_toward_newest() {
        let mut h = buffer(&["one", "two", "three"]);
        h.previous();
        h.previous();
        h.previous(); // at "one"
        assert_eq!(h.next(), Some("two"));
        assert_eq!(h.next(), Some("three"));
    }

    #[test]
    fn next_past_newest_clears_selection() {
        let mut h = buffer(&["one"]);
        h.previous();
        assert_eq!(h.next(), None);
        // Back to no selection: previous starts from the newest again.
        assert_eq!(h.previous(), Some("one"));
    }

    #[test]
    fn next_without_selection_is_none() {
        let mut h = buffer(&["one"]);
        assert_eq!(h.next(), None);
    }

    #[test]
    fn reset_cursor_restarts_navigation() {
        let mut h = buffer(&["one", "two"]);
        h.previous();
        h.previous();
        h.reset_cursor();
        assert_eq!(h.previous(), Some("two"));
    }
}
