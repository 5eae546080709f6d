//! Append-only log store backing the terminal pane.

use folio_host::Timestamp;

/// Display kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Error,
    Command,
    Output,
    Ascii,
}

/// One line (or multi-line block) of terminal output.
///
/// Entries are created only by [`LogStore::append`] and never mutated.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Monotonically increasing, unique for the life of the store.
    pub id: u64,
    pub kind: LogKind,
    /// Literal text to display; may contain embedded newlines.
    pub text: String,
    /// For display/debugging only -- insertion order is authoritative.
    pub created_at: Timestamp,
}

/// Session-scoped ordered sequence of log entries.
///
/// Append-only: no entry is ever removed individually and no reordering
/// operation exists. `clear` empties the sequence but does not reset the
/// id counter, so ids stay unique across a clear.
#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl LogStore {
    /// Create an empty log store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the sequence and return it.
    pub fn append(&mut self, kind: LogKind, text: impl Into<String>, at: Timestamp) -> &LogEntry {
        let entry = LogEntry {
            id: self.next_id,
            kind,
            text: text.into(),
            created_at: at,
        };
        self.next_id += 1;
        self.entries.push(entry);
        // Just pushed, so the vec is non-empty.
        self.entries.last().unwrap_or_else(|| unreachable!())
    }

    /// Empty the sequence.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The full ordered sequence, in append order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Timestamp {
        Timestamp {
            year: 2026,
            month: 2,
            day: 13,
            hour: 14,
            minute: 30,
            second: 0,
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = LogStore::new();
        store.append(LogKind::Info, "first", at());
        store.append(LogKind::Output, "second", at());
        store.append(LogKind::Error, "third", at());
        let texts: Vec<&str> = store.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut store = LogStore::new();
        let a = store.append(LogKind::Info, "a", at()).id;
        let b = store.append(LogKind::Info, "b", at()).id;
        assert!(b > a);
    }

    #[test]
    fn clear_empties_but_ids_stay_unique() {
        let mut store = LogStore::new();
        store.append(LogKind::Output, "old", at());
        let last_id = store.entries()[0].id;
        store.clear();
        assert!(store.is_empty());
        let fresh = store.append(LogKind::Output, "new", at());
        assert!(fresh.id > last_id);
    }

    #[test]
    fn append_returns_the_new_entry() {
        let mut store = LogStore::new();
        let entry = store.append(LogKind::Success, "done", at());
        assert_eq!(entry.kind, LogKind::Success);
        assert_eq!(entry.text, "done");
        assert_eq!(entry.created_at, at());
    }

    #[test]
    fn multiline_text_kept_verbatim() {
        let mut store = LogStore::new();
        let entry = store.append(LogKind::Ascii, "a\nb\nc", at());
        assert_eq!(entry.text.lines().count(), 3);
    }

    #[test]
    fn len_tracks_appends() {
        let mut store = LogStore::new();
        assert_eq!(store.len(), 0);
        store.append(LogKind::Info, "x", at());
        assert_eq!(store.len(), 1);
    }
}
