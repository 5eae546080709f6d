//! Platform-agnostic input event types.
//!
//! The hosting environment maps its native key events to these enums.
//! The core terminal never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event observed by the terminal or the overlay listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character typed.
    Char(char),
    /// Submit the current input line.
    Enter,
    /// Delete-left.
    Backspace,
    /// Accept the current autocomplete suggestion.
    Tab,
    /// Dismiss / cancel.
    Escape,
    /// History recall: older entry.
    ArrowUp,
    /// History recall: newer entry.
    ArrowDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_key_equality() {
        assert_eq!(Key::Char('a'), Key::Char('a'));
        assert_ne!(Key::Char('a'), Key::Char('b'));
    }

    #[test]
    fn named_keys_are_distinct() {
        let keys = [
            Key::Enter,
            Key::Backspace,
            Key::Tab,
            Key::Escape,
            Key::ArrowUp,
            Key::ArrowDown,
        ];
        for (i, a) in keys.iter().enumerate() {
            for (j, b) in keys.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }

    #[test]
    fn key_debug_format() {
        assert!(format!("{:?}", Key::Tab).contains("Tab"));
    }
}
