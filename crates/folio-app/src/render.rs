//! ANSI rendering of log entries and rain frames.

use folio_terminal::{LogEntry, LogKind};

const RESET: &str = "\x1b[0m";

/// Escape sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// ANSI color prefix for a log kind.
pub fn color_for(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => "\x1b[36m",
        LogKind::Success => "\x1b[32m",
        LogKind::Error => "\x1b[31m",
        LogKind::Command => "\x1b[90m",
        LogKind::Output => "",
        LogKind::Ascii => "\x1b[32m",
    }
}

/// Format one entry as a colored block, one terminal line per text line.
pub fn format_entry(entry: &LogEntry) -> String {
    let color = color_for(entry.kind);
    if color.is_empty() {
        return entry.text.clone();
    }
    entry
        .text
        .lines()
        .map(|line| format!("{color}{line}{RESET}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a rain frame in matrix green.
pub fn format_frame(rows: &[String]) -> String {
    rows.iter()
        .map(|row| format!("\x1b[32m{row}{RESET}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_host::Timestamp;

    fn entry(kind: LogKind, text: &str) -> LogEntry {
        LogEntry {
            id: 0,
            kind,
            text: text.to_string(),
            created_at: Timestamp::default(),
        }
    }

    #[test]
    fn output_is_uncolored() {
        let e = entry(LogKind::Output, "plain");
        assert_eq!(format_entry(&e), "plain");
    }

    #[test]
    fn error_is_red() {
        let e = entry(LogKind::Error, "bad");
        assert_eq!(format_entry(&e), "\x1b[31mbad\x1b[0m");
    }

    #[test]
    fn multiline_colors_each_line() {
        let e = entry(LogKind::Ascii, "a\nb");
        assert_eq!(format_entry(&e), "\x1b[32ma\x1b[0m\n\x1b[32mb\x1b[0m");
    }

    #[test]
    fn frame_rows_joined() {
        let rows = vec!["xx".to_string(), "yy".to_string()];
        assert!(format_frame(&rows).contains("xx"));
        assert_eq!(format_frame(&rows).lines().count(), 2);
    }
}
