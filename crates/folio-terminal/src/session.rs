//! Terminal session state: log store, history buffer, overlay flag.

use folio_host::Timestamp;

use crate::history::HistoryBuffer;
use crate::log::{LogKind, LogStore};

/// The full-screen "easter egg" overlay state.
///
/// Activated only by the `matrix` command behavior; deactivated by the
/// overlay's own key listener or by any new submission through the
/// executor. No other component flips this flag.
#[derive(Debug, Default)]
pub struct OverlayMode {
    active: bool,
}

impl OverlayMode {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// All mutable terminal state, owned by one object.
///
/// The executor holds the session; the rendering layer reads the log
/// sequence, the history cursor, and the overlay flag through it. There
/// are no ambient singletons.
#[derive(Debug, Default)]
pub struct TerminalSession {
    pub logs: LogStore,
    pub history: HistoryBuffer,
    pub overlay: OverlayMode,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the welcome entries shown before the first prompt.
    pub fn greet(&mut self, at: Timestamp) {
        self.logs
            .append(LogKind::Info, "Welcome to the portfolio terminal!", at);
        self.logs
            .append(LogKind::Output, "Type \"help\" for available commands.", at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_defaults_inactive() {
        let overlay = OverlayMode::default();
        assert!(!overlay.is_active());
    }

    #[test]
    fn overlay_activate_deactivate() {
        let mut overlay = OverlayMode::default();
        overlay.activate();
        assert!(overlay.is_active());
        overlay.deactivate();
        assert!(!overlay.is_active());
    }

    #[test]
    fn new_session_is_empty() {
        let session = TerminalSession::new();
        assert!(session.logs.is_empty());
        assert!(session.history.is_empty());
        assert!(!session.overlay.is_active());
    }

    #[test]
    fn greet_appends_welcome_pair() {
        let mut session = TerminalSession::new();
        session.greet(Timestamp::default());
        assert_eq!(session.logs.len(), 2);
        assert_eq!(session.logs.entries()[0].kind, LogKind::Info);
        assert_eq!(session.logs.entries()[1].kind, LogKind::Output);
        // Greeting is log-only; it is not a submission.
        assert!(session.history.is_empty());
    }
}
