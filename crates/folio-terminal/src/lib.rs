//! Command interpreter for the folio terminal.
//!
//! The terminal is a registry-plus-executor dispatch system. A static
//! [`CommandRegistry`] resolves a submitted line to a [`CommandKind`] using
//! order-sensitive matching; the [`CommandExecutor`] runs the behavior,
//! appending typed entries to the session's [`LogStore`] and triggering
//! host side effects where a command calls for them.

pub mod catalog;
pub mod executor;
pub mod history;
pub mod log;
pub mod registry;
pub mod session;

/// A single project the `open` command can resolve.
pub use catalog::{ProjectCatalog, ProjectEntry};
/// Interprets raw input lines and dispatches behaviors.
pub use executor::{CommandExecutor, Host};
/// Chronological buffer of submitted lines with recall navigation.
pub use history::HistoryBuffer;
/// Append-only ordered sequence of typed log entries.
pub use log::{LogEntry, LogKind, LogStore};
/// Static command table with alias resolution and autocomplete.
pub use registry::{CommandKind, CommandRegistry, Dispatch};
/// Mutable terminal state owned by one session object.
pub use session::{OverlayMode, TerminalSession};
