//! Host capability traits and desktop implementations.
//!
//! The terminal core decides *when* to open a link or start a download and
//! with *what* target; the hosting environment decides how. These traits are
//! that boundary. The desktop implementations here are best-effort stand-ins
//! for a browser host.

pub mod services;

pub use services::{Clock, DesktopHost, HostActions, SystemClock, Timestamp};
