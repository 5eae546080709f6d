//! Foundation types for the folio terminal.
//!
//! This crate contains the platform-agnostic core types shared by all
//! folio crates: error types, configuration, and input events.

pub mod config;
pub mod error;
pub mod input;
