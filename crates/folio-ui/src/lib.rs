//! Overlay presentation layer: the matrix-rain easter egg.
//!
//! The core terminal only flips a boolean; this crate owns everything
//! visual about the overlay, plus the key listener that dismisses it.

pub mod overlay;

pub use overlay::{OverlayController, RainAnimation};
