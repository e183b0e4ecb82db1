//! Utility functions module
//!
//! Layout and text-fitting helpers shared by the screens.

pub mod layout;

// Re-export commonly used functions
pub use layout::{centered_rect, visible_window};
