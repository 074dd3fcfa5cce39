//! TUI screen implementations.

pub mod profile;

pub use profile::{ProfileScreen, draw_profile};
