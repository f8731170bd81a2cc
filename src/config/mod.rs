//! Presentation settings chosen before the model is built.
pub mod theme;

pub use theme::{Palette, Theme};
