//! Cession pyramid: a linear chain of ranks where each rank collects from the
//! rank below, cedes a fraction upward and keeps the rest.
//!
//! The model (`chain`) is validated and fully evaluated on construction; the
//! presenters in `display` only read from it.

pub mod analysis;
pub mod chain;
pub mod compute;
pub mod config;
pub mod display;
pub mod error;
pub mod store;

pub use chain::{ChainDefinition, Hierarchy, HierarchyBuilder, RankView};
pub use config::Theme;
pub use error::{ConfigurationError, HierarchyError, StructuralError};
pub use store::{Cession, RankFlow, RankId, RankSpec};
