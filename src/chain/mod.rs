//! The rank chain: construction, validation and the evaluated model.
pub mod builder;
pub mod definition;
pub mod hierarchy;
pub mod reference;

pub use builder::HierarchyBuilder;
pub use definition::{ChainDefinition, RankDefinition};
pub use hierarchy::{Hierarchy, RankView, DEFAULT_TITLE};
pub use reference::REFERENCE_TITLE;
