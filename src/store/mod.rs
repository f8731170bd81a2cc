//! Rank configuration: handles, construction parameters and columnar storage.
pub mod registry;
pub mod types;

pub use registry::Registry;
pub use types::{Cession, RankFlow, RankId, RankSpec, DEFAULT_CEDE_FRACTION};
