use super::hierarchy::Hierarchy;
use crate::error::{ConfigurationError, HierarchyError};
use crate::store::{Cession, RankId, RankSpec, Registry};

/// Builds a chain from the base upward.
///
/// Each stacked rank takes the previously stacked rank as its subordinate,
/// so wiring always points at an already-constructed rank.
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    title: String,
    registry: Registry,
    top: Option<RankId>,
}

impl HierarchyBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Adds a rank above the current top (or the base, for the first call).
    pub fn stack(
        &mut self,
        name: impl Into<String>,
        direct_subordinate_count: i64,
        cession: Cession,
    ) -> Result<RankId, ConfigurationError> {
        let spec = RankSpec {
            name: name.into(),
            direct_subordinate_count,
            subordinate: self.top,
            cession,
        };
        let id = self.registry.add_rank(spec)?;
        self.top = Some(id);
        Ok(id)
    }

    pub fn top(&self) -> Option<RankId> { self.top }

    pub fn build(self) -> Result<Hierarchy, HierarchyError> {
        Ok(Hierarchy::from_registry(self.registry)?.with_title(self.title))
    }
}
