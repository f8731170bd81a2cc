use super::types::*;
use crate::error::ConfigurationError;
use std::collections::HashMap;

/// Columnar storage of rank configuration.
///
/// Links are stored as given; the topology is validated when a `Hierarchy`
/// is built from the registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Columnar Arrays
    pub names: Vec<String>,
    pub counts: Vec<u32>,
    pub cessions: Vec<Cession>,

    // Topology: each rank points down at most once.
    pub subordinates: Vec<Option<RankId>>,

    // Name -> handle lookup, also used for uniqueness checks
    by_name: HashMap<String, RankId>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Validates the rank's parameters and appends it.
    pub fn add_rank(&mut self, spec: RankSpec) -> Result<RankId, ConfigurationError> {
        let RankSpec { name, direct_subordinate_count, subordinate, cession } = spec;

        if name.is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        if self.by_name.contains_key(&name) {
            return Err(ConfigurationError::DuplicateName(name));
        }
        if direct_subordinate_count < 0 {
            return Err(ConfigurationError::NegativeSubordinateCount { rank: name, count: direct_subordinate_count });
        }
        let count = u32::try_from(direct_subordinate_count)
            .map_err(|_| ConfigurationError::MalformedDefinition(
                format!("direct subordinate count of '{}' is too large", name)
            ))?;
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&cession.fraction) {
            return Err(ConfigurationError::CedeFractionOutOfRange { rank: name, value: cession.fraction });
        }

        let id = RankId::new(self.names.len());
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.counts.push(count);
        self.cessions.push(cession);
        self.subordinates.push(subordinate);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<RankId> {
        self.by_name.get(name).copied()
    }

    #[inline(always)]
    pub fn contains(&self, id: RankId) -> bool {
        id.index() < self.names.len()
    }

    #[inline(always)]
    pub fn subordinate(&self, id: RankId) -> Option<RankId> {
        self.subordinates[id.index()]
    }

    #[inline(always)]
    pub fn name(&self, id: RankId) -> &str {
        &self.names[id.index()]
    }
}
