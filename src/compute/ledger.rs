//! ledger.rs
//! Dense memo of derived rank values, indexed by `RankId`.

use crate::store::{RankFlow, RankId};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    values: Vec<Option<RankFlow>>,
}

impl Ledger {
    pub fn new() -> Self { Self::default() }

    pub fn ensure_capacity(&mut self, size: usize) {
        if self.values.len() < size {
            self.values.resize(size, None);
        }
    }

    #[inline(always)]
    pub fn get(&self, rank: RankId) -> Option<&RankFlow> {
        self.values.get(rank.index())?.as_ref()
    }

    /// Stores a value once. A second insert for the same rank is ignored so a
    /// cached value can never change for the life of the ledger.
    pub fn insert(&mut self, rank: RankId, flow: RankFlow) -> &RankFlow {
        let idx = rank.index();
        if idx >= self.values.len() {
            self.values.resize(idx + 1, None);
        }
        self.values[idx].get_or_insert(flow)
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
