//! hierarchy.rs
//! Wraps the rank registry with its evaluation order and the filled ledger.

use crate::analysis::topology;
use crate::compute::{Engine, Ledger};
use crate::error::{HierarchyError, StructuralError};
use crate::store::{Cession, RankFlow, RankId, Registry};
use tracing::info;

pub const DEFAULT_TITLE: &str = "Pyramid Summary";

/// A validated, fully evaluated rank chain.
///
/// All derived values are computed once when the hierarchy is built and never
/// change afterwards, so a `Hierarchy` can be shared freely between readers
/// and threads.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    title: String,
    registry: Registry,
    order: Vec<RankId>,
    ledger: Ledger,
}

/// Read-only view of one rank and its derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankView<'a> {
    pub id: RankId,
    pub name: &'a str,
    pub direct_subordinate_count: u32,
    pub subordinate: Option<&'a str>,
    pub cession: Cession,
    pub flow: RankFlow,
}

impl Hierarchy {
    /// Validates the topology and evaluates every rank from the base upward.
    pub fn from_registry(registry: Registry) -> Result<Self, HierarchyError> {
        let order = topology::sort(&registry)?;
        let mut ledger = Ledger::new();
        Engine::run(&registry, &order, &mut ledger)?;

        info!(
            ranks = order.len(),
            base = registry.name(order[0]),
            apex = registry.name(order[order.len() - 1]),
            "hierarchy built"
        );

        Ok(Self { title: DEFAULT_TITLE.to_string(), registry, order, ledger })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str { &self.title }

    // A valid chain always has its base rank.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.order.len() }

    /// Rank handles from base to apex.
    pub fn order(&self) -> &[RankId] { &self.order }

    pub fn base(&self) -> RankId { self.order[0] }

    pub fn apex(&self) -> RankId { self.order[self.order.len() - 1] }

    pub fn find(&self, name: &str) -> Option<RankId> { self.registry.find(name) }

    pub fn flow(&self, rank: RankId) -> Result<RankFlow, StructuralError> {
        self.ledger.get(rank).copied().ok_or(StructuralError::UnknownRank(rank.0))
    }

    pub fn collected(&self, rank: RankId) -> Result<f64, StructuralError> {
        Ok(self.flow(rank)?.collected)
    }

    pub fn ceded(&self, rank: RankId) -> Result<f64, StructuralError> {
        Ok(self.flow(rank)?.ceded)
    }

    pub fn usable(&self, rank: RankId) -> Result<f64, StructuralError> {
        Ok(self.flow(rank)?.usable)
    }

    pub fn rank(&self, rank: RankId) -> Result<RankView<'_>, StructuralError> {
        let flow = self.flow(rank)?;
        let idx = rank.index();
        Ok(RankView {
            id: rank,
            name: self.registry.name(rank),
            direct_subordinate_count: self.registry.counts[idx],
            subordinate: self.registry.subordinate(rank).map(|sub| self.registry.name(sub)),
            cession: self.registry.cessions[idx],
            flow,
        })
    }

    /// Iterates ranks from base to apex.
    pub fn ranks(&self) -> impl Iterator<Item = RankView<'_>> + '_ {
        self.order.iter().filter_map(move |&id| self.rank(id).ok())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::HierarchyBuilder;
    use crate::store::RankSpec;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_reference_scenario_values() {
        let h = Hierarchy::reference();
        let expected = [
            ("Octavus", 1.00, 0.50, 0.50),
            ("Septimus", 5.00, 2.50, 2.50),
            ("Sextus", 18.50, 9.25, 9.25),
            ("Quintus", 56.50, 28.25, 28.25),
            ("Quartus", 142.25, 71.125, 71.125),
            ("Tertius", 285.50, 142.75, 142.75),
            ("Dimidius", 429.25, 214.625, 214.625),
            ("Princeps", 430.25, 0.0, 430.25),
        ];

        let views: Vec<_> = h.ranks().collect();
        assert_eq!(views.len(), expected.len());
        for (view, (name, collected, ceded, usable)) in views.iter().zip(expected) {
            assert_eq!(view.name, name);
            assert!((view.flow.collected - collected).abs() < EPS, "{}: collected {}", name, view.flow.collected);
            assert!((view.flow.ceded - ceded).abs() < EPS, "{}: ceded {}", name, view.flow.ceded);
            assert!((view.flow.usable - usable).abs() < EPS, "{}: usable {}", name, view.flow.usable);
        }
    }

    #[test]
    fn test_base_and_apex() {
        let h = Hierarchy::reference();
        assert_eq!(h.rank(h.base()).unwrap().name, "Octavus");
        assert_eq!(h.collected(h.base()).unwrap(), 1.0);
        assert_eq!(h.rank(h.apex()).unwrap().name, "Princeps");
        assert_eq!(h.ceded(h.apex()).unwrap(), 0.0);
        assert_eq!(h.rank(h.apex()).unwrap().subordinate, Some("Dimidius"));
        assert_eq!(h.rank(h.base()).unwrap().subordinate, None);
    }

    #[test]
    fn test_reads_are_stable() {
        let h = Hierarchy::reference();
        let apex = h.apex();
        let first = h.flow(apex).unwrap();
        for _ in 0..3 {
            assert_eq!(h.flow(apex).unwrap(), first);
        }
    }

    #[test]
    fn test_unknown_handle_is_structural_error() {
        let h = Hierarchy::reference();
        assert_eq!(h.usable(RankId(99)).unwrap_err(), StructuralError::UnknownRank(99));
    }

    #[test]
    fn test_lookup_by_name() {
        let h = Hierarchy::reference();
        let tert = h.find("Tertius").unwrap();
        assert!((h.usable(tert).unwrap() - 142.75).abs() < EPS);
        assert!(h.find("Nonus").is_none());
    }

    #[test]
    fn test_zero_count_ignores_subordinate() {
        let mut reg = Registry::new();
        let base = reg.add_rank(RankSpec::base("Base")).unwrap();
        let idle = reg.add_rank(RankSpec::over("Idle", 0, base)).unwrap();
        let h = Hierarchy::from_registry(reg).unwrap();
        assert_eq!(h.collected(idle).unwrap(), 1.0);
    }

    #[test]
    fn test_two_rank_cycle_fails() {
        let mut reg = Registry::new();
        reg.add_rank(RankSpec::over("A", 1, RankId(1))).unwrap();
        reg.add_rank(RankSpec::over("B", 1, RankId(0))).unwrap();
        assert!(matches!(
            Hierarchy::from_registry(reg).unwrap_err(),
            HierarchyError::Structural(StructuralError::Cycle { .. })
        ));
    }

    #[test]
    fn test_concurrent_readers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hierarchy>();

        let h = Hierarchy::reference();
        let apex = h.apex();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| h.collected(apex).unwrap())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 430.25);
            }
        });
    }

    fn chain_strategy() -> impl Strategy<Value = Vec<(u32, bool, f64)>> {
        prop::collection::vec((0u32..12, any::<bool>(), 0.0f64..=1.0), 1..10)
    }

    fn build_chain(levels: &[(u32, bool, f64)]) -> Hierarchy {
        let mut builder = HierarchyBuilder::new("prop");
        for (i, &(count, must_cede, fraction)) in levels.iter().enumerate() {
            let cession = Cession { must_cede, fraction };
            builder.stack(format!("R{}", i), i64::from(count), cession).unwrap();
        }
        builder.build().unwrap()
    }

    proptest! {
        #[test]
        fn prop_flow_invariants(levels in chain_strategy()) {
            let h = build_chain(&levels);
            for view in h.ranks() {
                let f = view.flow;
                prop_assert!(f.collected >= 1.0);
                prop_assert!(f.ceded >= 0.0 && f.ceded <= f.collected);
                prop_assert!((f.collected - (f.ceded + f.usable)).abs() <= 1e-9 * f.collected.max(1.0));
                if !view.cession.must_cede {
                    prop_assert_eq!(f.ceded, 0.0);
                    prop_assert_eq!(f.usable, f.collected);
                }
            }
        }

        #[test]
        fn prop_more_subordinates_collect_more(
            levels in chain_strategy(),
            extra in 1u32..5,
        ) {
            prop_assume!(levels.len() >= 2);
            let h = build_chain(&levels);
            let top = h.apex();
            let below = h.rank(top).unwrap().subordinate.and_then(|name| h.find(name)).unwrap();
            prop_assume!(h.ceded(below).unwrap() > 0.0);

            let mut bumped = levels.clone();
            let last = bumped.len() - 1;
            bumped[last].0 += extra;
            let h2 = build_chain(&bumped);

            prop_assert!(h2.collected(h2.apex()).unwrap() > h.collected(top).unwrap());
        }
    }
}
