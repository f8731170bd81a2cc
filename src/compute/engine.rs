use crate::compute::kernel;
use crate::compute::ledger::Ledger;
use crate::error::{ConfigurationError, HierarchyError, StructuralError};
use crate::store::{RankId, Registry};
use tracing::debug;

pub struct Engine;

impl Engine {
    /// Evaluates every rank in `order` into the ledger.
    ///
    /// `order` must list each subordinate before its superior (see
    /// `analysis::topology::sort`). Stops at the first rank whose values
    /// overflow to infinity or NaN.
    pub fn run(registry: &Registry, order: &[RankId], ledger: &mut Ledger) -> Result<(), HierarchyError> {
        ledger.ensure_capacity(registry.count());

        for &rank in order {
            if !registry.contains(rank) {
                return Err(StructuralError::UnknownRank(rank.0).into());
            }

            let subordinate_ceded = match registry.subordinate(rank) {
                None => 0.0,
                Some(sub) => match ledger.get(sub) {
                    Some(flow) => flow.ceded,
                    None => {
                        return Err(StructuralError::Unordered { rank: registry.name(rank).to_string() }.into())
                    }
                },
            };

            let idx = rank.index();
            let flow = kernel::evaluate_rank(registry.counts[idx], registry.cessions[idx], subordinate_ceded);
            debug!(
                rank = registry.name(rank),
                collected = flow.collected,
                ceded = flow.ceded,
                usable = flow.usable,
                "rank evaluated"
            );
            if !(flow.collected.is_finite() && flow.ceded.is_finite() && flow.usable.is_finite()) {
                return Err(ConfigurationError::NonFiniteFlow {
                    rank: registry.name(rank).to_string(),
                    collected: flow.collected,
                    ceded: flow.ceded,
                }
                .into());
            }
            ledger.insert(rank, flow);
        }

        Ok(())
    }
}
