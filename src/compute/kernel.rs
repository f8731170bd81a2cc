use crate::store::{Cession, RankFlow};

/// Evaluates one rank from what its subordinate ceded.
///
/// `subordinate_ceded` is 0 for the base rank. Every rank contributes its own
/// base unit, so `collected >= 1.0` for any valid input.
#[inline(always)]
pub fn evaluate_rank(direct_subordinate_count: u32, cession: Cession, subordinate_ceded: f64) -> RankFlow {
    let collected = 1.0 + f64::from(direct_subordinate_count) * subordinate_ceded;
    let ceded = if cession.must_cede { collected * cession.fraction } else { 0.0 };
    RankFlow { collected, ceded, usable: collected - ceded }
}
