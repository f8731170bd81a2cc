use crate::store::{Registry, RankId};
use crate::error::StructuralError;

/// Orders the ranks so that every subordinate appears before its superior.
///
/// For a valid chain the result runs base to apex. Besides cycles, the
/// registry is rejected when a link points outside it, when two ranks share a
/// subordinate, or when there is not exactly one base rank.
pub fn sort(registry: &Registry) -> Result<Vec<RankId>, StructuralError> {
    check_links(registry)?;

    let count = registry.count();
    let mut order = Vec::with_capacity(count);
    let mut state = vec![VisitState::None; count];

    // Edges point Superior -> Subordinate. Post-order DFS over them places
    // the base first.
    for i in 0..count {
        if state[i] == VisitState::None {
            visit(RankId::new(i), registry, &mut state, &mut order)?;
        }
    }

    check_linear(registry)?;
    Ok(order)
}

#[derive(Clone, PartialEq, Eq)]
enum VisitState {
    None,
    Visiting, // Used for cycle detection
    Visited,
}

fn visit(
    rank: RankId,
    registry: &Registry,
    state: &mut Vec<VisitState>,
    order: &mut Vec<RankId>,
) -> Result<(), StructuralError> {
    let idx = rank.index();

    match state[idx] {
        VisitState::Visited => return Ok(()),
        VisitState::Visiting => {
            return Err(StructuralError::Cycle { rank: registry.name(rank).to_string() })
        }
        VisitState::None => state[idx] = VisitState::Visiting,
    }

    if let Some(sub) = registry.subordinate(rank) {
        visit(sub, registry, state, order)?;
    }

    state[idx] = VisitState::Visited;
    order.push(rank);
    Ok(())
}

fn check_links(registry: &Registry) -> Result<(), StructuralError> {
    for i in 0..registry.count() {
        let rank = RankId::new(i);
        if let Some(sub) = registry.subordinate(rank) {
            if !registry.contains(sub) {
                return Err(StructuralError::DanglingSubordinate {
                    rank: registry.name(rank).to_string(),
                    subordinate: format!("#{}", sub.0),
                });
            }
        }
    }
    Ok(())
}

fn check_linear(registry: &Registry) -> Result<(), StructuralError> {
    let count = registry.count();
    let mut superior: Vec<Option<RankId>> = vec![None; count];
    let mut bases = 0;

    for i in 0..count {
        let rank = RankId::new(i);
        match registry.subordinate(rank) {
            None => bases += 1,
            Some(sub) => {
                if let Some(first) = superior[sub.index()] {
                    return Err(StructuralError::Branching {
                        subordinate: registry.name(sub).to_string(),
                        first: registry.name(first).to_string(),
                        second: registry.name(rank).to_string(),
                    });
                }
                superior[sub.index()] = Some(rank);
            }
        }
    }

    if bases != 1 {
        return Err(StructuralError::BaseCount(bases));
    }
    Ok(())
}
