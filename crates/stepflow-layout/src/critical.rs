//! Greedy dominant-flow selection.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use stepflow_core::{START_STEP_ID, Transition};

/// Upper bound on the walk length; keeps degenerate graphs readable.
const MAX_HOPS: usize = 10;

/// Walks the most locally probable path from the start sentinel and returns
/// the edge ids along it, in order.
///
/// At each node the outgoing transition with the highest probability (ties
/// broken by higher observed count) whose destination was not yet visited is
/// taken, so the path is always simple. Without a start sentinel the walk
/// begins at the first-discovered source node.
///
/// This is deliberately a local-greedy heuristic, not a global most-probable
/// end-to-end path: probabilities are never multiplied along candidate
/// paths and compared globally.
pub fn strongest_path(transitions: &[Transition]) -> Vec<String> {
    let mut outgoing: IndexMap<&str, Vec<&Transition>> = IndexMap::new();
    for t in transitions {
        outgoing.entry(t.from.as_str()).or_default().push(t);
    }
    for group in outgoing.values_mut() {
        group.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then(b.count.cmp(&a.count))
        });
    }

    let start = if outgoing.contains_key(START_STEP_ID) {
        Some(START_STEP_ID)
    } else {
        outgoing.keys().next().copied()
    };
    let Some(mut cursor) = start else {
        return Vec::new();
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    seen.insert(cursor);

    let mut path = Vec::new();
    for _ in 0..MAX_HOPS {
        let next = outgoing
            .get(cursor)
            .and_then(|group| group.iter().find(|t| !seen.contains(t.to.as_str())));
        let Some(next) = next else {
            break;
        };
        path.push(next.edge_id());
        cursor = next.to.as_str();
        seen.insert(cursor);
    }
    path
}
