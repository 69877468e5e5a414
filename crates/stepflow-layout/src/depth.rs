//! Layer assignment: shortest hop-distance from the start sentinel.

use rustc_hash::FxHashMap;
use stepflow_core::{START_STEP_ID, Transition};

/// Relaxation passes over the edge set. Twelve passes bound the work on
/// cyclic inputs; nodes only reachable beyond that keep an upper-bound
/// depth, which is acceptable for placement.
const RELAXATION_PASSES: usize = 12;

/// Assigns every id in `ordered` an integer depth.
///
/// The start sentinel seeds depth 0. Each pass walks the edge set in order
/// and proposes `depth(from) + 1` for the destination of every edge whose
/// source already has a depth, keeping the minimum ever proposed, so cycles
/// cannot loop forever. Ids the relaxation never reaches take fallback
/// depths 1, 2, ... in `ordered` order, keeping run-to-run determinism.
pub fn assign_depths(transitions: &[Transition], ordered: &[String]) -> FxHashMap<String, u32> {
    let mut depths: FxHashMap<String, u32> = FxHashMap::default();
    depths.insert(START_STEP_ID.to_string(), 0);

    for _ in 0..RELAXATION_PASSES {
        for t in transitions {
            let Some(&from_depth) = depths.get(&t.from) else {
                continue;
            };
            let proposed = from_depth + 1;
            match depths.get(&t.to) {
                Some(&current) if current <= proposed => {}
                _ => {
                    depths.insert(t.to.clone(), proposed);
                }
            }
        }
    }

    let mut fallback = 1;
    for id in ordered {
        if !depths.contains_key(id) {
            depths.insert(id.clone(), fallback);
            fallback += 1;
        }
    }

    depths
}
