//! Canonical, deduplicated transition set.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::model::{StepId, Transition, VariantTrace};

/// Produces the canonical transition set for one build pass.
///
/// Raw transitions win whenever any are present; otherwise consecutive
/// variant steps are folded into synthetic transitions. Duplicate
/// `(from, to)` pairs never survive: among raw transitions the first
/// occurrence wins and later duplicates are dropped, while synthesized
/// pairs sum their weights. Both inputs empty yields an empty set, not an
/// error.
pub fn canonical_transitions(raw: &[Transition], variants: &[VariantTrace]) -> Vec<Transition> {
    if !raw.is_empty() {
        let mut by_pair: IndexMap<(StepId, StepId), Transition> = IndexMap::new();
        for t in raw {
            by_pair
                .entry((t.from.clone(), t.to.clone()))
                .or_insert_with(|| t.clone());
        }
        return by_pair.into_values().collect();
    }
    synthesize(variants)
}

fn synthesize(variants: &[VariantTrace]) -> Vec<Transition> {
    // Insertion order is semantic: it fixes edge iteration everywhere
    // downstream (relaxation, adjacency grouping, bucket fill).
    let mut counts: IndexMap<(StepId, StepId), u64> = IndexMap::new();
    for variant in variants {
        let weight = variant_weight(variant.frequency);
        for pair in variant.steps.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if from.is_empty() || to.is_empty() {
                continue;
            }
            *counts.entry((from.clone(), to.clone())).or_insert(0) += weight;
        }
    }

    let mut outgoing: FxHashMap<&str, u64> = FxHashMap::default();
    for ((from, _), count) in &counts {
        *outgoing.entry(from.as_str()).or_insert(0) += count;
    }

    counts
        .iter()
        .map(|((from, to), &count)| {
            let denom = outgoing.get(from.as_str()).copied().unwrap_or(1).max(1);
            Transition {
                from: from.clone(),
                to: to.clone(),
                count,
                probability: count as f64 / denom as f64,
                p95_delay_ms: Some(synthetic_p95_ms(count)),
            }
        })
        .collect()
}

/// Pseudo-count contributed per traversal of a variant pair. A variant seen
/// 60% of the time contributes 60 per consecutive pair, floored at 1 so rare
/// variants still register.
fn variant_weight(frequency: f64) -> u64 {
    (frequency * 100.0).round().max(1.0) as u64
}

/// Crude traffic-proportional stand-in when no timing was captured.
fn synthetic_p95_ms(count: u64) -> u64 {
    ((1.0 + count as f64 / 20.0) * 120_000.0).round() as u64
}
