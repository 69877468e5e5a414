use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved id for the process-entry sentinel. It is always labeled
/// `"Start"` and always sits at layer depth 0.
pub const START_STEP_ID: &str = "__START__";

pub type StepId = String;

/// Display label overrides keyed by step id, in discovery order.
pub type LabelHints = IndexMap<String, String>;

/// One observed (or synthesized) move between two steps.
///
/// Identity is the `(from, to)` pair; the canonical set produced by
/// [`crate::normalize::canonical_transitions`] holds at most one transition
/// per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StepId,
    pub to: StepId,
    /// Observed traversal count.
    pub count: u64,
    /// Share of the source step's outgoing traffic, in [0, 1].
    pub probability: f64,
    /// p95 transition delay in milliseconds, when timing was captured.
    pub p95_delay_ms: Option<u64>,
}

impl Transition {
    /// Stable identity string, also the render-edge id.
    pub fn edge_id(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

/// One ranked, frequency-weighted ordered sequence of steps. Only consulted
/// when no raw transitions are supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantTrace {
    pub rank: i64,
    /// Relative frequency of this variant among all traces, in [0, 1].
    pub frequency: f64,
    pub steps: Vec<StepId>,
}

/// Everything one build pass consumes. Every rebuild receives all inputs
/// explicitly; no state is shared across invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInputs {
    pub transitions: Vec<Transition>,
    pub variants: Vec<VariantTrace>,
    pub label_hints: LabelHints,
    /// Opaque string feeding the deterministic position jitter.
    pub seed: String,
}

/// Short display fallback for step ids that never received a label.
pub fn compact_step_id(id: &str) -> String {
    if id == START_STEP_ID {
        return "START".to_string();
    }
    if id.chars().count() > 10 {
        id.chars().take(8).collect()
    } else {
        id.to_string()
    }
}
