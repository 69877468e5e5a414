#![forbid(unsafe_code)]

//! Headless process-map engine: canonical transitions in, positioned
//! [`GraphModel`] out, with an independent viewport transform alongside.
//!
//! [`build`] is a pure, synchronous, total function. It never fails and
//! never blocks, and it rebuilds the whole model on any input change. Only
//! the JSON payload boundary returns errors; the data-acquisition layer is
//! expected to substitute last-known-good inputs rather than call in with
//! invalid data.

pub use stepflow_core::{
    Error as PayloadError, GraphInputs, LabelHints, START_STEP_ID, StepId, Transition,
    VariantTrace, canonical_transitions, compact_step_id, payload,
};
pub use stepflow_layout::style::{delay_heat, path_data, stroke_color};
pub use stepflow_layout::{
    GRAPH_HEIGHT, GRAPH_WIDTH, GraphEdge, GraphModel, GraphNode, build_graph_model,
};
pub use stepflow_view::{MAX_ZOOM, MIN_ZOOM, Viewport, ViewportState, ZOOM_STEP};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Payload(#[from] stepflow_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Builds a complete graph model from one set of inputs.
///
/// Raw transitions win over variant traces; both empty yields an empty
/// model, not an error.
pub fn build(inputs: &GraphInputs) -> GraphModel {
    let transitions = canonical_transitions(&inputs.transitions, &inputs.variants);
    build_graph_model(&transitions, &inputs.label_hints, &inputs.seed)
}

/// Decodes raw analytics payloads and builds the model in one call.
///
/// `edges` and `variants` are the JSON bodies of the pattern detail
/// endpoints; either may be an empty array.
pub fn build_from_payload(
    edges: &serde_json::Value,
    variants: &serde_json::Value,
    label_hints: LabelHints,
    seed: &str,
) -> Result<GraphModel> {
    let inputs = GraphInputs {
        transitions: payload::transitions_from_value(edges)?,
        variants: payload::variants_from_value(variants)?,
        label_hints,
        seed: seed.to_string(),
    };
    Ok(build(&inputs))
}
