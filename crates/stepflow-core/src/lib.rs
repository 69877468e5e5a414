#![forbid(unsafe_code)]

//! Semantic model for process-mining transition graphs.
//!
//! This crate owns the input side of the pipeline: decoding the analytics
//! wire payloads, the canonical deduplicated transition set, and synthesis
//! of transitions from ranked variant traces. Layering, positioning, and
//! critical-path selection live in `stepflow-layout`.

pub mod model;
pub mod normalize;
pub mod payload;

pub use model::{GraphInputs, LabelHints, StepId, Transition, VariantTrace};
pub use model::{START_STEP_ID, compact_step_id};
pub use normalize::canonical_transitions;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
    #[error("payload JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
