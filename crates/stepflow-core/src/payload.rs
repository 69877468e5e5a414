//! Wire shapes of the analytics API, decoupled from the semantic model.
//!
//! The data-acquisition layer is responsible for substituting last-known-good
//! payloads on network failure; this module only turns already-fetched JSON
//! into semantic inputs, rejecting values the engine must never observe.

use serde::Deserialize;
use serde_json::Value;

use crate::model::{Transition, VariantTrace};
use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct EdgePayload {
    pub from_step_hash: String,
    pub to_step_hash: String,
    pub count: u64,
    pub probability: f64,
    #[serde(default)]
    pub timing: TimingPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimingPayload {
    #[serde(default)]
    pub p95_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantPayload {
    pub rank: i64,
    pub frequency: f64,
    #[serde(default)]
    pub steps: Vec<StepPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepPayload {
    pub hash: String,
}

/// Decodes an `edges` response body into semantic transitions.
pub fn transitions_from_value(value: &Value) -> Result<Vec<Transition>> {
    let payloads: Vec<EdgePayload> = Vec::deserialize(value)?;
    payloads.into_iter().map(Transition::try_from).collect()
}

/// Decodes a `variants` response body into semantic variant traces.
pub fn variants_from_value(value: &Value) -> Result<Vec<VariantTrace>> {
    let payloads: Vec<VariantPayload> = Vec::deserialize(value)?;
    payloads.into_iter().map(VariantTrace::try_from).collect()
}

impl TryFrom<EdgePayload> for Transition {
    type Error = Error;

    fn try_from(payload: EdgePayload) -> Result<Self> {
        let probability = unit_interval("edge probability", payload.probability)?;
        Ok(Self {
            from: payload.from_step_hash,
            to: payload.to_step_hash,
            count: payload.count,
            probability,
            p95_delay_ms: payload.timing.p95_ms,
        })
    }
}

impl TryFrom<VariantPayload> for VariantTrace {
    type Error = Error;

    fn try_from(payload: VariantPayload) -> Result<Self> {
        let frequency = unit_interval("variant frequency", payload.frequency)?;
        Ok(Self {
            rank: payload.rank,
            frequency,
            steps: payload.steps.into_iter().map(|s| s.hash).collect(),
        })
    }
}

fn unit_interval(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidPayload {
            message: format!("{what} out of range: {value}"),
        })
    }
}
