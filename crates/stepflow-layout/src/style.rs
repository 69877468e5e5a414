//! Cosmetic derivations a renderer needs but never has to recompute.

use crate::model::{GraphEdge, GraphModel};

/// Relative delay of an edge against the slowest edge in the model, in
/// [0, 1]. Denominator floored at 1 so delay-free models stay cold.
pub fn delay_heat(edge: &GraphEdge, max_delay_ms: u64) -> f64 {
    (edge.delay_ms as f64 / max_delay_ms.max(1) as f64).clamp(0.0, 1.0)
}

/// HSL stroke for an edge: cool blue for fast transitions shifting warm as
/// the p95 delay approaches the model maximum.
pub fn stroke_color(edge: &GraphEdge, max_delay_ms: u64) -> String {
    let heat = delay_heat(edge, max_delay_ms);
    let hue = 208.0 - heat * 170.0;
    let sat = 45.0 + heat * 20.0;
    let light = 66.0 - heat * 19.0;
    format!("hsl({hue} {sat}% {light}%)")
}

/// SVG path data for an edge's quadratic render curve.
pub fn path_data(model: &GraphModel, edge: &GraphEdge) -> String {
    let (from, to) = model.endpoints(edge);
    format!(
        "M {} {} Q {} {} {} {}",
        from.x, from.y, edge.control_x, edge.control_y, to.x, to.y
    )
}
