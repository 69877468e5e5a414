//! The layering → layout body of the pipeline.

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use stepflow_core::{LabelHints, START_STEP_ID, Transition};

use crate::critical::strongest_path;
use crate::depth::assign_depths;
use crate::hash::unit_hash;
use crate::model::{GraphEdge, GraphModel, GraphNode};

pub const GRAPH_WIDTH: f64 = 1024.0;
pub const GRAPH_HEIGHT: f64 = 620.0;

/// Vertical clearance kept above and below every node.
const Y_MARGIN: f64 = 48.0;
/// Peak-to-peak vertical jitter applied inside a depth bucket.
const Y_JITTER: f64 = 52.0;
/// Peak-to-peak perpendicular offset of an edge's curve control point.
const EDGE_BEND: f64 = 92.0;
const BASE_RADIUS: f64 = 8.0;
const RADIUS_GAIN: f64 = 15.0;

/// Builds the positioned graph model from one canonical transition set.
///
/// An empty transition set yields an empty model, not an error. The result
/// is a pure function of `(transitions, label_hints, seed)`.
pub fn build_graph_model(
    transitions: &[Transition],
    label_hints: &LabelHints,
    seed: &str,
) -> GraphModel {
    if transitions.is_empty() {
        return GraphModel::default();
    }

    // Per-node traffic tallies drive ordering, activity, and sizing.
    let mut ids: IndexSet<&str> = IndexSet::new();
    let mut incoming: FxHashMap<&str, u64> = FxHashMap::default();
    let mut outgoing: FxHashMap<&str, u64> = FxHashMap::default();
    for t in transitions {
        ids.insert(t.from.as_str());
        ids.insert(t.to.as_str());
        *outgoing.entry(t.from.as_str()).or_insert(0) += t.count;
        *incoming.entry(t.to.as_str()).or_insert(0) += t.count;
    }
    let flow = |id: &str| {
        incoming.get(id).copied().unwrap_or(0) + outgoing.get(id).copied().unwrap_or(0)
    };

    // Stable ordering: busiest first, ties alphabetical. Fallback depths,
    // default labels, and bucket fill all key off this order.
    let mut ordered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    ordered.sort_by(|a, b| flow(b).cmp(&flow(a)).then_with(|| a.cmp(b)));

    let mut labels = label_hints.clone();
    labels.insert(START_STEP_ID.to_string(), "Start".to_string());
    let mut step_index = 1;
    for id in &ordered {
        if !labels.contains_key(id) {
            labels.insert(id.clone(), format!("Step {step_index:02}"));
            step_index += 1;
        }
    }

    let depths = assign_depths(transitions, &ordered);
    let max_depth = depths.values().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); max_depth as usize + 1];
    for id in &ordered {
        buckets[depths[id.as_str()] as usize].push(id.as_str());
    }

    let max_flow = ordered.iter().map(|id| flow(id)).max().unwrap_or(0).max(1);

    let mut nodes: Vec<GraphNode> = Vec::with_capacity(ordered.len());
    for (depth, bucket) in buckets.iter().enumerate() {
        let x = ((depth as f64 + 0.7) / (max_depth as f64 + 1.4)) * GRAPH_WIDTH;
        for (i, id) in bucket.iter().enumerate() {
            let activity = flow(id) as f64 / max_flow as f64;
            let y_base = ((i as f64 + 1.0) / (bucket.len() as f64 + 1.0)) * GRAPH_HEIGHT;
            let jitter = (unit_hash(&format!("{seed}-{id}")) - 0.5) * Y_JITTER;
            nodes.push(GraphNode {
                id: (*id).to_string(),
                label: labels.get(*id).cloned().unwrap_or_default(),
                depth: depth as u32,
                x,
                y: (y_base + jitter).clamp(Y_MARGIN, GRAPH_HEIGHT - Y_MARGIN),
                activity,
                radius: BASE_RADIUS + activity * RADIUS_GAIN,
            });
        }
    }

    let index_of: FxHashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let critical_path = strongest_path(transitions);
    let critical_set: FxHashSet<&str> = critical_path.iter().map(String::as_str).collect();

    let max_count = transitions.iter().map(|t| t.count).max().unwrap_or(0).max(1);
    let max_delay_ms = transitions
        .iter()
        .map(|t| t.p95_delay_ms.unwrap_or(0))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut edges: Vec<GraphEdge> = Vec::with_capacity(transitions.len());
    for t in transitions {
        // Both endpoints exist by construction; drop rather than panic if
        // that ever stops holding.
        let (Some(&from), Some(&to)) = (
            index_of.get(t.from.as_str()),
            index_of.get(t.to.as_str()),
        ) else {
            continue;
        };
        let id = t.edge_id();
        let (control_x, control_y) = curve_control(&nodes[from], &nodes[to], &id);
        edges.push(GraphEdge {
            is_critical: critical_set.contains(id.as_str()),
            id,
            from,
            to,
            count: t.count,
            probability: t.probability,
            weight: t.probability.max(t.count as f64 / max_count as f64),
            delay_ms: t.p95_delay_ms.unwrap_or(0),
            control_x,
            control_y,
        });
    }

    let avg_probability =
        edges.iter().map(|e| e.probability).sum::<f64>() / edges.len().max(1) as f64;

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        critical_hops = critical_path.len(),
        "graph model built"
    );

    GraphModel {
        nodes,
        edges,
        labels,
        critical_path,
        avg_probability,
        max_delay_ms,
    }
}

/// Control point of the quadratic render curve: the chord midpoint pushed
/// perpendicular by a bend hashed from the edge id, so co-layer edges fan
/// out instead of overlapping while staying deterministic per identity.
fn curve_control(from: &GraphNode, to: &GraphNode, edge_id: &str) -> (f64, f64) {
    let mx = (from.x + to.x) / 2.0;
    let my = (from.y + to.y) / 2.0;
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist = dx.hypot(dy);
    let dist = if dist == 0.0 { 1.0 } else { dist };
    let bend = (unit_hash(edge_id) - 0.5) * EDGE_BEND;
    (mx - (dy / dist) * bend, my + (dx / dist) * bend)
}
