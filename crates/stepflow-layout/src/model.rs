use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One positioned step in the rendered graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Hop distance from the start sentinel, or a deterministic fallback for
    /// nodes the relaxation never reached.
    pub depth: u32,
    pub x: f64,
    pub y: f64,
    /// Total flow through this node normalized by the busiest node, in [0, 1].
    pub activity: f64,
    pub radius: f64,
}

/// A render-ready transition between two nodes of one [`GraphModel`].
///
/// Endpoints are indices into [`GraphModel::nodes`], so an edge can never
/// outlive or dangle from the nodes it connects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// `"{from}-{to}"`, matching [`stepflow_core::Transition::edge_id`].
    pub id: String,
    pub from: usize,
    pub to: usize,
    pub count: u64,
    pub probability: f64,
    /// Stroke emphasis: the larger of probability and relative traffic.
    pub weight: f64,
    pub delay_ms: u64,
    /// Control point of the quadratic render curve, offset perpendicular to
    /// the chord by a jitter hashed from the edge id.
    pub control_x: f64,
    pub control_y: f64,
    pub is_critical: bool,
}

/// Immutable result of one build pass.
///
/// Any input change rebuilds the whole model; nothing is patched
/// incrementally, and viewport state lives elsewhere entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Display label per step id, in discovery order.
    pub labels: IndexMap<String, String>,
    /// Edge ids on the greedy dominant path, in walk order.
    pub critical_path: Vec<String>,
    pub avg_probability: f64,
    pub max_delay_ms: u64,
}

impl GraphModel {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Endpoint nodes of an edge belonging to this model.
    pub fn endpoints(&self, edge: &GraphEdge) -> (&GraphNode, &GraphNode) {
        (&self.nodes[edge.from], &self.nodes[edge.to])
    }

    /// Edges on the dominant path, in model order. This is the data behind a
    /// "focus critical path" toggle.
    pub fn critical_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.is_critical)
    }
}
