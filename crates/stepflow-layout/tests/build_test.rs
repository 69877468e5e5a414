use stepflow_core::{LabelHints, Transition};
use stepflow_layout::{GRAPH_HEIGHT, GRAPH_WIDTH, GraphModel, build_graph_model};

fn t(from: &str, to: &str, count: u64, probability: f64, delay_ms: u64) -> Transition {
    Transition {
        from: from.to_string(),
        to: to.to_string(),
        count,
        probability,
        p95_delay_ms: Some(delay_ms),
    }
}

fn escalation_edges() -> Vec<Transition> {
    vec![
        t("__START__", "ticket", 88, 1.0, 1000),
        t("ticket", "severity", 82, 0.93, 36000),
        t("severity", "callback", 24, 0.29, 320_000),
        t("severity", "handoff", 52, 0.64, 190_000),
        t("callback", "handoff", 18, 0.74, 430_000),
        t("handoff", "validation", 58, 0.83, 520_000),
        t("validation", "resolved", 55, 0.95, 140_000),
    ]
}

fn node<'a>(model: &'a GraphModel, id: &str) -> &'a stepflow_layout::GraphNode {
    model.nodes.iter().find(|n| n.id == id).unwrap()
}

#[test]
fn empty_transitions_build_an_empty_model() {
    let mut hints = LabelHints::new();
    hints.insert("ticket".to_string(), "Ticket Opened".to_string());

    let model = build_graph_model(&[], &hints, "seed");

    assert!(model.is_empty());
    assert_eq!(model, GraphModel::default());
}

#[test]
fn every_step_becomes_exactly_one_node() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    let mut ids: Vec<&str> = model.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "__START__",
            "callback",
            "handoff",
            "resolved",
            "severity",
            "ticket",
            "validation",
        ]
    );
    assert_eq!(model.edges.len(), 7);
}

#[test]
fn depths_drive_horizontal_placement() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    assert_eq!(node(&model, "__START__").depth, 0);
    assert_eq!(node(&model, "ticket").depth, 1);
    assert_eq!(node(&model, "severity").depth, 2);
    assert_eq!(node(&model, "callback").depth, 3);
    assert_eq!(node(&model, "handoff").depth, 3);
    assert_eq!(node(&model, "validation").depth, 4);
    assert_eq!(node(&model, "resolved").depth, 5);

    // Same depth, same column; deeper, further right.
    assert_eq!(node(&model, "callback").x, node(&model, "handoff").x);
    assert!(node(&model, "ticket").x < node(&model, "severity").x);
    assert!(node(&model, "resolved").x < GRAPH_WIDTH);

    let expected_start_x = (0.7 / (5.0 + 1.4)) * GRAPH_WIDTH;
    assert_eq!(node(&model, "__START__").x, expected_start_x);
}

#[test]
fn vertical_positions_stay_inside_the_margins() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    for n in &model.nodes {
        assert!(n.y >= 48.0 && n.y <= GRAPH_HEIGHT - 48.0, "{} at {}", n.id, n.y);
    }
}

#[test]
fn activity_and_radius_scale_with_flow() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    // ticket carries the most traffic (88 in + 82 out).
    let ticket = node(&model, "ticket");
    assert_eq!(ticket.activity, 1.0);
    assert_eq!(ticket.radius, 23.0);

    let callback = node(&model, "callback");
    assert!(callback.activity < ticket.activity);
    assert!(callback.radius < ticket.radius);
}

#[test]
fn default_labels_fill_in_flow_order() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    assert_eq!(model.labels["__START__"], "Start");
    assert_eq!(model.labels["ticket"], "Step 01");
    assert_eq!(model.labels["severity"], "Step 02");
    assert_eq!(model.labels["callback"], "Step 06");
}

#[test]
fn label_hints_win_but_the_sentinel_stays_start() {
    let mut hints = LabelHints::new();
    hints.insert("ticket".to_string(), "Ticket Opened".to_string());
    hints.insert("__START__".to_string(), "Signal Detected".to_string());

    let model = build_graph_model(&escalation_edges(), &hints, "seed");

    assert_eq!(node(&model, "ticket").label, "Ticket Opened");
    assert_eq!(node(&model, "__START__").label, "Start");
}

#[test]
fn critical_edges_are_flagged_in_walk_order() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    assert_eq!(
        model.critical_path,
        vec![
            "__START__-ticket",
            "ticket-severity",
            "severity-handoff",
            "handoff-validation",
            "validation-resolved",
        ]
    );
    assert_eq!(model.critical_edges().count(), 5);
    let callback_edge = model.edges.iter().find(|e| e.id == "severity-callback").unwrap();
    assert!(!callback_edge.is_critical);
}

#[test]
fn edge_weight_takes_the_stronger_of_probability_and_traffic() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    // callback->handoff: probability 0.74 beats 18/88 traffic.
    let edge = model.edges.iter().find(|e| e.id == "callback-handoff").unwrap();
    assert_eq!(edge.weight, 0.74);

    // __START__->ticket is both the most probable and the busiest.
    let edge = model.edges.iter().find(|e| e.id == "__START__-ticket").unwrap();
    assert_eq!(edge.weight, 1.0);
}

#[test]
fn aggregate_stats_cover_the_whole_edge_set() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    let expected_avg = (1.0 + 0.93 + 0.29 + 0.64 + 0.74 + 0.83 + 0.95) / 7.0;
    assert!((model.avg_probability - expected_avg).abs() < 1e-12);
    assert_eq!(model.max_delay_ms, 520_000);
}

#[test]
fn missing_delays_floor_the_model_maximum_at_one() {
    let edges = vec![Transition {
        from: "a".to_string(),
        to: "b".to_string(),
        count: 3,
        probability: 0.5,
        p95_delay_ms: None,
    }];

    let model = build_graph_model(&edges, &LabelHints::new(), "seed");

    assert_eq!(model.max_delay_ms, 1);
    assert_eq!(model.edges[0].delay_ms, 0);
}

#[test]
fn edge_endpoints_always_resolve_to_model_nodes() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    for edge in &model.edges {
        let (from, to) = model.endpoints(edge);
        assert_eq!(edge.id, format!("{}-{}", from.id, to.id));
    }
}

#[test]
fn curve_control_points_sit_near_the_chord_midpoint() {
    let model = build_graph_model(&escalation_edges(), &LabelHints::new(), "seed");

    for edge in &model.edges {
        let (from, to) = model.endpoints(edge);
        let mx = (from.x + to.x) / 2.0;
        let my = (from.y + to.y) / 2.0;
        let offset = ((edge.control_x - mx).powi(2) + (edge.control_y - my).powi(2)).sqrt();
        // Bend magnitude is at most half the peak-to-peak range.
        assert!(offset <= 46.0 + 1e-9, "{} bends {}", edge.id, offset);
    }
}
