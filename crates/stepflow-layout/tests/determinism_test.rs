use stepflow_core::{LabelHints, Transition, VariantTrace, canonical_transitions};
use stepflow_layout::build_graph_model;

fn t(from: &str, to: &str, count: u64, probability: f64, delay_ms: u64) -> Transition {
    Transition {
        from: from.to_string(),
        to: to.to_string(),
        count,
        probability,
        p95_delay_ms: Some(delay_ms),
    }
}

fn sample_edges() -> Vec<Transition> {
    vec![
        t("__START__", "branch", 121, 1.0, 1000),
        t("branch", "commit", 118, 0.97, 14000),
        t("commit", "ci", 112, 0.95, 28000),
        t("ci", "qa", 41, 0.37, 560_000),
        t("ci", "approval", 63, 0.57, 420_000),
        t("qa", "approval", 33, 0.8, 610_000),
        t("approval", "merge", 89, 0.94, 96000),
    ]
}

#[test]
fn identical_inputs_reproduce_identical_models() {
    let mut hints = LabelHints::new();
    hints.insert("ci".to_string(), "CI Started".to_string());

    let first = build_graph_model(&sample_edges(), &hints, "code:action=merge");
    let second = build_graph_model(&sample_edges(), &hints, "code:action=merge");

    assert_eq!(first, second);
}

#[test]
fn the_seed_only_perturbs_vertical_jitter() {
    let first = build_graph_model(&sample_edges(), &LabelHints::new(), "seed-a");
    let second = build_graph_model(&sample_edges(), &LabelHints::new(), "seed-b");

    let moved = first
        .nodes
        .iter()
        .zip(&second.nodes)
        .any(|(a, b)| a.y != b.y);
    assert!(moved);

    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.x, b.x);
        assert_eq!(a.depth, b.depth);
    }
    assert_eq!(first.critical_path, second.critical_path);
}

#[test]
fn synthesized_and_rebuilt_variants_stay_deterministic() {
    let variants = vec![
        VariantTrace {
            rank: 1,
            frequency: 0.56,
            steps: ["branch", "commit", "ci", "approval", "merge"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        VariantTrace {
            rank: 2,
            frequency: 0.21,
            steps: ["branch", "commit", "ci", "qa", "approval"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
    ];

    let edges_a = canonical_transitions(&[], &variants);
    let edges_b = canonical_transitions(&[], &variants);
    assert_eq!(edges_a, edges_b);

    let first = build_graph_model(&edges_a, &LabelHints::new(), "seed");
    let second = build_graph_model(&edges_b, &LabelHints::new(), "seed");
    assert_eq!(first, second);
}
