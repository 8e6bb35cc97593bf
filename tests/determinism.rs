use std::sync::Arc;

use auditfuse::{
    DetailFinding, GreedyReconciler, HashEmbedder, Reconciler, RuleFinding, SuggestionFinding,
};

fn rule(title: &str, description: &str) -> RuleFinding {
    RuleFinding {
        title: title.into(),
        severity: "medium".into(),
        description: description.into(),
        rationale: String::new(),
        result: "fail".into(),
    }
}

fn detail(id: &str, service: &str) -> DetailFinding {
    DetailFinding {
        id: Some(id.into()),
        service: Some(service.into()),
        description: None,
    }
}

fn suggestion(id: &str, description: &str) -> SuggestionFinding {
    SuggestionFinding {
        id: id.into(),
        severity: None,
        description: Some(description.into()),
    }
}

#[test]
fn identical_inputs_produce_byte_identical_partitions() {
    let rules = vec![
        rule("Disable telnet", "telnet transmits credentials in cleartext"),
        rule("Install AIDE", "file integrity monitoring should be installed"),
        rule("Restrict core dumps", "core dumps can leak secrets"),
    ];
    let details = vec![
        detail("NETW-3200", "telnet"),
        detail("KRNL-5820", "core dumps"),
    ];
    let suggestions = vec![suggestion("FINT-4350", "install a file integrity tool")];

    // Two engines over two provider instances: determinism must come from
    // the inputs, not from shared state.
    let first = GreedyReconciler::with_defaults(Arc::new(HashEmbedder::default()))
        .reconcile(&rules, &details, &suggestions)
        .expect("first run");
    let second = GreedyReconciler::with_defaults(Arc::new(HashEmbedder::default()))
        .reconcile(&rules, &details, &suggestions)
        .expect("second run");

    assert_eq!(first, second);
}

#[test]
fn partition_invariants_hold_for_arbitrary_inputs() {
    let rules: Vec<RuleFinding> = (0..6)
        .map(|i| rule(&format!("rule {i}"), &format!("description {i}")))
        .collect();
    let details: Vec<DetailFinding> = (0..4)
        .map(|i| detail(&format!("DET-{i}"), &format!("service-{i}")))
        .collect();
    let suggestions: Vec<SuggestionFinding> = (0..3)
        .map(|i| suggestion(&format!("SUG-{i}"), &format!("do the thing {i}")))
        .collect();

    let partition = GreedyReconciler::with_defaults(Arc::new(HashEmbedder::default()))
        .reconcile(&rules, &details, &suggestions)
        .expect("run succeeds");

    assert_eq!(partition.rule_count(), rules.len());
    assert_eq!(
        partition.candidate_count(),
        details.len() + suggestions.len()
    );
    for pair in &partition.pairs {
        assert!(pair.score > 0.5);
    }
}
