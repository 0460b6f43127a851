//! Observing a request through its status stream.

use std::sync::Arc;

use pdoc_core::{DocumentType, Language, ProfileInput};
use pdoc_orchestrator::{
    DocumentGenerationOrchestrator, ErrorKind, GenerationRequest, GenerationState,
    OrchestratorConfig,
};
use pdoc_rules::RuleTables;

fn orchestrator(max_concurrency: usize) -> DocumentGenerationOrchestrator {
    DocumentGenerationOrchestrator::new(
        Arc::new(RuleTables::builtin()),
        OrchestratorConfig {
            max_concurrency,
            ..Default::default()
        },
    )
}

fn request(types: &[&str]) -> GenerationRequest {
    let profile: ProfileInput = serde_json::from_value(serde_json::json!({
        "company_name": "Minh Anh Logistics",
        "industry_type": "ecommerce",
        "regional_location": "north",
        "communication_style": "formal",
    }))
    .unwrap();
    GenerationRequest::new(types.iter().copied(), profile, Language::Vietnamese)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn observed_snapshots_are_ordered_and_end_terminal() {
    let handle = orchestrator(2).start(request(&[
        "privacy-policy",
        "consent-forms",
        "data-retention-policy",
        "security-incident-response",
    ]));
    let mut rx = handle.subscribe();

    let mut seen = vec![rx.borrow_and_update().clone()];
    while !seen.last().is_some_and(|s| s.is_terminal()) {
        if rx.changed().await.is_err() {
            break;
        }
        seen.push(rx.borrow_and_update().clone());
    }
    let outcome = handle.wait().await.unwrap();

    for pair in seen.windows(2) {
        assert!(pair[0].progress <= pair[1].progress);
        assert!(pair[0].state <= pair[1].state);
    }
    assert_eq!(outcome.status.state, GenerationState::Completed);
    assert_eq!(outcome.status.progress, 100);
    assert_eq!(outcome.documents.len(), 4);

    let states: Vec<_> = outcome.status.transitions.iter().map(|t| t.to_state).collect();
    assert_eq!(
        states,
        [
            GenerationState::Analyzing,
            GenerationState::Generating,
            GenerationState::Validating,
            GenerationState::Completed,
        ]
    );
}

#[tokio::test]
async fn cancelled_request_keeps_a_structured_failure_per_type() {
    let handle = orchestrator(1).start(request(&["privacy-policy", "privacy-notice"]));
    handle.cancel();
    let outcome = handle.wait().await.unwrap();

    assert_eq!(outcome.documents.len() + outcome.failures.len(), 2);
    for failure in &outcome.failures {
        assert!(failure.document_type.is_some());
        assert!(!failure.message.is_empty());
    }
    assert!(outcome.status.is_terminal());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancelling_mid_batch_keeps_finished_documents() {
    let all: Vec<&str> = DocumentType::all().iter().map(|dt| dt.as_str()).collect();
    let handle = orchestrator(1).start(request(&all));
    let mut rx = handle.subscribe();

    let finished_before_cancel = loop {
        let snapshot = rx.borrow_and_update().clone();
        if !snapshot.completed.is_empty() || snapshot.is_terminal() {
            break snapshot.completed;
        }
        if rx.changed().await.is_err() {
            break Vec::new();
        }
    };
    handle.cancel();
    let outcome = handle.wait().await.unwrap();

    assert!(!finished_before_cancel.is_empty());
    for dt in &finished_before_cancel {
        assert!(outcome.documents.iter().any(|d| d.document_type == *dt), "{dt} was dropped");
    }
    assert_eq!(outcome.documents.len() + outcome.failures.len(), DocumentType::COUNT);
    assert!(outcome.failures.iter().any(|f| f.kind == ErrorKind::Cancelled));
    for failure in &outcome.failures {
        let vendor = failure.document_type.as_deref()
            == Some(DocumentType::VendorPrivacyAssessment.as_str());
        assert!(
            failure.kind == ErrorKind::Cancelled
                || (vendor && failure.kind == ErrorKind::InternalInconsistency),
            "{failure:?}"
        );
    }
    assert_eq!(outcome.status.state, GenerationState::Completed);
    assert_eq!(outcome.status.progress, 100);
}
