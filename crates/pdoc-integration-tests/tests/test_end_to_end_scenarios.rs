//! End-to-end generation scenarios through the orchestrator.
//!
//! Each scenario builds a request the way the presentation layer sends it
//! and checks the documents, failures and final status together.

use std::sync::Arc;

use pdoc_compliance::ComplianceStatus;
use pdoc_core::{DocumentType, Language, ProfileInput, Score};
use pdoc_orchestrator::{
    DocumentGenerationOrchestrator, ErrorKind, GenerationRequest, GenerationState,
    OrchestratorConfig,
};
use pdoc_rules::RuleTables;

fn orchestrator() -> DocumentGenerationOrchestrator {
    DocumentGenerationOrchestrator::new(
        Arc::new(RuleTables::builtin()),
        OrchestratorConfig::default(),
    )
}

fn abc_profile() -> ProfileInput {
    serde_json::from_value(serde_json::json!({
        "companyName": "ABC Co",
        "industryType": "technology",
        "businessSize": "sme",
        "dataProcessingVolume": "medium",
        "regionalLocation": "south",
        "communicationStyle": "modern",
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Scenario 1: south/modern technology SME, Vietnamese privacy policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scenario_south_modern_privacy_policy() {
    let request = GenerationRequest::new(["privacy-policy"], abc_profile(), Language::Vietnamese);
    let outcome = orchestrator().generate(request).await.unwrap();

    assert!(outcome.is_completed());
    assert_eq!(outcome.status.progress, 100);
    assert!(outcome.failures.is_empty());

    let doc = outcome.document(DocumentType::PrivacyPolicy).unwrap();
    assert_eq!(
        doc.content.section_ids(),
        ["introduction", "data-collection", "legal-basis"]
    );
    assert_eq!(doc.cultural_adaptation.greeting, "Chào quý khách");
    assert!(doc.validation.aggregate_score >= Score::new(0.85));
    assert_eq!(doc.content.metadata.company_name, "ABC Co");
    assert_eq!(doc.content.metadata.language, Language::Vietnamese);
}

#[tokio::test]
async fn scenario_south_modern_privacy_policy_in_english() {
    let request = GenerationRequest::new(["privacy-policy"], abc_profile(), Language::English);
    let outcome = orchestrator().generate(request).await.unwrap();
    let doc = outcome.document(DocumentType::PrivacyPolicy).unwrap();
    assert_eq!(doc.content.metadata.language, Language::English);
    assert_eq!(doc.validation.regulatory.score, Score::ONE);
    assert_eq!(doc.validation.language.score, Score::ONE);
}

// ---------------------------------------------------------------------------
// Scenario 2: unknown industry falls back to the generic entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scenario_unknown_industry_completes_on_generic_requirements() {
    let mut profile = abc_profile();
    profile.industry_type = Some("unknown-sector".to_string());
    let request = GenerationRequest::new(["privacy-policy"], profile, Language::Vietnamese);
    let outcome = orchestrator().generate(request).await.unwrap();

    assert!(outcome.is_completed());
    let doc = outcome.document(DocumentType::PrivacyPolicy).unwrap();
    assert_eq!(doc.analysis.industry, "generic");
    assert_eq!(
        doc.analysis.industry_requirements,
        RuleTables::builtin().default_industry.requirements
    );
    assert!(doc.content.metadata.template_id.ends_with("generic"));
}

// ---------------------------------------------------------------------------
// Scenario 3: one type without a section set fails alone
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scenario_missing_section_set_is_isolated() {
    let request = GenerationRequest::new(
        ["privacy-policy", "vendor-privacy-assessment"],
        abc_profile(),
        Language::Vietnamese,
    );
    let outcome = orchestrator().generate(request).await.unwrap();

    assert_eq!(outcome.status.state, GenerationState::Completed);
    assert_eq!(outcome.documents.len(), 1);
    assert_eq!(outcome.documents[0].document_type, DocumentType::PrivacyPolicy);

    let failure = outcome.failure("vendor-privacy-assessment").unwrap();
    assert_eq!(failure.kind, ErrorKind::InternalInconsistency);
    assert_eq!(outcome.status.failures, outcome.failures);
}

// ---------------------------------------------------------------------------
// Request-level behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_catalog_batch_generates_every_defined_type() {
    let types: Vec<&str> = DocumentType::all().iter().map(|dt| dt.as_str()).collect();
    let request = GenerationRequest::new(types, abc_profile(), Language::English);
    let outcome = orchestrator().generate(request).await.unwrap();

    assert_eq!(outcome.documents.len(), DocumentType::COUNT - 1);
    assert_eq!(outcome.failures.len(), 1);
    for doc in &outcome.documents {
        assert_eq!(doc.content.metadata.document_type, doc.document_type);
        assert_eq!(doc.validation.regulatory.status, ComplianceStatus::Compliant);
    }
}

#[tokio::test]
async fn invalid_profile_produces_no_partial_results() {
    let mut profile = abc_profile();
    profile.company_name = Some("   ".to_string());
    let request = GenerationRequest::new(["privacy-policy"], profile, Language::Vietnamese);
    let err = orchestrator().generate(request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidBusinessProfile);
}

#[tokio::test]
async fn request_json_from_the_presentation_layer_is_accepted() {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "documentTypes": ["consent-forms", "cookie-banner"],
            "businessProfile": {"companyName": "Phở Hà Nội", "industryType": "healthcare",
                                "regionalLocation": "north", "communicationStyle": "formal"},
            "language": "vietnamese"
        }"#,
    )
    .unwrap();
    let outcome = orchestrator().generate(request).await.unwrap();

    assert!(outcome.is_completed());
    let consent = outcome.document(DocumentType::ConsentForms).unwrap();
    assert!(consent.content.section("sensitive-data").is_some());
    assert_eq!(
        outcome.failure("cookie-banner").unwrap().kind,
        ErrorKind::UnsupportedDocumentType
    );
}

#[tokio::test]
async fn rule_tables_from_config_file_drive_generation() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("rules.yaml");
    std::fs::write(&rules, RuleTables::builtin().to_yaml_string().unwrap()).unwrap();
    let config_path = dir.path().join("pdoc.yaml");
    std::fs::write(
        &config_path,
        format!("max_concurrency: 1\nrules_path: {}\n", rules.display()),
    )
    .unwrap();

    let config = OrchestratorConfig::from_path(&config_path).unwrap();
    let orchestrator = DocumentGenerationOrchestrator::from_config(config).unwrap();
    let request = GenerationRequest::new(["privacy-policy"], abc_profile(), Language::Vietnamese);
    let outcome = orchestrator.generate(request).await.unwrap();
    assert!(outcome.is_completed());
}
