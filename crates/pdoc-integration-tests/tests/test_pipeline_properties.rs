//! Cross-crate properties of the pipeline stages.

use std::sync::Arc;

use proptest::prelude::*;

use pdoc_analysis::{BusinessProfileAnalyzer, CulturalAdaptationEngine};
use pdoc_compliance::ComplianceValidator;
use pdoc_core::{
    BusinessProfile, BusinessSize, CommunicationStyle, DataVolume, DocumentType, Language,
    Region, Score,
};
use pdoc_orchestrator::{DocumentPipeline, PipelineJob};
use pdoc_rules::RuleTables;
use pdoc_synthesis::{ContentSynthesizer, GenerationOptions, TemplateCatalog};

fn tables() -> Arc<RuleTables> {
    Arc::new(RuleTables::builtin())
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Vietnamese), Just(Language::English)]
}

fn profile() -> impl Strategy<Value = BusinessProfile> {
    (
        prop::sample::select(vec![
            "technology",
            "finance",
            "banking",
            "healthcare",
            "education",
            "retail",
            "manufacturing",
            "agriculture",
        ]),
        prop::sample::select(BusinessSize::all().to_vec()),
        prop::sample::select(Region::all().to_vec()),
        prop::sample::select(DataVolume::all().to_vec()),
        prop::sample::select(CommunicationStyle::all().to_vec()),
        0u32..5000,
    )
        .prop_map(|(industry, size, region, volume, style, employees)| {
            BusinessProfile::new("Công ty TNHH Minh Anh", industry)
                .with_size(size)
                .with_region(region)
                .with_volume(volume)
                .with_style(style)
                .with_employee_count(employees)
        })
}

fn document_type() -> impl Strategy<Value = DocumentType> {
    prop::sample::select(DocumentType::all().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analysis_scores_stay_in_unit_interval(p in profile(), dt in document_type()) {
        let a = BusinessProfileAnalyzer::new(tables()).analyze(&p, dt);
        prop_assert!(a.personalization_score >= Score::ZERO && a.personalization_score <= Score::ONE);
        prop_assert!(a.confidence >= Score::ZERO && a.confidence <= Score::ONE);
        prop_assert_eq!(a.document_type, dt);
    }

    #[test]
    fn generated_document_type_matches_template(
        p in profile(),
        dt in document_type(),
        lang in language(),
    ) {
        let pipeline = DocumentPipeline::new(tables());
        let template = pipeline.catalog().resolve(dt, &p.industry_type);
        let job = PipelineJob {
            request_id: pdoc_core::RequestId::new(),
            document_type: dt,
            profile: p,
            language: lang,
            options: GenerationOptions::default(),
            output_format: Default::default(),
        };
        if let Ok(doc) = pipeline.run(&job, &mut |_| {}) {
            prop_assert_eq!(doc.document_type, template.document_type);
            prop_assert_eq!(doc.content.metadata.template_id, template.id);
        } else {
            prop_assert!(template.sections.is_empty());
        }
    }

    #[test]
    fn synthesis_is_referentially_transparent(
        p in profile(),
        dt in document_type(),
        lang in language(),
    ) {
        let template = TemplateCatalog::new(tables()).resolve(dt, &p.industry_type);
        let synthesizer = ContentSynthesizer::new();
        let options = GenerationOptions::default();
        let first = synthesizer.synthesize(&template, &p, lang, None, &options);
        let second = synthesizer.synthesize(&template, &p, lang, None, &options);
        prop_assert_eq!(&first.sections, &second.sections);
        prop_assert_eq!(first.digest().unwrap(), second.digest().unwrap());
    }

    #[test]
    fn validation_of_synthesized_content_is_deterministic(
        p in profile(),
        dt in document_type(),
        lang in language(),
    ) {
        let tables = tables();
        let template = TemplateCatalog::new(tables.clone()).resolve(dt, &p.industry_type);
        let content = ContentSynthesizer::new()
            .synthesize(&template, &p, lang, None, &GenerationOptions::default());
        let validator = ComplianceValidator::new(tables);
        let a = validator.validate(&content, dt);
        let b = validator.validate(&content, dt);
        prop_assert_eq!(a.aggregate_score, b.aggregate_score);
        prop_assert_eq!(a.overall_status, b.overall_status);
    }
}

#[test]
fn unmapped_cultural_pairs_share_the_fallback_record() {
    let tables = tables();
    let engine = CulturalAdaptationEngine::new(tables.clone());
    for lang in [Language::Vietnamese, Language::English] {
        let mut fallbacks = Vec::new();
        for region in Region::all() {
            for style in CommunicationStyle::all() {
                if tables.cultural_record(*region, *style).is_default {
                    let profile = BusinessProfile::new("ABC Co", "technology")
                        .with_region(*region)
                        .with_style(*style);
                    fallbacks.push(engine.adapt(&profile, lang));
                }
            }
        }
        assert_eq!(fallbacks.len(), 4);
        assert!(fallbacks.windows(2).all(|w| w[0] == w[1]));
    }
}
