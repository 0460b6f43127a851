//! # Per-Document Pipeline
//!
//! Runs one document type through every stage as one synchronous,
//! stateless unit:
//!
//! ```text
//! profile ─▶ analyze ┐
//!         └▶ adapt  ─┴▶ resolve template ─▶ synthesize ─▶ validate ─▶ score
//!            (Analyzed)                     (Generated)   (Validated)
//! ```
//!
//! The unit is CPU-bound and touches no shared mutable state, so a failed
//! run can be retried as a whole. Stage completions are reported through a
//! callback so the caller can drive request-level progress.

use std::sync::Arc;

use pdoc_analysis::{BusinessAnalysis, BusinessProfileAnalyzer, CulturalAdaptationEngine};
use pdoc_compliance::{ComplianceValidator, PersonalizationScorer};
use pdoc_core::{
    BusinessProfile, DocumentId, DocumentType, Language, OutputFormat, RequestId, Timestamp,
};
use pdoc_rules::RuleTables;
use pdoc_synthesis::{ContentSynthesizer, GenerationOptions, TemplateCatalog};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::request::GeneratedDocument;

/// A stage one document type has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Analysis and cultural adaptation returned.
    Analyzed,
    /// Content was synthesized.
    Generated,
    /// Validation and scoring returned.
    Validated,
}

impl PipelineStage {
    /// Number of stages each document type goes through.
    pub const COUNT: usize = 3;

    /// Stage units completed once this stage is reached.
    pub fn units(&self) -> usize {
        match self {
            Self::Analyzed => 1,
            Self::Generated => 2,
            Self::Validated => 3,
        }
    }
}

/// Everything one pipeline run needs, owned so it can move to a worker.
#[derive(Debug, Clone)]
pub struct PipelineJob {
    /// Owning request, for log context.
    pub request_id: RequestId,
    /// Type to generate.
    pub document_type: DocumentType,
    /// Profile with option overrides applied.
    pub profile: BusinessProfile,
    /// Output language.
    pub language: Language,
    /// Generation options.
    pub options: GenerationOptions,
    /// Format tag stamped on the document.
    pub output_format: OutputFormat,
}

/// The per-document-type pipeline over shared rule tables.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    tables: Arc<RuleTables>,
    analyzer: BusinessProfileAnalyzer,
    cultural: CulturalAdaptationEngine,
    catalog: TemplateCatalog,
    synthesizer: ContentSynthesizer,
    validator: ComplianceValidator,
    scorer: PersonalizationScorer,
}

impl DocumentPipeline {
    /// Build every stage over `tables`.
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self {
            analyzer: BusinessProfileAnalyzer::new(tables.clone()),
            cultural: CulturalAdaptationEngine::new(tables.clone()),
            catalog: TemplateCatalog::new(tables.clone()),
            synthesizer: ContentSynthesizer::new(),
            validator: ComplianceValidator::new(tables.clone()),
            scorer: PersonalizationScorer::new(),
            tables,
        }
    }

    /// The rule tables every stage reads.
    pub fn tables(&self) -> &Arc<RuleTables> {
        &self.tables
    }

    /// The template catalog.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The analysis stage alone.
    pub fn analyze(&self, profile: &BusinessProfile, document_type: DocumentType) -> BusinessAnalysis {
        self.analyzer.analyze(profile, document_type)
    }

    /// Run every stage for `job`, calling `report` after each one.
    pub fn run(
        &self,
        job: &PipelineJob,
        report: &mut dyn FnMut(PipelineStage),
    ) -> Result<GeneratedDocument, GenerationError> {
        let dt = job.document_type;
        let profile = &job.profile;

        let analysis = self.analyzer.analyze(profile, dt);
        let adaptation = self.cultural.adapt(profile, job.language);
        report(PipelineStage::Analyzed);

        let template = if job.options.industry_specific {
            self.catalog.resolve(dt, &profile.industry_type)
        } else {
            self.catalog.resolve_generic(dt)
        };
        if template.document_type != dt {
            return Err(GenerationError::TemplateResolutionFailure {
                document_type: dt,
                detail: format!(
                    "template {} is for {}",
                    template.id, template.document_type
                ),
            });
        }

        let content =
            self.synthesizer
                .synthesize(&template, profile, job.language, Some(&adaptation), &job.options);
        if content.sections.is_empty() {
            tracing::error!(
                request_id = %job.request_id.as_uuid(),
                document_type = %dt,
                template = %template.id,
                company = %profile.company_name,
                industry = %profile.industry_type,
                language = %job.language,
                template_sections = template.sections.len(),
                missing_patterns = ?content.metadata.missing_sections,
                included_sections = ?job.options.included_sections,
                "synthesis produced no sections"
            );
            let detail = if template.sections.is_empty() {
                format!("no section set is defined for {dt}")
            } else {
                format!(
                    "none of the {} template sections survived synthesis",
                    template.sections.len()
                )
            };
            return Err(GenerationError::InternalInconsistency {
                document_type: dt,
                detail,
            });
        }
        report(PipelineStage::Generated);

        let validation = self.validator.validate(&content, dt);
        let personalization_score = self.scorer.score(&content, &analysis);
        report(PipelineStage::Validated);

        tracing::info!(
            request_id = %job.request_id.as_uuid(),
            document_type = %dt,
            template = %template.id,
            sections = content.sections.len(),
            compliance = %validation.aggregate_score,
            status = %validation.overall_status,
            personalization = %personalization_score,
            "document generated"
        );

        Ok(GeneratedDocument {
            id: DocumentId::new(),
            document_type: dt,
            cultural_adaptation: content.cultural_adaptation.clone(),
            content,
            analysis,
            validation,
            personalization_score,
            generated_at: Timestamp::now(),
            output_format: job.output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdoc_compliance::ComplianceStatus;
    use pdoc_core::{CommunicationStyle, Region};

    fn pipeline() -> DocumentPipeline {
        DocumentPipeline::new(Arc::new(RuleTables::builtin()))
    }

    fn job(document_type: DocumentType, industry: &str) -> PipelineJob {
        PipelineJob {
            request_id: RequestId::new(),
            document_type,
            profile: BusinessProfile::new("ABC Co", industry)
                .with_region(Region::South)
                .with_style(CommunicationStyle::Modern),
            language: Language::Vietnamese,
            options: GenerationOptions::default(),
            output_format: OutputFormat::Html,
        }
    }

    fn run(job: &PipelineJob) -> (Result<GeneratedDocument, GenerationError>, Vec<PipelineStage>) {
        let mut stages = Vec::new();
        let result = pipeline().run(job, &mut |stage| stages.push(stage));
        (result, stages)
    }

    #[test]
    fn privacy_policy_runs_every_stage() {
        let (result, stages) = run(&job(DocumentType::PrivacyPolicy, "technology"));
        let doc = result.unwrap();
        assert_eq!(
            stages,
            [PipelineStage::Analyzed, PipelineStage::Generated, PipelineStage::Validated]
        );
        assert_eq!(doc.document_type, DocumentType::PrivacyPolicy);
        assert_eq!(doc.content.metadata.document_type, doc.document_type);
        assert_eq!(doc.content.section_ids(), ["introduction", "data-collection", "legal-basis"]);
        assert_eq!(doc.cultural_adaptation, doc.content.cultural_adaptation);
        assert_eq!(doc.validation.overall_status, ComplianceStatus::Compliant);
        assert_eq!(doc.output_format, OutputFormat::Html);
    }

    #[test]
    fn missing_section_set_is_an_internal_inconsistency() {
        let (result, stages) = run(&job(DocumentType::VendorPrivacyAssessment, "technology"));
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InternalInconsistency {
                document_type: DocumentType::VendorPrivacyAssessment,
                ..
            }
        ));
        assert_eq!(stages, [PipelineStage::Analyzed]);
    }

    #[test]
    fn filtering_out_every_section_is_an_internal_inconsistency() {
        let mut j = job(DocumentType::PrivacyPolicy, "technology");
        j.options.included_sections = Some(vec!["not-a-section".to_string()]);
        let (result, _) = run(&j);
        assert!(result.unwrap_err().to_string().contains("survived synthesis"));
    }

    #[test]
    fn industry_specific_flag_selects_the_template() {
        let mut j = job(DocumentType::PrivacyPolicy, "healthcare");
        let (specific, _) = run(&j);
        assert!(specific.unwrap().content.section("sensitive-data").is_some());

        j.options.industry_specific = false;
        let (generic, _) = run(&j);
        let generic = generic.unwrap();
        assert!(generic.content.section("sensitive-data").is_none());
        assert!(generic.content.metadata.template_id.ends_with("generic"));
    }

    #[test]
    fn every_document_type_matches_its_template() {
        for dt in DocumentType::all() {
            if let (Ok(doc), _) = run(&job(*dt, "finance")) {
                assert_eq!(doc.document_type, *dt);
                assert_eq!(doc.content.metadata.document_type, *dt);
            }
        }
    }

    #[test]
    fn stage_units_are_ordered() {
        assert!(PipelineStage::Analyzed < PipelineStage::Validated);
        assert_eq!(PipelineStage::Validated.units(), PipelineStage::COUNT);
    }
}
