//! # Compliance Validator
//!
//! `validate(content, document_type)` evaluates the five axes of
//! [`ComplianceAxis`] independently. Every axis score is a function of the
//! requirements the content actually covers, so a document missing its
//! legal basis scores lower than one that has it.
//!
//! | Axis | Checks | Met when |
//! |------|--------|----------|
//! | regulatory | legal requirements for the type | cited, or keyword in text |
//! | security | security checks for the type | keyword in text |
//! | language | bodies, titles, placeholders, consistency | structural test |
//! | industry | requirements of the content's industry | keyword in text |
//! | cultural | greeting, closing, signature, notes | phrase in text / note present |
//!
//! A failing axis is data, never an error: it shows up as a
//! `partially_compliant` or `non_compliant` status plus issues.

use std::sync::Arc;

use pdoc_core::{DocumentContent, DocumentType, Score};
use pdoc_rules::RuleTables;
use serde::{Deserialize, Serialize};

use crate::axis::{Check, ComplianceAxis, ComplianceResult, ComplianceStatus};
use crate::matching::{contains_any, has_placeholder, is_language_consistent, requirement_met};

// ---------------------------------------------------------------------------
// Validation output
// ---------------------------------------------------------------------------

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A mandatory regulatory or security requirement is missing.
    Critical,
    /// A non-mandatory requirement is missing.
    Warning,
    /// Cultural polish.
    Suggestion,
}

/// Priority of an improvement recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// The axis is non-compliant.
    High,
    /// The axis is partially compliant.
    Medium,
    /// The axis is compliant but not complete.
    Low,
}

/// One unsatisfied requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Axis the requirement belongs to.
    pub axis: ComplianceAxis,
    /// Severity.
    pub severity: Severity,
    /// Requirement id.
    pub requirement: String,
    /// Description.
    pub message: String,
}

/// An axis-level improvement recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementRecommendation {
    /// Axis to improve.
    pub axis: ComplianceAxis,
    /// Priority.
    pub priority: Priority,
    /// What to do.
    pub message: String,
}

/// The full validation of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalValidation {
    /// Document type validated against.
    pub document_type: DocumentType,
    /// Regulatory axis.
    pub regulatory: ComplianceResult,
    /// Security-agency axis.
    pub security: ComplianceResult,
    /// Language axis.
    pub language: ComplianceResult,
    /// Industry axis.
    pub industry: ComplianceResult,
    /// Cultural axis.
    pub cultural: ComplianceResult,
    /// Mean of the five axis scores, rounded to two decimals.
    pub aggregate_score: Score,
    /// Band of the aggregate score.
    pub overall_status: ComplianceStatus,
    /// Unsatisfied requirements, most severe first.
    pub issues: Vec<ValidationIssue>,
    /// Axis-level recommendations, highest priority first.
    pub recommendations: Vec<ImprovementRecommendation>,
}

impl LegalValidation {
    /// Result of one axis.
    pub fn axis(&self, axis: ComplianceAxis) -> &ComplianceResult {
        match axis {
            ComplianceAxis::Regulatory => &self.regulatory,
            ComplianceAxis::Security => &self.security,
            ComplianceAxis::Language => &self.language,
            ComplianceAxis::Industry => &self.industry,
            ComplianceAxis::Cultural => &self.cultural,
        }
    }

    /// The five axis results in reporting order.
    pub fn axes(&self) -> [&ComplianceResult; 5] {
        [
            &self.regulatory,
            &self.security,
            &self.language,
            &self.industry,
            &self.cultural,
        ]
    }

    /// Whether any critical issue was raised.
    pub fn has_critical_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

struct ValidationContext<'a> {
    content: &'a DocumentContent,
    document_type: DocumentType,
    text_lower: String,
}

/// Stateless five-axis validator over shared rule tables.
#[derive(Debug, Clone)]
pub struct ComplianceValidator {
    tables: Arc<RuleTables>,
}

impl ComplianceValidator {
    /// Create a validator over `tables`.
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// Validate `content` as a document of `document_type`.
    pub fn validate(&self, content: &DocumentContent, document_type: DocumentType) -> LegalValidation {
        let ctx = ValidationContext {
            content,
            document_type,
            text_lower: content.full_text().to_lowercase(),
        };

        let mut issues = Vec::new();
        let mut score_axis = |axis: ComplianceAxis| {
            let checks = self.evaluate_axis(axis, &ctx);
            issues.extend(checks.iter().filter(|c| !c.met).map(|check| ValidationIssue {
                axis,
                severity: severity(axis, check.mandatory),
                requirement: check.id.clone(),
                message: check.label.clone(),
            }));
            ComplianceResult::from_checks(axis, &checks)
        };
        let regulatory = score_axis(ComplianceAxis::Regulatory);
        let security = score_axis(ComplianceAxis::Security);
        let language = score_axis(ComplianceAxis::Language);
        let industry = score_axis(ComplianceAxis::Industry);
        let cultural = score_axis(ComplianceAxis::Cultural);
        issues.sort_by_key(|i| i.severity);

        let results = [&regulatory, &security, &language, &industry, &cultural];
        let aggregate_score = Score::mean(results.iter().map(|r| r.score)).rounded();
        let mut recommendations: Vec<ImprovementRecommendation> =
            results.iter().filter_map(|r| recommendation(r)).collect();
        recommendations.sort_by_key(|r| r.priority);

        let validation = LegalValidation {
            document_type,
            regulatory,
            security,
            language,
            industry,
            cultural,
            aggregate_score,
            overall_status: ComplianceStatus::from_score(aggregate_score),
            issues,
            recommendations,
        };

        tracing::debug!(
            %document_type,
            aggregate = %validation.aggregate_score,
            status = %validation.overall_status,
            issues = validation.issues.len(),
            "content validated"
        );
        validation
    }

    /// Exhaustive dispatch over the axes.
    fn evaluate_axis(&self, axis: ComplianceAxis, ctx: &ValidationContext<'_>) -> Vec<Check> {
        match axis {
            ComplianceAxis::Regulatory => self.regulatory_checks(ctx),
            ComplianceAxis::Security => self.security_checks(ctx),
            ComplianceAxis::Language => language_checks(ctx),
            ComplianceAxis::Industry => self.industry_checks(ctx),
            ComplianceAxis::Cultural => cultural_checks(ctx),
        }
    }

    fn regulatory_checks(&self, ctx: &ValidationContext<'_>) -> Vec<Check> {
        self.tables
            .legal_requirements_for(ctx.document_type)
            .into_iter()
            .map(|req| Check {
                id: req.id.clone(),
                label: format!("{} ({})", req.title.en, req.citation),
                met: requirement_met(ctx.content, &ctx.text_lower, req),
                mandatory: req.mandatory,
            })
            .collect()
    }

    fn security_checks(&self, ctx: &ValidationContext<'_>) -> Vec<Check> {
        self.tables
            .security_checks_for(ctx.document_type)
            .into_iter()
            .map(|check| Check {
                id: check.id.clone(),
                label: check.title.en.clone(),
                met: contains_any(&ctx.text_lower, &check.keywords),
                mandatory: check.mandatory,
            })
            .collect()
    }

    fn industry_checks(&self, ctx: &ValidationContext<'_>) -> Vec<Check> {
        let industry = self.tables.industry(&ctx.content.metadata.industry);
        industry
            .entry
            .requirements
            .iter()
            .map(|req| Check {
                id: req.id.clone(),
                label: format!("{}: {}", industry.key, req.text.en),
                met: contains_any(&ctx.text_lower, &req.keywords),
                mandatory: false,
            })
            .collect()
    }
}

fn language_checks(ctx: &ValidationContext<'_>) -> Vec<Check> {
    let sections = &ctx.content.sections;
    let any = !sections.is_empty();
    let text: String = sections
        .iter()
        .flat_map(|s| [s.title.as_str(), "\n", s.content.as_str(), "\n"])
        .collect();
    let language = ctx.content.metadata.language;
    vec![
        structural(
            "non-empty-bodies",
            "Every section has body text",
            any && sections.iter().all(|s| !s.content.trim().is_empty()),
        ),
        structural(
            "titles-present",
            "Every section has a title",
            any && sections.iter().all(|s| !s.title.trim().is_empty()),
        ),
        structural(
            "placeholders-resolved",
            "No unresolved {token} placeholders remain",
            any && !has_placeholder(
                &text,
                &[
                    ctx.content.metadata.company_name.as_str(),
                    ctx.content.metadata.industry.as_str(),
                ],
            ),
        ),
        structural(
            "language-consistency",
            &format!("Text reads as {language}"),
            any && is_language_consistent(&text, language),
        ),
    ]
}

fn cultural_checks(ctx: &ValidationContext<'_>) -> Vec<Check> {
    let adaptation = &ctx.content.cultural_adaptation;
    let phrase = |value: &str| {
        let value = value.trim().to_lowercase();
        !value.is_empty() && ctx.text_lower.contains(&value)
    };
    let sections = &ctx.content.sections;
    vec![
        structural("greeting", "Opening greeting is present", phrase(&adaptation.greeting)),
        structural("closing", "Closing phrase is present", phrase(&adaptation.closing)),
        structural("signature", "Signature line is present", phrase(&adaptation.signature)),
        structural(
            "cultural-notes",
            "Every section carries a cultural note",
            !sections.is_empty() && sections.iter().all(|s| !s.cultural_notes.is_empty()),
        ),
    ]
}

fn structural(id: &str, label: &str, met: bool) -> Check {
    Check {
        id: id.to_string(),
        label: label.to_string(),
        met,
        mandatory: false,
    }
}

fn severity(axis: ComplianceAxis, mandatory: bool) -> Severity {
    match axis {
        ComplianceAxis::Regulatory | ComplianceAxis::Security if mandatory => Severity::Critical,
        ComplianceAxis::Regulatory
        | ComplianceAxis::Security
        | ComplianceAxis::Language
        | ComplianceAxis::Industry => Severity::Warning,
        ComplianceAxis::Cultural => Severity::Suggestion,
    }
}

fn recommendation(result: &ComplianceResult) -> Option<ImprovementRecommendation> {
    let priority = match result.status {
        ComplianceStatus::NonCompliant => Priority::High,
        ComplianceStatus::PartiallyCompliant => Priority::Medium,
        ComplianceStatus::Compliant if result.score < Score::ONE => Priority::Low,
        ComplianceStatus::Compliant => return None,
    };
    Some(ImprovementRecommendation {
        axis: result.axis,
        priority,
        message: format!(
            "Improve {} coverage ({}): add {}",
            result.axis,
            result.score,
            result.requirements_missing.join(", ")
        ),
    })
}
