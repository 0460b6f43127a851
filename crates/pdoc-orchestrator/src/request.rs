//! Request and result records at the pipeline boundary.

use pdoc_analysis::BusinessAnalysis;
use pdoc_compliance::LegalValidation;
use pdoc_core::{
    CulturalAdaptation, DocumentContent, DocumentId, DocumentType, Language, OutputFormat,
    ProfileInput, RequestId, Score, Timestamp,
};
use pdoc_synthesis::GenerationOptions;
use serde::{Deserialize, Serialize};

use crate::error::DocumentFailure;
use crate::status::{GenerationState, GenerationStatus};

/// A request to generate one or more documents for one business.
///
/// Accepts the camelCase field names of the presentation layer as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Document type identifiers, e.g. `privacy-policy`.
    #[serde(alias = "documentTypes")]
    pub document_types: Vec<String>,
    /// Unvalidated business profile.
    #[serde(alias = "businessProfile")]
    pub business_profile: ProfileInput,
    /// `vietnamese`/`vi` or `english`/`en`. Absent uses the configured default.
    #[serde(default)]
    pub language: Option<String>,
    /// Closed set of generation options.
    #[serde(default)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// A request for `document_types` with default options.
    pub fn new<I, S>(document_types: I, business_profile: ProfileInput, language: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            document_types: document_types.into_iter().map(Into::into).collect(),
            business_profile,
            language: Some(language.as_str().to_string()),
            options: GenerationOptions::default(),
        }
    }

    /// Builder: replace the options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve the request language, falling back to `default`.
    pub fn resolved_language(&self, default: Language) -> Language {
        match &self.language {
            Some(label) => Language::from_label_or_default(label),
            None => default,
        }
    }
}

/// One generated document with everything that went into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Time-ordered unique id.
    pub id: DocumentId,
    /// Document type; equals the type of the template used.
    pub document_type: DocumentType,
    /// Synthesized content.
    pub content: DocumentContent,
    /// Profile analysis snapshot.
    pub analysis: BusinessAnalysis,
    /// Five-axis compliance validation.
    pub validation: LegalValidation,
    /// Cultural adaptation applied to the text.
    pub cultural_adaptation: CulturalAdaptation,
    /// Final personalization score.
    pub personalization_score: Score,
    /// When generation finished.
    pub generated_at: Timestamp,
    /// Rendering format tag for the presentation layer.
    pub output_format: OutputFormat,
}

/// Result of a generation request: documents and per-type failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The request.
    pub request_id: RequestId,
    /// Generated documents in request order.
    pub documents: Vec<GeneratedDocument>,
    /// Per-type failures in request order.
    pub failures: Vec<DocumentFailure>,
    /// Final status snapshot.
    pub status: GenerationStatus,
}

impl GenerationOutcome {
    /// Whether the request completed (at least one document generated).
    pub fn is_completed(&self) -> bool {
        self.status.state == GenerationState::Completed
    }

    /// The generated document of `document_type`, if any.
    pub fn document(&self, document_type: DocumentType) -> Option<&GeneratedDocument> {
        self.documents.iter().find(|d| d.document_type == document_type)
    }

    /// The failure recorded for the type identifier `document_type`, if any.
    pub fn failure(&self, document_type: &str) -> Option<&DocumentFailure> {
        self.failures
            .iter()
            .find(|f| f.document_type.as_deref() == Some(document_type))
    }
}
