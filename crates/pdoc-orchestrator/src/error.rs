//! # Generation Errors
//!
//! One variant per failure kind of a generation request. Only
//! [`GenerationError::InvalidBusinessProfile`] and
//! [`GenerationError::EmptyRequest`] abort a whole request; every other
//! kind is scoped to one document type and is captured into the batch
//! result as a [`DocumentFailure`].
//!
//! A document that validates below threshold is not an error. It is
//! reported through its `LegalValidation` status and issues.

use pdoc_core::{DocumentType, ProfileError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while generating documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The business profile is missing a required field.
    #[error("invalid business profile: {0}")]
    InvalidBusinessProfile(#[from] ProfileError),

    /// The request names no document types.
    #[error("generation request names no document types")]
    EmptyRequest,

    /// A requested document type is outside the closed enumeration.
    #[error("unsupported document type \"{0}\"")]
    UnsupportedDocumentType(String),

    /// The catalog returned a template for a different document type.
    #[error("template resolution failed for {document_type}: {detail}")]
    TemplateResolutionFailure {
        /// Requested document type.
        document_type: DocumentType,
        /// What went wrong.
        detail: String,
    },

    /// The pipeline produced an impossible intermediate result.
    #[error("internal inconsistency for {document_type}: {detail}")]
    InternalInconsistency {
        /// Affected document type.
        document_type: DocumentType,
        /// What went wrong.
        detail: String,
    },

    /// The request was cancelled before this document type started.
    #[error("generation of {document_type} was cancelled before it started")]
    Cancelled {
        /// Skipped document type.
        document_type: DocumentType,
    },

    /// A pipeline worker panicked or was aborted.
    #[error("pipeline worker failed: {detail}")]
    ExecutionFailure {
        /// Affected document type, when known.
        document_type: Option<DocumentType>,
        /// Join error text.
        detail: String,
    },
}

impl GenerationError {
    /// The serializable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBusinessProfile(_) => ErrorKind::InvalidBusinessProfile,
            Self::EmptyRequest => ErrorKind::EmptyRequest,
            Self::UnsupportedDocumentType(_) => ErrorKind::UnsupportedDocumentType,
            Self::TemplateResolutionFailure { .. } => ErrorKind::TemplateResolutionFailure,
            Self::InternalInconsistency { .. } => ErrorKind::InternalInconsistency,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
            Self::ExecutionFailure { .. } => ErrorKind::ExecutionFailure,
        }
    }

    /// Identifier of the affected document type, if the error is scoped to one.
    pub fn document_type(&self) -> Option<String> {
        match self {
            Self::InvalidBusinessProfile(_) | Self::EmptyRequest => None,
            Self::UnsupportedDocumentType(raw) => Some(raw.clone()),
            Self::TemplateResolutionFailure { document_type, .. }
            | Self::InternalInconsistency { document_type, .. }
            | Self::Cancelled { document_type } => Some(document_type.to_string()),
            Self::ExecutionFailure { document_type, .. } => {
                document_type.map(|dt| dt.to_string())
            }
        }
    }

    /// Whether this error aborts the whole request.
    pub fn is_request_fatal(&self) -> bool {
        matches!(self, Self::InvalidBusinessProfile(_) | Self::EmptyRequest)
    }

    /// Structured form for the batch result.
    pub fn to_failure(&self) -> DocumentFailure {
        DocumentFailure {
            kind: self.kind(),
            message: self.to_string(),
            document_type: self.document_type(),
        }
    }
}

/// Kind of a [`GenerationError`], as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or blank required profile field.
    InvalidBusinessProfile,
    /// No document types requested.
    EmptyRequest,
    /// Document type outside the closed enumeration.
    UnsupportedDocumentType,
    /// Template for the wrong document type.
    TemplateResolutionFailure,
    /// Impossible intermediate result, e.g. no sections after synthesis.
    InternalInconsistency,
    /// Skipped because the request was cancelled.
    Cancelled,
    /// Worker panicked or was aborted.
    ExecutionFailure,
}

impl ErrorKind {
    /// The snake_case label, also used as the metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBusinessProfile => "invalid_business_profile",
            Self::EmptyRequest => "empty_request",
            Self::UnsupportedDocumentType => "unsupported_document_type",
            Self::TemplateResolutionFailure => "template_resolution_failure",
            Self::InternalInconsistency => "internal_inconsistency",
            Self::Cancelled => "cancelled",
            Self::ExecutionFailure => "execution_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure recorded in a batch result: kind, message and affected type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    /// Error kind.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Identifier of the affected document type, as requested.
    pub document_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_errors_convert_and_abort_the_request() {
        let err: GenerationError = ProfileError::MissingField("company_name").into();
        assert_eq!(err.kind(), ErrorKind::InvalidBusinessProfile);
        assert!(err.is_request_fatal());
        assert_eq!(err.document_type(), None);
        assert!(err.to_string().contains("company_name"));
    }

    #[test]
    fn per_type_errors_carry_the_document_type() {
        let err = GenerationError::InternalInconsistency {
            document_type: DocumentType::VendorPrivacyAssessment,
            detail: "no sections".to_string(),
        };
        let failure = err.to_failure();
        assert_eq!(failure.kind, ErrorKind::InternalInconsistency);
        assert_eq!(failure.document_type.as_deref(), Some("vendor-privacy-assessment"));
        assert!(!err.is_request_fatal());
    }

    #[test]
    fn unsupported_type_keeps_the_raw_identifier() {
        let err = GenerationError::UnsupportedDocumentType("tax-return".to_string());
        assert_eq!(err.document_type().as_deref(), Some("tax-return"));
        assert!(err.to_string().contains("tax-return"));
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        for kind in [
            ErrorKind::InternalInconsistency,
            ErrorKind::Cancelled,
            ErrorKind::UnsupportedDocumentType,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
