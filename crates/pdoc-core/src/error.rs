//! # Error Hierarchy
//!
//! Structured error types shared by every crate in the workspace, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Errors carry the offending input so that callers can surface a structured
//! message (kind + detail) instead of an opaque failure.

use thiserror::Error;

/// Top-level error type for the document generator core.
#[derive(Error, Debug)]
pub enum PdocError {
    /// A business profile failed validation at the input boundary.
    #[error("invalid business profile: {0}")]
    Profile(#[from] ProfileError),

    /// A document type identifier outside the closed enumeration.
    #[error("unknown document type: \"{0}\"")]
    UnknownDocumentType(String),

    /// An output format tag outside `html|pdf|docx`.
    #[error("unknown output format: \"{0}\" (expected html, pdf or docx)")]
    UnknownOutputFormat(String),

    /// A content digest string could not be parsed.
    #[error("invalid content digest: \"{0}\" (expected sha256:<64 hex chars>)")]
    InvalidDigest(String),

    /// Timestamp string is not valid UTC ISO 8601.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for the required fields of a business profile.
///
/// Only the company name and industry are mandatory. Every other field has
/// a documented default and never produces an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A required field was absent from the input.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field was present but empty or whitespace only.
    #[error("required field `{0}` must not be blank")]
    BlankField(&'static str),
}
