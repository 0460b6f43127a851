//! # pdoc-compliance — Compliance Validation and Personalization Scoring
//!
//! Two read-only views over a synthesized [`DocumentContent`](pdoc_core::DocumentContent):
//!
//! - [`ComplianceValidator`] scores five independent axes by requirement
//!   coverage and bands each score into a [`ComplianceStatus`]. Findings are
//!   data: a weak document yields issues and recommendations, never an error.
//! - [`PersonalizationScorer`] measures how much of the business profile and
//!   its analysis shows up in the text.
//!
//! Both evaluate the content as synthesized. Neither rewrites it.

#![deny(missing_docs)]

pub mod axis;
pub mod matching;
pub mod scorer;
pub mod validator;

pub use axis::{ComplianceAxis, ComplianceResult, ComplianceStatus, COMPLIANT_THRESHOLD, PARTIAL_THRESHOLD};
pub use scorer::{PersonalizationBreakdown, PersonalizationScorer};
pub use validator::{
    ComplianceValidator, ImprovementRecommendation, LegalValidation, Priority, Severity,
    ValidationIssue,
};
