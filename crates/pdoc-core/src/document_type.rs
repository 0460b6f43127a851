//! # Document Types — Single Source of Truth
//!
//! Defines the [`DocumentType`] enum with all twelve legal-document kinds the
//! generator knows about. Template selection, section sets, legal requirement
//! applicability and validator scoping are all keyed by this enum. Every
//! `match` on it is exhaustive, so adding a kind is a compile error until
//! every table handles it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PdocError;

/// The closed set of legal/compliance documents the pipeline can generate.
///
/// | # | Identifier | Document |
/// |---|------------|----------|
/// |  1 | `privacy-policy` | Privacy policy |
/// |  2 | `privacy-notice` | Privacy notice |
/// |  3 | `consent-forms` | Consent forms |
/// |  4 | `data-processing-agreement` | Data-processing agreement |
/// |  5 | `data-subject-rights-procedure` | Data-subject-rights procedure |
/// |  6 | `security-incident-response` | Security-incident-response plan |
/// |  7 | `data-retention-policy` | Data-retention policy |
/// |  8 | `cross-border-transfer-agreement` | Cross-border-transfer agreement |
/// |  9 | `dpo-appointment-letter` | DPO appointment letter |
/// | 10 | `compliance-audit-checklist` | Compliance-audit checklist |
/// | 11 | `employee-training-materials` | Employee training materials |
/// | 12 | `vendor-privacy-assessment` | Vendor privacy assessment |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// Public privacy policy.
    PrivacyPolicy,
    /// Short-form privacy notice shown at the point of collection.
    PrivacyNotice,
    /// Data-subject consent forms.
    ConsentForms,
    /// Controller/processor data-processing agreement.
    DataProcessingAgreement,
    /// Internal procedure for handling data-subject requests.
    DataSubjectRightsProcedure,
    /// Security-incident and breach response plan.
    SecurityIncidentResponse,
    /// Data-retention and deletion policy.
    DataRetentionPolicy,
    /// Agreement governing transfers of personal data abroad.
    CrossBorderTransferAgreement,
    /// Letter appointing a data protection officer.
    DpoAppointmentLetter,
    /// Checklist for an internal compliance audit.
    ComplianceAuditChecklist,
    /// Data-protection training material for employees.
    EmployeeTrainingMaterials,
    /// Privacy assessment questionnaire for vendors.
    VendorPrivacyAssessment,
}

impl DocumentType {
    /// Return all document types in declaration order.
    pub fn all() -> &'static [DocumentType] {
        &[
            Self::PrivacyPolicy,
            Self::PrivacyNotice,
            Self::ConsentForms,
            Self::DataProcessingAgreement,
            Self::DataSubjectRightsProcedure,
            Self::SecurityIncidentResponse,
            Self::DataRetentionPolicy,
            Self::CrossBorderTransferAgreement,
            Self::DpoAppointmentLetter,
            Self::ComplianceAuditChecklist,
            Self::EmployeeTrainingMaterials,
            Self::VendorPrivacyAssessment,
        ]
    }

    /// The total number of document types.
    pub const COUNT: usize = 12;

    /// The kebab-case identifier used on the wire and in template ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "privacy-policy",
            Self::PrivacyNotice => "privacy-notice",
            Self::ConsentForms => "consent-forms",
            Self::DataProcessingAgreement => "data-processing-agreement",
            Self::DataSubjectRightsProcedure => "data-subject-rights-procedure",
            Self::SecurityIncidentResponse => "security-incident-response",
            Self::DataRetentionPolicy => "data-retention-policy",
            Self::CrossBorderTransferAgreement => "cross-border-transfer-agreement",
            Self::DpoAppointmentLetter => "dpo-appointment-letter",
            Self::ComplianceAuditChecklist => "compliance-audit-checklist",
            Self::EmployeeTrainingMaterials => "employee-training-materials",
            Self::VendorPrivacyAssessment => "vendor-privacy-assessment",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = PdocError;

    /// Parse a document type from its identifier. Underscores are accepted
    /// in place of hyphens and matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|dt| dt.as_str() == normalized)
            .ok_or_else(|| PdocError::UnknownDocumentType(s.to_string()))
    }
}

/// Rendering format requested by the caller. The core never renders; the
/// tag is passed through to the presentation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML (default).
    #[default]
    Html,
    /// PDF.
    Pdf,
    /// Word document.
    Docx,
}

impl OutputFormat {
    /// The lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(PdocError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_count_entries() {
        assert_eq!(DocumentType::all().len(), DocumentType::COUNT);
    }

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for dt in DocumentType::all() {
            let parsed: DocumentType = dt.as_str().parse().unwrap();
            assert_eq!(parsed, *dt);
        }
    }

    #[test]
    fn serde_matches_as_str() {
        for dt in DocumentType::all() {
            let json = serde_json::to_string(dt).unwrap();
            assert_eq!(json, format!("\"{}\"", dt.as_str()));
        }
    }

    #[test]
    fn from_str_is_lenient_on_case_and_underscores() {
        assert_eq!(
            "Privacy_Policy".parse::<DocumentType>().unwrap(),
            DocumentType::PrivacyPolicy
        );
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "tax-return".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, PdocError::UnknownDocumentType(ref s) if s == "tax-return"));
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert!("odt".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn identifiers_parse_regardless_of_case_and_separator(
                index in 0..DocumentType::COUNT,
                upper in prop::collection::vec(any::<bool>(), 64),
                underscores in any::<bool>(),
            ) {
                let dt = DocumentType::all()[index];
                let mangled: String = dt
                    .as_str()
                    .chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, up)| match c {
                        '-' if underscores => '_',
                        c if *up => c.to_ascii_uppercase(),
                        c => c,
                    })
                    .collect();
                prop_assert_eq!(mangled.parse::<DocumentType>().unwrap(), dt);
                let json = serde_json::to_string(&dt).unwrap();
                prop_assert_eq!(serde_json::from_str::<DocumentType>(&json).unwrap(), dt);
            }
        }
    }
}
