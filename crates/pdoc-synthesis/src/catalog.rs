//! # Template Catalog
//!
//! `resolve(document_type, industry)` always returns a template. Where an
//! industry-specific variant exists it is returned; otherwise a generic
//! skeleton is built from the document type's section set in the rule
//! tables. A type without a section set yields a template with no sections;
//! the pipeline reports that as an internal inconsistency.
//!
//! ## Industry variants
//!
//! | Document type | Industries | Extra section |
//! |---------------|------------|---------------|
//! | `privacy-policy` | healthcare, finance | `sensitive-data` after `data-collection` |
//! | `consent-forms` | healthcare | `sensitive-data` after `consent-scope` |

use std::sync::Arc;

use pdoc_core::{DocumentType, Localized, Score};
use pdoc_rules::{CulturalRecord, RuleTables, DECREE_13, PDPL_2025};
use serde::{Deserialize, Serialize};

const GENERIC_COMPATIBILITY: f64 = 0.85;
const INDUSTRY_COMPATIBILITY: f64 = 0.95;
const CYBERSECURITY_LAW: &str = "Luật An ninh mạng 2018";

struct Specialization {
    document_type: DocumentType,
    industries: &'static [&'static str],
    section: &'static str,
    after: &'static str,
}

const SPECIALIZATIONS: &[Specialization] = &[
    Specialization {
        document_type: DocumentType::PrivacyPolicy,
        industries: &["healthcare", "finance"],
        section: "sensitive-data",
        after: "data-collection",
    },
    Specialization {
        document_type: DocumentType::ConsentForms,
        industries: &["healthcare"],
        section: "sensitive-data",
        after: "consent-scope",
    },
];

/// A resolved document template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// `tpl-<document-type>-<industry|generic>`.
    pub id: String,
    /// Document type the template builds.
    pub document_type: DocumentType,
    /// Industry key for industry-specific templates.
    pub industry: Option<String>,
    /// Ordered section ids.
    pub sections: Vec<String>,
    /// Document title.
    pub title: Localized,
    /// Purpose description.
    pub description: Localized,
    /// Feature tags.
    pub features: Vec<String>,
    /// How well the template fits the requested industry.
    pub compatibility: Score,
    /// Regulations the document is written against.
    pub applicable_regulations: Vec<String>,
    /// Cultural adaptation used when the caller supplies none.
    pub default_cultural: CulturalRecord,
}

impl Template {
    /// Whether this is an industry-specific variant.
    pub fn is_industry_specific(&self) -> bool {
        self.industry.is_some()
    }
}

/// Read-only template catalog over shared rule tables.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    tables: Arc<RuleTables>,
}

impl TemplateCatalog {
    /// Create a catalog over `tables`.
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// Resolve the template for `document_type` and an open industry label.
    pub fn resolve(&self, document_type: DocumentType, industry_type: &str) -> Template {
        let industry = self.tables.industry(industry_type);
        let specialization = SPECIALIZATIONS.iter().find(|s| {
            s.document_type == document_type && s.industries.contains(&industry.key)
        });
        match specialization {
            Some(variant) => {
                let mut template = self.generic(document_type);
                let at = template
                    .sections
                    .iter()
                    .position(|id| id == variant.after)
                    .map_or(template.sections.len(), |i| i + 1);
                template.sections.insert(at, variant.section.to_string());
                template.id = format!("tpl-{}-{}", document_type, industry.key);
                template.industry = Some(industry.key.to_string());
                template.compatibility = Score::new(INDUSTRY_COMPATIBILITY);
                template.features.push(format!("industry:{}", industry.key));
                template.features.push(variant.section.to_string());
                template
            }
            None => self.generic(document_type),
        }
    }

    /// The generic skeleton for `document_type`, ignoring industry.
    pub fn resolve_generic(&self, document_type: DocumentType) -> Template {
        self.generic(document_type)
    }

    /// Resolve every document type for one industry, in declaration order.
    pub fn catalog(&self, industry_type: &str) -> Vec<Template> {
        DocumentType::all()
            .iter()
            .map(|dt| self.resolve(*dt, industry_type))
            .collect()
    }

    fn generic(&self, document_type: DocumentType) -> Template {
        let sections = self.tables.section_set(document_type).to_vec();
        if sections.is_empty() {
            tracing::debug!(%document_type, "no section set defined for document type");
        }
        Template {
            id: format!("tpl-{document_type}-generic"),
            document_type,
            industry: None,
            sections,
            title: title(document_type),
            description: description(document_type),
            features: vec![
                "pdpl-2025".to_string(),
                "bilingual".to_string(),
                "cultural-adaptation".to_string(),
            ],
            compatibility: Score::new(GENERIC_COMPATIBILITY),
            applicable_regulations: regulations(document_type),
            default_cultural: self.tables.cultural_fallback.clone(),
        }
    }
}

fn title(document_type: DocumentType) -> Localized {
    match document_type {
        DocumentType::PrivacyPolicy => Localized::new("Chính sách bảo mật", "Privacy Policy"),
        DocumentType::PrivacyNotice => {
            Localized::new("Thông báo xử lý dữ liệu cá nhân", "Privacy Notice")
        }
        DocumentType::ConsentForms => Localized::new("Mẫu đồng ý", "Consent Form"),
        DocumentType::DataProcessingAgreement => {
            Localized::new("Thỏa thuận xử lý dữ liệu", "Data Processing Agreement")
        }
        DocumentType::DataSubjectRightsProcedure => Localized::new(
            "Quy trình thực hiện quyền của chủ thể dữ liệu",
            "Data Subject Rights Procedure",
        ),
        DocumentType::SecurityIncidentResponse => Localized::new(
            "Kế hoạch ứng phó sự cố bảo mật",
            "Security Incident Response Plan",
        ),
        DocumentType::DataRetentionPolicy => {
            Localized::new("Chính sách lưu trữ dữ liệu", "Data Retention Policy")
        }
        DocumentType::CrossBorderTransferAgreement => Localized::new(
            "Thỏa thuận chuyển dữ liệu ra nước ngoài",
            "Cross-Border Transfer Agreement",
        ),
        DocumentType::DpoAppointmentLetter => Localized::new(
            "Quyết định bổ nhiệm nhân sự bảo vệ dữ liệu",
            "DPO Appointment Letter",
        ),
        DocumentType::ComplianceAuditChecklist => {
            Localized::new("Danh mục kiểm tra tuân thủ", "Compliance Audit Checklist")
        }
        DocumentType::EmployeeTrainingMaterials => {
            Localized::new("Tài liệu đào tạo nhân viên", "Employee Training Materials")
        }
        DocumentType::VendorPrivacyAssessment => Localized::new(
            "Đánh giá quyền riêng tư của nhà cung cấp",
            "Vendor Privacy Assessment",
        ),
    }
}

fn description(document_type: DocumentType) -> Localized {
    match document_type {
        DocumentType::PrivacyPolicy => Localized::new(
            "Công bố cách doanh nghiệp xử lý dữ liệu cá nhân",
            "Discloses how the business processes personal data",
        ),
        DocumentType::PrivacyNotice => Localized::new(
            "Thông báo ngắn tại điểm thu thập dữ liệu",
            "Short notice shown where data is collected",
        ),
        DocumentType::ConsentForms => Localized::new(
            "Ghi nhận sự đồng ý của chủ thể dữ liệu",
            "Records the data subject's consent",
        ),
        DocumentType::DataProcessingAgreement => Localized::new(
            "Quy định nghĩa vụ giữa bên kiểm soát và bên xử lý",
            "Sets obligations between controller and processor",
        ),
        DocumentType::DataSubjectRightsProcedure => Localized::new(
            "Hướng dẫn nội bộ xử lý yêu cầu của chủ thể dữ liệu",
            "Internal guide for handling data subject requests",
        ),
        DocumentType::SecurityIncidentResponse => Localized::new(
            "Các bước phát hiện, thông báo và khắc phục sự cố",
            "Steps to detect, report and remedy incidents",
        ),
        DocumentType::DataRetentionPolicy => Localized::new(
            "Thời hạn lưu trữ và quy trình xóa dữ liệu",
            "Retention periods and deletion procedure",
        ),
        DocumentType::CrossBorderTransferAgreement => Localized::new(
            "Điều kiện chuyển dữ liệu cá nhân ra nước ngoài",
            "Conditions for transferring personal data abroad",
        ),
        DocumentType::DpoAppointmentLetter => Localized::new(
            "Bổ nhiệm nhân sự phụ trách bảo vệ dữ liệu",
            "Appoints the person responsible for data protection",
        ),
        DocumentType::ComplianceAuditChecklist => Localized::new(
            "Danh mục tự kiểm tra mức độ tuân thủ",
            "Self-assessment checklist for compliance",
        ),
        DocumentType::EmployeeTrainingMaterials => Localized::new(
            "Nội dung đào tạo nhận thức bảo vệ dữ liệu",
            "Data protection awareness training content",
        ),
        DocumentType::VendorPrivacyAssessment => Localized::new(
            "Đánh giá mức độ bảo vệ dữ liệu của nhà cung cấp",
            "Assesses a vendor's data protection posture",
        ),
    }
}

fn regulations(document_type: DocumentType) -> Vec<String> {
    let mut regs = vec![PDPL_2025.to_string(), DECREE_13.to_string()];
    match document_type {
        DocumentType::SecurityIncidentResponse | DocumentType::CrossBorderTransferAgreement => {
            regs.push(CYBERSECURITY_LAW.to_string());
        }
        DocumentType::PrivacyPolicy
        | DocumentType::PrivacyNotice
        | DocumentType::ConsentForms
        | DocumentType::DataProcessingAgreement
        | DocumentType::DataSubjectRightsProcedure
        | DocumentType::DataRetentionPolicy
        | DocumentType::DpoAppointmentLetter
        | DocumentType::ComplianceAuditChecklist
        | DocumentType::EmployeeTrainingMaterials
        | DocumentType::VendorPrivacyAssessment => {}
    }
    regs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new(Arc::new(RuleTables::builtin()))
    }

    #[test]
    fn generic_privacy_policy() {
        let t = catalog().resolve(DocumentType::PrivacyPolicy, "technology");
        assert_eq!(t.id, "tpl-privacy-policy-generic");
        assert_eq!(t.sections, ["introduction", "data-collection", "legal-basis"]);
        assert_eq!(t.compatibility, Score::new(0.85));
        assert!(!t.is_industry_specific());
        assert_eq!(t.document_type, DocumentType::PrivacyPolicy);
    }

    #[test]
    fn healthcare_privacy_policy_adds_sensitive_data() {
        let t = catalog().resolve(DocumentType::PrivacyPolicy, "Healthcare");
        assert_eq!(t.id, "tpl-privacy-policy-healthcare");
        assert_eq!(
            t.sections,
            ["introduction", "data-collection", "sensitive-data", "legal-basis"]
        );
        assert_eq!(t.compatibility, Score::new(0.95));
        assert!(t.features.iter().any(|f| f == "industry:healthcare"));
    }

    #[test]
    fn banking_alias_gets_finance_variant() {
        let t = catalog().resolve(DocumentType::PrivacyPolicy, "banking");
        assert_eq!(t.id, "tpl-privacy-policy-finance");
    }

    #[test]
    fn healthcare_consent_inserts_after_scope() {
        let t = catalog().resolve(DocumentType::ConsentForms, "healthcare");
        assert_eq!(t.sections[1], "sensitive-data");
        let generic = catalog().resolve(DocumentType::ConsentForms, "finance");
        assert!(!generic.is_industry_specific());
    }

    #[test]
    fn resolve_generic_ignores_industry() {
        let t = catalog().resolve_generic(DocumentType::PrivacyPolicy);
        assert!(!t.sections.iter().any(|s| s == "sensitive-data"));
    }

    #[test]
    fn vendor_assessment_template_is_empty() {
        let t = catalog().resolve(DocumentType::VendorPrivacyAssessment, "technology");
        assert!(t.sections.is_empty());
        assert_eq!(t.id, "tpl-vendor-privacy-assessment-generic");
    }

    #[test]
    fn catalog_covers_every_type_in_order() {
        let all = catalog().catalog("unknown-sector");
        assert_eq!(all.len(), DocumentType::COUNT);
        for (template, dt) in all.iter().zip(DocumentType::all()) {
            assert_eq!(template.document_type, *dt);
        }
    }

    #[test]
    fn incident_plan_cites_cybersecurity_law() {
        let t = catalog().resolve(DocumentType::SecurityIncidentResponse, "technology");
        assert!(t.applicable_regulations.iter().any(|r| r == CYBERSECURITY_LAW));
    }
}
