//! # Built-in Vietnamese PDPL Tables
//!
//! The reference tables shipped with the generator, built around the
//! Personal Data Protection Law 2025 and Decree 13/2023/ND-CP:
//!
//! | Table | Contents |
//! |-------|----------|
//! | Industries | technology, finance, healthcare, education, ecommerce, manufacturing (+ aliases) |
//! | Complexity | 3 × 3 business size × processing volume |
//! | Cultural styles | 3 × 3 region × communication style |
//! | Cultural records | north/formal, north/modern, central/formal, south/modern, south/casual |
//! | Legal requirements | 11 baseline obligations |
//! | Security checks | safeguards, A05 supervision, breach response, access control |
//!
//! Keywords are lowercase; the validator matches them against lowercased
//! document text.

use std::collections::BTreeMap;

use pdoc_core::{
    BusinessSize, CommunicationStyle, DataVolume, DocumentType, Formality, LanguageComplexity,
    Localized, Region,
};

use crate::tables::{
    ComplexityLevel, CulturalRecord, IndustryEntry, IndustryRequirement, LegalRequirement,
    RegionalRecord, RuleTables, SecurityCheck,
};

/// Citation of the framework law.
pub const PDPL_2025: &str = "Luật Bảo vệ dữ liệu cá nhân 2025";
/// Citation prefix of the implementing decree.
pub const DECREE_13: &str = "Nghị định 13/2023/NĐ-CP";

fn l(vi: &str, en: &str) -> Localized {
    Localized::new(vi, en)
}

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn decree(article: u32) -> String {
    format!("{DECREE_13}, Điều {article}")
}

impl RuleTables {
    /// The built-in table set.
    pub fn builtin() -> Self {
        Self {
            industries: industries(),
            industry_aliases: [("banking", "finance"), ("retail", "ecommerce")]
                .into_iter()
                .map(|(a, t)| (a.to_string(), t.to_string()))
                .collect(),
            default_industry: generic_industry(),
            complexity: complexity_matrix(),
            cultural_styles: cultural_styles(),
            default_cultural_style: l(
                "phong cách cân bằng theo văn hóa Việt Nam",
                "balanced Vietnamese-culture style",
            ),
            cultural_records: cultural_records(),
            cultural_fallback: cultural_fallback(),
            legal_requirements: legal_requirements(),
            security_checks: security_checks(),
            section_sets: section_sets(),
            section_recommendations: section_recommendations(),
        }
    }
}

// ── Industries ────────────────────────────────────────────────────────

fn req(id: &str, text: Localized, keywords: &[&str]) -> IndustryRequirement {
    IndustryRequirement {
        id: id.to_string(),
        text,
        keywords: kw(keywords),
    }
}

fn industries() -> BTreeMap<String, IndustryEntry> {
    let mut map = BTreeMap::new();
    map.insert(
        "technology".to_string(),
        IndustryEntry {
            description: l(
                "Doanh nghiệp công nghệ xử lý dữ liệu người dùng trên nền tảng số",
                "Technology businesses processing user data on digital platforms",
            ),
            requirements: vec![
                req(
                    "data-minimization",
                    l("Chỉ thu thập dữ liệu tối thiểu cần thiết", "Collect only the minimum data necessary"),
                    &["tối thiểu", "minimi"],
                ),
                req(
                    "cookies",
                    l("Công khai việc sử dụng cookie", "Disclose the use of cookies"),
                    &["cookie"],
                ),
                req(
                    "cloud-storage",
                    l("Nêu rõ việc lưu trữ trên điện toán đám mây", "Disclose cloud storage of data"),
                    &["đám mây", "cloud"],
                ),
            ],
        },
    );
    map.insert(
        "finance".to_string(),
        IndustryEntry {
            description: l(
                "Tổ chức tài chính, ngân hàng chịu sự giám sát của Ngân hàng Nhà nước",
                "Financial institutions supervised by the State Bank of Vietnam",
            ),
            requirements: vec![
                req(
                    "transaction-records",
                    l("Bảo vệ dữ liệu giao dịch", "Protect transaction data"),
                    &["giao dịch", "transaction"],
                ),
                req(
                    "customer-identification",
                    l("Quy trình định danh khách hàng", "Know-your-customer procedures"),
                    &["định danh khách hàng", "know your customer", "kyc"],
                ),
                req(
                    "credit-information",
                    l("Xử lý thông tin tín dụng", "Handling of credit information"),
                    &["thông tin tín dụng", "credit information"],
                ),
            ],
        },
    );
    map.insert(
        "healthcare".to_string(),
        IndustryEntry {
            description: l(
                "Cơ sở y tế xử lý dữ liệu sức khỏe là dữ liệu cá nhân nhạy cảm",
                "Healthcare providers processing health data as sensitive personal data",
            ),
            requirements: vec![
                req(
                    "health-data",
                    l("Bảo vệ dữ liệu sức khỏe", "Protect health data"),
                    &["dữ liệu sức khỏe", "health data"],
                ),
                req(
                    "sensitive-data",
                    l("Biện pháp riêng cho dữ liệu nhạy cảm", "Dedicated measures for sensitive data"),
                    &["nhạy cảm", "sensitive"],
                ),
                req(
                    "medical-confidentiality",
                    l("Giữ bí mật thông tin y tế", "Medical confidentiality"),
                    &["bí mật", "confidential"],
                ),
            ],
        },
    );
    map.insert(
        "education".to_string(),
        IndustryEntry {
            description: l(
                "Cơ sở giáo dục xử lý dữ liệu của học sinh, sinh viên",
                "Educational institutions processing student data",
            ),
            requirements: vec![
                req(
                    "minors",
                    l("Bảo vệ dữ liệu của trẻ em", "Protect children's data"),
                    &["trẻ em", "children", "minor"],
                ),
                req(
                    "learning-records",
                    l("Quản lý hồ sơ học tập", "Manage learning records"),
                    &["kết quả học tập", "learning record", "academic"],
                ),
                req(
                    "guardian-consent",
                    l("Sự đồng ý của cha mẹ hoặc người giám hộ", "Parent or guardian consent"),
                    &["cha mẹ", "giám hộ", "parent", "guardian"],
                ),
            ],
        },
    );
    map.insert(
        "ecommerce".to_string(),
        IndustryEntry {
            description: l(
                "Doanh nghiệp thương mại điện tử xử lý dữ liệu mua sắm và thanh toán",
                "E-commerce businesses processing shopping and payment data",
            ),
            requirements: vec![
                req(
                    "payment-data",
                    l("Bảo vệ dữ liệu thanh toán", "Protect payment data"),
                    &["thanh toán", "payment"],
                ),
                req(
                    "marketing",
                    l("Kiểm soát tiếp thị trực tiếp", "Control direct marketing"),
                    &["tiếp thị", "marketing"],
                ),
                req(
                    "delivery",
                    l("Chia sẻ dữ liệu với đơn vị giao hàng", "Sharing data with delivery partners"),
                    &["giao hàng", "delivery"],
                ),
            ],
        },
    );
    map.insert(
        "manufacturing".to_string(),
        IndustryEntry {
            description: l(
                "Doanh nghiệp sản xuất xử lý dữ liệu người lao động và đối tác",
                "Manufacturers processing employee and partner data",
            ),
            requirements: vec![
                req(
                    "employee-data",
                    l("Bảo vệ dữ liệu người lao động", "Protect employee data"),
                    &["người lao động", "employee"],
                ),
                req(
                    "cctv",
                    l("Giám sát bằng camera", "Camera surveillance"),
                    &["camera", "cctv"],
                ),
                req(
                    "supply-chain",
                    l("Dữ liệu trong chuỗi cung ứng", "Data across the supply chain"),
                    &["chuỗi cung ứng", "supply chain", "supplier"],
                ),
            ],
        },
    );
    map
}

fn generic_industry() -> IndustryEntry {
    IndustryEntry {
        description: l(
            "Yêu cầu cơ bản theo Luật Bảo vệ dữ liệu cá nhân 2025",
            "Baseline requirements under the Personal Data Protection Law 2025",
        ),
        requirements: vec![
            req(
                "lawful-processing",
                l("Xử lý dữ liệu hợp pháp", "Process data lawfully"),
                &["hợp pháp", "lawful"],
            ),
            req(
                "subject-rights",
                l("Tôn trọng quyền của chủ thể dữ liệu", "Respect data subject rights"),
                &["quyền", "rights"],
            ),
            req(
                "security",
                l("Bảo đảm an toàn dữ liệu", "Keep data secure"),
                &["bảo mật", "security"],
            ),
        ],
    }
}

// ── Matrices ──────────────────────────────────────────────────────────

fn complexity_matrix() -> BTreeMap<BusinessSize, BTreeMap<DataVolume, ComplexityLevel>> {
    use ComplexityLevel::{High, Low, Medium};
    let rows = [
        (BusinessSize::Startup, [Low, Low, Medium]),
        (BusinessSize::Sme, [Low, Medium, High]),
        (BusinessSize::Enterprise, [Medium, High, High]),
    ];
    rows.into_iter()
        .map(|(size, levels)| {
            let row = DataVolume::all().iter().copied().zip(levels).collect();
            (size, row)
        })
        .collect()
}

fn cultural_styles() -> BTreeMap<Region, BTreeMap<CommunicationStyle, Localized>> {
    use CommunicationStyle::{Casual, Formal, Modern};
    let cells = [
        (Region::North, Formal, l("trang trọng, chuẩn mực kiểu miền Bắc", "formal, traditional Northern style")),
        (Region::North, Modern, l("hiện đại nhưng lịch sự kiểu miền Bắc", "modern yet courteous Northern style")),
        (Region::North, Casual, l("thân thiện, giữ chuẩn mực miền Bắc", "friendly Northern style with standard courtesy")),
        (Region::Central, Formal, l("trang trọng, mộc mạc kiểu miền Trung", "formal, plain-spoken Central style")),
        (Region::Central, Modern, l("hiện đại, chân thành kiểu miền Trung", "modern, sincere Central style")),
        (Region::Central, Casual, l("gần gũi, chân chất kiểu miền Trung", "warm, down-to-earth Central style")),
        (Region::South, Formal, l("trang trọng, cởi mở kiểu miền Nam", "formal, open Southern style")),
        (Region::South, Modern, l("năng động, hiện đại kiểu miền Nam", "dynamic, modern Southern style")),
        (Region::South, Casual, l("thân mật, gần gũi kiểu miền Nam", "familiar, friendly Southern style")),
    ];
    let mut map: BTreeMap<Region, BTreeMap<CommunicationStyle, Localized>> = BTreeMap::new();
    for (region, style, text) in cells {
        map.entry(region).or_default().insert(style, text);
    }
    map
}

// ── Cultural records ──────────────────────────────────────────────────

fn regional(style: Localized, terminology: Localized, structure: Localized, tone: Localized) -> RegionalRecord {
    RegionalRecord {
        language_style: style,
        terminology,
        structure,
        tone,
    }
}

fn cultural_records() -> BTreeMap<Region, BTreeMap<CommunicationStyle, CulturalRecord>> {
    let mut map: BTreeMap<Region, BTreeMap<CommunicationStyle, CulturalRecord>> = BTreeMap::new();

    map.entry(Region::North).or_default().insert(
        CommunicationStyle::Formal,
        CulturalRecord {
            header_style: "traditional-formal".to_string(),
            greeting: l("Kính gửi Quý khách hàng", "Dear Valued Customers"),
            closing: l("Trân trọng kính chào", "Respectfully yours"),
            signature: l("Ban Giám đốc", "Board of Directors"),
            formality: Formality::High,
            language_complexity: LanguageComplexity::Comprehensive,
            regional: regional(
                l("tiếng Việt chuẩn miền Bắc", "standard Northern Vietnamese"),
                l("thuật ngữ pháp lý đầy đủ", "full legal terminology"),
                l("cấu trúc phân cấp chặt chẽ", "strict hierarchical structure"),
                l("trang trọng, tôn kính", "formal and deferential"),
            ),
        },
    );
    map.entry(Region::North).or_default().insert(
        CommunicationStyle::Modern,
        CulturalRecord {
            header_style: "modern-professional".to_string(),
            greeting: l("Kính chào Quý khách", "Dear Customers"),
            closing: l("Trân trọng", "Best regards"),
            signature: l("Ban Điều hành", "Executive Team"),
            formality: Formality::Moderate,
            language_complexity: LanguageComplexity::Balanced,
            regional: regional(
                l("tiếng Việt chuẩn miền Bắc", "standard Northern Vietnamese"),
                l("thuật ngữ pháp lý kèm giải thích", "legal terminology with explanations"),
                l("cấu trúc rõ ràng, ngắn gọn", "clear, concise structure"),
                l("chuyên nghiệp, lịch sự", "professional and courteous"),
            ),
        },
    );
    map.entry(Region::Central).or_default().insert(
        CommunicationStyle::Formal,
        CulturalRecord {
            header_style: "classic-formal".to_string(),
            greeting: l("Kính gửi Quý khách", "Dear Customers"),
            closing: l("Xin chân thành cảm ơn", "With sincere thanks"),
            signature: l("Ban Lãnh đạo", "Leadership Board"),
            formality: Formality::High,
            language_complexity: LanguageComplexity::Balanced,
            regional: regional(
                l("tiếng Việt chuẩn, mộc mạc", "plain standard Vietnamese"),
                l("thuật ngữ pháp lý chuẩn", "standard legal terminology"),
                l("cấu trúc tuần tự", "sequential structure"),
                l("trang trọng, chân thành", "formal and sincere"),
            ),
        },
    );
    map.entry(Region::South).or_default().insert(
        CommunicationStyle::Modern,
        CulturalRecord {
            header_style: "modern-friendly".to_string(),
            greeting: l("Chào quý khách", "Hello valued customers"),
            closing: l("Trân trọng cảm ơn", "Thank you sincerely"),
            signature: l("Đội ngũ quản lý", "Management Team"),
            formality: Formality::Moderate,
            language_complexity: LanguageComplexity::Balanced,
            regional: regional(
                l("tiếng Việt miền Nam, cởi mở", "open Southern Vietnamese"),
                l("thuật ngữ dễ hiểu", "accessible terminology"),
                l("cấu trúc linh hoạt", "flexible structure"),
                l("năng động, thân thiện", "dynamic and friendly"),
            ),
        },
    );
    map.entry(Region::South).or_default().insert(
        CommunicationStyle::Casual,
        CulturalRecord {
            header_style: "casual-friendly".to_string(),
            greeting: l("Xin chào bạn", "Hi there"),
            closing: l("Cảm ơn bạn nhiều", "Many thanks"),
            signature: l("Đội ngũ của chúng tôi", "Our Team"),
            formality: Formality::Friendly,
            language_complexity: LanguageComplexity::Simplified,
            regional: regional(
                l("tiếng Việt miền Nam, thân mật", "familiar Southern Vietnamese"),
                l("ngôn ngữ đời thường", "everyday language"),
                l("cấu trúc hỏi đáp", "question-and-answer structure"),
                l("gần gũi, thoải mái", "warm and relaxed"),
            ),
        },
    );
    map
}

/// The neutral record used for every unmapped region × style pair.
pub fn cultural_fallback() -> CulturalRecord {
    CulturalRecord {
        header_style: "clean-professional".to_string(),
        greeting: l("Kính gửi quý khách", "Dear valued customer"),
        closing: l("Trân trọng", "Sincerely"),
        signature: l("Ban Quản lý", "Management Board"),
        formality: Formality::Moderate,
        language_complexity: LanguageComplexity::Balanced,
        regional: regional(
            l("tiếng Việt chuẩn", "standard Vietnamese"),
            l("thuật ngữ pháp lý chuẩn", "standard legal terminology"),
            l("cấu trúc tuần tự", "sequential structure"),
            l("trung tính", "neutral"),
        ),
    }
}

// ── Legal requirements ────────────────────────────────────────────────

fn legal(
    id: &str,
    title: Localized,
    citation: String,
    keywords: &[&str],
    mandatory: bool,
    applies_to: &[DocumentType],
) -> LegalRequirement {
    LegalRequirement {
        id: id.to_string(),
        title,
        citation,
        keywords: kw(keywords),
        mandatory,
        applies_to: applies_to.to_vec(),
    }
}

fn legal_requirements() -> Vec<LegalRequirement> {
    use DocumentType::*;
    vec![
        legal(
            "pdpl-basis",
            l("Căn cứ Luật Bảo vệ dữ liệu cá nhân", "Personal Data Protection Law basis"),
            PDPL_2025.to_string(),
            &["bảo vệ dữ liệu cá nhân", "personal data protection"],
            true,
            &[],
        ),
        legal(
            "consent",
            l("Sự đồng ý của chủ thể dữ liệu", "Data subject consent"),
            decree(11),
            &["sự đồng ý", "consent"],
            true,
            &[PrivacyPolicy, PrivacyNotice, ConsentForms, EmployeeTrainingMaterials],
        ),
        legal(
            "processing-notice",
            l("Thông báo xử lý dữ liệu cá nhân", "Notice of personal data processing"),
            decree(13),
            &["thông báo", "notice"],
            true,
            &[PrivacyPolicy, PrivacyNotice, ConsentForms],
        ),
        legal(
            "purpose-limitation",
            l("Giới hạn mục đích xử lý", "Purpose limitation"),
            decree(3),
            &["mục đích", "purpose"],
            true,
            &[PrivacyPolicy, PrivacyNotice, ConsentForms, DataProcessingAgreement, DataRetentionPolicy],
        ),
        legal(
            "data-subject-rights",
            l("Quyền của chủ thể dữ liệu", "Data subject rights"),
            decree(9),
            &["quyền của chủ thể dữ liệu", "data subject rights"],
            true,
            &[
                PrivacyPolicy,
                PrivacyNotice,
                ConsentForms,
                DataSubjectRightsProcedure,
                EmployeeTrainingMaterials,
            ],
        ),
        legal(
            "security-measures",
            l("Biện pháp bảo vệ dữ liệu cá nhân", "Personal data security measures"),
            decree(26),
            &["biện pháp bảo vệ", "biện pháp bảo mật", "security measures"],
            true,
            &[
                DataProcessingAgreement,
                SecurityIncidentResponse,
                CrossBorderTransferAgreement,
                ComplianceAuditChecklist,
                EmployeeTrainingMaterials,
                VendorPrivacyAssessment,
            ],
        ),
        legal(
            "breach-notification",
            l("Thông báo vi phạm trong 72 giờ", "Breach notification within 72 hours"),
            decree(23),
            &["72 giờ", "72 hours"],
            true,
            &[SecurityIncidentResponse, DataProcessingAgreement],
        ),
        legal(
            "cross-border-transfer",
            l("Chuyển dữ liệu cá nhân ra nước ngoài", "Cross-border transfer of personal data"),
            decree(25),
            &["ra nước ngoài", "cross-border", "outside vietnam"],
            true,
            &[CrossBorderTransferAgreement],
        ),
        legal(
            "impact-assessment",
            l("Đánh giá tác động xử lý dữ liệu", "Data processing impact assessment"),
            decree(24),
            &["đánh giá tác động", "impact assessment"],
            false,
            &[CrossBorderTransferAgreement, ComplianceAuditChecklist, VendorPrivacyAssessment],
        ),
        legal(
            "data-protection-officer",
            l("Nhân sự bảo vệ dữ liệu cá nhân", "Data protection officer"),
            decree(28),
            &["nhân sự bảo vệ dữ liệu", "data protection officer"],
            false,
            &[DpoAppointmentLetter, ComplianceAuditChecklist],
        ),
        legal(
            "retention",
            l("Lưu trữ và xóa dữ liệu", "Retention and deletion"),
            decree(16),
            &["thời hạn lưu trữ", "xóa dữ liệu", "retention", "deletion"],
            false,
            &[DataRetentionPolicy, DataSubjectRightsProcedure, ComplianceAuditChecklist],
        ),
    ]
}

// ── Security-agency checks ────────────────────────────────────────────

fn security_checks() -> Vec<SecurityCheck> {
    use DocumentType::*;
    vec![
        SecurityCheck {
            id: "safeguards".to_string(),
            title: l("Biện pháp bảo mật kỹ thuật và tổ chức", "Technical and organisational safeguards"),
            keywords: kw(&["bảo mật", "biện pháp bảo vệ", "security", "safeguard"]),
            mandatory: true,
            applies_to: vec![],
        },
        SecurityCheck {
            id: "supervisory-authority".to_string(),
            title: l(
                "Cơ quan chuyên trách A05, Bộ Công an",
                "Supervisory authority A05, Ministry of Public Security",
            ),
            keywords: kw(&["bộ công an", "a05", "ministry of public security"]),
            mandatory: false,
            applies_to: vec![],
        },
        SecurityCheck {
            id: "breach-response".to_string(),
            title: l("Quy trình ứng phó sự cố", "Breach response procedure"),
            keywords: kw(&["sự cố", "vi phạm", "incident", "breach"]),
            mandatory: true,
            applies_to: vec![SecurityIncidentResponse, DataProcessingAgreement],
        },
        SecurityCheck {
            id: "access-control".to_string(),
            title: l("Kiểm soát truy cập", "Access control"),
            keywords: kw(&["kiểm soát truy cập", "phân quyền", "access control"]),
            mandatory: false,
            applies_to: vec![
                DataProcessingAgreement,
                SecurityIncidentResponse,
                ComplianceAuditChecklist,
                VendorPrivacyAssessment,
            ],
        },
    ]
}

// ── Section sets ──────────────────────────────────────────────────────

fn section_sets() -> BTreeMap<DocumentType, Vec<String>> {
    use DocumentType::*;
    let sets: [(DocumentType, &[&str]); 11] = [
        (PrivacyPolicy, &["introduction", "data-collection", "legal-basis"]),
        (PrivacyNotice, &["notice-summary", "processing-purposes", "data-subject-rights"]),
        (ConsentForms, &["consent-scope", "consent-withdrawal", "consent-signature"]),
        (
            DataProcessingAgreement,
            &["parties", "processing-scope", "processor-obligations", "security-measures"],
        ),
        (
            DataSubjectRightsProcedure,
            &["rights-overview", "request-handling", "response-timeline"],
        ),
        (
            SecurityIncidentResponse,
            &["incident-detection", "breach-notification", "remediation"],
        ),
        (DataRetentionPolicy, &["retention-periods", "deletion-procedure"]),
        (
            CrossBorderTransferAgreement,
            &["transfer-scope", "transfer-impact-assessment", "transfer-safeguards"],
        ),
        (DpoAppointmentLetter, &["appointment", "dpo-responsibilities"]),
        (ComplianceAuditChecklist, &["audit-scope", "audit-checklist"]),
        (EmployeeTrainingMaterials, &["training-objectives", "training-modules"]),
    ];
    sets.into_iter()
        .map(|(dt, ids)| (dt, kw(ids)))
        .collect()
}

fn section_recommendations() -> BTreeMap<DocumentType, BTreeMap<String, Vec<Localized>>> {
    let mut recs = BTreeMap::new();
    recs.insert(
        "introduction".to_string(),
        vec![
            l("Nêu rõ danh tính bên kiểm soát dữ liệu", "State the identity of the data controller"),
            l("Giới thiệu phạm vi áp dụng của chính sách", "Introduce the scope of the policy"),
        ],
    );
    recs.insert(
        "data-collection".to_string(),
        vec![
            l("Liệt kê các loại dữ liệu cá nhân được thu thập", "List the categories of personal data collected"),
            l("Nêu rõ mục đích thu thập", "State the purpose of collection"),
            l("Giải thích cơ chế sự đồng ý", "Explain the consent mechanism"),
        ],
    );
    recs.insert(
        "legal-basis".to_string(),
        vec![
            l("Dẫn chiếu Luật Bảo vệ dữ liệu cá nhân 2025", "Cite the Personal Data Protection Law 2025"),
            l("Liệt kê quyền của chủ thể dữ liệu", "List the data subject rights"),
        ],
    );
    let mut map = BTreeMap::new();
    map.insert(DocumentType::PrivacyPolicy, recs);
    map
}
