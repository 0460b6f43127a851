//! # Section Text Patterns
//!
//! One bilingual pattern per section id. Bodies may contain the business
//! tokens `{company}`, `{industry}`, `{region}` and `{employees}`; nothing
//! else in braces. Legal references are the citation strings of the
//! built-in rule tables.

use pdoc_core::{Language, SectionType};

const PDPL: &str = "Luật Bảo vệ dữ liệu cá nhân 2025";
const D3: &str = "Nghị định 13/2023/NĐ-CP, Điều 3";
const D9: &str = "Nghị định 13/2023/NĐ-CP, Điều 9";
const D11: &str = "Nghị định 13/2023/NĐ-CP, Điều 11";
const D13: &str = "Nghị định 13/2023/NĐ-CP, Điều 13";
const D16: &str = "Nghị định 13/2023/NĐ-CP, Điều 16";
const D23: &str = "Nghị định 13/2023/NĐ-CP, Điều 23";
const D24: &str = "Nghị định 13/2023/NĐ-CP, Điều 24";
const D25: &str = "Nghị định 13/2023/NĐ-CP, Điều 25";
const D26: &str = "Nghị định 13/2023/NĐ-CP, Điều 26";
const D28: &str = "Nghị định 13/2023/NĐ-CP, Điều 28";

/// Static text in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternText {
    /// Vietnamese.
    pub vi: &'static str,
    /// English.
    pub en: &'static str,
}

impl PatternText {
    /// Select the text for `language`.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => self.vi,
            Language::English => self.en,
        }
    }
}

const fn t(vi: &'static str, en: &'static str) -> PatternText {
    PatternText { vi, en }
}

/// The text pattern of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPattern {
    /// Section id.
    pub id: &'static str,
    /// Structural role.
    pub section_type: SectionType,
    /// Heading.
    pub title: PatternText,
    /// Body with business tokens.
    pub body: PatternText,
    /// Cultural note for the reviewer.
    pub note: PatternText,
    /// Legal citations, most specific first.
    pub references: &'static [&'static str],
}

/// Look up the pattern for `section_id`.
pub fn pattern(section_id: &str) -> Option<&'static SectionPattern> {
    PATTERNS.iter().find(|p| p.id == section_id)
}

/// Every defined pattern.
pub fn all_patterns() -> &'static [SectionPattern] {
    PATTERNS
}

static PATTERNS: &[SectionPattern] = &[
    // ── Privacy policy ─────────────────────────────────────────────
    SectionPattern {
        id: "introduction",
        section_type: SectionType::Body,
        title: t("Giới thiệu", "Introduction"),
        body: t(
            "{company} là doanh nghiệp hoạt động trong lĩnh vực {industry} tại {region}. Chính sách này thông báo cách chúng tôi thu thập, sử dụng và bảo vệ dữ liệu cá nhân của quý khách theo Luật Bảo vệ dữ liệu cá nhân 2025.",
            "{company} operates in the {industry} sector in {region}. This policy gives notice of how we collect, use and protect your personal data in accordance with the Personal Data Protection Law 2025.",
        ),
        note: t(
            "Mở đầu theo phong cách giao tiếp của doanh nghiệp",
            "Opening follows the business's communication style",
        ),
        references: &[PDPL],
    },
    SectionPattern {
        id: "data-collection",
        section_type: SectionType::Body,
        title: t("Dữ liệu chúng tôi thu thập", "Data We Collect"),
        body: t(
            "{company} chỉ thu thập dữ liệu cá nhân tối thiểu cần thiết cho mục đích đã công bố, bao gồm thông tin liên hệ, lịch sử sử dụng dịch vụ và dữ liệu thu thập qua cookie. Việc xử lý chỉ được thực hiện khi có sự đồng ý của quý khách, và dữ liệu được bảo mật bằng các biện pháp kỹ thuật phù hợp.",
            "{company} collects only the personal data necessary for the stated purpose, following data minimisation, including contact details, service usage history and data collected through cookies. Processing takes place only with your consent, and data is protected by appropriate technical security safeguards.",
        ),
        note: t(
            "Liệt kê rõ ràng, dễ hiểu cho người đọc Việt Nam",
            "Plain listing for Vietnamese readers",
        ),
        references: &[D11, D3],
    },
    SectionPattern {
        id: "legal-basis",
        section_type: SectionType::Body,
        title: t("Cơ sở pháp lý và quyền của quý khách", "Legal Basis and Your Rights"),
        body: t(
            "Hoạt động xử lý dữ liệu của {company} tuân thủ Luật Bảo vệ dữ liệu cá nhân 2025 và Nghị định 13/2023/NĐ-CP. Quý khách có đầy đủ quyền của chủ thể dữ liệu, bao gồm quyền được biết, quyền truy cập, chỉnh sửa, xóa dữ liệu và rút lại sự đồng ý. Cơ quan chuyên trách bảo vệ dữ liệu cá nhân là Cục An ninh mạng và phòng, chống tội phạm sử dụng công nghệ cao (A05), Bộ Công an.",
            "{company} processes data in compliance with the Personal Data Protection Law 2025 and Decree 13/2023/ND-CP. You hold all data subject rights, including the rights to be informed, to access, correct and delete your data and to withdraw consent. The supervisory authority for personal data protection is the Department of Cybersecurity and High-Tech Crime Prevention (A05), Ministry of Public Security.",
        ),
        note: t(
            "Dẫn chiếu văn bản pháp luật bằng tên chính thức",
            "Statutes are cited by their official Vietnamese names",
        ),
        references: &[PDPL, D9],
    },
    SectionPattern {
        id: "sensitive-data",
        section_type: SectionType::Body,
        title: t("Dữ liệu cá nhân nhạy cảm", "Sensitive Personal Data"),
        body: t(
            "Trong lĩnh vực {industry}, {company} có thể xử lý dữ liệu cá nhân nhạy cảm như dữ liệu sức khỏe, dữ liệu tài chính hoặc thông tin tín dụng. Dữ liệu này được giữ bí mật, chỉ xử lý khi có sự đồng ý riêng của quý khách và được áp dụng biện pháp bảo mật tăng cường.",
            "In the {industry} sector, {company} may process sensitive personal data such as health data, financial data or credit information. This data is kept confidential, processed only with your separate consent and protected by enhanced security measures.",
        ),
        note: t(
            "Nhấn mạnh sự tôn trọng quyền riêng tư",
            "Emphasises respect for privacy",
        ),
        references: &[D28, D11],
    },
    // ── Privacy notice ─────────────────────────────────────────────
    SectionPattern {
        id: "notice-summary",
        section_type: SectionType::Body,
        title: t("Tóm tắt thông báo", "Notice Summary"),
        body: t(
            "{company} gửi thông báo này trước khi xử lý dữ liệu cá nhân của quý khách, theo yêu cầu của Luật Bảo vệ dữ liệu cá nhân 2025. Dữ liệu được bảo mật và chỉ những nhân sự được phân công mới được tiếp cận.",
            "{company} provides this notice before processing your personal data, as required by the Personal Data Protection Law 2025. Your data is protected by security safeguards and only assigned staff may access it.",
        ),
        note: t(
            "Ngắn gọn, hiển thị tại điểm thu thập dữ liệu",
            "Short form, shown at the point of collection",
        ),
        references: &[D13, PDPL],
    },
    SectionPattern {
        id: "processing-purposes",
        section_type: SectionType::List,
        title: t("Mục đích xử lý", "Processing Purposes"),
        body: t(
            "Dữ liệu được xử lý cho các mục đích: cung cấp dịch vụ, chăm sóc khách hàng và thực hiện nghĩa vụ pháp lý của {company}. Chúng tôi không sử dụng dữ liệu cho mục đích khác nếu chưa có sự đồng ý của quý khách.",
            "Data is processed for the following purposes: providing services, customer care and meeting the legal obligations of {company}. We do not use data for any other purpose without your consent.",
        ),
        note: t(
            "Liệt kê mục đích bằng ngôn ngữ dễ hiểu",
            "Purposes listed in plain language",
        ),
        references: &[D3, D11],
    },
    SectionPattern {
        id: "data-subject-rights",
        section_type: SectionType::List,
        title: t("Quyền của quý khách", "Your Rights"),
        body: t(
            "Quý khách có đầy đủ quyền của chủ thể dữ liệu: quyền được biết, quyền đồng ý hoặc rút lại sự đồng ý, quyền truy cập, chỉnh sửa và xóa dữ liệu. Khiếu nại có thể gửi tới {company} hoặc Cục A05, Bộ Công an.",
            "You hold all data subject rights: to be informed, to give or withdraw consent, and to access, correct and delete your data. Complaints may be sent to {company} or to Department A05 of the Ministry of Public Security.",
        ),
        note: t(
            "Giọng văn tôn trọng, khuyến khích thực hiện quyền",
            "Respectful tone that encourages exercising rights",
        ),
        references: &[D9],
    },
    // ── Consent forms ──────────────────────────────────────────────
    SectionPattern {
        id: "consent-scope",
        section_type: SectionType::Body,
        title: t("Phạm vi đồng ý", "Scope of Consent"),
        body: t(
            "Bằng việc ký mẫu này, quý khách đồng ý để {company} xử lý dữ liệu cá nhân cho các mục đích đã được thông báo. Sự đồng ý phải tự nguyện, rõ ràng và được lưu lại theo Luật Bảo vệ dữ liệu cá nhân 2025.",
            "By signing this form you agree that {company} may process your personal data for the purposes set out in the notice provided to you. Consent must be voluntary and explicit, and is recorded under the Personal Data Protection Law 2025.",
        ),
        note: t(
            "Câu chữ rõ ràng, tránh thuật ngữ khó hiểu",
            "Clear wording, free of jargon",
        ),
        references: &[D11, D3],
    },
    SectionPattern {
        id: "consent-withdrawal",
        section_type: SectionType::Body,
        title: t("Rút lại sự đồng ý", "Withdrawing Consent"),
        body: t(
            "Quý khách có thể rút lại sự đồng ý bất cứ lúc nào bằng cách liên hệ {company}. Việc rút lại không ảnh hưởng đến các quyền của chủ thể dữ liệu khác và không làm mất hiệu lực của hoạt động xử lý trước đó. Quý khách cũng có quyền khiếu nại tới Cục A05, Bộ Công an.",
            "You may withdraw your consent at any time by contacting {company}. Withdrawal does not affect your other data subject rights or the lawfulness of earlier processing. You may also lodge a complaint with Department A05, Ministry of Public Security.",
        ),
        note: t(
            "Trấn an người ký về quyền rút lại",
            "Reassures the signer about withdrawal",
        ),
        references: &[D9, D11],
    },
    SectionPattern {
        id: "consent-signature",
        section_type: SectionType::Footer,
        title: t("Xác nhận và chữ ký", "Confirmation and Signature"),
        body: t(
            "Tôi xác nhận đã đọc thông báo xử lý dữ liệu của {company}, hiểu các biện pháp bảo mật được áp dụng và đồng ý với nội dung trên.\nHọ tên: ______  Ngày: ______  Chữ ký: ______",
            "I confirm that I have read the processing notice of {company}, understand the security measures applied and agree to the above.\nName: ______  Date: ______  Signature: ______",
        ),
        note: t(
            "Bố cục chữ ký theo thói quen hành chính Việt Nam",
            "Signature layout follows Vietnamese administrative practice",
        ),
        references: &[D11],
    },
    // ── Data-processing agreement ──────────────────────────────────
    SectionPattern {
        id: "parties",
        section_type: SectionType::Header,
        title: t("Các bên", "Parties"),
        body: t(
            "Thỏa thuận này được lập giữa {company} (Bên Kiểm soát dữ liệu) và Bên Xử lý dữ liệu, nhằm bảo đảm việc bảo vệ dữ liệu cá nhân theo Luật Bảo vệ dữ liệu cá nhân 2025 và dưới sự giám sát của Bộ Công an (A05).",
            "This agreement is made between {company} (the Data Controller) and the Data Processor to ensure personal data protection under the Personal Data Protection Law 2025, subject to supervision by the Ministry of Public Security (A05).",
        ),
        note: t(
            "Xưng hô trang trọng giữa các bên",
            "Formal address between the parties",
        ),
        references: &[PDPL],
    },
    SectionPattern {
        id: "processing-scope",
        section_type: SectionType::Body,
        title: t("Phạm vi xử lý", "Scope of Processing"),
        body: t(
            "Bên Xử lý chỉ xử lý dữ liệu theo chỉ dẫn bằng văn bản của {company} và đúng mục đích đã thỏa thuận, trong phạm vi hoạt động {industry} của {company}.",
            "The Processor processes data only on the written instructions of {company} and solely for the agreed purpose, within the {industry} operations of {company}.",
        ),
        note: t(
            "Xác định rõ giới hạn trách nhiệm",
            "Defines the limits of responsibility clearly",
        ),
        references: &[D3],
    },
    SectionPattern {
        id: "processor-obligations",
        section_type: SectionType::List,
        title: t("Nghĩa vụ của Bên Xử lý", "Processor Obligations"),
        body: t(
            "Bên Xử lý phải: (1) giữ bảo mật dữ liệu; (2) áp dụng kiểm soát truy cập và phân quyền; (3) thông báo cho {company} về mọi sự cố vi phạm dữ liệu để {company} thông báo cơ quan có thẩm quyền trong vòng 72 giờ; (4) xóa hoặc trả lại dữ liệu khi kết thúc hợp đồng.",
            "The Processor shall: (1) keep data confidential and secure; (2) apply access control and role-based permissions; (3) notify {company} of any data breach so that {company} can inform the authority within 72 hours; (4) delete or return data when the contract ends.",
        ),
        note: t(
            "Nghĩa vụ đánh số để dễ đối chiếu",
            "Numbered obligations for easy cross-reference",
        ),
        references: &[D26, D23],
    },
    SectionPattern {
        id: "security-measures",
        section_type: SectionType::Body,
        title: t("Biện pháp bảo vệ", "Security Measures"),
        body: t(
            "Các bên áp dụng biện pháp bảo vệ kỹ thuật và tổ chức phù hợp, gồm mã hóa, sao lưu, ghi nhật ký truy cập và quy trình ứng phó sự cố.",
            "The parties apply appropriate technical and organisational security measures, including encryption, backups, access logging and an incident response procedure.",
        ),
        note: t(
            "Thuật ngữ kỹ thuật kèm diễn giải ngắn",
            "Technical terms with short explanations",
        ),
        references: &[D26],
    },
    // ── Data-subject-rights procedure ──────────────────────────────
    SectionPattern {
        id: "rights-overview",
        section_type: SectionType::List,
        title: t("Tổng quan quyền của chủ thể dữ liệu", "Overview of Data Subject Rights"),
        body: t(
            "{company} tiếp nhận và xử lý yêu cầu thực hiện quyền của chủ thể dữ liệu theo Luật Bảo vệ dữ liệu cá nhân 2025: quyền được biết, truy cập, chỉnh sửa, xóa dữ liệu, hạn chế và phản đối xử lý.",
            "{company} receives and handles requests to exercise data subject rights under the Personal Data Protection Law 2025: the rights to be informed, to access, correct and delete data, and to restrict or object to processing.",
        ),
        note: t(
            "Trình bày dạng danh sách cho nhân viên tra cứu",
            "List form for quick staff reference",
        ),
        references: &[D9, PDPL],
    },
    SectionPattern {
        id: "request-handling",
        section_type: SectionType::Body,
        title: t("Tiếp nhận và xử lý yêu cầu", "Request Handling"),
        body: t(
            "Yêu cầu được tiếp nhận qua email hoặc trực tiếp, được xác minh danh tính người yêu cầu và ghi nhận vào sổ theo dõi được bảo mật. Yêu cầu xóa dữ liệu được chuyển cho bộ phận lưu trữ của {company} thực hiện.",
            "Requests are received by email or in person, the requester's identity is verified and each request is logged in a register kept under security controls. Deletion requests are passed to the records team of {company} for execution.",
        ),
        note: t(
            "Quy trình từng bước, giọng văn hướng dẫn",
            "Step-by-step procedure in an instructional tone",
        ),
        references: &[D9],
    },
    SectionPattern {
        id: "response-timeline",
        section_type: SectionType::Body,
        title: t("Thời hạn phản hồi", "Response Timeline"),
        body: t(
            "{company} phản hồi yêu cầu trong thời hạn luật định, tối đa 72 giờ đối với yêu cầu xóa dữ liệu. Trường hợp có tranh chấp, chủ thể dữ liệu có thể khiếu nại tới Cục A05, Bộ Công an.",
            "{company} responds within the statutory deadline, and within 72 hours for deletion requests. In case of dispute, the data subject may complain to Department A05, Ministry of Public Security.",
        ),
        note: t(
            "Nêu rõ mốc thời gian cụ thể",
            "States concrete deadlines",
        ),
        references: &[D9, D16],
    },
    // ── Security-incident response ─────────────────────────────────
    SectionPattern {
        id: "incident-detection",
        section_type: SectionType::Body,
        title: t("Phát hiện sự cố", "Incident Detection"),
        body: t(
            "{company} giám sát liên tục hệ thống để phát hiện sự cố bảo mật, áp dụng kiểm soát truy cập và ghi nhật ký để truy vết vi phạm dữ liệu cá nhân. Mọi nhân viên phải báo cáo ngay dấu hiệu bất thường.",
            "{company} continuously monitors its systems to detect security incidents, and applies access control and logging to trace personal data breaches. All staff must report anomalies immediately.",
        ),
        note: t(
            "Chỉ dẫn rõ ràng cho nhân viên tuyến đầu",
            "Clear instructions for front-line staff",
        ),
        references: &[D26],
    },
    SectionPattern {
        id: "breach-notification",
        section_type: SectionType::Body,
        title: t("Thông báo vi phạm", "Breach Notification"),
        body: t(
            "Khi xảy ra vi phạm quy định bảo vệ dữ liệu cá nhân, {company} thông báo cho Cục A05, Bộ Công an trong vòng 72 giờ kể từ khi phát hiện, kèm mô tả vi phạm, dữ liệu bị ảnh hưởng và biện pháp khắc phục.",
            "When a breach of personal data protection rules occurs, {company} notifies Department A05 of the Ministry of Public Security within 72 hours of detection, describing the breach, the affected data and the remedial steps.",
        ),
        note: t(
            "Nhấn mạnh thời hạn bắt buộc",
            "Highlights the mandatory deadline",
        ),
        references: &[D23],
    },
    SectionPattern {
        id: "remediation",
        section_type: SectionType::Body,
        title: t("Khắc phục và rút kinh nghiệm", "Remediation and Lessons Learned"),
        body: t(
            "Sau sự cố, {company} phân tích nguyên nhân, tăng cường biện pháp bảo vệ và cập nhật kế hoạch ứng phó.",
            "After an incident, {company} analyses the root cause, strengthens its security measures and updates this response plan.",
        ),
        note: t(
            "Giọng văn xây dựng, không đổ lỗi",
            "Constructive, blame-free tone",
        ),
        references: &[D26],
    },
    // ── Data-retention policy ──────────────────────────────────────
    SectionPattern {
        id: "retention-periods",
        section_type: SectionType::Table,
        title: t("Thời hạn lưu trữ", "Retention Periods"),
        body: t(
            "{company} chỉ lưu giữ dữ liệu cá nhân trong thời gian cần thiết cho mục đích xử lý. Thời hạn lưu trữ của từng loại dữ liệu được ghi trong danh mục dữ liệu và rà soát hằng năm, phù hợp Luật Bảo vệ dữ liệu cá nhân 2025.",
            "{company} keeps personal data only for as long as the processing purpose requires. The retention period of each data category is recorded in the data inventory and reviewed annually, in line with the Personal Data Protection Law 2025.",
        ),
        note: t(
            "Bảng thời hạn dễ tra cứu",
            "Periods laid out for lookup",
        ),
        references: &[D16, D3],
    },
    SectionPattern {
        id: "deletion-procedure",
        section_type: SectionType::Body,
        title: t("Quy trình xóa dữ liệu", "Deletion Procedure"),
        body: t(
            "Khi hết thời hạn lưu trữ, {company} tiến hành xóa dữ liệu bằng phương pháp an toàn, bảo mật và lập biên bản. Hồ sơ xóa sẵn sàng cung cấp cho Bộ Công an khi có yêu cầu.",
            "When a retention period ends, {company} carries out deletion under security controls and records it. Deletion records are available to the Ministry of Public Security on request.",
        ),
        note: t(
            "Quy trình ngắn gọn, có biên bản",
            "Short procedure with written records",
        ),
        references: &[D16],
    },
    // ── Cross-border transfer agreement ────────────────────────────
    SectionPattern {
        id: "transfer-scope",
        section_type: SectionType::Body,
        title: t("Phạm vi chuyển dữ liệu", "Transfer Scope"),
        body: t(
            "Thỏa thuận này điều chỉnh việc {company} chuyển dữ liệu cá nhân ra nước ngoài, bao gồm loại dữ liệu, bên nhận và quốc gia nhận, theo Luật Bảo vệ dữ liệu cá nhân 2025.",
            "This agreement governs cross-border transfers of personal data by {company}, including the data categories, recipients and destination countries, under the Personal Data Protection Law 2025.",
        ),
        note: t(
            "Văn phong hợp đồng trang trọng",
            "Formal contractual register",
        ),
        references: &[D25],
    },
    SectionPattern {
        id: "transfer-impact-assessment",
        section_type: SectionType::Body,
        title: t("Đánh giá tác động chuyển dữ liệu", "Transfer Impact Assessment"),
        body: t(
            "Trước khi chuyển, {company} lập hồ sơ đánh giá tác động chuyển dữ liệu ra nước ngoài và gửi bản chính tới Cục A05, Bộ Công an trong vòng 60 ngày.",
            "Before transferring, {company} prepares a transfer impact assessment dossier and files the original with Department A05, Ministry of Public Security, within 60 days.",
        ),
        note: t(
            "Nêu rõ cơ quan tiếp nhận hồ sơ",
            "Names the receiving authority",
        ),
        references: &[D24, D25],
    },
    SectionPattern {
        id: "transfer-safeguards",
        section_type: SectionType::Body,
        title: t("Biện pháp bảo đảm", "Transfer Safeguards"),
        body: t(
            "Bên nhận cam kết áp dụng biện pháp bảo vệ tương đương, bảo mật dữ liệu và thông báo ngay cho {company} khi có sự cố.",
            "The recipient undertakes to apply equivalent security measures, keep data secure and notify {company} immediately of any incident.",
        ),
        note: t(
            "Cam kết rõ ràng của bên nhận",
            "Explicit undertakings by the recipient",
        ),
        references: &[D26],
    },
    // ── DPO appointment letter ─────────────────────────────────────
    SectionPattern {
        id: "appointment",
        section_type: SectionType::Header,
        title: t("Quyết định bổ nhiệm", "Letter of Appointment"),
        body: t(
            "{company} bổ nhiệm nhân sự bảo vệ dữ liệu cá nhân chịu trách nhiệm giám sát việc tuân thủ Luật Bảo vệ dữ liệu cá nhân 2025 trong toàn bộ {employees} nhân sự của doanh nghiệp.",
            "{company} appoints a data protection officer responsible for overseeing compliance with the Personal Data Protection Law 2025 across all {employees} employees.",
        ),
        note: t(
            "Thể thức quyết định hành chính",
            "Administrative decision format",
        ),
        references: &[D28],
    },
    SectionPattern {
        id: "dpo-responsibilities",
        section_type: SectionType::List,
        title: t("Trách nhiệm", "Responsibilities"),
        body: t(
            "Nhân sự bảo vệ dữ liệu có trách nhiệm: tư vấn về bảo mật dữ liệu, giám sát biện pháp bảo vệ, làm đầu mối liên hệ với Cục A05, Bộ Công an và tiếp nhận yêu cầu của chủ thể dữ liệu.",
            "The data protection officer advises on data security, oversees protection measures, acts as the contact point for Department A05 of the Ministry of Public Security and receives data subject requests.",
        ),
        note: t(
            "Liệt kê trách nhiệm cụ thể",
            "Concrete list of duties",
        ),
        references: &[D28, D26],
    },
    // ── Compliance-audit checklist ─────────────────────────────────
    SectionPattern {
        id: "audit-scope",
        section_type: SectionType::Body,
        title: t("Phạm vi kiểm tra", "Audit Scope"),
        body: t(
            "Cuộc kiểm tra đánh giá mức độ tuân thủ Luật Bảo vệ dữ liệu cá nhân 2025 của {company}, bao gồm hồ sơ đánh giá tác động, vai trò nhân sự bảo vệ dữ liệu và thời hạn lưu trữ.",
            "The audit assesses the compliance of {company} with the Personal Data Protection Law 2025, covering impact assessment dossiers, the data protection officer role and retention periods.",
        ),
        note: t(
            "Phạm vi trình bày ngắn gọn",
            "Concise scope statement",
        ),
        references: &[PDPL, D24],
    },
    SectionPattern {
        id: "audit-checklist",
        section_type: SectionType::Table,
        title: t("Danh mục kiểm tra", "Audit Checklist"),
        body: t(
            "| Hạng mục | Đạt | Ghi chú |\n| Biện pháp bảo mật kỹ thuật | [ ] | |\n| Kiểm soát truy cập và phân quyền | [ ] | |\n| Hồ sơ gửi Bộ Công an (A05) | [ ] | |\n| Quy trình xóa dữ liệu | [ ] | |",
            "| Item | Done | Notes |\n| Technical security measures | [ ] | |\n| Access control and permissions | [ ] | |\n| Filings with the Ministry of Public Security (A05) | [ ] | |\n| Data deletion procedure | [ ] | |",
        ),
        note: t(
            "Bảng đánh dấu theo mẫu kiểm tra nội bộ",
            "Tick-box table in internal audit format",
        ),
        references: &[D26, D28],
    },
    // ── Employee training materials ────────────────────────────────
    SectionPattern {
        id: "training-objectives",
        section_type: SectionType::Body,
        title: t("Mục tiêu đào tạo", "Training Objectives"),
        body: t(
            "Chương trình giúp {employees} nhân sự của {company} hiểu Luật Bảo vệ dữ liệu cá nhân 2025, tôn trọng quyền của chủ thể dữ liệu và chỉ xử lý dữ liệu khi có sự đồng ý hợp lệ.",
            "The programme helps the {employees} employees of {company} understand the Personal Data Protection Law 2025, respect data subject rights and process data only with valid consent.",
        ),
        note: t(
            "Giọng văn khích lệ người học",
            "Encouraging tone for learners",
        ),
        references: &[PDPL],
    },
    SectionPattern {
        id: "training-modules",
        section_type: SectionType::List,
        title: t("Nội dung đào tạo", "Training Modules"),
        body: t(
            "Học phần 1: nguyên tắc xử lý và sự đồng ý. Học phần 2: quyền của chủ thể dữ liệu. Học phần 3: biện pháp bảo vệ và bảo mật thông tin. Học phần 4: báo cáo sự cố và vai trò của Cục A05, Bộ Công an.",
            "Module 1: processing principles and consent. Module 2: data subject rights. Module 3: security measures and information security. Module 4: incident reporting and the role of Department A05, Ministry of Public Security.",
        ),
        note: t(
            "Chia học phần ngắn, dễ tiếp thu",
            "Short modules that are easy to absorb",
        ),
        references: &[D11, D9, D26],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn ids_are_unique() {
        let ids: BTreeSet<_> = PATTERNS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PATTERNS.len());
    }

    #[test]
    fn every_builtin_section_has_a_pattern() {
        let tables = pdoc_rules::RuleTables::builtin();
        for ids in tables.section_sets.values() {
            for id in ids {
                assert!(pattern(id).is_some(), "no pattern for `{id}`");
            }
        }
    }

    #[test]
    fn references_are_known_citations() {
        let tables = pdoc_rules::RuleTables::builtin();
        let citations: BTreeSet<_> = tables
            .legal_requirements
            .iter()
            .map(|r| r.citation.as_str())
            .collect();
        for p in PATTERNS {
            assert!(!p.references.is_empty(), "{} has no references", p.id);
            for r in p.references {
                assert!(citations.contains(r), "{}: unknown citation {r}", p.id);
            }
        }
    }

    #[test]
    fn bodies_use_only_known_tokens() {
        const TOKENS: [&str; 4] = ["{company}", "{industry}", "{region}", "{employees}"];
        for p in PATTERNS {
            for body in [p.body.vi, p.body.en] {
                let mut stripped = body.to_string();
                for token in TOKENS {
                    stripped = stripped.replace(token, "");
                }
                assert!(!stripped.contains('{'), "{}: stray token", p.id);
            }
        }
    }

    #[test]
    fn english_text_is_ascii() {
        for p in PATTERNS {
            assert!(p.body.en.is_ascii(), "{}", p.id);
            assert!(p.title.en.is_ascii(), "{}", p.id);
        }
    }
}
