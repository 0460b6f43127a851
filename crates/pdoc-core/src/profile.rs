//! # Business Profile
//!
//! The profile of the business a document is generated for. Raw caller input
//! arrives as a [`ProfileInput`] with every field optional; it is validated
//! once into an immutable [`BusinessProfile`].
//!
//! ## Defaults
//!
//! `company_name` and `industry_type` are required. Every other field falls
//! back to a documented default when missing or unrecognized:
//!
//! | Field | Default |
//! |-------|---------|
//! | `business_size` | `sme` |
//! | `employee_count` | `0` |
//! | `regional_location` | `central` |
//! | `data_processing_volume` | `medium` |
//! | `communication_style` | `formal` |
//! | `stakeholder_types` | empty |
//!
//! The names of defaulted fields are recorded in
//! [`BusinessProfile::defaults_applied`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::language::Localized;

/// Size class of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessSize {
    /// Early-stage company.
    Startup,
    /// Small or medium enterprise (default).
    #[default]
    Sme,
    /// Large enterprise.
    Enterprise,
}

impl BusinessSize {
    /// All variants in declaration order.
    pub fn all() -> &'static [BusinessSize] {
        &[Self::Startup, Self::Sme, Self::Enterprise]
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Sme => "sme",
            Self::Enterprise => "enterprise",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "startup" => Some(Self::Startup),
            "sme" | "small" | "medium" => Some(Self::Sme),
            "enterprise" | "large" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

/// Region of Vietnam the business primarily operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Northern Vietnam.
    North,
    /// Central Vietnam (default).
    #[default]
    Central,
    /// Southern Vietnam.
    South,
}

impl Region {
    /// All variants in declaration order.
    pub fn all() -> &'static [Region] {
        &[Self::North, Self::Central, Self::South]
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Central => "central",
            Self::South => "south",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "north" | "northern" => Some(Self::North),
            "central" => Some(Self::Central),
            "south" | "southern" => Some(Self::South),
            _ => None,
        }
    }

    /// Human-readable region name used in document text.
    pub fn display_name(&self) -> Localized {
        match self {
            Self::North => Localized::new("miền Bắc", "Northern Vietnam"),
            Self::Central => Localized::new("miền Trung", "Central Vietnam"),
            Self::South => Localized::new("miền Nam", "Southern Vietnam"),
        }
    }
}

/// Volume of personal data the business processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    /// Low volume.
    Low,
    /// Medium volume (default).
    #[default]
    Medium,
    /// High volume.
    High,
}

impl DataVolume {
    /// All variants in declaration order.
    pub fn all() -> &'static [DataVolume] {
        &[Self::Low, Self::Medium, Self::High]
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Preferred communication register of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    /// Formal register (default).
    #[default]
    Formal,
    /// Modern, direct register.
    Modern,
    /// Casual register.
    Casual,
}

impl CommunicationStyle {
    /// All variants in declaration order.
    pub fn all() -> &'static [CommunicationStyle] {
        &[Self::Formal, Self::Modern, Self::Casual]
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Modern => "modern",
            Self::Casual => "casual",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "formal" => Some(Self::Formal),
            "modern" => Some(Self::Modern),
            "casual" | "friendly" => Some(Self::Casual),
            _ => None,
        }
    }
}

macro_rules! impl_label_display {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_label_display!(BusinessSize, Region, DataVolume, CommunicationStyle);

// ─── Raw input ───────────────────────────────────────────────────────

/// Unvalidated business profile as supplied by the caller.
///
/// Field names are snake_case; the camelCase spelling used by the
/// presentation layer is accepted as an alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Legal or trading name of the business.
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    /// Open industry label (mapped against the rule tables).
    #[serde(default, alias = "industryType")]
    pub industry_type: Option<String>,
    /// `startup`, `sme` or `enterprise`.
    #[serde(default, alias = "businessSize")]
    pub business_size: Option<String>,
    /// Number of employees.
    #[serde(default, alias = "employeeCount")]
    pub employee_count: Option<u32>,
    /// `north`, `central` or `south`.
    #[serde(default, alias = "regionalLocation")]
    pub regional_location: Option<String>,
    /// `low`, `medium` or `high`.
    #[serde(default, alias = "dataProcessingVolume")]
    pub data_processing_volume: Option<String>,
    /// `formal`, `modern` or `casual`.
    #[serde(default, alias = "communicationStyle")]
    pub communication_style: Option<String>,
    /// Stakeholder groups (customers, employees, partners, ...).
    #[serde(default, alias = "stakeholderTypes")]
    pub stakeholder_types: Vec<String>,
}

// ─── Validated profile ───────────────────────────────────────────────

/// Names of the business tokens (`{company}`, `{industry}`, `{region}`,
/// `{employees}`) that section text may reference.
pub const PROFILE_TOKENS: [&str; 4] = ["company", "industry", "region", "employees"];

/// A validated, immutable business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Legal or trading name of the business.
    pub company_name: String,
    /// Normalized (trimmed, lowercase) industry label.
    pub industry_type: String,
    /// Size class.
    pub business_size: BusinessSize,
    /// Number of employees.
    pub employee_count: u32,
    /// Operating region.
    pub regional_location: Region,
    /// Personal-data processing volume.
    pub data_processing_volume: DataVolume,
    /// Communication register.
    pub communication_style: CommunicationStyle,
    /// Stakeholder groups, deduplicated and sorted.
    pub stakeholder_types: BTreeSet<String>,
    /// Names of the fields that were filled from documented defaults.
    #[serde(default)]
    pub defaults_applied: Vec<String>,
}

impl BusinessProfile {
    /// Create a profile with the two required fields and every other field
    /// at its default. Intended for programmatic construction and tests.
    pub fn new(company_name: impl Into<String>, industry_type: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into().trim().to_string(),
            industry_type: normalize_industry(&industry_type.into()),
            business_size: BusinessSize::default(),
            employee_count: 0,
            regional_location: Region::default(),
            data_processing_volume: DataVolume::default(),
            communication_style: CommunicationStyle::default(),
            stakeholder_types: BTreeSet::new(),
            defaults_applied: Vec::new(),
        }
    }

    /// Validate raw input into a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when `company_name` or `industry_type` is
    /// missing or blank. Unknown enumeration labels never error; they fall
    /// back to the documented defaults.
    pub fn from_input(input: &ProfileInput) -> Result<Self, ProfileError> {
        let company_name = required(&input.company_name, "company_name")?;
        let industry_type = required(&input.industry_type, "industry_type")?;

        let mut profile = Self::new(company_name, industry_type);
        let mut defaulted = Vec::new();

        profile.business_size = resolve(
            &input.business_size,
            "business_size",
            BusinessSize::parse_label,
            &mut defaulted,
        );
        profile.regional_location = resolve(
            &input.regional_location,
            "regional_location",
            Region::parse_label,
            &mut defaulted,
        );
        profile.data_processing_volume = resolve(
            &input.data_processing_volume,
            "data_processing_volume",
            DataVolume::parse_label,
            &mut defaulted,
        );
        profile.communication_style = resolve(
            &input.communication_style,
            "communication_style",
            CommunicationStyle::parse_label,
            &mut defaulted,
        );
        profile.employee_count = match input.employee_count {
            Some(n) => n,
            None => {
                defaulted.push("employee_count".to_string());
                0
            }
        };
        profile.stakeholder_types = input
            .stakeholder_types
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        profile.defaults_applied = defaulted;
        Ok(profile)
    }

    /// Builder: set the business size.
    pub fn with_size(mut self, size: BusinessSize) -> Self {
        self.business_size = size;
        self
    }

    /// Builder: set the employee count.
    pub fn with_employee_count(mut self, count: u32) -> Self {
        self.employee_count = count;
        self
    }

    /// Builder: set the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regional_location = region;
        self
    }

    /// Builder: set the data-processing volume.
    pub fn with_volume(mut self, volume: DataVolume) -> Self {
        self.data_processing_volume = volume;
        self
    }

    /// Builder: set the communication style.
    pub fn with_style(mut self, style: CommunicationStyle) -> Self {
        self.communication_style = style;
        self
    }

    /// Builder: add a stakeholder group.
    pub fn with_stakeholder(mut self, stakeholder: impl Into<String>) -> Self {
        self.stakeholder_types
            .insert(stakeholder.into().trim().to_lowercase());
        self
    }
}

fn normalize_industry(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, ProfileError> {
    match value {
        None => Err(ProfileError::MissingField(field)),
        Some(v) if v.trim().is_empty() => Err(ProfileError::BlankField(field)),
        Some(v) => Ok(v.clone()),
    }
}

fn resolve<T: Default + Copy>(
    value: &Option<String>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    defaulted: &mut Vec<String>,
) -> T {
    match value.as_deref().map(|label| (label, parse(label))) {
        Some((_, Some(parsed))) => parsed,
        Some((label, None)) => {
            tracing::warn!(field, label, "unrecognized profile value, using documented default");
            defaulted.push(field.to_string());
            T::default()
        }
        None => {
            defaulted.push(field.to_string());
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> ProfileInput {
        ProfileInput {
            company_name: Some("ABC Co".to_string()),
            industry_type: Some(" Technology ".to_string()),
            business_size: Some("sme".to_string()),
            employee_count: Some(45),
            regional_location: Some("south".to_string()),
            data_processing_volume: Some("medium".to_string()),
            communication_style: Some("modern".to_string()),
            stakeholder_types: vec!["Customers".to_string(), "customers".to_string()],
        }
    }

    #[test]
    fn from_input_parses_every_field() {
        let profile = BusinessProfile::from_input(&full_input()).unwrap();
        assert_eq!(profile.company_name, "ABC Co");
        assert_eq!(profile.industry_type, "technology");
        assert_eq!(profile.business_size, BusinessSize::Sme);
        assert_eq!(profile.employee_count, 45);
        assert_eq!(profile.regional_location, Region::South);
        assert_eq!(profile.data_processing_volume, DataVolume::Medium);
        assert_eq!(profile.communication_style, CommunicationStyle::Modern);
        assert_eq!(profile.stakeholder_types.len(), 1);
        assert!(profile.defaults_applied.is_empty());
    }

    #[test]
    fn missing_company_name_is_rejected() {
        let mut input = full_input();
        input.company_name = None;
        assert_eq!(
            BusinessProfile::from_input(&input).unwrap_err(),
            ProfileError::MissingField("company_name")
        );
    }

    #[test]
    fn blank_industry_is_rejected() {
        let mut input = full_input();
        input.industry_type = Some("   ".to_string());
        assert_eq!(
            BusinessProfile::from_input(&input).unwrap_err(),
            ProfileError::BlankField("industry_type")
        );
    }

    #[test]
    fn unknown_labels_fall_back_to_defaults() {
        let mut input = full_input();
        input.business_size = Some("gigantic".to_string());
        input.regional_location = Some("highlands".to_string());
        input.communication_style = None;
        let profile = BusinessProfile::from_input(&input).unwrap();
        assert_eq!(profile.business_size, BusinessSize::Sme);
        assert_eq!(profile.regional_location, Region::Central);
        assert_eq!(profile.communication_style, CommunicationStyle::Formal);
        assert_eq!(
            profile.defaults_applied,
            vec!["business_size", "regional_location", "communication_style"]
        );
    }

    #[test]
    fn camel_case_aliases_deserialize() {
        let json = r#"{"companyName":"ABC Co","industryType":"finance","regionalLocation":"north"}"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        let profile = BusinessProfile::from_input(&input).unwrap();
        assert_eq!(profile.regional_location, Region::North);
        assert_eq!(profile.industry_type, "finance");
    }

    #[test]
    fn enum_labels_display() {
        assert_eq!(BusinessSize::Enterprise.to_string(), "enterprise");
        assert_eq!(Region::South.to_string(), "south");
        assert_eq!(DataVolume::High.to_string(), "high");
        assert_eq!(CommunicationStyle::Casual.to_string(), "casual");
    }

    #[test]
    fn builder_sets_fields() {
        let profile = BusinessProfile::new("X", "Retail")
            .with_region(Region::North)
            .with_style(CommunicationStyle::Modern)
            .with_stakeholder("Partners");
        assert_eq!(profile.industry_type, "retail");
        assert_eq!(profile.regional_location, Region::North);
        assert!(profile.stakeholder_types.contains("partners"));
    }
}
