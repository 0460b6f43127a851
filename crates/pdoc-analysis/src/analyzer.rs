//! # Business Profile Analyzer
//!
//! `analyze(profile, document_type)` is total: unknown industries, unmapped
//! matrix cells and missing cultural records all resolve through the rule
//! tables' defaults. Each default used is recorded as an
//! [`AnalysisFallback`] and costs confidence.
//!
//! ## Scores
//!
//! ```text
//! personalization = min(1, 0.70 + industry + complexity + cultural)
//!   industry   = 0.10 when the industry has a specific entry
//!   complexity = 0.10 when the level is high, else 0.05
//!   cultural   = 0.10 when the region/style pair has an explicit record
//!
//! confidence = 0.92 - 0.04 × fallbacks
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use pdoc_core::{BusinessProfile, DocumentType, Localized, Score};
use pdoc_rules::{ComplexityLevel, IndustryRequirement, LegalRequirement, RuleTables};
use serde::{Deserialize, Serialize};

const BASE_PERSONALIZATION: f64 = 0.70;
const INDUSTRY_BONUS: f64 = 0.10;
const HIGH_COMPLEXITY_BONUS: f64 = 0.10;
const OTHER_COMPLEXITY_BONUS: f64 = 0.05;
const CULTURAL_BONUS: f64 = 0.10;
const BASE_CONFIDENCE: f64 = 0.92;
const FALLBACK_PENALTY: f64 = 0.04;

/// A default branch the analyzer had to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisFallback {
    /// The industry had no specific entry; the generic PDPL entry was used.
    GenericIndustry,
    /// The size × volume cell was missing; complexity defaulted to medium.
    DefaultComplexity,
    /// The region × style cell was missing; the balanced style was used.
    DefaultCulturalStyle,
    /// No explicit cultural record exists for the region × style pair.
    CulturalRecordFallback,
}

impl AnalysisFallback {
    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenericIndustry => "generic_industry",
            Self::DefaultComplexity => "default_complexity",
            Self::DefaultCulturalStyle => "default_cultural_style",
            Self::CulturalRecordFallback => "cultural_record_fallback",
        }
    }
}

/// Analysis of one business profile for one document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAnalysis {
    /// Document type the analysis was made for.
    pub document_type: DocumentType,
    /// Canonical industry key, or `generic`.
    pub industry: String,
    /// Industry description.
    pub industry_description: Localized,
    /// Sector-specific obligations.
    pub industry_requirements: Vec<IndustryRequirement>,
    /// Processing complexity.
    pub complexity_level: ComplexityLevel,
    /// Cultural style description.
    pub cultural_style: Localized,
    /// Baseline legal requirements applicable to the document type.
    pub legal_requirements: Vec<LegalRequirement>,
    /// Section id → guidance. Empty for types without recommendations.
    pub section_recommendations: BTreeMap<String, Vec<Localized>>,
    /// How specifically the profile could be matched, in `[0, 1]`.
    pub personalization_score: Score,
    /// Confidence in the analysis, in `[0, 1]`.
    pub confidence: Score,
    /// Defaults taken during the analysis.
    pub fallbacks: Vec<AnalysisFallback>,
}

/// Stateless analyzer over shared rule tables.
#[derive(Debug, Clone)]
pub struct BusinessProfileAnalyzer {
    tables: Arc<RuleTables>,
}

impl BusinessProfileAnalyzer {
    /// Create an analyzer over `tables`.
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// The rule tables the analyzer reads.
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Analyze `profile` for `document_type`. Never fails.
    pub fn analyze(&self, profile: &BusinessProfile, document_type: DocumentType) -> BusinessAnalysis {
        let mut fallbacks = Vec::new();

        let industry = self.tables.industry(&profile.industry_type);
        if industry.is_default {
            fallbacks.push(AnalysisFallback::GenericIndustry);
        }

        let complexity = self
            .tables
            .complexity(profile.business_size, profile.data_processing_volume);
        if complexity.is_default {
            fallbacks.push(AnalysisFallback::DefaultComplexity);
        }

        let style = self
            .tables
            .cultural_style(profile.regional_location, profile.communication_style);
        if style.is_default {
            fallbacks.push(AnalysisFallback::DefaultCulturalStyle);
        }

        let record = self
            .tables
            .cultural_record(profile.regional_location, profile.communication_style);
        if record.is_default {
            fallbacks.push(AnalysisFallback::CulturalRecordFallback);
        }

        let mut personalization = BASE_PERSONALIZATION;
        if !industry.is_default {
            personalization += INDUSTRY_BONUS;
        }
        personalization += match complexity.value {
            ComplexityLevel::High => HIGH_COMPLEXITY_BONUS,
            ComplexityLevel::Low | ComplexityLevel::Medium => OTHER_COMPLEXITY_BONUS,
        };
        if !record.is_default {
            personalization += CULTURAL_BONUS;
        }

        let confidence = BASE_CONFIDENCE - FALLBACK_PENALTY * fallbacks.len() as f64;

        let analysis = BusinessAnalysis {
            document_type,
            industry: industry.key.to_string(),
            industry_description: industry.entry.description.clone(),
            industry_requirements: industry.entry.requirements.clone(),
            complexity_level: complexity.value,
            cultural_style: style.value.clone(),
            legal_requirements: self
                .tables
                .legal_requirements_for(document_type)
                .into_iter()
                .cloned()
                .collect(),
            section_recommendations: self
                .tables
                .section_recommendations(document_type)
                .cloned()
                .unwrap_or_default(),
            personalization_score: Score::new(personalization.min(1.0)).rounded(),
            confidence: Score::new(confidence).rounded(),
            fallbacks,
        };

        tracing::debug!(
            company = %profile.company_name,
            document_type = %document_type,
            industry = %analysis.industry,
            complexity = %analysis.complexity_level,
            personalization = %analysis.personalization_score,
            fallbacks = analysis.fallbacks.len(),
            "profile analyzed"
        );
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdoc_core::{BusinessSize, CommunicationStyle, DataVolume, Language, Region};

    fn analyzer() -> BusinessProfileAnalyzer {
        BusinessProfileAnalyzer::new(Arc::new(RuleTables::builtin()))
    }

    fn abc_co() -> BusinessProfile {
        BusinessProfile::new("ABC Co", "technology")
            .with_size(BusinessSize::Sme)
            .with_volume(DataVolume::Medium)
            .with_region(Region::South)
            .with_style(CommunicationStyle::Modern)
    }

    #[test]
    fn specific_profile_scores_high() {
        let a = analyzer().analyze(&abc_co(), DocumentType::PrivacyPolicy);
        assert_eq!(a.industry, "technology");
        assert_eq!(a.complexity_level, ComplexityLevel::Medium);
        assert!(a.fallbacks.is_empty());
        // 0.70 + 0.10 + 0.05 + 0.10
        assert_eq!(a.personalization_score, Score::new(0.95));
        assert_eq!(a.confidence, Score::new(0.92));
        assert_eq!(
            a.cultural_style.get(Language::English),
            "dynamic, modern Southern style"
        );
    }

    #[test]
    fn high_complexity_caps_at_one() {
        let profile = abc_co()
            .with_size(BusinessSize::Enterprise)
            .with_volume(DataVolume::High);
        let a = analyzer().analyze(&profile, DocumentType::PrivacyPolicy);
        assert_eq!(a.complexity_level, ComplexityLevel::High);
        assert_eq!(a.personalization_score, Score::ONE);
    }

    #[test]
    fn unknown_industry_falls_back_to_generic() {
        let profile = BusinessProfile::new("XYZ", "unknown-sector");
        let a = analyzer().analyze(&profile, DocumentType::PrivacyPolicy);
        assert_eq!(a.industry, "generic");
        assert!(a.fallbacks.contains(&AnalysisFallback::GenericIndustry));
        assert_eq!(a.industry_requirements, RuleTables::builtin().default_industry.requirements);
    }

    #[test]
    fn fallbacks_reduce_confidence() {
        // central/casual has no explicit record and the industry is unknown.
        let profile = BusinessProfile::new("XYZ", "mining")
            .with_region(Region::Central)
            .with_style(CommunicationStyle::Casual);
        let a = analyzer().analyze(&profile, DocumentType::PrivacyPolicy);
        assert_eq!(
            a.fallbacks,
            vec![
                AnalysisFallback::GenericIndustry,
                AnalysisFallback::CulturalRecordFallback
            ]
        );
        assert_eq!(a.confidence, Score::new(0.84));
        // 0.70 + 0.05
        assert_eq!(a.personalization_score, Score::new(0.75));
    }

    #[test]
    fn missing_style_cell_uses_balanced_style() {
        let mut tables = RuleTables::builtin();
        tables.cultural_styles.clear();
        let a = BusinessProfileAnalyzer::new(Arc::new(tables))
            .analyze(&abc_co(), DocumentType::PrivacyPolicy);
        assert_eq!(
            a.cultural_style.get(Language::English),
            "balanced Vietnamese-culture style"
        );
        assert!(a.fallbacks.contains(&AnalysisFallback::DefaultCulturalStyle));
    }

    #[test]
    fn legal_requirements_follow_document_type() {
        let a = analyzer().analyze(&abc_co(), DocumentType::SecurityIncidentResponse);
        let ids: Vec<_> = a.legal_requirements.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"breach-notification"));
        assert!(!ids.contains(&"consent"));
    }

    #[test]
    fn recommendations_only_for_privacy_policy() {
        let an = analyzer();
        let pp = an.analyze(&abc_co(), DocumentType::PrivacyPolicy);
        assert_eq!(pp.section_recommendations.len(), 3);
        let dpa = an.analyze(&abc_co(), DocumentType::DataProcessingAgreement);
        assert!(dpa.section_recommendations.is_empty());
    }

    #[test]
    fn analysis_serializes() {
        let a = analyzer().analyze(&abc_co(), DocumentType::PrivacyPolicy);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["document_type"], "privacy-policy");
        assert_eq!(json["complexity_level"], "medium");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_profile() -> impl Strategy<Value = BusinessProfile> {
            (
                "[a-z-]{0,20}",
                prop::sample::select(BusinessSize::all().to_vec()),
                prop::sample::select(DataVolume::all().to_vec()),
                prop::sample::select(Region::all().to_vec()),
                prop::sample::select(CommunicationStyle::all().to_vec()),
            )
                .prop_map(|(industry, size, volume, region, style)| {
                    BusinessProfile::new("Co", industry)
                        .with_size(size)
                        .with_volume(volume)
                        .with_region(region)
                        .with_style(style)
                })
        }

        proptest! {
            #[test]
            fn scores_stay_in_unit_interval(
                profile in any_profile(),
                dt in prop::sample::select(DocumentType::all().to_vec()),
            ) {
                let a = analyzer().analyze(&profile, dt);
                prop_assert!((0.0..=1.0).contains(&a.personalization_score.value()));
                prop_assert!((0.0..=1.0).contains(&a.confidence.value()));
                prop_assert!(a.personalization_score.value() >= BASE_PERSONALIZATION);
                prop_assert_eq!(a.document_type, dt);
            }
        }
    }
}
