//! # Rule Tables
//!
//! The reference data the generator decides with. Every lookup has a
//! documented default, so a lookup never fails: it returns the matched value
//! together with a flag saying whether the default was used. The analyzer
//! turns those flags into its fallback list and confidence penalty.
//!
//! A [`RuleTables`] value is immutable after construction and is shared
//! across concurrent requests behind an `Arc`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use pdoc_core::{
    BusinessSize, CommunicationStyle, CulturalAdaptation, DataVolume, DocumentType, Formality,
    Language, LanguageComplexity, Localized, Region, RegionalAdaptation,
};
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Key reported for industries that fell back to the generic entry.
pub const GENERIC_INDUSTRY: &str = "generic";

// ─── Lookup results ──────────────────────────────────────────────────

/// A table lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup<T> {
    /// The matched value, or the table default.
    pub value: T,
    /// `true` when the key was absent and the default was returned.
    pub is_default: bool,
}

impl<T> Lookup<T> {
    fn found(value: T) -> Self {
        Self {
            value,
            is_default: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            is_default: true,
        }
    }
}

/// Result of resolving an open industry label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryMatch<'a> {
    /// Canonical industry key, or [`GENERIC_INDUSTRY`].
    pub key: &'a str,
    /// The requirement entry.
    pub entry: &'a IndustryEntry,
    /// `true` when the generic entry was used.
    pub is_default: bool,
}

// ─── Table records ───────────────────────────────────────────────────

/// Data-processing complexity of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    /// Light processing obligations.
    Low,
    /// Moderate obligations (default).
    #[default]
    Medium,
    /// Heavy obligations.
    High,
}

impl ComplexityLevel {
    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sector-specific obligation, checked by keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRequirement {
    /// Stable identifier.
    pub id: String,
    /// Human-readable obligation.
    pub text: Localized,
    /// Lowercase phrases whose presence in a document satisfies the obligation.
    pub keywords: Vec<String>,
}

/// Requirements attached to one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryEntry {
    /// Summary of the sector's data-protection posture.
    pub description: Localized,
    /// Sector-specific obligations.
    pub requirements: Vec<IndustryRequirement>,
}

/// A baseline legal requirement from the PDPL framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalRequirement {
    /// Stable identifier, e.g. `consent`.
    pub id: String,
    /// Human-readable title.
    pub title: Localized,
    /// Citation string that sections use as a legal reference.
    pub citation: String,
    /// Lowercase phrases whose presence satisfies the requirement.
    pub keywords: Vec<String>,
    /// Whether a miss is a critical issue.
    pub mandatory: bool,
    /// Document types the requirement applies to. Empty means every type.
    #[serde(default)]
    pub applies_to: Vec<DocumentType>,
}

impl LegalRequirement {
    /// Whether the requirement applies to `document_type`.
    pub fn applies(&self, document_type: DocumentType) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&document_type)
    }
}

/// A check on the security-agency axis (safeguards, A05 supervision, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCheck {
    /// Stable identifier.
    pub id: String,
    /// Human-readable title.
    pub title: Localized,
    /// Lowercase phrases whose presence satisfies the check.
    pub keywords: Vec<String>,
    /// Whether a miss is a critical issue.
    pub mandatory: bool,
    /// Document types the check applies to. Empty means every type.
    #[serde(default)]
    pub applies_to: Vec<DocumentType>,
}

impl SecurityCheck {
    /// Whether the check applies to `document_type`.
    pub fn applies(&self, document_type: DocumentType) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&document_type)
    }
}

/// Regional phrasing guidance in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalRecord {
    /// Language style.
    pub language_style: Localized,
    /// Terminology preference.
    pub terminology: Localized,
    /// Structure preference.
    pub structure: Localized,
    /// Tone.
    pub tone: Localized,
}

/// A bilingual cultural-adaptation record, resolved per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalRecord {
    /// Header style tag.
    pub header_style: String,
    /// Opening greeting.
    pub greeting: Localized,
    /// Closing phrase.
    pub closing: Localized,
    /// Signature line.
    pub signature: Localized,
    /// Formality level.
    pub formality: Formality,
    /// Legal language density.
    pub language_complexity: LanguageComplexity,
    /// Regional phrasing guidance.
    pub regional: RegionalRecord,
}

impl CulturalRecord {
    /// Project the record onto one language.
    pub fn resolve(&self, language: Language) -> CulturalAdaptation {
        CulturalAdaptation {
            header_style: self.header_style.clone(),
            greeting: self.greeting.get(language).to_string(),
            closing: self.closing.get(language).to_string(),
            signature: self.signature.get(language).to_string(),
            formality: self.formality,
            language_complexity: self.language_complexity,
            regional: RegionalAdaptation {
                language_style: self.regional.language_style.get(language).to_string(),
                terminology: self.regional.terminology.get(language).to_string(),
                structure: self.regional.structure.get(language).to_string(),
                tone: self.regional.tone.get(language).to_string(),
            },
        }
    }
}

// ─── RuleTables ──────────────────────────────────────────────────────

/// The complete, immutable set of reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTables {
    /// Industry key → requirements.
    pub industries: BTreeMap<String, IndustryEntry>,
    /// Alternative industry labels → canonical key.
    #[serde(default)]
    pub industry_aliases: BTreeMap<String, String>,
    /// Entry used for unmapped industries.
    pub default_industry: IndustryEntry,
    /// Size × volume → complexity.
    pub complexity: BTreeMap<BusinessSize, BTreeMap<DataVolume, ComplexityLevel>>,
    /// Region × style → style description used by the analyzer.
    pub cultural_styles: BTreeMap<Region, BTreeMap<CommunicationStyle, Localized>>,
    /// Style description for unmapped cells.
    pub default_cultural_style: Localized,
    /// Region × style → cultural-adaptation record. Deliberately sparse.
    pub cultural_records: BTreeMap<Region, BTreeMap<CommunicationStyle, CulturalRecord>>,
    /// Record for every pair not in `cultural_records`.
    pub cultural_fallback: CulturalRecord,
    /// Baseline legal requirements, in reporting order.
    pub legal_requirements: Vec<LegalRequirement>,
    /// Security-agency checks, in reporting order.
    pub security_checks: Vec<SecurityCheck>,
    /// Minimal ordered section ids per document type.
    pub section_sets: BTreeMap<DocumentType, Vec<String>>,
    /// Section id → guidance, for the document types that define it.
    #[serde(default)]
    pub section_recommendations: BTreeMap<DocumentType, BTreeMap<String, Vec<Localized>>>,
}

impl RuleTables {
    /// Parse and validate a complete table set from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Yaml`] on malformed input and
    /// [`RulesError::Inconsistent`] when [`validate`](Self::validate) fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RulesError> {
        let tables: Self = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Read, parse and validate a table set from a YAML file.
    ///
    /// # Errors
    ///
    /// As [`from_yaml_str`](Self::from_yaml_str), plus [`RulesError::Io`].
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_yaml_str(&yaml)?;
        tracing::info!(path = %path.display(), "loaded rule tables");
        Ok(tables)
    }

    /// Serialize the table set to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, RulesError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Inconsistent`] for empty or duplicate ids,
    /// requirements without keywords, aliases pointing at unknown
    /// industries, and recommendations for sections outside the type's set.
    pub fn validate(&self) -> Result<(), RulesError> {
        for (key, entry) in &self.industries {
            if key.trim().is_empty() || key != &key.to_lowercase() {
                return Err(inconsistent(
                    "industries",
                    format!("industry key `{key}` must be non-empty lowercase"),
                ));
            }
            check_industry_entry(key, entry)?;
        }
        check_industry_entry(GENERIC_INDUSTRY, &self.default_industry)?;

        for (alias, target) in &self.industry_aliases {
            if !self.industries.contains_key(target) {
                return Err(inconsistent(
                    "industry_aliases",
                    format!("alias `{alias}` points at unknown industry `{target}`"),
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for req in &self.legal_requirements {
            if req.id.is_empty() || !seen.insert(req.id.as_str()) {
                return Err(inconsistent(
                    "legal_requirements",
                    format!("empty or duplicate id `{}`", req.id),
                ));
            }
            if req.citation.trim().is_empty() || req.keywords.is_empty() {
                return Err(inconsistent(
                    "legal_requirements",
                    format!("`{}` needs a citation and at least one keyword", req.id),
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for check in &self.security_checks {
            if check.id.is_empty() || !seen.insert(check.id.as_str()) {
                return Err(inconsistent(
                    "security_checks",
                    format!("empty or duplicate id `{}`", check.id),
                ));
            }
            if check.keywords.is_empty() {
                return Err(inconsistent(
                    "security_checks",
                    format!("`{}` has no keywords", check.id),
                ));
            }
        }

        for (dt, ids) in &self.section_sets {
            let mut seen = BTreeSet::new();
            for id in ids {
                if id.is_empty() || !seen.insert(id.as_str()) {
                    return Err(inconsistent(
                        "section_sets",
                        format!("{dt}: empty or duplicate section id `{id}`"),
                    ));
                }
            }
        }

        for (dt, recs) in &self.section_recommendations {
            let set = self.section_set(*dt);
            if let Some(id) = recs.keys().find(|id| !set.contains(id)) {
                return Err(inconsistent(
                    "section_recommendations",
                    format!("{dt}: recommendation for section `{id}` outside the section set"),
                ));
            }
        }

        Ok(())
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Resolve an open industry label. Aliases are followed; anything
    /// unmapped resolves to the generic entry.
    pub fn industry(&self, industry_type: &str) -> IndustryMatch<'_> {
        let label = industry_type.trim().to_lowercase();
        let key = self
            .industry_aliases
            .get(&label)
            .map(String::as_str)
            .unwrap_or(label.as_str());
        match self.industries.get_key_value(key) {
            Some((key, entry)) => IndustryMatch {
                key,
                entry,
                is_default: false,
            },
            None => {
                tracing::debug!(industry = %label, "unmapped industry, using generic entry");
                IndustryMatch {
                    key: GENERIC_INDUSTRY,
                    entry: &self.default_industry,
                    is_default: true,
                }
            }
        }
    }

    /// Complexity of a size × volume combination; `medium` when unmapped.
    pub fn complexity(&self, size: BusinessSize, volume: DataVolume) -> Lookup<ComplexityLevel> {
        match self.complexity.get(&size).and_then(|row| row.get(&volume)) {
            Some(level) => Lookup::found(*level),
            None => {
                tracing::debug!(%size, %volume, "unmapped complexity cell, using medium");
                Lookup::fallback(ComplexityLevel::Medium)
            }
        }
    }

    /// Analyzer style description for a region × style pair.
    pub fn cultural_style(
        &self,
        region: Region,
        style: CommunicationStyle,
    ) -> Lookup<&Localized> {
        match self.cultural_styles.get(&region).and_then(|row| row.get(&style)) {
            Some(text) => Lookup::found(text),
            None => Lookup::fallback(&self.default_cultural_style),
        }
    }

    /// Cultural-adaptation record for a region × style pair, or the fallback.
    pub fn cultural_record(
        &self,
        region: Region,
        style: CommunicationStyle,
    ) -> Lookup<&CulturalRecord> {
        match self.cultural_records.get(&region).and_then(|row| row.get(&style)) {
            Some(record) => Lookup::found(record),
            None => Lookup::fallback(&self.cultural_fallback),
        }
    }

    /// Legal requirements applicable to `document_type`, in table order.
    pub fn legal_requirements_for(&self, document_type: DocumentType) -> Vec<&LegalRequirement> {
        self.legal_requirements
            .iter()
            .filter(|r| r.applies(document_type))
            .collect()
    }

    /// Look up a legal requirement by id.
    pub fn legal_requirement(&self, id: &str) -> Option<&LegalRequirement> {
        self.legal_requirements.iter().find(|r| r.id == id)
    }

    /// Security checks applicable to `document_type`, in table order.
    pub fn security_checks_for(&self, document_type: DocumentType) -> Vec<&SecurityCheck> {
        self.security_checks
            .iter()
            .filter(|c| c.applies(document_type))
            .collect()
    }

    /// Minimal section ids for `document_type`. Empty when the type has no
    /// defined set.
    pub fn section_set(&self, document_type: DocumentType) -> &[String] {
        self.section_sets
            .get(&document_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Section guidance for `document_type`, if the type defines any.
    pub fn section_recommendations(
        &self,
        document_type: DocumentType,
    ) -> Option<&BTreeMap<String, Vec<Localized>>> {
        self.section_recommendations.get(&document_type)
    }
}

fn check_industry_entry(key: &str, entry: &IndustryEntry) -> Result<(), RulesError> {
    let mut seen = BTreeSet::new();
    for req in &entry.requirements {
        if req.id.is_empty() || !seen.insert(req.id.as_str()) {
            return Err(inconsistent(
                "industries",
                format!("{key}: empty or duplicate requirement id `{}`", req.id),
            ));
        }
        if req.keywords.is_empty() {
            return Err(inconsistent(
                "industries",
                format!("{key}: requirement `{}` has no keywords", req.id),
            ));
        }
    }
    Ok(())
}

fn inconsistent(table: &'static str, detail: String) -> RulesError {
    RulesError::Inconsistent { table, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> RuleTables {
        RuleTables::builtin()
    }

    #[test]
    fn builtin_tables_are_consistent() {
        tables().validate().unwrap();
    }

    #[test]
    fn industry_aliases_resolve() {
        let t = tables();
        let m = t.industry("Banking");
        assert_eq!(m.key, "finance");
        assert!(!m.is_default);
        assert_eq!(t.industry(" RETAIL ").key, "ecommerce");
    }

    #[test]
    fn unknown_industry_uses_generic_entry() {
        let t = tables();
        let m = t.industry("unknown-sector");
        assert!(m.is_default);
        assert_eq!(m.key, GENERIC_INDUSTRY);
        assert_eq!(m.entry, &t.default_industry);
    }

    #[test]
    fn complexity_matrix_cells() {
        let t = tables();
        use BusinessSize::*;
        use DataVolume::*;
        let expect = [
            (Startup, Low, ComplexityLevel::Low),
            (Startup, Medium, ComplexityLevel::Low),
            (Startup, High, ComplexityLevel::Medium),
            (Sme, Low, ComplexityLevel::Low),
            (Sme, Medium, ComplexityLevel::Medium),
            (Sme, High, ComplexityLevel::High),
            (Enterprise, Low, ComplexityLevel::Medium),
            (Enterprise, Medium, ComplexityLevel::High),
            (Enterprise, High, ComplexityLevel::High),
        ];
        for (size, volume, level) in expect {
            let lookup = t.complexity(size, volume);
            assert_eq!(lookup.value, level, "{size}/{volume}");
            assert!(!lookup.is_default);
        }
    }

    #[test]
    fn missing_complexity_cell_defaults_to_medium() {
        let mut t = tables();
        t.complexity.remove(&BusinessSize::Enterprise);
        let lookup = t.complexity(BusinessSize::Enterprise, DataVolume::High);
        assert_eq!(lookup.value, ComplexityLevel::Medium);
        assert!(lookup.is_default);
    }

    #[test]
    fn cultural_style_covers_every_cell() {
        let t = tables();
        for region in Region::all() {
            for style in CommunicationStyle::all() {
                assert!(!t.cultural_style(*region, *style).is_default);
            }
        }
    }

    #[test]
    fn cultural_record_matrix_is_sparse() {
        let t = tables();
        let explicit = [
            (Region::North, CommunicationStyle::Formal),
            (Region::North, CommunicationStyle::Modern),
            (Region::Central, CommunicationStyle::Formal),
            (Region::South, CommunicationStyle::Modern),
            (Region::South, CommunicationStyle::Casual),
        ];
        for region in Region::all() {
            for style in CommunicationStyle::all() {
                let lookup = t.cultural_record(*region, *style);
                assert_eq!(
                    !lookup.is_default,
                    explicit.contains(&(*region, *style)),
                    "{region}/{style}"
                );
            }
        }
    }

    #[test]
    fn south_modern_greeting() {
        let t = tables();
        let record = t.cultural_record(Region::South, CommunicationStyle::Modern).value;
        assert_eq!(record.resolve(Language::Vietnamese).greeting, "Chào quý khách");
    }

    #[test]
    fn privacy_policy_requirements_and_sections() {
        let t = tables();
        let ids: Vec<_> = t
            .legal_requirements_for(DocumentType::PrivacyPolicy)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "pdpl-basis",
                "consent",
                "processing-notice",
                "purpose-limitation",
                "data-subject-rights"
            ]
        );
        assert_eq!(
            t.section_set(DocumentType::PrivacyPolicy),
            ["introduction", "data-collection", "legal-basis"]
        );
    }

    #[test]
    fn vendor_assessment_has_no_section_set() {
        assert!(tables()
            .section_set(DocumentType::VendorPrivacyAssessment)
            .is_empty());
    }

    #[test]
    fn every_other_type_has_a_section_set() {
        let t = tables();
        for dt in DocumentType::all() {
            if *dt != DocumentType::VendorPrivacyAssessment {
                assert!(!t.section_set(*dt).is_empty(), "{dt}");
            }
        }
    }

    #[test]
    fn recommendations_only_for_privacy_policy() {
        let t = tables();
        assert!(t.section_recommendations(DocumentType::PrivacyPolicy).is_some());
        assert!(t.section_recommendations(DocumentType::ConsentForms).is_none());
    }

    #[test]
    fn every_type_gets_at_least_one_legal_requirement() {
        let t = tables();
        for dt in DocumentType::all() {
            assert!(!t.legal_requirements_for(*dt).is_empty(), "{dt}");
            assert!(!t.security_checks_for(*dt).is_empty(), "{dt}");
        }
    }

    #[test]
    fn yaml_round_trip_preserves_tables() {
        let t = tables();
        let yaml = t.to_yaml_string().unwrap();
        let parsed = RuleTables::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, t);
    }

    #[test]
    fn from_yaml_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.yaml");
        std::fs::write(&path, tables().to_yaml_string().unwrap()).unwrap();
        let loaded = RuleTables::from_yaml_path(&path).unwrap();
        assert_eq!(loaded.industries.len(), tables().industries.len());
    }

    #[test]
    fn from_yaml_path_reports_missing_file() {
        let err = RuleTables::from_yaml_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = RuleTables::from_yaml_str("industries: [1, 2").unwrap_err();
        assert!(matches!(err, RulesError::Yaml(_)));
    }

    #[test]
    fn duplicate_requirement_id_is_inconsistent() {
        let mut t = tables();
        let dup = t.legal_requirements[0].clone();
        t.legal_requirements.push(dup);
        assert!(matches!(
            t.validate(),
            Err(RulesError::Inconsistent {
                table: "legal_requirements",
                ..
            })
        ));
    }

    #[test]
    fn dangling_alias_is_inconsistent() {
        let mut t = tables();
        t.industry_aliases
            .insert("fintech".to_string(), "payments".to_string());
        assert!(matches!(
            t.validate(),
            Err(RulesError::Inconsistent {
                table: "industry_aliases",
                ..
            })
        ));
    }

    #[test]
    fn recommendation_outside_section_set_is_inconsistent() {
        let mut t = tables();
        t.section_recommendations
            .entry(DocumentType::PrivacyPolicy)
            .or_default()
            .insert("appendix".to_string(), vec![]);
        assert!(t.validate().is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn industry_lookup_never_panics(label in ".{0,40}") {
                let t = RuleTables::builtin();
                let m = t.industry(&label);
                prop_assert_eq!(m.is_default, m.key == GENERIC_INDUSTRY);
            }
        }
    }
}
