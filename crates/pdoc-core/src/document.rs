//! # Document Content Model
//!
//! The synthesized content of one legal document: an ordered list of
//! [`DocumentSection`]s, descriptive [`DocumentMetadata`], the embedded
//! [`CulturalAdaptation`], and two content-level scores.
//!
//! Section order is defined by the template, never alphabetical, and is
//! stable for identical (document type, industry, language) input.

use serde::{Deserialize, Serialize};

use crate::culture::CulturalAdaptation;
use crate::digest::{sha256_digest, ContentDigest};
use crate::document_type::DocumentType;
use crate::error::PdocError;
use crate::language::Language;
use crate::score::Score;
use crate::temporal::Timestamp;

/// Structural role of a section, used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// Document header block.
    Header,
    /// Prose body (default).
    #[default]
    Body,
    /// Bulleted list.
    List,
    /// Tabular content.
    Table,
    /// Footer block.
    Footer,
}

/// One synthesized section of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentSection {
    /// Stable section identifier (e.g. `data-collection`).
    pub id: String,
    /// Section heading in the document language.
    pub title: String,
    /// Synthesized body text with business tokens substituted.
    pub content: String,
    /// Structural role.
    pub section_type: SectionType,
    /// Ordered legal citations backing the section.
    pub legal_references: Vec<String>,
    /// Cultural-adaptation notes for the reviewer.
    pub cultural_notes: Vec<String>,
}

/// Descriptive metadata of synthesized content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title.
    pub title: String,
    /// Content version.
    pub version: String,
    /// Tag identifying the component that produced the content.
    pub created_by: String,
    /// Creation time (stamped at synthesis).
    pub created_at: Timestamp,
    /// Last modification time (stamped at synthesis).
    pub modified_at: Timestamp,
    /// Document language.
    pub language: Language,
    /// Purpose statement.
    pub purpose: String,
    /// Regulations the document is written against.
    pub applicable_regulations: Vec<String>,
    /// Document type of the template that produced this content.
    pub document_type: DocumentType,
    /// Identifier of that template.
    pub template_id: String,
    /// Company the document was generated for.
    pub company_name: String,
    /// Normalized industry label of the company.
    pub industry: String,
    /// Template sections that had no text pattern and were skipped.
    #[serde(default)]
    pub missing_sections: Vec<String>,
}

/// The complete synthesized content of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Sections in template order.
    pub sections: Vec<DocumentSection>,
    /// Descriptive metadata.
    pub metadata: DocumentMetadata,
    /// Cultural adaptation applied during synthesis.
    pub cultural_adaptation: CulturalAdaptation,
    /// Fraction of sections backed by at least one legal citation.
    pub legal_compliance_level: Score,
    /// Fraction of requested sections that were synthesized.
    pub generation_quality: Score,
}

impl DocumentContent {
    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&DocumentSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section ids in document order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Titles and bodies of every section joined with newlines.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        for section in &self.sections {
            text.push_str(&section.title);
            text.push('\n');
            text.push_str(&section.content);
            text.push('\n');
        }
        text
    }

    /// Whether any section cites `citation` verbatim.
    pub fn cites(&self, citation: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.legal_references.iter().any(|r| r == citation))
    }

    /// Digest of the section list. Timestamps are excluded, so identical
    /// synthesis inputs always produce identical digests.
    ///
    /// # Errors
    ///
    /// Returns [`PdocError::Json`] if serialization fails.
    pub fn digest(&self) -> Result<ContentDigest, PdocError> {
        sha256_digest(&self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::{Formality, LanguageComplexity, RegionalAdaptation};

    fn section(id: &str, refs: &[&str]) -> DocumentSection {
        DocumentSection {
            id: id.to_string(),
            title: format!("Title {id}"),
            content: format!("Body of {id}"),
            section_type: SectionType::Body,
            legal_references: refs.iter().map(|r| r.to_string()).collect(),
            cultural_notes: vec![],
        }
    }

    fn content(sections: Vec<DocumentSection>) -> DocumentContent {
        let now = Timestamp::now();
        DocumentContent {
            sections,
            metadata: DocumentMetadata {
                title: "Privacy Policy".to_string(),
                version: "1.0".to_string(),
                created_by: "test".to_string(),
                created_at: now,
                modified_at: now,
                language: Language::English,
                purpose: "testing".to_string(),
                applicable_regulations: vec![],
                document_type: DocumentType::PrivacyPolicy,
                template_id: "tpl-privacy-policy-generic".to_string(),
                company_name: "ABC Co".to_string(),
                industry: "technology".to_string(),
                missing_sections: vec![],
            },
            cultural_adaptation: CulturalAdaptation {
                header_style: "clean-professional".to_string(),
                greeting: "Dear".to_string(),
                closing: "Sincerely".to_string(),
                signature: "Board".to_string(),
                formality: Formality::Moderate,
                language_complexity: LanguageComplexity::Balanced,
                regional: RegionalAdaptation::default(),
            },
            legal_compliance_level: Score::ONE,
            generation_quality: Score::ONE,
        }
    }

    #[test]
    fn section_lookup_and_order() {
        let c = content(vec![section("b", &[]), section("a", &[])]);
        assert_eq!(c.section_ids(), vec!["b", "a"]);
        assert!(c.section("a").is_some());
        assert!(c.section("z").is_none());
    }

    #[test]
    fn cites_matches_exact_reference() {
        let c = content(vec![section("a", &["Decree 13, Art. 11"])]);
        assert!(c.cites("Decree 13, Art. 11"));
        assert!(!c.cites("Decree 13"));
    }

    #[test]
    fn full_text_contains_titles_and_bodies() {
        let c = content(vec![section("a", &[])]);
        let text = c.full_text();
        assert!(text.contains("Title a"));
        assert!(text.contains("Body of a"));
    }

    #[test]
    fn digest_ignores_metadata_timestamps() {
        let a = content(vec![section("a", &["x"])]);
        let mut b = a.clone();
        b.metadata.created_at = Timestamp::parse("2020-01-01T00:00:00Z").unwrap();
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }
}
