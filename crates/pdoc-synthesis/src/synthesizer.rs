//! # Content Synthesizer
//!
//! Builds [`DocumentContent`] from a template, a profile and a language.
//! Section text is a pure function of those inputs plus the options: the
//! clock only enters the metadata timestamps.
//!
//! ## Composition
//!
//! 1. Filter the template's sections through `included_sections`.
//! 2. For each remaining id, substitute the business tokens into the
//!    pattern body. Ids without a pattern are skipped and reported in
//!    `metadata.missing_sections`.
//! 3. Prefix the first body with the greeting and suffix the last body with
//!    the closing and signature.
//! 4. Trim or expand legal references according to the legal tier.

use pdoc_core::{
    BusinessProfile, CulturalAdaptation, DocumentContent, DocumentMetadata, DocumentSection,
    Language, Score, Timestamp, PROFILE_TOKENS,
};

use crate::catalog::Template;
use crate::options::{GenerationOptions, LegalComplexity};
use crate::patterns::{self, SectionPattern};

const CONTENT_VERSION: &str = "1.0";

/// Stateless section synthesizer.
#[derive(Debug, Clone, Default)]
pub struct ContentSynthesizer;

impl ContentSynthesizer {
    /// Create a synthesizer.
    pub fn new() -> Self {
        Self
    }

    /// Synthesize the content of `template` for `profile` in `language`.
    ///
    /// `adaptation` is the resolved cultural adaptation; `None` uses the
    /// template's defaults. Cultural overrides from `options` are applied on
    /// top in both cases.
    pub fn synthesize(
        &self,
        template: &Template,
        profile: &BusinessProfile,
        language: Language,
        adaptation: Option<&CulturalAdaptation>,
        options: &GenerationOptions,
    ) -> DocumentContent {
        let adaptation = options.cultural_overrides.apply(
            adaptation
                .cloned()
                .unwrap_or_else(|| template.default_cultural.resolve(language)),
        );
        let tier = options.legal_complexity.unwrap_or_else(|| {
            LegalComplexity::from_language_complexity(adaptation.language_complexity)
        });

        let requested: Vec<&str> = template
            .sections
            .iter()
            .map(String::as_str)
            .filter(|id| options.includes(id))
            .collect();

        let mut missing = Vec::new();
        let mut sections = Vec::with_capacity(requested.len());
        for id in &requested {
            match patterns::pattern(id) {
                Some(pattern) => {
                    sections.push(build_section(pattern, profile, language, &adaptation, tier))
                }
                None => {
                    tracing::warn!(
                        section = %id,
                        template = %template.id,
                        "no text pattern for section, skipping"
                    );
                    missing.push(id.to_string());
                }
            }
        }

        if let Some(first) = sections.first_mut() {
            first.content = format!("{}, {}", adaptation.greeting, first.content);
        }
        if let Some(last) = sections.last_mut() {
            last.content = format!(
                "{}\n\n{},\n{}",
                last.content, adaptation.closing, adaptation.signature
            );
        }

        let with_refs = sections
            .iter()
            .filter(|s| !s.legal_references.is_empty())
            .count();
        let legal_compliance_level = Score::ratio(with_refs, sections.len(), Score::ZERO);
        let generation_quality = Score::ratio(sections.len(), requested.len(), Score::ZERO);

        let now = Timestamp::now();
        let metadata = DocumentMetadata {
            title: format!("{} - {}", template.title.get(language), profile.company_name),
            version: CONTENT_VERSION.to_string(),
            created_by: concat!("pdoc-synthesis/", env!("CARGO_PKG_VERSION")).to_string(),
            created_at: now,
            modified_at: now,
            language,
            purpose: template.description.get(language).to_string(),
            applicable_regulations: template.applicable_regulations.clone(),
            document_type: template.document_type,
            template_id: template.id.clone(),
            company_name: profile.company_name.clone(),
            industry: profile.industry_type.clone(),
            missing_sections: missing,
        };

        tracing::debug!(
            template = %template.id,
            %language,
            sections = sections.len(),
            requested = requested.len(),
            "content synthesized"
        );

        DocumentContent {
            sections,
            metadata,
            cultural_adaptation: adaptation,
            legal_compliance_level,
            generation_quality,
        }
    }
}

fn build_section(
    pattern: &SectionPattern,
    profile: &BusinessProfile,
    language: Language,
    adaptation: &CulturalAdaptation,
    tier: LegalComplexity,
) -> DocumentSection {
    let mut content = substitute(pattern.body.get(language), profile, language);
    let legal_references: Vec<String> = match tier {
        LegalComplexity::Basic => pattern
            .references
            .iter()
            .take(1)
            .map(|r| r.to_string())
            .collect(),
        LegalComplexity::Standard | LegalComplexity::Comprehensive => {
            pattern.references.iter().map(|r| r.to_string()).collect()
        }
    };
    if tier == LegalComplexity::Comprehensive && !legal_references.is_empty() {
        let label = match language {
            Language::Vietnamese => "Căn cứ pháp lý",
            Language::English => "Legal basis",
        };
        content = format!("{content} {label}: {}.", legal_references.join("; "));
    }

    let tone_label = match language {
        Language::Vietnamese => "Giọng văn",
        Language::English => "Tone",
    };
    let mut cultural_notes = vec![pattern.note.get(language).to_string()];
    if !adaptation.regional.tone.is_empty() {
        cultural_notes.push(format!("{tone_label}: {}", adaptation.regional.tone));
    }

    DocumentSection {
        id: pattern.id.to_string(),
        title: pattern.title.get(language).to_string(),
        content,
        section_type: pattern.section_type,
        legal_references,
        cultural_notes,
    }
}

/// Replace the business tokens in `text` in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a company name containing
/// braces is copied through as written. Braced text that is not one of
/// [`PROFILE_TOKENS`] is left untouched.
pub fn substitute(text: &str, profile: &BusinessProfile, language: Language) -> String {
    let mut out = String::with_capacity(text.len() + profile.company_name.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let token = tail[1..]
            .find('}')
            .map(|close| &tail[1..close + 1])
            .filter(|name| PROFILE_TOKENS.contains(name));
        match token {
            Some(name) => {
                match name {
                    "company" => out.push_str(&profile.company_name),
                    "industry" => out.push_str(&profile.industry_type),
                    "region" => out.push_str(profile.regional_location.display_name().get(language)),
                    _ => out.push_str(&profile.employee_count.to_string()),
                }
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
