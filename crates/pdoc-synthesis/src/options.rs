//! # Generation Options
//!
//! The closed set of caller-tunable knobs. Every field has a documented
//! effect and an unset field means "use the profile/template default".

use pdoc_core::{
    BusinessProfile, CommunicationStyle, CulturalAdaptation, Formality, LanguageComplexity,
    OutputFormat,
};
use serde::{Deserialize, Serialize};

/// How much legal citation detail a section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalComplexity {
    /// Only the first legal reference of each section is kept.
    Basic,
    /// Every legal reference is kept (default).
    #[default]
    Standard,
    /// Every reference is kept and the body gains a legal-basis sentence.
    Comprehensive,
}

impl LegalComplexity {
    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Tier implied by the cultural language complexity when the caller
    /// does not choose one.
    pub fn from_language_complexity(complexity: LanguageComplexity) -> Self {
        match complexity {
            LanguageComplexity::Comprehensive => Self::Comprehensive,
            LanguageComplexity::Balanced => Self::Standard,
            LanguageComplexity::Simplified => Self::Basic,
        }
    }
}

/// Caller overrides applied on top of the resolved cultural adaptation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalOverrides {
    /// Replacement greeting.
    pub greeting: Option<String>,
    /// Replacement closing.
    pub closing: Option<String>,
    /// Replacement signature.
    pub signature: Option<String>,
    /// Replacement formality.
    pub formality: Option<Formality>,
}

impl CulturalOverrides {
    /// Whether no override is set.
    pub fn is_empty(&self) -> bool {
        self.greeting.is_none()
            && self.closing.is_none()
            && self.signature.is_none()
            && self.formality.is_none()
    }

    /// Apply the overrides to `adaptation`.
    pub fn apply(&self, mut adaptation: CulturalAdaptation) -> CulturalAdaptation {
        if let Some(greeting) = &self.greeting {
            adaptation.greeting = greeting.clone();
        }
        if let Some(closing) = &self.closing {
            adaptation.closing = closing.clone();
        }
        if let Some(signature) = &self.signature {
            adaptation.signature = signature.clone();
        }
        if let Some(formality) = self.formality {
            adaptation.formality = formality;
        }
        adaptation
    }
}

/// Options for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Restrict synthesis to these section ids. Template order is kept and
    /// unknown ids are ignored. `None` synthesizes every template section.
    pub included_sections: Option<Vec<String>>,
    /// Override the profile's communication style.
    pub communication_style: Option<CommunicationStyle>,
    /// Legal citation tier. `None` derives it from the cultural adaptation.
    pub legal_complexity: Option<LegalComplexity>,
    /// Use industry-specific templates where they exist.
    pub industry_specific: bool,
    /// Overrides applied to the resolved cultural adaptation.
    pub cultural_overrides: CulturalOverrides,
    /// Output format tag. `None` uses the orchestrator's configured default.
    pub output_format: Option<OutputFormat>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            included_sections: None,
            communication_style: None,
            legal_complexity: None,
            industry_specific: true,
            cultural_overrides: CulturalOverrides::default(),
            output_format: None,
        }
    }
}

impl GenerationOptions {
    /// The profile the pipeline should use: `profile` with the style
    /// override applied.
    pub fn effective_profile(&self, profile: &BusinessProfile) -> BusinessProfile {
        match self.communication_style {
            Some(style) if style != profile.communication_style => {
                profile.clone().with_style(style)
            }
            _ => profile.clone(),
        }
    }

    /// Whether `section_id` passes the inclusion filter.
    pub fn includes(&self, section_id: &str) -> bool {
        self.included_sections
            .as_ref()
            .map_or(true, |ids| ids.iter().any(|id| id == section_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_industry_specific() {
        let opts = GenerationOptions::default();
        assert!(opts.industry_specific);
        assert!(opts.cultural_overrides.is_empty());
        assert!(opts.includes("anything"));
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let opts: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, GenerationOptions::default());
    }

    #[test]
    fn inclusion_filter() {
        let opts = GenerationOptions {
            included_sections: Some(vec!["introduction".to_string()]),
            ..Default::default()
        };
        assert!(opts.includes("introduction"));
        assert!(!opts.includes("legal-basis"));
    }

    #[test]
    fn style_override_changes_effective_profile() {
        let profile = BusinessProfile::new("ABC Co", "technology");
        let opts = GenerationOptions {
            communication_style: Some(CommunicationStyle::Casual),
            ..Default::default()
        };
        let effective = opts.effective_profile(&profile);
        assert_eq!(effective.communication_style, CommunicationStyle::Casual);
        assert_eq!(effective.company_name, "ABC Co");
    }

    #[test]
    fn legal_complexity_follows_language_complexity() {
        assert_eq!(
            LegalComplexity::from_language_complexity(LanguageComplexity::Simplified),
            LegalComplexity::Basic
        );
        assert_eq!(
            LegalComplexity::from_language_complexity(LanguageComplexity::Balanced),
            LegalComplexity::Standard
        );
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let base = pdoc_rules::cultural_fallback().resolve(pdoc_core::Language::English);
        let overrides = CulturalOverrides {
            greeting: Some("Hello".to_string()),
            formality: Some(Formality::High),
            ..Default::default()
        };
        let out = overrides.apply(base.clone());
        assert_eq!(out.greeting, "Hello");
        assert_eq!(out.formality, Formality::High);
        assert_eq!(out.closing, base.closing);
    }
}
