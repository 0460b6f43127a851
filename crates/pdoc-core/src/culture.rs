//! # Cultural Adaptation Record
//!
//! Tone and structure choices applied to generated text based on the
//! business's region and communication style. The record is derived, never
//! persisted on its own, and always travels embedded in a document.

use serde::{Deserialize, Serialize};

/// Formality level of the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    /// Highly formal, full honorifics.
    High,
    /// Professional but approachable (default).
    #[default]
    Moderate,
    /// Friendly, conversational.
    Friendly,
}

impl Formality {
    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Friendly => "friendly",
        }
    }

    /// Parse a label, case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "moderate" => Some(Self::Moderate),
            "friendly" => Some(Self::Friendly),
            _ => None,
        }
    }
}

/// How dense the legal language should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageComplexity {
    /// Full legal detail.
    Comprehensive,
    /// Legal detail with plain-language explanations (default).
    #[default]
    Balanced,
    /// Plain language first.
    Simplified,
}

impl LanguageComplexity {
    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Balanced => "balanced",
            Self::Simplified => "simplified",
        }
    }
}

/// Region-specific phrasing guidance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RegionalAdaptation {
    /// Language style, e.g. standard northern Vietnamese.
    pub language_style: String,
    /// Terminology preference.
    pub terminology: String,
    /// Document structure preference.
    pub structure: String,
    /// Overall tone.
    pub tone: String,
}

/// The cultural adaptation embedded in every generated document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CulturalAdaptation {
    /// Header style tag used by the renderer.
    pub header_style: String,
    /// Opening greeting.
    pub greeting: String,
    /// Closing phrase.
    pub closing: String,
    /// Signature line.
    pub signature: String,
    /// Formality level.
    pub formality: Formality,
    /// Legal language density.
    pub language_complexity: LanguageComplexity,
    /// Region-specific phrasing guidance.
    pub regional: RegionalAdaptation,
}
