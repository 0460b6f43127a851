//! # Output Language
//!
//! The generator produces documents in Vietnamese or English. Reference text
//! that must exist in both languages is carried as a [`Localized`] pair.

use serde::{Deserialize, Serialize};

/// Language of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese (default).
    #[default]
    Vietnamese,
    /// English.
    English,
}

impl Language {
    /// Parse a language label. Accepts `vietnamese`/`vi` and `english`/`en`,
    /// case-insensitive.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "vietnamese" | "vi" | "vi-vn" => Some(Self::Vietnamese),
            "english" | "en" | "en-us" | "en-gb" => Some(Self::English),
            _ => None,
        }
    }

    /// Parse a language label, falling back to Vietnamese for unknown input.
    pub fn from_label_or_default(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_else(|| {
            tracing::warn!(label, "unknown language label, falling back to vietnamese");
            Self::default()
        })
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vietnamese => "vietnamese",
            Self::English => "english",
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vietnamese => "vi",
            Self::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of text available in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Localized {
    /// Vietnamese text.
    pub vi: String,
    /// English text.
    pub en: String,
}

impl Localized {
    /// Build a pair from Vietnamese and English text.
    pub fn new(vi: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            vi: vi.into(),
            en: en.into(),
        }
    }

    /// Select the text for `language`.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Vietnamese => &self.vi,
            Language::English => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_accepts_codes_and_names() {
        assert_eq!(Language::parse_label("VI"), Some(Language::Vietnamese));
        assert_eq!(Language::parse_label(" english "), Some(Language::English));
        assert_eq!(Language::parse_label("fr"), None);
    }

    #[test]
    fn unknown_label_falls_back_to_vietnamese() {
        assert_eq!(Language::from_label_or_default("klingon"), Language::Vietnamese);
    }

    #[test]
    fn localized_selects_language() {
        let text = Localized::new("Xin chào", "Hello");
        assert_eq!(text.get(Language::Vietnamese), "Xin chào");
        assert_eq!(text.get(Language::English), "Hello");
    }

    #[test]
    fn serde_uses_lowercase_labels() {
        assert_eq!(
            serde_json::to_string(&Language::English).unwrap(),
            "\"english\""
        );
    }
}
