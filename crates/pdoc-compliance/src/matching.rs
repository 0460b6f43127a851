//! Text matching shared by the validator and the scorer.
//!
//! All matching is case-insensitive: callers lowercase the document text
//! once and pass it in; keywords are lowercased here.

use pdoc_core::{DocumentContent, PROFILE_TOKENS};
use pdoc_rules::LegalRequirement;

/// Lowercase Vietnamese letters that never occur in English text.
const VIETNAMESE_LETTERS: &str = "ăâđêôơưàáảãạằắẳẵặầấẩẫậèéẻẽẹềếểễệìíỉĩịòóỏõọồốổỗộờớởỡợùúủũụừứửữựỳýỷỹỵ";

/// Minimum share of Vietnamese-specific letters in Vietnamese text.
const MIN_VIETNAMESE_SHARE: f64 = 0.05;
/// Minimum share of ASCII letters in English text.
const MIN_ASCII_SHARE: f64 = 0.9;

/// Whether `text_lower` contains any of `keywords`.
pub fn contains_any(text_lower: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && text_lower.contains(&kw.to_lowercase()))
}

/// A legal requirement is met when a section cites it or the text contains
/// one of its keywords.
pub fn requirement_met(content: &DocumentContent, text_lower: &str, req: &LegalRequirement) -> bool {
    content.cites(&req.citation) || contains_any(text_lower, &req.keywords)
}

/// Whether `text` still contains an unresolved business token such as
/// `{company}`.
///
/// Occurrences of `verbatim` (the profile values written into the text) are
/// ignored first, so braces that belong to a company name never count.
/// Braced text outside [`PROFILE_TOKENS`] is not a placeholder.
pub fn has_placeholder(text: &str, verbatim: &[&str]) -> bool {
    let mut text = text.to_string();
    for value in verbatim.iter().filter(|v| v.contains('{')) {
        text = text.replace(value, " ");
    }
    PROFILE_TOKENS
        .iter()
        .any(|name| text.contains(&format!("{{{name}}}")))
}

/// Share of alphabetic characters that are Vietnamese-specific letters.
pub fn vietnamese_share(text: &str) -> f64 {
    let (mut letters, mut vietnamese) = (0usize, 0usize);
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        letters += 1;
        if c.to_lowercase().any(|l| VIETNAMESE_LETTERS.contains(l)) {
            vietnamese += 1;
        }
    }
    if letters == 0 {
        return 0.0;
    }
    vietnamese as f64 / letters as f64
}

/// Share of alphabetic characters that are ASCII.
pub fn ascii_share(text: &str) -> f64 {
    let (mut letters, mut ascii) = (0usize, 0usize);
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        letters += 1;
        if c.is_ascii() {
            ascii += 1;
        }
    }
    if letters == 0 {
        return 0.0;
    }
    ascii as f64 / letters as f64
}

/// Whether `text` reads as the expected language.
pub fn is_language_consistent(text: &str, language: pdoc_core::Language) -> bool {
    match language {
        pdoc_core::Language::Vietnamese => vietnamese_share(text) >= MIN_VIETNAMESE_SHARE,
        pdoc_core::Language::English => ascii_share(text) >= MIN_ASCII_SHARE,
    }
}
