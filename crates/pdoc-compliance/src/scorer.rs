//! # Personalization Scorer
//!
//! Measures how well a synthesized document reflects the business it was
//! written for. The score is the rounded mean of four components:
//!
//! | Component | Value |
//! |-----------|-------|
//! | analysis | the analyzer's personalization score |
//! | sections | share of recommended sections present, or of sections naming the company |
//! | cultural | share of greeting, closing and signature found in the text |
//! | legal | share of the analysis's legal requirements met by the text |
//!
//! Deterministic: the same content and analysis always give the same score.

use pdoc_analysis::BusinessAnalysis;
use pdoc_core::{DocumentContent, Score};
use serde::{Deserialize, Serialize};

use crate::matching::requirement_met;

/// The four components of a personalization score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationBreakdown {
    /// Analyzer personalization.
    pub analysis: Score,
    /// Section coverage.
    pub sections: Score,
    /// Cultural phrase coverage.
    pub cultural: Score,
    /// Legal requirement coverage.
    pub legal: Score,
}

impl PersonalizationBreakdown {
    /// Rounded mean of the components.
    pub fn total(&self) -> Score {
        Score::mean([self.analysis, self.sections, self.cultural, self.legal]).rounded()
    }
}

/// Stateless personalization scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalizationScorer;

impl PersonalizationScorer {
    /// Create a scorer.
    pub fn new() -> Self {
        Self
    }

    /// The personalization score of `content`.
    pub fn score(&self, content: &DocumentContent, analysis: &BusinessAnalysis) -> Score {
        self.breakdown(content, analysis).total()
    }

    /// Per-component scores.
    pub fn breakdown(
        &self,
        content: &DocumentContent,
        analysis: &BusinessAnalysis,
    ) -> PersonalizationBreakdown {
        let text_lower = content.full_text().to_lowercase();

        let sections = if analysis.section_recommendations.is_empty() {
            let company = content.metadata.company_name.to_lowercase();
            let naming = content
                .sections
                .iter()
                .filter(|s| {
                    !company.is_empty()
                        && (s.title.to_lowercase().contains(&company)
                            || s.content.to_lowercase().contains(&company))
                })
                .count();
            Score::ratio(naming, content.sections.len(), Score::ZERO)
        } else {
            let present = analysis
                .section_recommendations
                .keys()
                .filter(|id| content.section(id).is_some())
                .count();
            Score::ratio(present, analysis.section_recommendations.len(), Score::ZERO)
        };

        let adaptation = &content.cultural_adaptation;
        let phrases = [&adaptation.greeting, &adaptation.closing, &adaptation.signature];
        let found = phrases
            .iter()
            .filter(|p| {
                let p = p.trim().to_lowercase();
                !p.is_empty() && text_lower.contains(&p)
            })
            .count();
        let cultural = Score::ratio(found, phrases.len(), Score::ZERO);

        let met = analysis
            .legal_requirements
            .iter()
            .filter(|req| requirement_met(content, &text_lower, req))
            .count();
        let legal = Score::ratio(met, analysis.legal_requirements.len(), Score::ONE);

        PersonalizationBreakdown {
            analysis: analysis.personalization_score,
            sections,
            cultural,
            legal,
        }
    }
}
