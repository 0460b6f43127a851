//! # Cultural Adaptation Engine
//!
//! Two-level lookup: region, then communication style. Only some pairs have
//! an explicit record; every other pair resolves to the neutral fallback
//! record of the rule tables, so the same profile always yields the same
//! adaptation.

use std::sync::Arc;

use pdoc_core::{BusinessProfile, CommunicationStyle, CulturalAdaptation, Language, Region};
use pdoc_rules::RuleTables;

/// Stateless cultural-adaptation resolver over shared rule tables.
#[derive(Debug, Clone)]
pub struct CulturalAdaptationEngine {
    tables: Arc<RuleTables>,
}

impl CulturalAdaptationEngine {
    /// Create an engine over `tables`.
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// Resolve the cultural adaptation for `profile` in `language`. Total.
    pub fn adapt(&self, profile: &BusinessProfile, language: Language) -> CulturalAdaptation {
        let lookup = self
            .tables
            .cultural_record(profile.regional_location, profile.communication_style);
        if lookup.is_default {
            tracing::debug!(
                region = %profile.regional_location,
                style = %profile.communication_style,
                "no explicit cultural record, using neutral fallback"
            );
        }
        lookup.value.resolve(language)
    }

    /// Whether an explicit record exists for the pair.
    pub fn has_explicit_record(&self, region: Region, style: CommunicationStyle) -> bool {
        !self.tables.cultural_record(region, style).is_default
    }
}
