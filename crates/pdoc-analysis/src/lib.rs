//! # pdoc-analysis — Profile Analysis and Cultural Adaptation
//!
//! The two stages that consume only the business profile and run
//! independently of each other:
//!
//! - [`BusinessProfileAnalyzer`]: resolves the industry entry, complexity
//!   level, cultural style, applicable legal requirements and section
//!   recommendations for one document type, and derives a personalization
//!   score and a confidence from the number of fallbacks it needed.
//! - [`CulturalAdaptationEngine`]: resolves the greeting, closing, signature,
//!   formality and regional phrasing for a profile in one language.
//!
//! Both are stateless services over a shared, immutable
//! [`RuleTables`](pdoc_rules::RuleTables). Neither can fail on a validated
//! [`BusinessProfile`](pdoc_core::BusinessProfile).

pub mod analyzer;
pub mod cultural;

pub use analyzer::{AnalysisFallback, BusinessAnalysis, BusinessProfileAnalyzer};
pub use cultural::CulturalAdaptationEngine;
