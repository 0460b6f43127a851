//! # pdoc-synthesis — Templates and Content Synthesis
//!
//! - [`TemplateCatalog`] resolves a document type and an industry to an
//!   ordered [`Template`]. It never fails: without an industry-specific
//!   variant it builds a generic skeleton from the rule tables.
//! - [`ContentSynthesizer`] composes the sections of a template from the
//!   bilingual [`patterns`], substituting business tokens. It is pure with
//!   respect to section text; only the metadata timestamps read the clock.
//! - [`GenerationOptions`] is the closed set of caller options.

pub mod catalog;
pub mod options;
pub mod patterns;
pub mod synthesizer;

pub use catalog::{Template, TemplateCatalog};
pub use options::{CulturalOverrides, GenerationOptions, LegalComplexity};
pub use synthesizer::ContentSynthesizer;
