#![deny(missing_docs)]

//! # pdoc-core — Foundational Types for the PDPL Document Generator
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies.
//!
//! ## Design Principles
//!
//! 1. **Closed enumerations with documented defaults.** Every profile field
//!    that has a closed value set is an enum. Unknown labels resolve to an
//!    explicit default at the input boundary and are recorded on the profile,
//!    so nothing downstream ever sees an undefined value.
//!
//! 2. **[`Score`] is the only score type.** Construction clamps to `[0, 1]`
//!    (NaN becomes `0`), so no score field can leave the unit interval.
//!
//! 3. **Single [`DocumentType`] enum.** Twelve variants, exhaustive `match`
//!    everywhere. Adding a document kind forces every consumer to handle it.
//!
//! 4. **[`PdocError`] hierarchy.** Structured errors with `thiserror`; no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod culture;
pub mod digest;
pub mod document;
pub mod document_type;
pub mod error;
pub mod identity;
pub mod language;
pub mod profile;
pub mod score;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use culture::{CulturalAdaptation, Formality, LanguageComplexity, RegionalAdaptation};
pub use digest::{sha256_digest, ContentDigest};
pub use document::{DocumentContent, DocumentMetadata, DocumentSection, SectionType};
pub use document_type::{DocumentType, OutputFormat};
pub use error::{PdocError, ProfileError};
pub use identity::{DocumentId, RequestId};
pub use language::{Language, Localized};
pub use profile::{
    BusinessProfile, BusinessSize, CommunicationStyle, DataVolume, ProfileInput, Region,
    PROFILE_TOKENS,
};
pub use score::Score;
pub use temporal::Timestamp;
