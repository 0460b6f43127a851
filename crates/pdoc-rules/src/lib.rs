#![deny(missing_docs)]

//! # pdoc-rules — Reference Tables for Document Generation
//!
//! Immutable, read-only reference data: the industry-requirement map, the
//! business-size × volume complexity matrix, the region × communication-style
//! cultural matrices, the baseline legal requirements, the security-agency
//! checks and the minimal section set of every document type.
//!
//! [`RuleTables`] has no behavior beyond lookup-with-default. Every lookup
//! reports whether it hit the table or fell back, so callers can account for
//! the fallback without the tables ever failing.
//!
//! The built-in tables ([`RuleTables::builtin`]) encode the Vietnamese PDPL
//! framework. A complete replacement set can be loaded from YAML with
//! [`RuleTables::from_yaml_path`].

pub mod builtin;
pub mod error;
pub mod tables;

pub use builtin::{cultural_fallback, DECREE_13, PDPL_2025};
pub use error::RulesError;
pub use tables::{
    ComplexityLevel, CulturalRecord, IndustryEntry, IndustryMatch, IndustryRequirement,
    LegalRequirement, Lookup, RegionalRecord, RuleTables, SecurityCheck, GENERIC_INDUSTRY,
};
