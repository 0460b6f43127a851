//! # Generation Timestamps
//!
//! [`Timestamp`] stamps document metadata, generation results and status
//! transitions. It is always UTC with whole seconds, so it serializes as
//! `YYYY-MM-DDTHH:MM:SSZ`. Legal text shows the calendar date in the
//! document language through [`Timestamp::date_label`].

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PdocError;
use crate::language::Language;

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// UTC instant with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(0))
    }

    /// Parse an RFC 3339 instant in `Z` form. Explicit offsets, including
    /// `+00:00`, are rejected; fractional seconds are dropped.
    pub fn parse(value: &str) -> Result<Self, PdocError> {
        let invalid = |reason: String| PdocError::InvalidTimestamp {
            value: value.to_string(),
            reason,
        };
        if !value.ends_with('Z') {
            return Err(invalid("expected a UTC instant ending in Z".to_string()));
        }
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc).trunc_subsecs(0)))
            .map_err(|e| invalid(e.to_string()))
    }

    /// Calendar date as written in legal text: `ngày 05 tháng 03 năm 2026`
    /// or `5 March 2026`.
    pub fn date_label(&self, language: Language) -> String {
        let date = self.0.date_naive();
        match language {
            Language::Vietnamese => format!(
                "ngày {:02} tháng {:02} năm {}",
                date.day(),
                date.month(),
                date.year()
            ),
            Language::English => format!(
                "{} {} {}",
                date.day(),
                ENGLISH_MONTHS[date.month0() as usize],
                date.year()
            ),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
