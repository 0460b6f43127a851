//! # Compliance Axes and Results
//!
//! Each axis is scored independently as `met / applicable` and mapped to a
//! status through one threshold policy:
//!
//! ```text
//! score >= 0.90        compliant
//! 0.70 <= score < 0.90 partially_compliant
//! score < 0.70         non_compliant
//! ```

use std::fmt;

use pdoc_core::Score;
use serde::{Deserialize, Serialize};

/// Lower bound of the compliant band.
pub const COMPLIANT_THRESHOLD: f64 = 0.9;
/// Lower bound of the partially-compliant band.
pub const PARTIAL_THRESHOLD: f64 = 0.7;

/// One independent dimension of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceAxis {
    /// Baseline legal requirements.
    Regulatory,
    /// Security-agency expectations (safeguards, A05, breach response).
    Security,
    /// Text quality and language consistency.
    Language,
    /// Sector-specific obligations.
    Industry,
    /// Cultural adaptation present in the text.
    Cultural,
}

impl ComplianceAxis {
    /// All axes in reporting order.
    pub fn all() -> &'static [ComplianceAxis] {
        &[
            Self::Regulatory,
            Self::Security,
            Self::Language,
            Self::Industry,
            Self::Cultural,
        ]
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regulatory => "regulatory",
            Self::Security => "security",
            Self::Language => "language",
            Self::Industry => "industry",
            Self::Cultural => "cultural",
        }
    }
}

impl fmt::Display for ComplianceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold band of an axis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Score ≥ 0.9.
    Compliant,
    /// 0.7 ≤ score < 0.9.
    PartiallyCompliant,
    /// Score < 0.7.
    NonCompliant,
}

impl ComplianceStatus {
    /// Band for `score`.
    pub fn from_score(score: Score) -> Self {
        let value = score.value();
        if value >= COMPLIANT_THRESHOLD {
            Self::Compliant
        } else if value >= PARTIAL_THRESHOLD {
            Self::PartiallyCompliant
        } else {
            Self::NonCompliant
        }
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::PartiallyCompliant => "partially_compliant",
            Self::NonCompliant => "non_compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Requirement identifier.
    pub id: String,
    /// Human-readable requirement.
    pub label: String,
    /// Whether the content satisfies it.
    pub met: bool,
    /// Whether a miss is critical.
    pub mandatory: bool,
}

/// Result of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// The axis.
    pub axis: ComplianceAxis,
    /// Coverage score, rounded to two decimals.
    pub score: Score,
    /// Threshold band of `score`.
    pub status: ComplianceStatus,
    /// Ids of satisfied requirements.
    pub requirements_met: Vec<String>,
    /// Ids of unsatisfied requirements.
    pub requirements_missing: Vec<String>,
    /// One recommendation per missing requirement.
    pub recommendations: Vec<String>,
}

impl ComplianceResult {
    /// Score the checks of one axis. No applicable checks scores `1.0`.
    pub fn from_checks(axis: ComplianceAxis, checks: &[Check]) -> Self {
        let met = checks.iter().filter(|c| c.met).count();
        let score = Score::ratio(met, checks.len(), Score::ONE).rounded();
        let (met_checks, missing_checks): (Vec<&Check>, Vec<&Check>) =
            checks.iter().partition(|c| c.met);
        Self {
            axis,
            score,
            status: ComplianceStatus::from_score(score),
            requirements_met: met_checks.iter().map(|c| c.id.clone()).collect(),
            requirements_missing: missing_checks.iter().map(|c| c.id.clone()).collect(),
            recommendations: missing_checks
                .iter()
                .map(|c| format!("Address {}: {}", c.id, c.label))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(id: &str, met: bool) -> Check {
        Check {
            id: id.to_string(),
            label: format!("label {id}"),
            met,
            mandatory: true,
        }
    }

    #[test]
    fn threshold_bands() {
        assert_eq!(ComplianceStatus::from_score(Score::ONE), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::from_score(Score::new(0.9)), ComplianceStatus::Compliant);
        assert_eq!(
            ComplianceStatus::from_score(Score::new(0.89)),
            ComplianceStatus::PartiallyCompliant
        );
        assert_eq!(
            ComplianceStatus::from_score(Score::new(0.7)),
            ComplianceStatus::PartiallyCompliant
        );
        assert_eq!(
            ComplianceStatus::from_score(Score::new(0.69)),
            ComplianceStatus::NonCompliant
        );
    }

    #[test]
    fn result_partitions_checks() {
        let r = ComplianceResult::from_checks(
            ComplianceAxis::Regulatory,
            &[check("a", true), check("b", false), check("c", true)],
        );
        assert_eq!(r.score, Score::new(0.67));
        assert_eq!(r.status, ComplianceStatus::NonCompliant);
        assert_eq!(r.requirements_met, ["a", "c"]);
        assert_eq!(r.requirements_missing, ["b"]);
        assert_eq!(r.recommendations.len(), 1);
    }

    #[test]
    fn no_checks_is_fully_compliant() {
        let r = ComplianceResult::from_checks(ComplianceAxis::Industry, &[]);
        assert_eq!(r.score, Score::ONE);
        assert_eq!(r.status, ComplianceStatus::Compliant);
    }

    #[test]
    fn axis_labels() {
        assert_eq!(ComplianceAxis::all().len(), 5);
        assert_eq!(
            serde_json::to_string(&ComplianceStatus::PartiallyCompliant).unwrap(),
            "\"partially_compliant\""
        );
    }
}
