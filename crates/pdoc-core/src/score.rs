//! # Bounded Scores
//!
//! Every score in the system (personalization, confidence, compliance axes,
//! generation quality) is a [`Score`]: an `f64` that is clamped to `[0, 1]`
//! on construction and on deserialization. NaN collapses to `0`.

use serde::{Deserialize, Serialize};

/// A score in the closed unit interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// The lowest possible score.
    pub const ZERO: Score = Score(0.0);
    /// The highest possible score.
    pub const ONE: Score = Score(1.0);

    /// Create a score, clamping into `[0, 1]`. NaN becomes `0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Round to two decimal places, the precision used for every reported score.
    pub fn rounded(self) -> Self {
        Self::new((self.0 * 100.0).round() / 100.0)
    }

    /// `met / total` as a score. An empty denominator yields `when_empty`.
    pub fn ratio(met: usize, total: usize, when_empty: Score) -> Self {
        if total == 0 {
            return when_empty;
        }
        Self::new(met as f64 / total as f64)
    }

    /// Arithmetic mean of the given scores, `0` for an empty input.
    pub fn mean<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = Score>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0_f64, 0_usize), |(s, n), x| (s + x.0, n + 1));
        if count == 0 {
            return Self::ZERO;
        }
        Self::new(sum / count as f64)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
