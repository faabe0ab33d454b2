//! Maps a 0-100 risk score onto a three-level category using fixed thresholds.

use serde::{Deserialize, Serialize};

/// Scores at or above this are high risk
pub const HIGH_THRESHOLD: f64 = 75.0;
/// Scores at or above this (and below high) are medium risk
pub const MEDIUM_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Out-of-range scores are not rejected; thresholds apply as-is.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

pub fn classify(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}

/// Band selector for filtering; `All` keeps everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl RiskBand {
    pub fn contains(self, score: f64) -> bool {
        match self {
            RiskBand::All => true,
            RiskBand::High => classify(score) == RiskLevel::High,
            RiskBand::Medium => classify(score) == RiskLevel::Medium,
            RiskBand::Low => classify(score) == RiskLevel::Low,
        }
    }
}
