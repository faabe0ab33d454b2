//! Rule-based anomaly labels for relationship edges. One rule set serves both the
//! employee and the customer perspective.

use crate::aggregate::{EntitySummary, RelationshipEdge};
use crate::risk::HIGH_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge average must exceed the entity average by at least this much
pub const SPIKE_MARGIN: f64 = 20.0;
pub const REPEAT_MIN_COUNT: u32 = 5;
pub const REPEAT_MIN_RISK: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyLabel {
    #[serde(rename = "Dual High Risk")]
    DualHighRisk,
    #[serde(rename = "Risk Spike vs Entity")]
    RiskSpike,
    #[serde(rename = "Repeated High-Risk Exposure")]
    RepeatedHighRiskExposure,
}

impl AnomalyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            AnomalyLabel::DualHighRisk => "Dual High Risk",
            AnomalyLabel::RiskSpike => "Risk Spike vs Entity",
            AnomalyLabel::RepeatedHighRiskExposure => "Repeated High-Risk Exposure",
        }
    }
}

impl fmt::Display for AnomalyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching rule wins.
pub fn detect(entity_avg_risk: f64, edge: &RelationshipEdge) -> Option<AnomalyLabel> {
    if entity_avg_risk >= HIGH_THRESHOLD && edge.avg_risk >= HIGH_THRESHOLD {
        Some(AnomalyLabel::DualHighRisk)
    } else if edge.avg_risk >= entity_avg_risk + SPIKE_MARGIN {
        Some(AnomalyLabel::RiskSpike)
    } else if edge.count >= REPEAT_MIN_COUNT && edge.avg_risk >= REPEAT_MIN_RISK {
        Some(AnomalyLabel::RepeatedHighRiskExposure)
    } else {
        None
    }
}

/// Relabel every edge of `summary`; previous labels are overwritten, never accumulated.
pub fn annotate(summary: &mut EntitySummary) {
    let entity_avg = summary.avg_risk;
    for edge in &mut summary.counterparties {
        edge.anomaly = detect(entity_avg, edge);
    }
}
