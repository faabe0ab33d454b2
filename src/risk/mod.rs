//! Risk classification.

mod classifier;

pub use classifier::{classify, RiskBand, RiskLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
