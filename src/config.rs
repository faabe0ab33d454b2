//! Engine configuration. Risk and anomaly thresholds are fixed and not configurable.

use crate::risk::RiskBand;
use crate::view::ViewOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// JSON array of transactions
    pub data_path: PathBuf,
    /// Default view and refresh cadence
    pub report: ReportConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Length of the top-risk projection
    pub top_n: usize,
    pub band: RiskBand,
    pub name_filter: Option<String>,
    pub counterparty_filter: Option<String>,
    /// 0 runs once; otherwise recompute from the source every interval
    pub refresh_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("transactions.json"),
            report: ReportConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            band: RiskBand::All,
            name_filter: None,
            counterparty_filter: None,
            refresh_interval_secs: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ReportConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            name: self.name_filter.clone(),
            band: self.band,
            counterparty: self.counterparty_filter.clone(),
            limit: Some(self.top_n),
        }
    }
}

impl EngineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<EngineConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
