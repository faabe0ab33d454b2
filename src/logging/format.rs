//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.

use crate::aggregate::{EntityKind, EntitySummary, RelationshipEdge};
use crate::anomaly::AnomalyLabel;
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// One flagged relationship edge, as written to the report stream.
#[derive(Debug, Serialize)]
pub struct AnomalyLogEvent<'a> {
    pub ts: String,
    pub entity_kind: EntityKind,
    pub entity_id: u64,
    pub entity_name: &'a str,
    pub entity_avg_risk: f64,
    pub counterparty_id: u64,
    pub counterparty_name: &'a str,
    pub count: u32,
    pub avg_risk: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<AnomalyLabel>,
}

impl<'a> AnomalyLogEvent<'a> {
    pub fn new(entity: &'a EntitySummary, edge: &'a RelationshipEdge) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            entity_kind: entity.kind,
            entity_id: entity.id,
            entity_name: &entity.name,
            entity_avg_risk: entity.avg_risk,
            counterparty_id: edge.id,
            counterparty_name: &edge.name,
            count: edge.count,
            avg_risk: edge.avg_risk,
            anomaly: edge.anomaly,
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber: log lines to stderr (JSON when `json`), level from RUST_LOG or default.
    /// Stdout stays reserved for report lines.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Emit a single report line without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}
