//! retail-risk entrypoint: loads the transaction set, recomputes aggregates and writes the
//! ranked employee/customer views plus flagged relationships as ndjson to stdout.
//! Runs once, or re-reads the source every `report.refresh_interval_secs`.

use retail_risk::{
    aggregate,
    config::EngineConfig,
    logging::{AnomalyLogEvent, StructuredLogger},
    source,
    view::{self, BandSummary, DashboardStats},
};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::info;

#[derive(Serialize)]
struct ReportLine<'a, T: Serialize> {
    section: &'a str,
    #[serde(flatten)]
    body: T,
}

fn run_one_cycle(config: &EngineConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let transactions = source::load_transactions(&config.data_path)?;
    info!(count = transactions.len(), "loaded transactions");

    let stats = DashboardStats::compute(&transactions);
    info!(
        transactions = stats.transactions,
        fraud = stats.fraud,
        scored = stats.scored,
        avg_risk = stats.avg_risk,
        high = stats.distribution.high,
        medium = stats.distribution.medium,
        low = stats.distribution.low,
        "dashboard"
    );

    let aggregates = aggregate(&transactions);
    let options = config.report.view_options();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (section, summaries) in [("employees", &aggregates.employees), ("customers", &aggregates.customers)] {
        let bands = BandSummary::of(summaries.values());
        StructuredLogger::emit_json(&ReportLine { section, body: bands }, &mut out)?;
        for entity in view::view(summaries.values(), &options) {
            StructuredLogger::emit_json(&ReportLine { section, body: entity }, &mut out)?;
        }
    }

    let mut flagged = 0usize;
    for (entity, edge) in aggregates.anomalies() {
        flagged += 1;
        let event = AnomalyLogEvent::new(entity, edge);
        StructuredLogger::emit_json(&ReportLine { section: "anomaly", body: event }, &mut out)?;
    }
    out.flush()?;
    if flagged > 0 {
        info!(flagged, "anomalous relationships");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("RETAIL_RISK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(data_path = ?config.data_path, "retail-risk starting");

    let interval_secs = config.report.refresh_interval_secs;

    if interval_secs > 0 {
        info!(interval_secs, "refresh mode (Ctrl+C to stop)");
        static STOP: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        let _ = ctrlc::set_handler(|| {
            STOP.store(true, std::sync::atomic::Ordering::Relaxed);
        });
        let mut cycle: u64 = 0;
        while !STOP.load(std::sync::atomic::Ordering::Relaxed) {
            cycle += 1;
            if let Err(e) = run_one_cycle(&config) {
                tracing::warn!(cycle, error = %e, "cycle failed");
            }
            for _ in 0..interval_secs {
                if STOP.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
            }
        }
        info!("retail-risk stopping");
    } else {
        run_one_cycle(&config)?;
        info!("retail-risk report complete");
    }

    Ok(())
}
