//! Retail risk analytics — employee/customer relationship aggregation over transaction records.
//!
//! Modular structure:
//! - [`transaction`] — Transaction records and list queries
//! - [`risk`] — Fixed-threshold risk classification
//! - [`aggregate`] — Single-pass Employee↔Customer relationship aggregation
//! - [`anomaly`] — Rule-based anomaly labels for relationship edges
//! - [`view`] — Ranked / filtered projections and band summaries
//! - [`case`] — Case status and note lifecycle
//! - [`source`] — JSON transaction loader
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod transaction;
pub mod risk;
pub mod aggregate;
pub mod anomaly;
pub mod view;
pub mod case;
pub mod source;
pub mod logging;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use transaction::{Customer, Employee, Transaction, TransactionQuery, TransactionType};
pub use risk::{classify, RiskBand, RiskLevel};
pub use aggregate::{aggregate, Aggregates, EntityKind, EntitySummary, RelationshipEdge};
pub use anomaly::AnomalyLabel;
pub use view::{BandSummary, DashboardStats, ViewOptions};
pub use case::{CaseBook, CaseStatus};
pub use logging::StructuredLogger;
