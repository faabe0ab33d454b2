//! Investigation case state on a transaction: status selector plus append-only notes.
//!
//! Any status is reachable from any other; only the value is validated.

mod book;

pub use book::CaseBook;

use crate::error::{Error, Result};
use crate::transaction::Transaction;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum CaseStatus {
    #[default]
    Open,
    Pending,
    Closed,
}

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Open => "OPEN",
            CaseStatus::Pending => "PENDING",
            CaseStatus::Closed => "CLOSED",
        }
    }

    /// Investigator-facing label
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::Pending => "Investigating",
            CaseStatus::Closed => "Cleared",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(CaseStatus::Open),
            "PENDING" | "INVESTIGATING" => Ok(CaseStatus::Pending),
            "CLOSED" | "CLEARED" => Ok(CaseStatus::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for CaseStatus {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Validate and apply a new status. On error the transaction is untouched.
pub fn set_status(tx: &mut Transaction, status: &str) -> Result<CaseStatus> {
    let status: CaseStatus = status.parse()?;
    apply_status(tx, status);
    Ok(status)
}

pub(crate) fn apply_status(tx: &mut Transaction, status: CaseStatus) {
    tx.case_status = status;
    tx.last_updated = Some(Utc::now());
}

/// Append `text` unless it is blank. Returns whether a note was added.
pub fn append_note(tx: &mut Transaction, text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    tx.case_notes.push(text.to_string());
    tx.last_updated = Some(Utc::now());
    true
}
