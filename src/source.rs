//! Transaction source: a materialized JSON array of transactions, fetched wholesale.

use crate::error::Result;
use crate::transaction::Transaction;
use std::path::Path;
use tracing::debug;

pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let data = std::fs::read_to_string(path)?;
    let transactions = parse_transactions(&data)?;
    debug!(path = %path.display(), count = transactions.len(), "loaded transactions");
    Ok(transactions)
}
