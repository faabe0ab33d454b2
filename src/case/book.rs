//! Live transaction set with per-transaction locking for case updates.

use super::{append_note, apply_status, CaseStatus};
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use parking_lot::{Mutex, RwLock};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Updates to the same id are serialized; different ids never contend past the index lookup.
#[derive(Default)]
pub struct CaseBook {
    cases: RwLock<HashMap<u64, Arc<Mutex<Transaction>>>>,
}

impl CaseBook {
    pub fn new(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let cases = transactions
            .into_iter()
            .map(|tx| (tx.id, Arc::new(Mutex::new(tx))))
            .collect();
        Self {
            cases: RwLock::new(cases),
        }
    }

    /// Insert a transaction. An existing id keeps its lock; only the contents are replaced.
    pub fn insert(&self, tx: Transaction) {
        match self.cases.write().entry(tx.id) {
            Entry::Occupied(existing) => *existing.get().lock() = tx,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(tx)));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cases.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: u64) -> Result<Arc<Mutex<Transaction>>> {
        self.cases
            .read()
            .get(&id)
            .cloned()
            .ok_or(Error::TransactionNotFound(id))
    }

    pub fn get(&self, id: u64) -> Option<Transaction> {
        self.entry(id).ok().map(|tx| tx.lock().clone())
    }

    /// Clone of every transaction, ascending id.
    pub fn snapshot(&self) -> Vec<Transaction> {
        let handles: Vec<Arc<Mutex<Transaction>>> = self.cases.read().values().cloned().collect();
        let mut out: Vec<Transaction> = handles.iter().map(|tx| tx.lock().clone()).collect();
        out.sort_by_key(|tx| tx.id);
        out
    }

    pub fn set_status(&self, id: u64, status: &str) -> Result<Transaction> {
        self.update_case(id, Some(status), None)
    }

    pub fn append_note(&self, id: u64, text: &str) -> Result<Transaction> {
        self.update_case(id, None, Some(text))
    }

    /// Status and note applied in one critical section. The status is validated before
    /// anything changes, so a rejected status leaves the note unapplied too.
    pub fn update_case(&self, id: u64, status: Option<&str>, note: Option<&str>) -> Result<Transaction> {
        let handle = self.entry(id)?;
        let status = match status.map(str::parse::<CaseStatus>).transpose() {
            Ok(s) => s,
            Err(e) => {
                warn!(transaction_id = id, error = %e, "case update rejected");
                return Err(e);
            }
        };

        let mut tx = handle.lock();
        if let Some(status) = status {
            apply_status(&mut tx, status);
        }
        let noted = note.is_some_and(|text| append_note(&mut tx, text));
        info!(
            transaction_id = id,
            status = %tx.case_status,
            notes = tx.case_notes.len(),
            noted,
            "case updated"
        );
        Ok(tx.clone())
    }
}
