//! Relationship aggregation: folds a transaction set into Employee→Customers and
//! Customer→Employees summaries in a single pass, then annotates anomalies.
//!
//! Aggregates are recomputed per call and hold no reference back into the transactions.

mod summary;

pub use summary::{running_mean, EntityKind, EntitySummary, RelationshipEdge};

use crate::anomaly;
use crate::transaction::Transaction;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Both directional views produced by one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub employees: BTreeMap<u64, EntitySummary>,
    pub customers: BTreeMap<u64, EntitySummary>,
}

impl Aggregates {
    pub fn employee(&self, id: u64) -> Option<&EntitySummary> {
        self.employees.get(&id)
    }

    pub fn customer(&self, id: u64) -> Option<&EntitySummary> {
        self.customers.get(&id)
    }

    /// Every annotated edge from both perspectives, employees first, ascending entity id.
    pub fn anomalies(&self) -> impl Iterator<Item = (&EntitySummary, &RelationshipEdge)> {
        self.employees
            .values()
            .chain(self.customers.values())
            .flat_map(|s| s.counterparties.iter().map(move |e| (s, e)))
            .filter(|(_, e)| e.anomaly.is_some())
    }
}

/// Aggregate the full transaction set. Non-qualifying transactions are skipped silently.
pub fn aggregate(transactions: &[Transaction]) -> Aggregates {
    let mut employees: BTreeMap<u64, EntitySummary> = BTreeMap::new();
    let mut customers: BTreeMap<u64, EntitySummary> = BTreeMap::new();
    let mut skipped = 0usize;

    for tx in transactions {
        let Some(q) = tx.qualifying() else {
            skipped += 1;
            continue;
        };
        let employee_name = q.employee.display_name();

        let employee = employees
            .entry(q.employee.id)
            .or_insert_with(|| EntitySummary::new(EntityKind::Employee, q.employee.id, employee_name.clone()));
        employee.record(q.customer.id, &q.customer.name, q.risk_score);
        employee.fraud_seen |= q.is_fraud;

        let customer = customers
            .entry(q.customer.id)
            .or_insert_with(|| EntitySummary::new(EntityKind::Customer, q.customer.id, q.customer.name.clone()));
        customer.record(q.employee.id, &employee_name, q.risk_score);
        customer.fraud_seen |= q.is_fraud;
    }

    // Entity averages are final only once the pass is complete.
    for summary in employees.values_mut().chain(customers.values_mut()) {
        anomaly::annotate(summary);
    }

    debug!(
        total = transactions.len(),
        skipped,
        employees = employees.len(),
        customers = customers.len(),
        "aggregated transactions"
    );

    Aggregates { employees, customers }
}
