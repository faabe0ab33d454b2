//! List filter over raw transactions (risk bounds, type, employee, customer).

use super::{Transaction, TransactionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    /// Everything not flagged as fraud
    Purchases,
    Fraud,
    Exact(TransactionType),
}

impl TypeFilter {
    fn matches(self, tx: &Transaction) -> bool {
        match self {
            TypeFilter::Purchases => !tx.is_fraud,
            TypeFilter::Fraud => tx.is_fraud,
            TypeFilter::Exact(kind) => tx.kind == kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub min_risk: Option<f64>,
    pub max_risk: Option<f64>,
    pub kind: Option<TypeFilter>,
    pub employee_id: Option<u64>,
    pub customer_id: Option<u64>,
}

impl TransactionQuery {
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.matches_risk(tx)
            && self.kind.map_or(true, |k| k.matches(tx))
            && self
                .employee_id
                .map_or(true, |id| tx.employee.as_ref().is_some_and(|e| e.id == id))
            && self
                .customer_id
                .map_or(true, |id| tx.customer.as_ref().is_some_and(|c| c.id == id))
    }

    // Bounds are inclusive; an unscored transaction fails any bound.
    fn matches_risk(&self, tx: &Transaction) -> bool {
        if self.min_risk.is_none() && self.max_risk.is_none() {
            return true;
        }
        let Some(score) = tx.risk_score else {
            return false;
        };
        self.min_risk.map_or(true, |min| score >= min) && self.max_risk.map_or(true, |max| score <= max)
    }

    /// Matching transactions in input order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}
