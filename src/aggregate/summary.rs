use crate::anomaly::AnomalyLabel;
use crate::risk::{classify, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Incremental mean update: `(avg * count + value) / (count + 1)`.
pub fn running_mean(avg: f64, count: u32, value: f64) -> f64 {
    (avg * f64::from(count) + value) / (f64::from(count) + 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Employee,
    Customer,
}

/// Aggregated relationship between one employee and one customer, seen from one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEdge {
    /// Counterparty id
    pub id: u64,
    pub name: String,
    pub count: u32,
    pub avg_risk: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<AnomalyLabel>,
}

impl RelationshipEdge {
    fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            count: 0,
            avg_risk: 0.0,
            anomaly: None,
        }
    }

    fn push(&mut self, score: f64) {
        self.avg_risk = running_mean(self.avg_risk, self.count, score);
        self.count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: u64,
    pub kind: EntityKind,
    pub name: String,
    pub total_transactions: u32,
    /// 0 while `total_transactions` is 0
    pub avg_risk: f64,
    /// At least one counted transaction was flagged as fraud
    pub fraud_seen: bool,
    /// Counterparties in first-seen order
    pub counterparties: Vec<RelationshipEdge>,
    #[serde(skip)]
    index: HashMap<u64, usize>,
}

impl EntitySummary {
    pub fn new(kind: EntityKind, id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            total_transactions: 0,
            avg_risk: 0.0,
            fraud_seen: false,
            counterparties: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Fold one qualifying score into the entity average and the counterparty's edge.
    pub fn record(&mut self, counterparty_id: u64, counterparty_name: &str, score: f64) {
        self.avg_risk = running_mean(self.avg_risk, self.total_transactions, score);
        self.total_transactions += 1;

        let slot = match self.index.get(&counterparty_id) {
            Some(&i) => i,
            None => {
                self.counterparties
                    .push(RelationshipEdge::new(counterparty_id, counterparty_name));
                let i = self.counterparties.len() - 1;
                self.index.insert(counterparty_id, i);
                i
            }
        };
        self.counterparties[slot].push(score);
    }

    pub fn edge(&self, counterparty_id: u64) -> Option<&RelationshipEdge> {
        self.index
            .get(&counterparty_id)
            .map(|&i| &self.counterparties[i])
    }

    pub fn level(&self) -> RiskLevel {
        classify(self.avg_risk)
    }
}
