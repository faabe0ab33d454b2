use crate::aggregate::EntitySummary;
use crate::risk::{classify, RiskLevel};
use crate::transaction::Transaction;
use serde::Serialize;

/// Counts per risk band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl BandSummary {
    fn add(&mut self, score: f64) {
        self.total += 1;
        match classify(score) {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    /// Entities bucketed by their average risk.
    pub fn of<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a EntitySummary>,
    {
        let mut out = Self::default();
        for s in summaries {
            out.add(s.avg_risk);
        }
        out
    }
}

/// Transaction-level overview. Unscored transactions count toward totals only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub transactions: usize,
    pub fraud: usize,
    pub non_fraud: usize,
    pub scored: usize,
    pub avg_risk: f64,
    pub distribution: BandSummary,
}

impl DashboardStats {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut stats = Self {
            transactions: transactions.len(),
            ..Self::default()
        };
        let mut risk_sum = 0.0;
        for tx in transactions {
            if tx.is_fraud {
                stats.fraud += 1;
            }
            if let Some(score) = tx.risk_score {
                risk_sum += score;
                stats.distribution.add(score);
            }
        }
        stats.non_fraud = stats.transactions - stats.fraud;
        stats.scored = stats.distribution.total;
        if stats.scored > 0 {
            stats.avg_risk = risk_sum / stats.scored as f64;
        }
        stats
    }
}
