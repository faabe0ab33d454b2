//! Ranked and filtered projections over aggregated summaries.
//!
//! Every function here only borrows: the summaries are never modified, and calling the
//! same projection again on unchanged input yields the same sequence.

mod summary;

pub use summary::{BandSummary, DashboardStats};

use crate::aggregate::{EntityKind, EntitySummary, RelationshipEdge};
use crate::risk::{RiskBand, RiskLevel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Descending average risk, ascending id on ties.
fn by_risk_then_id(a: &EntitySummary, b: &EntitySummary) -> Ordering {
    b.avg_risk
        .total_cmp(&a.avg_risk)
        .then_with(|| a.id.cmp(&b.id))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn rank<'a, I>(summaries: I) -> Vec<&'a EntitySummary>
where
    I: IntoIterator<Item = &'a EntitySummary>,
{
    let mut out: Vec<&EntitySummary> = summaries.into_iter().collect();
    out.sort_by(|a, b| by_risk_then_id(a, b));
    out
}

/// Prefix of [`rank`], at most `n` long.
pub fn top_n<'a, I>(summaries: I, n: usize) -> Vec<&'a EntitySummary>
where
    I: IntoIterator<Item = &'a EntitySummary>,
{
    let mut ranked = rank(summaries);
    ranked.truncate(n);
    ranked
}

pub fn filter_by_name<'a, I>(summaries: I, substring: &str) -> Vec<&'a EntitySummary>
where
    I: IntoIterator<Item = &'a EntitySummary>,
{
    summaries
        .into_iter()
        .filter(|s| contains_ignore_case(&s.name, substring))
        .collect()
}

pub fn filter_by_risk_band<'a, I>(summaries: I, band: RiskBand) -> Vec<&'a EntitySummary>
where
    I: IntoIterator<Item = &'a EntitySummary>,
{
    summaries
        .into_iter()
        .filter(|s| band.contains(s.avg_risk))
        .collect()
}

/// Edges of one entity whose counterparty name matches, first-seen order kept.
pub fn filter_counterparties<'a>(edges: &'a [RelationshipEdge], substring: &str) -> Vec<&'a RelationshipEdge> {
    edges
        .iter()
        .filter(|e| contains_ignore_case(&e.name, substring))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub band: RiskBand,
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One ranked entity with its counterparty list narrowed by [`ViewOptions::counterparty`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView<'a> {
    #[serde(flatten)]
    pub header: EntityHeader<'a>,
    pub counterparties: Vec<&'a RelationshipEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityHeader<'a> {
    pub id: u64,
    pub kind: EntityKind,
    pub name: &'a str,
    pub total_transactions: u32,
    pub avg_risk: f64,
    pub level: RiskLevel,
    pub fraud_seen: bool,
}

impl<'a> From<&'a EntitySummary> for EntityHeader<'a> {
    fn from(s: &'a EntitySummary) -> Self {
        Self {
            id: s.id,
            kind: s.kind,
            name: &s.name,
            total_transactions: s.total_transactions,
            avg_risk: s.avg_risk,
            level: s.level(),
            fraud_seen: s.fraud_seen,
        }
    }
}

/// Name filter, then band filter, then ranking, then limit.
pub fn view<'a, I>(summaries: I, options: &ViewOptions) -> Vec<EntityView<'a>>
where
    I: IntoIterator<Item = &'a EntitySummary>,
{
    let named = filter_by_name(summaries, options.name.as_deref().unwrap_or(""));
    let banded = filter_by_risk_band(named, options.band);
    let mut ranked = rank(banded);
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    let counterparty = options.counterparty.as_deref().unwrap_or("");
    ranked
        .into_iter()
        .map(|s| EntityView {
            header: EntityHeader::from(s),
            counterparties: filter_counterparties(&s.counterparties, counterparty),
        })
        .collect()
}
