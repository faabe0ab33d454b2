//! Transaction records as delivered by the data-fetch layer, plus the qualifying predicate
//! used by aggregation.

mod query;

pub use query::{TransactionQuery, TypeFilter};

use crate::case::CaseStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItem {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrink_risk: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(alias = "purchase")]
    Purchase,
    #[serde(alias = "refund")]
    Refund,
    #[serde(alias = "exchange")]
    Exchange,
    #[serde(alias = "void")]
    Void,
    #[serde(rename = "No Sale", alias = "No-Sale", alias = "no_sale")]
    NoSale,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Purchase => "Purchase",
            TransactionType::Refund => "Refund",
            TransactionType::Exchange => "Exchange",
            TransactionType::Void => "Void",
            TransactionType::NoSale => "No Sale",
            TransactionType::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub customer: Option<Customer>,
    pub total_amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TransactionType,
    #[serde(default)]
    pub is_fraud: bool,
    /// Model score in [0, 100]; `None` means no signal, never zero
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_explanation: Option<String>,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
    #[serde(default)]
    pub case_status: CaseStatus,
    #[serde(default)]
    pub case_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Borrowed view of a transaction that can take part in aggregation.
#[derive(Debug, Clone, Copy)]
pub struct Qualifying<'a> {
    pub id: u64,
    pub employee: &'a Employee,
    pub customer: &'a Customer,
    pub risk_score: f64,
    pub is_fraud: bool,
}

impl Transaction {
    /// Employee, customer and risk score all present; anything else is invisible to aggregation.
    pub fn qualifying(&self) -> Option<Qualifying<'_>> {
        match (&self.employee, &self.customer, self.risk_score) {
            (Some(employee), Some(customer), Some(risk_score)) => Some(Qualifying {
                id: self.id,
                employee,
                customer,
                risk_score,
                is_fraud: self.is_fraud,
            }),
            _ => None,
        }
    }

    /// Fraud overrides the base type for display.
    pub fn display_type(&self) -> &'static str {
        if self.is_fraud {
            "Fraud"
        } else {
            self.kind.label()
        }
    }
}
