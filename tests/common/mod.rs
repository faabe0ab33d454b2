#![allow(dead_code)]

use retail_risk::case::CaseStatus;
use retail_risk::transaction::{Customer, Employee, Transaction, TransactionType};

pub fn employee(id: u64, first: &str, last: &str) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        role: "Cashier".to_string(),
        email: None,
    }
}

pub fn customer(id: u64, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: None,
    }
}

pub fn bare(id: u64) -> Transaction {
    Transaction {
        id,
        created_at: None,
        employee: None,
        customer: None,
        total_amount: 10.0,
        kind: TransactionType::Purchase,
        is_fraud: false,
        risk_score: None,
        fraud_type: None,
        fraud_explanation: None,
        items: Vec::new(),
        case_status: CaseStatus::Open,
        case_notes: Vec::new(),
        last_updated: None,
    }
}

/// Qualifying transaction between employee `e` and customer `c`. Names derive from ids.
pub fn tx(id: u64, e: u64, c: u64, score: f64) -> Transaction {
    Transaction {
        employee: Some(employee(e, "Emp", &e.to_string())),
        customer: Some(customer(c, &format!("Customer {}", c))),
        risk_score: Some(score),
        ..bare(id)
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
