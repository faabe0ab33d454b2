//! Aggregation benchmark: single pass over a synthetic store day.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use retail_risk::aggregate;
use retail_risk::case::CaseStatus;
use retail_risk::transaction::{Customer, Employee, Transaction, TransactionType};

fn make_transactions(n: usize) -> Vec<Transaction> {
    (0..n)
        .map(|i| Transaction {
            id: i as u64,
            created_at: None,
            employee: Some(Employee {
                id: (i % 40) as u64,
                first_name: "Emp".to_string(),
                last_name: format!("{}", i % 40),
                role: "Cashier".to_string(),
                email: None,
            }),
            customer: (i % 11 != 0).then(|| Customer {
                id: (i % 500) as u64,
                name: format!("Customer {}", i % 500),
                email: None,
            }),
            total_amount: (i % 300) as f64,
            kind: TransactionType::Purchase,
            is_fraud: i % 97 == 0,
            risk_score: (i % 13 != 0).then(|| ((i * 37) % 101) as f64),
            fraud_type: None,
            fraud_explanation: None,
            items: Vec::new(),
            case_status: CaseStatus::Open,
            case_notes: Vec::new(),
            last_updated: None,
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let txs = make_transactions(10_000);
    c.bench_function("aggregate_10k_transactions", |b| {
        b.iter(|| black_box(aggregate(black_box(&txs))))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
