//! Relationship aggregation: qualifying predicate, running means, both perspectives.

mod common;

use common::{approx, bare, customer, employee, tx};
use retail_risk::aggregate::{aggregate, running_mean, EntityKind, EntitySummary};
use retail_risk::anomaly::AnomalyLabel;

#[test]
fn worked_example_employee_view() {
    let txs = vec![tx(1, 1, 1, 80.0), tx(2, 1, 1, 90.0), tx(3, 1, 2, 30.0)];
    let agg = aggregate(&txs);

    let e1 = agg.employee(1).unwrap();
    assert_eq!(e1.total_transactions, 3);
    assert!(approx(e1.avg_risk, 200.0 / 3.0));

    let c1 = e1.edge(1).unwrap();
    assert_eq!(c1.count, 2);
    assert!(approx(c1.avg_risk, 85.0));
    assert_eq!(c1.anomaly, None);

    let c2 = e1.edge(2).unwrap();
    assert_eq!(c2.count, 1);
    assert!(approx(c2.avg_risk, 30.0));
}

#[test]
fn worked_example_risk_spike() {
    let txs = vec![tx(1, 1, 1, 95.0), tx(2, 1, 1, 95.0), tx(3, 1, 2, 30.0)];
    let agg = aggregate(&txs);

    let e1 = agg.employee(1).unwrap();
    assert!(approx(e1.avg_risk, 220.0 / 3.0));
    assert_eq!(e1.edge(1).unwrap().anomaly, Some(AnomalyLabel::RiskSpike));
    assert_eq!(e1.edge(2).unwrap().anomaly, None);

    // Customer 1 saw only 95s: entity and edge both high.
    let c1 = agg.customer(1).unwrap();
    assert_eq!(c1.edge(1).unwrap().anomaly, Some(AnomalyLabel::DualHighRisk));
}

#[test]
fn non_qualifying_transactions_are_invisible() {
    let no_score = retail_risk::Transaction {
        risk_score: None,
        ..tx(1, 1, 1, 0.0)
    };
    let no_customer = retail_risk::Transaction {
        employee: Some(employee(2, "A", "B")),
        risk_score: Some(99.0),
        ..bare(2)
    };
    let no_employee = retail_risk::Transaction {
        customer: Some(customer(3, "C")),
        risk_score: Some(99.0),
        ..bare(3)
    };
    let txs = vec![no_score, no_customer, no_employee, tx(4, 5, 5, 10.0)];
    let agg = aggregate(&txs);

    assert_eq!(agg.employees.len(), 1);
    assert_eq!(agg.customers.len(), 1);
    assert!(agg.employee(1).is_none());
    assert!(agg.employee(2).is_none());
    assert!(agg.customer(3).is_none());
    assert_eq!(agg.employee(5).unwrap().total_transactions, 1);
}

#[test]
fn zero_score_is_a_signal() {
    let agg = aggregate(&[tx(1, 1, 1, 0.0), tx(2, 1, 1, 50.0)]);
    let e = agg.employee(1).unwrap();
    assert_eq!(e.total_transactions, 2);
    assert!(approx(e.avg_risk, 25.0));
}

#[test]
fn mirrored_edges_match() {
    let txs = vec![
        tx(1, 1, 1, 12.5),
        tx(2, 2, 1, 77.0),
        tx(3, 1, 1, 63.1),
        tx(4, 1, 2, 41.0),
        tx(5, 2, 2, 99.9),
        tx(6, 1, 1, 18.3),
    ];
    let agg = aggregate(&txs);
    for emp in agg.employees.values() {
        for edge in &emp.counterparties {
            let mirror = agg.customer(edge.id).unwrap().edge(emp.id).unwrap();
            assert_eq!(edge.count, mirror.count);
            assert_eq!(edge.avg_risk, mirror.avg_risk);
        }
    }
}

#[test]
fn counterparties_in_first_seen_order() {
    let txs = vec![tx(1, 1, 30, 10.0), tx(2, 1, 10, 10.0), tx(3, 1, 20, 10.0), tx(4, 1, 10, 10.0)];
    let agg = aggregate(&txs);
    let ids: Vec<u64> = agg.employee(1).unwrap().counterparties.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn names_and_kinds() {
    let agg = aggregate(&[tx(1, 7, 8, 50.0)]);
    let e = agg.employee(7).unwrap();
    assert_eq!(e.kind, EntityKind::Employee);
    assert_eq!(e.name, "Emp 7");
    assert_eq!(e.counterparties[0].name, "Customer 8");

    let c = agg.customer(8).unwrap();
    assert_eq!(c.kind, EntityKind::Customer);
    assert_eq!(c.counterparties[0].name, "Emp 7");
}

#[test]
fn recomputation_is_idempotent() {
    let txs: Vec<_> = (0..40).map(|i| tx(i, i % 3, i % 7, ((i * 37) % 101) as f64)).collect();
    assert_eq!(aggregate(&txs), aggregate(&txs));
}

#[test]
fn empty_summary_reports_zero() {
    let s = EntitySummary::new(EntityKind::Customer, 1, "Nobody");
    assert_eq!(s.total_transactions, 0);
    assert_eq!(s.avg_risk, 0.0);
    assert!(s.counterparties.is_empty());
}

#[test]
fn running_mean_update_rule() {
    assert!(approx(running_mean(0.0, 0, 42.0), 42.0));
    assert!(approx(running_mean(50.0, 3, 90.0), 60.0));
}

#[test]
fn anomalies_iterates_both_perspectives() {
    let txs = vec![tx(1, 1, 1, 95.0), tx(2, 1, 1, 95.0), tx(3, 1, 2, 30.0)];
    let agg = aggregate(&txs);
    let flagged: Vec<(EntityKind, u64, u64)> = agg
        .anomalies()
        .map(|(entity, edge)| (entity.kind, entity.id, edge.id))
        .collect();
    assert_eq!(
        flagged,
        vec![(EntityKind::Employee, 1, 1), (EntityKind::Customer, 1, 1)]
    );
}

#[test]
fn fraud_flag_carried_to_both_sides() {
    let flagged = retail_risk::Transaction {
        is_fraud: true,
        ..tx(1, 1, 1, 40.0)
    };
    // fraud on a non-qualifying transaction never reaches the summaries
    let unscored = retail_risk::Transaction {
        is_fraud: true,
        risk_score: None,
        ..tx(2, 2, 2, 0.0)
    };
    let txs = vec![flagged, tx(3, 1, 2, 50.0), tx(4, 2, 2, 60.0), unscored];
    let agg = aggregate(&txs);

    assert!(agg.employee(1).unwrap().fraud_seen);
    assert!(agg.customer(1).unwrap().fraud_seen);
    assert!(!agg.employee(2).unwrap().fraud_seen);
    assert!(!agg.customer(2).unwrap().fraud_seen);

    let views = retail_risk::view::view(agg.employees.values(), &Default::default());
    let flags: Vec<(u64, bool)> = views.iter().map(|v| (v.header.id, v.header.fraud_seen)).collect();
    assert_eq!(flags, vec![(2, false), (1, true)]);
}
