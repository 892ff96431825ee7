//! Budget-status contracts (BUDGET-001, BUDGET-002)

use homestead::{BudgetRange, BudgetStatus};

/// CONTRACT BUDGET-001: Total, non-overlapping partition
///
/// For any cost, exactly one of under/within/over holds.
#[test]
fn contract_exactly_one_status() {
    let budget = BudgetRange::new(100.0, 200.0, "USD");
    let costs = [0.0, 99.99, 100.0, 150.0, 200.0, 200.01, 1e12];

    for cost in costs {
        let status = BudgetStatus::classify(cost, &budget);
        let matches = [
            status == BudgetStatus::Under,
            status == BudgetStatus::Within,
            status == BudgetStatus::Over,
        ]
        .iter()
        .filter(|&&m| m)
        .count();
        assert_eq!(matches, 1, "cost {cost}");
    }
}

/// CONTRACT BUDGET-002: Both envelope boundaries classify as within.
#[test]
fn contract_boundaries_are_within() {
    let budget = BudgetRange::new(100.0, 200.0, "USD");
    assert_eq!(
        BudgetStatus::classify(budget.min, &budget),
        BudgetStatus::Within
    );
    assert_eq!(
        BudgetStatus::classify(budget.max, &budget),
        BudgetStatus::Within
    );

    // Degenerate but legal envelope: min == max
    let point = BudgetRange::new(150.0, 150.0, "USD");
    assert_eq!(
        BudgetStatus::classify(150.0, &point),
        BudgetStatus::Within
    );
}
