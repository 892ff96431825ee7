//! Property tests for the threshold classifiers.

use proptest::prelude::*;

use homestead::assumptions::{DensityThresholds, InfrastructureWarningLevels};
use homestead::{BudgetRange, BudgetStatus, DensityClass, InfrastructureStatus};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Density classification is monotonic in units-per-hectare:
    /// holding thresholds fixed, increasing intensity never moves the
    /// bucket backward.
    #[test]
    fn property_density_monotonic(
        a in 0.0..10_000.0f64,
        b in 0.0..10_000.0f64,
    ) {
        let thresholds = DensityThresholds::default();
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            DensityClass::classify(lower, &thresholds)
                <= DensityClass::classify(upper, &thresholds)
        );
    }

    /// PROPERTY: Budget status is a total partition: every cost lands in
    /// exactly one bucket, and the bucket agrees with the envelope.
    #[test]
    fn property_budget_partition(
        min in 0.0..1e9f64,
        span in 0.0..1e9f64,
        cost in 0.0..4e9f64,
    ) {
        let budget = BudgetRange::new(min, min + span, "USD");
        let status = BudgetStatus::classify(cost, &budget);
        match status {
            BudgetStatus::Under => prop_assert!(cost < budget.min),
            BudgetStatus::Within => {
                prop_assert!(cost >= budget.min && cost <= budget.max)
            }
            BudgetStatus::Over => prop_assert!(cost > budget.max),
        }
    }

    /// PROPERTY: Infrastructure status is monotonic on each axis.
    #[test]
    fn property_infrastructure_monotonic_in_population(
        water in 0.0..1_000.0f64,
        population in 0.0..10_000.0f64,
        extra in 0.0..10_000.0f64,
    ) {
        let levels = InfrastructureWarningLevels::default();
        prop_assert!(
            InfrastructureStatus::classify(water, population, &levels)
                <= InfrastructureStatus::classify(water, population + extra, &levels)
        );
    }
}
