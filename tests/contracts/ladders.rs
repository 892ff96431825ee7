//! Threshold-ladder contracts (LADDER-001 through LADDER-003)

use homestead::assumptions::{DensityThresholds, InfrastructureWarningLevels};
use homestead::classify::classify_ascending;
use homestead::{DensityClass, InfrastructureStatus};

/// CONTRACT LADDER-001: Strict less-than, first match wins.
///
/// A value equal to a bound belongs to the bucket above it; both bucketed
/// classifiers share this tie-break.
#[test]
fn contract_bound_values_classify_upward() {
    let thresholds = DensityThresholds::default();
    assert_eq!(
        DensityClass::classify(thresholds.low, &thresholds),
        DensityClass::Medium
    );
    assert_eq!(
        DensityClass::classify(thresholds.medium, &thresholds),
        DensityClass::High
    );
    assert_eq!(
        DensityClass::classify(thresholds.high, &thresholds),
        DensityClass::VeryHigh
    );

    let levels = InfrastructureWarningLevels::default();
    assert_eq!(
        InfrastructureStatus::classify(levels.water_demand_warning, 0.0, &levels),
        InfrastructureStatus::Warning
    );
    assert_eq!(
        InfrastructureStatus::classify(levels.water_demand_exceeds, 0.0, &levels),
        InfrastructureStatus::Exceeds
    );
}

/// CONTRACT LADDER-002: Density never moves backward as intensity grows.
#[test]
fn contract_density_monotonic_at_fixed_points() {
    let thresholds = DensityThresholds::default();
    let samples = [0.0, 10.0, 49.9, 50.0, 100.0, 149.9, 150.0, 299.9, 300.0, 1e6];

    let mut previous = DensityClass::Low;
    for sample in samples {
        let class = DensityClass::classify(sample, &thresholds);
        assert!(class >= previous, "density went backward at {sample}");
        previous = class;
    }
}

/// CONTRACT LADDER-003: The generic evaluator matches an exhaustive
/// hand-rolled ladder over its whole input space shape.
#[test]
fn contract_evaluator_agrees_with_explicit_branches() {
    let steps = [(50.0, DensityClass::Low), (150.0, DensityClass::Medium)];
    for value in [-1.0, 0.0, 49.0, 50.0, 149.0, 150.0, 151.0] {
        let expected = if value < 50.0 {
            DensityClass::Low
        } else if value < 150.0 {
            DensityClass::Medium
        } else {
            DensityClass::High
        };
        assert_eq!(
            classify_ascending(value, &steps, DensityClass::High),
            expected
        );
    }
}
