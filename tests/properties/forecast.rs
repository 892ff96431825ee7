//! Property tests for the demand forecast projector.

use proptest::prelude::*;

use homestead::{project_demand, TimeHorizon};

fn horizon_strategy() -> impl Strategy<Value = TimeHorizon> {
    prop_oneof![
        Just(TimeHorizon::FiveYears),
        Just(TimeHorizon::TenYears),
        Just(TimeHorizon::TwentyYears),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The projection is restartable: identical inputs yield
    /// identical sequences.
    #[test]
    fn property_projection_idempotent(
        population in 0.0..10_000_000.0f64,
        rate in -20.0..20.0f64,
        horizon in horizon_strategy(),
        household in 1.0..10.0f64,
        units in 0u64..1_000_000,
    ) {
        let first = project_demand(population, rate, horizon, household, units);
        let second = project_demand(population, rate, horizon, household, units);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: One entry per year, in order, for every horizon.
    #[test]
    fn property_projection_length_and_order(
        population in 0.0..1_000_000.0f64,
        rate in -20.0..20.0f64,
        horizon in horizon_strategy(),
        household in 1.0..10.0f64,
    ) {
        let projections = project_demand(population, rate, horizon, household, 1_000);
        prop_assert_eq!(projections.len() as u32, horizon.years());
        for (i, projection) in projections.iter().enumerate() {
            prop_assert_eq!(projection.year, i as u32 + 1);
        }
    }

    /// PROPERTY: Housing demand is non-negative for non-negative inputs,
    /// and the surplus identity holds for every year.
    #[test]
    fn property_demand_non_negative_and_surplus_identity(
        population in 0.0..1_000_000.0f64,
        rate in -20.0..20.0f64,
        horizon in horizon_strategy(),
        household in 1.0..10.0f64,
        units in 0u64..1_000_000,
    ) {
        for projection in project_demand(population, rate, horizon, household, units) {
            prop_assert_eq!(
                projection.surplus_shortfall,
                units as i64 - projection.housing_demand as i64
            );
        }
    }
}
