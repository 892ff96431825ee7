//! Property tests for the unit-mix split and draft resolution.

use proptest::prelude::*;

use homestead::models::ScenarioDraft;
use homestead::UnitMix;

fn mix_strategy() -> impl Strategy<Value = UnitMix> {
    // Deliberately wider than a well-formed 0..=100 so mixes summing far
    // from 100 are exercised too.
    (0.0..200.0f64, 0.0..200.0f64, 0.0..200.0f64).prop_map(|(one, two, three)| UnitMix {
        one_bedroom: one,
        two_bedroom: two,
        three_bedroom: three,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The bedroom-count shares sum exactly to the unit total for
    /// any mix, however malformed its percentages.
    #[test]
    fn property_split_sums_exactly(
        mix in mix_strategy(),
        total in 1u64..20_000,
    ) {
        let split = mix.split(total);
        prop_assert_eq!(
            split.one_bedroom + split.two_bedroom + split.three_bedroom,
            total as i64
        );
    }

    /// PROPERTY: Draft resolution never panics; it either produces a
    /// validated scenario or a named-field error.
    #[test]
    fn property_draft_resolve_never_panics(
        units_per_floor in proptest::option::of(0u32..500),
        number_of_floors in proptest::option::of(0u32..200),
        number_of_units in proptest::option::of(0u32..5_000),
        apartment_units in proptest::option::of(0u32..5_000),
        single_family_units in proptest::option::of(0u32..5_000),
        with_mix in any::<bool>(),
        kind in 0u8..3,
    ) {
        let draft = ScenarioDraft {
            project_type: match kind {
                0 => homestead::DevelopmentType::Apartment,
                1 => homestead::DevelopmentType::SingleFamily,
                _ => homestead::DevelopmentType::Mixed,
            },
            units_per_floor,
            number_of_floors,
            number_of_units,
            apartment_units,
            single_family_units,
            unit_mix: with_mix.then_some(UnitMix {
                one_bedroom: 50.0,
                two_bedroom: 30.0,
                three_bedroom: 20.0,
            }),
            ..ScenarioDraft::default()
        };
        let _ = draft.resolve();
    }
}
