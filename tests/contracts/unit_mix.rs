//! Unit-mix contracts (MIX-001, MIX-002)

use homestead::models::{InfrastructureCosts, Layout};
use homestead::{compute_scenario_results, FinishLevel, Scenario, UnitMix};

use crate::common::{reference_assumptions, reference_budget};

/// CONTRACT MIX-001: Remainder absorption
///
/// The three bedroom-count shares always sum exactly to the unit total,
/// for any mix, including mixes that do not sum to 100.
#[test]
fn contract_split_counts_sum_to_total() {
    let mixes = [
        (50.0, 40.0, 10.0),
        (33.3, 33.3, 33.4),
        (70.0, 70.0, 0.0),
        (10.0, 15.0, 20.0),
        (0.0, 0.0, 0.0),
        (100.0, 0.0, 0.0),
    ];
    let totals = [1u64, 7, 32, 100, 999];

    for (one, two, three) in mixes {
        let mix = UnitMix {
            one_bedroom: one,
            two_bedroom: two,
            three_bedroom: three,
        };
        for total in totals {
            let split = mix.split(total);
            assert_eq!(
                split.one_bedroom + split.two_bedroom + split.three_bedroom,
                total as i64,
                "mix ({one}, {two}, {three}) on {total} units"
            );
        }
    }
}

/// CONTRACT MIX-002: The computed result record reports the same split
/// as the standalone helper.
#[test]
fn contract_result_breakdown_matches_split() {
    let mix = UnitMix {
        one_bedroom: 45.0,
        two_bedroom: 35.0,
        three_bedroom: 20.0,
    };
    let scenario = Scenario::new(
        "scn",
        "contract",
        Layout::Apartment {
            units_per_floor: 9,
            number_of_floors: 7,
            unit_mix: mix,
            unit_size: 50.0,
            shared_space_percentage: 20.0,
        },
        InfrastructureCosts::default(),
        FinishLevel::Standard,
    );
    let results = compute_scenario_results(
        &scenario,
        &reference_budget(),
        10_000.0,
        &reference_assumptions(),
    )
    .unwrap();

    assert_eq!(results.unit_breakdown.unwrap(), mix.split(63));
}
