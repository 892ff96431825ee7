//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use homestead::assumptions::{ConstructionCostTiers, OccupancyAssumptions};
use homestead::models::{InfrastructureCosts, Layout, UnitMix};
use homestead::{BudgetRange, CostAssumptions, CountryData, FinishLevel, Scenario};

/// The reference regional bundle used across suites: standard rate 600/sqm,
/// occupancy 1.5/3.0/4.5 by bedroom count.
pub fn reference_assumptions() -> CostAssumptions {
    CostAssumptions {
        country: "Kenya".to_string(),
        construction_costs: ConstructionCostTiers {
            basic: 350.0,
            standard: 600.0,
            improved: 900.0,
        },
        occupancy: OccupancyAssumptions {
            one_bedroom: 1.5,
            two_bedroom: 3.0,
            three_bedroom: 4.5,
            single_family: 5.0,
        },
        ..CostAssumptions::default()
    }
}

pub fn reference_budget() -> BudgetRange {
    BudgetRange::new(1_000_000.0, 2_000_000.0, "USD")
}

/// 8 units/floor over 4 floors, 50/40/10 mix, 50 sqm units with 20% shared
/// space: the worked example used throughout the suites.
pub fn reference_apartment() -> Scenario {
    Scenario::new(
        "scn-apartment",
        "Reference block",
        Layout::Apartment {
            units_per_floor: 8,
            number_of_floors: 4,
            unit_mix: UnitMix {
                one_bedroom: 50.0,
                two_bedroom: 40.0,
                three_bedroom: 10.0,
            },
            unit_size: 50.0,
            shared_space_percentage: 20.0,
        },
        InfrastructureCosts {
            water: 50_000.0,
            sewer: 75_000.0,
            roads: 100_000.0,
        },
        FinishLevel::Standard,
    )
}

pub fn reference_country() -> CountryData {
    CountryData {
        construction_costs: ConstructionCostTiers {
            basic: 500.0,
            standard: 700.0,
            improved: 1_000.0,
        },
        labor_cost_percentage: 25.0,
        water_per_connection: 2_000.0,
        sewer_per_connection: 2_500.0,
        roads_per_meter: 100.0,
    }
}
