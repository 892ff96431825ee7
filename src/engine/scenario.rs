//! Scenario metrics calculator
//!
//! Derives the full result record for a development scenario: unit counts,
//! projected population, built area, land coverage, density bucket, cost
//! figures, budget conformance and daily utility demand. Every regional
//! constant comes from the injected `CostAssumptions` bundle.

use serde::{Deserialize, Serialize};

use crate::assumptions::{resolve_occupancy, CostAssumptions, OccupancyOverride};
use crate::classify::{BudgetStatus, DensityClass, InfrastructureStatus};
use crate::error::{HomesteadError, HomesteadResult};
use crate::models::{BudgetRange, Layout, Project, Scenario, UnitBreakdown};

/// Calculated metrics for a scenario. Immutable; the caller owns display
/// and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResults {
    pub total_units: u64,
    /// Bedroom-count split; present for apartment scenarios only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_breakdown: Option<UnitBreakdown>,
    pub estimated_population: u64,
    /// Square meters
    pub built_up_area: f64,
    pub land_coverage_percentage: f64,
    pub density_classification: DensityClass,
    pub construction_cost: f64,
    pub infrastructure_cost: f64,
    pub total_project_cost: f64,
    pub cost_per_unit: f64,
    pub cost_per_person: f64,
    pub budget_status: BudgetStatus,
    /// Liters per day
    pub daily_water_demand: f64,
    /// kWh per day
    pub electricity_demand: f64,
    /// Kilograms per day
    pub waste_generation: f64,
    pub infrastructure_status: InfrastructureStatus,
}

/// Compute all metrics for a scenario against a budget envelope and a land
/// area in square meters.
pub fn compute_scenario_results(
    scenario: &Scenario,
    budget: &BudgetRange,
    land_size_sqm: f64,
    assumptions: &CostAssumptions,
) -> HomesteadResult<ScenarioResults> {
    compute_with_project_layer(scenario, None, budget, land_size_sqm, assumptions)
}

/// Compute scenario metrics in the context of a project: converts the
/// project's land size to square meters and threads the project-level
/// occupancy overrides into the resolution chain.
pub fn compute_for_project(
    scenario: &Scenario,
    project: &Project,
    assumptions: &CostAssumptions,
) -> HomesteadResult<ScenarioResults> {
    compute_with_project_layer(
        scenario,
        project.occupancy_overrides.as_ref(),
        &project.budget_range,
        project.land_size.as_sqm(),
        assumptions,
    )
}

fn compute_with_project_layer(
    scenario: &Scenario,
    project_occupancy: Option<&OccupancyOverride>,
    budget: &BudgetRange,
    land_size_sqm: f64,
    assumptions: &CostAssumptions,
) -> HomesteadResult<ScenarioResults> {
    budget.validate()?;
    if land_size_sqm <= 0.0 {
        return Err(HomesteadError::InvalidLandSize {
            value: land_size_sqm,
        });
    }

    let kind = scenario.layout.development_type().as_str();
    let total_units = scenario.layout.total_units();
    if total_units == 0 {
        return Err(HomesteadError::InvalidField {
            field: "total_units",
            kind,
            message: "layout yields zero units".to_string(),
        });
    }

    let occupancy = resolve_occupancy(
        scenario.custom_assumptions.as_ref(),
        project_occupancy,
        &assumptions.occupancy,
    );

    let (raw_population, unit_breakdown, built_up_area) = match &scenario.layout {
        Layout::Apartment {
            unit_mix,
            unit_size,
            shared_space_percentage,
            ..
        } => {
            let breakdown = unit_mix.split(total_units);
            let population = breakdown.one_bedroom as f64 * occupancy.one_bedroom
                + breakdown.two_bedroom as f64 * occupancy.two_bedroom
                + breakdown.three_bedroom as f64 * occupancy.three_bedroom;
            let private_area = total_units as f64 * unit_size;
            let built = private_area * (1.0 + shared_space_percentage / 100.0);
            (population, Some(breakdown), built)
        }
        Layout::SingleFamily { house_size, .. } => (
            total_units as f64 * occupancy.single_family,
            None,
            total_units as f64 * house_size,
        ),
        Layout::Mixed {
            apartment_units,
            single_family_units,
        } => {
            // Approximation carried from the planning model: apartments at
            // the unweighted mean occupancy, fixed per-unit areas.
            let mean_apartment_occupancy =
                (occupancy.one_bedroom + occupancy.two_bedroom + occupancy.three_bedroom) / 3.0;
            let population = *apartment_units as f64 * mean_apartment_occupancy
                + *single_family_units as f64 * occupancy.single_family;
            let built = *apartment_units as f64 * assumptions.mixed_apartment_unit_size
                + *single_family_units as f64 * assumptions.mixed_house_unit_size;
            (population, None, built)
        }
    };

    // The reported population is rounded once, and every per-person figure
    // below uses the rounded value so the record stays internally
    // consistent.
    let rounded_population = raw_population.round();
    if rounded_population < 1.0 {
        return Err(HomesteadError::ZeroPopulation);
    }
    let estimated_population = rounded_population as u64;
    let population = estimated_population as f64;

    let land_coverage_percentage = built_up_area / land_size_sqm * 100.0;

    let units_per_hectare = total_units as f64 / land_size_sqm * 10_000.0;
    let density_classification =
        DensityClass::classify(units_per_hectare, &assumptions.density_thresholds);

    let construction_cost =
        built_up_area * assumptions.construction_costs.rate_for(scenario.finish_level);
    let infrastructure_cost = scenario.infrastructure_costs.total();
    let total_project_cost = construction_cost + infrastructure_cost;
    let cost_per_unit = total_project_cost / total_units as f64;
    let cost_per_person = total_project_cost / population;

    let budget_status = BudgetStatus::classify(total_project_cost, budget);

    let daily_water_demand = population * assumptions.water_liters_per_person;
    let electricity_demand = population * assumptions.electricity_kwh_per_person;
    let waste_generation = population * assumptions.waste_kg_per_person;
    let infrastructure_status = InfrastructureStatus::classify(
        daily_water_demand / 1000.0,
        population,
        &assumptions.infrastructure_warning_levels,
    );

    Ok(ScenarioResults {
        total_units,
        unit_breakdown,
        estimated_population,
        built_up_area,
        land_coverage_percentage,
        density_classification,
        construction_cost,
        infrastructure_cost,
        total_project_cost,
        cost_per_unit,
        cost_per_person,
        budget_status,
        daily_water_demand,
        electricity_demand,
        waste_generation,
        infrastructure_status,
    })
}
