//! Demand forecast projector
//!
//! Projects housing demand against compound population growth. A pure
//! function of its inputs: calling it twice with the same arguments yields
//! identical sequences.

use serde::{Deserialize, Serialize};

use crate::models::TimeHorizon;

/// One year of a demand forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-based year offset from the present
    pub year: u32,
    /// Projected population, rounded for reporting
    pub population: u64,
    /// Units needed to house the projected population
    pub housing_demand: u64,
    /// `current_units - housing_demand`; negative means a shortfall
    pub surplus_shortfall: i64,
}

/// Project year-by-year housing demand over the horizon.
///
/// Growth compounds on the unrounded population trajectory; rounding is
/// applied only to the reported figure for each year. Housing demand is the
/// ceiling of population over household size.
pub fn project_demand(
    current_population: f64,
    annual_growth_rate_percent: f64,
    horizon: TimeHorizon,
    avg_household_size: f64,
    current_units: u64,
) -> Vec<YearProjection> {
    let growth_factor = 1.0 + annual_growth_rate_percent / 100.0;

    (1..=horizon.years())
        .map(|year| {
            let population = current_population * growth_factor.powi(year as i32);
            let housing_demand = (population / avg_household_size).ceil().max(0.0) as u64;
            let surplus_shortfall = current_units as i64 - housing_demand as i64;
            YearProjection {
                year,
                population: population.round().max(0.0) as u64,
                housing_demand,
                surplus_shortfall,
            }
        })
        .collect()
}
