//! Threshold classification
//!
//! Both bucketed classifiers (density, infrastructure capacity) run through
//! one ascending-ladder evaluator so they share tie-break semantics: strict
//! less-than against each upper bound, first match wins, fallback label for
//! anything at or above the last bound.

use serde::{Deserialize, Serialize};

use crate::assumptions::{DensityThresholds, InfrastructureWarningLevels};
use crate::models::BudgetRange;

/// Classify a value against an ascending ladder of `(upper_bound, label)`
/// steps. Returns the label of the first step whose bound the value is
/// strictly below, or `fallback` when no bound is above the value.
pub fn classify_ascending<T: Copy>(value: f64, steps: &[(f64, T)], fallback: T) -> T {
    for &(bound, label) in steps {
        if value < bound {
            return label;
        }
    }
    fallback
}

/// Bucketed label for units-per-hectare intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityClass {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DensityClass {
    /// Classify a units-per-hectare figure against regional thresholds
    pub fn classify(units_per_hectare: f64, thresholds: &DensityThresholds) -> Self {
        classify_ascending(
            units_per_hectare,
            &[
                (thresholds.low, DensityClass::Low),
                (thresholds.medium, DensityClass::Medium),
                (thresholds.high, DensityClass::High),
            ],
            DensityClass::VeryHigh,
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityClass::Low => "low",
            DensityClass::Medium => "medium",
            DensityClass::High => "high",
            DensityClass::VeryHigh => "very-high",
        }
    }
}

impl std::fmt::Display for DensityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of total cost against a project's budget envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    Within,
    Over,
}

impl BudgetStatus {
    /// Tri-state partition of cost-space: strictly below `min` is under,
    /// strictly above `max` is over, both boundaries classify as within.
    pub fn classify(total_cost: f64, budget: &BudgetRange) -> Self {
        if total_cost < budget.min {
            BudgetStatus::Under
        } else if total_cost > budget.max {
            BudgetStatus::Over
        } else {
            BudgetStatus::Within
        }
    }
}

/// Classification of daily utility demand against capacity thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureStatus {
    Ok,
    Warning,
    Exceeds,
}

impl InfrastructureStatus {
    /// Classify water demand (m³/day) and population against the regional
    /// warning levels. Each axis runs the shared ladder; the reported
    /// status is the more severe of the two, so one breached "exceeds"
    /// bound is enough to report exceeds.
    pub fn classify(
        water_demand_m3: f64,
        population: f64,
        levels: &InfrastructureWarningLevels,
    ) -> Self {
        let water = classify_ascending(
            water_demand_m3,
            &[
                (levels.water_demand_warning, InfrastructureStatus::Ok),
                (levels.water_demand_exceeds, InfrastructureStatus::Warning),
            ],
            InfrastructureStatus::Exceeds,
        );
        let people = classify_ascending(
            population,
            &[
                (levels.population_warning, InfrastructureStatus::Ok),
                (levels.population_exceeds, InfrastructureStatus::Warning),
            ],
            InfrastructureStatus::Exceeds,
        );
        water.max(people)
    }
}

/// How comfortably a home build fits its budget.
/// Derived from percentage used: above 100 is over, above 90 is tight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeBudgetStatus {
    Comfortable,
    Tight,
    Over,
}

impl HomeBudgetStatus {
    pub fn from_percentage_used(percentage_used: f64) -> Self {
        if percentage_used > 100.0 {
            HomeBudgetStatus::Over
        } else if percentage_used > 90.0 {
            HomeBudgetStatus::Tight
        } else {
            HomeBudgetStatus::Comfortable
        }
    }
}
