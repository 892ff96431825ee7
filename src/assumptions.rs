//! Regional cost and consumption assumptions
//!
//! Every constant the calculators branch on is injected through these
//! bundles rather than hardcoded: construction rates by finish level,
//! occupancy per bedroom count, per-person daily consumption, and the
//! classification thresholds. Bundles are read-only inputs supplied fresh
//! per call; the engine never mutates or caches them.
//!
//! Bundles can be loaded from TOML tables keyed by region/country. Unknown
//! keys are collected as non-fatal warnings with a best-effort suggestion,
//! so a typo in an assumptions file degrades to a default instead of
//! silently vanishing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HomesteadError, HomesteadResult};
use crate::models::FinishLevel;

/// Built area attributed to each apartment unit in a mixed development.
/// A deliberate approximation carried over from the planning model; override
/// per region via `CostAssumptions::mixed_apartment_unit_size`.
pub const MIXED_APARTMENT_UNIT_AREA_SQM: f64 = 70.0;

/// Built area attributed to each house in a mixed development.
/// Override per region via `CostAssumptions::mixed_house_unit_size`.
pub const MIXED_HOUSE_UNIT_AREA_SQM: f64 = 100.0;

/// Construction cost per square meter for each finish level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructionCostTiers {
    pub basic: f64,
    pub standard: f64,
    pub improved: f64,
}

impl ConstructionCostTiers {
    /// The rate for a finish level
    pub fn rate_for(&self, level: FinishLevel) -> f64 {
        match level {
            FinishLevel::Basic => self.basic,
            FinishLevel::Standard => self.standard,
            FinishLevel::Improved => self.improved,
        }
    }
}

impl Default for ConstructionCostTiers {
    fn default() -> Self {
        ConstructionCostTiers {
            basic: 350.0,
            standard: 600.0,
            improved: 900.0,
        }
    }
}

/// Persons per unit by bedroom count, plus the single-family figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyAssumptions {
    pub one_bedroom: f64,
    pub two_bedroom: f64,
    pub three_bedroom: f64,
    pub single_family: f64,
}

impl Default for OccupancyAssumptions {
    fn default() -> Self {
        OccupancyAssumptions {
            one_bedroom: 1.5,
            two_bedroom: 3.0,
            three_bedroom: 4.5,
            single_family: 5.0,
        }
    }
}

/// Partial occupancy overrides. A layer of the resolution chain: any field
/// left `None` falls through to the next layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OccupancyOverride {
    #[serde(default)]
    pub one_bedroom: Option<f64>,
    #[serde(default)]
    pub two_bedroom: Option<f64>,
    #[serde(default)]
    pub three_bedroom: Option<f64>,
    #[serde(default)]
    pub single_family: Option<f64>,
}

/// Resolve occupancy constants through the priority chain:
/// scenario-level override, then project-level override, then the regional
/// defaults. Pure and per-field: the first defined value wins.
pub fn resolve_occupancy(
    scenario: Option<&OccupancyOverride>,
    project: Option<&OccupancyOverride>,
    defaults: &OccupancyAssumptions,
) -> OccupancyAssumptions {
    fn pick(
        scenario: Option<&OccupancyOverride>,
        project: Option<&OccupancyOverride>,
        field: fn(&OccupancyOverride) -> Option<f64>,
        default: f64,
    ) -> f64 {
        scenario
            .and_then(field)
            .or_else(|| project.and_then(field))
            .unwrap_or(default)
    }

    OccupancyAssumptions {
        one_bedroom: pick(scenario, project, |o| o.one_bedroom, defaults.one_bedroom),
        two_bedroom: pick(scenario, project, |o| o.two_bedroom, defaults.two_bedroom),
        three_bedroom: pick(
            scenario,
            project,
            |o| o.three_bedroom,
            defaults.three_bedroom,
        ),
        single_family: pick(
            scenario,
            project,
            |o| o.single_family,
            defaults.single_family,
        ),
    }
}

/// Ascending upper bounds for the density ladder; anything at or above
/// `high` classifies as very-high. Monotonically increasing values are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for DensityThresholds {
    fn default() -> Self {
        DensityThresholds {
            low: 50.0,
            medium: 150.0,
            high: 300.0,
        }
    }
}

/// Capacity thresholds for the infrastructure status ladder. Water figures
/// are daily demand in cubic meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureWarningLevels {
    pub water_demand_exceeds: f64,
    pub water_demand_warning: f64,
    pub population_exceeds: f64,
    pub population_warning: f64,
}

impl Default for InfrastructureWarningLevels {
    fn default() -> Self {
        InfrastructureWarningLevels {
            water_demand_exceeds: 500.0,
            water_demand_warning: 300.0,
            population_exceeds: 2000.0,
            population_warning: 1500.0,
        }
    }
}

/// Regional constants for scenario calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAssumptions {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub construction_costs: ConstructionCostTiers,
    #[serde(default)]
    pub occupancy: OccupancyAssumptions,
    #[serde(default = "default_water_liters")]
    pub water_liters_per_person: f64,
    #[serde(default = "default_electricity_kwh")]
    pub electricity_kwh_per_person: f64,
    #[serde(default = "default_waste_kg")]
    pub waste_kg_per_person: f64,
    #[serde(default)]
    pub density_thresholds: DensityThresholds,
    #[serde(default)]
    pub infrastructure_warning_levels: InfrastructureWarningLevels,
    #[serde(default = "default_mixed_apartment_unit_size")]
    pub mixed_apartment_unit_size: f64,
    #[serde(default = "default_mixed_house_unit_size")]
    pub mixed_house_unit_size: f64,
}

fn default_water_liters() -> f64 {
    150.0
}

fn default_electricity_kwh() -> f64 {
    2.0
}

fn default_waste_kg() -> f64 {
    0.5
}

fn default_mixed_apartment_unit_size() -> f64 {
    MIXED_APARTMENT_UNIT_AREA_SQM
}

fn default_mixed_house_unit_size() -> f64 {
    MIXED_HOUSE_UNIT_AREA_SQM
}

impl Default for CostAssumptions {
    fn default() -> Self {
        CostAssumptions {
            country: String::new(),
            construction_costs: ConstructionCostTiers::default(),
            occupancy: OccupancyAssumptions::default(),
            water_liters_per_person: default_water_liters(),
            electricity_kwh_per_person: default_electricity_kwh(),
            waste_kg_per_person: default_waste_kg(),
            density_thresholds: DensityThresholds::default(),
            infrastructure_warning_levels: InfrastructureWarningLevels::default(),
            mixed_apartment_unit_size: default_mixed_apartment_unit_size(),
            mixed_house_unit_size: default_mixed_house_unit_size(),
        }
    }
}

/// Country-level construction and infrastructure unit costs for the home
/// specification calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryData {
    #[serde(default)]
    pub construction_costs: ConstructionCostTiers,
    #[serde(default = "default_labor_percentage")]
    pub labor_cost_percentage: f64,
    #[serde(default = "default_water_connection")]
    pub water_per_connection: f64,
    #[serde(default = "default_sewer_connection")]
    pub sewer_per_connection: f64,
    #[serde(default = "default_roads_per_meter")]
    pub roads_per_meter: f64,
}

fn default_labor_percentage() -> f64 {
    25.0
}

fn default_water_connection() -> f64 {
    2500.0
}

fn default_sewer_connection() -> f64 {
    3000.0
}

fn default_roads_per_meter() -> f64 {
    120.0
}

impl Default for CountryData {
    fn default() -> Self {
        CountryData {
            construction_costs: ConstructionCostTiers::default(),
            labor_cost_percentage: default_labor_percentage(),
            water_per_connection: default_water_connection(),
            sewer_per_connection: default_sewer_connection(),
            roads_per_meter: default_roads_per_meter(),
        }
    }
}

/// Source of regional cost assumptions, keyed by region name.
/// Implemented by the persistence layer in the application; a TOML-backed
/// `RegionalTable` ships with this crate.
pub trait AssumptionsProvider {
    fn assumptions_for(&self, region: &str) -> HomesteadResult<CostAssumptions>;
}

/// Source of country data, keyed by ISO country code.
pub trait CountryDataProvider {
    fn country_data_for(&self, code: &str) -> HomesteadResult<CountryData>;
}

/// Non-fatal warning raised while loading an assumptions table,
/// e.g. an unknown key that will be ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Assumption bundles loaded from a TOML file: `[regions.<name>]` tables of
/// `CostAssumptions` and `[countries.<code>]` tables of `CountryData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegionalTable {
    #[serde(default)]
    pub regions: BTreeMap<String, CostAssumptions>,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryData>,
}

impl RegionalTable {
    /// Load a table and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HomesteadResult<(Self, Vec<TableWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let table: RegionalTable = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| HomesteadError::InvalidAssumptions {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                TableWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((table, warnings))
    }
}

impl AssumptionsProvider for RegionalTable {
    fn assumptions_for(&self, region: &str) -> HomesteadResult<CostAssumptions> {
        self.regions
            .get(region)
            .cloned()
            .ok_or_else(|| HomesteadError::UnknownRegion {
                region: region.to_string(),
            })
    }
}

impl CountryDataProvider for RegionalTable {
    fn country_data_for(&self, code: &str) -> HomesteadResult<CountryData> {
        self.countries
            .get(code)
            .cloned()
            .ok_or_else(|| HomesteadError::UnknownCountry {
                code: code.to_string(),
            })
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "regions",
        "countries",
        "country",
        "construction_costs",
        "basic",
        "standard",
        "improved",
        "occupancy",
        "one_bedroom",
        "two_bedroom",
        "three_bedroom",
        "single_family",
        "water_liters_per_person",
        "electricity_kwh_per_person",
        "waste_kg_per_person",
        "density_thresholds",
        "low",
        "medium",
        "high",
        "infrastructure_warning_levels",
        "water_demand_exceeds",
        "water_demand_warning",
        "population_exceeds",
        "population_warning",
        "mixed_apartment_unit_size",
        "mixed_house_unit_size",
        "labor_cost_percentage",
        "water_per_connection",
        "sewer_per_connection",
        "roads_per_meter",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
