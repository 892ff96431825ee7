//! Core data models for Homestead
//!
//! Defines the records exchanged with the outer layers:
//! - `Scenario`: a validated development scenario with a closed `Layout` sum type
//! - `ScenarioDraft`: the untrusted form shape with optional fields, resolved
//!   into a `Scenario` with fail-fast required-field checks
//! - `Project`: the land/budget envelope a scenario is evaluated against
//! - Supporting value types: `FinishLevel`, `UnitMix`, `LandSize`, `TimeHorizon`
//!
//! All records are request-scoped values: constructed by the caller, passed
//! once into a calculator, and discarded after the result is consumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assumptions::OccupancyOverride;
use crate::error::{HomesteadError, HomesteadResult};

/// Square meters per acre, used when converting project land sizes.
pub const SQM_PER_ACRE: f64 = 4046.86;

/// Default private area per apartment unit when a draft omits it.
pub const DEFAULT_UNIT_SIZE_SQM: f64 = 50.0;

/// Default share of built area for corridors, stairs and lifts.
pub const DEFAULT_SHARED_SPACE_PERCENTAGE: f64 = 20.0;

/// Default floor area per single-family house when a draft omits it.
pub const DEFAULT_HOUSE_SIZE_SQM: f64 = 100.0;

/// Construction quality tier driving the cost-per-area rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinishLevel {
    /// Minimal finishes, lowest rate
    Basic,
    /// Mid-range finishes
    #[default]
    Standard,
    /// Upgraded finishes, highest rate
    Improved,
}

impl FinishLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishLevel::Basic => "basic",
            FinishLevel::Standard => "standard",
            FinishLevel::Improved => "improved",
        }
    }
}

impl std::fmt::Display for FinishLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Income group a project targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeGroup {
    Low,
    LowerMiddle,
    #[default]
    Middle,
    Mixed,
}

/// Measurement unit for project land sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LandUnit {
    #[default]
    Sqm,
    Acres,
}

/// A land area paired with its unit of measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandSize {
    pub value: f64,
    #[serde(default)]
    pub unit: LandUnit,
}

impl LandSize {
    pub fn sqm(value: f64) -> Self {
        LandSize {
            value,
            unit: LandUnit::Sqm,
        }
    }

    pub fn acres(value: f64) -> Self {
        LandSize {
            value,
            unit: LandUnit::Acres,
        }
    }

    /// The area in square meters, converting from acres where needed.
    /// All engine calculations operate on square meters.
    pub fn as_sqm(&self) -> f64 {
        match self.unit {
            LandUnit::Sqm => self.value,
            LandUnit::Acres => self.value * SQM_PER_ACRE,
        }
    }
}

/// Budget envelope for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl BudgetRange {
    pub fn new(min: f64, max: f64, currency: impl Into<String>) -> Self {
        BudgetRange {
            min,
            max,
            currency: currency.into(),
        }
    }

    /// Check the envelope is well-formed (`min <= max`)
    pub fn validate(&self) -> HomesteadResult<()> {
        if self.min > self.max {
            return Err(HomesteadError::InvalidBudgetRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// City/country pair locating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// A housing development project: the land and budget envelope that
/// scenarios are evaluated against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub location: Location,
    pub land_size: LandSize,
    #[serde(default)]
    pub target_income_group: IncomeGroup,
    pub budget_range: BudgetRange,
    /// Project-level occupancy overrides; sits between scenario-level
    /// overrides and the regional defaults in the resolution chain
    #[serde(default)]
    pub occupancy_overrides: Option<OccupancyOverride>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Percentage split of apartment units by bedroom count.
/// Intended to sum to 100 but not enforced; the split absorbs drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitMix {
    pub one_bedroom: f64,
    pub two_bedroom: f64,
    pub three_bedroom: f64,
}

/// Unit counts by bedroom type after applying a `UnitMix`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBreakdown {
    pub one_bedroom: i64,
    pub two_bedroom: i64,
    pub three_bedroom: i64,
}

impl UnitMix {
    /// Split a unit total by this mix. One- and two-bedroom counts are
    /// rounded from their percentage shares; the three-bedroom count absorbs
    /// the remainder so the three counts always sum exactly to `total_units`.
    /// When the mix sums above 100 the absorbed share can go negative.
    pub fn split(&self, total_units: u64) -> UnitBreakdown {
        let total = total_units as f64;
        let one_bedroom = (total * (self.one_bedroom / 100.0)).round() as i64;
        let two_bedroom = (total * (self.two_bedroom / 100.0)).round() as i64;
        let three_bedroom = total_units as i64 - one_bedroom - two_bedroom;
        UnitBreakdown {
            one_bedroom,
            two_bedroom,
            three_bedroom,
        }
    }
}

/// Scenario-level flat infrastructure costs (not per-unit scaled)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InfrastructureCosts {
    pub water: f64,
    pub sewer: f64,
    pub roads: f64,
}

impl InfrastructureCosts {
    pub fn total(&self) -> f64 {
        self.water + self.sewer + self.roads
    }
}

/// Development type tag, used by drafts and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentType {
    #[default]
    Apartment,
    SingleFamily,
    Mixed,
}

impl DevelopmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentType::Apartment => "apartment",
            DevelopmentType::SingleFamily => "single-family",
            DevelopmentType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for DevelopmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout of a development scenario. A closed sum type: each variant
/// carries only the fields its development type needs, so the calculators
/// dispatch by exhaustive match instead of checking field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "project_type", rename_all = "kebab-case")]
pub enum Layout {
    Apartment {
        units_per_floor: u32,
        number_of_floors: u32,
        unit_mix: UnitMix,
        #[serde(default = "default_unit_size")]
        unit_size: f64,
        #[serde(default = "default_shared_space")]
        shared_space_percentage: f64,
    },
    SingleFamily {
        number_of_units: u32,
        #[serde(default = "default_house_size")]
        house_size: f64,
    },
    Mixed {
        apartment_units: u32,
        single_family_units: u32,
    },
}

fn default_unit_size() -> f64 {
    DEFAULT_UNIT_SIZE_SQM
}

fn default_shared_space() -> f64 {
    DEFAULT_SHARED_SPACE_PERCENTAGE
}

fn default_house_size() -> f64 {
    DEFAULT_HOUSE_SIZE_SQM
}

impl Layout {
    pub fn development_type(&self) -> DevelopmentType {
        match self {
            Layout::Apartment { .. } => DevelopmentType::Apartment,
            Layout::SingleFamily { .. } => DevelopmentType::SingleFamily,
            Layout::Mixed { .. } => DevelopmentType::Mixed,
        }
    }

    /// Total unit count for this layout
    pub fn total_units(&self) -> u64 {
        match self {
            Layout::Apartment {
                units_per_floor,
                number_of_floors,
                ..
            } => *units_per_floor as u64 * *number_of_floors as u64,
            Layout::SingleFamily {
                number_of_units, ..
            } => *number_of_units as u64,
            Layout::Mixed {
                apartment_units,
                single_family_units,
            } => *apartment_units as u64 + *single_family_units as u64,
        }
    }
}

/// A validated development scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub layout: Layout,
    /// Captured from the form for the caller's records; the construction
    /// rate used in the derivation comes from the assumptions table keyed
    /// by finish level
    #[serde(default)]
    pub construction_cost_per_sqm: Option<f64>,
    pub infrastructure_costs: InfrastructureCosts,
    #[serde(default)]
    pub finish_level: FinishLevel,
    /// Scenario-level occupancy overrides; highest priority in the chain
    #[serde(default)]
    pub custom_assumptions: Option<OccupancyOverride>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Scenario {
    /// Create a new scenario stamped with the current time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        layout: Layout,
        infrastructure_costs: InfrastructureCosts,
        finish_level: FinishLevel,
    ) -> Self {
        let now = Utc::now();
        Scenario {
            id: id.into(),
            name: name.into(),
            layout,
            construction_cost_per_sqm: None,
            infrastructure_costs,
            finish_level,
            custom_assumptions: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The untrusted form shape of a scenario: a development type tag plus
/// optional layout fields. `resolve` applies the required-field policy for
/// the tag and fills documented defaults, producing a validated `Scenario`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScenarioDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_type: DevelopmentType,
    #[serde(default)]
    pub units_per_floor: Option<u32>,
    #[serde(default)]
    pub number_of_floors: Option<u32>,
    #[serde(default)]
    pub unit_mix: Option<UnitMix>,
    #[serde(default)]
    pub unit_size: Option<f64>,
    #[serde(default)]
    pub shared_space_percentage: Option<f64>,
    #[serde(default)]
    pub number_of_units: Option<u32>,
    #[serde(default)]
    pub house_size: Option<f64>,
    #[serde(default)]
    pub apartment_units: Option<u32>,
    #[serde(default)]
    pub single_family_units: Option<u32>,
    #[serde(default)]
    pub construction_cost_per_sqm: Option<f64>,
    #[serde(default)]
    pub infrastructure_costs: InfrastructureCosts,
    #[serde(default)]
    pub finish_level: FinishLevel,
    #[serde(default)]
    pub custom_assumptions: Option<OccupancyOverride>,
}

fn require<T>(value: Option<T>, field: &'static str, kind: &'static str) -> HomesteadResult<T> {
    value.ok_or(HomesteadError::MissingField { field, kind })
}

fn require_positive(value: u32, field: &'static str, kind: &'static str) -> HomesteadResult<u32> {
    if value == 0 {
        return Err(HomesteadError::InvalidField {
            field,
            kind,
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

impl ScenarioDraft {
    /// Resolve the draft into a validated `Scenario`, failing fast with the
    /// first missing or invalid field required by the development type.
    /// Fields with documented defaults (`unit_size`,
    /// `shared_space_percentage`, `house_size`) may be omitted.
    pub fn resolve(self) -> HomesteadResult<Scenario> {
        let kind = self.project_type.as_str();

        let layout = match self.project_type {
            DevelopmentType::Apartment => Layout::Apartment {
                units_per_floor: require_positive(
                    require(self.units_per_floor, "units_per_floor", kind)?,
                    "units_per_floor",
                    kind,
                )?,
                number_of_floors: require_positive(
                    require(self.number_of_floors, "number_of_floors", kind)?,
                    "number_of_floors",
                    kind,
                )?,
                unit_mix: require(self.unit_mix, "unit_mix", kind)?,
                unit_size: self.unit_size.unwrap_or(DEFAULT_UNIT_SIZE_SQM),
                shared_space_percentage: self
                    .shared_space_percentage
                    .unwrap_or(DEFAULT_SHARED_SPACE_PERCENTAGE),
            },
            DevelopmentType::SingleFamily => Layout::SingleFamily {
                number_of_units: require_positive(
                    require(self.number_of_units, "number_of_units", kind)?,
                    "number_of_units",
                    kind,
                )?,
                house_size: self.house_size.unwrap_or(DEFAULT_HOUSE_SIZE_SQM),
            },
            DevelopmentType::Mixed => Layout::Mixed {
                apartment_units: require_positive(
                    require(self.apartment_units, "apartment_units", kind)?,
                    "apartment_units",
                    kind,
                )?,
                single_family_units: require_positive(
                    require(self.single_family_units, "single_family_units", kind)?,
                    "single_family_units",
                    kind,
                )?,
            },
        };

        for (field, value) in [
            ("infrastructure_costs.water", self.infrastructure_costs.water),
            ("infrastructure_costs.sewer", self.infrastructure_costs.sewer),
            ("infrastructure_costs.roads", self.infrastructure_costs.roads),
        ] {
            if value < 0.0 {
                return Err(HomesteadError::InvalidField {
                    field,
                    kind,
                    message: format!("must be non-negative, got {value}"),
                });
            }
        }

        let now = Utc::now();
        Ok(Scenario {
            id: self.id,
            name: self.name,
            layout,
            construction_cost_per_sqm: self.construction_cost_per_sqm,
            infrastructure_costs: self.infrastructure_costs,
            finish_level: self.finish_level,
            custom_assumptions: self.custom_assumptions,
            created_at: now,
            updated_at: now,
        })
    }
}

impl TryFrom<ScenarioDraft> for Scenario {
    type Error = HomesteadError;

    fn try_from(draft: ScenarioDraft) -> HomesteadResult<Scenario> {
        draft.resolve()
    }
}

/// Forecast horizon in years; only these three are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeHorizon {
    FiveYears,
    TenYears,
    TwentyYears,
}

impl TimeHorizon {
    pub fn years(&self) -> u32 {
        match self {
            TimeHorizon::FiveYears => 5,
            TimeHorizon::TenYears => 10,
            TimeHorizon::TwentyYears => 20,
        }
    }
}

impl TryFrom<u32> for TimeHorizon {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(TimeHorizon::FiveYears),
            10 => Ok(TimeHorizon::TenYears),
            20 => Ok(TimeHorizon::TwentyYears),
            other => Err(format!("time horizon must be 5, 10 or 20 years, got {other}")),
        }
    }
}

impl From<TimeHorizon> for u32 {
    fn from(horizon: TimeHorizon) -> u32 {
        horizon.years()
    }
}
