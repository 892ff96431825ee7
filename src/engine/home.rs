//! Home specification calculator
//!
//! Produces a detailed build specification for a single standalone home:
//! room breakdown, cost breakdown, operating-cost estimates, timeline and
//! budget utilization. Total over its inputs; absent config fields fall
//! back to fixed defaults.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assumptions::CountryData;
use crate::classify::HomeBudgetStatus;
use crate::models::FinishLevel;

/// Flat charge for the electricity connection of a new build.
pub const ELECTRICITY_CONNECTION_COST: f64 = 5_000.0;

/// Road frontage length billed at the country's per-meter rate.
pub const ROAD_FRONTAGE_METERS: f64 = 50.0;

/// Assumed household water usage in liters per day.
pub const DAILY_WATER_USAGE_LITERS: f64 = 300.0;

/// Water tariff per liter.
pub const WATER_COST_PER_LITER: f64 = 0.003;

/// Monthly electricity cost per square meter of floor area.
pub const MONTHLY_ELECTRICITY_COST_PER_SQM: f64 = 2.0;

/// Annual maintenance as a fraction of building cost.
pub const ANNUAL_MAINTENANCE_RATE: f64 = 0.025;

/// Annual property tax as a fraction of total cost.
pub const PROPERTY_TAX_RATE: f64 = 0.007;

/// Annual insurance as a fraction of total cost.
pub const INSURANCE_RATE: f64 = 0.004;

/// Construction pace assumed for the timeline estimate.
pub const CONSTRUCTION_PACE_SQM_PER_MONTH: f64 = 20.0;

/// Architectural style choice; drives the cost multiplier and which
/// country rate tier the base cost is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomeStyle {
    Basic,
    #[default]
    Standard,
    Modern,
    Traditional,
    Luxury,
}

impl HomeStyle {
    /// Multiplier applied to the base construction rate
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            HomeStyle::Basic => 1.0,
            HomeStyle::Standard => 1.5,
            HomeStyle::Modern => 1.8,
            HomeStyle::Traditional => 1.3,
            HomeStyle::Luxury => 2.5,
        }
    }

    /// Which country rate tier the base cost is selected from: basic maps
    /// to the basic rate, luxury to the improved rate, everything else to
    /// standard.
    pub fn rate_tier(&self) -> FinishLevel {
        match self {
            HomeStyle::Basic => FinishLevel::Basic,
            HomeStyle::Luxury => FinishLevel::Improved,
            _ => FinishLevel::Standard,
        }
    }
}

/// Overall size class of the home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizePreference {
    Small,
    #[default]
    Medium,
    Large,
    Spacious,
}

impl SizePreference {
    /// Total floor area for this size class
    pub fn floor_area_sqm(&self) -> f64 {
        match self {
            SizePreference::Small => 60.0,
            SizePreference::Medium => 100.0,
            SizePreference::Large => 150.0,
            SizePreference::Spacious => 200.0,
        }
    }

    pub fn bedrooms(&self) -> u32 {
        match self {
            SizePreference::Small => 1,
            SizePreference::Medium | SizePreference::Large => 2,
            SizePreference::Spacious => 3,
        }
    }

    pub fn bathrooms(&self) -> u32 {
        match self {
            SizePreference::Small => 1,
            SizePreference::Medium | SizePreference::Large => 2,
            SizePreference::Spacious => 3,
        }
    }
}

/// Optional premium features
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeFeature {
    SolarPanels,
    SmartHome,
    AirConditioning,
    SwimmingPool,
    Garage,
    Garden,
}

impl HomeFeature {
    pub fn cost(&self) -> f64 {
        match self {
            HomeFeature::SolarPanels => 8_000.0,
            HomeFeature::SmartHome => 5_000.0,
            HomeFeature::AirConditioning => 6_000.0,
            HomeFeature::SwimmingPool => 25_000.0,
            HomeFeature::Garage => 12_000.0,
            HomeFeature::Garden => 4_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeFeature::SolarPanels => "Solar Panels",
            HomeFeature::SmartHome => "Smart Home",
            HomeFeature::AirConditioning => "Air Conditioning",
            HomeFeature::SwimmingPool => "Swimming Pool",
            HomeFeature::Garage => "Garage",
            HomeFeature::Garden => "Garden",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HomeFeature::SolarPanels => "Rooftop photovoltaic system with inverter",
            HomeFeature::SmartHome => "Networked lighting, locks and climate control",
            HomeFeature::AirConditioning => "Ducted cooling for all living areas",
            HomeFeature::SwimmingPool => "In-ground pool with filtration plant",
            HomeFeature::Garage => "Enclosed single-vehicle garage",
            HomeFeature::Garden => "Landscaped garden with irrigation points",
        }
    }
}

/// Configuration for a single-home build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeBuilderConfig {
    #[serde(default)]
    pub country: String,
    pub country_code: String,
    #[serde(default = "default_land_size")]
    pub land_size: f64,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default)]
    pub style: HomeStyle,
    #[serde(default)]
    pub size_preference: SizePreference,
    #[serde(default)]
    pub features: BTreeSet<HomeFeature>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_land_size() -> f64 {
    500.0
}

fn default_budget() -> f64 {
    50_000.0
}

impl Default for HomeBuilderConfig {
    fn default() -> Self {
        let now = Utc::now();
        HomeBuilderConfig {
            country: "Kenya".to_string(),
            country_code: "KE".to_string(),
            land_size: default_land_size(),
            budget: default_budget(),
            style: HomeStyle::default(),
            size_preference: SizePreference::default(),
            features: BTreeSet::from([HomeFeature::Garden]),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Named room area within the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomArea {
    pub name: String,
    pub area_sqm: f64,
    pub description: String,
}

/// One priced feature included in the build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub feature: HomeFeature,
    pub cost: f64,
    pub description: String,
}

/// Fixed floor-plan shares; they sum to 100% of the floor area.
const ROOM_PLAN: &[(&str, f64, &str)] = &[
    ("Master bedroom", 0.15, "Primary bedroom with wardrobe space"),
    ("Bedroom 2", 0.12, "Second bedroom or guest room"),
    ("Bedroom 3", 0.12, "Third bedroom, study or nursery"),
    ("Living room", 0.25, "Open living and dining space"),
    ("Kitchen", 0.12, "Fitted kitchen with pantry"),
    ("Bathrooms", 0.08, "Combined bathroom and toilet areas"),
    ("Hallways", 0.16, "Circulation, entry and storage"),
];

/// Full specification for a single-home build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSpecification {
    /// Square meters
    pub total_building_area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub rooms: Vec<RoomArea>,
    pub building_cost: f64,
    /// Style-adjusted construction rate per square meter
    pub cost_per_sqm: f64,
    pub infrastructure_cost: f64,
    pub features_cost: f64,
    pub feature_items: Vec<FeatureItem>,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub annual_maintenance_cost: f64,
    pub monthly_utilities_cost: f64,
    pub property_tax_annual: f64,
    pub insurance_annual: f64,
    pub estimated_timeline_months: u32,
    /// `budget - total_cost`; negative means over budget
    pub remaining_budget: f64,
    pub percentage_used: f64,
}

impl HomeSpecification {
    /// How comfortably the build fits its budget
    pub fn budget_status(&self) -> HomeBudgetStatus {
        HomeBudgetStatus::from_percentage_used(self.percentage_used)
    }

    /// Building footprint as a percentage of the plot
    pub fn land_coverage_percentage(&self, land_size_sqm: f64) -> f64 {
        self.total_building_area / land_size_sqm * 100.0
    }

    /// Unbuilt share of the plot
    pub fn green_space_percentage(&self, land_size_sqm: f64) -> f64 {
        100.0 - self.land_coverage_percentage(land_size_sqm)
    }
}

/// Compute the full specification for a home build configuration against a
/// country's cost data.
pub fn compute_home_specification(
    config: &HomeBuilderConfig,
    country: &CountryData,
) -> HomeSpecification {
    let base_rate = country.construction_costs.rate_for(config.style.rate_tier());
    let cost_per_sqm = base_rate * config.style.cost_multiplier();

    let total_building_area = config.size_preference.floor_area_sqm();
    let rooms = ROOM_PLAN
        .iter()
        .map(|&(name, share, description)| RoomArea {
            name: name.to_string(),
            area_sqm: total_building_area * share,
            description: description.to_string(),
        })
        .collect();

    let building_cost = (total_building_area * cost_per_sqm).round();
    let labor_cost = (building_cost * country.labor_cost_percentage / 100.0).round();

    let infrastructure_cost = country.water_per_connection
        + country.sewer_per_connection
        + country.roads_per_meter * ROAD_FRONTAGE_METERS
        + ELECTRICITY_CONNECTION_COST;

    let feature_items: Vec<FeatureItem> = config
        .features
        .iter()
        .map(|&feature| FeatureItem {
            feature,
            cost: feature.cost(),
            description: feature.description().to_string(),
        })
        .collect();
    let features_cost: f64 = feature_items.iter().map(|item| item.cost).sum();

    let total_cost = building_cost + labor_cost + infrastructure_cost + features_cost;

    let annual_maintenance_cost = (building_cost * ANNUAL_MAINTENANCE_RATE).round();
    let water_monthly = DAILY_WATER_USAGE_LITERS * 30.0 * WATER_COST_PER_LITER;
    let electricity_monthly = total_building_area * MONTHLY_ELECTRICITY_COST_PER_SQM;
    let monthly_utilities_cost = (water_monthly + electricity_monthly).round();
    let property_tax_annual = (total_cost * PROPERTY_TAX_RATE).round();
    let insurance_annual = (total_cost * INSURANCE_RATE).round();

    let estimated_timeline_months =
        (total_building_area / CONSTRUCTION_PACE_SQM_PER_MONTH).ceil() as u32;

    let remaining_budget = config.budget - total_cost;
    let percentage_used = total_cost / config.budget * 100.0;

    HomeSpecification {
        total_building_area,
        bedrooms: config.size_preference.bedrooms(),
        bathrooms: config.size_preference.bathrooms(),
        rooms,
        building_cost,
        cost_per_sqm,
        infrastructure_cost,
        features_cost,
        feature_items,
        labor_cost,
        total_cost,
        annual_maintenance_cost,
        monthly_utilities_cost,
        property_tax_annual,
        insurance_annual,
        estimated_timeline_months,
        remaining_budget,
        percentage_used,
    }
}
