//! Homestead - housing development planning and cost estimation engine
//!
//! Homestead turns a development configuration (land, layout, regional
//! cost/consumption assumptions) into projected outcomes: unit counts,
//! population, built area, cost and budget conformance, density and
//! infrastructure classifications, multi-year demand forecasts, and full
//! specifications for single-home builds.
//!
//! The engine is three pure calculators over immutable value records; the
//! surrounding application (forms, persistence, visualization) supplies
//! inputs and consumes the result records.

pub mod assumptions;
pub mod classify;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;

// Re-exports for convenience
pub use assumptions::{
    resolve_occupancy, AssumptionsProvider, CostAssumptions, CountryData, CountryDataProvider,
    OccupancyAssumptions, OccupancyOverride, RegionalTable, TableWarning,
};
pub use classify::{BudgetStatus, DensityClass, HomeBudgetStatus, InfrastructureStatus};
pub use engine::{
    compute_for_project, compute_home_specification, compute_scenario_results, project_demand,
    HomeBuilderConfig, HomeFeature, HomeSpecification, HomeStyle, ScenarioResults, SizePreference,
    YearProjection,
};
pub use error::{HomesteadError, HomesteadResult};
pub use models::{
    BudgetRange, DevelopmentType, FinishLevel, LandSize, Layout, Project, Scenario, ScenarioDraft,
    TimeHorizon, UnitMix,
};
