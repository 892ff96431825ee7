//! The calculation engine: three independent, stateless calculators.
//!
//! Each calculator is a pure function over immutable inputs. Calls are
//! referentially transparent and may run concurrently with no ordering
//! dependency; there is nothing to cancel because nothing suspends.

pub mod forecast;
pub mod home;
pub mod scenario;

pub use forecast::{project_demand, YearProjection};
pub use home::{
    compute_home_specification, FeatureItem, HomeBuilderConfig, HomeFeature, HomeSpecification,
    HomeStyle, RoomArea, SizePreference,
};
pub use scenario::{compute_for_project, compute_scenario_results, ScenarioResults};
