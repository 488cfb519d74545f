//! Facade crate for the Nearby day-trip engine.
//!
//! This crate re-exports the core domain types and exposes the greedy route
//! planner behind the `planner` feature.
//!
//! ```
//! use nearby_engine::{GreedyPlanner, PackageRequest, PackageTier, Place, Planner, lat_lon};
//!
//! let planner = GreedyPlanner::new(vec![
//!     Place::new(4_i64, "Fort Aguada", "Heritage", lat_lon(15.4920, 73.7737)),
//! ]);
//! let request = PackageRequest::for_tier(lat_lon(15.4909, 73.8278), PackageTier::FourHours);
//! let response = planner.plan(&request).expect("valid request");
//! assert_eq!(response.route.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use nearby_core::{
    CatalogError, Category, CategoryExclusionSet, Diagnostics, FavoriteSet, Located,
    PackageRequest, PackageRequestValidationError, PackageResponse, PackageTier,
    PackageTierParseError, Place, PlaceCatalog, PlaceDistance, PlaceId, PlaceStore, PlanError,
    Planner, Route, budget_usage_percent, distance_km, estimated_taxi_fare,
    estimated_travel_hours, estimated_travel_minutes, format_distance, is_outside_region,
    is_over_budget, lat_lon, leg_distances, total_round_trip_distance,
};

#[cfg(feature = "planner")]
pub use nearby_planner::{GreedyPlanner, add_stop, nearest_neighbor_order, plan_route};
