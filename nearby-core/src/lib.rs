//! Core domain types for the Nearby engine.
//!
//! The crate owns the read-only data model (places, categories, routes), the
//! distance oracle used by every other component, route metrics, package tiers
//! and the [`Planner`] seam implemented by route planners. Everything here is
//! pure computation over caller-supplied data; no call retains state.
//!
//! # Examples
//!
//! ```
//! use nearby_core::{Place, distance_km, lat_lon, total_round_trip_distance};
//!
//! let origin = lat_lon(15.4909, 73.8278);
//! let fort = Place::new(1_i64, "Fort Aguada", "Heritage", lat_lon(15.4920, 73.7737));
//!
//! let one_way = distance_km(origin, fort.location);
//! let round_trip = total_round_trip_distance(origin, &[fort]);
//! assert!((round_trip - 2.0 * one_way).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod category;
pub mod distance;
pub mod favorites;
pub mod metrics;
pub mod package;
pub mod place;
pub mod planner;
pub mod route;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{CatalogError, PlaceCatalog, PlaceDistance};
pub use category::{Category, CategoryExclusionSet};
pub use distance::{EARTH_RADIUS_KM, distance_km, format_distance, lat_lon};
pub use favorites::FavoriteSet;
pub use metrics::{
    AVERAGE_SPEED_KMH, REGION_CENTER, REGION_RADIUS_KM, TAXI_BASE_FARE_INR, TAXI_RATE_PER_KM_INR,
    TAXI_SPEED_KMH, budget_usage_percent, estimated_taxi_fare, estimated_travel_hours,
    estimated_travel_minutes, is_outside_region, is_over_budget, leg_distances,
    total_round_trip_distance,
};
pub use package::{PackageTier, PackageTierParseError};
pub use place::{Located, Place, PlaceId};
pub use planner::{
    Diagnostics, PackageRequest, PackageRequestValidationError, PackageResponse, PlanError,
    Planner,
};
pub use route::Route;
pub use store::PlaceStore;
