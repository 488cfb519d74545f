//! Aggregate metrics over closed-loop routes.
//!
//! Every function folds the route through [`distance_km`], so totals inherit
//! its 0.1 km rounding per leg.

use geo::Coord;

use crate::{Located, distance_km, lat_lon};

/// Average travel speed assumed by [`estimated_travel_hours`], in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 20.0;

/// Taxi speed assumed by [`estimated_travel_minutes`], in km/h.
pub const TAXI_SPEED_KMH: f64 = 30.0;

/// Flag-fall charged by [`estimated_taxi_fare`], in rupees.
pub const TAXI_BASE_FARE_INR: f64 = 100.0;

/// Per-kilometre rate charged by [`estimated_taxi_fare`], in rupees.
pub const TAXI_RATE_PER_KM_INR: f64 = 20.0;

/// Centre of the serviced region (Panaji).
pub const REGION_CENTER: Coord<f64> = lat_lon(15.4909, 73.8278);

/// Radius around [`REGION_CENTER`] beyond which a location is out of region.
pub const REGION_RADIUS_KM: f64 = 100.0;

/// Total length of `origin → route[0] → … → route[last] → origin`.
///
/// An empty route has length zero. Legs are summed left to right starting
/// from the origin, which the planner's admission test relies on.
///
/// # Examples
/// ```
/// use nearby_core::{lat_lon, total_round_trip_distance};
///
/// let origin = lat_lon(0.0, 0.0);
/// let stop = lat_lon(1.0, 0.0);
/// assert_eq!(total_round_trip_distance(origin, &[stop]), 222.4);
/// assert_eq!(total_round_trip_distance::<geo::Coord>(origin, &[]), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "summing leg distances"
)]
pub fn total_round_trip_distance<T: Located>(origin: Coord<f64>, route: &[T]) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    let mut previous = origin;
    for stop in route {
        let next = stop.location();
        total += distance_km(previous, next);
        previous = next;
    }
    total + distance_km(previous, origin)
}

/// Distances of each leg of the loop, ending with the return leg.
///
/// An empty route has no legs.
///
/// # Examples
/// ```
/// use nearby_core::{lat_lon, leg_distances};
///
/// let origin = lat_lon(0.0, 0.0);
/// let legs = leg_distances(origin, &[lat_lon(1.0, 0.0), lat_lon(2.0, 0.0)]);
/// assert_eq!(legs, vec![111.2, 111.2, 222.4]);
/// ```
#[must_use]
pub fn leg_distances<T: Located>(origin: Coord<f64>, route: &[T]) -> Vec<f64> {
    if route.is_empty() {
        return Vec::new();
    }
    let waypoints: Vec<Coord<f64>> = std::iter::once(origin)
        .chain(route.iter().map(Located::location))
        .chain(std::iter::once(origin))
        .collect();
    waypoints
        .iter()
        .zip(waypoints.iter().skip(1))
        .map(|(from, to)| distance_km(*from, *to))
        .collect()
}

/// Whole hours needed to drive `total_km` at [`AVERAGE_SPEED_KMH`].
///
/// # Examples
/// ```
/// use nearby_core::estimated_travel_hours;
///
/// assert_eq!(estimated_travel_hours(0.0), 0.0);
/// assert_eq!(estimated_travel_hours(21.0), 2.0);
/// assert_eq!(estimated_travel_hours(40.0), 2.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting distance to time"
)]
pub fn estimated_travel_hours(total_km: f64) -> f64 {
    (total_km / AVERAGE_SPEED_KMH).ceil()
}

/// Minutes a taxi needs for `distance_km` at [`TAXI_SPEED_KMH`], rounded.
///
/// # Examples
/// ```
/// use nearby_core::estimated_travel_minutes;
///
/// assert_eq!(estimated_travel_minutes(15.0), 30.0);
/// assert_eq!(estimated_travel_minutes(2.4), 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting distance to time"
)]
pub fn estimated_travel_minutes(distance_km: f64) -> f64 {
    (distance_km / TAXI_SPEED_KMH * 60.0).round()
}

/// Taxi fare in rupees for `distance_km`, rounded to the nearest rupee.
///
/// # Examples
/// ```
/// use nearby_core::estimated_taxi_fare;
///
/// assert_eq!(estimated_taxi_fare(0.0), 100.0);
/// assert_eq!(estimated_taxi_fare(10.0), 300.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "linear fare model"
)]
pub fn estimated_taxi_fare(distance_km: f64) -> f64 {
    (TAXI_BASE_FARE_INR + distance_km * TAXI_RATE_PER_KM_INR).round()
}

/// Whether `location` lies more than [`REGION_RADIUS_KM`] from
/// [`REGION_CENTER`].
///
/// # Examples
/// ```
/// use nearby_core::{is_outside_region, lat_lon};
///
/// assert!(!is_outside_region(lat_lon(15.0100, 74.0232)));
/// assert!(is_outside_region(lat_lon(19.0760, 72.8777)));
/// ```
#[must_use]
pub fn is_outside_region(location: Coord<f64>) -> bool {
    exceeds_region_radius(distance_km(REGION_CENTER, location))
}

/// A distance exactly on the radius still counts as inside.
const fn exceeds_region_radius(distance_km: f64) -> bool {
    distance_km > REGION_RADIUS_KM
}

/// Whether a route of `total_km` exceeds `budget_km`.
#[must_use]
pub const fn is_over_budget(total_km: f64, budget_km: f64) -> bool {
    total_km > budget_km
}

/// Share of the budget used, as a percentage capped at 100.
///
/// Non-positive budgets report zero.
///
/// # Examples
/// ```
/// use nearby_core::budget_usage_percent;
///
/// assert_eq!(budget_usage_percent(20.0, 40.0), 50.0);
/// assert_eq!(budget_usage_percent(60.0, 40.0), 100.0);
/// assert_eq!(budget_usage_percent(10.0, 0.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentage of the distance budget"
)]
pub const fn budget_usage_percent(total_km: f64, budget_km: f64) -> f64 {
    if budget_km <= 0.0 {
        return 0.0;
    }
    (total_km / budget_km * 100.0).min(100.0)
}
