//! Closed-loop routes through places.
//!
//! A route starts at an origin, visits its stops in order and returns to the
//! origin.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Place, PlaceId, leg_distances, total_round_trip_distance};

/// An ordered loop `origin → stops → origin`.
///
/// # Examples
/// ```
/// use nearby_core::{Place, Route, lat_lon};
///
/// let origin = lat_lon(15.4909, 73.8278);
/// let miramar = Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069));
/// let route = Route::new(origin, vec![miramar]);
///
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.leg_distances().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    origin: Coord<f64>,
    stops: Vec<Place>,
}

impl Route {
    /// Construct a route from an origin and ordered stops.
    #[must_use]
    pub const fn new(origin: Coord<f64>, stops: Vec<Place>) -> Self {
        Self { origin, stops }
    }

    /// Construct a route with no stops.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::{Route, lat_lon};
    ///
    /// let route = Route::empty(lat_lon(15.4909, 73.8278));
    /// assert!(route.is_empty());
    /// assert_eq!(route.total_distance_km(), 0.0);
    /// ```
    #[must_use]
    pub const fn empty(origin: Coord<f64>) -> Self {
        Self::new(origin, Vec::new())
    }

    /// Start and end point of the loop.
    #[must_use]
    pub const fn origin(&self) -> Coord<f64> {
        self.origin
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Place] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether a stop with `id` is on the route.
    #[must_use]
    pub fn contains(&self, id: &PlaceId) -> bool {
        self.stops.iter().any(|stop| &stop.id == id)
    }

    /// Total round-trip distance in kilometres.
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        total_round_trip_distance(self.origin, &self.stops)
    }

    /// Per-leg distances in kilometres, ending with the return leg.
    #[must_use]
    pub fn leg_distances(&self) -> Vec<f64> {
        leg_distances(self.origin, &self.stops)
    }

    /// Remove the stop with `id`, keeping the order of the others.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::{Place, PlaceId, Route, lat_lon};
    ///
    /// let origin = lat_lon(15.4909, 73.8278);
    /// let mut route = Route::new(origin, vec![
    ///     Place::new(1_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069)),
    ///     Place::new(2_i64, "Fort Aguada", "Heritage", lat_lon(15.4920, 73.7737)),
    /// ]);
    /// let removed = route.remove_stop(&PlaceId::Number(1));
    /// assert_eq!(removed.map(|place| place.name), Some("Miramar Beach".to_owned()));
    /// assert_eq!(route.len(), 1);
    /// ```
    pub fn remove_stop(&mut self, id: &PlaceId) -> Option<Place> {
        let index = self.stops.iter().position(|stop| &stop.id == id)?;
        Some(self.stops.remove(index))
    }

    /// Split the route into its origin and stops.
    #[must_use]
    pub fn into_parts(self) -> (Coord<f64>, Vec<Place>) {
        (self.origin, self.stops)
    }
}
