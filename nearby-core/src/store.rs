//! Read-only access to the place catalog.
//!
//! Planners are generic over [`PlaceStore`] so callers can hand them an
//! in-memory catalog, a fixture or anything else that can lend a slice of
//! places for the duration of a call.

use crate::Place;

/// Source of candidate places.
///
/// # Examples
/// ```
/// use nearby_core::{Place, PlaceStore, lat_lon};
///
/// struct Fixed(Vec<Place>);
///
/// impl PlaceStore for Fixed {
///     fn places(&self) -> &[Place] {
///         &self.0
///     }
/// }
///
/// let store = Fixed(vec![Place::new(1_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069))]);
/// assert_eq!(store.places().len(), 1);
/// ```
pub trait PlaceStore {
    /// All places known to the store, in catalog order.
    fn places(&self) -> &[Place];
}

impl PlaceStore for Vec<Place> {
    fn places(&self) -> &[Place] {
        self
    }
}
