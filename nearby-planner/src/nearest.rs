//! Unconstrained nearest-neighbour ordering.

use geo::Coord;
use nearby_core::{Located, distance_km};

/// Index and distance of the pool entry closest to `from`.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the entry that comes first in the pool.
pub(crate) fn nearest_in_pool<T: Located>(from: Coord<f64>, pool: &[T]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let distance = distance_km(from, candidate.location());
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best
}

/// Order every candidate by repeatedly visiting the closest unvisited one.
///
/// The tour starts at `origin`; each step scans the remaining candidates and
/// moves to the nearest. Removing a visited candidate keeps the relative order
/// of the rest, which decides ties. The caller's slice is left untouched.
///
/// # Examples
/// ```
/// use nearby_core::lat_lon;
/// use nearby_planner::nearest_neighbor_order;
///
/// let origin = lat_lon(15.0, 74.0);
/// let far = lat_lon(15.2, 74.0);
/// let near = lat_lon(15.1, 74.0);
/// let stops = [far, near];
/// let order = nearest_neighbor_order(origin, &stops);
/// assert_eq!(order, vec![&near, &far]);
/// ```
#[must_use]
pub fn nearest_neighbor_order<T: Located>(origin: Coord<f64>, candidates: &[T]) -> Vec<&T> {
    let mut pool: Vec<&T> = candidates.iter().collect();
    let mut order = Vec::with_capacity(pool.len());
    let mut current = origin;
    while let Some((index, _)) = nearest_in_pool(current, &pool) {
        let next = pool.remove(index);
        current = next.location();
        order.push(next);
    }
    order
}
