//! Manual edits to a planned package.

use nearby_core::{Place, Route};

use crate::nearest_neighbor_order;

/// Add `place` to `route` and re-order every stop from the route origin.
///
/// The new stop is appended and the whole route is passed back through
/// [`nearest_neighbor_order`], so the result no longer depends on the order
/// stops were added in. Adding a place already on the route returns it
/// unchanged. Budgets are not enforced here; callers check
/// [`is_over_budget`](nearby_core::is_over_budget) on the result.
///
/// # Examples
/// ```
/// use nearby_core::{Place, Route, lat_lon};
/// use nearby_planner::add_stop;
///
/// let origin = lat_lon(15.4909, 73.8278);
/// let aguada = Place::new(4_i64, "Fort Aguada", "Heritage", lat_lon(15.4920, 73.7737));
/// let miramar = Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069));
///
/// let route = add_stop(Route::new(origin, vec![aguada]), miramar);
/// let names: Vec<&str> = route.stops().iter().map(|stop| stop.name.as_str()).collect();
/// assert_eq!(names, ["Miramar Beach", "Fort Aguada"]);
/// ```
#[must_use]
pub fn add_stop(route: Route, place: Place) -> Route {
    if route.contains(&place.id) {
        log::debug!("place {} is already on the route", place.id);
        return route;
    }
    let (origin, mut stops) = route.into_parts();
    stops.push(place);
    let ordered: Vec<Place> = nearest_neighbor_order(origin, &stops)
        .into_iter()
        .cloned()
        .collect();
    Route::new(origin, ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearby_core::test_support::{north_of, place};
    use nearby_core::{PlaceId, lat_lon};
    use rstest::rstest;

    #[rstest]
    fn adding_to_empty_route_gives_single_stop() {
        let origin = lat_lon(15.0, 74.0);
        let route = add_stop(Route::empty(origin), place(1, "Beach", north_of(origin, 3.0)));
        assert_eq!(route.len(), 1);
        assert_eq!(route.origin(), origin);
    }

    #[rstest]
    fn duplicate_is_ignored() {
        let origin = lat_lon(15.0, 74.0);
        let stop = place(1, "Beach", north_of(origin, 3.0));
        let route = add_stop(Route::new(origin, vec![stop.clone()]), stop);
        assert_eq!(route.len(), 1);
    }

    #[rstest]
    fn new_stop_is_slotted_by_proximity() {
        let origin = lat_lon(15.0, 74.0);
        let route = Route::new(
            origin,
            vec![
                place(1, "Beach", north_of(origin, 2.0)),
                place(3, "Beach", north_of(origin, 9.0)),
            ],
        );
        let updated = add_stop(route, place(2, "Heritage", north_of(origin, 5.0)));
        let ids: Vec<&PlaceId> = updated.stops().iter().map(|stop| &stop.id).collect();
        assert_eq!(
            ids,
            vec![&PlaceId::Number(1), &PlaceId::Number(2), &PlaceId::Number(3)]
        );
    }
}
