//! Budget-constrained route planning.

use geo::Coord;
use nearby_core::{CategoryExclusionSet, Place, distance_km};

use crate::nearest::nearest_in_pool;

/// Places that may appear in a plan for `budget_km`.
///
/// Drops places in an excluded category, then drops places whose one-way
/// distance from `origin` is not strictly below the budget. A place exactly
/// `budget_km` away is dropped. Catalog order is preserved.
#[must_use]
pub fn eligible_candidates<'a>(
    origin: Coord<f64>,
    candidates: &'a [Place],
    budget_km: f64,
    excluded: &CategoryExclusionSet,
) -> Vec<&'a Place> {
    let eligible: Vec<&Place> = candidates
        .iter()
        .filter(|place| !excluded.contains(&place.category))
        .filter(|place| distance_km(origin, place.location) < budget_km)
        .collect();
    log::debug!(
        "{} of {} places eligible for a {budget_km} km budget",
        eligible.len(),
        candidates.len()
    );
    eligible
}

/// Greedily grow a loop from `origin` without exceeding `budget_km`.
///
/// Each step takes the pool entry nearest to the last stop and admits it when
/// the round trip with that entry appended stays within budget. The first
/// entry that does not fit ends planning; farther entries are never tried.
///
/// The travelled distance is accumulated leg by leg from the origin, so the
/// admission total equals
/// [`total_round_trip_distance`](nearby_core::total_round_trip_distance) of
/// the extended route.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "admission compares summed leg distances with the budget"
)]
pub fn admit_within_budget<'a>(
    origin: Coord<f64>,
    mut pool: Vec<&'a Place>,
    budget_km: f64,
) -> Vec<&'a Place> {
    let mut route = Vec::new();
    let mut current = origin;
    let mut travelled = 0.0;
    while let Some((index, leg)) = nearest_in_pool(current, &pool) {
        let Some(candidate) = pool.get(index).copied() else {
            break;
        };
        let round_trip = travelled + leg + distance_km(candidate.location, origin);
        if round_trip <= budget_km {
            pool.remove(index);
            travelled += leg;
            current = candidate.location;
            route.push(candidate);
        } else {
            log::debug!(
                "stopping at place {}: round trip {round_trip} km exceeds {budget_km} km",
                candidate.id
            );
            break;
        }
    }
    route
}

/// Plan a closed loop from `origin` within `budget_km`.
///
/// Filters out excluded categories, prunes places at or beyond the budget
/// one-way, then admits nearest neighbours while the round trip fits. An
/// empty result means nothing fits.
///
/// # Examples
/// ```
/// use nearby_core::{CategoryExclusionSet, Place, lat_lon, total_round_trip_distance};
/// use nearby_planner::plan_route;
///
/// let origin = lat_lon(15.4909, 73.8278);
/// let places = vec![
///     Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069)),
///     Place::new(5_i64, "Tito's Lane", "Nightlife", lat_lon(15.5560, 73.7530)),
/// ];
/// let excluded: CategoryExclusionSet = ["Nightlife"].into_iter().collect();
///
/// let route = plan_route(origin, &places, 40.0, &excluded);
/// assert_eq!(route.len(), 1);
/// assert!(total_round_trip_distance(origin, &route) <= 40.0);
/// ```
#[must_use]
pub fn plan_route<'a>(
    origin: Coord<f64>,
    candidates: &'a [Place],
    budget_km: f64,
    excluded: &CategoryExclusionSet,
) -> Vec<&'a Place> {
    let pool = eligible_candidates(origin, candidates, budget_km, excluded);
    if pool.is_empty() {
        return Vec::new();
    }
    admit_within_budget(origin, pool, budget_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearby_core::test_support::{north_of, place};
    use nearby_core::{PlaceId, lat_lon, total_round_trip_distance};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> Coord<f64> {
        lat_lon(15.0, 74.0)
    }

    fn ids(route: &[&Place]) -> Vec<PlaceId> {
        route.iter().map(|stop| stop.id.clone()).collect()
    }

    #[rstest]
    fn admits_a_then_b_and_prunes_c(origin: Coord<f64>) {
        let candidates = vec![
            place(1, "Beach", north_of(origin, 5.0)),
            place(2, "Beach", north_of(origin, 8.0)),
            place(3, "Beach", north_of(origin, 50.0)),
        ];
        let route = plan_route(origin, &candidates, 20.0, &CategoryExclusionSet::new());
        assert_eq!(ids(&route), vec![PlaceId::Number(1), PlaceId::Number(2)]);
        assert_eq!(total_round_trip_distance(origin, &route), 16.0);
    }

    #[rstest]
    fn excluded_categories_yield_empty_route(origin: Coord<f64>) {
        let candidates = vec![
            place(1, "Nightlife", north_of(origin, 1.0)),
            place(2, "Nightlife", north_of(origin, 2.0)),
        ];
        let excluded: CategoryExclusionSet = ["Nightlife"].into_iter().collect();
        assert!(plan_route(origin, &candidates, 40.0, &excluded).is_empty());
    }

    #[rstest]
    fn candidate_exactly_at_budget_is_pruned(origin: Coord<f64>) {
        let candidates = vec![place(1, "Beach", north_of(origin, 20.0))];
        let eligible = eligible_candidates(origin, &candidates, 20.0, &CategoryExclusionSet::new());
        assert!(eligible.is_empty());
    }

    #[rstest]
    fn first_infeasible_candidate_ends_planning(origin: Coord<f64>) {
        // From A the nearest place is B, which breaks the budget. C would have
        // fitted but is never tried.
        let candidates = vec![
            place(1, "Beach", north_of(origin, 4.0)),
            place(2, "Beach", north_of(origin, 11.0)),
            place(3, "Beach", north_of(origin, -4.0)),
        ];
        let route = plan_route(origin, &candidates, 21.0, &CategoryExclusionSet::new());
        assert_eq!(ids(&route), vec![PlaceId::Number(1)]);
    }

    #[rstest]
    fn zero_budget_plans_nothing(origin: Coord<f64>) {
        let candidates = vec![place(1, "Beach", origin)];
        assert!(plan_route(origin, &candidates, 0.0, &CategoryExclusionSet::new()).is_empty());
    }

    #[rstest]
    fn round_trip_equal_to_budget_is_admitted(origin: Coord<f64>) {
        let candidates = vec![place(1, "Beach", north_of(origin, 10.0))];
        let route = plan_route(origin, &candidates, 20.0, &CategoryExclusionSet::new());
        assert_eq!(route.len(), 1);
    }

    #[rstest]
    fn input_is_not_mutated(origin: Coord<f64>) {
        let candidates = vec![
            place(2, "Beach", north_of(origin, 8.0)),
            place(1, "Beach", north_of(origin, 5.0)),
        ];
        let before = candidates.clone();
        let _route = plan_route(origin, &candidates, 20.0, &CategoryExclusionSet::new());
        assert_eq!(candidates, before);
    }
}
