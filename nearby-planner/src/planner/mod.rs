//! `GreedyPlanner` implementation of the [`Planner`] seam.

use std::time::Instant;

use nearby_core::{
    Diagnostics, PackageRequest, PackageResponse, Place, PlaceStore, PlanError, Planner, Route,
};

use crate::{admit_within_budget, eligible_candidates};

/// Planner that runs [`plan_route`](crate::plan_route) over a place store.
///
/// # Examples
/// ```
/// use nearby_core::{PackageRequest, PackageTier, Place, Planner, lat_lon};
/// use nearby_planner::GreedyPlanner;
///
/// let places = vec![Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069))];
/// let planner = GreedyPlanner::new(places);
/// let request = PackageRequest::for_tier(lat_lon(15.4909, 73.8278), PackageTier::FourHours);
///
/// let response = planner.plan(&request).expect("valid request");
/// assert_eq!(response.route.len(), 1);
/// assert!(response.total_km <= request.budget_km);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<S>
where
    S: PlaceStore,
{
    store: S,
}

impl<S> GreedyPlanner<S>
where
    S: PlaceStore,
{
    /// Construct a planner over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Planner for GreedyPlanner<S>
where
    S: PlaceStore + Send + Sync,
{
    fn plan(&self, request: &PackageRequest) -> Result<PackageResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let pool = eligible_candidates(
            request.origin,
            self.store.places(),
            request.budget_km,
            &request.excluded,
        );
        let candidates_evaluated = u64::try_from(pool.len()).unwrap_or(u64::MAX);
        let stops: Vec<Place> = admit_within_budget(request.origin, pool, request.budget_km)
            .into_iter()
            .cloned()
            .collect();

        let route = Route::new(request.origin, stops);
        let total_km = route.total_distance_km();
        log::debug!(
            "planned {} stops covering {total_km} km of a {} km budget",
            route.len(),
            request.budget_km
        );

        Ok(PackageResponse {
            route,
            total_km,
            diagnostics: Diagnostics {
                plan_time: started_at.elapsed(),
                candidates_evaluated,
            },
        })
    }
}

#[cfg(test)]
mod tests;
