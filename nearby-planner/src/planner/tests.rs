//! Tests for the `GreedyPlanner`.

use super::*;
use nearby_core::test_support::{PANAJI, goa_catalog, north_of, place};
use nearby_core::{PackageRequestValidationError, PackageTier, lat_lon};
use rstest::rstest;

#[rstest]
fn diagnostics_count_eligible_candidates() {
    let origin = lat_lon(15.0, 74.0);
    let planner = GreedyPlanner::new(vec![
        place(1, "Beach", north_of(origin, 5.0)),
        place(2, "Nightlife", north_of(origin, 6.0)),
        place(3, "Beach", north_of(origin, 50.0)),
    ]);
    let request = PackageRequest::new(origin, 20.0).with_excluded(["Nightlife"]);

    let response = planner.plan(&request).expect("plan should succeed");
    assert_eq!(response.diagnostics.candidates_evaluated, 1);
    assert_eq!(response.route.len(), 1);
    assert_eq!(response.total_km, 10.0);
}

#[rstest]
#[case(PackageTier::FourHours)]
#[case(PackageTier::EightHours)]
#[case(PackageTier::TwelveHours)]
fn goa_packages_respect_their_budget(#[case] tier: PackageTier) {
    let planner = GreedyPlanner::new(goa_catalog());
    let request = PackageRequest::for_tier(PANAJI, tier);

    let response = planner.plan(&request).expect("plan should succeed");
    assert!(!response.route.is_empty());
    assert!(response.total_km <= tier.max_km());
    assert_eq!(response.total_km, response.route.total_distance_km());
    assert_eq!(response.route.origin(), PANAJI);
}

#[rstest]
fn larger_packages_visit_at_least_as_many_places() {
    let planner = GreedyPlanner::new(goa_catalog());
    let counts: Vec<usize> = PackageTier::ALL
        .into_iter()
        .map(|tier| {
            planner
                .plan(&PackageRequest::for_tier(PANAJI, tier))
                .expect("plan should succeed")
                .route
                .len()
        })
        .collect();
    assert!(counts.windows(2).all(|pair| pair.first() <= pair.get(1)));
}

#[rstest]
fn invalid_request_is_rejected() {
    let planner = GreedyPlanner::new(Vec::<Place>::new());
    let err = planner
        .plan(&PackageRequest::new(PANAJI, -5.0))
        .expect_err("negative budget");
    assert_eq!(
        err,
        PlanError::InvalidRequest(PackageRequestValidationError::NegativeBudget)
    );
}

#[rstest]
fn empty_store_gives_empty_route() {
    let planner = GreedyPlanner::new(Vec::<Place>::new());
    let response = planner
        .plan(&PackageRequest::new(PANAJI, 40.0))
        .expect("plan should succeed");
    assert!(response.route.is_empty());
    assert_eq!(response.total_km, 0.0);
    assert_eq!(response.diagnostics.candidates_evaluated, 0);
}
