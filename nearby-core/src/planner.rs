//! Planner seam: package requests, responses and errors.
//!
//! A [`Planner`] turns a [`PackageRequest`] into a closed-loop [`Route`] that
//! fits the request's distance budget.

use std::time::Duration;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CategoryExclusionSet, PackageTier, Route};

/// Parameters for a package request.
///
/// The request captures where the trip starts, the round-trip budget in
/// kilometres and the categories the visitor has switched off.
///
/// # Examples
/// ```rust
/// use nearby_core::{PackageRequest, PackageTier, lat_lon};
///
/// let request = PackageRequest::for_tier(lat_lon(15.4909, 73.8278), PackageTier::EightHours)
///     .with_excluded(["Nightlife"]);
/// assert_eq!(request.budget_km, 80.0);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageRequest {
    /// Start and end of the loop.
    pub origin: Coord<f64>,
    /// Maximum round-trip distance in kilometres.
    pub budget_km: f64,
    /// Categories whose places must not be visited.
    #[cfg_attr(feature = "serde", serde(default))]
    pub excluded: CategoryExclusionSet,
}

/// Reasons a [`PackageRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PackageRequestValidationError {
    /// Budget was NaN or infinite.
    #[error("distance budget must be a finite number")]
    NonFiniteBudget,
    /// Budget was below zero.
    #[error("distance budget must not be negative")]
    NegativeBudget,
    /// Origin was not a finite latitude/longitude pair.
    #[error("origin ({latitude}, {longitude}) is not a valid latitude/longitude")]
    InvalidOrigin {
        /// Latitude of the rejected origin.
        latitude: f64,
        /// Longitude of the rejected origin.
        longitude: f64,
    },
}

impl PackageRequest {
    /// Build a request with no excluded categories.
    #[must_use]
    pub const fn new(origin: Coord<f64>, budget_km: f64) -> Self {
        Self {
            origin,
            budget_km,
            excluded: CategoryExclusionSet::new(),
        }
    }

    /// Build a request using the budget of a package tier.
    #[must_use]
    pub const fn for_tier(origin: Coord<f64>, tier: PackageTier) -> Self {
        Self::new(origin, tier.max_km())
    }

    /// Replace the excluded categories.
    #[must_use]
    pub fn with_excluded<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<crate::Category>,
    {
        self.excluded = categories.into_iter().collect();
        self
    }

    /// Validate request invariants.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] when any invariant fails.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.validate_detailed().map_err(PlanError::from)
    }

    /// Validate request invariants and report which one failed.
    ///
    /// A zero budget is valid and yields an empty route.
    ///
    /// # Errors
    /// Returns the first failing [`PackageRequestValidationError`].
    pub fn validate_detailed(&self) -> Result<(), PackageRequestValidationError> {
        if !self.budget_km.is_finite() {
            return Err(PackageRequestValidationError::NonFiniteBudget);
        }
        if self.budget_km < 0.0 {
            return Err(PackageRequestValidationError::NegativeBudget);
        }
        let Coord {
            x: longitude,
            y: latitude,
        } = self.origin;
        let in_range = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(PackageRequestValidationError::InvalidOrigin {
                latitude,
                longitude,
            });
        }
        Ok(())
    }
}

/// Runtime counters collected while planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
    /// Places that survived filtering and pruning.
    pub candidates_evaluated: u64,
}

/// Result of a successful plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageResponse {
    /// The planned loop.
    pub route: Route,
    /// Round-trip distance of `route` in kilometres.
    pub total_km: f64,
    /// Planning counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PackageRequestValidationError),
}

/// Build a route that fits a package request.
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking. Planners must be `Send + Sync`.
pub trait Planner: Send + Sync {
    /// Plan a request, producing a route or an error.
    ///
    /// # Errors
    /// Returns [`PlanError`] when the request cannot be planned.
    fn plan(&self, request: &PackageRequest) -> Result<PackageResponse, PlanError>;
}
