//! Greedy route planning for Nearby smart packages.
//!
//! This crate provides the route optimizer primitives and [`GreedyPlanner`],
//! the default implementation of the [`Planner`](nearby_core::Planner) trait.
//!
//! Routes are built with a nearest-neighbour heuristic: starting at the
//! origin, the closest unvisited place is appended until the pool is empty
//! ([`nearest_neighbor_order`]) or until the closest place would push the
//! round trip over budget ([`plan_route`]). Neither is globally optimal; both
//! are deterministic and run in quadratic time.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod budget;
mod edit;
mod nearest;
mod planner;

pub use budget::{admit_within_budget, eligible_candidates, plan_route};
pub use edit::add_stop;
pub use nearest::nearest_neighbor_order;
pub use planner::GreedyPlanner;
