//! Benchmark support utilities for the greedy planner.
//!
//! Generates deterministic catalogs scattered around a handful of town
//! centres so plans have realistic clusters to hop between.

use geo::Coord;
use nearby_core::{Place, lat_lon};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Origin used by benchmark requests (Panaji).
pub const ORIGIN: Coord<f64> = lat_lon(15.4909, 73.8278);

/// Categories cycled through when labelling generated places.
const CATEGORIES: [&str; 5] = ["Beach", "Heritage", "Nightlife", "Nature", "Shopping"];

/// Number of town centres places cluster around.
const CLUSTER_COUNT: usize = 6;

/// Maximum offset of a place from its centre, in degrees (about 3 km).
const CLUSTER_SPREAD: f64 = 0.03;

/// Half-width of the area town centres are drawn from, in degrees.
const AREA_HALF_WIDTH: f64 = 0.4;

/// Generate `count` places clustered around random centres near [`ORIGIN`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "offsets are added to degree coordinates"
)]
pub fn generate_clustered_places(count: usize, seed: u64) -> Vec<Place> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let centres: Vec<Coord<f64>> = (0..CLUSTER_COUNT)
        .map(|_| Coord {
            x: ORIGIN.x + rng.gen_range(-AREA_HALF_WIDTH..AREA_HALF_WIDTH),
            y: ORIGIN.y + rng.gen_range(-AREA_HALF_WIDTH..AREA_HALF_WIDTH),
        })
        .collect();

    (0..count)
        .zip(1_i64..)
        .map(|(index, id)| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "round-robin cluster assignment"
            )]
            let centre = centres
                .get(index % CLUSTER_COUNT)
                .copied()
                .unwrap_or(ORIGIN);
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "round-robin category assignment"
            )]
            let category = CATEGORIES.get(index % CATEGORIES.len()).copied().unwrap_or("Beach");
            let location = Coord {
                x: centre.x + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
                y: centre.y + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            };
            Place::new(id, format!("Place {id}"), category, location)
        })
        .collect()
}
