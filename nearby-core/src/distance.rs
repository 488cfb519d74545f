//! Great-circle distances between coordinates.
//!
//! Coordinates follow the `geo` convention: `x` is longitude and `y` is
//! latitude, both in WGS84 degrees. Use [`lat_lon`] to build one without
//! mixing the axes up.

use geo::Coord;

/// Earth radius used by [`distance_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use nearby_core::lat_lon;
///
/// let panaji = lat_lon(15.4909, 73.8278);
/// assert_eq!(panaji.y, 15.4909);
/// assert_eq!(panaji.x, 73.8278);
/// ```
#[must_use]
pub const fn lat_lon(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Haversine distance between `a` and `b` in kilometres.
///
/// The result is rounded to the nearest 0.1 km. Budget comparisons downstream
/// operate on these rounded values, so the rounding is part of the contract.
/// Inputs are trusted to be valid coordinates; antipodal points are not
/// special-cased.
///
/// # Examples
/// ```
/// use nearby_core::{distance_km, lat_lon};
///
/// let panaji = lat_lon(15.4909, 73.8278);
/// assert_eq!(distance_km(panaji, panaji), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lon = (delta_lon / 2.0).sin();
    let h = sin_lat * sin_lat + sin_lon * sin_lon * lat_a.cos() * lat_b.cos();
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_to_tenth(EARTH_RADIUS_KM * central_angle)
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal place scales by ten"
)]
fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Render a distance for display.
///
/// Distances below one kilometre are shown in whole metres, anything else in
/// kilometres with one decimal place.
///
/// # Examples
/// ```
/// use nearby_core::format_distance;
///
/// assert_eq!(format_distance(0.4), "400 m");
/// assert_eq!(format_distance(12.3), "12.3 km");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting kilometres to metres"
)]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", (km * 1000.0).round())
    } else {
        format!("{km:.1} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_point_is_zero() {
        let point = lat_lon(15.4909, 73.8278);
        assert_eq!(distance_km(point, point), 0.0);
    }

    #[rstest]
    fn known_distance_is_close() {
        // Panaji to Margao is roughly 28 km as the crow flies.
        let panaji = lat_lon(15.4909, 73.8278);
        let margao = lat_lon(15.2832, 73.9862);
        let km = distance_km(panaji, margao);
        assert!(km > 25.0 && km < 30.0, "Panaji to Margao should be ~28 km, got {km}");
    }

    #[rstest]
    fn result_is_rounded_to_one_decimal() {
        let a = lat_lon(15.4909, 73.8278);
        let b = lat_lon(15.5439, 73.7553);
        let km = distance_km(a, b);
        let scaled = km * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "{km} is not a multiple of 0.1");
    }

    #[rstest]
    fn one_degree_of_latitude() {
        // R * pi / 180 = 111.19 km, rounded to 111.2.
        let km = distance_km(lat_lon(0.0, 0.0), lat_lon(1.0, 0.0));
        assert_eq!(km, 111.2);
    }

    #[rstest]
    #[case(0.0, "0 m")]
    #[case(0.05, "50 m")]
    #[case(0.999, "999 m")]
    #[case(1.0, "1.0 km")]
    #[case(42.35, "42.4 km")]
    fn formats_distances(#[case] km: f64, #[case] expected: &str) {
        assert_eq!(format_distance(km), expected);
    }
}
