//! Test helpers shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{EARTH_RADIUS_KM, Place, PlaceCatalog, lat_lon};

/// Panaji, the default trip origin.
pub const PANAJI: Coord<f64> = lat_lon(15.4909, 73.8278);

/// A point `km` kilometres due north of `origin`.
///
/// Points on the same meridian measure exactly `km` apart once rounded, which
/// keeps scenario arithmetic readable.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "arc length to latitude offset")]
pub fn north_of(origin: Coord<f64>, km: f64) -> Coord<f64> {
    lat_lon(origin.y + (km / EARTH_RADIUS_KM).to_degrees(), origin.x)
}

/// A place named after its identifier.
#[must_use]
pub fn place(id: i64, category: &str, location: Coord<f64>) -> Place {
    Place::new(id, format!("Place {id}"), category, location)
}

/// Twelve well-known Goa attractions across five categories.
#[must_use]
pub fn goa_places() -> Vec<Place> {
    vec![
        Place::new(1_i64, "Calangute Beach", "Beach", lat_lon(15.5439, 73.7553))
            .with_description("Queen of beaches with water sports")
            .with_tags(["water sports", "shacks"])
            .with_rating(4.3),
        Place::new(2_i64, "Baga Beach", "Beach", lat_lon(15.5553, 73.7517))
            .with_description("Lively beach known for its nightlife")
            .with_tags(["party", "water sports"])
            .with_rating(4.2),
        Place::new(3_i64, "Basilica of Bom Jesus", "Heritage", lat_lon(15.5009, 73.9116))
            .with_description("Baroque basilica in Old Goa")
            .with_tags(["church", "unesco"])
            .with_rating(4.7),
        Place::new(4_i64, "Fort Aguada", "Heritage", lat_lon(15.4920, 73.7737))
            .with_description("Seventeenth century Portuguese fort and lighthouse")
            .with_tags(["fort", "lighthouse"])
            .with_rating(4.4),
        Place::new(5_i64, "Tito's Lane", "Nightlife", lat_lon(15.5560, 73.7530))
            .with_description("Clubs and bars off Baga road")
            .with_tags(["clubs", "bars"]),
        Place::new(6_i64, "Dudhsagar Falls", "Nature", lat_lon(15.3144, 74.3143))
            .with_description("Four-tiered waterfall on the Mandovi")
            .with_tags(["waterfall", "trek"])
            .with_rating(4.6),
        Place::new(7_i64, "Palolem Beach", "Beach", lat_lon(15.0100, 74.0232))
            .with_description("Crescent bay in South Goa")
            .with_tags(["kayaking", "quiet"]),
        Place::new(8_i64, "Chapora Fort", "Heritage", lat_lon(15.6060, 73.7361))
            .with_description("Hilltop fort above Vagator")
            .with_tags(["fort", "sunset"]),
        Place::new(9_i64, "Anjuna Flea Market", "Shopping", lat_lon(15.5735, 73.7407))
            .with_description("Wednesday market by the sea")
            .with_tags(["market", "souvenirs"]),
        Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069))
            .with_description("City beach at the mouth of the Mandovi")
            .with_tags(["sunset", "promenade"]),
        Place::new(11_i64, "Se Cathedral", "Heritage", lat_lon(15.5036, 73.9124))
            .with_description("Cathedral dedicated to Saint Catherine")
            .with_tags(["church", "unesco"]),
        Place::new(12_i64, "Club Cubana", "Nightlife", lat_lon(15.5600, 73.7700))
            .with_description("Hilltop nightclub in Arpora")
            .with_tags(["clubs", "pool"]),
    ]
}

/// [`goa_places`] wrapped in a catalog.
///
/// # Panics
/// Never in practice; the fixture ids are unique.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture data is known to be valid")]
pub fn goa_catalog() -> PlaceCatalog {
    PlaceCatalog::new(goa_places()).expect("fixture ids are unique")
}
