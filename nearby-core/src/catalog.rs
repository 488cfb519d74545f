//! In-memory place catalog with the browsing queries used by the app.
//!
//! The catalog is loaded once from a JSON array of place records and is
//! read-only afterwards. Queries return borrowed places in catalog order
//! unless stated otherwise.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

use crate::{Category, CategoryExclusionSet, FavoriteSet, Place, PlaceId, PlaceStore, distance_km};

/// Errors raised while building a [`PlaceCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to decode place catalog: {0}")]
    Decode(#[from] serde_json::Error),
    /// Two places share an identifier.
    #[error("place id {id} appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: PlaceId,
    },
}

/// A place paired with its distance from a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDistance<'a> {
    /// The place.
    pub place: &'a Place,
    /// Distance from the reference point in kilometres.
    pub distance_km: f64,
}

/// Read-only list of places with unique identifiers.
///
/// # Examples
/// ```
/// use nearby_core::{PlaceCatalog, lat_lon};
///
/// # fn main() -> Result<(), nearby_core::CatalogError> {
/// let catalog = PlaceCatalog::from_json_str(r#"[
///     {"id": 1, "name": "Miramar Beach", "category": "Beach", "latitude": 15.4833, "longitude": 73.8069},
///     {"id": 2, "name": "Fort Aguada", "category": "Heritage", "latitude": 15.4920, "longitude": 73.7737}
/// ]"#)?;
///
/// let nearest = catalog.with_distances(lat_lon(15.4909, 73.8278));
/// assert_eq!(nearest[0].place.name, "Miramar Beach");
/// assert_eq!(catalog.filter_by_category("Heritage").len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Build a catalog, rejecting duplicate identifiers.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two places share an id.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(places.len());
        if let Some(duplicate) = places.iter().find(|place| !seen.insert(&place.id)) {
            log::warn!("rejecting catalog with duplicate place id {}", duplicate.id);
            return Err(CatalogError::DuplicateId {
                id: duplicate.id.clone(),
            });
        }
        log::debug!("loaded catalog with {} places", places.len());
        Ok(Self { places })
    }

    /// Decode a catalog from a JSON array of place records.
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] for malformed JSON and
    /// [`CatalogError::DuplicateId`] for repeated identifiers.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::new(places)
    }

    /// Decode a catalog from a reader yielding a JSON array of place records.
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] for malformed JSON or read failures
    /// and [`CatalogError::DuplicateId`] for repeated identifiers.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let places: Vec<Place> = serde_json::from_reader(reader)?;
        Self::new(places)
    }

    /// All places in catalog order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog has no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Look up a place by identifier.
    #[must_use]
    pub fn get(&self, id: &PlaceId) -> Option<&Place> {
        self.places.iter().find(|place| &place.id == id)
    }

    /// Every place with its distance from `origin`, nearest first.
    ///
    /// Places at equal distance keep their catalog order.
    #[must_use]
    pub fn with_distances(&self, origin: Coord<f64>) -> Vec<PlaceDistance<'_>> {
        let mut ranked: Vec<PlaceDistance<'_>> = self
            .places
            .iter()
            .map(|place| PlaceDistance {
                place,
                distance_km: distance_km(origin, place.location),
            })
            .collect();
        ranked.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
        ranked
    }

    /// Places in `category`, or every place for [`Category::ALL`].
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|place| place.category.matches_filter(category))
            .collect()
    }

    /// Places whose name, description or any tag contains `query`.
    ///
    /// Matching is case-insensitive. A blank query returns every place.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Place> {
        if query.trim().is_empty() {
            return self.places.iter().collect();
        }
        let needle = query.to_lowercase();
        self.places
            .iter()
            .filter(|place| {
                contains_folded(&place.name, &needle)
                    || contains_folded(&place.description, &needle)
                    || place.tags.iter().any(|tag| contains_folded(tag, &needle))
            })
            .collect()
    }

    /// Candidates for adding a stop to a package.
    ///
    /// Skips places already in `selected` and places in an excluded category,
    /// then matches `query` case-insensitively against name or category. An
    /// empty query matches every remaining place.
    #[must_use]
    pub fn search_stops(
        &self,
        query: &str,
        selected: &[Place],
        excluded: &CategoryExclusionSet,
    ) -> Vec<&Place> {
        let needle = query.to_lowercase();
        self.places
            .iter()
            .filter(|place| !selected.iter().any(|stop| stop.id == place.id))
            .filter(|place| !excluded.contains(&place.category))
            .filter(|place| {
                contains_folded(&place.name, &needle)
                    || contains_folded(place.category.as_str(), &needle)
            })
            .collect()
    }

    /// Places marked in `favorites`, in catalog order.
    ///
    /// Favourite ids with no matching place are ignored.
    #[must_use]
    pub fn favorites(&self, favorites: &FavoriteSet) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|place| favorites.contains(&place.id))
            .collect()
    }

    /// Distinct category labels in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = HashSet::new();
        self.places
            .iter()
            .map(|place| &place.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

impl PlaceStore for PlaceCatalog {
    fn places(&self) -> &[Place] {
        &self.places
    }
}

fn contains_folded(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> PlaceCatalog {
        PlaceCatalog::new(vec![
            Place::new(1_i64, "Calangute Beach", "Beach", lat_lon(15.5439, 73.7553))
                .with_description("Queen of beaches")
                .with_tags(["crowded", "water sports"]),
            Place::new(3_i64, "Basilica of Bom Jesus", "Heritage", lat_lon(15.5009, 73.9116))
                .with_description("Baroque church in Old Goa")
                .with_tags(["unesco"]),
            Place::new(5_i64, "Tito's Lane", "Nightlife", lat_lon(15.5560, 73.7530)),
            Place::new(10_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069)),
        ])
        .expect("fixture ids are unique")
    }

    #[rstest]
    fn duplicate_ids_are_rejected() {
        let place = Place::new(1_i64, "Miramar Beach", "Beach", lat_lon(15.4833, 73.8069));
        let err = PlaceCatalog::new(vec![place.clone(), place]).expect_err("duplicate ids");
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == PlaceId::Number(1)));
    }

    #[rstest]
    fn distances_are_sorted_nearest_first(catalog: PlaceCatalog) {
        let ranked = catalog.with_distances(lat_lon(15.4909, 73.8278));
        let names: Vec<&str> = ranked.iter().map(|entry| entry.place.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Miramar Beach"));
        assert!(
            ranked
                .iter()
                .zip(ranked.iter().skip(1))
                .all(|(lhs, rhs)| lhs.distance_km <= rhs.distance_km)
        );
    }

    #[rstest]
    #[case("All", 4)]
    #[case("Beach", 2)]
    #[case("Nightlife", 1)]
    #[case("Spiritual", 0)]
    fn filters_by_category(catalog: PlaceCatalog, #[case] filter: &str, #[case] expected: usize) {
        assert_eq!(catalog.filter_by_category(filter).len(), expected);
    }

    #[rstest]
    #[case("", 4)]
    #[case("   ", 4)]
    #[case("BEACH", 2)]
    #[case("unesco", 1)]
    #[case("old goa", 1)]
    #[case("volcano", 0)]
    fn searches_name_description_and_tags(
        catalog: PlaceCatalog,
        #[case] query: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(catalog.search(query).len(), expected);
    }

    #[rstest]
    fn stop_search_skips_selected_and_excluded(catalog: PlaceCatalog) {
        let selected: Vec<Place> = catalog.places().first().cloned().into_iter().collect();
        let excluded: CategoryExclusionSet = ["Nightlife"].into_iter().collect();
        let ids: Vec<&PlaceId> = catalog
            .search_stops("", &selected, &excluded)
            .into_iter()
            .map(|place| &place.id)
            .collect();
        assert_eq!(ids, vec![&PlaceId::Number(3), &PlaceId::Number(10)]);
    }

    #[rstest]
    fn stop_search_matches_category_label(catalog: PlaceCatalog) {
        let found = catalog.search_stops("herit", &[], &CategoryExclusionSet::new());
        assert_eq!(found.len(), 1);
    }

    #[rstest]
    fn favorites_follow_catalog_order(catalog: PlaceCatalog) {
        let favorites: FavoriteSet = [10_i64, 3, 99].into_iter().collect();
        let names: Vec<&str> = catalog
            .favorites(&favorites)
            .into_iter()
            .map(|place| place.name.as_str())
            .collect();
        assert_eq!(names, vec!["Basilica of Bom Jesus", "Miramar Beach"]);
    }

    #[rstest]
    fn toggled_off_favorite_drops_out(catalog: PlaceCatalog) {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle(5_i64));
        assert_eq!(catalog.favorites(&favorites).len(), 1);
        assert!(!favorites.toggle(5_i64));
        assert!(catalog.favorites(&favorites).is_empty());
    }

    #[rstest]
    fn lists_categories_once(catalog: PlaceCatalog) {
        let labels: Vec<&str> = catalog.categories().into_iter().map(Category::as_str).collect();
        assert_eq!(labels, vec!["Beach", "Heritage", "Nightlife"]);
    }
}
