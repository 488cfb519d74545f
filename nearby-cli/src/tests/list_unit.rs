//! Unit tests for the list command.

use super::helpers::{temp_root, write_goa_catalog};
use super::*;
use crate::list::{ListArgs, ListConfig, ListedPlace, list_places, run_list_with};
use nearby_core::{FavoriteSet, PlaceId};
use nearby_core::test_support::{PANAJI, goa_catalog};
use rstest::rstest;

fn config() -> ListConfig {
    ListConfig {
        catalog: "places.json".into(),
        category: None,
        query: None,
        limit: None,
        favorites: None,
        origin: PANAJI,
    }
}

fn ids(rows: &[ListedPlace]) -> Vec<PlaceId> {
    rows.iter().map(|row| row.id.clone()).collect()
}

#[rstest]
fn lists_every_place_nearest_first() {
    let rows = list_places(&goa_catalog(), &config());
    assert_eq!(rows.len(), 12);
    assert!(
        rows.windows(2)
            .all(|pair| matches!(pair, [a, b] if a.distance_km <= b.distance_km))
    );
    assert_eq!(rows.first().map(|row| row.name.as_str()), Some("Miramar Beach"));
}

#[rstest]
fn filters_by_category() {
    let rows = list_places(
        &goa_catalog(),
        &ListConfig {
            category: Some("Heritage".to_owned()),
            ..config()
        },
    );
    let expected: Vec<PlaceId> = [4_i64, 3, 11, 8].into_iter().map(PlaceId::Number).collect();
    assert_eq!(ids(&rows), expected);
}

#[rstest]
fn all_category_keeps_everything() {
    let rows = list_places(
        &goa_catalog(),
        &ListConfig {
            category: Some("All".to_owned()),
            ..config()
        },
    );
    assert_eq!(rows.len(), 12);
}

#[rstest]
fn query_and_limit_narrow_the_listing() {
    let rows = list_places(
        &goa_catalog(),
        &ListConfig {
            query: Some("BEACH".to_owned()),
            limit: Some(2),
            ..config()
        },
    );
    let labels: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.distance_label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![("Miramar Beach", "2.4 km"), ("Calangute Beach", "9.8 km")]
    );
}

#[rstest]
fn favorites_are_listed_nearest_first() {
    let rows = list_places(
        &goa_catalog(),
        &ListConfig {
            favorites: Some([12_i64, 3, 99].into_iter().collect()),
            ..config()
        },
    );
    assert_eq!(ids(&rows), vec![PlaceId::Number(3), PlaceId::Number(12)]);
}

#[rstest]
fn empty_favorites_list_nothing() {
    let rows = list_places(
        &goa_catalog(),
        &ListConfig {
            favorites: Some(FavoriteSet::new()),
            ..config()
        },
    );
    assert!(rows.is_empty());
}

#[rstest]
fn favorites_flag_is_split_into_ids() {
    let config = ListConfig::try_from(ListArgs {
        catalog: Some("places.json".into()),
        favorites: Some("12, fort-aguada".to_owned()),
        ..ListArgs::default()
    })
    .expect("config should build");
    let favorites = config.favorites.expect("favourites configured");
    assert!(favorites.contains(&PlaceId::Number(12)));
    assert!(favorites.contains(&PlaceId::Text("fort-aguada".to_owned())));
}

#[rstest]
fn converting_list_without_catalog_errors() {
    let err = ListConfig::try_from(ListArgs::default()).expect_err("missing catalog");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_LIST_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn list_command_prints_json_rows() {
    let (_tmp, root) = temp_root();
    let catalog = root.join("places.json");
    write_goa_catalog(&catalog);

    let mut buffer = Vec::new();
    run_list_with(
        ListArgs {
            catalog: Some(catalog),
            category: Some("Nightlife".to_owned()),
            ..ListArgs::default()
        },
        &mut buffer,
    )
    .expect("list should succeed");

    let rows: Vec<ListedPlace> = serde_json::from_slice(&buffer).expect("JSON rows");
    assert_eq!(ids(&rows), vec![PlaceId::Number(12), PlaceId::Number(5)]);
}
