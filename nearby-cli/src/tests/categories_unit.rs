//! Unit tests for the categories command.

use super::helpers::{temp_root, write_goa_catalog};
use super::*;
use crate::categories::{CategoriesArgs, category_labels, run_categories_with};
use nearby_core::test_support::goa_catalog;
use rstest::rstest;

#[rstest]
fn labels_start_with_all_then_first_seen_order() {
    let catalog = goa_catalog();
    assert_eq!(
        category_labels(&catalog),
        vec!["All", "Beach", "Heritage", "Nightlife", "Nature", "Shopping"]
    );
}

#[rstest]
fn categories_command_prints_json_labels() {
    let (_tmp, root) = temp_root();
    let catalog = root.join("places.json");
    write_goa_catalog(&catalog);

    let mut buffer = Vec::new();
    run_categories_with(
        CategoriesArgs {
            catalog: Some(catalog),
        },
        &mut buffer,
    )
    .expect("categories should succeed");

    let labels: Vec<String> = serde_json::from_slice(&buffer).expect("JSON labels");
    assert_eq!(labels.len(), 6);
    assert_eq!(labels.first().map(String::as_str), Some("All"));
}

#[rstest]
fn categories_without_catalog_errors() {
    let err = run_categories_with(CategoriesArgs::default(), &mut Vec::new())
        .expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATEGORIES_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}
