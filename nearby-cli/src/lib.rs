//! Command-line interface for planning Nearby day-trip packages.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use nearby_core::PlaceId;

mod catalog;
mod categories;
mod error;
mod list;
mod plan;

use categories::{CategoriesArgs, run_categories};
pub use error::CliError;
use list::{ListArgs, run_list};
use plan::{PlanArgs, run_plan};

const ARG_CATALOG: &str = "catalog";
const ARG_PACKAGE: &str = "package";
const ARG_BUDGET_KM: &str = "budget-km";
const ARG_EXCLUDE: &str = "exclude";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_ADD_STOP: &str = "add-stop";
const ARG_REMOVE_STOP: &str = "remove-stop";
const ARG_SUGGEST: &str = "suggest";
const ARG_OUTPUT: &str = "output";
const ARG_CATEGORY: &str = "category";
const ARG_QUERY: &str = "query";
const ARG_LIMIT: &str = "limit";
const ARG_FAVORITES: &str = "favorites";
const ENV_PLAN_CATALOG: &str = "NEARBY_CMDS_PLAN_CATALOG";
const ENV_LIST_CATALOG: &str = "NEARBY_CMDS_LIST_CATALOG";
const ENV_CATEGORIES_CATALOG: &str = "NEARBY_CMDS_CATEGORIES_CATALOG";

/// Latitude used when no origin is configured (Panaji).
const DEFAULT_LATITUDE: f64 = 15.4909;
/// Longitude used when no origin is configured (Panaji).
const DEFAULT_LONGITUDE: f64 = 73.8278;

/// Run the Nearby CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, catalog loading,
/// planning or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::List(args) => run_list(args),
        Command::Categories(args) => run_categories(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearby",
    about = "Plan distance-budgeted day trips around Goa",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a package route from a place catalog.
    Plan(PlanArgs),
    /// List catalog places nearest first.
    List(ListArgs),
    /// List the category labels used by a catalog.
    Categories(CategoriesArgs),
}

/// Split a comma-separated option into trimmed, non-empty items.
fn split_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Split a comma-separated option into place identifiers.
fn split_ids(raw: Option<&str>) -> Vec<PlaceId> {
    split_list(raw)
        .into_iter()
        .map(|item| {
            let Ok(id) = item.parse::<PlaceId>();
            id
        })
        .collect()
}

#[cfg(test)]
mod tests;
