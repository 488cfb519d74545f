//! Categories command for the Nearby CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nearby_core::{Category, PlaceCatalog};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, require_existing};
use crate::{ARG_CATALOG, CliError, ENV_CATEGORIES_CATALOG};

/// CLI arguments for the `categories` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List category labels in catalog order")]
#[ortho_config(prefix = "NEARBY")]
pub(crate) struct CategoriesArgs {
    /// Path to a JSON array of place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl CategoriesArgs {
    fn into_catalog_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATEGORIES_CATALOG,
        })
    }
}

pub(crate) fn run_categories(args: CategoriesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_categories_with(args, &mut stdout)
}

pub(crate) fn run_categories_with(
    args: CategoriesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_catalog_path()?;
    require_existing(&path, ARG_CATALOG)?;
    let catalog = load_catalog(&path)?;
    let labels = category_labels(&catalog);
    let payload = serde_json::to_string_pretty(&labels).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Distinct labels, first-seen order, led by the "All" filter.
pub(crate) fn category_labels(catalog: &PlaceCatalog) -> Vec<&str> {
    std::iter::once(Category::ALL)
        .chain(catalog.categories().into_iter().map(Category::as_str))
        .collect()
}
