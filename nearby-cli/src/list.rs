//! List command implementation for the Nearby CLI.

use std::collections::HashSet;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use nearby_core::{FavoriteSet, PlaceCatalog, PlaceId, format_distance, lat_lon};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, require_existing};
use crate::{
    ARG_CATALOG, ARG_CATEGORY, ARG_FAVORITES, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_QUERY,
    CliError, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, ENV_LIST_CATALOG, split_ids,
};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List places nearest first")]
#[ortho_config(prefix = "NEARBY")]
pub(crate) struct ListArgs {
    /// Path to a JSON array of place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Only list this category ("All" lists everything).
    #[arg(long = ARG_CATEGORY, value_name = "label")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Case-insensitive text matched against names, descriptions and tags.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Print at most this many places.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Comma-separated favourite place ids; only these are listed.
    #[arg(long = ARG_FAVORITES, value_name = "ids")]
    #[serde(default)]
    pub(crate) favorites: Option<String>,
    /// Latitude distances are measured from.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude distances are measured from.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
}

impl ListArgs {
    pub(crate) fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListConfig::try_from(merged)
    }
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) category: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) limit: Option<usize>,
    pub(crate) favorites: Option<FavoriteSet>,
    pub(crate) origin: Coord<f64>,
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_LIST_CATALOG,
        })?;
        Ok(Self {
            catalog,
            category: args.category,
            query: args.query,
            limit: args.limit,
            favorites: args
                .favorites
                .as_deref()
                .map(|raw| split_ids(Some(raw)).into_iter().collect()),
            origin: lat_lon(
                args.latitude.unwrap_or(DEFAULT_LATITUDE),
                args.longitude.unwrap_or(DEFAULT_LONGITUDE),
            ),
        })
    }
}

/// One row printed by `nearby list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ListedPlace {
    pub(crate) id: PlaceId,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) distance_km: f64,
    pub(crate) distance_label: String,
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &mut stdout)
}

pub(crate) fn run_list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let catalog = load_catalog(&config.catalog)?;
    let rows = list_places(&catalog, &config);
    let payload = serde_json::to_string_pretty(&rows).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Places matching the configured category, query and favourites, nearest
/// first.
pub(crate) fn list_places(catalog: &PlaceCatalog, config: &ListConfig) -> Vec<ListedPlace> {
    let matching: Option<HashSet<&PlaceId>> = config
        .query
        .as_deref()
        .map(|query| catalog.search(query).into_iter().map(|place| &place.id).collect());
    let favourite: Option<HashSet<&PlaceId>> = config.favorites.as_ref().map(|favorites| {
        catalog
            .favorites(favorites)
            .into_iter()
            .map(|place| &place.id)
            .collect()
    });
    catalog
        .with_distances(config.origin)
        .into_iter()
        .filter(|entry| {
            config
                .category
                .as_deref()
                .is_none_or(|category| entry.place.category.matches_filter(category))
        })
        .filter(|entry| {
            matching
                .as_ref()
                .is_none_or(|ids| ids.contains(&entry.place.id))
        })
        .filter(|entry| {
            favourite
                .as_ref()
                .is_none_or(|ids| ids.contains(&entry.place.id))
        })
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|entry| ListedPlace {
            id: entry.place.id.clone(),
            name: entry.place.name.clone(),
            category: entry.place.category.to_string(),
            distance_km: entry.distance_km,
            distance_label: format_distance(entry.distance_km),
        })
        .collect()
}
