//! Plan command implementation for the Nearby CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use nearby_core::{
    CategoryExclusionSet, PackageRequest, PackageResponse, PackageTier, PlaceCatalog, PlaceId,
    Planner, Route, budget_usage_percent, estimated_travel_hours, format_distance, is_over_budget,
    lat_lon,
};
use nearby_planner::{GreedyPlanner, add_stop};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, require_existing};
use crate::{
    ARG_ADD_STOP, ARG_BUDGET_KM, ARG_CATALOG, ARG_EXCLUDE, ARG_LATITUDE, ARG_LONGITUDE,
    ARG_OUTPUT, ARG_PACKAGE, ARG_REMOVE_STOP, ARG_SUGGEST, CliError, DEFAULT_LATITUDE,
    DEFAULT_LONGITUDE, ENV_PLAN_CATALOG, split_ids, split_list,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a closed-loop day trip from a JSON place catalog. The \
                 package tier sets the round-trip distance budget unless an \
                 explicit budget is given. Stops added by hand are merged \
                 into the planned route and the whole loop is re-ordered; \
                 removed stops are dropped afterwards without re-ordering.",
    about = "Plan a package route"
)]
#[ortho_config(prefix = "NEARBY")]
pub(crate) struct PlanArgs {
    /// Path to a JSON array of place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Package tier key: 4hr, 8hr or 12hr.
    #[arg(long = ARG_PACKAGE, value_name = "tier")]
    #[serde(default)]
    pub(crate) package: Option<String>,
    /// Override the package's round-trip budget in kilometres.
    #[arg(long = ARG_BUDGET_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) budget_km: Option<f64>,
    /// Comma-separated categories to leave out.
    #[arg(long = ARG_EXCLUDE, value_name = "categories")]
    #[serde(default)]
    pub(crate) exclude: Option<String>,
    /// Latitude of the trip origin.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the trip origin.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Comma-separated place ids to add to the planned route.
    #[arg(long = ARG_ADD_STOP, value_name = "ids")]
    #[serde(default)]
    pub(crate) add_stop: Option<String>,
    /// Comma-separated place ids to drop from the route after adding stops.
    #[arg(long = ARG_REMOVE_STOP, value_name = "ids")]
    #[serde(default)]
    pub(crate) remove_stop: Option<String>,
    /// Suggest further stops whose name or category contains this text.
    #[arg(long = ARG_SUGGEST, value_name = "text")]
    #[serde(default)]
    pub(crate) suggest: Option<String>,
    /// Write the plan to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the place catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Selected package tier.
    pub(crate) package: PackageTier,
    /// Round-trip budget in kilometres.
    pub(crate) budget_km: f64,
    /// Trip origin.
    pub(crate) origin: Coord<f64>,
    /// Categories left out of the plan.
    pub(crate) excluded: CategoryExclusionSet,
    /// Places added after planning.
    pub(crate) add_stops: Vec<PlaceId>,
    /// Places removed after additions.
    pub(crate) remove_stops: Vec<PlaceId>,
    /// Text matched against places not on the route.
    pub(crate) suggest: Option<String>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)
    }

    pub(crate) fn request(&self) -> PackageRequest {
        PackageRequest {
            origin: self.origin,
            budget_km: self.budget_km,
            excluded: self.excluded.clone(),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_PLAN_CATALOG,
        })?;
        let package = args
            .package
            .as_deref()
            .map(str::parse::<PackageTier>)
            .transpose()?
            .unwrap_or_default();
        let budget_km = args.budget_km.unwrap_or_else(|| package.max_km());
        let origin = lat_lon(
            args.latitude.unwrap_or(DEFAULT_LATITUDE),
            args.longitude.unwrap_or(DEFAULT_LONGITUDE),
        );
        let excluded = split_list(args.exclude.as_deref()).into_iter().collect();
        let add_stops = split_ids(args.add_stop.as_deref());
        let remove_stops = split_ids(args.remove_stop.as_deref());

        Ok(Self {
            catalog,
            package,
            budget_km,
            origin,
            excluded,
            add_stops,
            remove_stops,
            suggest: args.suggest,
            output: args.output,
        })
    }
}

/// Builds a planner over the loaded catalog.
pub(crate) trait PlannerBuilder {
    fn build(&self, catalog: &PlaceCatalog) -> Box<dyn Planner>;
}

pub(crate) struct GreedyPlannerBuilder;

impl PlannerBuilder for GreedyPlannerBuilder {
    fn build(&self, catalog: &PlaceCatalog) -> Box<dyn Planner> {
        Box::new(GreedyPlanner::new(catalog.clone()))
    }
}

/// One stop in the printed plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlannedStop {
    pub(crate) id: PlaceId,
    pub(crate) name: String,
    pub(crate) category: String,
    /// Distance from the previous stop (or the origin).
    pub(crate) leg_km: f64,
    pub(crate) leg_label: String,
}

/// A place that could be added to the printed plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SuggestedStop {
    pub(crate) id: PlaceId,
    pub(crate) name: String,
    pub(crate) category: String,
}

/// JSON document printed by `nearby plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutput {
    pub(crate) package: PackageTier,
    pub(crate) package_label: String,
    pub(crate) budget_km: f64,
    pub(crate) stops: Vec<PlannedStop>,
    pub(crate) return_leg_km: f64,
    pub(crate) total_km: f64,
    pub(crate) total_label: String,
    pub(crate) over_budget: bool,
    pub(crate) estimated_hours: f64,
    pub(crate) budget_usage_percent: f64,
    pub(crate) candidates_evaluated: u64,
    /// Present only when `--suggest` is given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) suggestions: Vec<SuggestedStop>,
}

impl PlanOutput {
    fn new(config: &PlanConfig, route: &Route, candidates_evaluated: u64) -> Self {
        let legs = route.leg_distances();
        let stops = route
            .stops()
            .iter()
            .zip(&legs)
            .map(|(stop, &leg_km)| PlannedStop {
                id: stop.id.clone(),
                name: stop.name.clone(),
                category: stop.category.to_string(),
                leg_km,
                leg_label: format_distance(leg_km),
            })
            .collect();
        let total_km = route.total_distance_km();
        Self {
            package: config.package,
            package_label: config.package.label().to_owned(),
            budget_km: config.budget_km,
            stops,
            return_leg_km: legs.last().copied().unwrap_or_default(),
            total_km,
            total_label: format_distance(total_km),
            over_budget: is_over_budget(total_km, config.budget_km),
            estimated_hours: estimated_travel_hours(total_km),
            budget_usage_percent: budget_usage_percent(total_km, config.budget_km),
            candidates_evaluated,
            suggestions: Vec::new(),
        }
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &GreedyPlannerBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let output = execute_plan(&config, builder)?;
    match &config.output {
        Some(path) => {
            let mut file =
                nearby_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_plan_output(&mut file, &output)
        }
        None => write_plan_output(writer, &output),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig, builder: &dyn PlannerBuilder) -> Result<PlanOutput, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let request = config.request();
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidPlanRequest { source })?;
    let planner = builder.build(&catalog);
    let PackageResponse {
        route, diagnostics, ..
    } = planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })?;
    let with_additions = add_requested_stops(&catalog, route, &config.add_stops)?;
    let edited = remove_requested_stops(with_additions, &config.remove_stops)?;
    let mut output = PlanOutput::new(config, &edited, diagnostics.candidates_evaluated);
    if let Some(query) = config.suggest.as_deref() {
        output.suggestions = suggest_stops(&catalog, &edited, query, &config.excluded);
    }
    Ok(output)
}

/// Merge hand-picked stops into a planned route.
pub(crate) fn add_requested_stops(
    catalog: &PlaceCatalog,
    route: Route,
    ids: &[PlaceId],
) -> Result<Route, CliError> {
    ids.iter().try_fold(route, |current, id| {
        let place = catalog
            .get(id)
            .ok_or_else(|| CliError::UnknownStop { id: id.clone() })?;
        Ok(add_stop(current, place.clone()))
    })
}

/// Drop stops from a route, keeping the order of the remainder.
pub(crate) fn remove_requested_stops(
    mut route: Route,
    ids: &[PlaceId],
) -> Result<Route, CliError> {
    for id in ids {
        let removed = route
            .remove_stop(id)
            .ok_or_else(|| CliError::StopNotOnRoute { id: id.clone() })?;
        log::debug!("removed {} from the route", removed.name);
    }
    Ok(route)
}

/// Places off the route whose name or category matches `query`.
pub(crate) fn suggest_stops(
    catalog: &PlaceCatalog,
    route: &Route,
    query: &str,
    excluded: &CategoryExclusionSet,
) -> Vec<SuggestedStop> {
    catalog
        .search_stops(query, route.stops(), excluded)
        .into_iter()
        .map(|place| SuggestedStop {
            id: place.id.clone(),
            name: place.name.clone(),
            category: place.category.to_string(),
        })
        .collect()
}

fn write_plan_output(writer: &mut dyn Write, output: &PlanOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
