//! Error types emitted by the Nearby CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nearby_core::{
    CatalogError, PackageRequestValidationError, PackageTierParseError, PlaceId, PlanError,
};
use thiserror::Error;

/// Errors emitted by the Nearby CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the offending option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the place catalog failed.
    #[error("failed to open place catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The place catalog could not be decoded or holds duplicate ids.
    #[error("failed to load place catalog at {path:?}: {source}")]
    LoadCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: CatalogError,
    },
    /// The configured package key is not one of the known tiers.
    #[error(transparent)]
    UnknownPackage(#[from] PackageTierParseError),
    /// A stop to add is not in the catalog.
    #[error("no place with id {id} in the catalog")]
    UnknownStop {
        /// Identifier that was requested.
        id: PlaceId,
    },
    /// A stop to remove is not on the planned route.
    #[error("place {id} is not on the planned route")]
    StopNotOnRoute {
        /// Identifier that was requested.
        id: PlaceId,
    },
    /// The resolved package request failed validation.
    #[error("package request is invalid: {source}")]
    InvalidPlanRequest {
        /// Failed invariant.
        #[source]
        source: PackageRequestValidationError,
    },
    /// The planner rejected the request.
    #[error("planner failed: {source}")]
    Plan {
        /// Planner failure.
        #[source]
        source: PlanError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
