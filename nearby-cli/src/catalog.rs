//! Catalog file access shared by the subcommands.

use std::io::BufReader;

use camino::Utf8Path;
use nearby_core::PlaceCatalog;
use nearby_fs::open_utf8_file;

use crate::CliError;

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match nearby_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON-encoded [`PlaceCatalog`] from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<PlaceCatalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = PlaceCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::info!("loaded {} places from {path}", catalog.len());
    Ok(catalog)
}
