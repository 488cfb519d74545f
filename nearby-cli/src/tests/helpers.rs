//! Test helpers for writing catalogs into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use nearby_core::test_support::goa_places;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory with a UTF-8 root path.
pub(super) fn temp_root() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Write the twelve-place Goa catalog to `path`.
pub(super) fn write_goa_catalog(path: &Utf8Path) {
    let payload = serde_json::to_vec_pretty(&goa_places()).expect("serialise catalog");
    write_utf8(path, &payload);
}
