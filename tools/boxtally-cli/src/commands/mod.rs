use std::path::Path;

use boxtally_catalog_model::LoadedCatalog;
use boxtally_common::error::{BoxtallyError, BoxtallyResult};

pub mod info;
pub mod init;
pub mod totals;
pub mod validate;

/// Load a catalog bundle, distinguishing a missing bundle from a broken one.
pub(crate) fn load_catalog(path: &Path) -> BoxtallyResult<LoadedCatalog> {
    if !path.exists() {
        return Err(BoxtallyError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    LoadedCatalog::load(path).map_err(|e| BoxtallyError::catalog(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_missing_bundle_is_file_not_found() {
        let path = std::env::temp_dir().join("boxtally_no_such_bundle");
        let _ = std::fs::remove_dir_all(&path);

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, BoxtallyError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_catalog_broken_bundle_is_catalog_error() {
        let dir = std::env::temp_dir().join("boxtally_test_broken_bundle");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("meta")).unwrap();
        std::fs::write(dir.join("meta").join("catalog.json"), "{not json").unwrap();

        let err = load_catalog(&dir).unwrap_err();
        assert!(matches!(err, BoxtallyError::Catalog { .. }));
        assert!(err.to_string().contains("catalog.json"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
