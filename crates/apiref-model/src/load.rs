//! Loading trees from the upstream producer's JSON output.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::content::ContentItem;
use crate::menu::MenuItem;

/// Error loading a content or menu tree.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Input file not found.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a content tree (a JSON array of content items).
pub fn load_content(path: &Path) -> Result<Vec<ContentItem>, ModelError> {
    load_json(path)
}

/// Load a menu tree (a JSON array of menu items).
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>, ModelError> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_content_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"[{"id": "a", "type": "section", "name": "Intro"}, {"id": "g", "type": "group"}]"#,
        )
        .unwrap();

        let items = load_content(&path).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Intro");
    }

    #[test]
    fn test_load_menu_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");

        let err = load_menu(&path).unwrap_err();

        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_load_content_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "[{").unwrap();

        let err = load_content(&path).unwrap_err();

        assert!(matches!(err, ModelError::Parse { .. }));
        assert!(err.to_string().contains("content.json"));
    }
}
