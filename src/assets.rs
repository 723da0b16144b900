//! Template asset sources.
//! The templates ship inside the binary; a directory on disk can stand in
//! for them to customise the generated files.

use crate::constants::{CHANGELOG_ASSET, COMMANDS_ASSET, MAIN_ASSET, README_ASSET, VERSION_ASSET};
use crate::error::{Error, Result};
use log::debug;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Trait for loading raw template sources.
pub trait AssetSource {
    /// Loads the asset stored at `path`.
    ///
    /// # Errors
    /// * `Error::AssetLoadError` if the asset cannot be read
    fn load(&self, path: &str) -> Result<Cow<'static, str>>;
}

const EMBEDDED: [(&str, &str); 5] = [
    (VERSION_ASSET, include_str!("../templates/version.go.j2")),
    (MAIN_ASSET, include_str!("../templates/main.go.j2")),
    (COMMANDS_ASSET, include_str!("../templates/commands.go.j2")),
    (README_ASSET, include_str!("../templates/README.md.j2")),
    (CHANGELOG_ASSET, include_str!("../templates/CHANGELOG.md.j2")),
];

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self, path: &str) -> Result<Cow<'static, str>> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, content)| Cow::Borrowed(*content))
            .ok_or_else(|| Error::AssetLoadError {
                path: path.to_string(),
                reason: "not found in the embedded bundle".to_string(),
            })
    }
}

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, path: &str) -> Result<Cow<'static, str>> {
        let asset_path = self.root.join(path);
        debug!("Loading template asset from {}", asset_path.display());
        std::fs::read_to_string(&asset_path).map(Cow::Owned).map_err(|e| Error::AssetLoadError {
            path: asset_path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_assets_present() {
        for (path, _) in EMBEDDED {
            assert!(!EmbeddedAssets.load(path).unwrap().is_empty());
        }
    }

    #[test]
    fn test_embedded_asset_missing() {
        assert!(matches!(
            EmbeddedAssets.load("missing.j2"),
            Err(Error::AssetLoadError { .. })
        ));
    }
}
