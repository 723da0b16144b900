//! Author identity resolution.
//! Reads the author name and email from git configuration and reconciles
//! them with an explicit username override.

use crate::constants::{GIT_USER_EMAIL, GIT_USER_NAME};
use crate::error::{Error, Result};
use log::{debug, warn};
use std::path::Path;

/// Read-only access to version-control configuration values.
pub trait ConfigReader {
    /// Returns the value stored under `key`.
    ///
    /// # Errors
    /// * `Error::ConfigReadError` if the configuration or the key is unavailable
    fn get(&self, key: &str) -> Result<String>;
}

/// Reads configuration through libgit2.
///
/// Holds a snapshot of the configuration taken at construction time, so
/// later edits to the underlying files are not observed.
pub struct GitConfigReader {
    config: Option<git2::Config>,
}

impl GitConfigReader {
    /// Opens the default global, XDG and system git configuration.
    pub fn new() -> Self {
        Self::from_result(git2::Config::open_default())
    }

    /// Opens a single git configuration file.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::from_result(git2::Config::open(path.as_ref()))
    }

    fn from_result(config: std::result::Result<git2::Config, git2::Error>) -> Self {
        let config = config.and_then(|mut config| config.snapshot());
        match config {
            Ok(config) => Self { config: Some(config) },
            Err(e) => {
                debug!("Git configuration is not available: {}", e.message());
                Self { config: None }
            }
        }
    }
}

impl Default for GitConfigReader {
    fn default() -> Self {
        GitConfigReader::new()
    }
}

impl ConfigReader for GitConfigReader {
    fn get(&self, key: &str) -> Result<String> {
        let config = self.config.as_ref().ok_or_else(|| Error::ConfigReadError {
            key: key.to_string(),
            reason: "git configuration is not available".to_string(),
        })?;

        config.get_string(key).map_err(|e| Error::ConfigReadError {
            key: key.to_string(),
            reason: e.message().to_string(),
        })
    }
}

/// Author identity used by the templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub author: String,
    pub email: String,
    pub username: String,
}

/// Looks up a key, downgrading any failure to an empty string.
fn lookup(reader: &dyn ConfigReader, key: &str) -> String {
    match reader.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}", e);
            String::new()
        }
    }
}

/// Resolves the author identity.
///
/// # Arguments
/// * `reader` - Source of `user.name` and `user.email`
/// * `explicit_username` - Username override; ignored when empty
///
/// # Returns
/// * `Identity` - The username falls back to the author when no override is given
pub fn resolve_identity(reader: &dyn ConfigReader, explicit_username: &str) -> Identity {
    let author = lookup(reader, GIT_USER_NAME);
    let email = lookup(reader, GIT_USER_EMAIL);

    let username = if explicit_username.is_empty() {
        author.clone()
    } else {
        explicit_username.to_string()
    };

    debug!("Resolved identity: author='{}', email='{}', username='{}'", author, email, username);

    Identity { author, email, username }
}
