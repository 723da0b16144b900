//! Template registry.
//! Parses the five scaffold templates once at startup and keeps them for
//! every render of the run.

use crate::assets::{AssetSource, EmbeddedAssets};
use crate::constants::{CHANGELOG_ASSET, COMMANDS_ASSET, MAIN_ASSET, README_ASSET, VERSION_ASSET};
use crate::error::{Error, Result};
use log::debug;
use minijinja::{Environment, UndefinedBehavior};

/// The fixed set of templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Version,
    Main,
    Commands,
    Readme,
    Changelog,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        TemplateName::Version,
        TemplateName::Main,
        TemplateName::Commands,
        TemplateName::Readme,
        TemplateName::Changelog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Version => "version",
            TemplateName::Main => "main",
            TemplateName::Commands => "commands",
            TemplateName::Readme => "readme",
            TemplateName::Changelog => "changelog",
        }
    }

    /// Path of the template source within an asset source.
    pub fn asset_path(&self) -> &'static str {
        match self {
            TemplateName::Version => VERSION_ASSET,
            TemplateName::Main => MAIN_ASSET,
            TemplateName::Commands => COMMANDS_ASSET,
            TemplateName::Readme => README_ASSET,
            TemplateName::Changelog => CHANGELOG_ASSET,
        }
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed templates, read-only once loaded.
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// Loads and parses every template from `assets`.
    ///
    /// # Errors
    /// * `Error::AssetLoadError` if an asset is missing
    /// * `Error::TemplateParseError` if an asset is not a valid template
    ///
    /// Stops at the first failure.
    pub fn load(assets: &dyn AssetSource) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        for name in TemplateName::ALL {
            let source = assets.load(name.asset_path())?;
            env.add_template_owned(name.as_str(), source).map_err(|e| {
                Error::TemplateParseError { name: name.to_string(), source: e }
            })?;
            debug!("Loaded template '{}' from '{}'", name, name.asset_path());
        }

        Ok(Self { env })
    }

    /// Loads the templates compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::load(&EmbeddedAssets)
    }

    pub(crate) fn env(&self) -> &Environment<'static> {
        &self.env
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &TemplateName::ALL.map(|name| name.as_str()))
            .finish()
    }
}
