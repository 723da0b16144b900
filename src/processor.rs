//! Scaffold generation.
//! Plans the files of a scaffold, renders them in a fixed order and
//! writes them into the output directory.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    application::{define_application, Application},
    assets::AssetSource,
    constants::{CHANGELOG_FILE, COMMANDS_FILE, MAIN_FILE_EXTENSION, README_FILE, VERSION_FILE},
    error::{Error, Result},
    identity::ConfigReader,
    renderer::{Source, TemplateRenderer},
    template::{TemplateName, TemplateRegistry},
};

/// Ensures the output directory is safe to write to.
///
/// # Arguments
/// * `output_dir` - Target directory path for generated output
/// * `force` - Whether to remove an existing directory first
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and force is false
/// * `Error::FilesystemError` if an existing directory cannot be removed
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        if !force {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
        debug!("Removing existing output directory {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|e| Error::filesystem(output_dir, e))?;
    }
    Ok(output_dir.to_path_buf())
}

/// Renders application sources into an output directory.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, output_root: &'a Path) -> Self {
        Self { engine, output_root }
    }

    /// Returns the files to generate for `app`, in generation order.
    ///
    /// The sub-commands file is only planned when the application has
    /// sub-commands.
    pub fn sources(app: &Application) -> Vec<Source> {
        let mut sources = vec![
            Source::new(README_FILE, TemplateName::Readme),
            Source::new(CHANGELOG_FILE, TemplateName::Changelog),
            Source::new(VERSION_FILE, TemplateName::Version),
            Source::new(format!("{}.{}", app.name, MAIN_FILE_EXTENSION), TemplateName::Main),
        ];
        if app.has_sub_command {
            sources.push(Source::new(COMMANDS_FILE, TemplateName::Commands));
        }
        sources
    }

    /// Renders one source and writes it, truncating any existing file.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written file
    pub fn generate(&self, source: &Source, app: &Application) -> Result<PathBuf> {
        let target = self.output_root.join(&source.name);
        let content = self.engine.render(source.template, &app.to_context()?)?;

        debug!("Writing file: {}", target.display());
        fs::write(&target, content).map_err(|e| Error::filesystem(&target, e))?;
        Ok(target)
    }

    /// Generates every planned source into the existing output directory.
    ///
    /// Stops at the first failure; files written before it are left in place.
    pub fn generate_all(&self, app: &Application) -> Result<Vec<PathBuf>> {
        Self::sources(app).iter().map(|source| self.generate(source, app)).collect()
    }

    /// Creates the output directory and generates the scaffold into it.
    pub fn process(&self, app: &Application) -> Result<Vec<PathBuf>> {
        debug!("Creating output directory {}", self.output_root.display());
        fs::create_dir_all(self.output_root)
            .map_err(|e| Error::filesystem(self.output_root, e))?;
        self.generate_all(app)
    }
}

/// Input of a scaffolding run, as parsed by the command-line layer.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub app_name: String,
    pub sub_commands: Vec<String>,
    /// Username override; empty to use the git author
    pub username: String,
    pub output_dir: PathBuf,
    pub force: bool,
}

/// Runs the whole pipeline.
///
/// # Flow
/// 1. Loads and parses the templates
/// 2. Builds the application model
/// 3. Prepares the output directory
/// 4. Generates the files
///
/// Nothing touches the disk before steps 1 and 2 have succeeded.
pub fn scaffold(
    assets: &dyn AssetSource,
    reader: &dyn ConfigReader,
    options: &ScaffoldOptions,
) -> Result<Vec<PathBuf>> {
    if options.app_name.trim().is_empty() {
        return Err(Error::BlankApplicationNameError);
    }

    let registry = TemplateRegistry::load(assets)?;
    let app = define_application(
        &options.app_name,
        &options.sub_commands,
        &options.username,
        reader,
    )?;
    debug!("Application: {}", serde_json::to_string(&app)?);

    let output_root = ensure_output_dir(&options.output_dir, options.force)?;
    Processor::new(&registry, &output_root).process(&app)
}
