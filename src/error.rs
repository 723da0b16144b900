//! Error handling for cli-init.
//! Defines the error kinds raised while building the application model,
//! loading templates and writing the scaffold.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a scaffold.
///
/// Identity lookups (`ConfigReadError`) are the only kind the pipeline
/// recovers from; every other variant aborts the current run.
#[derive(Error, Debug)]
pub enum Error {
    /// A key could not be read from the version-control configuration.
    #[error("Failed to read git config '{key}': {reason}.")]
    ConfigReadError { key: String, reason: String },

    /// A sub-command name cannot be turned into generated symbols.
    #[error("Invalid sub-command name '{name}': {reason}.")]
    InvalidSubCommandNameError { name: String, reason: String },

    /// Two sub-commands would generate the same symbols.
    #[error("Sub-command '{name}' duplicates an earlier sub-command.")]
    DuplicateSubCommandNameError { name: String },

    /// A template asset is missing from the asset source.
    #[error("Failed to load template asset '{path}': {reason}.")]
    AssetLoadError { path: String, reason: String },

    #[error("Failed to parse template '{name}': {source}.")]
    TemplateParseError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template '{name}': {source}.")]
    TemplateRenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Directory or file creation failed.
    #[error("Filesystem error at '{path}': {source}.")]
    FilesystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Application name must not be blank.")]
    BlankApplicationNameError,

    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O failure together with the path it happened on.
    pub fn filesystem<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::FilesystemError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
