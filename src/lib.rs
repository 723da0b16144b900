//! cli-init generates the skeleton of a command-line application.
//! It derives an application model from the requested name, sub-commands
//! and author identity, and renders it through a fixed set of templates.

/// Application model consumed by every template
pub mod application;

/// Template asset sources (embedded bundle or directory on disk)
pub mod assets;

/// Command-line interface module for cli-init
pub mod cli;

/// Sub-command descriptors and symbol name derivation
pub mod command;

pub mod constants;

/// Error types and handling for cli-init
pub mod error;

/// Author identity resolution from git configuration
pub mod identity;

pub mod logger;

/// Scaffold planning and generation
/// Drives the renders in order and writes the output files
pub mod processor;

/// Template rendering
pub mod renderer;

/// Template registry loaded once per run
pub mod template;
