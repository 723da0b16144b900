//! Sub-command model.
//! Turns the requested sub-command names into descriptors carrying the
//! symbol names used by the generated sources.

use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// A sub-command of the generated application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCommand {
    /// Name exactly as requested
    pub name: String,
    /// Variable holding the command definition, e.g. `commandAdd`
    pub define_name: String,
    /// Handler function, e.g. `doAdd`
    pub function_name: String,
}

impl SubCommand {
    /// Derives the symbol names for `name`.
    ///
    /// # Errors
    /// * `Error::InvalidSubCommandNameError` if the name is empty or contains whitespace
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidSubCommandNameError {
                name,
                reason: "name must not be empty".to_string(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidSubCommandNameError {
                name,
                reason: "name must not contain whitespace".to_string(),
            });
        }

        let capitalized = capitalize(&name);
        Ok(Self {
            define_name: format!("command{}", capitalized),
            function_name: format!("do{}", capitalized),
            name,
        })
    }
}

/// Uppercases the first character and leaves the rest untouched.
///
/// An empty string is returned unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the ordered list of sub-commands.
///
/// A lone empty name is read as "no sub-commands", which is what splitting
/// an empty flag value produces.
///
/// # Errors
/// * `Error::InvalidSubCommandNameError` for an unusable name
/// * `Error::DuplicateSubCommandNameError` if two names derive the same symbols
pub fn build_sub_commands<S: AsRef<str>>(names: &[S]) -> Result<Vec<SubCommand>> {
    if let [only] = names {
        if only.as_ref().is_empty() {
            return Ok(Vec::new());
        }
    }

    let mut seen = HashSet::new();
    let mut sub_commands = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let sub_command = SubCommand::new(name)?;
        if !seen.insert(sub_command.define_name.clone()) {
            return Err(Error::DuplicateSubCommandNameError { name: name.to_string() });
        }
        debug!(
            "Sub-command '{}': {} / {}",
            sub_command.name, sub_command.define_name, sub_command.function_name
        );
        sub_commands.push(sub_command);
    }

    Ok(sub_commands)
}
