//! Application model.
//! The aggregate every template is rendered against.

use crate::command::{build_sub_commands, SubCommand};
use crate::error::Result;
use crate::identity::{resolve_identity, ConfigReader};
use serde::Serialize;

/// Data describing the application being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    /// Application name, also used for the main entry file
    pub name: String,
    pub author: String,
    pub email: String,
    /// GitHub username, the author unless overridden
    pub username: String,
    pub has_sub_command: bool,
    pub sub_commands: Vec<SubCommand>,
}

impl Application {
    /// Serializes the model into the context handed to the templates.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Assembles the application model.
///
/// # Arguments
/// * `app_name` - Name of the application, taken as is
/// * `sub_command_names` - Requested sub-commands in order
/// * `username_override` - Explicit username; empty means "use the author"
/// * `reader` - Source of the author identity
///
/// # Errors
/// * Any error from [`build_sub_commands`]
pub fn define_application<S: AsRef<str>>(
    app_name: &str,
    sub_command_names: &[S],
    username_override: &str,
    reader: &dyn ConfigReader,
) -> Result<Application> {
    let sub_commands = build_sub_commands(sub_command_names)?;
    let identity = resolve_identity(reader, username_override);

    Ok(Application {
        name: app_name.to_string(),
        author: identity.author,
        email: identity.email,
        username: identity.username,
        has_sub_command: !sub_commands.is_empty(),
        sub_commands,
    })
}
