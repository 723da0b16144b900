//! Command-line interface implementation for cli-init.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::processor::ScaffoldOptions;

const EXAMPLES: &str = r#"Examples:
  $ cli-init todo
  $ cli-init -s add,list,delete todo"#;

/// Command-line arguments structure for cli-init.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cli-init: the easy way to start building a command-line app",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Args {
    /// Name of the application to generate
    #[arg(value_name = "APPLICATION")]
    pub app_name: String,

    /// Comma-separated list of sub-commands to build
    #[arg(short = 's', long = "subcommands", value_name = "NAMES", value_delimiter = ',')]
    pub sub_commands: Vec<String>,

    /// GitHub username, defaults to the git user.name
    #[arg(short, long)]
    pub username: Option<String>,

    /// Directory where the application will be created, defaults to its name
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory with templates to use instead of the built-in ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Overwrite an existing application directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long, alias = "debug")]
    pub verbose: bool,
}

impl Args {
    /// Sub-command names with surrounding whitespace removed.
    pub fn sub_command_names(&self) -> Vec<String> {
        self.sub_commands.iter().map(|name| name.trim().to_string()).collect()
    }

    pub fn to_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            app_name: self.app_name.clone(),
            sub_commands: self.sub_command_names(),
            username: self.username.clone().unwrap_or_default(),
            output_dir: self.output_dir.clone().unwrap_or_else(|| PathBuf::from(&self.app_name)),
            force: self.force,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the application name is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
