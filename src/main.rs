//! cli-init's main application entry point.
//! Parses the command line and hands the request to the scaffold pipeline.

use cli_init::{
    assets::{AssetSource, DirectoryAssets, EmbeddedAssets},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    identity::GitConfigReader,
    logger::init_logger,
    processor::scaffold,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Selects the template source (built-in or `--templates`)
/// 2. Reads the author identity from git configuration
/// 3. Generates the scaffold
fn run(args: Args) -> Result<()> {
    let assets: Box<dyn AssetSource> = match &args.templates {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => Box::new(EmbeddedAssets),
    };
    let reader = GitConfigReader::new();
    let options = args.to_options();

    let written = scaffold(&*assets, &reader, &options)?;
    for path in &written {
        println!("Created: '{}'", path.display());
    }

    println!(
        "Application '{}' generated successfully in {}.",
        options.app_name,
        options.output_dir.display()
    );
    Ok(())
}
