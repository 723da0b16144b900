//! Common constants used throughout cli-init.

/// Name of the generated README file
pub const README_FILE: &str = "README.md";

/// Name of the generated changelog file
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Name of the generated version source file
pub const VERSION_FILE: &str = "version.go";

/// Name of the generated sub-commands source file
pub const COMMANDS_FILE: &str = "commands.go";

/// Extension of the main entry file, which is named after the application
pub const MAIN_FILE_EXTENSION: &str = "go";

/// Template asset paths, relative to the asset root
pub const VERSION_ASSET: &str = "version.go.j2";
pub const MAIN_ASSET: &str = "main.go.j2";
pub const COMMANDS_ASSET: &str = "commands.go.j2";
pub const README_ASSET: &str = "README.md.j2";
pub const CHANGELOG_ASSET: &str = "CHANGELOG.md.j2";

/// Git configuration keys used to resolve the author identity
pub const GIT_USER_NAME: &str = "user.name";
pub const GIT_USER_EMAIL: &str = "user.email";
