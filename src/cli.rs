//! CLI argument parsing using clap derive macros

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::build::cmake::{DEFAULT_BUILD_DIR, DEFAULT_SOURCE_DIR};
use crate::build::{BuildPipeline, CMakeConfig, Outcome};
use crate::exec::SystemRunner;

/// Simple Binary Tree build automation
///
/// Configures the project with CMake and builds the tests executable.
#[derive(Parser, Debug)]
#[command(name = "treebuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CMake generator to use instead of the default (e.g. "Ninja")
    pub generator: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Project source directory
    #[arg(short = 'S', long, env = "TREEBUILD_SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Build output directory
    #[arg(short = 'B', long, env = "TREEBUILD_BUILD_DIR", default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the build against the real terminal
    pub fn execute(self) -> Result<Outcome> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let config = CMakeConfig::new(self.source_dir, self.build_dir).generator(self.generator);

        let stdin = io::stdin();
        let stdout = io::stdout();
        BuildPipeline::new(config, SystemRunner)
            .assume_yes(self.yes)
            .verbose(self.verbose)
            .run(&mut stdin.lock(), &mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["treebuild"]).unwrap();
        assert_eq!(cli.generator, None);
        assert!(!cli.yes);
    }

    #[test]
    fn test_generator_positional() {
        let cli = Cli::try_parse_from(["treebuild", "Visual Studio 16 2019", "-y"]).unwrap();
        assert_eq!(cli.generator.as_deref(), Some("Visual Studio 16 2019"));
        assert!(cli.yes);
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["treebuild", "Ninja", "extra"]).is_err());
    }
}
