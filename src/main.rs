//! treebuild - build automation for the Simple Binary Tree project
//!
//! Prepares the CMake build files and builds the tests executable.
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → build/pipeline.rs → cmake -S/-B → cmake --build
//! ```

mod build;
mod cli;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::TreebuildError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            match err.downcast_ref::<TreebuildError>() {
                Some(known) => known.display_with_hints(),
                None => utils::terminal::print_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}
