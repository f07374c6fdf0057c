//! Error types and helpers for user-friendly error messages
//!
//! Errors carry an actionable hint where one exists so the user can fix the
//! environment without reading the source.

use std::io;

use thiserror::Error;

use crate::build::Step;

/// Errors raised while orchestrating the build
#[derive(Error, Debug)]
pub enum TreebuildError {
    /// An external cmake invocation returned a non-zero exit status
    #[error("{step} step failed with error code {exit_code}")]
    StepFailed { step: Step, exit_code: i32 },

    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Reading the confirmation answer failed
    #[error("Failed to read confirmation from standard input")]
    Prompt {
        #[source]
        source: io::Error,
    },
}

impl TreebuildError {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            TreebuildError::MissingTool {
                required_for, hint, ..
            } => {
                eprintln!("Required for: {}", required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            TreebuildError::Prompt { source } => {
                eprintln!("  • {}", source);
            }
            TreebuildError::StepFailed { .. } => {}
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake 3.12 or newer from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }

    /// Fallback hint for any other tool
    pub fn generic() -> &'static str {
        "Install this tool and ensure it's in your PATH"
    }
}
