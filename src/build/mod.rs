//! Build orchestration module
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → build/pipeline.rs → exec::CommandRunner → CMake
//! ```
//!
//! ## Modules
//!
//! - `cmake` - CMake argument lists for the configure and build steps
//! - `pipeline` - Confirmation prompt, step sequencing and result reporting

pub mod cmake;
pub mod pipeline;

pub use cmake::{CMakeConfig, Step};
pub use pipeline::{BuildPipeline, Outcome};
