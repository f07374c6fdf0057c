//! CMake configuration and invocation arguments
//!
//! This module builds the argument lists for the configure and build steps.
//! Running them is left to a [`CommandRunner`](crate::exec::CommandRunner).

use std::fmt;
use std::path::{Path, PathBuf};

/// Program name resolved on PATH
pub const CMAKE: &str = "cmake";

/// Oldest CMake release the project's CMakeLists.txt accepts
pub const MIN_CMAKE_VERSION: &str = "3.12.0";

/// Default source directory
pub const DEFAULT_SOURCE_DIR: &str = ".";

/// Default build directory
pub const DEFAULT_BUILD_DIR: &str = "build";

/// One external cmake invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `cmake -S <src> -B <build> ...`
    Configure,
    /// `cmake --build <build>`
    Build,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Configure => write!(f, "configure"),
            Step::Build => write!(f, "build"),
        }
    }
}

/// CMake configuration builder
#[derive(Debug, Clone)]
pub struct CMakeConfig {
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// CMake variables (-D options)
    variables: Vec<(String, String)>,
    /// Generator (e.g., "Ninja", "Visual Studio 16 2019")
    generator: Option<String>,
}

impl Default for CMakeConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_SOURCE_DIR),
            PathBuf::from(DEFAULT_BUILD_DIR),
        )
    }
}

impl CMakeConfig {
    /// Create a configuration that builds the test executable
    pub fn new(source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            source_dir,
            build_dir,
            variables: vec![("BUILD_TESTS".to_string(), "ON".to_string())],
            generator: None,
        }
    }

    /// Set the generator, or clear it with `None`
    pub fn generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn generator_name(&self) -> Option<&str> {
        self.generator.as_deref()
    }

    /// Arguments for the configure step
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            self.source_dir.display().to_string(),
            "-B".to_string(),
            self.build_dir.display().to_string(),
        ];

        for (name, value) in &self.variables {
            args.push(format!("-D{}={}", name, value));
        }

        // Generator goes last and is passed through untouched
        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        args
    }

    /// Arguments for the build step
    pub fn build_args(&self) -> Vec<String> {
        vec!["--build".to_string(), self.build_dir.display().to_string()]
    }

    /// Arguments for the given step
    pub fn args_for(&self, step: Step) -> Vec<String> {
        match step {
            Step::Configure => self.configure_args(),
            Step::Build => self.build_args(),
        }
    }
}

/// Render a command line the way it is echoed to the user
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configure_args() {
        let config = CMakeConfig::default();
        assert_eq!(
            config.configure_args(),
            vec!["-S", ".", "-B", "build", "-DBUILD_TESTS=ON"]
        );
    }

    #[test]
    fn test_generator_appended_unchanged() {
        let config = CMakeConfig::default().generator(Some("Visual Studio 16 2019".to_string()));
        let args = config.configure_args();
        assert_eq!(&args[args.len() - 2..], ["-G", "Visual Studio 16 2019"]);
    }

    #[test]
    fn test_no_generator_flag_without_generator() {
        let args = CMakeConfig::default().configure_args();
        assert!(!args.iter().any(|a| a == "-G"));
    }

    #[test]
    fn test_build_args_use_build_dir() {
        let config = CMakeConfig::new(PathBuf::from("proj"), PathBuf::from("out"));
        assert_eq!(config.build_args(), vec!["--build", "out"]);
        assert_eq!(config.args_for(Step::Build), config.build_args());
    }

    #[test]
    fn test_command_line_joins_with_spaces() {
        let args = CMakeConfig::default().build_args();
        assert_eq!(command_line(CMAKE, &args), "cmake --build build");
    }
}
