//! Tool detection and validation
//!
//! Looks up required build tools on PATH and reports a helpful hint when one
//! is missing.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use semver::Version;
use which::which;

use crate::error::{hints, TreebuildError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
    /// First line of `<tool> --version` (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    let path = which(tool_name).ok()?;
    let version = get_tool_version(&path);
    Some(ToolInfo {
        name: tool_name.to_string(),
        path,
        version,
    })
}

/// Get tool version by running `tool --version`
fn get_tool_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().next().map(|line| line.trim().to_string())
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(TreebuildError::missing_tool(tool_name, required_for, get_tool_hint(tool_name)).into()),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "cmake" => hints::cmake(),
        _ => hints::generic(),
    }
}

/// Parse "cmake version X.Y.Z" into a semantic version
pub fn parse_cmake_version(line: &str) -> Option<Version> {
    let raw = line.trim().strip_prefix("cmake version ")?.trim();
    Version::parse(raw).ok().or_else(|| {
        // Some distro builds report only "X.Y"
        let mut parts = raw.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(Version::new(major, minor, 0))
    })
}

/// Returns the detected version when it is older than `minimum`
pub fn version_below(line: &str, minimum: &str) -> Option<Version> {
    let found = parse_cmake_version(line)?;
    let minimum = Version::parse(minimum).ok()?;
    // Release candidates of the minimum still count as the minimum
    let comparable = Version::new(found.major, found.minor, found.patch);
    (comparable < minimum).then_some(found)
}
