//! Main bump workflow
//!
//! Everything the workflow needs from the process (arguments, environment,
//! working directory) is gathered into a [`BumpRequest`] at the boundary, so
//! [`bump`] itself only touches the one build file it is pointed at.

use std::env::{self, VarError};
use std::fs;
use std::path::PathBuf;

use crate::domain::{replace_fallback_version, VersionString};
use crate::error::{BumpError, Result};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    /// Version as supplied by the user, `v` prefix and all
    pub raw_input: String,

    /// Build file holding the fallback version
    pub build_file: PathBuf,

    /// Validate and locate, but leave the file alone
    pub dry_run: bool,
}

impl BumpRequest {
    /// Builds a request, reading `env_name` when `arg` is absent or empty.
    ///
    /// A value that is not valid UTF-8 is decoded lossily, so it fails
    /// validation with the user's input echoed instead of reading as missing.
    pub fn from_env(
        arg: Option<&str>,
        env_name: &str,
        build_file: impl Into<PathBuf>,
        dry_run: bool,
    ) -> Self {
        let env_value = match env::var(env_name) {
            Ok(value) => Some(value),
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
            Err(VarError::NotPresent) => None,
        };
        BumpRequest {
            raw_input: resolve_raw_input(arg, env_value.as_deref()),
            build_file: build_file.into(),
            dry_run,
        }
    }
}

/// Picks the version source: the argument wins unless it is absent or empty.
///
/// The chosen value is trimmed. A whitespace-only argument still wins over
/// the environment and ends up empty.
pub fn resolve_raw_input(arg: Option<&str>, env_value: Option<&str>) -> String {
    arg.filter(|a| !a.is_empty())
        .or(env_value)
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The version now in the build file
    pub version: VersionString,

    /// The fallback value that was replaced
    pub previous: String,

    /// The build file that was patched
    pub build_file: PathBuf,

    /// False for a dry run
    pub written: bool,
}

impl BumpOutcome {
    /// True if the build file already carried this version
    pub fn is_unchanged(&self) -> bool {
        self.previous == self.version.as_str()
    }

    /// True if both sides are strict SemVer and the new one is lower
    pub fn is_downgrade(&self) -> bool {
        let previous = VersionString::parse(&self.previous)
            .ok()
            .and_then(|v| v.to_semver());
        match (previous, self.version.to_semver()) {
            (Some(old), Some(new)) => new < old,
            _ => false,
        }
    }
}

/// Validates the requested version and patches it into the build file.
///
/// Steps, each an early exit on failure:
/// 1. Reject empty input
/// 2. Strip a leading `v`/`V` and validate the version
/// 3. Read the build file
/// 4. Replace the fallback version literal
/// 5. Write the file back (unless dry run)
///
/// On any error the build file is left untouched.
pub fn bump(request: &BumpRequest) -> Result<BumpOutcome> {
    let raw = request.raw_input.trim();
    if raw.is_empty() {
        return Err(BumpError::MissingArgument);
    }

    let version = VersionString::parse(raw)?;

    let path = &request.build_file;
    let content = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;

    let patch = replace_fallback_version(&content, version.as_str())
        .ok_or_else(|| BumpError::PatternNotFound { path: path.clone() })?;

    if !request.dry_run {
        fs::write(path, &patch.content).map_err(|e| BumpError::io(path, e))?;
    }

    Ok(BumpOutcome {
        version,
        previous: patch.previous,
        build_file: path.clone(),
        written: !request.dry_run,
    })
}
