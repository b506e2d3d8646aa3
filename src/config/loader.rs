// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{JobSpec, RawJobSpec};
use crate::errors::{PlanError, Result};

/// File name looked up when the job spec path is a working directory.
pub const DEFAULT_SPEC_FILE: &str = "export.toml";

/// Parse job spec TOML without any semantic validation.
pub fn parse_job_spec(contents: &str) -> Result<RawJobSpec> {
    let spec: RawJobSpec = toml::from_str(contents)?;
    Ok(spec)
}

/// Turn a `--config` argument into the job spec file to read.
///
/// - an existing directory is a working directory holding `export.toml`;
/// - anything else is the spec file itself.
///
/// A missing working directory and a missing spec file are reported as
/// separate configuration errors.
pub fn resolve_spec_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    let (dir, file) = if path.is_dir() {
        (path.to_path_buf(), path.join(DEFAULT_SPEC_FILE))
    } else {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        (dir, path.to_path_buf())
    };

    if !dir.is_dir() {
        return Err(PlanError::ConfigError(format!(
            "working directory {:?} does not exist",
            dir
        )));
    }
    if !file.is_file() {
        return Err(PlanError::ConfigError(format!(
            "job spec file {:?} does not exist",
            file
        )));
    }

    Ok(file)
}

/// Load a job spec from a given path and return the raw `RawJobSpec`.
///
/// This only performs TOML deserialization; it does **not** resolve parent
/// references. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawJobSpec> {
    let file = resolve_spec_path(path)?;
    let contents = fs::read_to_string(&file)?;
    parse_job_spec(&contents)
}

/// Load a job spec from path, validate it and resolve its objects into
/// entity descriptors.
///
/// Checks for:
/// - at least one non-excluded object,
/// - empty or duplicate object names,
/// - parent references to undeclared objects (subject to
///   `[config].unresolved_parents`).
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<JobSpec> {
    let raw = load_from_path(&path)?;
    let spec = JobSpec::try_from(raw)?;
    Ok(spec)
}

/// Async variant of [`load_and_validate`] used by the binary.
///
/// Only the file read is asynchronous; parsing and resolution run after the
/// whole file is in memory.
pub async fn load_and_validate_async(path: impl AsRef<Path>) -> Result<JobSpec> {
    let file = resolve_spec_path(path)?;
    let contents = tokio::fs::read_to_string(&file).await?;
    debug!(path = ?file, bytes = contents.len(), "read job spec");
    let raw = parse_job_spec(&contents)?;
    let spec = JobSpec::try_from(raw)?;
    Ok(spec)
}
