// src/config/mod.rs

//! Job spec loading and resolution for migplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a job spec from disk (`loader.rs`).
//! - Validate it and resolve parent references into entity descriptors
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    DEFAULT_SPEC_FILE, load_and_validate, load_and_validate_async, load_from_path,
    parse_job_spec, resolve_spec_path,
};
pub use model::{ConfigSection, JobSpec, ObjectConfig, RawJobSpec};
