// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The planner itself is total; every variant here comes from loading or
//! resolving a job spec before the builder runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("object '{entity}' references unknown parent '{parent}'")]
    UnknownParent { entity: String, parent: String },

    #[error("object '{0}' is declared more than once")]
    DuplicateEntity(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
