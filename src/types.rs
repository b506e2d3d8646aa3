use std::fmt;

use serde::{Deserialize, Serialize};

/// What the migration does with an object's records.
///
/// Only `Readonly` matters to the planner: read-only objects are never
/// written, so they are scheduled ahead of everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Update,
    Upsert,
    Readonly,
    Delete,
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Upsert
    }
}

impl Operation {
    pub fn is_readonly(self) -> bool {
        matches!(self, Operation::Readonly)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Upsert => "upsert",
            Operation::Readonly => "readonly",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a `lookups` / `master_details` entry that names an object
/// not declared anywhere in the job spec.
///
/// - `Error`: reject the job spec (default).
/// - `Ignore`: drop the reference and keep planning; the parent is treated as
///   living outside this job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedParentPolicy {
    Error,
    Ignore,
}

impl Default for UnresolvedParentPolicy {
    fn default() -> Self {
        UnresolvedParentPolicy::Error
    }
}
