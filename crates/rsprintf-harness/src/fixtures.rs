//! Fixture loading and management.
//!
//! A fixture case names one formatting call: template, typed arguments,
//! sink selection, and the expected observable results (output text, the
//! returned total, and the values stored through `%n` destinations).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixture schema version accepted by this harness.
pub const FIXTURE_VERSION: &str = "v1";

/// Errors raised while loading fixture sets.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported fixture version {found:?}, expected {FIXTURE_VERSION:?}")]
    Version { found: String },
}

/// One argument in a fixture case, mirroring the engine's typed argument
/// list. `count` carries the value the engine is expected to store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseArg {
    Int(i64),
    Uint(u64),
    Char(char),
    Str(String),
    Ptr(u64),
    Count { expect: i64 },
}

/// A single formatted-output fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// ISO C / POSIX reference for the behavior under test.
    pub spec_section: String,
    /// Format template.
    pub format: String,
    /// Typed arguments, consumed left to right.
    #[serde(default)]
    pub args: Vec<CaseArg>,
    /// Bounded-buffer capacity; absent means the unbounded stream sink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Text the sink must hold afterwards (the stored prefix, for bounded
    /// cases).
    pub expected_output: String,
    /// Total the entry point must return.
    pub expected_total: usize,
}

/// A collection of fixture cases for one behavior family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Behavior family name (e.g. "printf/core").
    pub family: String,
    /// UTC timestamp of authoring.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let set: FixtureSet = serde_json::from_str(json)?;
        if set.version != FIXTURE_VERSION {
            return Err(FixtureError::Version { found: set.version });
        }
        Ok(set)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
