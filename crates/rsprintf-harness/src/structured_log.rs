//! Structured logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record for verification events.
//! - [`LogEmitter`]: writes JSONL lines to a file or stderr.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fixtures::FixtureError;
use crate::verify::VerificationResult;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `campaign`, `level`, `event`. Optional
/// fields carry per-case context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub campaign: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl LogEntry {
    /// Entry describing one verified case.
    #[must_use]
    pub fn for_result(campaign: &str, timestamp: &str, result: &VerificationResult) -> Self {
        Self {
            timestamp: timestamp.to_owned(),
            campaign: campaign.to_owned(),
            level: if result.passed {
                LogLevel::Info
            } else {
                LogLevel::Error
            },
            event: String::from("case_verified"),
            case: Some(result.case_name.clone()),
            outcome: Some(if result.passed {
                Outcome::Pass
            } else {
                Outcome::Fail
            }),
            total: Some(result.actual_total),
            detail: result.diff.clone(),
        }
    }
}

/// Writes JSONL log lines.
pub enum LogEmitter {
    Stderr,
    File(File),
}

impl LogEmitter {
    /// Emitter appending to `path`.
    pub fn to_file(path: &Path) -> Result<Self, FixtureError> {
        Ok(Self::File(File::create(path)?))
    }

    /// Emit one entry as a single JSON line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), FixtureError> {
        let line = serde_json::to_string(entry)?;
        match self {
            Self::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{line}")?;
            }
            Self::File(f) => writeln!(f, "{line}")?,
        }
        Ok(())
    }
}

/// Validate a single JSONL line against the entry schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, FixtureError> {
    Ok(serde_json::from_str(line)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
