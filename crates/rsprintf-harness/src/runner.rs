//! Fixture execution against the formatting engine.

use std::cell::Cell;

use rsprintf_core::{FormatArg, format_to_buffer, format_to_vec};

use crate::diff;
use crate::fixtures::{CaseArg, FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Observable results of one engine invocation.
#[derive(Debug)]
pub struct CaseExecution {
    /// Text the sink holds afterwards (stored prefix for bounded cases).
    pub output: String,
    /// Total returned by the entry point.
    pub total: usize,
    /// Values stored through `%n` destinations, in argument order.
    pub stored_counts: Vec<i64>,
}

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(verify_case).collect()
    }
}

fn verify_case(case: &FixtureCase) -> VerificationResult {
    let execution = execute_case(case);
    let expected_counts: Vec<i64> = case
        .args
        .iter()
        .filter_map(|a| match a {
            CaseArg::Count { expect } => Some(*expect),
            _ => None,
        })
        .collect();

    let mut notes = Vec::new();
    if execution.total != case.expected_total {
        notes.push(format!(
            "total mismatch: expected {}, got {}",
            case.expected_total, execution.total
        ));
    }
    if execution.stored_counts != expected_counts {
        notes.push(format!(
            "%n mismatch: expected {:?}, got {:?}",
            expected_counts, execution.stored_counts
        ));
    }
    let passed = execution.output == case.expected_output && notes.is_empty();

    let diff_out = if passed {
        None
    } else if execution.output != case.expected_output {
        let mut d = diff::render_diff(&case.expected_output, &execution.output);
        for note in &notes {
            d.push_str(note);
            d.push('\n');
        }
        Some(d)
    } else {
        Some(notes.join("\n"))
    };

    VerificationResult {
        case_name: case.name.clone(),
        spec_section: case.spec_section.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual: execution.output,
        expected_total: case.expected_total,
        actual_total: execution.total,
        diff: diff_out,
    }
}

/// Execute one fixture case against the engine.
#[must_use]
pub fn execute_case(case: &FixtureCase) -> CaseExecution {
    // Owned backing storage first; the argument list borrows from it.
    let strings: Vec<Vec<u8>> = case
        .args
        .iter()
        .filter_map(|a| match a {
            CaseArg::Str(s) => Some(s.clone().into_bytes()),
            _ => None,
        })
        .collect();
    let cells: Vec<Cell<i64>> = case
        .args
        .iter()
        .filter(|a| matches!(a, CaseArg::Count { .. }))
        .map(|_| Cell::new(0))
        .collect();

    let mut next_string = 0;
    let mut next_cell = 0;
    let mut args = Vec::with_capacity(case.args.len());
    for arg in &case.args {
        args.push(match arg {
            CaseArg::Int(v) => FormatArg::Int(*v),
            CaseArg::Uint(v) => FormatArg::Uint(*v),
            CaseArg::Char(c) => FormatArg::Char(*c as u8),
            CaseArg::Str(_) => {
                next_string += 1;
                FormatArg::Str(&strings[next_string - 1])
            }
            CaseArg::Ptr(p) => FormatArg::Ptr(*p as usize),
            CaseArg::Count { .. } => {
                next_cell += 1;
                FormatArg::Count(&cells[next_cell - 1])
            }
        });
    }

    let (bytes, total) = match case.capacity {
        Some(cap) => {
            let mut buf = vec![0u8; cap];
            let total = format_to_buffer(&mut buf, case.format.as_bytes(), &args);
            let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
            (buf[..end].to_vec(), total)
        }
        None => {
            let out = format_to_vec(case.format.as_bytes(), &args);
            let total = out.len();
            (out, total)
        }
    };

    CaseExecution {
        output: String::from_utf8_lossy(&bytes).into_owned(),
        total,
        stored_counts: cells.iter().map(Cell::get).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
