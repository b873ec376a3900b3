//! CLI entrypoint for the rsprintf conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rsprintf_harness::fixtures::FixtureSet;
use rsprintf_harness::runner::execute_case;
use rsprintf_harness::structured_log::{LogEmitter, LogEntry, validate_log_line};
use rsprintf_harness::verify::VerificationSummary;
use rsprintf_harness::{ConformanceReport, FixtureCase, TestRunner};

/// Conformance tooling for rsprintf.
#[derive(Debug, Parser)]
#[command(name = "rsprintf-harness")]
#[command(about = "Conformance testing harness for rsprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json twin is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// JSONL structured-log output path (defaults to stderr).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Campaign name recorded in reports and logs.
        #[arg(long, default_value = "fixture-verify")]
        campaign: String,
    },
    /// Format one template from the command line and print the result.
    Render {
        /// Format template.
        #[arg(long)]
        format: String,
        /// Arguments as `kind:value` pairs, e.g. `int:-42`, `uint:255`,
        /// `str:hello`, `char:*`, `ptr:0xbeef`.
        #[arg(value_name = "ARG")]
        args: Vec<String>,
        /// Render through a bounded buffer of this capacity.
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Validate a JSONL structured-log file against the schema.
    LogValidate {
        /// Log file to check.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            campaign,
        } => {
            let sets = load_fixture_sets(&fixture)?;
            if sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }
            let timestamp = format!("{:?}", std::time::SystemTime::now());
            let mut emitter = match log {
                Some(path) => LogEmitter::to_file(&path)?,
                None => LogEmitter::Stderr,
            };

            let runner = TestRunner::new(campaign.clone());
            let mut results = Vec::new();
            for set in &sets {
                eprintln!("Verifying family {} ({} cases)", set.family, set.cases.len());
                results.extend(runner.run(set));
            }
            for result in &results {
                emitter.emit(&LogEntry::for_result(&campaign, &timestamp, result))?;
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("rsprintf Conformance Report"),
                campaign,
                timestamp,
                summary,
            };
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            format,
            args,
            capacity,
        } => {
            let case = FixtureCase {
                name: String::from("render"),
                spec_section: String::new(),
                format,
                args: args
                    .iter()
                    .map(|raw| parse_cli_arg(raw))
                    .collect::<Result<_, _>>()?,
                capacity,
                expected_output: String::new(),
                expected_total: 0,
            };
            let execution = execute_case(&case);
            println!("{}", execution.output);
            eprintln!("total={}", execution.total);
            if !execution.stored_counts.is_empty() {
                eprintln!("counts={:?}", execution.stored_counts);
            }
        }
        Command::LogValidate { log } => {
            let body = std::fs::read_to_string(&log)?;
            let mut checked = 0;
            for (lineno, line) in body.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                validate_log_line(line)
                    .map_err(|e| format!("{}:{}: {e}", log.display(), lineno + 1))?;
                checked += 1;
            }
            eprintln!("{checked} log lines OK");
        }
    }

    Ok(())
}

fn load_fixture_sets(path: &PathBuf) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    if path.is_file() {
        return Ok(vec![FixtureSet::from_file(path)?]);
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut sets = Vec::new();
    for p in paths {
        match FixtureSet::from_file(&p) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", p.display(), err),
        }
    }
    Ok(sets)
}

fn parse_cli_arg(raw: &str) -> Result<rsprintf_harness::CaseArg, String> {
    use rsprintf_harness::CaseArg;

    let (kind, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected kind:value, got {raw:?}"))?;
    match kind {
        "int" => Ok(CaseArg::Int(
            value.parse().map_err(|e| format!("int {value:?}: {e}"))?,
        )),
        "uint" => Ok(CaseArg::Uint(parse_u64(value)?)),
        "ptr" => Ok(CaseArg::Ptr(parse_u64(value)?)),
        "char" => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(CaseArg::Char(c)),
                _ => Err(format!("char wants exactly one character, got {value:?}")),
            }
        }
        "str" => Ok(CaseArg::Str(value.to_owned())),
        "count" => Ok(CaseArg::Count { expect: 0 }),
        _ => Err(format!("unknown argument kind {kind:?}")),
    }
}

fn parse_u64(value: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        value.parse()
    };
    parsed.map_err(|e| format!("unsigned {value:?}: {e}"))
}
