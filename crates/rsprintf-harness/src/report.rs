//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report for one verification campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign name.
    pub campaign: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Reference | Total | Status |\n");
        out.push_str("|------|-----------|-------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.case_name, r.spec_section, r.actual_total, status
            ));
        }
        for r in self.summary.results.iter().filter(|r| !r.passed) {
            if let Some(diff) = &r.diff {
                out.push_str(&format!("\n## {}\n\n```\n{}```\n", r.case_name, diff));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    #[test]
    fn markdown_has_summary_and_table() {
        let report = ConformanceReport {
            title: "rsprintf Conformance Report".into(),
            campaign: "smoke".into(),
            timestamp: "2026-08-06T00:00:00Z".into(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "width".into(),
                spec_section: "C11 7.21.6.1p5".into(),
                passed: true,
                expected: "[   42]".into(),
                actual: "[   42]".into(),
                expected_total: 7,
                actual_total: 7,
                diff: None,
            }]),
        };
        let md = report.to_markdown();
        assert!(md.contains("- Passed: 1"));
        assert!(md.contains("| width | C11 7.21.6.1p5 | 7 | PASS |"));
    }

    #[test]
    fn failed_cases_embed_their_diff() {
        let report = ConformanceReport {
            title: "t".into(),
            campaign: "c".into(),
            timestamp: "now".into(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "bad".into(),
                spec_section: "C11".into(),
                passed: false,
                expected: "a".into(),
                actual: "b".into(),
                expected_total: 1,
                actual_total: 1,
                diff: Some("--- expected\n".into()),
            }]),
        };
        let md = report.to_markdown();
        assert!(md.contains("## bad"));
        assert!(md.contains("--- expected"));
    }
}
