//! Diff rendering for fixture comparison.
//!
//! Formatted output is usually one short line where whitespace matters, so
//! the diff quotes both strings with escapes visible and points at the
//! first mismatching byte.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }
    let common = expected
        .bytes()
        .zip(actual.bytes())
        .take_while(|(e, a)| e == a)
        .count();
    let mut out = String::new();
    out.push_str(&format!("--- expected ({} bytes)\n", expected.len()));
    out.push_str(&format!("{expected:?}\n"));
    out.push_str(&format!("+++ actual ({} bytes)\n", actual.len()));
    out.push_str(&format!("{actual:?}\n"));
    out.push_str(&format!("@@ first mismatch at byte {common} @@\n"));
    out
}
