//! End-to-end conformance tests exercising the public entry points with
//! whole templates, the way callers use them.

use std::cell::Cell;

use rsprintf_core::{FormatArg, format_to_buffer, format_to_vec};

fn fmt(template: &str, args: &[FormatArg]) -> String {
    String::from_utf8(format_to_vec(template.as_bytes(), args)).unwrap()
}

#[test]
fn width_precision_matrix_for_signed_decimal() {
    let cases: &[(&str, i64, &str)] = &[
        ("[%d]", 12345, "[12345]"),
        ("[%-10d]", 12345, "[12345     ]"),
        ("[%10d]", 12345, "[     12345]"),
        ("[%d]", -1234, "[-1234]"),
        ("[%-10d]", -1234, "[-1234     ]"),
        ("[%10d]", -1234, "[     -1234]"),
        ("[% d]", 1234, "[ 1234]"),
        ("[% d]", -1234, "[-1234]"),
        ("[%+d]", 1234, "[+1234]"),
        ("[%+d]", -1234, "[-1234]"),
        ("[% .7d]", 1234, "[ 0001234]"),
        ("[%+.7d]", -1234, "[-0001234]"),
        ("[%+-10.7d]", 1234, "[+0001234  ]"),
        ("[%+10.7d]", 1234, "[  +0001234]"),
        ("[%07d]", 1234, "[0001234]"),
        ("[%07d]", -1234, "[-001234]"),
        ("[%-07d]", 1234, "[1234   ]"),
        ("[% 07d]", 1234, "[ 001234]"),
        ("[%+07d]", 1234, "[+001234]"),
    ];
    for &(template, value, expected) in cases {
        assert_eq!(
            fmt(template, &[FormatArg::Int(value)]),
            expected,
            "template {template}, value {value}"
        );
    }
}

#[test]
fn radix_matrix_for_unsigned_conversions() {
    let cases: &[(&str, u64, &str)] = &[
        ("[%u]", 4_000_000_000, "[4000000000]"),
        ("[%o]", 0o755, "[755]"),
        ("[%#o]", 0o755, "[0755]"),
        ("[%x]", 0xDEAD_BEEF, "[deadbeef]"),
        ("[%X]", 0xDEAD_BEEF, "[DEADBEEF]"),
        ("[%#x]", 0xDEAD_BEEF, "[0xdeadbeef]"),
        ("[%#X]", 0xDEAD_BEEF, "[0XDEADBEEF]"),
        ("[%#010x]", 0xBEEF, "[0x0000beef]"),
        ("[%12.8o]", 0o755, "[    00000755]"),
    ];
    for &(template, value, expected) in cases {
        assert_eq!(
            fmt(template, &[FormatArg::Uint(value)]),
            expected,
            "template {template}, value {value}"
        );
    }
}

#[test]
fn alternate_form_hex_zero_boundary() {
    // The 0x prefix appears only with nonzero digits; pointers always
    // carry it.
    assert_eq!(fmt("[%#x]", &[FormatArg::Uint(0)]), "[0]");
    assert_eq!(fmt("[%#.4x]", &[FormatArg::Uint(0)]), "[0000]");
    assert_eq!(fmt("[%#x]", &[FormatArg::Uint(255)]), "[0xff]");
    assert_eq!(fmt("[%p]", &[FormatArg::Ptr(0)]), "[0x0]");
}

#[test]
fn length_modifier_matrix() {
    let cases: &[(&str, i64, &str)] = &[
        ("%hhd", 123_456_789, "21"),
        ("%hhd", -123_456_789, "-21"),
        ("%hd", 123_456_789, "-13035"),
        ("%hu", -123_456_789, "13035"),
        ("%ld", -123_456_789, "-123456789"),
        ("%lld", i64::MIN, "-9223372036854775808"),
        ("%jd", i64::MAX, "9223372036854775807"),
        ("%zd", -1, "-1"),
        ("%td", -9999, "-9999"),
    ];
    for &(template, value, expected) in cases {
        assert_eq!(
            fmt(template, &[FormatArg::Int(value)]),
            expected,
            "template {template}, value {value}"
        );
    }
    assert_eq!(fmt("%ju", &[FormatArg::Uint(u64::MAX)]), "18446744073709551615");
    assert_eq!(fmt("%zu", &[FormatArg::Uint(u64::MAX)]), "18446744073709551615");
}

#[test]
fn percent_runs_round_trip() {
    assert_eq!(fmt("%%", &[]), "%");
    assert_eq!(fmt("%%%%", &[]), "%%");
    assert_eq!(fmt("%%%%%%", &[]), "%%%");
    assert_eq!(fmt("a%%b%%c", &[]), "a%b%c");
}

#[test]
fn zero_precision_zero_prints_nothing_zero_width_prints_something() {
    let zeros = [FormatArg::Int(0); 6];
    assert_eq!(fmt("[%.d%.i%.u%.o%.x%.X]", &zeros), "[]");

    let pairs: Vec<FormatArg> = (0..6).flat_map(|_| [FormatArg::Int(0), FormatArg::Int(0)]).collect();
    assert_eq!(fmt("[%*d%*i%*u%*o%*x%*X]", &pairs), "[000000]");
}

#[test]
fn star_width_sweep_matches_justification() {
    // Positive star widths right-justify, negative ones left-justify.
    for w in 1..=10i64 {
        let expected = format!("{}x", " ".repeat(w as usize - 1));
        assert_eq!(
            fmt("%*s", &[FormatArg::Int(w), FormatArg::Str(b"x")]),
            expected
        );
        let expected = format!("x{}", " ".repeat(w as usize - 1));
        assert_eq!(
            fmt("%*s", &[FormatArg::Int(-w), FormatArg::Str(b"x")]),
            expected
        );
    }
}

#[test]
fn star_precision_sweep_truncates_strings() {
    let s = b"01234567";
    for p in 0..=10i64 {
        let keep = (p as usize).min(s.len());
        let expected = String::from_utf8_lossy(&s[..keep]).into_owned();
        assert_eq!(
            fmt("%.*s", &[FormatArg::Int(p), FormatArg::Str(s)]),
            expected,
            "precision {p}"
        );
    }
    // Negative precision clamps to zero.
    assert_eq!(fmt("%.*s", &[FormatArg::Int(-3), FormatArg::Str(s)]), "");
}

#[test]
fn snprintf_contract_across_capacities() {
    // The same render into ever-smaller buffers: the total never changes,
    // the stored prefix shrinks, and the NUL is always in bounds.
    let args = [
        FormatArg::Uint(0xDEAD_BEEF_DEAD_BEEF),
        FormatArg::Uint(0xABCD_ABCD_ABCD_ABCD),
    ];
    let template = b"This is a test: %.16X%.16X";
    let full = format_to_vec(template, &args);
    assert_eq!(full.len(), 48);

    for cap in (0..=48).rev() {
        let mut buf = vec![0xFFu8; cap];
        let total = format_to_buffer(&mut buf, template, &args);
        assert_eq!(total, 48, "capacity {cap}");
        if cap > 0 {
            assert_eq!(&buf[..cap - 1], &full[..cap - 1]);
            assert_eq!(buf[cap - 1], 0);
        }
    }
}

#[test]
fn count_directive_all_sizes() {
    let cells: Vec<Cell<i64>> = (0..8).map(|_| Cell::new(-9999)).collect();
    let args: Vec<FormatArg> = cells.iter().map(FormatArg::Count).collect();
    let out = fmt("ABCDE%hhn%hn%n%ln%lln%jn%zn%tn", &args);
    assert_eq!(out, "ABCDE");
    for cell in &cells {
        assert_eq!(cell.get(), 5);
    }
}

#[test]
fn failed_conversions_replay_and_preserve_arguments() {
    // A bad directive mid-template disturbs nothing around it.
    assert_eq!(
        fmt("%d %q %d", &[FormatArg::Int(1), FormatArg::Int(2)]),
        "1 %q 2"
    );
    // The rejected %lc leaves its argument for the %c that follows.
    assert_eq!(fmt("%lc%c", &[FormatArg::Char(b'y')]), "%lcy");
}

#[test]
fn fetch_order_is_textual_order() {
    // Width, then precision, then value; measurable because the three
    // arguments have distinct roles.
    assert_eq!(
        fmt(
            "%*.*d",
            &[FormatArg::Int(9), FormatArg::Int(5), FormatArg::Int(7)]
        ),
        "    00007"
    );
}

#[test]
fn independent_calls_share_nothing() {
    // Descriptor and sink state is call-local: interleaved calls with
    // different flags cannot contaminate each other.
    let a = fmt("[%08.3x]", &[FormatArg::Uint(0xAB)]);
    let b = fmt("[%x]", &[FormatArg::Uint(0xAB)]);
    assert_eq!(a, "[     0ab]");
    assert_eq!(b, "[ab]");
}
