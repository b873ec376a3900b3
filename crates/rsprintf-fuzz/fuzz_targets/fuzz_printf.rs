#![no_main]
use std::cell::Cell;

use libfuzzer_sys::fuzz_target;
use rsprintf_core::{FormatArg, format_to_buffer, format_to_vec};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are the format template; a fixed argument deck feeds
    // whatever directives it happens to contain. Nothing may panic, and the
    // stream and bounded-buffer renders must agree on the logical total.
    let counts: Vec<Cell<i64>> = (0..8).map(|_| Cell::new(0)).collect();
    let mut deck = Vec::with_capacity(64);
    for i in 0..64usize {
        deck.push(match i % 8 {
            0 => FormatArg::Int(-12_345),
            1 => FormatArg::Uint(u64::MAX),
            2 => FormatArg::Int(0),
            3 => FormatArg::Char(b'*'),
            4 => FormatArg::Str(b"fuzz\0hidden"),
            5 => FormatArg::Ptr(0xDEAD_BEEF),
            6 => FormatArg::Int(7),
            _ => FormatArg::Count(&counts[i / 8]),
        });
    }

    let stream_total = format_to_vec(data, &deck).len();

    let mut buf = [0u8; 64];
    let buffer_total = format_to_buffer(&mut buf, data, &deck);

    assert_eq!(stream_total, buffer_total);
    assert!(buf.iter().any(|&b| b == 0));
});
