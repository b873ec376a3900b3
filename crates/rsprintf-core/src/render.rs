//! Integer rendering and field layout.
//!
//! Converts a 64-bit value to digit text in the descriptor's radix,
//! applying sign, alternate-form prefix, and precision/zero-padding rules
//! inside a fixed scratch buffer. Field-width padding happens afterwards in
//! [`write_field`] and is always spaces: zero fill is entirely the
//! renderer's business, so it can never be applied twice and string or
//! character conversions never see it.
//!
//! Reference: ISO C11 7.21.6.1 (d, i, u, o, x, X conversions)

use crate::sink::Sink;
use crate::spec::{ConvSpec, Precision, SignMode, Width};

/// Scratch capacity for one integer conversion: the widest supported
/// magnitude in octal plus sign and radix prefix, with head room for a
/// 128-bit wide type. Zero padding is bounded by this capacity, which
/// deliberately undercuts the 4095-byte minimum field length ISO C asks
/// for.
pub const INT_BUF_SIZE: usize = 48;

/// Sign bit of the common 64-bit representation.
const SIGN_BIT: u64 = 1 << 63;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// An integer rendered into its scratch buffer, filled from the end.
pub struct RenderedInt {
    buf: [u8; INT_BUF_SIZE],
    start: usize,
}

impl RenderedInt {
    /// The rendered text: sign, prefix, zero padding, digits.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Render `value` (a 64-bit pattern; for signed conversions the MSB is the
/// sign) according to the descriptor's radix, sign mode, alternate form,
/// and precision.
pub fn render_integer(value: u64, spec: &ConvSpec) -> RenderedInt {
    let mut buf = [0u8; INT_BUF_SIZE];
    let mut idx = INT_BUF_SIZE;

    let (mut prec, soft_prec) = resolve_precision(spec);

    // Print nothing if value and precision are both 0, unless alternate-form
    // octal still owes its leading 0. The sole case with no digits at all;
    // the sign is suppressed along with them.
    if value == 0 && prec == 0 && !(spec.flags.alt_form && spec.base == 8) {
        return RenderedInt {
            buf,
            start: INT_BUF_SIZE,
        };
    }

    // Sign resolution, for signed conversions only. Negation through the
    // unsigned pattern is safe for the minimum representable value.
    let mut magnitude = value;
    let mut sign_char: Option<u8> = None;
    if spec.signed_conv {
        if value & SIGN_BIT != 0 {
            sign_char = Some(b'-');
            magnitude = magnitude.wrapping_neg();
        } else if spec.sign == SignMode::Always {
            sign_char = Some(b'+');
        } else if spec.sign == SignMode::Space {
            sign_char = Some(b' ');
        }
    }

    // Digits, least significant first; always at least one.
    let digits = if spec.caps { DIGITS_UPPER } else { DIGITS_LOWER };
    let base = spec.base as u64;
    loop {
        idx -= 1;
        buf[idx] = digits[(magnitude % base) as usize];
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    // The 0x/0X prefix is owed only when there are nonzero digits; pointer
    // conversions always carry it.
    let hex_prefix =
        spec.flags.alt_form && spec.base == 16 && (value != 0 || spec.conversion == b'p');
    let alt_octal = spec.flags.alt_form && spec.base == 8;

    // A precision that came from the width field gives ground to whatever
    // else lands before the padding zeros.
    if soft_prec {
        if hex_prefix {
            prec = prec.saturating_sub(2);
        }
        if alt_octal && buf[idx] != b'0' {
            prec = prec.saturating_sub(1);
        }
        if sign_char.is_some() {
            prec = prec.saturating_sub(1);
        }
        prec = prec.max(1);
    }

    // Zero-pad out to the precision, bounded so the rendered field fits the
    // scratch buffer with room reserved for the prefix and sign.
    let mut pad_floor = if prec < INT_BUF_SIZE - 1 {
        INT_BUF_SIZE - prec
    } else {
        1
    };
    if hex_prefix && pad_floor < 3 {
        pad_floor = 3;
    }
    if alt_octal && pad_floor < 2 {
        pad_floor = 2;
    }
    if sign_char.is_some() && pad_floor < 2 {
        pad_floor = 2;
    }
    while idx > pad_floor {
        idx -= 1;
        buf[idx] = b'0';
    }

    // Alternate-form octal: one leading 0, unless a 0 already leads.
    if alt_octal && buf[idx] != b'0' {
        idx -= 1;
        buf[idx] = b'0';
    }

    if hex_prefix {
        idx -= 1;
        buf[idx] = if spec.caps { b'X' } else { b'x' };
        idx -= 1;
        buf[idx] = b'0';
    }

    // Sign goes outermost.
    if let Some(s) = sign_char {
        idx -= 1;
        buf[idx] = s;
    }

    RenderedInt { buf, start: idx }
}

/// Effective precision and whether it was borrowed from the width.
///
/// With no explicit precision, the combination of zero pad, an explicit
/// nonzero width, and right justification turns the width into a "soft"
/// precision target: zero-filling a right-justified integer field and
/// zero-padding its digits are the same thing.
fn resolve_precision(spec: &ConvSpec) -> (usize, bool) {
    match spec.precision {
        Precision::Fixed(p) => (p, false),
        Precision::None | Precision::FromArg => {
            if spec.flags.zero_pad && !spec.flags.left_justify {
                if let Width::Fixed(w) = spec.width {
                    if w > 0 {
                        return (w, true);
                    }
                }
            }
            (1, false)
        }
    }
}

/// Emit `text` into `sink` honoring the descriptor's width and
/// justification. Fill is always spaces.
pub fn write_field(sink: &mut Sink, spec: &ConvSpec, text: &[u8]) {
    let width = match spec.width {
        Width::Fixed(w) => w,
        Width::None | Width::FromArg => 0,
    };
    let fill = width.saturating_sub(text.len());
    if !spec.flags.left_justify && fill > 0 {
        sink.fill(b' ', fill);
    }
    sink.write(text);
    if spec.flags.left_justify && fill > 0 {
        sink.fill(b' ', fill);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
