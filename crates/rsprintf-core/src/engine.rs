//! Format-directive dispatch and entry points.
//!
//! The core loop scans the template left to right, batches literal runs
//! into single sink writes, parses each `%`-directive, resolves `*`
//! operands in textual order (width, precision, value), and routes to the
//! conversion handlers. A conversion that cannot be carried out (unknown
//! letter, size modifier on `c`/`s`, missing or type-mismatched argument)
//! is replayed verbatim as literal output and the argument cursor rewinds,
//! so a failed directive consumes nothing. There is no error return: every
//! failure is recovered locally.
//!
//! Reference: POSIX.1-2024 fprintf/snprintf, ISO C11 7.21.6.1

use std::io::Write;

use crate::args::{ArgReader, FormatArg};
use crate::render::{render_integer, write_field};
use crate::sink::Sink;
use crate::spec::{ConvSpec, Precision, SizeCat, Width, parse_spec};

/// Format into an unbounded stream. Returns the number of bytes produced.
/// Stream write errors are ignored; the count is the whole contract.
pub fn format_to_stream(out: &mut dyn Write, fmt: &[u8], args: &[FormatArg]) -> usize {
    let mut sink = Sink::stream(out);
    format_core(&mut sink, fmt, args);
    sink.finish()
}

/// Format into `buf`, storing at most `buf.len() - 1` bytes plus a NUL
/// terminator. Returns the byte count that would have been produced with
/// unlimited room, so `total >= buf.len()` means the output was truncated.
pub fn format_to_buffer(buf: &mut [u8], fmt: &[u8], args: &[FormatArg]) -> usize {
    let mut sink = Sink::buffer(buf);
    format_core(&mut sink, fmt, args);
    sink.finish()
}

/// Format into a fresh `Vec`.
#[must_use]
pub fn format_to_vec(fmt: &[u8], args: &[FormatArg]) -> Vec<u8> {
    let mut out = Vec::new();
    format_to_stream(&mut out, fmt, args);
    out
}

/// Marker for a conversion that could not be carried out.
struct Failed;

fn format_core(sink: &mut Sink, fmt: &[u8], args: &[FormatArg]) {
    let mut reader = ArgReader::new(args);
    let mut pos = 0;

    while pos < fmt.len() {
        // Batch up non-directive text and flush it in one write.
        let run = fmt[pos..]
            .iter()
            .position(|&b| b == b'%')
            .unwrap_or(fmt.len() - pos);
        if run > 0 {
            sink.write(&fmt[pos..pos + run]);
            pos += run;
        }
        if pos >= fmt.len() {
            break;
        }

        let pct = pos;
        // Look for exactly "%%", so that errors like "%l%d" don't print as
        // a literal '%'.
        if fmt.get(pct + 1) == Some(&b'%') {
            sink.put(b'%');
            pos = pct + 2;
            continue;
        }

        let mark = reader.mark();
        match parse_spec(&fmt[pct + 1..]) {
            Some((mut spec, consumed)) => {
                let end = pct + 1 + consumed;
                if run_conversion(&mut spec, sink, &mut reader).is_err() {
                    reader.rewind(mark);
                    sink.write(&fmt[pct..end]);
                }
                pos = end;
            }
            None => {
                // Text ended inside the directive; replay the tail.
                sink.write(&fmt[pct..]);
                pos = fmt.len();
            }
        }
    }
}

fn run_conversion(
    spec: &mut ConvSpec,
    sink: &mut Sink,
    args: &mut ArgReader,
) -> Result<(), Failed> {
    resolve_star_operands(spec, args)?;
    match spec.conversion {
        b'n' => store_count(spec, sink, args),
        b'c' => print_char(spec, sink, args),
        b's' => print_string(spec, sink, args),
        b'd' | b'i' | b'u' | b'o' | b'x' | b'X' | b'p' => print_integer(spec, sink, args),
        _ => Err(Failed),
    }
}

/// Resolve `*` width and precision from the argument list, in that order.
fn resolve_star_operands(spec: &mut ConvSpec, args: &mut ArgReader) -> Result<(), Failed> {
    if spec.width == Width::FromArg {
        let w = args.word().ok_or(Failed)?;
        // Negative width specifies left justification.
        if w < 0 {
            spec.flags.left_justify = true;
        }
        spec.width = Width::Fixed(w.unsigned_abs().min(i32::MAX as u64) as usize);
    }
    if spec.precision == Precision::FromArg {
        let p = args.word().ok_or(Failed)?;
        // Negative precision acts like 0.
        spec.precision = Precision::Fixed(p.clamp(0, i32::MAX as i64) as usize);
    }
    Ok(())
}

/// `%n`: store the running output total into the argument's cell, narrowed
/// the way the C pointee type would narrow it. Emits nothing.
fn store_count(spec: &ConvSpec, sink: &Sink, args: &mut ArgReader) -> Result<(), Failed> {
    let cell = args.count().ok_or(Failed)?;
    let total = sink.total() as i64;
    let stored = match spec.size {
        SizeCat::Byte => total as i8 as i64,
        SizeCat::Half => total as i16 as i64,
        SizeCat::Word => total as i32 as i64,
        SizeCat::Long
        | SizeCat::LongLong
        | SizeCat::Max
        | SizeCat::Size
        | SizeCat::PtrDiff
        | SizeCat::Ptr => total,
    };
    cell.set(stored);
    Ok(())
}

fn print_char(spec: &ConvSpec, sink: &mut Sink, args: &mut ArgReader) -> Result<(), Failed> {
    // Wide characters ("%lc") are not supported.
    if spec.size != SizeCat::Word {
        return Err(Failed);
    }
    let c = args.byte().ok_or(Failed)?;
    write_field(sink, spec, &[c]);
    Ok(())
}

fn print_string(spec: &ConvSpec, sink: &mut Sink, args: &mut ArgReader) -> Result<(), Failed> {
    // Wide strings ("%ls") are not supported.
    if spec.size != SizeCat::Word {
        return Err(Failed);
    }
    let s = args.string().ok_or(Failed)?;
    let bound = match spec.precision {
        Precision::Fixed(p) => p.min(s.len()),
        Precision::None | Precision::FromArg => s.len(),
    };
    // A NUL inside the bound ends the string early.
    let len = s[..bound]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(bound);
    write_field(sink, spec, &s[..len]);
    Ok(())
}

fn print_integer(spec: &mut ConvSpec, sink: &mut Sink, args: &mut ArgReader) -> Result<(), Failed> {
    match spec.conversion {
        b'd' | b'i' => spec.signed_conv = true,
        b'o' => spec.base = 8,
        b'x' => spec.base = 16,
        b'X' => {
            spec.base = 16;
            spec.caps = true;
        }
        b'p' => {
            spec.base = 16;
            spec.flags.alt_form = true;
        }
        // 'u' keeps the unsigned decimal defaults.
        _ => {}
    }

    let value = if spec.signed_conv {
        args.signed(spec.size).ok_or(Failed)?
    } else if spec.conversion == b'p' {
        args.pointer().ok_or(Failed)?
    } else {
        args.unsigned(spec.size).ok_or(Failed)?
    };

    let rendered = render_integer(value, spec);
    write_field(sink, spec, rendered.as_bytes());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
