//! Conversion specifier parsing.
//!
//! Parses one `%`-directive into a descriptor: flags, field width,
//! precision, operand size, and the conversion letter. The parser is purely
//! textual (`*` operands are resolved later by the dispatcher, in argument
//! order) and it does not judge the conversion letter: an unknown letter
//! still parses, so a failed directive can be replayed verbatim from its
//! `%` through the last byte it consumed.
//!
//! Reference: ISO C11 7.21.6.1 (fprintf conversion syntax)

/// Sign display selected by the `+` and space flags.
///
/// Space takes effect only when `+` was not also given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignMode {
    /// Negative values get `-`, non-negative values get nothing.
    #[default]
    Default,
    /// `+`: non-negative values get an explicit `+`.
    Always,
    /// space: non-negative values get a leading space.
    Space,
}

/// Operand size category selected by the length modifier.
///
/// The width mapping is fixed: `Byte` = 8, `Half` = 16, `Word` = 32, and
/// everything else 64 bits, independent of the host's C type widths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeCat {
    /// `hh`
    Byte,
    /// `h`
    Half,
    /// unmodified conversions
    #[default]
    Word,
    /// `l`
    Long,
    /// `ll`
    LongLong,
    /// `j`
    Max,
    /// `z`
    Size,
    /// `t`
    PtrDiff,
    /// `p` conversions; overrides any written modifier.
    Ptr,
}

/// Flags parsed from a conversion specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvFlags {
    /// `0`
    pub zero_pad: bool,
    /// `-`
    pub left_justify: bool,
    /// `#`
    pub alt_form: bool,
}

/// Field width. `Fixed(0)` (reachable only through `*`) is distinct from
/// `None`: it is an explicit width and never suppresses output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    None,
    Fixed(usize),
    /// `*`: fetch a signed word argument; negative forces left justification.
    FromArg,
}

/// Precision. `Fixed(0)` is distinct from `None`: precision 0 with value 0
/// renders an empty numeric field, while no precision renders `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    None,
    Fixed(usize),
    /// `.*`: fetch a signed word argument; negative acts like 0.
    FromArg,
}

/// A parsed conversion specifier.
///
/// Built fresh for every directive and discarded afterwards, so no state
/// leaks between specifiers. The default value is all-false/zero with a
/// decimal radix; `caps`, `signed_conv`, and `base` are refined by the
/// integer conversion handler once the letter is classified.
#[derive(Debug, Clone)]
pub struct ConvSpec {
    pub flags: ConvFlags,
    pub sign: SignMode,
    pub size: SizeCat,
    pub width: Width,
    pub precision: Precision,
    /// Raw conversion letter byte.
    pub conversion: u8,
    /// Uppercase digit alphabet (`X`).
    pub caps: bool,
    /// Signed integer conversion (`d`, `i`).
    pub signed_conv: bool,
    /// Radix: 8, 10, or 16.
    pub base: u32,
}

impl Default for ConvSpec {
    fn default() -> Self {
        Self {
            flags: ConvFlags::default(),
            sign: SignMode::default(),
            size: SizeCat::default(),
            width: Width::None,
            precision: Precision::None,
            conversion: 0,
            caps: false,
            signed_conv: false,
            base: 10,
        }
    }
}

/// Parse one conversion specifier starting at the byte after `%`.
///
/// Consumes flags, width, precision, length modifier, and one conversion
/// letter, in that order, and returns the descriptor plus the byte count
/// consumed. Returns `None` when the text ends before a conversion letter;
/// the dispatcher then replays everything from the `%` as literal output.
pub fn parse_spec(fmt: &[u8]) -> Option<(ConvSpec, usize)> {
    let mut spec = ConvSpec::default();
    let mut pos = 0;

    pos = parse_flags(fmt, pos, &mut spec);
    pos = parse_width(fmt, pos, &mut spec);
    pos = parse_precision(fmt, pos, &mut spec);
    pos = parse_length(fmt, pos, &mut spec);

    spec.conversion = *fmt.get(pos)?;
    Some((spec, pos + 1))
}

/// Flags may appear in any order and any number of times.
fn parse_flags(fmt: &[u8], mut pos: usize, spec: &mut ConvSpec) -> usize {
    let mut sign_space = false;
    while let Some(&b) = fmt.get(pos) {
        match b {
            b'0' => spec.flags.zero_pad = true,
            b'-' => spec.flags.left_justify = true,
            b'+' => spec.sign = SignMode::Always,
            b'#' => spec.flags.alt_form = true,
            b' ' => sign_space = true,
            _ => break,
        }
        pos += 1;
    }
    // Space takes effect only if '+' was not also given.
    if sign_space && spec.sign == SignMode::Default {
        spec.sign = SignMode::Space;
    }
    pos
}

fn parse_width(fmt: &[u8], mut pos: usize, spec: &mut ConvSpec) -> usize {
    if fmt.get(pos) == Some(&b'*') {
        spec.width = Width::FromArg;
        return pos + 1;
    }
    let start = pos;
    while fmt.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    if pos > start {
        spec.width = Width::Fixed(parse_decimal(&fmt[start..pos]));
    }
    pos
}

fn parse_precision(fmt: &[u8], mut pos: usize, spec: &mut ConvSpec) -> usize {
    if fmt.get(pos) != Some(&b'.') {
        return pos;
    }
    pos += 1;
    if fmt.get(pos) == Some(&b'*') {
        spec.precision = Precision::FromArg;
        return pos + 1;
    }
    // A bare '.' is an explicit precision of 0.
    let start = pos;
    while fmt.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    spec.precision = Precision::Fixed(if pos > start {
        parse_decimal(&fmt[start..pos])
    } else {
        0
    });
    pos
}

/// Length modifiers `hh`, `h`, `l`, `ll`, `j`, `z`, `t`. A `p` conversion
/// letter next in the text overrides whatever was written: pointers always
/// use the fixed pointer width.
fn parse_length(fmt: &[u8], mut pos: usize, spec: &mut ConvSpec) -> usize {
    match fmt.get(pos).copied() {
        Some(b'h') => {
            pos += 1;
            if fmt.get(pos) == Some(&b'h') {
                pos += 1;
                spec.size = SizeCat::Byte;
            } else {
                spec.size = SizeCat::Half;
            }
        }
        Some(b'l') => {
            pos += 1;
            if fmt.get(pos) == Some(&b'l') {
                pos += 1;
                spec.size = SizeCat::LongLong;
            } else {
                spec.size = SizeCat::Long;
            }
        }
        Some(b'j') => {
            pos += 1;
            spec.size = SizeCat::Max;
        }
        Some(b'z') => {
            pos += 1;
            spec.size = SizeCat::Size;
        }
        Some(b't') => {
            pos += 1;
            spec.size = SizeCat::PtrDiff;
        }
        _ => {}
    }
    if fmt.get(pos) == Some(&b'p') {
        spec.size = SizeCat::Ptr;
    }
    pos
}

fn parse_decimal(digits: &[u8]) -> usize {
    let mut value = 0_usize;
    for &d in digits {
        value = value.saturating_mul(10).saturating_add((d - b'0') as usize);
    }
    value
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
