//! # rsprintf-core
//!
//! Safe Rust implementation of a printf-style formatted-output engine.
//!
//! A format template plus an explicit, typed argument list produces text,
//! directed either to an unbounded stream or into a caller-supplied bounded
//! buffer. Supported: the `s`, `c`, `d`, `i`, `u`, `o`, `x`, `X`, `p`, `n`,
//! and `%` conversions with the full flag/width/precision/length-modifier
//! syntax, including `*` operands. Not supported: floating point, locale
//! grouping, and wide characters.
//!
//! No `unsafe` code is permitted in this crate.
//!
//! Reference: POSIX.1-2024 fprintf/snprintf, ISO C11 7.21.6

#![deny(unsafe_code)]

pub mod args;
pub mod engine;
pub mod render;
pub mod sink;
pub mod spec;

pub use args::{ArgReader, FormatArg};
pub use engine::{format_to_buffer, format_to_stream, format_to_vec};
pub use sink::Sink;
pub use spec::{ConvFlags, ConvSpec, Precision, SignMode, SizeCat, Width, parse_spec};
