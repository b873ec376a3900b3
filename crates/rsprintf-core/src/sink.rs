//! Output sinks.
//!
//! A sink abstracts where formatted text goes and counts every byte that was
//! logically produced. Two variants: an unbounded stream and a bounded byte
//! buffer. The bounded variant never writes past its limit but keeps
//! counting, so callers detect truncation by comparing the returned total
//! against the capacity, the conventional snprintf return-value contract.
//!
//! Reference: POSIX.1-2024 fprintf/snprintf, ISO C11 7.21.6.5

use std::io::Write;

/// Fill runs on the stream variant are written in chunks of this size.
const FILL_CHUNK: usize = 32;

enum Target<'a> {
    /// Unbounded stream. Write errors are ignored; the running total alone
    /// is the result contract, matching fprintf's "always succeeds" shape
    /// in this engine's error model.
    Stream(&'a mut dyn Write),
    /// Bounded buffer. `limit` is the capacity minus the byte reserved for
    /// the terminating NUL.
    Buffer { buf: &'a mut [u8], limit: usize },
}

/// Destination for formatted output plus the running byte count.
///
/// Invariant: `total` is monotone and counts logical bytes, including bytes
/// the bounded variant had no room to store.
pub struct Sink<'a> {
    target: Target<'a>,
    total: usize,
}

impl<'a> Sink<'a> {
    /// Sink that writes every byte to `out`.
    pub fn stream(out: &'a mut dyn Write) -> Self {
        Self {
            target: Target::Stream(out),
            total: 0,
        }
    }

    /// Sink bounded by `buf`, reserving one byte for the NUL terminator
    /// that [`Sink::finish`] places.
    pub fn buffer(buf: &'a mut [u8]) -> Self {
        let limit = buf.len().saturating_sub(1);
        Self {
            target: Target::Buffer { buf, limit },
            total: 0,
        }
    }

    /// Bytes logically produced so far.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Append `s`.
    pub fn write(&mut self, s: &[u8]) {
        match &mut self.target {
            Target::Stream(out) => {
                let _ = out.write_all(s);
            }
            Target::Buffer { buf, limit } => {
                if self.total < *limit {
                    let take = s.len().min(*limit - self.total);
                    buf[self.total..self.total + take].copy_from_slice(&s[..take]);
                }
            }
        }
        self.total += s.len();
    }

    /// Append `len` repetitions of `byte`.
    pub fn fill(&mut self, byte: u8, len: usize) {
        match &mut self.target {
            Target::Stream(out) => {
                let chunk = [byte; FILL_CHUNK];
                let mut remaining = len;
                while remaining >= FILL_CHUNK {
                    let _ = out.write_all(&chunk);
                    remaining -= FILL_CHUNK;
                }
                if remaining > 0 {
                    let _ = out.write_all(&chunk[..remaining]);
                }
            }
            Target::Buffer { buf, limit } => {
                if self.total < *limit {
                    let take = len.min(*limit - self.total);
                    buf[self.total..self.total + take].fill(byte);
                }
            }
        }
        self.total += len;
    }

    /// Append a single byte.
    pub fn put(&mut self, byte: u8) {
        self.write(&[byte]);
    }

    /// Complete the formatting call: the bounded variant stores the NUL
    /// terminator at `min(total, limit)` (nothing is stored into an empty
    /// buffer). Returns the logical total.
    pub fn finish(self) -> usize {
        if let Target::Buffer { buf, limit } = self.target {
            if !buf.is_empty() {
                buf[self.total.min(limit)] = 0;
            }
        }
        self.total
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
