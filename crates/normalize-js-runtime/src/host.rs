//! Host-environment helpers whose behavior differs subtly from the Rust
//! standard library: `Math.round`, `String.prototype.charCodeAt`,
//! `String.prototype.substring`, `Array.prototype.pop`, `Date.now`, and
//! `console.log`.
//!
//! String positions are UTF-16 code units, as in the source language.

use crate::coerce::{to_display_string, to_number};
use crate::config::{ConsoleConfig, OutputStream};
use crate::value::{ArrayRef, Value};
use std::io::{self, Write};

/// `Math.round`: halves round toward positive infinity (`floor(n + 0.5)`).
///
/// `NaN` and the infinities pass through.
pub fn round(n: &Value) -> f64 {
    let n = to_number(n);
    if !n.is_finite() {
        return n;
    }
    // Both zeros come out as +0.
    (n + 0.5).floor() + 0.0
}

/// `s.charCodeAt(i)`. `NaN` when `i` is `NaN` or out of range.
pub fn char_code_at(s: &str, i: &Value) -> f64 {
    let i = to_number(i);
    if i.is_nan() {
        return f64::NAN;
    }
    let i = i.trunc();
    if i < 0.0 {
        return f64::NAN;
    }
    s.encode_utf16()
        .nth(i as usize)
        .map_or(f64::NAN, f64::from)
}

/// `s.substring(start, end)`.
///
/// `NaN` bounds become `0`, a missing or `undefined` end is the length,
/// both bounds clamp to `[0, length]`, and inverted bounds swap.
///
/// Bounds that split a surrogate pair leave a lone surrogate, which a Rust
/// string cannot hold; it comes back as U+FFFD.
pub fn substring(s: &str, start: &Value, end: Option<&Value>) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    let len = units.len();

    let start = clamp_index(to_number(start), len);
    let end = match end {
        None | Some(Value::Undefined) => len,
        Some(v) => clamp_index(to_number(v), len),
    };
    let (from, to) = if start > end { (end, start) } else { (start, end) };

    String::from_utf16_lossy(&units[from..to])
}

fn clamp_index(n: f64, len: usize) -> usize {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n >= len as f64 {
        len
    } else {
        n as usize
    }
}

/// `arr.pop()`. An empty array yields `undefined`.
pub fn array_pop(arr: &ArrayRef) -> Value {
    arr.pop().unwrap_or_default()
}

/// `Date.now()`: milliseconds since the Unix epoch.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Space-joined display strings, as `console.log` prints them.
pub fn format_line(values: &[Value]) -> String {
    values
        .iter()
        .map(to_display_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `console.log(...values)` to standard output.
pub fn write_line(values: &[Value]) -> io::Result<()> {
    Console::default().log(values)
}

/// A `console` bound to an output configuration.
#[derive(Debug, Clone, Default)]
pub struct Console {
    config: ConsoleConfig,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// `console.log`, written to the configured stream.
    pub fn log(&self, values: &[Value]) -> io::Result<()> {
        self.log_to(&mut io::stdout().lock(), &mut io::stderr().lock(), values)
    }

    /// `console.log` against explicit stdout and stderr sinks.
    pub fn log_to(
        &self,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
        values: &[Value],
    ) -> io::Result<()> {
        let line = format_line(values);
        tracing::trace!(stream = ?self.config.stream, %line, "console.log");
        match self.config.stream {
            OutputStream::Stdout => write_to(stdout, &line),
            OutputStream::Stderr => write_to(stderr, &line),
        }
    }

    /// `console.error`, always written to standard error.
    pub fn error(&self, values: &[Value]) -> io::Result<()> {
        let line = format_line(values);
        tracing::trace!(%line, "console.error");
        write_to(&mut io::stderr().lock(), &line)
    }
}

/// Write one console line to an arbitrary sink.
pub fn write_to(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}
