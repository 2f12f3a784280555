//! Human-readable output: the run summary and the formatting helpers shared
//! with the benchmark harness.

use std::fmt;
use std::time::Duration;

use crate::bound::Bound;

/// Summary of one timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub bound: Bound,
    pub prime_count: usize,
    pub elapsed: Duration,
    /// Approximate sieve memory in bytes.
    pub memory_bytes: usize,
}

impl Report {
    /// Memory is estimated as one bit per index, `bound / 8` bytes.
    pub fn new(bound: Bound, prime_count: usize, elapsed: Duration) -> Self {
        Report { bound, prime_count, elapsed, memory_bytes: bound.get() as usize / 8 }
    }

    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn kilobytes(&self) -> f64 {
        self.memory_bytes as f64 / 1024.0
    }

    pub fn megabytes(&self) -> f64 {
        self.kilobytes() / 1024.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Primes upto {} : {}", self.bound, self.prime_count)?;
        writeln!(f, "Total Time Taken     : {:.2} ms (or) {:.2} s", self.millis(), self.seconds())?;
        write!(
            f,
            "Total Memory Used    : {:.2} KB (or) {:.2} MB (Approx)",
            self.kilobytes(),
            self.megabytes()
        )
    }
}

// ─── Formatting helpers ────────────────────────────────────────────────────

pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    match nanos {
        0..=999 => format!("{} ns", nanos),
        1_000..=999_999 => format!("{:.1} µs", nanos as f64 / 1e3),
        1_000_000..=999_999_999 => format!("{:.2} ms", nanos as f64 / 1e6),
        _ => format!("{:.2} s", nanos as f64 / 1e9),
    }
}

pub fn format_bytes(b: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;
    if b < KB {
        format!("{} B", b)
    } else if b < MB {
        format!("{:.1} KB", b as f64 / KB as f64)
    } else {
        format!("{:.1} MB", b as f64 / MB as f64)
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
