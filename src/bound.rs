//! Upper bound of a sieve run and the square-root cutoff derived from it.

use std::fmt;
use std::str::FromStr;

use crate::error::BoundError;

// ─── Utilities ─────────────────────────────────────────────────────────────

/// Integer square root, floor. Float seed with integer correction so the
/// result is exact for every `u64`.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    if n == 0 { return 0; }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) { x -= 1; }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) { x += 1; }
    x
}

/// Integer square root, ceiling.
#[inline]
pub fn isqrt_ceil(n: u64) -> u64 {
    let r = isqrt(n);
    if r * r < n { r + 1 } else { r }
}

// ─── Bound ─────────────────────────────────────────────────────────────────

/// Inclusive upper limit of a sieve run.
///
/// `u32::MAX` is reserved so that `limit + 1` (the store length) and the wheel
/// stride arithmetic never overflow the index type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(u32);

impl Bound {
    /// Largest bound accepted anywhere.
    pub const MAX: u32 = u32::MAX - 1;

    /// Smallest bound accepted from user input.
    pub const MIN_INPUT: u32 = 2;

    /// Build a bound from a raw integer. Only the sentinel is refused; 0 and 1
    /// are legal here and simply produce an empty sieve.
    pub fn new(limit: u32) -> Result<Self, BoundError> {
        if limit > Self::MAX {
            return Err(BoundError::Reserved);
        }
        Ok(Bound(limit))
    }

    /// Validate one line of user input.
    ///
    /// Stricter than [`Bound::new`]: the value must be a whole number of at
    /// least 2. Either a bound comes back or nothing does.
    pub fn parse(input: &str) -> Result<Self, BoundError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(BoundError::Empty);
        }
        let value: i128 = text
            .parse()
            .map_err(|_| classify_unparsable(text))?;
        if value < i128::from(Self::MIN_INPUT) {
            let shown = i64::try_from(value).unwrap_or(i64::MIN);
            return Err(BoundError::TooSmall(shown));
        }
        let limit = u32::try_from(value).map_err(|_| BoundError::OutOfRange(text.to_string()))?;
        Self::new(limit)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// `ceil(sqrt(limit))`: no prime above this has an uncleared multiple in range.
    #[inline]
    pub fn cutoff(self) -> u32 {
        // ceil(sqrt(u32::MAX - 1)) = 65536, always fits
        isqrt_ceil(u64::from(self.0)) as u32
    }

    /// Number of indices covered, `limit + 1`.
    #[inline]
    pub fn span(self) -> usize {
        self.0 as usize + 1
    }
}

/// Digits that overflow even `i128` are still a number, just far too large
/// (or too small, with a leading minus).
fn classify_unparsable(text: &str) -> BoundError {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if negative {
            BoundError::TooSmall(i64::MIN)
        } else {
            BoundError::OutOfRange(text.to_string())
        }
    } else {
        BoundError::NotANumber(text.to_string())
    }
}

impl FromStr for Bound {
    type Err = BoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bound::parse(s)
    }
}

impl TryFrom<u32> for Bound {
    type Error = BoundError;

    fn try_from(limit: u32) -> Result<Self, Self::Error> {
        Bound::new(limit)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
