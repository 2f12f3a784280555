//! Elimination engine.
//!
//! For each surviving prime `p` up to the cutoff, clear `p·q·p^k` for every
//! survivor `q >= p` and every `k >= 0` that stays in range. Cofactors are
//! found with the store's forward scan, so only bits still set are ever
//! visited. A composite is cleared when its smallest prime factor comes up
//! as `p`, and never again:
//!
//! * `c = p^k · m` with `m` free of `p`. Every factor of `m` is larger
//!   than `p`, so `m` is still set when the scan reaches it (or `m = 1`,
//!   which the `q = p` round covers through the power chain).
//! * Any survivor the scan lands on is not a multiple of `p`: such a
//!   multiple `p·m` was already cleared when `m < p·m` came up.

use tracing::debug;

use crate::bound::Bound;
use crate::store::CandidacyStore;
use crate::wheel::WHEEL_START;

/// Counters from one elimination pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliminationStats {
    /// Bits cleared. Equals the number of composite wheel candidates.
    pub clears: u64,
    /// Primes used as `p`, i.e. surviving primes in `[7, cutoff]`.
    pub sieving_primes: u32,
}

/// Run elimination over a store already seeded by the wheel pre-filter.
pub fn eliminate(store: &mut CandidacyStore, bound: Bound) -> EliminationStats {
    let limit = u64::from(bound.get());
    let cutoff = bound.cutoff();
    let mut stats = EliminationStats::default();

    // 2, 3 and 5 were dealt with by the wheel
    let mut next_prime = store.next_set_bit(WHEEL_START);

    while let Some(p) = next_prime.filter(|&p| p <= cutoff) {
        stats.sieving_primes += 1;
        let step = u64::from(p);
        let mut cofactor = p;
        // u64 throughout: p <= 65536 and every product is checked against a
        // u32 limit before it could grow further
        let mut multiple = step * step;

        while multiple <= limit {
            let mut m = multiple;
            while m <= limit {
                store.clear(m as u32);
                stats.clears += 1;
                m *= step;
            }
            cofactor = match store.next_set_bit(cofactor + 1) {
                Some(q) => q,
                None => break,
            };
            multiple = step * u64::from(cofactor);
        }

        next_prime = store.next_set_bit(p + 1);
    }

    debug!(
        bound = bound.get(),
        cutoff,
        clears = stats.clears,
        sieving_primes = stats.sieving_primes,
        "elimination done"
    );
    stats
}
