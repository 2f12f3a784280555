//! Pure entry point: bound in, populated candidacy store out.
//!
//! Timing and printing belong to the caller.

use tracing::info;

use crate::bound::Bound;
use crate::eliminate::{eliminate, EliminationStats};
use crate::error::BoundError;
use crate::store::{CandidacyStore, IterOnes};
use crate::wheel::prefilter;

/// A finished sieve. Read-only: every set bit in the store is a prime.
#[derive(Debug, Clone)]
pub struct Sieve {
    bound: Bound,
    store: CandidacyStore,
    candidates: usize,
    stats: EliminationStats,
}

impl Sieve {
    /// Wheel pre-filter, then elimination, over `[0, bound]`.
    pub fn run(bound: Bound) -> Self {
        let mut store = CandidacyStore::with_bound(bound);
        let candidates = prefilter(&mut store, bound);
        let stats = eliminate(&mut store, bound);
        info!(
            bound = bound.get(),
            primes = store.cardinality(),
            bytes = store.byte_len(),
            "sieve complete"
        );
        Sieve { bound, store, candidates, stats }
    }

    /// Shorthand for `Sieve::run(Bound::new(limit)?)`.
    pub fn up_to(limit: u32) -> Result<Self, BoundError> {
        Ok(Self::run(Bound::new(limit)?))
    }

    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// π(bound).
    pub fn count(&self) -> usize {
        self.store.cardinality()
    }

    /// False for anything above the bound.
    #[inline]
    pub fn is_prime(&self, n: u32) -> bool {
        self.store.test(n)
    }

    /// Primes in ascending order.
    pub fn primes(&self) -> IterOnes<'_> {
        self.store.iter_ones()
    }

    /// Smallest prime `>= n` within the bound.
    pub fn next_prime(&self, n: u32) -> Option<u32> {
        self.store.next_set_bit(n)
    }

    pub fn store(&self) -> &CandidacyStore {
        &self.store
    }

    /// Bits set by the wheel before elimination.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn stats(&self) -> EliminationStats {
        self.stats
    }

    /// Heap bytes used by the bit store.
    pub fn byte_len(&self) -> usize {
        self.store.byte_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes(limit: u32) -> Vec<u32> {
        Sieve::up_to(limit).unwrap().primes().collect()
    }

    #[test]
    fn test_small_primes() {
        assert_eq!(primes(10), vec![2, 3, 5, 7]);
        assert_eq!(primes(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(primes(0), Vec::<u32>::new());
        assert_eq!(primes(1), Vec::<u32>::new());
        assert_eq!(primes(2), vec![2]);
        assert_eq!(primes(3), vec![2, 3]);
        assert_eq!(primes(7), vec![2, 3, 5, 7]);
        assert_eq!(primes(48), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
        assert_eq!(primes(49), primes(48));
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(Sieve::up_to(100).unwrap().count(), 25);
        assert_eq!(Sieve::up_to(1_000).unwrap().count(), 168);
        assert_eq!(Sieve::up_to(10_000).unwrap().count(), 1_229);
        assert_eq!(Sieve::up_to(100_000).unwrap().count(), 9_592);
        assert_eq!(Sieve::up_to(500_000).unwrap().count(), 41_538);
        assert_eq!(Sieve::up_to(1_000_000).unwrap().count(), 78_498);
    }

    #[test]
    fn test_prime_boundaries() {
        let sieve = Sieve::up_to(500_000).unwrap();
        let p: Vec<u32> = sieve.primes().collect();
        assert_eq!(p[9], 29);
        assert_eq!(p[9_999], 104_729);
        assert_eq!(p[10_000], 104_743);
        assert_eq!(*p.last().unwrap(), 499_979);

        let p = primes(29);
        assert_eq!(*p.last().unwrap(), 29);
    }

    #[test]
    fn test_queries() {
        let sieve = Sieve::up_to(100).unwrap();
        assert_eq!(sieve.bound().get(), 100);
        assert!(sieve.is_prime(97));
        assert!(!sieve.is_prime(91));
        assert!(!sieve.is_prime(101));
        assert_eq!(sieve.next_prime(90), Some(97));
        assert_eq!(sieve.next_prime(98), None);
        assert_eq!(sieve.candidates() - sieve.count(), sieve.stats().clears as usize);
        assert_eq!(sieve.byte_len(), 16);
        assert_eq!(sieve.store().len(), 101);
    }

    #[test]
    fn test_rejects_sentinel() {
        assert!(matches!(Sieve::up_to(u32::MAX), Err(BoundError::Reserved)));
    }
}
