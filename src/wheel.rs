//! Mod-30 wheel pre-filter.
//!
//! Marks 2, 3, 5, 7 and every integer from 11 upward that is coprime to
//! 2·3·5, using additive strides only. Everything left clear afterwards is
//! 0, 1, or a multiple of 2, 3 or 5 other than the seeds themselves.

use tracing::debug;

use crate::bound::Bound;
use crate::store::CandidacyStore;

// ─── Configuration ─────────────────────────────────────────────────────────

/// Primes set explicitly before the wheel turns.
pub const SEED_PRIMES: [u32; 4] = [2, 3, 5, 7];

/// Gaps between consecutive residues coprime to 30, starting from 7:
/// 7 → 11 → 13 → 17 → 19 → 23 → 29 → 31 → 37.
pub const WHEEL_STEPS: [u32; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// One full turn of the wheel.
pub const WHEEL_MODULUS: u64 = 30;

/// Where the wheel starts turning; also the first prime the elimination
/// engine has to handle.
pub const WHEEL_START: u32 = 7;

// ─── Pre-filter ────────────────────────────────────────────────────────────

/// Seed the small primes and mark every wheel candidate `<= bound`.
///
/// Returns the number of bits set.
pub fn prefilter(store: &mut CandidacyStore, bound: Bound) -> usize {
    let limit = u64::from(bound.get());
    let mut marked = 0;

    for &p in &SEED_PRIMES {
        if u64::from(p) > limit { break; }
        store.set(p);
        marked += 1;
    }

    // Whole turns: no per-step bound check needed
    let mut value = u64::from(WHEEL_START);
    while value + WHEEL_MODULUS <= limit {
        for &step in &WHEEL_STEPS {
            value += u64::from(step);
            store.set(value as u32);
        }
        marked += WHEEL_STEPS.len();
    }

    // Partial turn: the longest prefix of the pattern that stays in range
    if value <= limit {
        for &step in &WHEEL_STEPS {
            let next = value + u64::from(step);
            if next > limit { break; }
            value = next;
            store.set(value as u32);
            marked += 1;
        }
    }

    debug!(bound = bound.get(), candidates = marked, "wheel pre-filter done");
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(limit: u32) -> CandidacyStore {
        let bound = Bound::new(limit).unwrap();
        let mut store = CandidacyStore::with_bound(bound);
        prefilter(&mut store, bound);
        store
    }

    /// What the wheel should leave set, computed with division.
    fn expected(limit: u32) -> Vec<u32> {
        (0..=limit)
            .filter(|&i| SEED_PRIMES.contains(&i) || (i > 7 && i % 2 != 0 && i % 3 != 0 && i % 5 != 0))
            .collect()
    }

    #[test]
    fn test_steps_cover_one_turn() {
        assert_eq!(WHEEL_STEPS.iter().map(|&s| u64::from(s)).sum::<u64>(), WHEEL_MODULUS);
        let mut v = WHEEL_START;
        let residues: Vec<u32> = WHEEL_STEPS.iter().map(|s| { v += s; v % 30 }).collect();
        assert_eq!(residues, vec![11, 13, 17, 19, 23, 29, 1, 7]);
    }

    #[test]
    fn test_small_bounds_clip_seeds() {
        assert_eq!(filtered(0).iter_ones().count(), 0);
        assert_eq!(filtered(1).iter_ones().count(), 0);
        assert_eq!(filtered(2).iter_ones().collect::<Vec<_>>(), vec![2]);
        assert_eq!(filtered(4).iter_ones().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(filtered(6).iter_ones().collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(filtered(7).iter_ones().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(filtered(10).iter_ones().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(filtered(11).iter_ones().collect::<Vec<_>>(), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_thirty() {
        assert_eq!(
            filtered(30).iter_ones().collect::<Vec<_>>(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_composites_survive_wheel() {
        // 49 = 7·7 and 77 = 7·11 are coprime to 30
        let s = filtered(100);
        assert!(s.test(49));
        assert!(s.test(77));
        assert!(s.test(91));
        assert!(!s.test(25));
        assert!(!s.test(1));
    }

    #[test]
    fn test_partial_turn_boundaries() {
        // every bound from 0 through several turns, including 7 + 30k - 1
        for limit in 0..=400 {
            assert_eq!(
                filtered(limit).iter_ones().collect::<Vec<_>>(),
                expected(limit),
                "Mismatch at limit={}",
                limit
            );
        }
    }

    #[test]
    fn test_marked_count() {
        for limit in [0, 1, 2, 7, 36, 37, 38, 1_000, 10_007] {
            let bound = Bound::new(limit).unwrap();
            let mut store = CandidacyStore::with_bound(bound);
            let marked = prefilter(&mut store, bound);
            assert_eq!(marked, store.cardinality(), "limit={}", limit);
            assert_eq!(marked, expected(limit).len(), "limit={}", limit);
        }
    }
}
