//! Candidacy store: one bit per integer in `[0, limit]`.
//!
//! A set bit means "not yet disproven prime". Bits are packed 64 to a `u64`
//! word; index `i` lives in word `i >> 6`, bit `i & 63`.

use crate::bound::Bound;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidacyStore {
    words: Vec<u64>,
    len: usize,
}

impl CandidacyStore {
    /// All `len` bits start clear.
    pub fn new(len: usize) -> Self {
        let num_words = (len + 63) >> 6;
        CandidacyStore { words: vec![0u64; num_words], len }
    }

    /// Sized for indices `0..=bound`.
    pub fn with_bound(bound: Bound) -> Self {
        Self::new(bound.span())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Heap bytes held by the bit words.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    #[inline]
    pub fn set(&mut self, i: u32) {
        let i = i as usize;
        debug_assert!(i < self.len, "bit {} out of range {}", i, self.len);
        self.words[i >> 6] |= 1u64 << (i & 63);
    }

    #[inline]
    pub fn clear(&mut self, i: u32) {
        let i = i as usize;
        debug_assert!(i < self.len, "bit {} out of range {}", i, self.len);
        self.words[i >> 6] &= !(1u64 << (i & 63));
    }

    /// Out-of-range indices read as clear.
    #[inline]
    pub fn test(&self, i: u32) -> bool {
        let i = i as usize;
        i < self.len && (self.words[i >> 6] >> (i & 63)) & 1 == 1
    }

    /// Smallest set index `>= from`, if any.
    ///
    /// Masks off the bits below `from` in its word, then skips whole zero
    /// words and lands with `trailing_zeros`.
    pub fn next_set_bit(&self, from: u32) -> Option<u32> {
        let from = from as usize;
        if from >= self.len {
            return None;
        }
        let mut wi = from >> 6;
        let mut word = self.words[wi] & (!0u64 << (from & 63));
        loop {
            if word != 0 {
                let idx = (wi << 6) + word.trailing_zeros() as usize;
                // bits past len are never set
                return Some(idx as u32);
            }
            wi += 1;
            word = *self.words.get(wi)?;
        }
    }

    /// Number of set bits.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes { words: &self.words, wi: 0, word: self.words.first().copied().unwrap_or(0) }
    }
}

/// Walks set bits by repeatedly stripping the lowest one (`w &= w - 1`).
#[derive(Debug, Clone)]
pub struct IterOnes<'a> {
    words: &'a [u64],
    wi: usize,
    word: u64,
}

impl Iterator for IterOnes<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.word == 0 {
            self.wi += 1;
            self.word = *self.words.get(self.wi)?;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(((self.wi << 6) + tz) as u32)
    }
}
