use crate::Base;
use crate::BCOUNT;
use crate::ALPHABET;
use crate::DnaSequence;

/// Number of distinct DNA sequences of length `n`.
///
/// Saturates at `u64::MAX` for n > 31, a range nobody will ever enumerate.
pub fn nmer_count(n: usize) -> u64 {
    let exp = u32::try_from(n).unwrap_or(u32::MAX);
    (BCOUNT as u64).saturating_pow(exp)
}

/// Write `i` in base `k` with the most significant digit first, left-padded
/// with zeros to at least `n` digits. Numbers that need more than `n` digits
/// are not truncated.
pub fn base_digits(mut i: u64, k: u64, n: usize) -> Vec<usize> {
    debug_assert!(k >= 2);
    let mut digits = Vec::with_capacity(n);
    while i > 0 {
        digits.push((i % k) as usize);
        i /= k;
    }
    while digits.len() < n {
        digits.push(0);
    }
    digits.reverse();
    digits
}

impl DnaSequence {
    /// The sequence at position `i` of the length-`n` enumeration.
    pub fn from_index(i: u64, n: usize) -> Self {
        let bases: Vec<Base> = base_digits(i, BCOUNT as u64, n)
            .into_iter()
            .map(|d| ALPHABET[d])
            .collect();
        DnaSequence(bases)
    }
}

/// Lazily walks all 4^n sequences of one length in ascending order of their
/// base-4 encoding.
#[derive(Debug, Clone)]
pub struct NmerIter {
    n: usize,
    next: u64,
    total: u64,
}

impl NmerIter {
    pub fn new(n: usize) -> Self {
        Self { n, next: 0, total: nmer_count(n) }
    }

    pub fn length(&self) -> usize {
        self.n
    }
}

impl Iterator for NmerIter {
    type Item = DnaSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let seq = DnaSequence::from_index(self.next, self.n);
        self.next += 1;
        Some(seq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = usize::try_from(self.total - self.next).unwrap_or(usize::MAX);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for NmerIter {}

/// All sequences of length `n` over {A, T, C, G}. For n = 0 this yields a
/// single empty sequence.
pub fn nmers(n: usize) -> NmerIter {
    NmerIter::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_strings(n: usize) -> Vec<String> {
        nmers(n).map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_digits() {
        assert_eq!(base_digits(0, 4, 3), vec![0, 0, 0]);
        assert_eq!(base_digits(6, 4, 3), vec![0, 1, 2]);
        assert_eq!(base_digits(63, 4, 3), vec![3, 3, 3]);
        assert_eq!(base_digits(5, 2, 2), vec![1, 0, 1]);
        assert_eq!(base_digits(0, 4, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_single_base_order() {
        assert_eq!(as_strings(1), vec!["A", "T", "C", "G"]);
    }

    #[test]
    fn test_dimers() {
        let dimers = as_strings(2);
        assert_eq!(dimers.len(), 16);
        assert_eq!(&dimers[..5], &["AA", "AT", "AC", "AG", "TA"]);
        assert_eq!(dimers.last().map(String::as_str), Some("GG"));
    }

    #[test]
    fn test_zero_length() {
        let all: Vec<_> = nmers(0).collect();
        assert_eq!(all, vec![DnaSequence::default()]);
    }

    #[test]
    fn test_counts_and_uniqueness() {
        for n in 0..=6 {
            let iter = nmers(n);
            assert_eq!(iter.len() as u64, nmer_count(n));
            let seqs: Vec<DnaSequence> = iter.collect();
            assert_eq!(seqs.len() as u64, 4u64.pow(n as u32));
            assert!(seqs.iter().all(|s| s.len() == n));
            let unique: HashSet<_> = seqs.iter().collect();
            assert_eq!(unique.len(), seqs.len());
        }
    }

    #[test]
    fn test_ascending_and_reproducible() {
        let first: Vec<_> = nmers(4).collect();
        let second: Vec<_> = nmers(4).collect();
        assert_eq!(first, second);
        // Base derives Ord by ordinal, so lexicographic order is base-4 order.
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(DnaSequence::from_index(6, 3).to_string(), "ATC");
        assert_eq!(DnaSequence::from_index(255, 4).to_string(), "GGGG");
    }

    #[test]
    fn test_exact_size_shrinks() {
        let mut iter = nmers(2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 14);
        assert_eq!(iter.length(), 2);
    }
}
