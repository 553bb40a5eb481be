use std::collections::HashSet;
use std::hash::Hash;

/// Decide whether a sequence holds any repeated value.
pub trait DuplicateDetector {
    const LABEL: &'static str;

    fn has_duplicates<T>(data: &[T]) -> bool
    where
        T: Eq + Hash + Ord + Clone;
}

/// Compare every pair of positions `i < j`.
pub struct PairwiseScan;

impl DuplicateDetector for PairwiseScan {
    const LABEL: &'static str = "Duplicate check using Vec";

    fn has_duplicates<T>(data: &[T]) -> bool
    where
        T: Eq + Hash + Ord + Clone,
    {
        for (i, left) in data.iter().enumerate() {
            if data[i + 1..].iter().any(|right| left == right) {
                return true;
            }
        }
        false
    }
}

/// Insert in order into a `HashSet`, stop at the first rejected insertion.
pub struct SeenSet;

impl DuplicateDetector for SeenSet {
    const LABEL: &'static str = "Duplicate check using HashSet";

    fn has_duplicates<T>(data: &[T]) -> bool
    where
        T: Eq + Hash + Ord + Clone,
    {
        let mut seen = HashSet::with_capacity(data.len());
        for item in data {
            if !seen.insert(item) {
                return true;
            }
        }
        false
    }
}

/// Sort a private copy, then look for equal neighbours.
pub struct SortedScan;

impl DuplicateDetector for SortedScan {
    const LABEL: &'static str = "Duplicate check using sorted copy";

    fn has_duplicates<T>(data: &[T]) -> bool
    where
        T: Eq + Hash + Ord + Clone,
    {
        let mut v = data.to_vec();
        v.sort_unstable();
        v.windows(2).any(|w| w[0] == w[1])
    }
}
