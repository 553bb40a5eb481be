use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Read access shared by the hash-backed and tree-backed count tables.
pub trait CountTable<T> {
    /// Occurrences of `key`, `None` when it never appeared.
    fn count_of(&self, key: &T) -> Option<usize>;

    /// Number of distinct keys.
    fn distinct(&self) -> usize;

    /// Every `(key, count)` pair, in the table's own iteration order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, usize)>
    where
        T: 'a;
}

macro_rules! impl_count_table {
    ($map:ident, $($bound:tt)+) => {
        impl<T: $($bound)+> CountTable<T> for $map<T, usize> {
            fn count_of(&self, key: &T) -> Option<usize> {
                self.get(key).copied()
            }

            fn distinct(&self) -> usize {
                self.len()
            }

            fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, usize)>
            where
                T: 'a,
            {
                self.iter().map(|(k, &c)| (k, c))
            }
        }
    };
}

impl_count_table!(HashMap, Eq + Hash);
impl_count_table!(BTreeMap, Ord);

/// Build a total mapping from each distinct value to its occurrence count.
pub trait FrequencyCounter {
    const LABEL: &'static str;

    type Table<T: Eq + Hash + Ord>: CountTable<T>;

    fn count<T>(data: &[T]) -> Self::Table<T>
    where
        T: Eq + Hash + Ord + Clone;
}

pub struct HashCounter;

impl FrequencyCounter for HashCounter {
    const LABEL: &'static str = "Frequency counting using HashMap";

    type Table<T: Eq + Hash + Ord> = HashMap<T, usize>;

    fn count<T>(data: &[T]) -> Self::Table<T>
    where
        T: Eq + Hash + Ord + Clone,
    {
        let mut freq = HashMap::new();
        for item in data {
            *freq.entry(item.clone()).or_insert(0) += 1;
        }
        freq
    }
}

/// Keys come back in ascending order.
pub struct OrderedCounter;

impl FrequencyCounter for OrderedCounter {
    const LABEL: &'static str = "Frequency counting using BTreeMap";

    type Table<T: Eq + Hash + Ord> = BTreeMap<T, usize>;

    fn count<T>(data: &[T]) -> Self::Table<T>
    where
        T: Eq + Hash + Ord + Clone,
    {
        let mut freq = BTreeMap::new();
        for item in data {
            *freq.entry(item.clone()).or_insert(0) += 1;
        }
        freq
    }
}

/// Equal as sets of `(key, count)` pairs, whatever the iteration order.
pub fn same_counts<T, A, B>(a: &A, b: &B) -> bool
where
    A: CountTable<T>,
    B: CountTable<T>,
{
    a.distinct() == b.distinct() && a.entries().all(|(k, c)| b.count_of(k) == Some(c))
}

/// Smallest key whose count differs between the two tables, with the count on
/// each side (`None` when the key is missing there).
pub fn first_difference<T, A, B>(a: &A, b: &B) -> Option<(T, Option<usize>, Option<usize>)>
where
    T: Ord + Clone,
    A: CountTable<T>,
    B: CountTable<T>,
{
    let from_a = a
        .entries()
        .filter(|&(k, c)| b.count_of(k) != Some(c))
        .map(|(k, _)| k);
    let from_b = b.entries().filter(|(k, _)| a.count_of(k).is_none()).map(|(k, _)| k);
    let key = from_a.chain(from_b).min()?.clone();
    let (left, right) = (a.count_of(&key), b.count_of(&key));
    Some((key, left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counts_mixed_values() {
        let data = [5, 3, 5, 1];
        let hash = HashCounter::count(&data);
        let ordered = OrderedCounter::count(&data);

        let expected: HashMap<u32, usize> = [(5, 2), (3, 1), (1, 1)].into_iter().collect();
        assert_eq!(hash, expected);
        assert_eq!(ordered.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert!(same_counts(&hash, &ordered));
        assert_eq!(first_difference(&hash, &ordered), None);
    }

    #[test]
    fn test_empty_input_gives_empty_tables() {
        let data: [u32; 0] = [];
        assert!(HashCounter::count(&data).is_empty());
        assert!(OrderedCounter::count(&data).is_empty());
    }

    #[test]
    fn test_all_identical_gives_one_key() {
        let data = vec![4_u32; 1_000];
        let ordered = OrderedCounter::count(&data);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered.get(&4), Some(&1_000));
        assert!(same_counts(&HashCounter::count(&data), &ordered));
    }

    #[test]
    fn test_first_difference_reports_smallest_key() {
        let hash: HashMap<u32, usize> = [(1, 1), (3, 2), (7, 1)].into_iter().collect();
        let ordered: BTreeMap<u32, usize> = [(1, 1), (3, 1), (2, 4)].into_iter().collect();
        assert!(!same_counts(&hash, &ordered));
        assert_eq!(first_difference(&hash, &ordered), Some((2, None, Some(4))));
    }

    #[test]
    fn test_missing_key_is_a_difference() {
        let hash: HashMap<u32, usize> = [(1, 1)].into_iter().collect();
        let ordered: BTreeMap<u32, usize> = BTreeMap::new();
        assert!(!same_counts(&hash, &ordered));
        assert_eq!(first_difference(&hash, &ordered), Some((1, Some(1), None)));
    }

    #[test]
    fn test_entries_cover_every_key() {
        let data = [7_u32, 2, 7, 9, 2, 7];
        let hash = HashCounter::count(&data);
        let ordered = OrderedCounter::count(&data);

        let mut from_hash: Vec<(u32, usize)> = hash.entries().map(|(&k, c)| (k, c)).collect();
        from_hash.sort_unstable();
        let from_ordered: Vec<(u32, usize)> = ordered.entries().map(|(&k, c)| (k, c)).collect();
        assert_eq!(from_hash, vec![(2, 2), (7, 3), (9, 1)]);
        assert_eq!(from_ordered, from_hash);
        assert_eq!(hash.distinct(), 3);
        assert_eq!(ordered.count_of(&9), Some(1));
        assert_eq!(hash.count_of(&4), None);
    }

    proptest! {
        #[test]
        fn tables_agree(data in proptest::collection::vec(0u32..32, 0..200)) {
            let hash = HashCounter::count(&data);
            let ordered = OrderedCounter::count(&data);
            prop_assert!(same_counts(&hash, &ordered));
            prop_assert_eq!(ordered.values().sum::<usize>(), data.len());
        }
    }
}
