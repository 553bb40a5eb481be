/// Permute a slice into non-decreasing order, in place.
pub trait Sorter {
    const LABEL: &'static str;

    fn sort<T: Ord>(data: &mut [T]);
}

/// Adjacent-swap passes. After pass `i` the last `i + 1` slots hold their
/// final values; a pass without swaps ends the sort.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    const LABEL: &'static str = "Bubble Sort";

    fn sort<T: Ord>(data: &mut [T]) {
        let n = data.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                log::trace!("Bubble sort settled after {} passes", pass + 1);
                break;
            }
        }
    }
}

/// The standard library's stable merge sort.
pub struct StdSort;

impl Sorter for StdSort {
    const LABEL: &'static str = "slice::sort";

    fn sort<T: Ord>(data: &mut [T]) {
        data.sort();
    }
}

/// Sort a private copy with `S`, leaving `data` untouched.
pub fn sorted_copy<S: Sorter, T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut v = data.to_vec();
    S::sort(&mut v);
    v
}

/// Every element is at least as large as its predecessor.
pub fn is_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Index of the first element smaller than its predecessor.
pub fn first_descent<T: Ord>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}
