//! Strategies compared by the dsbench suite.
//!
//! Every family exposes a trait with static methods over slices, plus unit
//! structs implementing it. Callers pick the strategy with a type parameter so
//! the timed code never goes through dynamic dispatch.

pub mod dataset;
pub mod duplicates;
pub mod frequency;
pub mod sorting;

pub use dataset::{Dataset, DatasetError};
pub use duplicates::{DuplicateDetector, PairwiseScan, SeenSet, SortedScan};
pub use frequency::{CountTable, FrequencyCounter, HashCounter, OrderedCounter};
pub use sorting::{BubbleSort, Sorter, StdSort, is_non_decreasing};

/// Exclusive upper bound of generated values.
pub const DEFAULT_UPPER_BOUND: u32 = 1_000_000;
