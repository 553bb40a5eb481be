use dsbench_algo::DatasetError;

/// Two strategies that must agree produced different results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MismatchError {
    #[error("{first_label} returned {first} but {second_label} returned {second}")]
    Verdict {
        first_label: &'static str,
        first: bool,
        second_label: &'static str,
        second: bool,
    },

    #[error("Frequency tables differ at key {key}: {first:?} vs {second:?}")]
    Frequency {
        key: u32,
        first: Option<usize>,
        second: Option<usize>,
    },

    #[error("Sorted outputs differ at index {index}: {first:?} vs {second:?}")]
    Order {
        index: usize,
        first: Option<u32>,
        second: Option<u32>,
    },

    #[error("{label} output is out of order at index {index}")]
    NotSorted { label: &'static str, index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Dataset generation failed: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Strategies disagree: {0}")]
    Mismatch(#[from] MismatchError),
}
