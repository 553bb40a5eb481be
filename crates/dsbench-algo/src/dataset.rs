use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};
use std::fmt::Display;

/// Rejected generator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("Value range [0, 0) is empty, upper bound must be at least 1")]
    EmptyRange,
}

/// Input sequence shared by the strategies of one case.
///
/// Strategies never see the dataset itself, only a [`Dataset::snapshot`] or a
/// borrowed slice, so an in-place sort in one run cannot leak into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset(Vec<u32>);

impl Dataset {
    /// Generate `len` values uniformly drawn from `[0, upper_bound)`.
    pub fn random(len: usize, upper_bound: u32) -> Result<Self, DatasetError> {
        Self::from_rng(&mut rand::thread_rng(), len, upper_bound)
    }

    /// Same as [`Dataset::random`] but reproducible for a given seed.
    pub fn seeded(len: usize, upper_bound: u32, seed: u64) -> Result<Self, DatasetError> {
        Self::from_rng(&mut StdRng::seed_from_u64(seed), len, upper_bound)
    }

    /// Draw the values from a caller-supplied generator.
    pub fn from_rng<R: Rng + ?Sized>(
        rng: &mut R,
        len: usize,
        upper_bound: u32,
    ) -> Result<Self, DatasetError> {
        if upper_bound == 0 {
            return Err(DatasetError::EmptyRange);
        }
        let range = Uniform::new(0, upper_bound);
        let values: Vec<u32> = (0..len).map(|_| rng.sample(&range)).collect();
        log::debug!("Generated {len} values in [0, {upper_bound})");
        Ok(Self(values))
    }

    /// Owned copy for a strategy that mutates its input.
    pub fn snapshot(&self) -> Vec<u32> {
        self.0.clone()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for Dataset {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl AsRef<[u32]> for Dataset {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const PREVIEW: usize = 8;
        let head = self
            .0
            .iter()
            .take(PREVIEW)
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if self.0.len() > PREVIEW {
            write!(f, "[{head}, ... ({} values)]", self.0.len())
        } else {
            write!(f, "[{head}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_respects_len_and_bound() {
        let data = Dataset::random(10_000, 100).expect("non-empty range");
        assert_eq!(data.len(), 10_000);
        assert!(data.as_slice().iter().all(|&v| v < 100));
    }

    #[test]
    fn test_zero_len_is_empty() {
        let data = Dataset::random(0, 1_000).expect("non-empty range");
        assert!(data.is_empty());
    }

    #[test]
    fn test_empty_range_is_rejected() {
        assert_eq!(Dataset::random(5, 0), Err(DatasetError::EmptyRange));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = Dataset::seeded(1_000, 1_000_000, 42).expect("non-empty range");
        let b = Dataset::seeded(1_000, 1_000_000, 42).expect("non-empty range");
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let data = Dataset::from(vec![3, 2, 1]);
        let mut first = data.snapshot();
        first.sort_unstable();
        let second = data.snapshot();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![3, 2, 1]);
        assert_eq!(data.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_display_truncates_long_datasets() {
        let data = Dataset::from((0..20).collect::<Vec<_>>());
        assert_eq!(data.to_string(), "[0, 1, 2, 3, 4, 5, 6, 7, ... (20 values)]");
        assert_eq!(Dataset::from(vec![1, 2]).to_string(), "[1, 2]");
    }
}
