use dsbench_algo::{
    BubbleSort, Dataset, HashCounter, OrderedCounter, PairwiseScan, SeenSet, StdSort,
};
use serde::Serialize;

use crate::{config::SuiteConfig, error::CaseError, report::CaseReport};

pub mod duplicates;
pub mod frequency;
pub mod sorting;

/// The benchmark cases, in the order the suite runs them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Pairwise scan vs. `HashSet` insertion.
    Duplicates,
    /// `HashMap` vs. `BTreeMap` counting.
    Frequency,
    /// Bubble sort vs. `slice::sort`.
    Sorting,
}

impl Case {
    pub fn dataset_len(self, config: &SuiteConfig) -> usize {
        match self {
            Self::Duplicates | Self::Frequency => config.large_len,
            Self::Sorting => config.sort_len,
        }
    }

    /// Generate a fresh dataset and compare the case's two strategies on it.
    pub fn run(self, config: &SuiteConfig) -> Result<CaseReport, CaseError> {
        let data = config.dataset(self.dataset_len(config))?;
        log::debug!("Running {self} over {data}");
        self.run_on(&data, config)
    }

    /// Compare the case's two strategies on a given dataset.
    pub fn run_on(self, data: &Dataset, config: &SuiteConfig) -> Result<CaseReport, CaseError> {
        let trials = config.trials();
        let strategies = match self {
            Self::Duplicates => duplicates::compare::<PairwiseScan, SeenSet>(data, &trials)?,
            Self::Frequency => frequency::compare::<HashCounter, OrderedCounter>(data, &trials)?,
            Self::Sorting => sorting::compare::<BubbleSort, StdSort>(data, &trials)?,
        };
        Ok(CaseReport {
            case: self,
            len: data.len(),
            strategies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_names_round_trip_through_strum() {
        for case in Case::iter() {
            assert_eq!(case.to_string().parse::<Case>().ok(), Some(case));
        }
        assert_eq!("Sorting".parse::<Case>().ok(), Some(Case::Sorting));
    }

    #[test]
    fn test_dataset_len_follows_config() {
        let config = SuiteConfig {
            large_len: 30,
            sort_len: 20,
            ..SuiteConfig::default()
        };
        assert_eq!(Case::Duplicates.dataset_len(&config), 30);
        assert_eq!(Case::Frequency.dataset_len(&config), 30);
        assert_eq!(Case::Sorting.dataset_len(&config), 20);
    }

    #[test]
    fn test_small_run_of_every_case() {
        let config = SuiteConfig {
            large_len: 2_000,
            sort_len: 500,
            trials: 2,
            seed: Some(3),
            ..SuiteConfig::default()
        };
        for case in Case::iter() {
            let report = case.run(&config).expect("strategies agree");
            assert_eq!(report.case, case);
            assert_eq!(report.strategies.len(), 2);
            assert!(report.strategies.iter().all(|s| s.trials == 2));
        }
    }
}
