use std::{fmt::Display, path::PathBuf, str::FromStr, sync::LazyLock};

use anyhow::{Context as _, Result};
use dsbench_algo::{DEFAULT_UPPER_BOUND, Dataset, DatasetError};
use strum::IntoEnumIterator as _;

use crate::{case::Case, timing::Trials};

/// Loads `.env` once; later lookups see its variables through `std::env`.
pub static ENV_GUARD: LazyLock<Result<PathBuf, dotenvy::Error>> = LazyLock::new(dotenvy::dotenv);

const LARGE_LEN: &str = "DSBENCH_LARGE_LEN";
const SORT_LEN: &str = "DSBENCH_SORT_LEN";
const UPPER_BOUND: &str = "DSBENCH_UPPER_BOUND";
const TRIALS: &str = "DSBENCH_TRIALS";
const WARMUP: &str = "DSBENCH_WARMUP";
const SEED: &str = "DSBENCH_SEED";
const CASES: &str = "DSBENCH_CASES";
const REPORT: &str = "DSBENCH_REPORT";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Dataset length for the duplicate and frequency cases.
    pub large_len: usize,
    /// Dataset length for the sorting case.
    pub sort_len: usize,
    pub upper_bound: u32,
    pub trials: usize,
    pub warmup: usize,
    pub seed: Option<u64>,
    pub cases: Vec<Case>,
    pub report: ReportFormat,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            large_len: 1_000_000,
            sort_len: 50_000,
            upper_bound: DEFAULT_UPPER_BOUND,
            trials: 1,
            warmup: 0,
            seed: None,
            cases: Case::iter().collect(),
            report: ReportFormat::Table,
        }
    }
}

impl SuiteConfig {
    /// Read the suite settings from the process environment, after loading an
    /// optional `.env` file.
    pub fn from_env() -> Result<Self> {
        match ENV_GUARD.as_ref() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) => log::debug!("No .env file loaded: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the settings from any key lookup. Missing or blank keys keep
    /// their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            large_len: parse_var(&lookup, LARGE_LEN)?.unwrap_or(defaults.large_len),
            sort_len: parse_var(&lookup, SORT_LEN)?.unwrap_or(defaults.sort_len),
            upper_bound: parse_var(&lookup, UPPER_BOUND)?.unwrap_or(defaults.upper_bound),
            trials: parse_var(&lookup, TRIALS)?.unwrap_or(defaults.trials),
            warmup: parse_var(&lookup, WARMUP)?.unwrap_or(defaults.warmup),
            seed: parse_var(&lookup, SEED)?,
            cases: match lookup(CASES).filter(|raw| !raw.trim().is_empty()) {
                Some(raw) => parse_cases(&raw)?,
                None => defaults.cases,
            },
            report: parse_var(&lookup, REPORT)?.unwrap_or(defaults.report),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            anyhow::bail!("{TRIALS} must be at least 1");
        }
        if self.upper_bound == 0 {
            anyhow::bail!("{UPPER_BOUND} must be at least 1");
        }
        Ok(())
    }

    pub fn trials(&self) -> Trials {
        Trials::new(self.trials, self.warmup)
    }

    /// Fresh dataset of `len` values; reproducible when a seed is set.
    pub fn dataset(&self, len: usize) -> Result<Dataset, DatasetError> {
        match self.seed {
            Some(seed) => Dataset::seeded(len, self.upper_bound, seed),
            None => Dataset::random(len, self.upper_bound),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid value for {key}: {raw:?}"))
}

/// Comma-separated case names, or `all`.
fn parse_cases(raw: &str) -> Result<Vec<Case>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(Case::iter().collect());
    }

    let mut cases = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let case = name.parse::<Case>().with_context(|| {
            format!(
                "Invalid case name in {CASES}: {name:?}. Valid cases are: {:?}",
                Case::iter().map(|c| c.to_string()).collect::<Vec<_>>()
            )
        })?;
        if !cases.contains(&case) {
            cases.push(case);
        }
    }

    if cases.is_empty() {
        anyhow::bail!("{CASES} selects no case");
    }
    Ok(cases)
}
