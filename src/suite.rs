use anyhow::{Context as _, Result};

use crate::{config::SuiteConfig, report::CaseReport};

/// Run every configured case in order. The first case whose strategies
/// disagree, or whose dataset cannot be built, stops the suite.
pub fn run(config: &SuiteConfig) -> Result<Vec<CaseReport>> {
    let mut reports = Vec::with_capacity(config.cases.len());
    for &case in &config.cases {
        log::info!("Running case `{case}` ({} values)", case.dataset_len(config));
        let report = case
            .run(config)
            .with_context(|| format!("Case `{case}` failed"))?;
        reports.push(report);
    }
    Ok(reports)
}
