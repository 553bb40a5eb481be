use std::fmt::Display;

use console::style;
use serde::Serialize;

use crate::{case::Case, timing::Timing};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub label: &'static str,
    pub trials: usize,
    pub median_ms: f64,
    pub mean_ms: f64,
    pub min_ms: f64,
}

impl StrategyReport {
    pub fn new(label: &'static str, timing: &Timing) -> Self {
        Self {
            label,
            trials: timing.trials(),
            median_ms: timing.median().as_secs_f64() * 1_000.0,
            mean_ms: timing.mean().as_secs_f64() * 1_000.0,
            min_ms: timing.min().as_secs_f64() * 1_000.0,
        }
    }
}

/// Outcome of one case whose strategies agreed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub case: Case,
    pub len: usize,
    pub strategies: Vec<StrategyReport>,
}

impl CaseReport {
    /// Median of the first strategy over the median of the last one.
    pub fn speedup(&self) -> Option<f64> {
        let (first, last) = (self.strategies.first()?, self.strategies.last()?);
        (last.median_ms > 0.0).then(|| first.median_ms / last.median_ms)
    }
}

impl Display for CaseReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({} values)",
            style(self.case).bold().cyan(),
            self.len
        )?;
        for s in &self.strategies {
            writeln!(
                f,
                "  {:<40} median {:>10.3} ms  min {:>10.3} ms  ({} trials)",
                s.label, s.median_ms, s.min_ms, s.trials
            )?;
        }
        match self.speedup() {
            Some(x) => write!(f, "  speedup {}", style(format!("{x:.1}x")).green()),
            None => write!(f, "  speedup n/a"),
        }
    }
}

pub fn render_table(reports: &[CaseReport]) -> String {
    reports
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_json(reports: &[CaseReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
