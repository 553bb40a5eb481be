#![warn(clippy::all, rust_2018_idioms)]

use dsbench::{ReportFormat, SuiteConfig, report, suite};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SuiteConfig::from_env()?;
    log::debug!("Suite configuration: {config:?}");

    let reports = suite::run(&config)?;
    match config.report {
        ReportFormat::Table => println!("{}", report::render_table(&reports)),
        ReportFormat::Json => println!("{}", report::render_json(&reports)?),
    }
    Ok(())
}
