//! Benchmark suite contrasting naive and library-backed strategies.
//!
//! Each [`Case`] times two strategies from [`dsbench_algo`] over private
//! copies of one random dataset and fails with a [`MismatchError`] when their
//! results differ.

pub mod case;
pub mod config;
pub mod error;
pub mod report;
pub mod suite;
pub mod timing;

pub use case::Case;
pub use config::{ReportFormat, SuiteConfig};
pub use error::{CaseError, MismatchError};
pub use report::CaseReport;

pub use dsbench_algo as algo;
