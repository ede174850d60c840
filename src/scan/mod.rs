//! Scan layer
//! - target.rs: repository target list parsing
//! - scanner.rs: per-target fetch, parse and select
//! - report.rs: output of results and failures

pub mod report;
pub mod scanner;
pub mod target;

pub use report::{Reporter, TextReporter};
pub use scanner::{ScanError, ScanReport, ScanSummary, Scanner};
pub use target::{RepositoryTarget, TargetLineError, TargetList, load_target_list, parse_target_list};
