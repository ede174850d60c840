//! Repository target list parsing
//!
//! One target per line in the form `owner/name,minVersion`. A header line
//! containing `repository,min_version` is skipped.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

const HEADER_MARKER: &str = "repository,min_version";

/// One repository to scan together with its version floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub owner: String,
    pub name: String,
    /// Raw floor; parsed when the target is scanned
    pub min_version: String,
}

impl RepositoryTarget {
    pub fn new(owner: &str, name: &str, min_version: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            min_version: min_version.to_string(),
        }
    }
}

impl fmt::Display for RepositoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Why a line of the target list was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("expected `owner/name,minVersion`")]
    FieldCount,
    #[error("repository must be `owner/name`")]
    RepositoryShape,
    #[error("owner, name and minimum version must not be empty")]
    EmptyField,
}

/// A target list line that could not be turned into a target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {reason}: {line:?}")]
pub struct TargetLineError {
    /// 1-based
    pub line_number: usize,
    pub line: String,
    pub reason: RejectReason,
}

/// Parsed target list: accepted targets in input order plus rejected lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    pub targets: Vec<RepositoryTarget>,
    pub rejected: Vec<TargetLineError>,
}

fn parse_line(line: &str) -> Result<RepositoryTarget, RejectReason> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    let [repository, min_version] = tokens.as_slice() else {
        return Err(RejectReason::FieldCount);
    };

    let names: Vec<&str> = repository.split('/').map(str::trim).collect();
    let [owner, name] = names.as_slice() else {
        return Err(RejectReason::RepositoryShape);
    };

    if owner.is_empty() || name.is_empty() || min_version.is_empty() {
        return Err(RejectReason::EmptyField);
    }

    Ok(RepositoryTarget::new(owner, name, min_version))
}

/// Parse the content of a target list.
///
/// Malformed lines are collected in [`TargetList::rejected`]; parsing always
/// continues with the remaining lines.
pub fn parse_target_list(content: &str) -> TargetList {
    let mut list = TargetList::default();

    for (index, line) in content.lines().enumerate() {
        if line.contains(HEADER_MARKER) {
            continue;
        }

        match parse_line(line) {
            Ok(target) => {
                debug!("Target {} (min {})", target, target.min_version);
                list.targets.push(target);
            }
            Err(reason) => {
                let rejected = TargetLineError {
                    line_number: index + 1,
                    line: line.trim_end().to_string(),
                    reason,
                };
                warn!("Rejected target list {}", rejected);
                list.rejected.push(rejected);
            }
        }
    }

    list
}

/// Read and parse a target list file.
pub fn load_target_list(path: &Path) -> std::io::Result<TargetList> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_target_list(&content))
}
