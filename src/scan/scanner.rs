//! Sequential scanning of repository targets

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::scan::report::Reporter;
use crate::scan::target::{RepositoryTarget, TargetList};
use crate::version::error::{RegistryError, VersionParseError};
use crate::version::registry::Registry;
use crate::version::selector::select_latest_versions;
use crate::version::semver::SemanticVersion;

/// Failure scoped to a single target
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to fetch releases of {target}: {source}")]
    Source {
        target: RepositoryTarget,
        source: RegistryError,
    },

    #[error("invalid minimum version for {target}: {source}")]
    InvalidMinVersion {
        target: RepositoryTarget,
        source: VersionParseError,
    },
}

impl ScanError {
    pub fn target(&self) -> &RepositoryTarget {
        match self {
            ScanError::Source { target, .. } | ScanError::InvalidMinVersion { target, .. } => {
                target
            }
        }
    }
}

/// Selection result for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub target: RepositoryTarget,
    /// Newest first, one per minor line
    pub versions: Vec<SemanticVersion>,
    /// Tags that did not parse as a version
    pub skipped_tags: usize,
}

/// Outcome counts for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub rejected_lines: usize,
    pub scanned: usize,
    pub failed: usize,
    /// Targets not attempted because the run was cancelled
    pub cancelled: usize,
}

impl ScanSummary {
    /// No rejected line, no failed target and nothing cancelled
    pub fn is_clean(&self) -> bool {
        self.rejected_lines == 0 && self.failed == 0 && self.cancelled == 0
    }
}

/// Fetches, parses and selects versions for each target in turn.
///
/// The registry handle is shared read-only across all targets.
pub struct Scanner {
    registry: Arc<dyn Registry>,
    per_page: u32,
}

impl Scanner {
    pub fn new(registry: Arc<dyn Registry>, per_page: u32) -> Self {
        Self { registry, per_page }
    }

    /// Scan a single target.
    pub async fn scan(&self, target: &RepositoryTarget) -> Result<ScanReport, ScanError> {
        let min_version = SemanticVersion::parse(&target.min_version).map_err(|source| {
            ScanError::InvalidMinVersion {
                target: target.clone(),
                source,
            }
        })?;

        let tags = self
            .registry
            .fetch_release_tags(&target.owner, &target.name, self.per_page)
            .await
            .map_err(|source| ScanError::Source {
                target: target.clone(),
                source,
            })?;
        debug!("Fetched {} release tags for {}", tags.len(), target);

        let mut skipped_tags = 0;
        let versions: Vec<SemanticVersion> = tags
            .iter()
            .filter_map(|tag| {
                SemanticVersion::parse_tag(tag)
                    .inspect_err(|e| {
                        skipped_tags += 1;
                        warn!("Skipping tag of {}: {}", target, e);
                    })
                    .ok()
            })
            .collect();

        Ok(ScanReport {
            target: target.clone(),
            versions: select_latest_versions(versions, &min_version),
            skipped_tags,
        })
    }

    /// Report rejected lines, then scan every target in input order.
    ///
    /// A failing target is reported and never stops the batch. Once `cancel`
    /// turns `true` the in-flight fetch is dropped and the remaining targets
    /// are counted as cancelled. Only reporter write errors abort the run.
    pub async fn scan_all<R: Reporter + ?Sized>(
        &self,
        list: &TargetList,
        reporter: &mut R,
        mut cancel: watch::Receiver<bool>,
    ) -> io::Result<ScanSummary> {
        let mut summary = ScanSummary {
            rejected_lines: list.rejected.len(),
            ..ScanSummary::default()
        };

        for rejected in &list.rejected {
            reporter.rejected_line(rejected)?;
        }

        for (index, target) in list.targets.iter().enumerate() {
            if *cancel.borrow() {
                summary.cancelled = list.targets.len() - index;
                break;
            }

            let outcome = tokio::select! {
                biased;
                Ok(_) = cancel.wait_for(|cancelled| *cancelled) => None,
                outcome = self.scan(target) => Some(outcome),
            };

            match outcome {
                Some(Ok(report)) => {
                    info!(
                        "Selected {} versions for {} ({} tags skipped)",
                        report.versions.len(),
                        target,
                        report.skipped_tags
                    );
                    reporter.scanned(&report)?;
                    summary.scanned += 1;
                }
                Some(Err(e)) => {
                    error!("{}", e);
                    reporter.failed(&e)?;
                    summary.failed += 1;
                }
                None => {
                    warn!("Scan cancelled while fetching {}", target);
                    summary.cancelled = list.targets.len() - index;
                    break;
                }
            }
        }

        Ok(summary)
    }
}
