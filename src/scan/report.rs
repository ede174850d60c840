//! Presentation of scan results

use std::io::{self, Write};

use crate::scan::scanner::{ScanError, ScanReport};
use crate::scan::target::TargetLineError;
use crate::version::semver::SemanticVersion;

/// Receives one event per rejected line and per scanned target
pub trait Reporter {
    fn rejected_line(&mut self, error: &TargetLineError) -> io::Result<()>;

    fn scanned(&mut self, report: &ScanReport) -> io::Result<()>;

    fn failed(&mut self, error: &ScanError) -> io::Result<()>;
}

/// Render versions as `[v1 v2 ... vn]`
pub fn format_versions(versions: &[SemanticVersion]) -> String {
    let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(" "))
}

/// Line-oriented text output
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn rejected_line(&mut self, error: &TargetLineError) -> io::Result<()> {
        writeln!(self.out, "rewrite this line: {}", error.line)
    }

    fn scanned(&mut self, report: &ScanReport) -> io::Result<()> {
        writeln!(
            self.out,
            "latest versions of {}: {}",
            report.target,
            format_versions(&report.versions)
        )
    }

    fn failed(&mut self, error: &ScanError) -> io::Result<()> {
        writeln!(self.out, "{}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::target::{RejectReason, RepositoryTarget};
    use crate::version::error::RegistryError;

    fn output(reporter: TextReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn format_versions_joins_with_spaces() {
        let versions = vec![SemanticVersion::new(2, 0, 1), SemanticVersion::new(1, 3, 0)];
        assert_eq!(format_versions(&versions), "[2.0.1 1.3.0]");
        assert_eq!(format_versions(&[]), "[]");
    }

    #[test]
    fn scanned_writes_latest_versions_line() {
        let mut reporter = TextReporter::new(Vec::new());
        let report = ScanReport {
            target: RepositoryTarget::new("coreos", "etcd", "3.0.0"),
            versions: vec![SemanticVersion::new(3, 5, 1), SemanticVersion::new(3, 4, 18)],
            skipped_tags: 0,
        };

        reporter.scanned(&report).unwrap();

        assert_eq!(
            output(reporter),
            "latest versions of coreos/etcd: [3.5.1 3.4.18]\n"
        );
    }

    #[test]
    fn failed_writes_error_message() {
        let mut reporter = TextReporter::new(Vec::new());
        let error = ScanError::Source {
            target: RepositoryTarget::new("nonexistent", "repo", "1.0.0"),
            source: RegistryError::NotFound("nonexistent/repo".to_string()),
        };

        reporter.failed(&error).unwrap();

        assert_eq!(
            output(reporter),
            "failed to fetch releases of nonexistent/repo: Repository not found: nonexistent/repo\n"
        );
    }

    #[test]
    fn rejected_line_asks_for_rewrite() {
        let mut reporter = TextReporter::new(Vec::new());
        let error = TargetLineError {
            line_number: 3,
            line: "malformed-line".to_string(),
            reason: RejectReason::FieldCount,
        };

        reporter.rejected_line(&error).unwrap();

        assert_eq!(output(reporter), "rewrite this line: malformed-line\n");
    }
}
