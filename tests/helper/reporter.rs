//! Reporter that captures text output in memory

use std::io;

use latest_versions::scan::report::{Reporter, TextReporter};
use latest_versions::scan::{ScanError, ScanReport, TargetLineError};

pub struct CapturingReporter {
    inner: TextReporter<Vec<u8>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self {
            inner: TextReporter::new(Vec::new()),
        }
    }

    pub fn lines(self) -> Vec<String> {
        String::from_utf8(self.inner.into_inner())
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

impl Reporter for CapturingReporter {
    fn rejected_line(&mut self, error: &TargetLineError) -> io::Result<()> {
        self.inner.rejected_line(error)
    }

    fn scanned(&mut self, report: &ScanReport) -> io::Result<()> {
        self.inner.scanned(report)
    }

    fn failed(&mut self, error: &ScanError) -> io::Result<()> {
        self.inner.failed(error)
    }
}
