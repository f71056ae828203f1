use std::path::{Path, PathBuf};

/// Where a report reads its results from and where it writes the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    input: PathBuf,
    output: PathBuf,
}

impl ReportConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Results file (client) or results directory (server reports).
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
