use crate::line_reversal::domain::Document;
use crate::ports::outbound::LineSink;
use crate::shared::error::ReverserError;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// FileLineSink adapter for writing lines to a file on disk
///
/// Every `write_lines` call truncates the file and rewrites it from scratch.
#[derive(Debug, Clone)]
pub struct FileLineSink {
    path: PathBuf,
}

impl FileLineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, details: impl Into<String>) -> anyhow::Error {
        ReverserError::SinkUnavailable {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.unavailable(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }
}

impl LineSink for FileLineSink {
    fn write_lines(&self, lines: &Document) -> Result<()> {
        self.validate_parent_directory()?;

        let file = File::create(&self.path).map_err(|e| self.unavailable(e.to_string()))?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writeln!(writer, "{}", line).map_err(|e| self.unavailable(e.to_string()))?;
        }

        writer.flush().map_err(|e| self.unavailable(e.to_string()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
