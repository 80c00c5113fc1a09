use crate::line_reversal::domain::{Document, Line};
use crate::line_reversal::policies::TrimPolicy;
use crate::ports::outbound::LineSource;
use crate::shared::error::ReverserError;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// FileLineSource adapter for reading lines from a file on disk
///
/// The file is opened fresh on every `read_lines` call and closed when the
/// call returns, on success or failure.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
    trim_policy: TrimPolicy,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            trim_policy: TrimPolicy::default(),
        }
    }

    pub fn with_trim_policy(mut self, trim_policy: TrimPolicy) -> Self {
        self.trim_policy = trim_policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, details: impl Into<String>) -> anyhow::Error {
        ReverserError::SourceUnavailable {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Reads the whole file, rejecting anything that is not a regular file
    fn read_content(&self) -> Result<String> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e.to_string()))?;

        let metadata = file
            .metadata()
            .map_err(|e| self.unavailable(format!("Failed to read file metadata: {}", e)))?;
        if !metadata.is_file() {
            return Err(self.unavailable("Not a regular file"));
        }

        let mut content = String::with_capacity(metadata.len() as usize);
        BufReader::new(file)
            .read_to_string(&mut content)
            .map_err(|e| self.unavailable(e.to_string()))?;

        Ok(content)
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Document> {
        let content = self.read_content()?;

        Ok(self
            .trim_policy
            .split_lines(&content)
            .into_iter()
            .map(|raw| Line::from_clean(self.trim_policy.apply(raw).to_string()))
            .collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
