use line_reverser::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// In-memory LineSink that records every write
#[derive(Default, Clone)]
pub struct MockLineSink {
    pub writes: Arc<Mutex<Vec<Vec<String>>>>,
    pub should_fail: bool,
}

impl MockLineSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_written(&self) -> Option<Vec<String>> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl LineSink for MockLineSink {
    fn write_lines(&self, lines: &Document) -> Result<()> {
        if self.should_fail {
            return Err(ReverserError::SinkUnavailable {
                path: PathBuf::from("mock://output"),
                details: "Mock sink failure".to_string(),
            }
            .into());
        }
        self.writes.lock().unwrap().push(lines.to_strings());
        Ok(())
    }

    fn describe(&self) -> String {
        "mock://output".to_string()
    }
}
