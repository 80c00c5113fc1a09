use line_reverser::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory LineSource for testing
#[derive(Clone)]
pub struct MockLineSource {
    pub lines: Vec<String>,
    pub should_fail: bool,
    pub reads: Arc<AtomicUsize>,
}

impl MockLineSource {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            should_fail: false,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(&[])
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl LineSource for MockLineSource {
    fn read_lines(&self) -> Result<Document> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(ReverserError::SourceUnavailable {
                path: PathBuf::from("mock://input"),
                details: "Mock source failure".to_string(),
            }
            .into());
        }
        Document::from_texts(self.lines.clone())
    }

    fn describe(&self) -> String {
        "mock://input".to_string()
    }
}
