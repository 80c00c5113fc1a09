use crate::ports::outbound::ProgressReporter;

/// SilentProgressReporter discards every message (`--quiet`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgressReporter;

impl SilentProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}
