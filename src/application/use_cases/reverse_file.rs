use super::ReverseLinesUseCase;
use crate::adapters::outbound::filesystem::{FileLineSink, FileLineSource};
use crate::application::dto::{ReverseRequest, ReverseResponse};
use crate::line_reversal::services::CharReverser;
use crate::ports::inbound::LineReversalPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// ReverseFileUseCase - File-to-file reversal driven by a [`ReverseRequest`]
///
/// Wires the filesystem adapters and [`CharReverser`] into a
/// [`ReverseLinesUseCase`] for each request.
pub struct ReverseFileUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ReverseFileUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Builds the pipeline for one request without running it
    pub fn pipeline(
        &self,
        request: ReverseRequest,
    ) -> ReverseLinesUseCase<FileLineSource, FileLineSink, CharReverser, &PR> {
        ReverseLinesUseCase::new(
            FileLineSource::new(request.input_path).with_trim_policy(request.trim_policy),
            FileLineSink::new(request.output_path),
            CharReverser::new(),
            &self.progress_reporter,
        )
    }
}

impl<PR: ProgressReporter> LineReversalPort for ReverseFileUseCase<PR> {
    fn execute(&self, request: ReverseRequest) -> Result<ReverseResponse> {
        self.pipeline(request).run()
    }
}
