use crate::application::dto::ReverseResponse;
use crate::line_reversal::domain::Document;
use crate::line_reversal::services::LineManipulator;
use crate::ports::outbound::{LineSink, LineSource, ProgressReporter};
use crate::shared::Result;

/// ReverseLinesUseCase - Core use case: read, reverse, write
///
/// Runs the pipeline exactly once per call with no retries and no
/// branching. Source and sink errors are returned as-is.
///
/// # Type Parameters
/// * `S` - LineSource implementation
/// * `K` - LineSink implementation
/// * `M` - LineManipulator implementation
/// * `PR` - ProgressReporter implementation
pub struct ReverseLinesUseCase<S, K, M, PR> {
    line_source: S,
    line_sink: K,
    manipulator: M,
    progress_reporter: PR,
}

impl<S, K, M, PR> ReverseLinesUseCase<S, K, M, PR>
where
    S: LineSource,
    K: LineSink,
    M: LineManipulator,
    PR: ProgressReporter,
{
    /// Creates a new ReverseLinesUseCase with injected dependencies
    pub fn new(line_source: S, line_sink: K, manipulator: M, progress_reporter: PR) -> Self {
        Self {
            line_source,
            line_sink,
            manipulator,
            progress_reporter,
        }
    }

    /// Executes the pipeline
    ///
    /// # Returns
    /// ReverseResponse with the number of lines read and written
    ///
    /// # Errors
    /// Whatever the source or sink returned, untouched. When the source
    /// fails the sink is never called.
    pub fn run(&self) -> Result<ReverseResponse> {
        // Step 1: Read
        let originals = self.read_and_report()?;

        // Step 2: Reverse
        let reversed = self.reverse_and_report(&originals);

        // Step 3: Write
        self.line_sink.write_lines(&reversed)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} line(s) to: {}",
            reversed.len(),
            self.line_sink.describe()
        ));

        Ok(ReverseResponse::new(originals.len(), reversed.len()))
    }

    fn read_and_report(&self) -> Result<Document> {
        self.progress_reporter.report(&format!(
            "📖 Reading lines from: {}",
            self.line_source.describe()
        ));

        let originals = self.line_source.read_lines()?;

        self.progress_reporter
            .report(&format!("✅ Read {} line(s)", originals.len()));
        Ok(originals)
    }

    fn reverse_and_report(&self, originals: &Document) -> Document {
        let reversed = self.manipulator.get_reversed(originals);

        if !reversed.is_empty() {
            self.progress_reporter
                .report_progress(reversed.len(), originals.len(), Some("reversed"));
        }
        self.progress_reporter
            .report(&format!("🔁 Reversed {} line(s)", reversed.len()));
        reversed
    }
}
