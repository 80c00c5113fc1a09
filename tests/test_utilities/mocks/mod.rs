/// Mock implementations for testing
mod mock_line_sink;
mod mock_line_source;
mod mock_progress_reporter;

pub use mock_line_sink::MockLineSink;
pub use mock_line_source::MockLineSource;
pub use mock_progress_reporter::MockProgressReporter;
