/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod line_sink;
pub mod line_source;
pub mod progress_reporter;

pub use line_sink::LineSink;
pub use line_source::LineSource;
pub use progress_reporter::ProgressReporter;
