use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use crate::ports::outbound::ProgressReporter;

/// Reporter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterType {
    Stderr,
    Silent,
}

impl ReporterType {
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            ReporterType::Silent
        } else {
            ReporterType::Stderr
        }
    }
}

/// Factory for creating progress reporters
///
/// Lives in the application layer because choosing an adapter is an
/// application decision, not a domain one.
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates a reporter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use line_reverser::application::factories::{ReporterFactory, ReporterType};
    ///
    /// let reporter = ReporterFactory::create(ReporterType::Silent);
    /// ```
    pub fn create(reporter_type: ReporterType) -> Box<dyn ProgressReporter> {
        match reporter_type {
            ReporterType::Stderr => Box::new(StderrProgressReporter::new()),
            ReporterType::Silent => Box::new(SilentProgressReporter::new()),
        }
    }
}
