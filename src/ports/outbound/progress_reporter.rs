/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// use case can tell the user what it is doing without knowing where
/// the messages end up.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress through a known amount of work
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for Box<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
