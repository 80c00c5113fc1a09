use crate::line_reversal::domain::Document;
use crate::shared::Result;

/// LineSource port for reading an ordered sequence of lines
///
/// This port abstracts the medium lines come from (a file on disk,
/// an in-memory buffer in tests, ...), keeping the use case independent
/// of it.
pub trait LineSource {
    /// Reads every available line, in order, without line terminators
    ///
    /// # Returns
    /// The document read from the origin. One full read per call.
    ///
    /// # Errors
    /// Returns `ReverserError::SourceUnavailable` if the origin cannot be
    /// opened or read (missing file, permission denied, ...)
    fn read_lines(&self) -> Result<Document>;

    /// Human-readable description of the origin, used in progress messages
    fn describe(&self) -> String {
        "input".to_string()
    }
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn read_lines(&self) -> Result<Document> {
        (**self).read_lines()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
