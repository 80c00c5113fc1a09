use crate::line_reversal::domain::Document;
use crate::shared::Result;

/// LineSink port for writing an ordered sequence of lines
pub trait LineSink {
    /// Writes all lines in order, each followed by a line terminator
    ///
    /// The destination is fully replaced on every call; nothing is appended.
    ///
    /// # Errors
    /// Returns `ReverserError::SinkUnavailable` if the destination cannot be
    /// created, opened or written. A failed write may leave the
    /// destination truncated.
    fn write_lines(&self, lines: &Document) -> Result<()>;

    /// Human-readable description of the destination, used in progress messages
    fn describe(&self) -> String {
        "output".to_string()
    }
}

impl<T: LineSink + ?Sized> LineSink for &T {
    fn write_lines(&self, lines: &Document) -> Result<()> {
        (**self).write_lines(lines)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
