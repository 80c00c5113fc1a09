use crate::line_reversal::domain::{Document, Line};

/// LineManipulator transforms a document into a new one, line by line
///
/// Implementations must be pure: the input is never modified and the
/// output has exactly one line per input line, in the same order.
pub trait LineManipulator {
    /// Returns a new document whose lines are the transformed originals
    fn get_reversed(&self, originals: &Document) -> Document;
}

/// CharReverser reverses each line over Unicode scalar values
///
/// Multi-byte characters are kept intact; only their order flips.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharReverser;

impl CharReverser {
    pub fn new() -> Self {
        Self
    }

    /// Reverses a single line
    pub fn reverse_line(line: &Line) -> Line {
        Line::from_clean(line.as_str().chars().rev().collect())
    }
}

impl LineManipulator for CharReverser {
    fn get_reversed(&self, originals: &Document) -> Document {
        originals.iter().map(Self::reverse_line).collect()
    }
}
