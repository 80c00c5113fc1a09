use crate::application::dto::{ReverseRequest, ReverseResponse};
use crate::shared::Result;

/// LineReversalPort - Inbound port for the reverse-a-file use case
///
/// This is what the CLI drives: hand it the input and output locations,
/// get back a summary of the run.
pub trait LineReversalPort {
    /// Reads the request's input, reverses every line and writes the output
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input cannot be opened or read (`SourceUnavailable`)
    /// - The output cannot be created or written (`SinkUnavailable`)
    fn execute(&self, request: ReverseRequest) -> Result<ReverseResponse>;
}
