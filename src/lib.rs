//! line-reverser - reverse the characters of every line in a text file
//!
//! Reads newline-delimited text, reverses each line over Unicode characters
//! (never raw bytes) and writes the result, one line per input line, in order.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`line_reversal`): Lines, documents and the reversal itself
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use line_reverser::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ReverseLinesUseCase::new(
//!     FileLineSource::new("data/in_file.txt"),
//!     FileLineSink::new("data/out_file.txt"),
//!     CharReverser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.run()?;
//! println!("{} line(s) reversed", response.lines_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod line_reversal;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileLineSink, FileLineSource};
    pub use crate::application::dto::{ReverseRequest, ReverseResponse};
    pub use crate::application::use_cases::{ReverseFileUseCase, ReverseLinesUseCase};
    pub use crate::line_reversal::domain::{Document, Line};
    pub use crate::line_reversal::policies::TrimPolicy;
    pub use crate::line_reversal::services::{CharReverser, LineManipulator};
    pub use crate::ports::inbound::LineReversalPort;
    pub use crate::ports::outbound::{LineSink, LineSource, ProgressReporter};
    pub use crate::shared::error::ReverserError;
    pub use crate::shared::Result;
}
