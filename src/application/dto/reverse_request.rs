use crate::line_reversal::policies::TrimPolicy;
use crate::shared::error::ReverserError;
use crate::shared::Result;
use std::path::PathBuf;

/// Input used by the reference run when nothing else is configured
pub const DEFAULT_INPUT_PATH: &str = "data/in_file.txt";
/// Output used by the reference run when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "data/out_file.txt";

/// ReverseRequest - Request DTO for a single reversal run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseRequest {
    /// File the lines are read from
    pub input_path: PathBuf,
    /// File the reversed lines are written to (fully overwritten)
    pub output_path: PathBuf,
    /// How input lines are cleaned up on read
    pub trim_policy: TrimPolicy,
}

impl ReverseRequest {
    pub fn new(input_path: PathBuf, output_path: PathBuf, trim_policy: TrimPolicy) -> Self {
        Self {
            input_path,
            output_path,
            trim_policy,
        }
    }

    pub fn builder() -> ReverseRequestBuilder {
        ReverseRequestBuilder::default()
    }
}

impl Default for ReverseRequest {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_INPUT_PATH),
            PathBuf::from(DEFAULT_OUTPUT_PATH),
            TrimPolicy::default(),
        )
    }
}

/// Builder for [`ReverseRequest`]; unset paths fall back to the defaults
#[derive(Debug, Default)]
pub struct ReverseRequestBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    trim_policy: Option<TrimPolicy>,
}

impl ReverseRequestBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn trim_policy(mut self, trim_policy: TrimPolicy) -> Self {
        self.trim_policy = Some(trim_policy);
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `ReverserError::Validation` if a path is empty
    pub fn build(self) -> Result<ReverseRequest> {
        let input_path = self
            .input_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));
        let output_path = self
            .output_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        if input_path.as_os_str().is_empty() {
            return Err(ReverserError::Validation {
                message: "input path must not be empty".to_string(),
            }
            .into());
        }
        if output_path.as_os_str().is_empty() {
            return Err(ReverserError::Validation {
                message: "output path must not be empty".to_string(),
            }
            .into());
        }

        Ok(ReverseRequest::new(
            input_path,
            output_path,
            self.trim_policy.unwrap_or_default(),
        ))
    }
}
