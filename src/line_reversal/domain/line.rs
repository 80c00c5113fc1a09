use crate::shared::error::ReverserError;
use crate::shared::Result;

/// A single line of text without its terminator.
///
/// Lines are immutable once built: transformations produce new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Line(String);

impl Line {
    /// Creates a line, rejecting text with an embedded line terminator
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains('\n') {
            return Err(ReverserError::Validation {
                message: format!(
                    "A line cannot contain a line terminator: {:?}",
                    text
                ),
            }
            .into());
        }
        Ok(Self(text))
    }

    /// Wraps text already known to be terminator-free.
    pub(crate) fn from_clean(text: String) -> Self {
        debug_assert!(!text.contains('\n'));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (Unicode scalar values), not bytes
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Line {
    type Error = anyhow::Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}
