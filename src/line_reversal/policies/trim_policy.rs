use std::fmt;
use std::str::FromStr;

/// TrimPolicy decides where lines end and how much of each survives reading
///
/// - `Full` (default): `\n`, `\r\n` and a lone `\r` all end a line, and
///   whitespace is stripped from both ends. The whitespace set is Unicode
///   `White_Space` plus the ASCII separators `\x1c`..=`\x1f`.
/// - `TerminatorOnly`: only `\n` ends a line and one `\r` before it is
///   dropped; all other whitespace is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimPolicy {
    #[default]
    Full,
    TerminatorOnly,
}

impl TrimPolicy {
    /// Splits file content into raw lines, terminators removed
    ///
    /// A final terminator closes the last line instead of opening a new one.
    pub fn split_lines<'a>(&self, content: &'a str) -> Vec<&'a str> {
        match self {
            TrimPolicy::Full => split_universal(content),
            TrimPolicy::TerminatorOnly => content.split_terminator('\n').collect(),
        }
    }

    /// Cleans up one raw line produced by [`TrimPolicy::split_lines`]
    pub fn apply<'a>(&self, raw: &'a str) -> &'a str {
        match self {
            TrimPolicy::Full => raw.trim_matches(is_strippable),
            TrimPolicy::TerminatorOnly => raw.strip_suffix('\r').unwrap_or(raw),
        }
    }
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits on `\r\n`, `\r` and `\n`
fn split_universal(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator_len..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

impl FromStr for TrimPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(TrimPolicy::Full),
            "terminator" | "terminator-only" => Ok(TrimPolicy::TerminatorOnly),
            _ => Err(format!(
                "Invalid trim policy: {}. Please specify 'full' or 'terminator'",
                s
            )),
        }
    }
}

impl fmt::Display for TrimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimPolicy::Full => write!(f, "full"),
            TrimPolicy::TerminatorOnly => write!(f, "terminator"),
        }
    }
}
