/// Crate-wide Result with anyhow::Error, so domain errors such as
/// `ReverserError` can be downcast by callers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
