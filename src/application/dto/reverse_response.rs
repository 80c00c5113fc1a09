/// ReverseResponse - Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseResponse {
    pub lines_read: usize,
    pub lines_written: usize,
}

impl ReverseResponse {
    pub fn new(lines_read: usize, lines_written: usize) -> Self {
        Self {
            lines_read,
            lines_written,
        }
    }
}
