/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;

pub use file_reader::FileLineSource;
pub use file_writer::FileLineSink;
