/// Use cases module containing application business logic orchestration
mod reverse_file;
mod reverse_lines;

pub use reverse_file::ReverseFileUseCase;
pub use reverse_lines::ReverseLinesUseCase;
