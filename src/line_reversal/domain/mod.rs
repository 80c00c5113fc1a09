pub mod document;
pub mod line;

pub use document::Document;
pub use line::Line;
