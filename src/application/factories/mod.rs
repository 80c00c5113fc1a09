mod reporter_factory;

pub use reporter_factory::{ReporterFactory, ReporterType};
