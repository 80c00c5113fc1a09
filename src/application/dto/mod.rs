/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod reverse_request;
mod reverse_response;

pub use reverse_request::{ReverseRequest, ReverseRequestBuilder};
pub use reverse_response::ReverseResponse;
