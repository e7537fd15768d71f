/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use case and results back out
/// to the formatters, keeping the domain layer isolated.
mod model_request;
mod model_response;
mod output_format;

pub use model_request::{ModelRequest, ModelRequestBuilder};
pub use model_response::ModelResponse;
pub use output_format::OutputFormat;
