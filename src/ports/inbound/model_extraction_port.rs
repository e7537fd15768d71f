use crate::application::dto::{ModelRequest, ModelResponse};
use crate::shared::Result;

/// ModelExtractionPort - Inbound port for building a project model
///
/// A degraded model (one with diagnostics) is still a successful
/// extraction. Errors are reserved for failures to obtain a build tree
/// at all.
pub trait ModelExtractionPort {
    /// Builds the project model for `request.project_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project path does not exist or is not readable
    /// - The build tree cannot be loaded
    fn extract_model(&self, request: ModelRequest) -> Result<ModelResponse>;
}
