use crate::project_model::domain::{ModelMetadata, ProjectModel};
use crate::shared::Result;

/// ModelFormatter port for rendering a project model
pub trait ModelFormatter {
    /// Renders `model` in the formatter's output format
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ProjectModel, metadata: &ModelMetadata) -> Result<String>;
}
