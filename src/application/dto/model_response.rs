use crate::project_model::domain::{ModelMetadata, ProjectModel};

/// ModelResponse - output of the model extraction use case
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub model: ProjectModel,
    /// Run timestamp and id, rendered by the Markdown formatter
    pub metadata: ModelMetadata,
}

impl ModelResponse {
    pub fn new(model: ProjectModel, metadata: ModelMetadata) -> Self {
        Self { model, metadata }
    }

    pub fn has_diagnostics(&self) -> bool {
        self.model.is_degraded()
    }
}
