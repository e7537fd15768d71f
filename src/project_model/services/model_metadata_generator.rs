use crate::project_model::domain::ModelMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name reported in model metadata
pub const TOOL_NAME: &str = "build-model";

/// ModelMetadataGenerator service - stamps an extraction run
pub struct ModelMetadataGenerator;

impl ModelMetadataGenerator {
    /// Metadata with the current UTC time and a fresh run id
    pub fn generate(tool_name: &str, tool_version: &str) -> ModelMetadata {
        ModelMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            Uuid::new_v4().to_string(),
        )
    }

    /// Uses this binary's name and compile-time version
    pub fn generate_default() -> ModelMetadata {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
