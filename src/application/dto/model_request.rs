use crate::project_model::policies::KindTagPolicy;
use crate::project_model::services::{AggregatorOptions, PathLayout};
use crate::shared::error::BuildModelError;
use crate::shared::Result;
use std::path::PathBuf;

/// ModelRequest - input of the model extraction use case
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Project directory or build tree snapshot
    pub project_path: PathBuf,
    pub options: AggregatorOptions,
}

impl ModelRequest {
    pub fn new(project_path: PathBuf, options: AggregatorOptions) -> Self {
        Self {
            project_path,
            options,
        }
    }

    pub fn builder() -> ModelRequestBuilder {
        ModelRequestBuilder::default()
    }
}

/// Builder for ModelRequest; unset options take their defaults
#[derive(Debug, Default)]
pub struct ModelRequestBuilder {
    project_path: Option<PathBuf>,
    kind_tags: Option<Vec<String>>,
    layout: Option<PathLayout>,
    resolve_sources: Option<bool>,
    parallel: Option<bool>,
}

impl ModelRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn kind_tags(mut self, tags: Vec<String>) -> Self {
        self.kind_tags = Some(tags);
        self
    }

    pub fn layout(mut self, layout: PathLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn resolve_sources(mut self, enabled: bool) -> Self {
        self.resolve_sources = Some(enabled);
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// # Errors
    /// Returns an error if no project path was given or the kind tags are invalid
    pub fn build(self) -> Result<ModelRequest> {
        let project_path = self.project_path.ok_or_else(|| BuildModelError::Validation {
            message: "project path is required".to_string(),
        })?;

        let defaults = AggregatorOptions::default();
        let kind_tags = match self.kind_tags {
            Some(tags) => KindTagPolicy::new(tags)?,
            None => defaults.kind_tags,
        };

        Ok(ModelRequest::new(
            project_path,
            AggregatorOptions {
                kind_tags,
                layout: self.layout.unwrap_or(defaults.layout),
                resolve_sources: self.resolve_sources.unwrap_or(defaults.resolve_sources),
                parallel: self.parallel.unwrap_or(defaults.parallel),
            },
        ))
    }
}
