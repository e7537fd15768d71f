pub mod artifact;
pub mod dependency;
pub mod diagnostic;
pub mod failure;
pub mod model_metadata;
pub mod project_model;
pub mod source_path;
pub mod task;

pub use artifact::{ArtifactKey, UNSPECIFIED_VERSION};
pub use dependency::{Dependency, DependencyMap, DependencySource};
pub use diagnostic::Diagnostic;
pub use failure::{BuildFailure, SourceLocation};
pub use model_metadata::ModelMetadata;
pub use project_model::ProjectModel;
pub use source_path::{SourceDirectory, SourceDirectorySet, SourcePath};
pub use task::TaskId;
