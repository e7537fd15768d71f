//! build-model - project model extraction for multi-module build trees
//!
//! This library walks a build tool's module tree and produces the project
//! model an IDE needs to open it: tasks, merged dependencies, source
//! directory layout and a list of diagnostics. Failures raised by the build
//! tool never abort a run; they degrade the model and are reported as
//! diagnostics pointing at the offending build file line.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`project_model`): Model types, policies and the extraction services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions, including the build tool boundary
//! - **Adapters** (`adapters`): Snapshot-backed build tree, filesystem, formatters, console
//! - **Shared** (`shared`): Common utilities, error types and logging
//!
//! # Example
//!
//! ```no_run
//! use build_model::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildProjectModelUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ModelRequest::builder().project_path("build-tree.yaml").build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response.model, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod project_model;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::snapshot::SnapshotBuildTree;
    pub use crate::application::dto::{ModelRequest, ModelResponse, OutputFormat};
    pub use crate::application::use_cases::BuildProjectModelUseCase;
    pub use crate::ports::outbound::{
        BuildModule, BuildTree, BuildTreeReader, Configuration, Facet, ModelFormatter,
        OutputPresenter, ProgressReporter, SourceSetContainer,
    };
    pub use crate::project_model::domain::{
        ArtifactKey, BuildFailure, Dependency, Diagnostic, ModelMetadata, ProjectModel,
        SourcePath, TaskId,
    };
    pub use crate::project_model::policies::KindTagPolicy;
    pub use crate::project_model::services::{AggregatorOptions, ModelAggregator, PathLayout};
    pub use crate::shared::Result;
}
