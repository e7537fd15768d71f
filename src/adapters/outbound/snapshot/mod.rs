/// Snapshot adapter - build trees recorded in JSON, YAML or TOML files
///
/// Stands in for a live build tool connection: the recorded tree answers
/// every collaborator query, including its failures.
mod catalog;
mod schema;
mod tree;

pub use catalog::Notation;
pub use schema::{
    ArtifactSpec, ConfigurationSpec, FacetSpec, FailureSpec, ModuleSpec, SnapshotDocument,
    SnapshotFormat, SourceSetSpec,
};
pub use tree::SnapshotBuildTree;
