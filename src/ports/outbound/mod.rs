/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// `build_tree` describes the build tool's object model as the phases see
/// it; the remaining ports cover loading, formatting and presentation.
pub mod build_tree;
pub mod build_tree_reader;
pub mod model_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use build_tree::{
    BuildModule, BuildTree, Configuration, Facet, LenientResolution, ResolvedArtifact, SourceSet,
    SourceSetContainer, SourcesRequest, UnresolvedDependency, SOURCES_CLASSIFIER,
};
pub use build_tree_reader::BuildTreeReader;
pub use model_formatter::ModelFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
