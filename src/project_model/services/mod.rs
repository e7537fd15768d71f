mod dependency_resolver;
mod diagnostic_extractor;
mod model_metadata_generator;
mod model_aggregator;
mod phase;
mod source_layout_collector;
mod task_collector;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use dependency_resolver::DependencyResolver;
pub use diagnostic_extractor::DiagnosticExtractor;
pub use model_metadata_generator::{ModelMetadataGenerator, TOOL_NAME};
pub use model_aggregator::{AggregatorOptions, ModelAggregator};
pub use phase::{Phase, PhaseOutput, MAX_MODULE_DEPTH};
pub use source_layout_collector::{PathLayout, SourceLayoutCollector};
pub use task_collector::TaskCollector;
