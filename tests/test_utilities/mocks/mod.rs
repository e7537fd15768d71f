/// Mock implementations for testing
mod mock_build_tree;
mod mock_build_tree_reader;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_build_tree::{MockBuildTree, MockConfiguration, MockFacet, MockModule};
#[allow(unused_imports)]
pub use mock_build_tree_reader::MockBuildTreeReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
