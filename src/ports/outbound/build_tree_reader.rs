use super::BuildTree;
use crate::shared::Result;
use std::path::Path;

/// BuildTreeReader port for loading a build tree
///
/// Abstracts how the build tool's object model is obtained, so the use case
/// works the same over a live tool connection or a recorded snapshot.
pub trait BuildTreeReader {
    /// Loads the build tree for a project
    ///
    /// # Arguments
    /// * `project_path` - Project directory, or a snapshot file
    ///
    /// # Errors
    /// Returns an error if:
    /// - No build tree can be found at `project_path`
    /// - The tree cannot be read or parsed
    fn read_build_tree(&self, project_path: &Path) -> Result<Box<dyn BuildTree>>;
}
