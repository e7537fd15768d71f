use super::MockBuildTree;
use build_model::prelude::*;
use build_model::shared::error::BuildModelError;
use std::path::Path;

/// Mock BuildTreeReader handing out copies of a prepared tree
#[derive(Clone)]
pub struct MockBuildTreeReader {
    tree: Option<MockBuildTree>,
}

#[allow(dead_code)]
impl MockBuildTreeReader {
    pub fn new(tree: MockBuildTree) -> Self {
        Self { tree: Some(tree) }
    }

    /// A reader that finds no build tree at all
    pub fn missing() -> Self {
        Self { tree: None }
    }
}

impl BuildTreeReader for MockBuildTreeReader {
    fn read_build_tree(&self, project_path: &Path) -> Result<Box<dyn BuildTree>> {
        match &self.tree {
            Some(tree) => Ok(Box::new(tree.clone())),
            None => Err(BuildModelError::SnapshotNotFound {
                path: project_path.to_path_buf(),
                suggestion: "Mock reader has no tree".to_string(),
            }
            .into()),
        }
    }
}
