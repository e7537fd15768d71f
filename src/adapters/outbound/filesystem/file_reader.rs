use crate::adapters::outbound::snapshot::{SnapshotBuildTree, SnapshotDocument, SnapshotFormat};
use crate::ports::outbound::{BuildTree, BuildTreeReader};
use crate::shared::error::BuildModelError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for loading build tree snapshots
///
/// Accepts either a snapshot file or a directory holding one of
/// `build-tree.{json,yaml,yml,toml}`. Files are read through the shared
/// security checks (no symlinks, regular files only, size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Finds the snapshot file for `project_path`
    pub fn locate_snapshot(&self, project_path: &Path) -> Result<PathBuf> {
        if project_path.is_file() {
            return Ok(project_path.to_path_buf());
        }

        if project_path.is_dir() {
            return SnapshotFormat::CANDIDATES
                .iter()
                .map(|name| project_path.join(name))
                .find(|candidate| candidate.exists())
                .ok_or_else(|| {
                    BuildModelError::SnapshotNotFound {
                        path: project_path.to_path_buf(),
                        suggestion: format!(
                            "No build tree snapshot in \"{}\". Expected one of: {}",
                            project_path.display(),
                            SnapshotFormat::CANDIDATES.join(", ")
                        ),
                    }
                    .into()
                });
        }

        Err(BuildModelError::SnapshotNotFound {
            path: project_path.to_path_buf(),
            suggestion: "Specify an existing snapshot file or project directory with --path"
                .to_string(),
        }
        .into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTreeReader for FileSystemReader {
    fn read_build_tree(&self, project_path: &Path) -> Result<Box<dyn BuildTree>> {
        let snapshot_path = self.locate_snapshot(project_path)?;
        let format = SnapshotFormat::from_path(&snapshot_path).ok_or_else(|| {
            BuildModelError::UnsupportedSnapshotFormat {
                path: snapshot_path.clone(),
            }
        })?;

        tracing::debug!(path = %snapshot_path.display(), ?format, "reading build tree snapshot");
        let content = read_checked(&snapshot_path, "build tree snapshot")?;

        let parse_error = |e: anyhow::Error| BuildModelError::SnapshotParseError {
            path: snapshot_path.clone(),
            details: e.to_string(),
        };
        let document = SnapshotDocument::parse(&content, format).map_err(parse_error)?;
        let base_dir = snapshot_path.parent().unwrap_or_else(|| Path::new("."));
        let tree = SnapshotBuildTree::from_document(document, base_dir).map_err(parse_error)?;

        Ok(Box::new(tree))
    }
}
