use crate::project_model::domain::BuildFailure;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

fn default_tool() -> String {
    "Gradle".to_string()
}

fn default_true() -> bool {
    true
}

/// Recorded build tree, as written in a snapshot file
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default = "default_tool")]
    pub tool: String,
    pub tool_version: String,
    /// Root build descriptor; relative paths are taken from the snapshot's directory
    pub build_file: String,
    pub root: ModuleSpec,
    #[serde(default)]
    pub repository: Vec<ArtifactSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub tasks_failure: Option<FailureSpec>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationSpec>,
    #[serde(default)]
    pub configurations_failure: Option<FailureSpec>,
    #[serde(default)]
    pub facets: Vec<FacetSpec>,
    #[serde(default)]
    pub facets_failure: Option<FailureSpec>,
    #[serde(default)]
    pub sources_failure: Option<FailureSpec>,
    #[serde(default)]
    pub children: Vec<ModuleSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationSpec {
    pub name: String,
    #[serde(default = "default_true")]
    pub resolvable: bool,
    /// Declared notations: `group:artifact:version` or `project:<module>`
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Makes the whole configuration fail to resolve
    #[serde(default)]
    pub failure: Option<FailureSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetSpec {
    pub name: String,
    /// Absent for facets that declare no source sets
    #[serde(default)]
    pub source_sets: Option<Vec<SourceSetSpec>>,
    #[serde(default)]
    pub failure: Option<FailureSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSetSpec {
    pub name: String,
    #[serde(default)]
    pub source_dirs: Vec<String>,
    #[serde(default)]
    pub output_dirs: Vec<String>,
    #[serde(default)]
    pub failure: Option<FailureSpec>,
}

/// One repository entry
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSpec {
    pub coordinates: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub sources: Option<String>,
    #[serde(default)]
    pub jmod: Option<String>,
    /// Coordinates this artifact depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Makes every resolution of this artifact fail
    #[serde(default)]
    pub failure: Option<FailureSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FailureSpec {
    pub message: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub cause: Option<Box<FailureSpec>>,
}

impl FailureSpec {
    pub fn to_failure(&self) -> BuildFailure {
        let mut failure = match &self.file {
            Some(file) => BuildFailure::located(&self.message, file, self.line.unwrap_or(0)),
            None => BuildFailure::new(&self.message),
        };
        if let Some(cause) = &self.cause {
            failure = failure.caused_by(cause.to_failure());
        }
        failure
    }
}

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Toml,
}

impl SnapshotFormat {
    /// File names looked up when a directory is given
    pub const CANDIDATES: [&'static str; 4] = [
        "build-tree.json",
        "build-tree.yaml",
        "build-tree.yml",
        "build-tree.toml",
    ];

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(SnapshotFormat::Json),
            "yaml" | "yml" => Some(SnapshotFormat::Yaml),
            "toml" => Some(SnapshotFormat::Toml),
            _ => None,
        }
    }
}

impl SnapshotDocument {
    pub fn parse(content: &str, format: SnapshotFormat) -> Result<Self> {
        let document: SnapshotDocument = match format {
            SnapshotFormat::Json => serde_json::from_str(content)?,
            SnapshotFormat::Yaml => serde_yaml_ng::from_str(content)?,
            SnapshotFormat::Toml => toml::from_str(content)?,
        };
        Ok(document)
    }
}
