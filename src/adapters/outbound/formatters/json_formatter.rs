use crate::ports::outbound::ModelFormatter;
use crate::project_model::domain::{
    Dependency, DependencySource, Diagnostic, ModelMetadata, ProjectModel, SourcePath,
};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectUpdate<'a> {
    source: &'a str,
    dependency_sources: Vec<DependencySourceData<'a>>,
    paths: Vec<PathData<'a>>,
    tasks: Vec<&'a str>,
    errors: Vec<ErrorData<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencySourceData<'a> {
    name: &'a str,
    description: &'a str,
    dependencies: Vec<DependencyData<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyData<'a> {
    group_id: &'a str,
    artifact_id: &'a str,
    version: &'a str,
    file_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_file_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jmod: Option<&'a str>,
    scopes: Vec<&'a str>,
    modules: Vec<&'a str>,
    transitive: bool,
    resolved: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PathData<'a> {
    #[serde(rename_all = "camelCase")]
    Directory {
        source: &'a str,
        name: &'a str,
        module: &'a str,
        source_dir: &'a str,
        class_dir: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    DirectorySet {
        source: &'a str,
        name: &'a str,
        module: &'a str,
        source_dirs: Vec<&'a str>,
        class_dirs: Vec<&'a str>,
    },
}

#[derive(Debug, Serialize)]
struct ErrorData<'a> {
    file: &'a str,
    line: u32,
    message: &'a str,
}

impl<'a> From<&'a Dependency> for DependencyData<'a> {
    fn from(dependency: &'a Dependency) -> Self {
        let key = dependency.key();
        Self {
            group_id: key.group(),
            artifact_id: key.artifact(),
            version: key.version(),
            file_name: dependency.file_name(),
            source_file_name: dependency.source_file_name(),
            jmod: dependency.jmod(),
            scopes: dependency.scopes().iter().map(String::as_str).collect(),
            modules: dependency.modules().iter().map(String::as_str).collect(),
            transitive: dependency.is_transitive(),
            resolved: dependency.is_resolved(),
        }
    }
}

impl<'a> From<&'a DependencySource> for DependencySourceData<'a> {
    fn from(source: &'a DependencySource) -> Self {
        Self {
            name: source.name(),
            description: source.description(),
            dependencies: source.dependencies().iter().map(DependencyData::from).collect(),
        }
    }
}

impl<'a> From<&'a SourcePath> for PathData<'a> {
    fn from(path: &'a SourcePath) -> Self {
        match path {
            SourcePath::Directory(dir) => PathData::Directory {
                source: &dir.source,
                name: &dir.name,
                module: &dir.module,
                source_dir: &dir.source_dir,
                class_dir: &dir.output_dir,
            },
            SourcePath::DirectorySet(set) => PathData::DirectorySet {
                source: &set.source,
                name: &set.name,
                module: &set.module,
                source_dirs: set.source_dirs.iter().map(String::as_str).collect(),
                class_dirs: set.output_dirs.iter().map(String::as_str).collect(),
            },
        }
    }
}

impl<'a> From<&'a Diagnostic> for ErrorData<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            file: diagnostic.file(),
            line: diagnostic.line(),
            message: diagnostic.message(),
        }
    }
}

/// JsonFormatter adapter - the model in the camelCase shape editors consume
///
/// Tasks are listed bare names first. Run metadata is not part of this
/// format.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFormatter for JsonFormatter {
    fn format(&self, model: &ProjectModel, _metadata: &ModelMetadata) -> Result<String> {
        let update = ProjectUpdate {
            source: model.source(),
            dependency_sources: model
                .dependency_sources()
                .iter()
                .map(DependencySourceData::from)
                .collect(),
            paths: model.paths().iter().map(PathData::from).collect(),
            tasks: model.sorted_tasks().iter().map(|t| t.as_str()).collect(),
            errors: model.diagnostics().iter().map(ErrorData::from).collect(),
        };

        let mut json = serde_json::to_string_pretty(&update)?;
        json.push('\n');
        Ok(json)
    }
}
