use super::catalog::{module_path, Catalog, Notation};
use super::schema::{ConfigurationSpec, FacetSpec, FailureSpec, ModuleSpec, SnapshotDocument};
use crate::ports::outbound::{
    BuildModule, BuildTree, Configuration, Facet, LenientResolution, SourceSet,
    SourceSetContainer, SourcesRequest,
};
use crate::project_model::domain::{ArtifactKey, BuildFailure};
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn failure_of(spec: &Option<FailureSpec>) -> Option<BuildFailure> {
    spec.as_ref().map(FailureSpec::to_failure)
}

/// SnapshotBuildTree adapter - a build tree replayed from a snapshot document
///
/// Every collaborator answer, including failures, comes from the document,
/// so the same snapshot always yields the same model.
#[derive(Debug)]
pub struct SnapshotBuildTree {
    root: SnapshotModule,
    build_file: PathBuf,
    tool: String,
    tool_version: String,
}

impl SnapshotBuildTree {
    /// # Arguments
    /// * `document` - Parsed snapshot
    /// * `base_dir` - Directory relative `build_file` paths are resolved against
    ///
    /// # Errors
    /// Returns an error if a dependency notation or repository entry is malformed
    pub fn from_document(document: SnapshotDocument, base_dir: &Path) -> Result<Self> {
        let root_group = document
            .root
            .group
            .clone()
            .unwrap_or_else(|| document.root.name.clone());
        let catalog = Arc::new(Catalog::build(&document.root, &root_group, &document.repository)?);

        let build_file = PathBuf::from(&document.build_file);
        let build_file = if build_file.is_absolute() {
            build_file
        } else {
            base_dir.join(build_file)
        };

        let root = SnapshotModule::from_spec(&document.root, None, &catalog)?;
        tracing::debug!(
            build_file = %build_file.display(),
            root = root.name.as_str(),
            "loaded build tree snapshot"
        );

        Ok(Self {
            root,
            build_file,
            tool: document.tool,
            tool_version: document.tool_version,
        })
    }
}

impl BuildTree for SnapshotBuildTree {
    fn root(&self) -> &dyn BuildModule {
        &self.root
    }

    fn build_file(&self) -> &Path {
        &self.build_file
    }

    fn tool_name(&self) -> &str {
        &self.tool
    }

    fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[derive(Debug)]
struct SnapshotModule {
    name: String,
    path: String,
    group: String,
    tasks: Vec<String>,
    tasks_failure: Option<BuildFailure>,
    configurations: Vec<SnapshotConfiguration>,
    configurations_failure: Option<BuildFailure>,
    facets: Vec<SnapshotFacet>,
    facets_failure: Option<BuildFailure>,
    sources_failure: Option<BuildFailure>,
    children: Vec<SnapshotModule>,
    catalog: Arc<Catalog>,
}

impl SnapshotModule {
    fn from_spec(spec: &ModuleSpec, parent_path: Option<&str>, catalog: &Arc<Catalog>) -> Result<Self> {
        let path = module_path(parent_path, &spec.name);

        let configurations = spec
            .configurations
            .iter()
            .map(|c| SnapshotConfiguration::from_spec(c, catalog))
            .collect::<Result<Vec<_>>>()?;
        let children = spec
            .children
            .iter()
            .map(|child| SnapshotModule::from_spec(child, Some(path.as_str()), catalog))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: spec.name.clone(),
            group: spec
                .group
                .clone()
                .unwrap_or_else(|| catalog.root_group().to_string()),
            path,
            tasks: spec.tasks.clone(),
            tasks_failure: failure_of(&spec.tasks_failure),
            configurations,
            configurations_failure: failure_of(&spec.configurations_failure),
            facets: spec.facets.iter().map(SnapshotFacet::from_spec).collect(),
            facets_failure: failure_of(&spec.facets_failure),
            sources_failure: failure_of(&spec.sources_failure),
            children,
            catalog: Arc::clone(catalog),
        })
    }
}

impl BuildModule for SnapshotModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn children(&self) -> Vec<&dyn BuildModule> {
        self.children.iter().map(|c| c as &dyn BuildModule).collect()
    }

    fn task_names(&self) -> std::result::Result<Vec<String>, BuildFailure> {
        match &self.tasks_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.tasks.clone()),
        }
    }

    fn configurations(&self) -> std::result::Result<Vec<&dyn Configuration>, BuildFailure> {
        if let Some(failure) = &self.configurations_failure {
            return Err(failure.clone());
        }
        Ok(self
            .configurations
            .iter()
            .map(|c| c as &dyn Configuration)
            .collect())
    }

    fn facets(&self) -> std::result::Result<Vec<&dyn Facet>, BuildFailure> {
        if let Some(failure) = &self.facets_failure {
            return Err(failure.clone());
        }
        Ok(self.facets.iter().map(|f| f as &dyn Facet).collect())
    }

    fn resolve_sources(
        &self,
        request: &SourcesRequest,
    ) -> std::result::Result<LenientResolution, BuildFailure> {
        if let Some(failure) = &self.sources_failure {
            return Err(failure.clone());
        }
        Ok(self.catalog.resolve_sources(request))
    }
}

#[derive(Debug)]
struct SnapshotConfiguration {
    name: String,
    resolvable: bool,
    declared: Vec<Notation>,
    failure: Option<BuildFailure>,
    catalog: Arc<Catalog>,
}

impl SnapshotConfiguration {
    fn from_spec(spec: &ConfigurationSpec, catalog: &Arc<Catalog>) -> Result<Self> {
        let declared = spec
            .dependencies
            .iter()
            .map(|n| Notation::parse(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: spec.name.clone(),
            resolvable: spec.resolvable,
            declared,
            failure: failure_of(&spec.failure),
            catalog: Arc::clone(catalog),
        })
    }
}

impl Configuration for SnapshotConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_resolvable(&self) -> bool {
        self.resolvable
    }

    fn declared_dependencies(&self) -> Vec<ArtifactKey> {
        self.declared
            .iter()
            .map(|n| self.catalog.declared_key(n))
            .collect()
    }

    fn resolve_lenient(&self) -> std::result::Result<LenientResolution, BuildFailure> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.catalog.resolve(&self.name, &self.declared))
    }
}

#[derive(Debug)]
struct SnapshotFacet {
    name: String,
    source_sets: Option<std::result::Result<Vec<SourceSet>, BuildFailure>>,
}

impl SnapshotFacet {
    fn from_spec(spec: &FacetSpec) -> Self {
        let source_sets = match (&spec.failure, &spec.source_sets) {
            (Some(failure), _) => Some(Err(failure.to_failure())),
            (None, None) => None,
            (None, Some(sets)) => Some(
                sets.iter()
                    .map(|set| match &set.failure {
                        Some(failure) => Err(failure.to_failure()),
                        None => Ok(SourceSet::new(
                            &set.name,
                            set.source_dirs.clone(),
                            set.output_dirs.clone(),
                        )),
                    })
                    .collect(),
            ),
        };
        Self {
            name: spec.name.clone(),
            source_sets,
        }
    }
}

impl Facet for SnapshotFacet {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_source_set_container(&self) -> Option<&dyn SourceSetContainer> {
        self.source_sets
            .as_ref()
            .map(|_| self as &dyn SourceSetContainer)
    }
}

impl SourceSetContainer for SnapshotFacet {
    fn source_sets(&self) -> std::result::Result<Vec<SourceSet>, BuildFailure> {
        self.source_sets.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}
