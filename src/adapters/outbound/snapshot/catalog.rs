use super::schema::{ArtifactSpec, ModuleSpec};
use crate::ports::outbound::{LenientResolution, ResolvedArtifact, SourcesRequest, UnresolvedDependency};
use crate::project_model::domain::{ArtifactKey, BuildFailure, UNSPECIFIED_VERSION};
use crate::shared::error::BuildModelError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet, VecDeque};

const PROJECT_PREFIX: &str = "project:";

/// Module path of `name` under `parent`; the root (no parent) is `:`
pub(super) fn module_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        None => ":".to_string(),
        Some(":") => format!(":{}", name),
        Some(parent) => format!("{}:{}", parent, name),
    }
}

/// A declared dependency: an external module or another module of the build
///
/// A project reference is either a module name (`project:core`) or a
/// module path (`project::app:core`). Names must be unique in the tree to
/// be usable; paths always are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    External(ArtifactKey),
    Project(String),
}

impl Notation {
    pub fn parse(notation: &str) -> Result<Self> {
        match notation.strip_prefix(PROJECT_PREFIX) {
            Some(module) if !module.trim().is_empty() => Ok(Notation::Project(module.trim().to_string())),
            Some(_) => Err(BuildModelError::Validation {
                message: format!("project notation '{}' names no module", notation),
            }
            .into()),
            None => Ok(Notation::External(ArtifactKey::parse(notation)?)),
        }
    }
}

#[derive(Debug, Clone)]
struct RepositoryEntry {
    file: String,
    sources: Option<String>,
    jmod: Option<String>,
    dependencies: Vec<Notation>,
    failure: Option<BuildFailure>,
}

/// Everything resolution needs to know about the recorded build:
/// the repository and the declared dependencies of every module
#[derive(Debug, Default)]
pub struct Catalog {
    root_group: String,
    repository: HashMap<ArtifactKey, RepositoryEntry>,
    /// (module path, configuration name) -> declared notations
    declarations: HashMap<(String, String), Vec<Notation>>,
    /// module name -> paths of every module with that name
    modules: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn build(root: &ModuleSpec, root_group: &str, repository: &[ArtifactSpec]) -> Result<Self> {
        let mut catalog = Catalog {
            root_group: root_group.to_string(),
            ..Catalog::default()
        };

        for spec in repository {
            let key = ArtifactKey::parse(&spec.coordinates)?;
            let dependencies = spec
                .dependencies
                .iter()
                .map(|n| Notation::parse(n))
                .collect::<Result<Vec<_>>>()?;
            let entry = RepositoryEntry {
                file: spec.file.clone(),
                sources: spec.sources.clone(),
                jmod: spec.jmod.clone(),
                dependencies,
                failure: spec.failure.as_ref().map(|f| f.to_failure()),
            };
            if catalog.repository.insert(key.clone(), entry).is_some() {
                return Err(BuildModelError::Validation {
                    message: format!("repository lists {} more than once", key),
                }
                .into());
            }
        }

        catalog.register_module(root, None)?;
        Ok(catalog)
    }

    fn register_module(&mut self, module: &ModuleSpec, parent: Option<&str>) -> Result<()> {
        let path = module_path(parent, &module.name);
        self.modules
            .entry(module.name.clone())
            .or_default()
            .push(path.clone());
        for configuration in &module.configurations {
            let notations = configuration
                .dependencies
                .iter()
                .map(|n| Notation::parse(n))
                .collect::<Result<Vec<_>>>()?;
            self.declarations
                .insert((path.clone(), configuration.name.clone()), notations);
        }
        for child in &module.children {
            self.register_module(child, Some(path.as_str()))?;
        }
        Ok(())
    }

    pub fn root_group(&self) -> &str {
        &self.root_group
    }

    /// Key a project notation resolves to; the artifact is the module name
    pub fn project_key(&self, module: &str) -> ArtifactKey {
        let name = module.rsplit(':').next().unwrap_or(module);
        ArtifactKey::new(&self.root_group, name, UNSPECIFIED_VERSION)
    }

    /// Path of the module a project reference points at
    fn locate_project(&self, reference: &str) -> std::result::Result<&str, BuildFailure> {
        if reference.starts_with(':') {
            return self
                .modules
                .values()
                .flatten()
                .find(|path| path.as_str() == reference)
                .map(String::as_str)
                .ok_or_else(|| {
                    BuildFailure::new(format!(
                        "Project with path '{}' could not be found.",
                        reference
                    ))
                });
        }
        match self.modules.get(reference).map(Vec::as_slice) {
            Some([path]) => Ok(path.as_str()),
            Some(paths) if !paths.is_empty() => Err(BuildFailure::new(format!(
                "Project name '{}' is ambiguous in this build: {}. Reference the module by path.",
                reference,
                paths.join(", ")
            ))),
            _ => Err(BuildFailure::new(format!(
                "Project with name '{}' could not be found.",
                reference
            ))),
        }
    }

    pub fn declared_key(&self, notation: &Notation) -> ArtifactKey {
        match notation {
            Notation::External(key) => key.clone(),
            Notation::Project(module) => self.project_key(module),
        }
    }

    /// Resolves `declared` breadth-first over the repository
    ///
    /// Project notations continue into the same-named configuration of the
    /// referenced module. Nothing fails as a whole; misses are listed as
    /// unresolved.
    pub fn resolve(&self, configuration: &str, declared: &[Notation]) -> LenientResolution {
        let mut resolution = LenientResolution::default();
        let mut visited: HashSet<&Notation> = HashSet::new();
        let mut queue: VecDeque<&Notation> = declared.iter().collect();

        while let Some(notation) = queue.pop_front() {
            if !visited.insert(notation) {
                continue;
            }

            match notation {
                Notation::Project(module) => {
                    let key = self.project_key(module);
                    let path = match self.locate_project(module) {
                        Ok(path) => path,
                        Err(problem) => {
                            resolution
                                .unresolved
                                .push(UnresolvedDependency::new(key, problem));
                            continue;
                        }
                    };
                    resolution.artifacts.push(ResolvedArtifact::new(key, ""));
                    if let Some(next) = self
                        .declarations
                        .get(&(path.to_string(), configuration.to_string()))
                    {
                        queue.extend(next.iter());
                    }
                }
                Notation::External(key) => match self.repository.get(key) {
                    None => resolution.unresolved.push(UnresolvedDependency::new(
                        key.clone(),
                        BuildFailure::new(format!("Could not find {}.", key)),
                    )),
                    Some(entry) => match &entry.failure {
                        Some(failure) => resolution.unresolved.push(UnresolvedDependency::new(
                            key.clone(),
                            BuildFailure::new(format!("Could not resolve {}.", key))
                                .caused_by(failure.clone()),
                        )),
                        None => {
                            resolution.artifacts.push(
                                ResolvedArtifact::new(key.clone(), entry.file.clone())
                                    .with_jmod(entry.jmod.clone()),
                            );
                            queue.extend(entry.dependencies.iter());
                        }
                    },
                },
            }
        }

        resolution
    }

    /// Looks up the sources artifact of every requested key
    pub fn resolve_sources(&self, request: &SourcesRequest) -> LenientResolution {
        let mut resolution = LenientResolution::default();
        for key in &request.keys {
            match self.repository.get(key) {
                None => resolution.unresolved.push(UnresolvedDependency::new(
                    key.clone(),
                    BuildFailure::new(format!(
                        "Could not find {}.",
                        key.with_classifier(&request.classifier)
                    )),
                )),
                Some(entry) => {
                    if let Some(sources) = &entry.sources {
                        resolution.artifacts.push(
                            ResolvedArtifact::new(key.clone(), sources.clone())
                                .with_classifier(request.classifier.clone()),
                        );
                    }
                }
            }
        }
        resolution
    }
}
