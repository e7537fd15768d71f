use crate::project_model::domain::{ArtifactKey, BuildFailure};
use std::path::Path;

/// Classifier requested by the sources pass
pub const SOURCES_CLASSIFIER: &str = "sources";

/// BuildTree port - one loaded build, as exposed by the build tool
///
/// The tree is fixed for the duration of an extraction run. Implementations
/// must be `Sync` so that independent phases may walk it from separate
/// threads.
pub trait BuildTree: Sync {
    /// Root module of the tree
    fn root(&self) -> &dyn BuildModule;

    /// Absolute path of the root build descriptor
    fn build_file(&self) -> &Path;

    /// Label of the producing build tool (e.g. "Gradle"), used as model source
    fn tool_name(&self) -> &str;

    /// Version string of the producing build tool
    fn tool_version(&self) -> &str;
}

/// BuildModule port - one node of the build tree
pub trait BuildModule: Sync {
    fn name(&self) -> &str;

    /// Path within the tree (`:` for the root, `:app:core` for nested modules)
    fn path(&self) -> &str;

    /// Group coordinate artifacts of this module are published under
    ///
    /// The root module's group is the root identity: resolved artifacts in
    /// that group are modules of this build and are left out of the model.
    fn group(&self) -> &str;

    /// Direct child modules, in declaration order
    fn children(&self) -> Vec<&dyn BuildModule>;

    /// Names of the tasks this module declares itself
    ///
    /// # Errors
    /// Returns the build tool's failure if the task container cannot be realised
    fn task_names(&self) -> Result<Vec<String>, BuildFailure>;

    /// Dependency configurations declared by this module
    fn configurations(&self) -> Result<Vec<&dyn Configuration>, BuildFailure>;

    /// Facets (plugins/conventions) attached to this module
    fn facets(&self) -> Result<Vec<&dyn Facet>, BuildFailure>;

    /// Resolves classified artifacts for a batch of keys, leniently
    ///
    /// # Errors
    /// Returns a failure only when the whole request could not be resolved;
    /// individual misses are reported in `LenientResolution::unresolved`.
    fn resolve_sources(&self, request: &SourcesRequest) -> Result<LenientResolution, BuildFailure>;
}

/// Configuration port - a named, independently resolvable dependency set
pub trait Configuration {
    fn name(&self) -> &str;

    fn is_resolvable(&self) -> bool;

    /// Directly declared entries (not the transitive closure)
    fn declared_dependencies(&self) -> Vec<ArtifactKey>;

    /// Resolves the full artifact set without failing on individual entries
    ///
    /// # Errors
    /// Returns a failure only when the configuration as a whole cannot be
    /// resolved (e.g. the repository is unreachable).
    fn resolve_lenient(&self) -> Result<LenientResolution, BuildFailure>;
}

/// Facet port - a plugin or convention attached to a module
pub trait Facet {
    fn name(&self) -> &str;

    /// Capability query: facets that do not carry source sets return `None`
    fn as_source_set_container(&self) -> Option<&dyn SourceSetContainer> {
        None
    }
}

/// Capability of a facet that declares source sets
pub trait SourceSetContainer {
    fn source_sets(&self) -> Result<Vec<SourceSet>, BuildFailure>;
}

/// A named group of source directories compiled to common outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub name: String,
    pub source_dirs: Vec<String>,
    pub output_dirs: Vec<String>,
}

impl SourceSet {
    pub fn new(name: impl Into<String>, source_dirs: Vec<String>, output_dirs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            source_dirs,
            output_dirs,
        }
    }
}

/// An artifact the build tool located
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub key: ArtifactKey,
    /// Absolute path of the resolved file
    pub file: String,
    pub classifier: Option<String>,
    /// Platform module name, for module-system dependencies
    pub jmod: Option<String>,
}

impl ResolvedArtifact {
    pub fn new(key: ArtifactKey, file: impl Into<String>) -> Self {
        Self {
            key,
            file: file.into(),
            classifier: None,
            jmod: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_jmod(mut self, jmod: Option<String>) -> Self {
        self.jmod = jmod;
        self
    }

    pub fn has_classifier(&self, classifier: &str) -> bool {
        self.classifier.as_deref() == Some(classifier)
    }
}

/// A requested module the build tool could not locate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDependency {
    pub selector: ArtifactKey,
    pub problem: BuildFailure,
}

impl UnresolvedDependency {
    pub fn new(selector: ArtifactKey, problem: BuildFailure) -> Self {
        Self { selector, problem }
    }
}

/// Outcome of a lenient resolution: what resolved, and what did not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientResolution {
    pub artifacts: Vec<ResolvedArtifact>,
    pub unresolved: Vec<UnresolvedDependency>,
}

impl LenientResolution {
    pub fn new(artifacts: Vec<ResolvedArtifact>, unresolved: Vec<UnresolvedDependency>) -> Self {
        Self {
            artifacts,
            unresolved,
        }
    }
}

/// Batch of dependency keys to probe for classified (sources) artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesRequest {
    pub module: String,
    pub classifier: String,
    pub keys: Vec<ArtifactKey>,
}

impl SourcesRequest {
    pub fn new(module: impl Into<String>, keys: Vec<ArtifactKey>) -> Self {
        Self {
            module: module.into(),
            classifier: SOURCES_CLASSIFIER.to_string(),
            keys,
        }
    }

    /// Request notations, one per key (`group:artifact:version:sources`)
    pub fn notations(&self) -> Vec<String> {
        self.keys
            .iter()
            .map(|key| key.with_classifier(&self.classifier))
            .collect()
    }
}
