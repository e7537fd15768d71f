//! In-memory build tree used by the service tests

use crate::ports::outbound::{
    BuildModule, BuildTree, Configuration, Facet, LenientResolution, ResolvedArtifact, SourceSet,
    SourceSetContainer, SourcesRequest, UnresolvedDependency,
};
use crate::project_model::domain::{ArtifactKey, BuildFailure};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub(crate) const BUILD_FILE: &str = "/w/build.gradle";

pub(crate) fn key(notation: &str) -> ArtifactKey {
    ArtifactKey::parse(notation).unwrap()
}

pub(crate) fn artifact(notation: &str) -> ResolvedArtifact {
    let key = key(notation);
    let file = format!("/repo/{}-{}.jar", key.artifact(), key.version());
    ResolvedArtifact::new(key, file)
}

pub(crate) struct FakeConfiguration {
    name: String,
    resolvable: bool,
    declared: Vec<ArtifactKey>,
    resolution: Result<LenientResolution, BuildFailure>,
}

impl FakeConfiguration {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resolvable: true,
            declared: Vec::new(),
            resolution: Ok(LenientResolution::default()),
        }
    }

    pub(crate) fn unresolvable(mut self) -> Self {
        self.resolvable = false;
        self
    }

    /// Declares `notation` directly and resolves it
    pub(crate) fn direct(mut self, notation: &str) -> Self {
        self.declared.push(key(notation));
        self.resolved(notation)
    }

    /// Resolves `notation` without declaring it
    pub(crate) fn resolved(mut self, notation: &str) -> Self {
        if let Ok(resolution) = self.resolution.as_mut() {
            resolution.artifacts.push(artifact(notation));
        }
        self
    }

    pub(crate) fn unresolved(mut self, notation: &str, message: &str) -> Self {
        self.declared.push(key(notation));
        if let Ok(resolution) = self.resolution.as_mut() {
            resolution
                .unresolved
                .push(UnresolvedDependency::new(key(notation), BuildFailure::new(message)));
        }
        self
    }

    pub(crate) fn failing(mut self, failure: BuildFailure) -> Self {
        self.resolution = Err(failure);
        self
    }
}

impl Configuration for FakeConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_resolvable(&self) -> bool {
        self.resolvable
    }

    fn declared_dependencies(&self) -> Vec<ArtifactKey> {
        self.declared.clone()
    }

    fn resolve_lenient(&self) -> Result<LenientResolution, BuildFailure> {
        self.resolution.clone()
    }
}

pub(crate) struct FakeFacet {
    name: String,
    source_sets: Option<Result<Vec<SourceSet>, BuildFailure>>,
}

impl FakeFacet {
    pub(crate) fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source_sets: None,
        }
    }

    pub(crate) fn with_source_sets(name: &str, sets: Vec<SourceSet>) -> Self {
        Self {
            name: name.to_string(),
            source_sets: Some(Ok(sets)),
        }
    }

    pub(crate) fn failing(name: &str, failure: BuildFailure) -> Self {
        Self {
            name: name.to_string(),
            source_sets: Some(Err(failure)),
        }
    }
}

impl Facet for FakeFacet {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_source_set_container(&self) -> Option<&dyn SourceSetContainer> {
        self.source_sets.as_ref().map(|_| self as &dyn SourceSetContainer)
    }
}

impl SourceSetContainer for FakeFacet {
    fn source_sets(&self) -> Result<Vec<SourceSet>, BuildFailure> {
        self.source_sets.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub(crate) struct FakeModule {
    name: String,
    path: String,
    group: String,
    children: Vec<FakeModule>,
    tasks: Result<Vec<String>, BuildFailure>,
    configurations: Result<Vec<FakeConfiguration>, BuildFailure>,
    facets: Result<Vec<FakeFacet>, BuildFailure>,
    sources: HashMap<ArtifactKey, Option<String>>,
    sources_failure: Option<BuildFailure>,
}

impl FakeModule {
    pub(crate) fn root(name: &str) -> Self {
        Self::new(name, ":", name)
    }

    pub(crate) fn new(name: &str, path: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            group: group.to_string(),
            children: Vec::new(),
            tasks: Ok(Vec::new()),
            configurations: Ok(Vec::new()),
            facets: Ok(Vec::new()),
            sources: HashMap::new(),
            sources_failure: None,
        }
    }

    pub(crate) fn child(mut self, child: FakeModule) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn tasks(mut self, names: &[&str]) -> Self {
        self.tasks = Ok(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub(crate) fn failing_tasks(mut self, failure: BuildFailure) -> Self {
        self.tasks = Err(failure);
        self
    }

    pub(crate) fn configuration(mut self, configuration: FakeConfiguration) -> Self {
        if let Ok(configurations) = self.configurations.as_mut() {
            configurations.push(configuration);
        }
        self
    }

    pub(crate) fn failing_configurations(mut self, failure: BuildFailure) -> Self {
        self.configurations = Err(failure);
        self
    }

    pub(crate) fn facet(mut self, facet: FakeFacet) -> Self {
        if let Ok(facets) = self.facets.as_mut() {
            facets.push(facet);
        }
        self
    }

    pub(crate) fn failing_facets(mut self, failure: BuildFailure) -> Self {
        self.facets = Err(failure);
        self
    }

    /// Registers the sources artifact of `notation`; `None` means the
    /// repository knows the module but publishes no sources.
    pub(crate) fn sources(mut self, notation: &str, file: Option<&str>) -> Self {
        self.sources.insert(key(notation), file.map(str::to_string));
        self
    }

    pub(crate) fn failing_sources(mut self, failure: BuildFailure) -> Self {
        self.sources_failure = Some(failure);
        self
    }
}

impl BuildModule for FakeModule {
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

    fn task_names(&self) -> Result<Vec<String>, BuildFailure> {
        self.tasks.clone()
    }

    fn configurations(&self) -> Result<Vec<&dyn Configuration>, BuildFailure> {
        match &self.configurations {
            Ok(configurations) => Ok(configurations
                .iter()
                .map(|c| c as &dyn Configuration)
                .collect()),
            Err(failure) => Err(failure.clone()),
        }
    }

    fn facets(&self) -> Result<Vec<&dyn Facet>, BuildFailure> {
        match &self.facets {
            Ok(facets) => Ok(facets.iter().map(|f| f as &dyn Facet).collect()),
            Err(failure) => Err(failure.clone()),
        }
    }

    fn resolve_sources(&self, request: &SourcesRequest) -> Result<LenientResolution, BuildFailure> {
        if let Some(failure) = &self.sources_failure {
            return Err(failure.clone());
        }

        let mut resolution = LenientResolution::default();
        for key in &request.keys {
            match self.sources.get(key) {
                Some(Some(file)) => resolution.artifacts.push(
                    ResolvedArtifact::new(key.clone(), file.clone())
                        .with_classifier(request.classifier.clone()),
                ),
                Some(None) => {}
                None => resolution.unresolved.push(UnresolvedDependency::new(
                    key.clone(),
                    BuildFailure::new(format!("Could not find {}", key.with_classifier("sources"))),
                )),
            }
        }
        Ok(resolution)
    }
}

pub(crate) struct FakeTree {
    root: FakeModule,
    build_file: PathBuf,
}

impl FakeTree {
    pub(crate) fn new(root: FakeModule) -> Self {
        Self {
            root,
            build_file: PathBuf::from(BUILD_FILE),
        }
    }
}

impl BuildTree for FakeTree {
    fn root(&self) -> &dyn BuildModule {
        &self.root
    }

    fn build_file(&self) -> &Path {
        &self.build_file
    }

    fn tool_name(&self) -> &str {
        "Gradle"
    }

    fn tool_version(&self) -> &str {
        "8.5"
    }
}
