use build_model::ports::outbound::{
    LenientResolution, ResolvedArtifact, SourceSet, SourcesRequest, UnresolvedDependency,
};
use build_model::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn key(notation: &str) -> ArtifactKey {
    ArtifactKey::parse(notation).unwrap()
}

/// Mock Configuration with a fixed resolution outcome
#[derive(Clone, Default)]
pub struct MockConfiguration {
    pub name: String,
    pub resolvable: bool,
    pub declared: Vec<ArtifactKey>,
    pub artifacts: Vec<ResolvedArtifact>,
    pub unresolved: Vec<UnresolvedDependency>,
    pub failure: Option<BuildFailure>,
}

#[allow(dead_code)]
impl MockConfiguration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resolvable: true,
            ..Self::default()
        }
    }

    /// Declared and resolved
    pub fn declares(mut self, notation: &str) -> Self {
        self.declared.push(key(notation));
        self.pulls(notation)
    }

    /// Resolved through another dependency
    pub fn pulls(mut self, notation: &str) -> Self {
        let key = key(notation);
        let file = format!("/cache/{}/{}-{}.jar", key.group(), key.artifact(), key.version());
        self.artifacts.push(ResolvedArtifact::new(key, file));
        self
    }

    pub fn misses(mut self, notation: &str, message: &str) -> Self {
        self.declared.push(key(notation));
        self.unresolved
            .push(UnresolvedDependency::new(key(notation), BuildFailure::new(message)));
        self
    }

    pub fn fails(mut self, failure: BuildFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

impl Configuration for MockConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_resolvable(&self) -> bool {
        self.resolvable
    }

    fn declared_dependencies(&self) -> Vec<ArtifactKey> {
        self.declared.clone()
    }

    fn resolve_lenient(&self) -> std::result::Result<LenientResolution, BuildFailure> {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(LenientResolution::new(
                self.artifacts.clone(),
                self.unresolved.clone(),
            )),
        }
    }
}

/// Mock Facet; `source_sets: None` means the facet carries no sources
#[derive(Clone, Default)]
pub struct MockFacet {
    pub name: String,
    pub source_sets: Option<Vec<SourceSet>>,
    pub failure: Option<BuildFailure>,
}

#[allow(dead_code)]
impl MockFacet {
    pub fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// A `java` facet with a `main` source set rooted at `dir`
    pub fn java(dir: &str) -> Self {
        Self {
            name: "java".to_string(),
            source_sets: Some(vec![SourceSet::new(
                "main",
                vec![
                    format!("{}/src/main/java", dir),
                    format!("{}/src/main/resources", dir),
                ],
                vec![
                    format!("{}/build/classes/java/main", dir),
                    format!("{}/build/resources/main", dir),
                ],
            )]),
            failure: None,
        }
    }
}

impl Facet for MockFacet {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_source_set_container(&self) -> Option<&dyn SourceSetContainer> {
        if self.source_sets.is_some() || self.failure.is_some() {
            Some(self as &dyn SourceSetContainer)
        } else {
            None
        }
    }
}

impl SourceSetContainer for MockFacet {
    fn source_sets(&self) -> std::result::Result<Vec<SourceSet>, BuildFailure> {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.source_sets.clone().unwrap_or_default()),
        }
    }
}

/// Mock BuildModule; every listing can be made to fail
#[derive(Clone, Default)]
pub struct MockModule {
    pub name: String,
    pub path: String,
    pub group: String,
    pub children: Vec<MockModule>,
    pub tasks: Vec<String>,
    pub configurations: Vec<MockConfiguration>,
    pub facets: Vec<MockFacet>,
    /// Published sources per key; keys not listed publish none
    pub sources: HashMap<ArtifactKey, String>,
    pub tasks_failure: Option<BuildFailure>,
    pub configurations_failure: Option<BuildFailure>,
    pub facets_failure: Option<BuildFailure>,
}

#[allow(dead_code)]
impl MockModule {
    pub fn root(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: ":".to_string(),
            group: name.to_string(),
            ..Self::default()
        }
    }

    /// A child of the root; the group is set by `with_child`
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, mut child: MockModule) -> Self {
        child.path = if self.path == ":" {
            format!(":{}", child.name)
        } else {
            format!("{}:{}", self.path, child.name)
        };
        if child.group.is_empty() {
            child.group = self.group.clone();
        }
        child.reparent();
        self.children.push(child);
        self
    }

    fn reparent(&mut self) {
        let path = self.path.clone();
        let group = self.group.clone();
        for child in &mut self.children {
            child.path = format!("{}:{}", path, child.name);
            if child.group.is_empty() {
                child.group = group.clone();
            }
            child.reparent();
        }
    }

    pub fn with_tasks(mut self, tasks: &[&str]) -> Self {
        self.tasks = tasks.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_configuration(mut self, configuration: MockConfiguration) -> Self {
        self.configurations.push(configuration);
        self
    }

    pub fn with_facet(mut self, facet: MockFacet) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn with_sources(mut self, notation: &str, file: &str) -> Self {
        self.sources.insert(key(notation), file.to_string());
        self
    }
}

impl BuildModule for MockModule {
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
        match &self.configurations_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self
                .configurations
                .iter()
                .map(|c| c as &dyn Configuration)
                .collect()),
        }
    }

    fn facets(&self) -> std::result::Result<Vec<&dyn Facet>, BuildFailure> {
        match &self.facets_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.facets.iter().map(|f| f as &dyn Facet).collect()),
        }
    }

    fn resolve_sources(
        &self,
        request: &SourcesRequest,
    ) -> std::result::Result<LenientResolution, BuildFailure> {
        let artifacts = request
            .keys
            .iter()
            .filter_map(|key| {
                self.sources.get(key).map(|file| {
                    ResolvedArtifact::new(key.clone(), file.clone())
                        .with_classifier(request.classifier.clone())
                })
            })
            .collect();
        Ok(LenientResolution::new(artifacts, Vec::new()))
    }
}

/// Mock BuildTree around a MockModule root
#[derive(Clone)]
pub struct MockBuildTree {
    pub root: MockModule,
    pub build_file: PathBuf,
}

#[allow(dead_code)]
impl MockBuildTree {
    pub fn new(root: MockModule) -> Self {
        Self {
            root,
            build_file: PathBuf::from("/work/build.gradle"),
        }
    }
}

impl BuildTree for MockBuildTree {
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
