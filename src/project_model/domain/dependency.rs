use super::ArtifactKey;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// Dependency entity - one logical dependency of the build tree
///
/// Keyed by its `ArtifactKey`. `scopes` and `modules` record every
/// configuration and module that pulled it in; `transitive` is false as soon
/// as any of them declared it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    key: ArtifactKey,
    file_name: String,
    source_file_name: Option<String>,
    jmod: Option<String>,
    scopes: BTreeSet<String>,
    modules: BTreeSet<String>,
    transitive: bool,
    resolved: bool,
}

impl Dependency {
    pub fn new(key: ArtifactKey, file_name: impl Into<String>, transitive: bool) -> Self {
        Self {
            key,
            file_name: file_name.into(),
            source_file_name: None,
            jmod: None,
            scopes: BTreeSet::new(),
            modules: BTreeSet::new(),
            transitive,
            resolved: false,
        }
    }

    pub fn with_jmod(mut self, jmod: Option<String>) -> Self {
        self.jmod = jmod;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.insert(scope.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.insert(module.into());
        self
    }

    pub fn key(&self) -> &ArtifactKey {
        &self.key
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_file_name(&self) -> Option<&str> {
        self.source_file_name.as_deref()
    }

    pub fn jmod(&self) -> Option<&str> {
        self.jmod.as_deref()
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn set_source_file_name(&mut self, path: impl Into<String>) {
        self.source_file_name = Some(path.into());
    }

    pub fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    /// Merges another occurrence of the same logical dependency.
    ///
    /// Scopes and modules are unioned and a direct occurrence wins over a
    /// transitive one. Paths already known are kept; missing ones are taken
    /// from `other`.
    pub fn merge(&mut self, other: Dependency) {
        debug_assert_eq!(self.key, other.key);

        self.scopes.extend(other.scopes);
        self.modules.extend(other.modules);
        self.transitive = self.transitive && other.transitive;
        self.resolved = self.resolved || other.resolved;

        if self.file_name.is_empty() {
            self.file_name = other.file_name;
        }
        if self.source_file_name.is_none() {
            self.source_file_name = other.source_file_name;
        }
        if self.jmod.is_none() {
            self.jmod = other.jmod;
        }
    }
}

/// DependencyMap - dependencies of a subtree indexed by `ArtifactKey`
///
/// Iteration is in key order, which is the order the final model lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: BTreeMap<ArtifactKey, Dependency>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a dependency, merging it into an existing entry with the same key
    pub fn insert(&mut self, dependency: Dependency) {
        match self.entries.entry(dependency.key().clone()) {
            btree_map::Entry::Occupied(mut existing) => existing.get_mut().merge(dependency),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(dependency);
            }
        }
    }

    /// Merges every entry of `other` into this map
    pub fn merge(&mut self, other: DependencyMap) {
        for dependency in other.entries.into_values() {
            self.insert(dependency);
        }
    }

    pub fn get(&self, key: &ArtifactKey) -> Option<&Dependency> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ArtifactKey) -> Option<&mut Dependency> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &ArtifactKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArtifactKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Dependency> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the map, returning dependencies sorted by key
    pub fn into_sorted_vec(self) -> Vec<Dependency> {
        self.entries.into_values().collect()
    }
}

impl FromIterator<Dependency> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut map = DependencyMap::new();
        for dependency in iter {
            map.insert(dependency);
        }
        map
    }
}

/// DependencySource - all dependencies of one extraction run under one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySource {
    name: String,
    description: String,
    dependencies: Vec<Dependency>,
}

impl DependencySource {
    pub fn new(name: impl Into<String>, description: impl Into<String>, dependencies: DependencyMap) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dependencies: dependencies.into_sorted_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn direct_count(&self) -> usize {
        self.dependencies.iter().filter(|d| !d.is_transitive()).count()
    }

    pub fn transitive_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.is_transitive()).count()
    }
}
