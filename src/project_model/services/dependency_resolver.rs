use super::phase::{check_depth, PhaseOutput};
use super::DiagnosticExtractor;
use crate::ports::outbound::{BuildModule, Configuration, SourcesRequest};
use crate::project_model::domain::{
    ArtifactKey, BuildFailure, Dependency, DependencyMap, Diagnostic,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Keys each module contributed, by module path
type Contributions = BTreeMap<String, BTreeSet<ArtifactKey>>;

/// DependencyResolver service - resolved external dependencies of a module tree
///
/// Resolution runs in two passes. The first resolves every resolvable
/// configuration leniently and records each artifact with its scope and
/// declaring module; artifacts whose group is the root identity belong to
/// the build itself and are skipped. The second pass probes the collected
/// keys for sources artifacts, one batch per module.
///
/// Resolution problems never abort the phase: each becomes a diagnostic.
/// Only a failure to enumerate a module's configurations (or an excessively
/// deep tree) fails the phase.
pub struct DependencyResolver<'a> {
    extractor: &'a DiagnosticExtractor,
    root_identity: &'a str,
    resolve_sources: bool,
}

impl<'a> DependencyResolver<'a> {
    /// # Arguments
    /// * `extractor` - Turns resolution failures into diagnostics
    /// * `root_identity` - Group of the build's own modules
    pub fn new(extractor: &'a DiagnosticExtractor, root_identity: &'a str) -> Self {
        Self {
            extractor,
            root_identity,
            resolve_sources: true,
        }
    }

    pub fn with_sources(mut self, enabled: bool) -> Self {
        self.resolve_sources = enabled;
        self
    }

    /// Resolves the dependencies of the whole subtree rooted at `root`
    pub fn resolve(&self, root: &dyn BuildModule) -> Result<PhaseOutput<DependencyMap>, BuildFailure> {
        let mut contributions = Contributions::new();
        let mut output = self.resolve_module(root, 0, &mut contributions)?;

        if self.resolve_sources {
            let mut probed = BTreeSet::new();
            let diagnostics =
                self.attach_sources(root, &contributions, &mut output.value, &mut probed);
            output.diagnostics.extend(diagnostics);
        }

        tracing::debug!(
            dependencies = output.value.len(),
            diagnostics = output.diagnostics.len(),
            "resolved dependencies"
        );
        Ok(output)
    }

    fn resolve_module(
        &self,
        module: &dyn BuildModule,
        depth: usize,
        contributions: &mut Contributions,
    ) -> Result<PhaseOutput<DependencyMap>, BuildFailure> {
        check_depth(module, depth)?;

        let mut output = PhaseOutput::<DependencyMap>::default();
        for child in module.children() {
            output.absorb(
                self.resolve_module(child, depth + 1, contributions)?,
                DependencyMap::merge,
            );
        }

        for configuration in module.configurations()? {
            if !configuration.is_resolvable() {
                tracing::trace!(
                    module = module.path(),
                    configuration = configuration.name(),
                    "skipping unresolvable configuration"
                );
                continue;
            }
            let resolved = self.resolve_configuration(module, configuration);
            contributions
                .entry(module.path().to_string())
                .or_default()
                .extend(resolved.value.keys().cloned());
            output.absorb(resolved, DependencyMap::merge);
        }

        Ok(output)
    }

    /// Resolves a single configuration of `module`
    ///
    /// Dependencies not declared directly by the configuration are marked
    /// transitive. A failed resolution yields an empty map and one diagnostic.
    pub fn resolve_configuration(
        &self,
        module: &dyn BuildModule,
        configuration: &dyn Configuration,
    ) -> PhaseOutput<DependencyMap> {
        let resolution = match configuration.resolve_lenient() {
            Ok(resolution) => resolution,
            Err(failure) => {
                tracing::warn!(
                    module = module.path(),
                    configuration = configuration.name(),
                    "configuration could not be resolved: {}",
                    failure
                );
                let annotation = format!(
                    "Could not resolve configuration '{}' of module '{}'",
                    configuration.name(),
                    module.name()
                );
                return PhaseOutput::with_diagnostics(
                    DependencyMap::new(),
                    vec![self.extractor.extract_annotated(&failure, Some(&annotation))],
                );
            }
        };

        let declared: HashSet<ArtifactKey> =
            configuration.declared_dependencies().into_iter().collect();

        let mut dependencies = DependencyMap::new();
        for artifact in resolution.artifacts {
            if artifact.key.group() == self.root_identity {
                continue;
            }
            let transitive = !declared.contains(&artifact.key);
            dependencies.insert(
                Dependency::new(artifact.key, artifact.file, transitive)
                    .with_jmod(artifact.jmod)
                    .with_scope(configuration.name())
                    .with_module(module.name()),
            );
        }

        let diagnostics = resolution
            .unresolved
            .iter()
            .map(|unresolved| {
                let annotation = format!(
                    "Unresolved dependency {} in configuration '{}' of {}:{}",
                    unresolved.selector,
                    configuration.name(),
                    module.group(),
                    module.name()
                );
                self.extractor
                    .extract_annotated(&unresolved.problem, Some(&annotation))
            })
            .collect();

        PhaseOutput::with_diagnostics(dependencies, diagnostics)
    }

    /// Sources pass, children before parents
    ///
    /// Each key is probed once, by the first module (in post-order) whose
    /// own configurations contributed it. Keys of a completed batch that
    /// were not reported unresolved are marked resolved.
    fn attach_sources(
        &self,
        module: &dyn BuildModule,
        contributions: &Contributions,
        dependencies: &mut DependencyMap,
        probed: &mut BTreeSet<ArtifactKey>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for child in module.children() {
            diagnostics.extend(self.attach_sources(child, contributions, dependencies, probed));
        }

        let keys: Vec<ArtifactKey> = contributions
            .get(module.path())
            .into_iter()
            .flatten()
            .filter(|key| !probed.contains(*key))
            .cloned()
            .collect();
        if keys.is_empty() {
            return diagnostics;
        }
        probed.extend(keys.iter().cloned());

        let request = SourcesRequest::new(module.name(), keys);
        let resolution = match module.resolve_sources(&request) {
            Ok(resolution) => resolution,
            Err(failure) => {
                tracing::warn!(module = module.path(), "sources request failed: {}", failure);
                let annotation = format!("Could not resolve sources for module '{}'", module.name());
                diagnostics.push(self.extractor.extract_annotated(&failure, Some(&annotation)));
                return diagnostics;
            }
        };

        for artifact in &resolution.artifacts {
            if !artifact.has_classifier(&request.classifier) {
                continue;
            }
            if let Some(dependency) = dependencies.get_mut(&artifact.key) {
                dependency.set_source_file_name(artifact.file.clone());
            }
        }

        let unresolved: HashSet<&ArtifactKey> =
            resolution.unresolved.iter().map(|u| &u.selector).collect();
        for key in &request.keys {
            if unresolved.contains(key) {
                continue;
            }
            if let Some(dependency) = dependencies.get_mut(key) {
                dependency.mark_resolved();
            }
        }

        for problem in &resolution.unresolved {
            if problem.selector.group() == module.group() {
                continue;
            }
            let annotation = format!(
                "Unresolved sources for {} in module '{}'",
                problem.selector,
                module.name()
            );
            diagnostics.push(
                self.extractor
                    .extract_annotated(&problem.problem, Some(&annotation)),
            );
        }

        diagnostics
    }
}
