use super::phase::{check_depth, PhaseOutput};
use super::DiagnosticExtractor;
use crate::ports::outbound::{BuildModule, SourceSet};
use crate::project_model::domain::{BuildFailure, SourceDirectory, SourceDirectorySet, SourcePath};
use crate::project_model::policies::KindTagPolicy;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Shape of the emitted source layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathLayout {
    /// One entry per source directory, paired with an output directory by kind tag
    #[default]
    Paired,
    /// One entry per source set, listing all of its directories
    Grouped,
}

impl FromStr for PathLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paired" => Ok(PathLayout::Paired),
            "grouped" => Ok(PathLayout::Grouped),
            _ => Err(format!(
                "Invalid layout: {}. Valid values are: paired, grouped",
                s
            )),
        }
    }
}

impl fmt::Display for PathLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLayout::Paired => write!(f, "paired"),
            PathLayout::Grouped => write!(f, "grouped"),
        }
    }
}

/// SourceLayoutCollector service - source directories of a module tree
///
/// Only facets exposing source sets contribute. A facet whose source sets
/// cannot be read yields a diagnostic; the remaining facets and modules are
/// still collected.
pub struct SourceLayoutCollector<'a> {
    policy: &'a KindTagPolicy,
    extractor: &'a DiagnosticExtractor,
    source: &'a str,
    layout: PathLayout,
}

impl<'a> SourceLayoutCollector<'a> {
    /// # Arguments
    /// * `policy` - Kind tags used to pair source and output directories
    /// * `extractor` - Turns facet failures into diagnostics
    /// * `source` - Label stamped on every emitted path
    pub fn new(policy: &'a KindTagPolicy, extractor: &'a DiagnosticExtractor, source: &'a str) -> Self {
        Self {
            policy,
            extractor,
            source,
            layout: PathLayout::Paired,
        }
    }

    pub fn with_layout(mut self, layout: PathLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn collect(&self, root: &dyn BuildModule) -> Result<PhaseOutput<BTreeSet<SourcePath>>, BuildFailure> {
        self.collect_module(root, 0)
    }

    fn collect_module(
        &self,
        module: &dyn BuildModule,
        depth: usize,
    ) -> Result<PhaseOutput<BTreeSet<SourcePath>>, BuildFailure> {
        check_depth(module, depth)?;

        let mut output = PhaseOutput::<BTreeSet<SourcePath>>::default();
        for child in module.children() {
            output.absorb(self.collect_module(child, depth + 1)?, |paths, more| {
                paths.extend(more)
            });
        }

        for facet in module.facets()? {
            let Some(container) = facet.as_source_set_container() else {
                tracing::trace!(module = module.path(), facet = facet.name(), "facet has no source sets");
                continue;
            };

            match container.source_sets() {
                Ok(source_sets) => {
                    for source_set in &source_sets {
                        output.value.extend(self.layout_source_set(module.name(), source_set));
                    }
                }
                Err(failure) => {
                    tracing::warn!(
                        module = module.path(),
                        facet = facet.name(),
                        "source sets could not be read: {}",
                        failure
                    );
                    let annotation = format!(
                        "Could not read source sets of '{}' in module '{}'",
                        facet.name(),
                        module.name()
                    );
                    output
                        .diagnostics
                        .push(self.extractor.extract_annotated(&failure, Some(&annotation)));
                }
            }
        }

        Ok(output)
    }

    /// Emits the paths of one source set in the configured layout
    pub fn layout_source_set(&self, module: &str, source_set: &SourceSet) -> Vec<SourcePath> {
        match self.layout {
            PathLayout::Paired => self.pair_directories(module, source_set),
            PathLayout::Grouped => vec![SourcePath::DirectorySet(SourceDirectorySet {
                source: self.source.to_string(),
                name: source_set.name.clone(),
                module: module.to_string(),
                source_dirs: source_set.source_dirs.iter().cloned().collect(),
                output_dirs: source_set.output_dirs.iter().cloned().collect(),
            })],
        }
    }

    /// Pairs each source directory with the output directory of the same kind
    ///
    /// When several output directories share a tag, the first one listed wins.
    /// A source directory without a matching output gets an empty output path.
    pub fn pair_directories(&self, module: &str, source_set: &SourceSet) -> Vec<SourcePath> {
        let mut output_by_kind: HashMap<&str, &str> = HashMap::new();
        for output_dir in &source_set.output_dirs {
            output_by_kind
                .entry(self.policy.infer(output_dir))
                .or_insert(output_dir.as_str());
        }

        source_set
            .source_dirs
            .iter()
            .map(|source_dir| {
                let kind = self.policy.infer(source_dir);
                SourcePath::Directory(SourceDirectory {
                    source: self.source.to_string(),
                    name: source_set.name.clone(),
                    module: module.to_string(),
                    source_dir: source_dir.clone(),
                    output_dir: output_by_kind.get(kind).copied().unwrap_or("").to_string(),
                    kind: kind.to_string(),
                })
            })
            .collect()
    }
}
