use super::phase::{Phase, PhaseOutput};
use super::{
    DependencyResolver, DiagnosticExtractor, PathLayout, SourceLayoutCollector, TaskCollector,
};
use crate::ports::outbound::{BuildModule, BuildTree};
use crate::project_model::domain::{
    BuildFailure, DependencyMap, DependencySource, Diagnostic, ProjectModel, SourcePath, TaskId,
};
use crate::project_model::policies::KindTagPolicy;
use std::collections::BTreeSet;

/// Options shaping one extraction run
#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    pub kind_tags: KindTagPolicy,
    pub layout: PathLayout,
    pub resolve_sources: bool,
    /// Run the three phases on separate threads
    pub parallel: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            kind_tags: KindTagPolicy::default(),
            layout: PathLayout::Paired,
            resolve_sources: true,
            parallel: false,
        }
    }
}

type PhaseResult<T> = Result<PhaseOutput<T>, BuildFailure>;

/// ModelAggregator service - builds the complete ProjectModel of a build tree
///
/// Tasks, dependencies and source layout are collected independently. A
/// phase that fails contributes an empty collection and one diagnostic; the
/// other phases are unaffected. Diagnostics are ordered by phase (tasks,
/// dependencies, source layout) whether or not the phases run in parallel.
pub struct ModelAggregator {
    options: AggregatorOptions,
}

impl ModelAggregator {
    pub fn new(options: AggregatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    /// Builds the model. Never fails: every problem ends up in `diagnostics`.
    pub fn build(&self, tree: &dyn BuildTree) -> ProjectModel {
        let build_file = tree.build_file().display().to_string();
        let extractor = DiagnosticExtractor::new(build_file.clone());
        let root = tree.root();
        let source = tree.tool_name();

        tracing::info!(
            build_file = %build_file,
            parallel = self.options.parallel,
            "building project model"
        );

        let (tasks, dependencies, paths) = if self.options.parallel {
            self.run_parallel(root, &extractor, source)
        } else {
            (
                self.collect_tasks(root),
                self.resolve_dependencies(root, &extractor),
                self.collect_layout(root, &extractor, source),
            )
        };

        let mut diagnostics = Vec::new();
        let tasks = Self::settle(Phase::Tasks, tasks, &extractor, &mut diagnostics);
        let dependencies = Self::settle(Phase::Dependencies, dependencies, &extractor, &mut diagnostics);
        let paths = Self::settle(Phase::SourceLayout, paths, &extractor, &mut diagnostics);

        let description = format!("{} {} ({})", source, tree.tool_version(), build_file);
        let dependency_source = DependencySource::new(source, description, dependencies);

        tracing::info!(
            tasks = tasks.len(),
            dependencies = dependency_source.dependencies().len(),
            paths = paths.len(),
            diagnostics = diagnostics.len(),
            "project model built"
        );

        ProjectModel::new(
            source.to_string(),
            vec![dependency_source],
            paths.into_iter().collect(),
            tasks,
            diagnostics,
        )
    }

    fn run_parallel(
        &self,
        root: &dyn BuildModule,
        extractor: &DiagnosticExtractor,
        source: &str,
    ) -> (
        PhaseResult<BTreeSet<TaskId>>,
        PhaseResult<DependencyMap>,
        PhaseResult<BTreeSet<SourcePath>>,
    ) {
        std::thread::scope(|scope| {
            let tasks = scope.spawn(|| self.collect_tasks(root));
            let dependencies = scope.spawn(|| self.resolve_dependencies(root, extractor));
            let paths = self.collect_layout(root, extractor, source);

            let tasks = tasks
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            let dependencies = dependencies
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (tasks, dependencies, paths)
        })
    }

    fn collect_tasks(&self, root: &dyn BuildModule) -> PhaseResult<BTreeSet<TaskId>> {
        TaskCollector::collect_tree(root).map(PhaseOutput::new)
    }

    fn resolve_dependencies(
        &self,
        root: &dyn BuildModule,
        extractor: &DiagnosticExtractor,
    ) -> PhaseResult<DependencyMap> {
        // root identity: project artifacts are published under the root's group
        DependencyResolver::new(extractor, root.group())
            .with_sources(self.options.resolve_sources)
            .resolve(root)
    }

    fn collect_layout(
        &self,
        root: &dyn BuildModule,
        extractor: &DiagnosticExtractor,
        source: &str,
    ) -> PhaseResult<BTreeSet<SourcePath>> {
        SourceLayoutCollector::new(&self.options.kind_tags, extractor, source)
            .with_layout(self.options.layout)
            .collect(root)
    }

    /// Unwraps a phase result, degrading a failed phase to an empty value
    fn settle<T: Default>(
        phase: Phase,
        result: PhaseResult<T>,
        extractor: &DiagnosticExtractor,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> T {
        match result {
            Ok(output) => {
                diagnostics.extend(output.diagnostics);
                output.value
            }
            Err(failure) => {
                tracing::warn!(phase = %phase, "phase failed: {}", failure);
                diagnostics.push(extractor.extract_annotated(&failure, Some(phase.annotation())));
                T::default()
            }
        }
    }
}

impl Default for ModelAggregator {
    fn default() -> Self {
        Self::new(AggregatorOptions::default())
    }
}
