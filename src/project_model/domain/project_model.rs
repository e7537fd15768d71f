use super::{Diagnostic, DependencySource, SourcePath, TaskId};
use std::collections::BTreeSet;

/// ProjectModel aggregate - the complete result of one extraction run
///
/// Built once by the aggregator and never mutated afterwards. A phase that
/// failed leaves its collection empty and adds to `diagnostics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModel {
    source: String,
    dependency_sources: Vec<DependencySource>,
    paths: Vec<SourcePath>,
    tasks: BTreeSet<TaskId>,
    diagnostics: Vec<Diagnostic>,
}

impl ProjectModel {
    pub fn new(
        source: String,
        dependency_sources: Vec<DependencySource>,
        paths: Vec<SourcePath>,
        tasks: BTreeSet<TaskId>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            source,
            dependency_sources,
            paths,
            tasks,
            diagnostics,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dependency_sources(&self) -> &[DependencySource] {
        &self.dependency_sources
    }

    pub fn paths(&self) -> &[SourcePath] {
        &self.paths
    }

    pub fn tasks(&self) -> &BTreeSet<TaskId> {
        &self.tasks
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when at least one phase or resolution step reported a problem
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_sources
            .iter()
            .map(|source| source.dependencies().len())
            .sum()
    }

    /// Tasks in picker order: bare names first, then qualified ones
    pub fn sorted_tasks(&self) -> Vec<&TaskId> {
        let (qualified, bare): (Vec<&TaskId>, Vec<&TaskId>) =
            self.tasks.iter().partition(|task| task.is_qualified());
        bare.into_iter().chain(qualified).collect()
    }
}
