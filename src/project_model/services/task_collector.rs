use super::phase::check_depth;
use crate::ports::outbound::BuildModule;
use crate::project_model::domain::{BuildFailure, TaskId};
use std::collections::BTreeSet;

/// TaskCollector service - runnable task identifiers of a module subtree
///
/// Every task is offered under its qualified id (`:app:build`). Tasks of
/// non-root modules are also offered under their bare name so that a
/// single `build` entry can run the task across all modules.
pub struct TaskCollector;

impl TaskCollector {
    /// Collects the tasks of the whole tree rooted at `root`
    pub fn collect_tree(root: &dyn BuildModule) -> Result<BTreeSet<TaskId>, BuildFailure> {
        Self::collect(root, "")
    }

    /// Collects the tasks of `module` and its descendants
    ///
    /// # Arguments
    /// * `module` - Subtree root
    /// * `prefix` - Qualifier of `module` (`""` for the tree root, `:app` below it)
    ///
    /// # Errors
    /// Propagates the first failure to enumerate a module's tasks
    pub fn collect(module: &dyn BuildModule, prefix: &str) -> Result<BTreeSet<TaskId>, BuildFailure> {
        Self::collect_at_depth(module, prefix, 0)
    }

    fn collect_at_depth(
        module: &dyn BuildModule,
        prefix: &str,
        depth: usize,
    ) -> Result<BTreeSet<TaskId>, BuildFailure> {
        check_depth(module, depth)?;

        let mut tasks = BTreeSet::new();
        for child in module.children() {
            let child_prefix = format!("{}:{}", prefix, child.name());
            tasks.extend(Self::collect_at_depth(child, &child_prefix, depth + 1)?);
        }

        let names = module.task_names()?;
        tracing::trace!(module = module.path(), count = names.len(), "collected tasks");
        for name in &names {
            tasks.insert(TaskId::qualified(prefix, name));
            if !prefix.is_empty() {
                tasks.insert(TaskId::bare(name));
            }
        }

        Ok(tasks)
    }
}
