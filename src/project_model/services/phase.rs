use crate::ports::outbound::BuildModule;
use crate::project_model::domain::{BuildFailure, Diagnostic};
use std::fmt;

/// Maximum module nesting walked by any phase
///
/// Deeper trees fail the phase instead of exhausting the stack.
pub const MAX_MODULE_DEPTH: usize = 100;

/// The three independent collection phases of an extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Tasks,
    Dependencies,
    SourceLayout,
}

impl Phase {
    /// Annotation appended to the diagnostic of a failed phase
    pub fn annotation(&self) -> &'static str {
        match self {
            Phase::Tasks => "Failed to collect tasks",
            Phase::Dependencies => "Failed to resolve dependencies",
            Phase::SourceLayout => "Failed to collect source layout",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Tasks => write!(f, "tasks"),
            Phase::Dependencies => write!(f, "dependencies"),
            Phase::SourceLayout => write!(f, "source-layout"),
        }
    }
}

/// Result of a phase over one subtree: a value plus the diagnostics raised
/// while producing it, in occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseOutput<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> PhaseOutput<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Merges a child output into this one using `merge` for the values
    pub fn absorb(&mut self, child: PhaseOutput<T>, merge: impl FnOnce(&mut T, T)) {
        merge(&mut self.value, child.value);
        self.diagnostics.extend(child.diagnostics);
    }
}

/// Fails when `depth` exceeds `MAX_MODULE_DEPTH`
pub(crate) fn check_depth(module: &dyn BuildModule, depth: usize) -> Result<(), BuildFailure> {
    if depth > MAX_MODULE_DEPTH {
        return Err(BuildFailure::new(format!(
            "Module tree exceeds the maximum depth of {} at module '{}' ({})",
            MAX_MODULE_DEPTH,
            module.name(),
            module.path()
        )));
    }
    Ok(())
}
