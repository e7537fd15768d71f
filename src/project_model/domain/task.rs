use std::fmt;

/// TaskId - identifier of a runnable unit
///
/// Qualified ids start with `:` and carry the module path
/// (`:app:build`); bare ids are the leaf name alone (`build`) and may be
/// offered by several modules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Builds `prefix:name`, where `prefix` is the `:a:b` qualifier of the
    /// declaring module (empty for the root).
    pub fn qualified(prefix: &str, name: &str) -> Self {
        Self(format!("{}:{}", prefix, name))
    }

    pub fn bare(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn is_qualified(&self) -> bool {
        self.0.starts_with(':')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
