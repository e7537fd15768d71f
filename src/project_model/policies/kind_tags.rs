use crate::shared::error::BuildModelError;
use crate::shared::Result;

/// Default kind tags: primary language, secondary language, generated sources, resources
pub const DEFAULT_KIND_TAGS: [&str; 4] = ["java", "kotlin", "generated", "resources"];

/// KindTagPolicy for classifying source and output directories
///
/// A directory's kind tag is the first tag of the ordered list that occurs
/// as a substring of its path. Source directories are paired with the output
/// directory carrying the same tag.
///
/// Order matters: with the default list a generated Java directory such as
/// `build/generated/sources/annotationProcessor/java/main` is tagged `java`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTagPolicy {
    tags: Vec<String>,
}

impl KindTagPolicy {
    /// Creates a policy from an ordered tag list
    ///
    /// # Errors
    /// Returns an error if the list is empty or contains a blank tag
    pub fn new(tags: Vec<String>) -> Result<Self> {
        if tags.is_empty() {
            return Err(BuildModelError::Validation {
                message: "kind tag list must not be empty".to_string(),
            }
            .into());
        }
        if let Some(index) = tags.iter().position(|t| t.trim().is_empty()) {
            return Err(BuildModelError::Validation {
                message: format!("kind tag at position {} is blank", index),
            }
            .into());
        }
        Ok(Self { tags })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the first tag contained in `path`, or `""` when none matches
    pub fn infer<'a>(&'a self, path: &str) -> &'a str {
        self.tags
            .iter()
            .find(|tag| path.contains(tag.as_str()))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Default for KindTagPolicy {
    fn default() -> Self {
        Self {
            tags: DEFAULT_KIND_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
