use crate::shared::Result;
use std::fmt;

/// Maximum length of a single coordinate part (security limit)
const MAX_COORDINATE_LENGTH: usize = 255;

/// Version reported for intra-tree module artifacts that carry none
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// ArtifactKey - `(group, artifact, version)` identity of a resolved dependency
///
/// Two resolved artifacts with the same key are the same logical dependency,
/// whichever module or configuration pulled them in. Field order gives the
/// stable sort order used in the final model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactKey {
    group: String,
    artifact: String,
    version: String,
}

impl ArtifactKey {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parses `group:artifact:version` notation.
    ///
    /// A trailing classifier (`group:artifact:version:classifier`) is accepted
    /// and dropped; it does not take part in identity.
    pub fn parse(notation: &str) -> Result<Self> {
        let parts: Vec<&str> = notation.trim().split(':').collect();
        if parts.len() < 3 || parts.len() > 4 {
            anyhow::bail!(
                "Invalid dependency notation '{}': expected group:artifact:version",
                notation
            );
        }

        for (label, part) in [("group", parts[0]), ("artifact", parts[1]), ("version", parts[2])] {
            if part.is_empty() {
                anyhow::bail!("Invalid dependency notation '{}': empty {}", notation, label);
            }
            if part.len() > MAX_COORDINATE_LENGTH {
                anyhow::bail!(
                    "Invalid dependency notation: {} is too long ({} bytes). Maximum allowed: {} bytes",
                    label,
                    part.len(),
                    MAX_COORDINATE_LENGTH
                );
            }
            if part.chars().any(|c| c.is_whitespace()) {
                anyhow::bail!(
                    "Invalid dependency notation '{}': {} contains whitespace",
                    notation,
                    label
                );
            }
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Notation for requesting a classified artifact of this key
    pub fn with_classifier(&self, classifier: &str) -> String {
        format!("{}:{}", self, classifier)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
