use crate::project_model::domain::{BuildFailure, Diagnostic};
use once_cell::sync::Lazy;
use regex::Regex;

/// Location shape the build tool embeds in messages,
/// e.g. `Build file '/w/app/build.gradle' line: 12`
static MESSAGE_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'([^']+)'\s?line:\s?([0-9]+)").expect("location pattern is a valid regex")
});

/// DiagnosticExtractor service - flattens a failure chain into a Diagnostic
///
/// Every cause contributes its message, outermost first. The location comes
/// from the innermost cause that carries one, either explicitly or in the
/// location-aware message form. Without any, the diagnostic points at the
/// build descriptor, line 0.
#[derive(Debug, Clone)]
pub struct DiagnosticExtractor {
    default_file: String,
}

impl DiagnosticExtractor {
    /// # Arguments
    /// * `default_file` - Path of the build descriptor, used when no cause is located
    pub fn new(default_file: impl Into<String>) -> Self {
        Self {
            default_file: default_file.into(),
        }
    }

    pub fn default_file(&self) -> &str {
        &self.default_file
    }

    pub fn extract(&self, failure: &BuildFailure) -> Diagnostic {
        self.extract_annotated(failure, None)
    }

    /// Like `extract`, appending `annotation` after the whole chain
    pub fn extract_annotated(&self, failure: &BuildFailure, annotation: Option<&str>) -> Diagnostic {
        let mut lines: Vec<&str> = Vec::with_capacity(failure.depth() + 1);
        let mut location: Option<(String, u32)> = None;

        for cause in failure.chain() {
            lines.push(cause.message());
            if let Some(candidate) = Self::locate(cause) {
                location = Some(candidate);
            }
        }

        if let Some(annotation) = annotation.filter(|a| !a.is_empty()) {
            lines.push(annotation);
        }

        let (file, line) = location.unwrap_or_else(|| (self.default_file.clone(), 0));
        Diagnostic::new(file, line, lines.join("\n"))
    }

    fn locate(cause: &BuildFailure) -> Option<(String, u32)> {
        if let Some(location) = cause.location().filter(|l| !l.file().is_empty()) {
            return Some((location.file().to_string(), location.line()));
        }

        let captures = MESSAGE_LOCATION.captures(cause.message())?;
        let file = captures.get(1)?.as_str();
        let line = captures.get(2)?.as_str().parse::<u32>().ok()?;
        Some((file.to_string(), line))
    }
}
