use std::fmt;

/// Explicit location attached to a failure by the build tool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: String,
    line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// BuildFailure - a failure raised by the build-tool collaborator
///
/// Each link of the chain carries its own message and, optionally, the
/// location the build tool attributed to it. The outermost failure is the
/// head; `cause()` walks inward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFailure {
    message: String,
    location: Option<SourceLocation>,
    cause: Option<Box<BuildFailure>>,
}

impl BuildFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            cause: None,
        }
    }

    pub fn located(message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self::new(message).with_location(SourceLocation::new(file, line))
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Appends `cause` at the innermost end of this chain.
    pub fn caused_by(mut self, cause: BuildFailure) -> Self {
        match self.cause.take() {
            Some(existing) => self.cause = Some(Box::new(existing.caused_by(cause))),
            None => self.cause = Some(Box::new(cause)),
        }
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn cause(&self) -> Option<&BuildFailure> {
        self.cause.as_deref()
    }

    /// Iterates the chain from outermost to innermost
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    pub fn depth(&self) -> usize {
        self.chain().count()
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BuildFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Converts an arbitrary error chain, keeping a located `BuildFailure`
/// wherever one appears in it.
impl From<anyhow::Error> for BuildFailure {
    fn from(err: anyhow::Error) -> Self {
        let mut links: Vec<BuildFailure> = Vec::new();
        for cause in err.chain() {
            if let Some(failure) = cause.downcast_ref::<BuildFailure>() {
                // A BuildFailure already carries the rest of the chain itself
                links.push(failure.clone());
                break;
            }
            links.push(BuildFailure::new(cause.to_string()));
        }

        let mut links = links.into_iter().rev();
        let innermost = links
            .next()
            .unwrap_or_else(|| BuildFailure::new(err.to_string()));
        links.fold(innermost, |inner, mut outer| {
            outer.cause = Some(Box::new(inner));
            outer
        })
    }
}

/// Iterator over a failure chain
pub struct Chain<'a> {
    next: Option<&'a BuildFailure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a BuildFailure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
