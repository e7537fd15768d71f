use std::fmt;

/// Diagnostic value object - one failure encountered during extraction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    file: String,
    line: u32,
    message: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for one-line summaries
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Lines after the headline: the cause chain and any annotation
    pub fn details(&self) -> impl Iterator<Item = &str> {
        self.message.lines().skip(1)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.headline())
    }
}
