use crate::shared::Result;

/// OutputPresenter port for delivering the rendered model
///
/// Implementations write to stdout or to a file.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
