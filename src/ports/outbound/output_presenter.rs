use crate::shared::Result;

/// OutputPresenter port for presenting a rendered response
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered response to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered response
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
