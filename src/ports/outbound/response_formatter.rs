use crate::application::read_models::WsResponse;
use crate::shared::Result;

/// ResponseFormatter port for rendering web service responses
///
/// This port abstracts the output encoding (JSON, Markdown, etc.).
pub trait ResponseFormatter {
    /// Renders a response
    ///
    /// # Arguments
    /// * `response` - The response built by one of the measures actions
    ///
    /// # Returns
    /// The rendered response as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &WsResponse) -> Result<String>;
}
