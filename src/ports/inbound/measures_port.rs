use crate::application::dto::RequestParams;
use crate::application::read_models::WsResponse;
use crate::shared::Result;

/// MeasuresPort - Inbound port for the measures web services
///
/// This port defines the interface that external adapters (CLI, HTTP
/// bridge, etc.) use to call an action with raw request parameters.
pub trait MeasuresPort {
    /// Runs one action of the measures web services
    ///
    /// # Arguments
    /// * `action` - Action name (`component`, `component_tree`, ...)
    /// * `params` - Raw request parameters
    ///
    /// # Returns
    /// The complete response of the action
    ///
    /// # Errors
    /// Returns an error if:
    /// - The action is unknown or has been removed
    /// - The parameters are invalid
    /// - A component or metric cannot be found
    /// - The underlying stores cannot be queried
    fn handle(&self, action: &str, params: &RequestParams) -> Result<WsResponse>;
}
