/// Data Transfer Objects for application layer
///
/// Each request DTO is built by one validating factory from the raw
/// request parameters, so a use case never sees a partially valid request.
mod additional_field;
mod component_param;
mod component_request;
mod component_tree_request;
mod output_format;
mod page_request;
mod request_limits;
mod request_params;
mod search_history_request;
mod search_request;

pub use additional_field::{AdditionalField, ADDITIONAL_FIELDS_PARAM};
pub use component_request::ComponentRequest;
pub use component_tree_request::{ComponentTreeRequest, MetricSortFilter};
pub use output_format::OutputFormat;
pub use page_request::PageRequest;
pub use request_limits::RequestLimits;
pub use request_params::RequestParams;
pub use search_history_request::SearchHistoryRequest;
pub use search_request::SearchRequest;
