//! Read models for CQRS-lite pattern
//!
//! This module contains the response views of the measures actions and
//! the builder mapping domain objects onto them.

pub mod component_view;
pub mod metric_view;
pub mod response_builder;
pub mod responses;

pub use component_view::{ComponentView, MeasureView, PeriodValueView};
pub use metric_view::{MetricView, PeriodView};
pub use response_builder::ResponseBuilder;
pub use responses::{
    ComponentResponse, ComponentTreeResponse, HistoryMeasureView, HistoryValueView,
    SearchHistoryResponse, SearchResponse, WsResponse,
};
