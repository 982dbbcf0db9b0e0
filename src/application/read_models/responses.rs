//! Complete responses of the measures actions

use super::component_view::{ComponentView, MeasureView};
use super::metric_view::{MetricView, PeriodView};
use crate::measures::services::Paging;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResponse {
    pub component: ComponentView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTreeResponse {
    pub paging: Paging,
    pub base_component: ComponentView,
    pub components: Vec<ComponentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub measures: Vec<MeasureView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryResponse {
    pub paging: Paging,
    pub measures: Vec<HistoryMeasureView>,
}

/// Time series of one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMeasureView {
    pub metric: String,
    pub history: Vec<HistoryValueView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryValueView {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Response of any measures action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WsResponse {
    Component(ComponentResponse),
    ComponentTree(ComponentTreeResponse),
    Search(SearchResponse),
    SearchHistory(SearchHistoryResponse),
}

impl WsResponse {
    pub fn action(&self) -> &'static str {
        match self {
            WsResponse::Component(_) => "component",
            WsResponse::ComponentTree(_) => "component_tree",
            WsResponse::Search(_) => "search",
            WsResponse::SearchHistory(_) => "search_history",
        }
    }
}
