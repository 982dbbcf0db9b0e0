//! Component and measure views
//!
//! Field names mirror the messages of the measures web services.

use serde::Serialize;

/// View representation of a component and its measures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub id: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_key: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display qualifier, which may differ from the stored one for copies
    pub qualifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<String>,
    pub measures: Vec<MeasureView>,
}

/// View representation of one measure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureView {
    pub metric: String,
    /// Owning component key, set in flat measure lists only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodValueView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_value: Option<bool>,
}

/// Variation of a measure on the leak period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodValueView {
    pub index: u8,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_value: Option<bool>,
}
