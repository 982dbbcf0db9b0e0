use serde::Serialize;

/// View representation of a metric definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub higher_values_are_better: Option<bool>,
    pub qualitative: bool,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_value: Option<String>,
}

/// View representation of the leak period of an analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodView {
    pub index: u8,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}
