use crate::application::read_models::WsResponse;
use crate::ports::outbound::ResponseFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering responses as pretty-printed JSON
///
/// Field names are the camelCase names of the web service messages; absent
/// optional fields are omitted rather than written as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatter for JsonFormatter {
    fn format(&self, response: &WsResponse) -> Result<String> {
        let mut json = serde_json::to_string_pretty(response)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        ComponentResponse, ComponentView, HistoryMeasureView, HistoryValueView, MeasureView,
        PeriodValueView, SearchHistoryResponse,
    };
    use crate::measures::services::Paging;
    use serde_json::Value;

    fn component_view() -> ComponentView {
        ComponentView {
            id: "c1".to_string(),
            key: "my_project:src/Main.java".to_string(),
            ref_id: None,
            ref_key: None,
            name: "Main.java".to_string(),
            description: None,
            qualifier: "FIL".to_string(),
            path: Some("src/Main.java".to_string()),
            language: Some("java".to_string()),
            branch: None,
            pull_request: None,
            measures: vec![MeasureView {
                metric: "new_violations".to_string(),
                component: None,
                value: None,
                period: Some(PeriodValueView {
                    index: 1,
                    value: "0".to_string(),
                    best_value: Some(true),
                }),
                best_value: None,
            }],
        }
    }

    #[test]
    fn test_component_response_shape() {
        let response = WsResponse::Component(ComponentResponse {
            component: component_view(),
            metrics: None,
            period: None,
        });

        let output = JsonFormatter::new().format(&response).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["component"]["key"], "my_project:src/Main.java");
        assert_eq!(json["component"]["qualifier"], "FIL");
        assert_eq!(json["component"]["measures"][0]["period"]["value"], "0");
        assert_eq!(json["component"]["measures"][0]["period"]["bestValue"], true);
        assert!(json["component"]["measures"][0].get("value").is_none());
        assert!(json["component"].get("refKey").is_none());
        assert!(json.get("metrics").is_none());
        assert!(json.get("period").is_none());
    }

    #[test]
    fn test_history_response_shape() {
        let response = WsResponse::SearchHistory(SearchHistoryResponse {
            paging: Paging::new(1, 100, 1),
            measures: vec![HistoryMeasureView {
                metric: "ncloc".to_string(),
                history: vec![HistoryValueView {
                    date: "2024-01-01T10:00:00+0000".to_string(),
                    value: Some("42".to_string()),
                }],
            }],
        });

        let output = JsonFormatter::new().format(&response).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["paging"]["pageIndex"], 1);
        assert_eq!(json["paging"]["pageSize"], 100);
        assert_eq!(json["paging"]["total"], 1);
        assert_eq!(json["measures"][0]["history"][0]["value"], "42");
        assert!(output.ends_with('\n'));
    }
}
