use crate::application::read_models::{
    ComponentResponse, ComponentTreeResponse, ComponentView, MeasureView, MetricView, PeriodView,
    SearchHistoryResponse, SearchResponse, WsResponse,
};
use crate::measures::services::Paging;
use crate::ports::outbound::ResponseFormatter;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Markdown table header for measures of one component
const MEASURE_TABLE_HEADER: &str = "| Metric | Value | New Code | Best Value |\n";

/// Markdown table separator line for measure tables
const MEASURE_TABLE_SEPARATOR: &str = "|--------|-------|----------|------------|\n";

const METRIC_TABLE_HEADER: &str = "| Key | Name | Type | Domain | Higher Is Better |\n";
const METRIC_TABLE_SEPARATOR: &str = "|-----|------|------|--------|------------------|\n";

/// MarkdownFormatter adapter rendering responses as human-readable tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Value shown for a measure in a compact cell: absolute value, else variation
    fn compact_value(measure: &MeasureView) -> String {
        measure
            .value
            .clone()
            .or_else(|| measure.period.as_ref().map(|p| p.value.clone()))
            .map(|v| Self::escape_markdown_table_cell(&v))
            .unwrap_or_default()
    }

    fn flag(value: Option<bool>) -> &'static str {
        match value {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_component_header(&self, output: &mut String, component: &ComponentView) {
        output.push_str(&format!(
            "- **Key**: `{}`\n- **Name**: {}\n- **Qualifier**: {}\n",
            component.key,
            Self::escape_markdown_table_cell(&component.name),
            component.qualifier
        ));
        if let Some(path) = &component.path {
            output.push_str(&format!("- **Path**: {}\n", path));
        }
        if let Some(reference) = &component.ref_key {
            output.push_str(&format!("- **Reference**: `{}`\n", reference));
        }
        if let Some(branch) = &component.branch {
            output.push_str(&format!("- **Branch**: {}\n", branch));
        }
        if let Some(pull_request) = &component.pull_request {
            output.push_str(&format!("- **Pull Request**: {}\n", pull_request));
        }
        output.push('\n');
    }

    fn render_measures(&self, output: &mut String, measures: &[MeasureView]) {
        if measures.is_empty() {
            output.push_str("*No measures.*\n\n");
            return;
        }
        output.push_str(MEASURE_TABLE_HEADER);
        output.push_str(MEASURE_TABLE_SEPARATOR);
        for measure in measures {
            let variation = measure
                .period
                .as_ref()
                .map(|p| Self::escape_markdown_table_cell(&p.value))
                .unwrap_or_default();
            let best_value = measure
                .best_value
                .or_else(|| measure.period.as_ref().and_then(|p| p.best_value));
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                measure.metric,
                measure
                    .value
                    .as_deref()
                    .map(Self::escape_markdown_table_cell)
                    .unwrap_or_default(),
                variation,
                Self::flag(best_value)
            ));
        }
        output.push('\n');
    }

    fn render_metrics(&self, output: &mut String, metrics: &[MetricView]) {
        output.push_str("## Metrics\n\n");
        output.push_str(METRIC_TABLE_HEADER);
        output.push_str(METRIC_TABLE_SEPARATOR);
        for metric in metrics {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                metric.key,
                Self::escape_markdown_table_cell(&metric.name),
                metric.value_type,
                metric
                    .domain
                    .as_deref()
                    .map(Self::escape_markdown_table_cell)
                    .unwrap_or_default(),
                Self::flag(metric.higher_values_are_better)
            ));
        }
        output.push('\n');
    }

    fn render_period(&self, output: &mut String, period: &PeriodView) {
        output.push_str("## New Code Period\n\n");
        output.push_str(&format!("- **Index**: {}\n- **Mode**: {}\n", period.index, period.mode));
        if let Some(date) = &period.date {
            output.push_str(&format!("- **Date**: {}\n", date));
        }
        if let Some(parameter) = &period.parameter {
            output.push_str(&format!("- **Parameter**: {}\n", parameter));
        }
        output.push('\n');
    }

    fn render_paging(&self, output: &mut String, paging: &Paging, what: &str) {
        output.push_str(&format!(
            "Page {} (page size {}), {} {} in total.\n\n",
            paging.page_index, paging.page_size, paging.total, what
        ));
    }

    fn render_extras(
        &self,
        output: &mut String,
        metrics: Option<&[MetricView]>,
        period: Option<&PeriodView>,
    ) {
        if let Some(metrics) = metrics {
            self.render_metrics(output, metrics);
        }
        if let Some(period) = period {
            self.render_period(output, period);
        }
    }

    fn render_component(&self, output: &mut String, response: &ComponentResponse) {
        output.push_str("# Component Measures\n\n");
        self.render_component_header(output, &response.component);
        output.push_str("## Measures\n\n");
        self.render_measures(output, &response.component.measures);
        self.render_extras(output, response.metrics.as_deref(), response.period.as_ref());
    }

    /// One row per component, one column per metric present in the page
    fn render_component_tree(&self, output: &mut String, response: &ComponentTreeResponse) {
        output.push_str("# Component Tree Measures\n\n");
        self.render_component_header(output, &response.base_component);
        output.push_str("## Base Component Measures\n\n");
        self.render_measures(output, &response.base_component.measures);

        output.push_str("## Components\n\n");
        self.render_paging(output, &response.paging, "components");
        if response.components.is_empty() {
            output.push_str("*No components.*\n\n");
        } else {
            let columns: BTreeSet<&str> = response
                .components
                .iter()
                .flat_map(|c| c.measures.iter().map(|m| m.metric.as_str()))
                .collect();

            output.push_str("| Component | Qualifier | Path |");
            for column in &columns {
                output.push_str(&format!(" {} |", column));
            }
            output.push_str("\n|-----------|-----------|------|");
            for _ in &columns {
                output.push_str("---|");
            }
            output.push('\n');

            for component in &response.components {
                output.push_str(&format!(
                    "| {} | {} | {} |",
                    Self::escape_markdown_table_cell(&component.name),
                    component.qualifier,
                    component
                        .path
                        .as_deref()
                        .map(Self::escape_markdown_table_cell)
                        .unwrap_or_default()
                ));
                for column in &columns {
                    let cell = component
                        .measures
                        .iter()
                        .find(|m| m.metric == *column)
                        .map(Self::compact_value)
                        .unwrap_or_default();
                    output.push_str(&format!(" {} |", cell));
                }
                output.push('\n');
            }
            output.push('\n');
        }
        self.render_extras(output, response.metrics.as_deref(), response.period.as_ref());
    }

    fn render_search(&self, output: &mut String, response: &SearchResponse) {
        output.push_str("# Project Measures\n\n");
        if response.measures.is_empty() {
            output.push_str("*No measures.*\n");
            return;
        }
        output.push_str("| Metric | Component | Value | New Code | Best Value |\n");
        output.push_str("|--------|-----------|-------|----------|------------|\n");
        for measure in &response.measures {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                measure.metric,
                measure.component.as_deref().unwrap_or_default(),
                measure
                    .value
                    .as_deref()
                    .map(Self::escape_markdown_table_cell)
                    .unwrap_or_default(),
                measure
                    .period
                    .as_ref()
                    .map(|p| p.value.as_str())
                    .unwrap_or_default(),
                Self::flag(measure.best_value)
            ));
        }
    }

    fn render_search_history(&self, output: &mut String, response: &SearchHistoryResponse) {
        output.push_str("# Measure History\n\n");
        self.render_paging(output, &response.paging, "analyses");
        for series in &response.measures {
            output.push_str(&format!("## {}\n\n", series.metric));
            output.push_str("| Date | Value |\n|------|-------|\n");
            for entry in &series.history {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    entry.date,
                    entry
                        .value
                        .as_deref()
                        .map(Self::escape_markdown_table_cell)
                        .unwrap_or_default()
                ));
            }
            output.push('\n');
        }
    }
}

impl ResponseFormatter for MarkdownFormatter {
    fn format(&self, response: &WsResponse) -> Result<String> {
        let mut output = String::new();
        match response {
            WsResponse::Component(r) => self.render_component(&mut output, r),
            WsResponse::ComponentTree(r) => self.render_component_tree(&mut output, r),
            WsResponse::Search(r) => self.render_search(&mut output, r),
            WsResponse::SearchHistory(r) => self.render_search_history(&mut output, r),
        }
        Ok(output)
    }
}
