//! Builder mapping assembled domain objects onto response views
//!
//! Everything read here was validated upstream, so the mapping cannot fail.

use super::component_view::{ComponentView, MeasureView, PeriodValueView};
use super::metric_view::{MetricView, PeriodView};
use crate::measures::domain::{
    BranchSelector, Component, Measure, MeasureTable, Metric, Period, Qualifier, ValueType,
    LEAK_PERIOD_INDEX,
};
use crate::measures::policies::BestValueSynthesizer;

/// Date layout of the web service messages
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// ResponseBuilder - Pure mapping from domain objects to views
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Builds the view of a component carrying the given measures
    ///
    /// # Arguments
    /// * `component` - Component to render
    /// * `reference` - Component a copy stands for, if any
    /// * `selector` - Branch designation echoed back to the caller
    /// * `metrics` - Metrics to render, in output order
    /// * `measures` - Measures of the request
    pub fn component(
        component: &Component,
        reference: Option<&Component>,
        selector: &BranchSelector,
        metrics: &[Metric],
        measures: &MeasureTable,
    ) -> ComponentView {
        let measure_views = metrics
            .iter()
            .filter_map(|metric| {
                measures
                    .get(component.uuid, metric.id)
                    .map(|measure| Self::measure(metric, measure))
            })
            .collect();

        ComponentView {
            id: component.uuid.to_string(),
            key: component.key.clone(),
            ref_id: reference.map(|r| r.uuid.to_string()),
            ref_key: reference.map(|r| r.key.clone()),
            name: component.name.clone(),
            description: component.description.clone(),
            qualifier: Self::display_qualifier(component, reference).code().to_string(),
            path: component.path.clone(),
            language: component.language.clone(),
            branch: selector.branch().map(str::to_string),
            pull_request: selector.pull_request().map(str::to_string),
            measures: measure_views,
        }
    }

    /// A sub-view standing for an application is shown as an application
    pub fn display_qualifier(component: &Component, reference: Option<&Component>) -> Qualifier {
        match (component.qualifier, reference.map(|r| r.qualifier)) {
            (Qualifier::SubView, Some(Qualifier::Application)) => Qualifier::Application,
            (qualifier, _) => qualifier,
        }
    }

    pub fn measure(metric: &Metric, measure: &Measure) -> MeasureView {
        let value = Self::measure_value(metric, measure);
        let best_value = measure
            .value()
            .and_then(|v| BestValueSynthesizer::is_best_value(metric, Some(v)));
        let period = measure.variation().map(|variation| PeriodValueView {
            index: LEAK_PERIOD_INDEX,
            value: Self::format_value(metric, variation),
            best_value: if metric.is_on_new_code() {
                BestValueSynthesizer::is_best_value(metric, Some(variation))
            } else {
                None
            },
        });

        MeasureView {
            metric: metric.key.clone(),
            component: None,
            value,
            period,
            best_value,
        }
    }

    /// Absolute value of a measure as text: formatted number or data payload
    pub fn measure_value(metric: &Metric, measure: &Measure) -> Option<String> {
        match measure.value() {
            Some(value) if metric.value_type.is_numeric() || measure.data().is_none() => {
                Some(Self::format_value(metric, value))
            }
            _ => measure.data().map(str::to_string),
        }
    }

    /// Formats a numeric value according to the metric's value type
    pub fn format_value(metric: &Metric, value: f64) -> String {
        match metric.value_type {
            ValueType::Bool => (value == 1.0).to_string(),
            t if t.is_integral() => format!("{}", value.trunc() as i64),
            _ => format!("{:?}", value),
        }
    }

    pub fn metric(metric: &Metric) -> MetricView {
        MetricView {
            key: metric.key.clone(),
            name: metric.name.clone(),
            description: metric.description.clone(),
            domain: metric.domain.clone(),
            value_type: metric.value_type.name().to_string(),
            higher_values_are_better: metric.direction.higher_values_better(),
            qualitative: metric.qualitative,
            hidden: metric.hidden,
            decimal_scale: metric.decimal_scale,
            best_value: metric.best_value.map(|v| Self::format_value(metric, v)),
            worst_value: metric.worst_value.map(|v| Self::format_value(metric, v)),
        }
    }

    /// Metric views sorted by key
    pub fn metrics(metrics: &[Metric]) -> Vec<MetricView> {
        let mut views: Vec<MetricView> = metrics.iter().map(Self::metric).collect();
        views.sort_by(|a, b| a.key.cmp(&b.key));
        views
    }

    pub fn period(period: &Period) -> PeriodView {
        PeriodView {
            index: period.index(),
            mode: period.mode.clone(),
            date: period.date.map(|d| d.format(DATE_TIME_FORMAT).to_string()),
            parameter: period.parameter.clone(),
        }
    }
}
