use crate::measures::domain::{Component, MeasureTable, Metric, ValueType};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One key of the compound component tree ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Path,
    Qualifier,
    /// Absolute value of the sort metric
    Metric,
    /// Leak period variation of the sort metric
    MetricPeriod,
}

impl SortField {
    pub const VALUES: [&'static str; 5] = ["name", "path", "qualifier", "metric", "metricPeriod"];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Path => "path",
            SortField::Qualifier => "qualifier",
            SortField::Metric => "metric",
            SortField::MetricPeriod => "metricPeriod",
        }
    }

    pub fn uses_metric(self) -> bool {
        matches!(self, SortField::Metric | SortField::MetricPeriod)
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "path" => Ok(SortField::Path),
            "qualifier" => Ok(SortField::Qualifier),
            "metric" => Ok(SortField::Metric),
            "metricPeriod" => Ok(SortField::MetricPeriod),
            other => Err(format!(
                "Value of parameter 's' ({}) must be one of: [{}]",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key extracted from a component, compared within one field only
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// ComponentTreeSort - Compound, stable ordering of tree components
///
/// Each field after the first breaks ties left by the previous ones.
/// Missing values sort last whatever the direction, and the direction
/// applies to the whole compound key.
pub struct ComponentTreeSort<'a> {
    fields: &'a [SortField],
    asc: bool,
    metric: Option<&'a Metric>,
    measures: &'a MeasureTable,
}

impl<'a> ComponentTreeSort<'a> {
    /// # Arguments
    /// * `fields` - Ordered sort fields
    /// * `asc` - Direction of the whole compound key
    /// * `metric` - Sort metric, required by the metric based fields
    /// * `measures` - Measures of the components being sorted
    pub fn new(
        fields: &'a [SortField],
        asc: bool,
        metric: Option<&'a Metric>,
        measures: &'a MeasureTable,
    ) -> Self {
        Self {
            fields,
            asc,
            metric,
            measures,
        }
    }

    pub fn sort(&self, mut components: Vec<Component>) -> Vec<Component> {
        components.sort_by(|a, b| self.compare(a, b));
        components
    }

    fn compare(&self, a: &Component, b: &Component) -> Ordering {
        self.fields
            .iter()
            .map(|field| self.compare_field(*field, a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    fn compare_field(&self, field: SortField, a: &Component, b: &Component) -> Ordering {
        match (self.value_of(field, a), self.value_of(field, b)) {
            (Some(x), Some(y)) => {
                let ordering = x.compare(&y);
                if self.asc {
                    ordering
                } else {
                    ordering.reverse()
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn value_of(&self, field: SortField, component: &Component) -> Option<SortValue> {
        match field {
            SortField::Name => Some(SortValue::Text(component.name.to_lowercase())),
            SortField::Path => component
                .path
                .as_ref()
                .map(|p| SortValue::Text(p.to_lowercase())),
            SortField::Qualifier => Some(SortValue::Text(
                component.qualifier.code().to_lowercase(),
            )),
            SortField::Metric => self.metric_value(component),
            SortField::MetricPeriod => self.metric_variation(component),
        }
    }

    fn metric_value(&self, component: &Component) -> Option<SortValue> {
        let metric = self.metric?;
        let measure = self.measures.get(component.uuid, metric.id)?;
        match metric.value_type {
            ValueType::Level => measure.data().and_then(level_rank).map(SortValue::Number),
            t if t.is_numeric() => measure.value().map(SortValue::Number),
            _ => measure.data().map(|d| SortValue::Text(d.to_lowercase())),
        }
    }

    fn metric_variation(&self, component: &Component) -> Option<SortValue> {
        let metric = self.metric?;
        self.measures
            .get(component.uuid, metric.id)?
            .variation()
            .map(SortValue::Number)
    }
}

/// Quality gate levels, from best to worst
fn level_rank(level: &str) -> Option<f64> {
    match level {
        "OK" => Some(0.0),
        "WARN" => Some(1.0),
        "ERROR" => Some(2.0),
        _ => None,
    }
}
