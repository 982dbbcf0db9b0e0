use super::metric::MetricId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a measure in a response comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureOrigin {
    /// Loaded from the measure store
    #[default]
    Persisted,
    /// Materialized because storage omits values equal to the best value
    BestValue,
    /// Absolute value of a short-lived branch reused for a `new_` metric
    BranchRemap,
}

/// Value of one metric for one component
///
/// Only the first comparison period is carried, as `variation`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measure {
    value: Option<f64>,
    variation: Option<f64>,
    data: Option<String>,
    origin: MeasureOrigin,
}

impl Measure {
    /// Creates a persisted measure; NaN values are treated as absent
    pub fn new(value: Option<f64>, variation: Option<f64>, data: Option<String>) -> Self {
        Self {
            value: value.filter(|v| !v.is_nan()),
            variation: variation.filter(|v| !v.is_nan()),
            data,
            origin: MeasureOrigin::Persisted,
        }
    }

    pub fn with_value(value: f64) -> Self {
        Self::new(Some(value), None, None)
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Self::new(None, None, Some(data.into()))
    }

    pub(crate) fn synthesized(
        value: Option<f64>,
        variation: Option<f64>,
        origin: MeasureOrigin,
    ) -> Self {
        Self {
            value,
            variation,
            data: None,
            origin,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn variation(&self) -> Option<f64> {
        self.variation
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn origin(&self) -> MeasureOrigin {
        self.origin
    }

    /// True when an absolute value or a data payload is set
    pub fn has_value_or_data(&self) -> bool {
        self.value.is_some() || self.data.is_some()
    }

    pub fn has_variation(&self) -> bool {
        self.variation.is_some()
    }
}

/// Live measure row as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMeasure {
    pub component_uuid: Uuid,
    pub metric_key: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub variation: Option<f64>,
    #[serde(default)]
    pub data: Option<String>,
}

impl StoredMeasure {
    pub fn to_measure(&self) -> Measure {
        Measure::new(self.value, self.variation, self.data.clone())
    }
}

/// Historical measure row, attached to one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPastMeasure {
    pub analysis_uuid: Uuid,
    pub component_uuid: Uuid,
    pub metric_key: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub variation: Option<f64>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Measure of a component at a given past analysis
#[derive(Debug, Clone, PartialEq)]
pub struct PastMeasure {
    pub analysis_uuid: Uuid,
    pub metric_id: MetricId,
    pub measure: Measure,
}
