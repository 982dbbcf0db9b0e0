use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identity of a metric, stable for the lifetime of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricId(pub u32);

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value type of a metric, as registered by the analysis plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Int,
    Float,
    Percent,
    Bool,
    String,
    Millisec,
    Data,
    Level,
    Distrib,
    Rating,
    WorkDur,
}

impl ValueType {
    /// Name used on the wire and in error messages
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Int => "INT",
            ValueType::Float => "FLOAT",
            ValueType::Percent => "PERCENT",
            ValueType::Bool => "BOOL",
            ValueType::String => "STRING",
            ValueType::Millisec => "MILLISEC",
            ValueType::Data => "DATA",
            ValueType::Level => "LEVEL",
            ValueType::Distrib => "DISTRIB",
            ValueType::Rating => "RATING",
            ValueType::WorkDur => "WORK_DUR",
        }
    }

    /// Types whose measures live in the numeric value column
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueType::Int
                | ValueType::Float
                | ValueType::Percent
                | ValueType::Bool
                | ValueType::Millisec
                | ValueType::Rating
                | ValueType::WorkDur
        )
    }

    /// Types formatted without a fractional part
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            ValueType::Int | ValueType::Millisec | ValueType::Rating | ValueType::WorkDur
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether higher or lower values of a metric are considered better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
    #[default]
    Neutral,
}

impl Direction {
    /// `Some(true)` when higher values are better, `None` for neutral metrics
    pub fn higher_values_better(self) -> Option<bool> {
        match self {
            Direction::HigherIsBetter => Some(true),
            Direction::LowerIsBetter => Some(false),
            Direction::Neutral => None,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::HigherIsBetter),
            -1 => Ok(Direction::LowerIsBetter),
            0 => Ok(Direction::Neutral),
            other => Err(format!(
                "Invalid metric direction: {}. Expected -1, 0 or 1",
                other
            )),
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::HigherIsBetter => 1,
            Direction::LowerIsBetter => -1,
            Direction::Neutral => 0,
        }
    }
}

/// Metric definition, read-only for the duration of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: MetricId,
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    pub value_type: ValueType,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub qualitative: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub best_value: Option<f64>,
    #[serde(default)]
    pub worst_value: Option<f64>,
    #[serde(default)]
    pub optimized_best_value: bool,
    #[serde(default)]
    pub decimal_scale: Option<u32>,
}

impl Metric {
    /// Creates a metric with neutral direction and no best value
    pub fn new(id: u32, key: impl Into<String>, value_type: ValueType) -> Self {
        let key = key.into();
        Self {
            id: MetricId(id),
            name: key.clone(),
            key,
            description: None,
            domain: None,
            value_type,
            direction: Direction::Neutral,
            qualitative: false,
            hidden: false,
            best_value: None,
            worst_value: None,
            optimized_best_value: false,
            decimal_scale: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Registers a best value and enables the storage optimization on it
    pub fn with_optimized_best_value(mut self, best_value: f64) -> Self {
        self.best_value = Some(best_value);
        self.optimized_best_value = true;
        self
    }

    pub fn with_best_value(mut self, best_value: f64) -> Self {
        self.best_value = Some(best_value);
        self
    }

    /// True for metrics measured on new code (`new_` prefix, any case)
    pub fn is_on_new_code(&self) -> bool {
        is_new_code_key(&self.key)
    }

    /// True when storage omits measures equal to the best value
    pub fn is_optimized_for_best_value(&self) -> bool {
        self.optimized_best_value && self.best_value.is_some()
    }
}

/// Checks the `new_` prefix with an ASCII case-insensitive comparison
pub fn is_new_code_key(key: &str) -> bool {
    key.len() >= 4 && key.as_bytes()[..4].eq_ignore_ascii_case(b"new_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_classification() {
        assert!(ValueType::Int.is_numeric());
        assert!(ValueType::Rating.is_integral());
        assert!(!ValueType::Float.is_integral());
        assert!(!ValueType::Data.is_numeric());
        assert!(!ValueType::Level.is_numeric());
        assert_eq!(ValueType::WorkDur.name(), "WORK_DUR");
    }

    #[test]
    fn test_value_type_deserializes_from_wire_name() {
        let value_type: ValueType = serde_json::from_str("\"DISTRIB\"").unwrap();
        assert_eq!(value_type, ValueType::Distrib);
        let value_type: ValueType = serde_json::from_str("\"WORK_DUR\"").unwrap();
        assert_eq!(value_type, ValueType::WorkDur);
    }

    #[test]
    fn test_direction_from_i32() {
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::LowerIsBetter);
        assert_eq!(Direction::try_from(1).unwrap(), Direction::HigherIsBetter);
        assert_eq!(Direction::try_from(0).unwrap(), Direction::Neutral);
        assert!(Direction::try_from(2).is_err());
        assert_eq!(i32::from(Direction::LowerIsBetter), -1);
    }

    #[test]
    fn test_new_code_prefix_is_case_insensitive() {
        assert!(is_new_code_key("new_violations"));
        assert!(is_new_code_key("NEW_violations"));
        assert!(!is_new_code_key("violations_new"));
        assert!(!is_new_code_key("new"));
        assert!(!is_new_code_key("newer_violations"));
    }

    #[test]
    fn test_optimized_best_value_requires_a_best_value() {
        let metric = Metric::new(1, "complexity", ValueType::Int).with_optimized_best_value(0.0);
        assert!(metric.is_optimized_for_best_value());

        let mut flag_only = Metric::new(2, "ncloc", ValueType::Int);
        flag_only.optimized_best_value = true;
        assert!(!flag_only.is_optimized_for_best_value());
    }

    #[test]
    fn test_metric_deserializes_with_defaults() {
        let metric: Metric = serde_json::from_str(
            r#"{"id": 3, "key": "coverage", "valueType": "PERCENT", "direction": 1}"#,
        )
        .unwrap();
        assert_eq!(metric.id, MetricId(3));
        assert_eq!(metric.direction, Direction::HigherIsBetter);
        assert!(!metric.optimized_best_value);
        assert!(metric.best_value.is_none());
    }
}
