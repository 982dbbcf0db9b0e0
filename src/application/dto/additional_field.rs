use crate::shared::{MeasuresError, Result};
use std::str::FromStr;

pub const ADDITIONAL_FIELDS_PARAM: &str = "additionalFields";

/// Optional blocks embedded in a response on request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalField {
    Metrics,
    Periods,
}

impl AdditionalField {
    pub const VALUES: [&'static str; 2] = ["metrics", "periods"];

    /// Reads the `additionalFields` parameter
    pub fn parse_list(values: Option<Vec<String>>) -> Result<Vec<AdditionalField>> {
        values
            .unwrap_or_default()
            .iter()
            .map(|value| value.parse::<AdditionalField>())
            .collect()
    }
}

impl FromStr for AdditionalField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "metrics" => Ok(AdditionalField::Metrics),
            // "period" is the historical spelling
            "periods" | "period" => Ok(AdditionalField::Periods),
            other => Err(MeasuresError::bad_request(format!(
                "Value of parameter '{}' ({}) must be one of: [{}]",
                ADDITIONAL_FIELDS_PARAM,
                other,
                Self::VALUES.join(", ")
            ))
            .into()),
        }
    }
}
