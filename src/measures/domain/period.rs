use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only comparison period index still populated
pub const LEAK_PERIOD_INDEX: u8 = 1;

/// Comparison baseline attached to an analysis (the "new code" period)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub mode: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parameter: Option<String>,
}

impl Period {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            date: None,
            parameter: None,
        }
    }

    pub fn index(&self) -> u8 {
        LEAK_PERIOD_INDEX
    }
}
