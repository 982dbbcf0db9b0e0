use super::component::ComponentUuid;
use super::period::Period;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Processed,
    Unprocessed,
}

/// A snapshot of a branch root taken by one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub uuid: Uuid,
    pub component_uuid: ComponentUuid,
    pub created_at: DateTime<Utc>,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub period: Option<Period>,
}

impl Analysis {
    pub fn is_processed(&self) -> bool {
        self.status == AnalysisStatus::Processed
    }
}

/// Inclusive creation date range used to select analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl AnalysisRange {
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| *date >= from) && self.to.is_none_or(|to| *date <= to)
    }
}
