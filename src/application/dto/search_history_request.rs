use super::component_param::component_ref;
use super::{PageRequest, RequestLimits, RequestParams};
use crate::measures::domain::AnalysisRange;
use crate::measures::services::ComponentRef;
use crate::shared::{check_request, MeasuresError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const METRICS_PARAM: &str = "metrics";
pub const FROM_PARAM: &str = "from";
pub const TO_PARAM: &str = "to";

/// Validated request of the `search_history` action
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHistoryRequest {
    pub component: ComponentRef,
    pub metrics: Vec<String>,
    pub range: AnalysisRange,
    pub page: PageRequest,
}

impl SearchHistoryRequest {
    /// Builds the request from raw parameters, or fails with a bad request
    pub fn from_params(params: &RequestParams, limits: &RequestLimits) -> Result<Self> {
        let component = component_ref(params, "component", None)?;
        let metrics = params.mandatory_param_as_strings(METRICS_PARAM)?;
        check_request(!metrics.is_empty(), || {
            format!("The '{}' parameter must contain at least one metric key", METRICS_PARAM)
        })?;
        let range = AnalysisRange {
            from: params.param(FROM_PARAM).map(parse_start).transpose()?,
            to: params.param(TO_PARAM).map(parse_end).transpose()?,
        };
        let page = PageRequest::from_params(
            params,
            limits.history_default_page_size,
            limits.history_max_page_size,
        )?;

        Ok(Self {
            component,
            metrics,
            range,
            page,
        })
    }
}

/// A date covers the day from its first instant
fn parse_start(value: &str) -> Result<DateTime<Utc>> {
    parse_date_or_date_time(value, NaiveTime::MIN)
}

/// A date covers the day up to its last instant
fn parse_end(value: &str) -> Result<DateTime<Utc>> {
    let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    parse_date_or_date_time(value, end_of_day)
}

fn parse_date_or_date_time(value: &str, time_for_date: NaiveTime) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(time_for_date).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|date_time| date_time.with_timezone(&Utc))
        .map_err(|_| {
            anyhow::Error::from(MeasuresError::bad_request(format!(
                "'{}' cannot be parsed as either a date or date+time",
                value
            )))
        })
}
