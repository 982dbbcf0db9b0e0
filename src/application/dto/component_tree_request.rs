use super::component_param::component_ref;
use super::component_request::METRIC_KEYS_PARAM;
use super::{AdditionalField, PageRequest, RequestLimits, RequestParams, ADDITIONAL_FIELDS_PARAM};
use crate::measures::domain::{Qualifier, Strategy, LEAK_PERIOD_INDEX};
use crate::measures::services::{ComponentRef, SortField};
use crate::shared::{check_request, MeasuresError, Result};
use std::str::FromStr;

pub const BASE_COMPONENT_PARAM: &str = "component";
pub const BASE_COMPONENT_ID_PARAM: &str = "baseComponentId";
pub const STRATEGY_PARAM: &str = "strategy";
pub const QUALIFIERS_PARAM: &str = "qualifiers";
pub const SORT_PARAM: &str = "s";
/// Long form of `s`, read when `s` is absent
pub const SORT_ALIAS_PARAM: &str = "sort";
pub const ASC_PARAM: &str = "asc";
pub const METRIC_SORT_PARAM: &str = "metricSort";
pub const METRIC_SORT_FILTER_PARAM: &str = "metricSortFilter";
pub const METRIC_PERIOD_SORT_PARAM: &str = "metricPeriodSort";
pub const QUERY_PARAM: &str = "q";

/// Minimum length of the name/key filter
pub const QUERY_MIN_LENGTH: usize = 3;

/// Whether the tree keeps components lacking the sort metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricSortFilter {
    #[default]
    All,
    WithMeasuresOnly,
}

impl FromStr for MetricSortFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(MetricSortFilter::All),
            "withMeasuresOnly" => Ok(MetricSortFilter::WithMeasuresOnly),
            other => Err(invalid_value(METRIC_SORT_FILTER_PARAM, other, &["all", "withMeasuresOnly"])),
        }
    }
}

/// Validated request of the `component_tree` action
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTreeRequest {
    pub component: ComponentRef,
    pub metric_keys: Vec<String>,
    pub strategy: Strategy,
    pub qualifiers: Option<Vec<Qualifier>>,
    pub additional_fields: Vec<AdditionalField>,
    pub sort: Vec<SortField>,
    pub asc: bool,
    pub metric_sort: Option<String>,
    pub metric_sort_filter: MetricSortFilter,
    pub metric_period_sort: Option<u8>,
    pub page: PageRequest,
    pub query: Option<String>,
}

impl ComponentTreeRequest {
    /// Builds the request from raw parameters, or fails with a bad request
    ///
    /// Validation runs entirely here, before any store is touched.
    pub fn from_params(params: &RequestParams, limits: &RequestLimits) -> Result<Self> {
        let metric_keys = params.mandatory_param_as_strings(METRIC_KEYS_PARAM)?;
        check_request(metric_keys.len() <= limits.max_metric_keys, || {
            format!(
                "Number of metrics keys is limited to {}, got {}",
                limits.max_metric_keys,
                metric_keys.len()
            )
        })?;

        let component = component_ref(params, BASE_COMPONENT_PARAM, Some(BASE_COMPONENT_ID_PARAM))?;
        let strategy = match params.param(STRATEGY_PARAM) {
            Some(value) => Strategy::from_str(value).map_err(MeasuresError::bad_request)?,
            None => Strategy::All,
        };
        let qualifiers = params
            .param_as_strings(QUALIFIERS_PARAM)
            .map(|values| parse_qualifiers(&values))
            .transpose()?;
        let additional_fields =
            AdditionalField::parse_list(params.param_as_strings(ADDITIONAL_FIELDS_PARAM))?;
        let sort = match params
            .param_as_strings(SORT_PARAM)
            .or_else(|| params.param_as_strings(SORT_ALIAS_PARAM))
        {
            Some(values) => values
                .iter()
                .map(|v| SortField::from_str(v).map_err(MeasuresError::bad_request))
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => vec![SortField::Name],
        };
        let asc = params.param_as_bool(ASC_PARAM)?.unwrap_or(true);
        let metric_sort = params.param(METRIC_SORT_PARAM).map(str::to_string);
        let metric_sort_filter = params
            .param(METRIC_SORT_FILTER_PARAM)
            .map(MetricSortFilter::from_str)
            .transpose()?
            .unwrap_or_default();
        let metric_period_sort = params
            .param_as_int(METRIC_PERIOD_SORT_PARAM)?
            .map(|index| {
                if index == i64::from(LEAK_PERIOD_INDEX) {
                    Ok(LEAK_PERIOD_INDEX)
                } else {
                    Err(invalid_value(METRIC_PERIOD_SORT_PARAM, &index.to_string(), &["1"]))
                }
            })
            .transpose()?;
        let page = PageRequest::from_params(params, limits.default_page_size, limits.max_page_size)?;
        let query = params.param(QUERY_PARAM).map(str::to_string);

        let request = Self {
            component,
            metric_keys,
            strategy,
            qualifiers,
            additional_fields,
            sort,
            asc,
            metric_sort,
            metric_sort_filter,
            metric_period_sort,
            page,
            query,
        };
        request.check_consistency()?;
        Ok(request)
    }

    fn check_consistency(&self) -> Result<()> {
        check_request(!self.metric_keys.is_empty(), || {
            format!(
                "The '{}' parameter must contain at least one metric key",
                METRIC_KEYS_PARAM
            )
        })?;
        if let Some(query) = &self.query {
            check_request(query.chars().count() >= QUERY_MIN_LENGTH, || {
                format!(
                    "The '{}' parameter must have at least {} characters",
                    QUERY_PARAM, QUERY_MIN_LENGTH
                )
            })?;
        }

        let sorts_by_metric = self.sort.iter().any(|f| f.uses_metric());
        check_request(self.metric_sort.is_some() == sorts_by_metric, || {
            format!(
                "To sort by a metric, the '{}' parameter must contain '{}' or '{}', and a metric key must be provided in the '{}' parameter",
                SORT_PARAM,
                SortField::Metric,
                SortField::MetricPeriod,
                METRIC_SORT_PARAM
            )
        })?;
        if let Some(metric_sort) = &self.metric_sort {
            check_request(self.metric_keys.contains(metric_sort), || {
                format!(
                    "To sort by the '{}' metric, it must be in the list of metric keys in the '{}' parameter",
                    metric_sort, METRIC_KEYS_PARAM
                )
            })?;
        }
        let sorts_by_period = self.sort.contains(&SortField::MetricPeriod);
        check_request(self.metric_period_sort.is_some() == sorts_by_period, || {
            format!(
                "To sort by a metric period, the '{}' parameter must contain '{}' and the '{}' must be provided.",
                SORT_PARAM,
                SortField::MetricPeriod,
                METRIC_PERIOD_SORT_PARAM
            )
        })?;
        check_request(
            self.metric_sort_filter == MetricSortFilter::All || self.metric_sort.is_some(),
            || {
                format!(
                    "To filter components based on the sort metric, the '{}' parameter must contain '{}' or '{}' and the '{}' parameter must be provided",
                    SORT_PARAM,
                    SortField::Metric,
                    SortField::MetricPeriod,
                    METRIC_SORT_PARAM
                )
            },
        )?;
        Ok(())
    }

    pub fn wants(&self, field: AdditionalField) -> bool {
        self.additional_fields.contains(&field)
    }

    /// True when the sort metric is read from its leak period variation
    pub fn sorts_by_period(&self) -> bool {
        self.sort.contains(&SortField::MetricPeriod)
    }
}

fn parse_qualifiers(values: &[String]) -> Result<Vec<Qualifier>> {
    values
        .iter()
        .map(|value| {
            Qualifier::from_str(value).map_err(|_| {
                let accepted: Vec<&str> = Qualifier::ALL.iter().map(|q| q.code()).collect();
                invalid_value(QUALIFIERS_PARAM, value, &accepted)
            })
        })
        .collect()
}

fn invalid_value(param: &str, value: &str, accepted: &[&str]) -> anyhow::Error {
    MeasuresError::bad_request(format!(
        "Value of parameter '{}' ({}) must be one of: [{}]",
        param,
        value,
        accepted.join(", ")
    ))
    .into()
}
