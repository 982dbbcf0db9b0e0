use crate::shared::{MeasuresError, Result};
use std::collections::BTreeMap;

/// Raw parameters of a web service request
///
/// Blank values are treated as absent, the way query strings are usually
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and adapters
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Parses `key=value` pairs as given on the command line
    ///
    /// # Errors
    /// Returns an error when a pair has no `=` or an empty key
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid request parameter '{}'. Expected the form key=value",
                        pair
                    )
                })?;
            params.set(key.trim(), value.trim());
        }
        Ok(params)
    }

    pub fn has(&self, key: &str) -> bool {
        self.param(key).is_some()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn mandatory_param(&self, key: &str) -> Result<&str> {
        self.param(key).ok_or_else(|| missing(key))
    }

    /// Comma separated list; blank items are dropped
    pub fn param_as_strings(&self, key: &str) -> Option<Vec<String>> {
        self.param(key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    pub fn mandatory_param_as_strings(&self, key: &str) -> Result<Vec<String>> {
        self.param_as_strings(key).ok_or_else(|| missing(key))
    }

    /// Accepts `true`, `false`, `yes` and `no`
    pub fn param_as_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.param(key) {
            None => Ok(None),
            Some("true") | Some("yes") => Ok(Some(true)),
            Some("false") | Some("no") => Ok(Some(false)),
            Some(other) => Err(MeasuresError::bad_request(format!(
                "Value of parameter '{}' ({}) must be one of: [true, false, yes, no]",
                key, other
            ))
            .into()),
        }
    }

    pub fn param_as_int(&self, key: &str) -> Result<Option<i64>> {
        self.param(key)
            .map(|value| {
                value.trim().parse::<i64>().map_err(|_| {
                    anyhow::Error::from(MeasuresError::bad_request(format!(
                        "The '{}' parameter cannot be parsed as an integer value: {}",
                        key, value
                    )))
                })
            })
            .transpose()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

fn missing(key: &str) -> anyhow::Error {
    MeasuresError::bad_request(format!("The '{}' parameter is missing", key)).into()
}
