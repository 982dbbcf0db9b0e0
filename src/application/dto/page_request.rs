use super::RequestParams;
use crate::shared::{check_request, Result};

pub const PAGE_PARAM: &str = "p";
pub const PAGE_SIZE_PARAM: &str = "ps";

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Reads `p` and `ps`, applying the default size and the size cap
    pub fn from_params(params: &RequestParams, default_size: usize, max_size: usize) -> Result<Self> {
        let page = params.param_as_int(PAGE_PARAM)?.unwrap_or(1);
        let page_size = params
            .param_as_int(PAGE_SIZE_PARAM)?
            .unwrap_or(default_size as i64);

        check_request(page > 0, || {
            format!("'{}' value ({}) must be greater than 0", PAGE_PARAM, page)
        })?;
        check_request(page_size > 0, || {
            format!("'{}' value ({}) must be greater than 0", PAGE_SIZE_PARAM, page_size)
        })?;
        check_request(page_size as usize <= max_size, || {
            format!(
                "'{}' value ({}) must be less than {}",
                PAGE_SIZE_PARAM, page_size, max_size
            )
        })?;

        Ok(Self {
            page: page as usize,
            page_size: page_size as usize,
        })
    }
}
