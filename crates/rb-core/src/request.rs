//! Typed board requests, parsed explicitly from raw parameters before any
//! service call is made.

use crate::error::{AppError, Result};
use crate::pager::PAGE_PARAM;
use crate::query::{RawQuery, Search};

pub const NUM_PARAM: &str = "num";

/// Parameters of the list page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRequest {
    /// `None` shows the first page.
    pub page_num: Option<u32>,
    pub search: Search,
}

impl ListRequest {
    pub fn from_query(query: &RawQuery<'_>) -> Result<Self> {
        Ok(Self {
            page_num: parse_page_num(query.get(PAGE_PARAM))?,
            search: query.search(),
        })
    }
}

/// Parameters of the endpoints that address a single post while keeping
/// the caller's position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRequest {
    pub num: i64,
    pub page_num: u32,
    pub search: Search,
}

impl PostRequest {
    pub fn from_query(query: &RawQuery<'_>) -> Result<Self> {
        Ok(Self {
            num: parse_num(query.get(NUM_PARAM))?,
            page_num: parse_page_num(query.get(PAGE_PARAM))?.unwrap_or(1),
            search: query.search(),
        })
    }
}

/// Post number; required.
pub fn parse_num(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or_else(|| AppError::invalid(NUM_PARAM, ""))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid(NUM_PARAM, raw))
}

/// Page number; absent or blank means "not given". Page 0 is lifted to 1.
pub fn parse_page_num(raw: Option<&str>) -> Result<Option<u32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(|page| Some(page.max(1)))
            .map_err(|_| AppError::invalid(PAGE_PARAM, raw)),
    }
}
