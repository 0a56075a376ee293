// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use bestiary_query::{FilterDimension, QueryState, SortDirection};
use std::collections::BTreeMap;

pub const DEFAULT_PER_PAGE: usize = 50;
pub const MAX_PER_PAGE: usize = 200;
pub const MAX_QUERY_BYTES: usize = 256;

pub const ALLOWED_PARAMS: [&str; 6] = ["q", "filter", "sort", "page", "per_page", "pretty"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCreaturesParams {
    pub query: String,
    pub dimension: FilterDimension,
    pub sort: SortDirection,
    pub page: usize,
    pub per_page: usize,
    pub pretty: bool,
}

impl ListCreaturesParams {
    /// The pipeline state equivalent of these parameters. Built field by
    /// field rather than through the setters: the reset rules are for
    /// interactive mutation, not for a one-shot request.
    #[must_use]
    pub fn to_query_state(&self) -> QueryState {
        QueryState {
            query: self.query.clone(),
            dimension: self.dimension,
            sort: self.sort,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

pub fn parse_list_creatures_params(
    query: &BTreeMap<String, String>,
) -> Result<ListCreaturesParams, ApiError> {
    parse_list_creatures_params_with_limits(query, DEFAULT_PER_PAGE, MAX_PER_PAGE)
}

/// Strict parse of the search query string. Numeric parameters must be
/// well-formed integers in range: malformed input is rejected rather than
/// coerced to a default.
pub fn parse_list_creatures_params_with_limits(
    query: &BTreeMap<String, String>,
    default_per_page: usize,
    max_per_page: usize,
) -> Result<ListCreaturesParams, ApiError> {
    for name in query.keys() {
        if !ALLOWED_PARAMS.contains(&name.as_str()) {
            return Err(ApiError::unknown_param(name, &ALLOWED_PARAMS));
        }
    }

    let text = query.get("q").cloned().unwrap_or_default();
    if text.len() > MAX_QUERY_BYTES {
        return Err(ApiError::invalid_param("q", &text));
    }

    let dimension = match query.get("filter") {
        Some(raw) => {
            FilterDimension::parse(raw).map_err(|_| ApiError::invalid_param("filter", raw))?
        }
        None => FilterDimension::Name,
    };

    let sort = match query.get("sort") {
        Some(raw) => SortDirection::parse(raw).map_err(|_| ApiError::invalid_param("sort", raw))?,
        None => SortDirection::Unsorted,
    };

    let page = parse_bounded(query, "page", 1, usize::MAX)?.unwrap_or(1);
    let per_page = parse_bounded(query, "per_page", 1, max_per_page)?.unwrap_or(default_per_page);

    let pretty = query
        .get("pretty")
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    Ok(ListCreaturesParams {
        query: text,
        dimension,
        sort,
        page,
        per_page,
        pretty,
    })
}

fn parse_bounded(
    query: &BTreeMap<String, String>,
    name: &str,
    min: usize,
    max: usize,
) -> Result<Option<usize>, ApiError> {
    let Some(raw) = query.get(name) else {
        return Ok(None);
    };
    let value = raw
        .parse::<usize>()
        .map_err(|_| ApiError::invalid_param(name, raw))?;
    if value < min || value > max {
        return Err(ApiError::invalid_param(name, raw));
    }
    Ok(Some(value))
}
