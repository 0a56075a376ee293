// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DEFAULT_PER_PAGE: usize = 50;

/// Which record field(s) the free-text query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    #[default]
    Name,
    Type,
    Clan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FilterDimension {
    pub const ALLOWED: [&'static str; 3] = ["name", "type", "clan"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Clan => "clan",
        }
    }

    pub fn parse(input: &str) -> Result<Self, UnknownVariant> {
        match input {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "clan" => Ok(Self::Clan),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Ordering over the aggregate capture count. `Unsorted` keeps the
/// dataset's original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    Unsorted,
}

impl SortDirection {
    pub const ALLOWED: [&'static str; 3] = ["asc", "desc", "none"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
            Self::Unsorted => "none",
        }
    }

    pub fn parse(input: &str) -> Result<Self, UnknownVariant> {
        match input {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            "none" => Ok(Self::Unsorted),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Per-session query inputs. Pages are 1-based. Mutation goes through the
/// setters, which carry the reset rules: a new query or page size resets
/// the page to 1, and switching dimension additionally clears the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub query: String,
    pub dimension: FilterDimension,
    pub sort: SortDirection,
    pub page: usize,
    pub per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            dimension: FilterDimension::Name,
            sort: SortDirection::Unsorted,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_dimension(&mut self, dimension: FilterDimension) {
        self.dimension = dimension;
        self.query.clear();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortDirection) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_query_resets_the_page() {
        let mut state = QueryState::default();
        state.set_page(7);
        state.set_query("char");
        assert_eq!(state.page, 1);
        assert_eq!(state.query, "char");
    }

    #[test]
    fn dimension_change_clears_query_and_resets_page() {
        let mut state = QueryState::default();
        state.set_query("fire");
        state.set_page(3);
        state.set_dimension(FilterDimension::Type);
        assert_eq!(state.dimension, FilterDimension::Type);
        assert!(state.query.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn per_page_change_resets_the_page() {
        let mut state = QueryState::default();
        state.set_page(4);
        state.set_per_page(10);
        assert_eq!(state.per_page, 10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn sort_change_leaves_page_and_query_alone() {
        let mut state = QueryState::default();
        state.set_query("bulba");
        state.set_page(2);
        state.set_sort(SortDirection::Descending);
        assert_eq!(state.page, 2);
        assert_eq!(state.query, "bulba");
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let mut state = QueryState::default();
        state.set_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn variant_parsing_round_trips() {
        for raw in FilterDimension::ALLOWED {
            assert_eq!(FilterDimension::parse(raw).expect("dimension").as_str(), raw);
        }
        for raw in SortDirection::ALLOWED {
            assert_eq!(SortDirection::parse(raw).expect("sort").as_str(), raw);
        }
        assert!(FilterDimension::parse("Nome").is_err());
        assert!(SortDirection::parse("ascending").is_err());
    }
}
