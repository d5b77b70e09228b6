pub mod filter;
pub mod parser;

pub use filter::{filter_spaces, normalize_region};
pub use parser::parse_search_query;

use crate::models::{SearchFilter, Space};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,
}

/// How the result list of a search was produced
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The query parsed into a filter and the filter was applied
    Filtered,
    /// Nothing parsed; spaces whose text contains the query
    Text,
    /// Nothing parsed and no text hit; every space in scope
    Unmatched,
}

#[derive(Debug, Serialize)]
pub struct SearchOutcome<'a> {
    pub filter: Option<SearchFilter>,
    pub mode: MatchMode,
    pub spaces: Vec<&'a Space>,
}

/// A loaded set of spaces that can be searched repeatedly
pub struct SpaceSearch {
    spaces: Vec<Space>,
}

impl SpaceSearch {
    pub fn new(spaces: Vec<Space>) -> Self {
        Self { spaces }
    }

    /// Distinct non-empty country labels, sorted
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self
            .spaces
            .iter()
            .map(|space| space.country.as_str())
            .filter(|country| !country.is_empty())
            .collect();
        countries.sort_unstable();
        countries.dedup();
        countries
    }

    /// Spaces listed under exactly `country`, or all of them when `None`
    pub fn in_country(&self, country: Option<&str>) -> Vec<&Space> {
        match country {
            Some(country) => self
                .spaces
                .iter()
                .filter(|space| space.country == country)
                .collect(),
            None => self.spaces.iter().collect(),
        }
    }

    /// Search within `country` (or everywhere).
    ///
    /// A parsed query filters the spaces. Otherwise the raw query is looked up
    /// in name, type, style and region, and when even that finds nothing the
    /// whole scope is returned.
    pub fn run(
        &self,
        query: &str,
        country: Option<&str>,
    ) -> Result<SearchOutcome<'_>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let base = self.in_country(country);
        let filter = parse_search_query(query);

        let (mode, spaces) = match &filter {
            Some(filter) => {
                let spaces = base
                    .into_iter()
                    .filter(|space| filter::matches(space, filter))
                    .collect();
                (MatchMode::Filtered, spaces)
            }
            None => {
                let hits = text_search(&base, query);
                if hits.is_empty() {
                    (MatchMode::Unmatched, base)
                } else {
                    (MatchMode::Text, hits)
                }
            }
        };

        info!(
            "Search {:?} in {} -> {} spaces ({:?})",
            query,
            country.unwrap_or("all countries"),
            spaces.len(),
            mode
        );

        Ok(SearchOutcome { filter, mode, spaces })
    }
}

fn text_search<'a>(spaces: &[&'a Space], query: &str) -> Vec<&'a Space> {
    let needle = query.to_lowercase();
    spaces
        .iter()
        .copied()
        .filter(|space| {
            [&space.name, &space.space_type, &space.style, &space.region]
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
