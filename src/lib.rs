pub mod config;
pub mod countries;
pub mod models;
pub mod search;
pub mod sources;

pub use models::{SearchFilter, Space};
pub use search::{filter_spaces, parse_search_query, MatchMode, SearchError, SpaceSearch};
