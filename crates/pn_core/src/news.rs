use std::fmt;
use std::str::FromStr;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::types::Article;
use crate::{Error, Result};

/// Ordering requested from the news search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Latest,
    Relevance,
    Popularity,
}

impl SortBy {
    /// Value of the upstream `sortBy` parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            SortBy::Latest => "publishedAt",
            SortBy::Relevance => "relevancy",
            SortBy::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Latest => "Latest",
            SortBy::Relevance => "Relevance",
            SortBy::Popularity => "Popularity",
        };
        f.write_str(name)
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "publishedat" => Ok(SortBy::Latest),
            "relevance" | "relevancy" => Ok(SortBy::Relevance),
            "popularity" => Ok(SortBy::Popularity),
            other => Err(Error::InvalidInput(format!("unknown sort order: {}", other))),
        }
    }
}

/// What to search for: a party, optionally narrowed to a state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsQuery {
    pub party: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl NewsQuery {
    pub fn new(party: impl Into<String>, state: Option<String>) -> Self {
        Self { party: party.into(), state }
    }

    /// Free-text search string sent upstream.
    pub fn search_text(&self) -> String {
        let mut query = self.party.trim().to_string();
        if let Some(state) = self.state.as_deref().map(str::trim) {
            if !state.is_empty() && state != "All States" {
                query.push(' ');
                query.push_str(state);
            }
        }
        query.push_str(" India politics");
        query
    }
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the upstream service
    fn name(&self) -> &str;

    /// Fetch recent articles matching the query, in upstream order
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>>;
}
