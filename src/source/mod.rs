//! Text sources
//!
//! Where the posts come from:
//! - Twitter/X recent search (API v2)
//! - Static lists / local files (offline runs, tests)

pub mod static_source;
pub mod twitter;

#[cfg(test)]
mod tests;

pub use static_source::StaticSource;
pub use twitter::TwitterClient;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fetched post. Never modified after fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    /// Source-side identifier (tweet id, line number)
    pub id: Option<String>,
    /// Raw text as delivered
    pub text: String,
    /// Author identifier, if known
    pub author_id: Option<String>,
    /// When the post was created, if known
    pub created_at: Option<DateTime<Utc>>,
}

impl RawItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            author_id: None,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Source of posts for a keyword
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Source name
    fn name(&self) -> &'static str;

    /// Fetch up to `count` items matching `keyword`, in delivery order
    async fn fetch_items(&self, keyword: &str, count: usize) -> Result<Vec<RawItem>>;
}
