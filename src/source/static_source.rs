//! In-memory text source

use super::{RawItem, TextSource};
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Serves a fixed list of posts, filtered by keyword
pub struct StaticSource {
    items: Vec<RawItem>,
}

impl StaticSource {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| RawItem::new(text).with_id(format!("static-{}", i + 1)))
            .collect();
        Self { items }
    }

    /// One post per non-empty line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let source = Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        tracing::debug!(
            "Loaded {} posts from {}",
            source.len(),
            path.as_ref().display()
        );
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl TextSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_items(&self, keyword: &str, count: usize) -> Result<Vec<RawItem>> {
        let needle = keyword.trim().to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| item.text.to_lowercase().contains(&needle))
            .take(count)
            .cloned()
            .collect())
    }
}
