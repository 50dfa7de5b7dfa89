//! Twitter/X recent search client
//!
//! Pages through `GET /2/tweets/search/recent` until the requested number of
//! tweets is collected. No retries: auth and rate-limit failures end the run.

use super::{RawItem, TextSource};
use crate::config::TwitterConfig;
use crate::error::{Result, SentimentError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;

/// Page size bounds of the recent search endpoint
const MIN_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

/// Used when a 429 carries no usable reset header (one 15-minute window)
const DEFAULT_RETRY_AFTER_SECS: u64 = 900;

/// Twitter API v2 client
pub struct TwitterClient {
    http: Client,
    config: TwitterConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<Vec<ApiTweet>>,
    meta: Option<SearchMeta>,
}

#[derive(Debug, Deserialize)]
struct ApiTweet {
    id: String,
    text: String,
    author_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct SearchMeta {
    next_token: Option<String>,
    #[serde(default)]
    result_count: u32,
}

impl From<ApiTweet> for RawItem {
    fn from(tweet: ApiTweet) -> Self {
        RawItem {
            id: Some(tweet.id),
            text: tweet.text,
            author_id: tweet.author_id,
            created_at: tweet.created_at,
        }
    }
}

impl TwitterClient {
    /// Create a client. Fails if the bearer token is missing or a placeholder.
    pub fn new(config: TwitterConfig) -> Result<Self> {
        if config.has_placeholder_token() {
            return Err(SentimentError::Configuration(
                "Twitter bearer token is not set; update twitter.bearer_token \
                 or SENTIMENT_TWITTER__BEARER_TOKEN"
                    .to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Search query for a keyword in the configured language
    pub fn build_query(&self, keyword: &str) -> String {
        let mut query = format!("{} lang:{}", keyword.trim(), self.config.language);
        if self.config.exclude_retweets {
            query.push_str(" -is:retweet");
        }
        query
    }

    async fn fetch_page(
        &self,
        query: &str,
        max_results: usize,
        next_token: Option<&str>,
    ) -> Result<SearchResponse> {
        let url = format!(
            "{}/2/tweets/search/recent",
            self.config.base_url.trim_end_matches('/')
        );

        let mut params = vec![
            ("query", query.to_string()),
            ("max_results", max_results.to_string()),
            ("tweet.fields", "created_at,author_id".to_string()),
        ];
        if let Some(token) = next_token {
            params.push(("next_token", token.to_string()));
        }

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.config.bearer_token)
            .query(&params)
            .send()
            .await
            .map_err(|e| SentimentError::Search(format!("request failed: {}", e)))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .text()
            .await
            .map_err(|e| SentimentError::Search(format!("failed to read response: {}", e)))?;

        if let Some(err) = status_error(status, &headers, &body, Utc::now().timestamp()) {
            return Err(err);
        }
        parse_search_response(&body)
    }
}

#[async_trait]
impl TextSource for TwitterClient {
    fn name(&self) -> &'static str {
        "twitter"
    }

    async fn fetch_items(&self, keyword: &str, count: usize) -> Result<Vec<RawItem>> {
        let query = self.build_query(keyword);
        tracing::info!("Searching for {} tweets with query '{}'", count, query);

        let query = query.as_str();
        let items = collect_pages(count, |page_size, next_token| async move {
            self.fetch_page(query, page_size, next_token.as_deref()).await
        })
        .await?;

        tracing::info!("Fetched {} tweets", items.len());
        Ok(items)
    }
}

/// Request pages until `count` items are collected, a page comes back empty,
/// or no `next_token` remains. Extra items from the last page are dropped.
async fn collect_pages<F, Fut>(count: usize, mut fetch_page: F) -> Result<Vec<RawItem>>
where
    F: FnMut(usize, Option<String>) -> Fut,
    Fut: Future<Output = Result<SearchResponse>>,
{
    let mut items: Vec<RawItem> = Vec::with_capacity(count);
    let mut next_token: Option<String> = None;

    while items.len() < count {
        let page = fetch_page(page_size(count - items.len()), next_token.take()).await?;

        let tweets = page.data.unwrap_or_default();
        let fetched = tweets.len();
        items.extend(tweets.into_iter().map(RawItem::from));

        next_token = page.meta.and_then(|m| {
            tracing::debug!("Page returned {} tweets", m.result_count);
            m.next_token
        });

        if fetched == 0 || next_token.is_none() {
            break;
        }
    }

    items.truncate(count);
    Ok(items)
}

/// Map a non-success response to its error; `None` for success
fn status_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    now: i64,
) -> Option<SentimentError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Some(SentimentError::Authentication(format!(
            "Twitter API returned {}: {}",
            status,
            body.trim()
        )));
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Some(SentimentError::RateLimited {
            retry_after_secs: retry_after_secs(headers, now),
        });
    }
    if !status.is_success() {
        return Some(SentimentError::Search(format!(
            "Twitter API returned {}: {}",
            status,
            body.trim()
        )));
    }
    None
}

fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body)
        .map_err(|e| SentimentError::Search(format!("invalid search response: {}", e)))
}

/// Page size for the remaining number of tweets, within the API's bounds
fn page_size(remaining: usize) -> usize {
    remaining.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Seconds until the rate-limit window resets
fn retry_after_secs(headers: &HeaderMap, now: i64) -> u64 {
    if let Some(reset) = header_i64(headers, "x-rate-limit-reset") {
        return (reset - now).max(0) as u64;
    }
    if let Some(secs) = header_i64(headers, "retry-after") {
        return secs.max(0) as u64;
    }
    DEFAULT_RETRY_AFTER_SECS
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
