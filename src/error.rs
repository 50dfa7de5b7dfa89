//! Error types for the sentiment analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    #[error("Search error: {0}")]
    Search(String),

    #[error("No items to analyze: {0}")]
    EmptyInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Polarity {0} is outside [-1.0, 1.0]")]
    InvalidPolarity(f64),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
