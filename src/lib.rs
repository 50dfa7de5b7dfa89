//! Tweet Sentiment Analyzer
//!
//! Fetches posts for a keyword, scores and classifies each one, and reports
//! the sentiment distribution as percentages, a CSV export and a pie chart.

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod sentiment;
pub mod source;

#[cfg(test)]
mod error_tests;
