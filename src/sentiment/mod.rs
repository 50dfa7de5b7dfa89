//! Sentiment core
//!
//! - Text cleaning for export
//! - Polarity scoring behind a trait
//! - Seven-band classification
//! - Per-run aggregation and the presentation record

pub mod aggregator;
pub mod category;
pub mod cleaner;
pub mod report;
pub mod scorer;


pub use aggregator::{fold, AggregateResult, Aggregator};
pub use category::{classify, PolarityScore, SentimentCategory, BANDS};
pub use cleaner::clean;
pub use report::SentimentReport;
pub use scorer::{LexiconScorer, PolarityScorer};

use serde::Serialize;

/// One processed item, in fetch order
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub text: String,
    pub polarity: PolarityScore,
    pub category: SentimentCategory,
}
