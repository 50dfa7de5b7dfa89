//! Presentation handoff record

use super::aggregator::AggregateResult;
use super::category::SentimentCategory;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs, flattened to display values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Mean polarity over all items
    pub polarity: f64,
    /// Overall category label, e.g. "Weakly Positive"
    pub label: String,
    pub positive: String,
    pub weakly_positive: String,
    pub strongly_positive: String,
    pub negative: String,
    pub weakly_negative: String,
    pub strongly_negative: String,
    pub neutral: String,
    pub keyword: String,
    pub item_count: usize,
}

impl From<&AggregateResult> for SentimentReport {
    fn from(result: &AggregateResult) -> Self {
        let pct = |c: SentimentCategory| result.percentage_label(c);
        Self {
            polarity: result.overall_polarity,
            label: result.overall_category.label().to_string(),
            positive: pct(SentimentCategory::Positive),
            weakly_positive: pct(SentimentCategory::WeaklyPositive),
            strongly_positive: pct(SentimentCategory::StronglyPositive),
            negative: pct(SentimentCategory::Negative),
            weakly_negative: pct(SentimentCategory::WeaklyNegative),
            strongly_negative: pct(SentimentCategory::StronglyNegative),
            neutral: pct(SentimentCategory::Neutral),
            keyword: result.topic.clone(),
            item_count: result.total,
        }
    }
}

impl SentimentReport {
    /// Percentage string for a category
    pub fn percentage(&self, category: SentimentCategory) -> &str {
        match category {
            SentimentCategory::StronglyNegative => &self.strongly_negative,
            SentimentCategory::Negative => &self.negative,
            SentimentCategory::WeaklyNegative => &self.weakly_negative,
            SentimentCategory::Neutral => &self.neutral,
            SentimentCategory::WeaklyPositive => &self.weakly_positive,
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::StronglyPositive => &self.strongly_positive,
        }
    }
}
