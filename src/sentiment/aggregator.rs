//! Folding per-item polarities into a category distribution

use super::category::{classify, PolarityScore, SentimentCategory};
use crate::error::{Result, SentimentError};
use rust_decimal::prelude::*;
use serde::Serialize;

/// Running counts for one analysis run
#[derive(Debug, Clone)]
pub struct Aggregator {
    topic: String,
    counts: [usize; 7],
    polarity_sum: f64,
    total: usize,
}

/// Finalized distribution for one run
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Keyword the items were fetched for
    pub topic: String,
    /// Number of items folded
    pub total: usize,
    counts: [usize; 7],
    percentages: [Decimal; 7],
    /// Mean polarity over all items
    pub overall_polarity: f64,
    /// Classification of the mean
    pub overall_category: SentimentCategory,
}

impl Aggregator {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            counts: [0; 7],
            polarity_sum: 0.0,
            total: 0,
        }
    }

    /// Classify one score and fold it in
    pub fn observe(&mut self, score: PolarityScore) -> SentimentCategory {
        let category = classify(score);
        self.counts[category.index()] += 1;
        self.polarity_sum += score.value();
        self.total += 1;
        category
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, category: SentimentCategory) -> usize {
        self.counts[category.index()]
    }

    /// Compute percentages and the overall label. Consumes the aggregator.
    pub fn finalize(self) -> Result<AggregateResult> {
        if self.total == 0 {
            return Err(SentimentError::EmptyInput(format!(
                "no items were processed for '{}'; try a different keyword",
                self.topic
            )));
        }

        let mut percentages = [Decimal::ZERO; 7];
        for (pct, &count) in percentages.iter_mut().zip(self.counts.iter()) {
            *pct = percentage(count, self.total);
        }

        let mean = self.polarity_sum / self.total as f64;
        // the mean of in-range values stays in range up to float error
        let overall = PolarityScore::clamped(mean);

        Ok(AggregateResult {
            topic: self.topic,
            total: self.total,
            counts: self.counts,
            percentages,
            overall_polarity: mean,
            overall_category: classify(overall),
        })
    }
}

/// Fold a whole sequence in one call
pub fn fold<I>(topic: impl Into<String>, scores: I) -> Result<AggregateResult>
where
    I: IntoIterator<Item = PolarityScore>,
{
    let mut aggregator = Aggregator::new(topic);
    for score in scores {
        aggregator.observe(score);
    }
    aggregator.finalize()
}

/// `100 * part / whole` to exactly two places. Ties round to even, matching
/// `.2f` float formatting: with whole counts every tie is an exact multiple
/// of 1/8. Each category is rounded on its own, so totals can drift from 100.00.
pub fn percentage(part: usize, whole: usize) -> Decimal {
    let mut pct = if whole == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    };
    pct.rescale(2);
    pct
}

impl AggregateResult {
    pub fn count(&self, category: SentimentCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn percentage(&self, category: SentimentCategory) -> Decimal {
        self.percentages[category.index()]
    }

    /// Two-decimal display form, e.g. `"14.29"`
    pub fn percentage_label(&self, category: SentimentCategory) -> String {
        self.percentage(category).to_string()
    }

    /// `(category, count, percentage)` in ascending category order
    pub fn distribution(&self) -> impl Iterator<Item = (SentimentCategory, usize, Decimal)> + '_ {
        SentimentCategory::ALL
            .iter()
            .map(move |&c| (c, self.count(c), self.percentage(c)))
    }

    pub fn percentage_sum(&self) -> Decimal {
        self.percentages.iter().copied().sum()
    }

    /// Category with the most items; ties go to the more neutral one
    pub fn dominant_category(&self) -> SentimentCategory {
        SentimentCategory::ALL
            .iter()
            .copied()
            .max_by_key(|&c| {
                let distance = (c.index() as i64 - SentimentCategory::Neutral.index() as i64).abs();
                (self.count(c), -distance)
            })
            .unwrap_or(SentimentCategory::Neutral)
    }
}
