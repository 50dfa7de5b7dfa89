//! Polarity scores and the seven-band sentiment classification

use crate::error::{Result, SentimentError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity in [-1.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PolarityScore(f64);

impl PolarityScore {
    pub const MIN: f64 = -1.0;
    pub const MAX: f64 = 1.0;

    /// Reject NaN and anything outside [-1.0, 1.0]
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SentimentError::InvalidPolarity(value));
        }
        Ok(Self(value))
    }

    /// Clamp into range. NaN maps to 0.0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PolarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sentiment category, ordered from most negative to most positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    StronglyNegative,
    Negative,
    WeaklyNegative,
    Neutral,
    WeaklyPositive,
    Positive,
    StronglyPositive,
}

impl SentimentCategory {
    /// All categories in ascending order
    pub const ALL: [SentimentCategory; 7] = [
        SentimentCategory::StronglyNegative,
        SentimentCategory::Negative,
        SentimentCategory::WeaklyNegative,
        SentimentCategory::Neutral,
        SentimentCategory::WeaklyPositive,
        SentimentCategory::Positive,
        SentimentCategory::StronglyPositive,
    ];

    /// Position in [`Self::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label used in exports and reports
    pub fn label(self) -> &'static str {
        match self {
            SentimentCategory::StronglyNegative => "Strongly Negative",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::WeaklyNegative => "Weakly Negative",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::WeaklyPositive => "Weakly Positive",
            SentimentCategory::Positive => "Positive",
            SentimentCategory::StronglyPositive => "Strongly Positive",
        }
    }

    pub fn is_positive(self) -> bool {
        self > SentimentCategory::Neutral
    }

    pub fn is_negative(self) -> bool {
        self < SentimentCategory::Neutral
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the threshold table
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub lower: f64,
    pub lower_inclusive: bool,
    pub upper: f64,
    pub upper_inclusive: bool,
    pub category: SentimentCategory,
}

impl Band {
    const fn new(
        lower: f64,
        lower_inclusive: bool,
        upper: f64,
        upper_inclusive: bool,
        category: SentimentCategory,
    ) -> Self {
        Self {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
            category,
        }
    }

    pub fn contains(&self, p: f64) -> bool {
        let above = if self.lower_inclusive { p >= self.lower } else { p > self.lower };
        let below = if self.upper_inclusive { p <= self.upper } else { p < self.upper };
        above && below
    }
}

/// Evaluated top to bottom, first match wins. Exact zero is Neutral; every
/// other band owns its upper-magnitude-inclusive edge.
pub const BANDS: [Band; 7] = [
    Band::new(0.0, true, 0.0, true, SentimentCategory::Neutral),
    Band::new(0.0, false, 0.3, true, SentimentCategory::WeaklyPositive),
    Band::new(0.3, false, 0.6, true, SentimentCategory::Positive),
    Band::new(0.6, false, 1.0, true, SentimentCategory::StronglyPositive),
    Band::new(-0.3, false, 0.0, false, SentimentCategory::WeaklyNegative),
    Band::new(-0.6, false, -0.3, true, SentimentCategory::Negative),
    Band::new(-1.0, true, -0.6, true, SentimentCategory::StronglyNegative),
];

/// Classify a polarity. Used for every item and again for the run's mean.
pub fn classify(score: PolarityScore) -> SentimentCategory {
    // the bands cover [-1, 1] and PolarityScore enforces that range
    band_for(&BANDS, score.value()).expect("polarity bands must cover [-1.0, 1.0]")
}

/// First band in `bands` containing `p`
fn band_for(bands: &[Band], p: f64) -> Option<SentimentCategory> {
    bands.iter().find(|band| band.contains(p)).map(|band| band.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cls(p: f64) -> SentimentCategory {
        classify(PolarityScore::new(p).unwrap())
    }

    #[test]
    fn test_zero_is_neutral() {
        assert_eq!(cls(0.0), SentimentCategory::Neutral);
        assert_eq!(cls(-0.0), SentimentCategory::Neutral);
    }

    #[test]
    fn test_positive_boundaries() {
        assert_eq!(cls(0.0001), SentimentCategory::WeaklyPositive);
        assert_eq!(cls(0.3), SentimentCategory::WeaklyPositive);
        assert_eq!(cls(0.30001), SentimentCategory::Positive);
        assert_eq!(cls(0.6), SentimentCategory::Positive);
        assert_eq!(cls(0.60001), SentimentCategory::StronglyPositive);
        assert_eq!(cls(1.0), SentimentCategory::StronglyPositive);
    }

    #[test]
    fn test_negative_boundaries() {
        assert_eq!(cls(-0.0001), SentimentCategory::WeaklyNegative);
        assert_eq!(cls(-0.29999), SentimentCategory::WeaklyNegative);
        assert_eq!(cls(-0.3), SentimentCategory::Negative);
        assert_eq!(cls(-0.59999), SentimentCategory::Negative);
        assert_eq!(cls(-0.6), SentimentCategory::StronglyNegative);
        assert_eq!(cls(-1.0), SentimentCategory::StronglyNegative);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(PolarityScore::new(-1.00001).is_err());
        assert!(PolarityScore::new(1.00001).is_err());
        assert!(PolarityScore::new(f64::NAN).is_err());
        assert!(PolarityScore::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(PolarityScore::clamped(1.5).value(), 1.0);
        assert_eq!(PolarityScore::clamped(-3.0).value(), -1.0);
        assert_eq!(PolarityScore::clamped(f64::NAN).value(), 0.0);
        assert_eq!(PolarityScore::clamped(0.25).value(), 0.25);
    }

    #[test]
    fn test_total_and_deterministic() {
        // sweep the whole domain in 0.001 steps
        for i in -1000..=1000 {
            let p = i as f64 / 1000.0;
            let score = PolarityScore::new(p).unwrap();
            let matches = BANDS.iter().filter(|b| b.contains(p)).count();
            assert!(matches >= 1, "no band for {}", p);
            assert_eq!(classify(score), classify(score));
        }
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut previous = SentimentCategory::StronglyNegative;
        for i in -1000..=1000 {
            let current = cls(i as f64 / 1000.0);
            assert!(current >= previous, "category decreased at {}", i);
            previous = current;
        }
    }

    #[test]
    fn test_category_order_and_index() {
        for (i, category) in SentimentCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert!(SentimentCategory::StronglyNegative < SentimentCategory::Negative);
        assert!(SentimentCategory::Positive < SentimentCategory::StronglyPositive);
        assert!(SentimentCategory::WeaklyPositive.is_positive());
        assert!(SentimentCategory::WeaklyNegative.is_negative());
        assert!(!SentimentCategory::Neutral.is_positive());
        assert!(!SentimentCategory::Neutral.is_negative());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SentimentCategory::WeaklyPositive.to_string(), "Weakly Positive");
        assert_eq!(SentimentCategory::StronglyNegative.label(), "Strongly Negative");
        assert_eq!(
            serde_json::to_string(&SentimentCategory::WeaklyNegative).unwrap(),
            "\"weakly_negative\""
        );
    }

    #[test]
    fn test_band_gap_is_not_reclassified() {
        let gapped = [
            Band::new(0.0, true, 0.0, true, SentimentCategory::Neutral),
            Band::new(0.0, false, 0.3, true, SentimentCategory::WeaklyPositive),
        ];
        assert_eq!(band_for(&gapped, 0.2), Some(SentimentCategory::WeaklyPositive));
        assert_eq!(band_for(&gapped, 0.5), None);
        assert_eq!(band_for(&gapped, -0.5), None);

        for i in -1000..=1000 {
            let p = i as f64 / 1000.0;
            assert!(band_for(&BANDS, p).is_some(), "{} not covered", p);
        }
    }
}
