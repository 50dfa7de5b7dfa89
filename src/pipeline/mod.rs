//! Analysis pipeline
//!
//! fetch → clean → score → classify → aggregate → export → render.
//! Every run builds its own aggregator; nothing is shared between runs.


use crate::chart::{ChartInput, ChartRenderer};
use crate::error::{Result, SentimentError};
use crate::export::CsvExporter;
use crate::sentiment::{
    clean, AggregateResult, Aggregator, PolarityScore, PolarityScorer, ScoredItem,
    SentimentReport,
};
use crate::source::TextSource;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Default cap on items per run, bounds external API cost
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// A validated analysis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    keyword: String,
    count: usize,
}

impl AnalysisRequest {
    /// Keyword must be non-blank, count in `1..=max_items`
    pub fn new(keyword: &str, count: usize, max_items: usize) -> Result<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SentimentError::InvalidInput(
                "Please enter a keyword to search for.".to_string(),
            ));
        }
        if count == 0 {
            return Err(SentimentError::InvalidInput(
                "Please enter a valid positive number of tweets.".to_string(),
            ));
        }
        if count > max_items {
            return Err(SentimentError::InvalidInput(format!(
                "Please enter a number no greater than {} to avoid API limits.",
                max_items
            )));
        }
        Ok(Self {
            keyword: keyword.to_string(),
            count,
        })
    }

    /// Same as [`AnalysisRequest::new`] but takes the count as submitted text
    pub fn parse(keyword: &str, count: &str, max_items: usize) -> Result<Self> {
        let count = count.trim();
        if count.is_empty() {
            return Err(SentimentError::InvalidInput(
                "Please enter the number of tweets to analyze.".to_string(),
            ));
        }
        let count: usize = count.parse().map_err(|_| {
            SentimentError::InvalidInput(
                "Please enter a valid positive number of tweets.".to_string(),
            )
        })?;
        Self::new(keyword, count, max_items)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub report: SentimentReport,
    pub result: AggregateResult,
    pub export_path: PathBuf,
    /// `None` when chart rendering failed
    pub chart_path: Option<PathBuf>,
}

/// Drives one analysis per `run` call
pub struct SentimentPipeline {
    source: Box<dyn TextSource>,
    scorer: Box<dyn PolarityScorer>,
    exporter: CsvExporter,
    renderer: Box<dyn ChartRenderer>,
    progress_every: usize,
}

impl SentimentPipeline {
    pub fn new(
        source: Box<dyn TextSource>,
        scorer: Box<dyn PolarityScorer>,
        exporter: CsvExporter,
        renderer: Box<dyn ChartRenderer>,
    ) -> Self {
        Self {
            source,
            scorer,
            exporter,
            renderer,
            progress_every: 10,
        }
    }

    /// Log a progress line every `n` items
    pub fn with_progress_every(mut self, n: usize) -> Self {
        self.progress_every = n.max(1);
        self
    }

    /// Run one analysis. Any fatal error aborts with no partial result.
    pub async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        info!(
            "Starting analysis for keyword '{}' with {} items from {}",
            request.keyword(),
            request.count(),
            self.source.name()
        );

        let raw_items = self
            .source
            .fetch_items(request.keyword(), request.count())
            .await?;

        if raw_items.is_empty() {
            return Err(SentimentError::EmptyInput(format!(
                "No tweets found for '{}'. Try a different keyword or check your API limits.",
                request.keyword()
            )));
        }

        let (scored, result) = self.score_and_aggregate(request.keyword(), &raw_items)?;
        let export_path = self.exporter.export(&scored)?;

        let chart_path = match self.renderer.render(&ChartInput::from_result(&result)) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Error creating pie chart: {}", e);
                None
            }
        };

        info!(
            "Overall sentiment: {} (polarity: {:.3})",
            result.overall_category, result.overall_polarity
        );

        Ok(AnalysisOutcome {
            report: SentimentReport::from(&result),
            result,
            export_path,
            chart_path,
        })
    }

    /// Clean, score and classify every item in order, then finalize
    fn score_and_aggregate(
        &self,
        keyword: &str,
        raw_items: &[crate::source::RawItem],
    ) -> Result<(Vec<ScoredItem>, AggregateResult)> {
        let mut aggregator = Aggregator::new(keyword);
        let mut scored = Vec::with_capacity(raw_items.len());

        for item in raw_items {
            let text = clean(&item.text);
            let polarity = PolarityScore::new(self.scorer.polarity(&item.text))?;
            let category = aggregator.observe(polarity);
            debug!("{:?} -> {} ({})", item.id, category, polarity);

            scored.push(ScoredItem {
                text,
                polarity,
                category,
            });

            if aggregator.total() % self.progress_every == 0 {
                info!("Processed {} tweets...", aggregator.total());
            }
        }

        info!("Successfully processed {} tweets", aggregator.total());
        let result = aggregator.finalize()?;
        Ok((scored, result))
    }
}
