//! Pie chart artifact
//!
//! Renders the category → percentage table as a standalone SVG with a legend.
//! A table with no positive slice yields a "no data" placeholder instead.

use crate::error::{Result, SentimentError};
use crate::sentiment::{AggregateResult, SentimentCategory};
use rust_decimal::prelude::*;
use std::f64::consts::PI;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// One wedge of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: SentimentCategory,
    pub percentage: Decimal,
    /// Legend text, e.g. `Positive [14.29%]`
    pub label: String,
    pub color: &'static str,
}

/// What the renderer draws
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub title: String,
    /// Only categories with percentage > 0
    pub slices: Vec<ChartSlice>,
}

impl ChartInput {
    /// Build from raw percentages; zero and negative entries are dropped
    pub fn new<I>(topic: &str, item_count: usize, percentages: I) -> Self
    where
        I: IntoIterator<Item = (SentimentCategory, Decimal)>,
    {
        let slices = percentages
            .into_iter()
            .filter(|(_, pct)| *pct > Decimal::ZERO)
            .map(|(category, percentage)| ChartSlice {
                category,
                percentage,
                label: format!("{} [{}%]", category.label(), percentage),
                color: color_for(category),
            })
            .collect();

        Self {
            title: format!(
                "Sentiment Analysis for \"{}\" ({} tweets analyzed)",
                topic, item_count
            ),
            slices,
        }
    }

    pub fn from_result(result: &AggregateResult) -> Self {
        Self::new(
            &result.topic,
            result.total,
            result.distribution().map(|(c, _, pct)| (c, pct)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

pub fn color_for(category: SentimentCategory) -> &'static str {
    match category {
        SentimentCategory::StronglyPositive => "#228B22",
        SentimentCategory::Positive => "#32CD32",
        SentimentCategory::WeaklyPositive => "#9ACD32",
        SentimentCategory::Neutral => "#FFD700",
        SentimentCategory::WeaklyNegative => "#FF4500",
        SentimentCategory::Negative => "#FF6347",
        SentimentCategory::StronglyNegative => "#DC143C",
    }
}

/// Produces the chart artifact
pub trait ChartRenderer: Send + Sync {
    /// Render and return the artifact path
    fn render(&self, chart: &ChartInput) -> Result<PathBuf>;
}

/// Writes an SVG pie chart to a fixed path
#[derive(Debug, Clone)]
pub struct SvgPieRenderer {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgPieRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: 960,
            height: 640,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn build_svg(&self, chart: &ChartInput) -> std::result::Result<String, std::fmt::Error> {
        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        if chart.is_empty() {
            self.write_placeholder(&mut svg, chart)?;
        } else {
            self.write_pie(&mut svg, chart)?;
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }

    fn write_placeholder(&self, svg: &mut String, chart: &ChartInput) -> std::fmt::Result {
        writeln!(
            svg,
            r#"<text x="{}" y="48" font-size="24" font-weight="bold" text-anchor="middle">{} - No Data</text>"#,
            self.width / 2,
            escape_xml(&chart.title)
        )?;
        writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="24" text-anchor="middle">No sentiment data available</text>"#,
            self.width / 2,
            self.height / 2
        )
    }

    fn write_pie(&self, svg: &mut String, chart: &ChartInput) -> std::fmt::Result {
        writeln!(
            svg,
            r#"<text x="{}" y="48" font-size="24" font-weight="bold" text-anchor="middle">{}</text>"#,
            self.width / 2,
            escape_xml(&chart.title)
        )?;

        let cx = self.height as f64 / 2.0;
        let cy = self.height as f64 / 2.0 + 20.0;
        let r = self.height as f64 / 2.0 - 80.0;

        // normalise over the drawn slices; rounded percentages rarely sum to 100
        let total: f64 = chart
            .slices
            .iter()
            .map(|s| s.percentage.to_f64().unwrap_or(0.0))
            .sum();

        let mut angle = -PI / 2.0;
        for slice in &chart.slices {
            let fraction = slice.percentage.to_f64().unwrap_or(0.0) / total;
            let sweep = fraction * 2.0 * PI;

            if fraction >= 0.9999 {
                writeln!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="white"/>"#,
                    cx, cy, r, slice.color
                )?;
            } else {
                let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
                let end = angle + sweep;
                let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
                let large_arc = if sweep > PI { 1 } else { 0 };
                writeln!(
                    svg,
                    r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="white"/>"#,
                    cx, cy, x0, y0, r, r, large_arc, x1, y1, slice.color
                )?;
            }

            let mid = angle + sweep / 2.0;
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle">{:.1}%</text>"#,
                cx + 0.6 * r * mid.cos(),
                cy + 0.6 * r * mid.sin(),
                fraction * 100.0
            )?;
            angle += sweep;
        }

        let legend_x = self.height as f64 + 20.0;
        writeln!(
            svg,
            r#"<text x="{:.0}" y="120" font-size="16" font-weight="bold">Sentiment Categories</text>"#,
            legend_x
        )?;
        for (i, slice) in chart.slices.iter().enumerate() {
            let y = 140.0 + i as f64 * 28.0;
            writeln!(
                svg,
                r#"<rect x="{:.0}" y="{:.0}" width="18" height="18" fill="{}"/>"#,
                legend_x, y, slice.color
            )?;
            writeln!(
                svg,
                r#"<text x="{:.0}" y="{:.0}" font-size="14">{}</text>"#,
                legend_x + 26.0,
                y + 14.0,
                escape_xml(&slice.label)
            )?;
        }
        Ok(())
    }
}

impl ChartRenderer for SvgPieRenderer {
    fn render(&self, chart: &ChartInput) -> Result<PathBuf> {
        let svg = self
            .build_svg(chart)
            .map_err(|e| SentimentError::Render(format!("failed to build chart: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SentimentError::Render(format!("{}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(&self.path, svg)
            .map_err(|e| SentimentError::Render(format!("{}: {}", self.path.display(), e)))?;

        if chart.is_empty() {
            tracing::warn!("No sentiment data; wrote placeholder chart to {}", self.path.display());
        } else {
            tracing::info!("Pie chart saved to {}", self.path.display());
        }
        Ok(self.path.clone())
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{fold, PolarityScore};
    use rust_decimal_macros::dec;

    fn result_for(values: &[f64]) -> AggregateResult {
        fold("rust", values.iter().map(|&v| PolarityScore::new(v).unwrap())).unwrap()
    }

    #[test]
    fn test_input_skips_zero_categories() {
        let input = ChartInput::from_result(&result_for(&[0.5, 0.5, -0.9]));
        assert_eq!(input.slices.len(), 2);
        assert_eq!(input.slices[0].category, SentimentCategory::StronglyNegative);
        assert_eq!(input.slices[0].label, "Strongly Negative [33.33%]");
        assert_eq!(input.slices[1].percentage, dec!(66.67));
        assert_eq!(input.title, "Sentiment Analysis for \"rust\" (3 tweets analyzed)");
    }

    #[test]
    fn test_render_pie() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("static/images/plot1.svg");
        let renderer = SvgPieRenderer::new(&path);

        let input = ChartInput::from_result(&result_for(&[0.0, 0.2, 0.5, 0.8, -0.1, -0.4, -0.7]));
        let written = renderer.render(&input).unwrap();
        assert_eq!(written, path);

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 7);
        assert!(svg.contains("Weakly Positive [14.29%]"));
        assert!(svg.contains("&quot;rust&quot;"));
        assert!(!svg.contains("No sentiment data available"));
    }

    #[test]
    fn test_single_category_draws_full_circle() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgPieRenderer::new(dir.path().join("plot.svg"));
        let input = ChartInput::from_result(&result_for(&[0.0, 0.0]));

        renderer.render(&input).unwrap();
        let svg = std::fs::read_to_string(renderer.path()).unwrap();
        assert!(svg.contains("<circle"));
        assert!(svg.contains("Neutral [100.00%]"));
    }

    #[test]
    fn test_all_zero_renders_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgPieRenderer::new(dir.path().join("plot.svg"));
        let input = ChartInput::new(
            "empty",
            0,
            SentimentCategory::ALL.iter().map(|&c| (c, Decimal::ZERO)),
        );
        assert!(input.is_empty());

        renderer.render(&input).unwrap();
        let svg = std::fs::read_to_string(renderer.path()).unwrap();
        assert!(svg.contains("No sentiment data available"));
        assert!(svg.contains("- No Data"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_render_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgPieRenderer::new(dir.path().join("plot.svg"));

        renderer.render(&ChartInput::new("first", 0, Vec::new())).unwrap();
        renderer
            .render(&ChartInput::from_result(&result_for(&[0.9])))
            .unwrap();

        let svg = std::fs::read_to_string(renderer.path()).unwrap();
        assert!(!svg.contains("No sentiment data available"));
        assert!(svg.contains("Strongly Positive [100.00%]"));
    }

    #[test]
    fn test_render_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SvgPieRenderer::new(dir.path())
            .render(&ChartInput::new("x", 0, Vec::new()))
            .unwrap_err();
        assert!(matches!(err, SentimentError::Render(_)));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
