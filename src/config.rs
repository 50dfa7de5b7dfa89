//! Configuration management

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Placeholder shipped in sample configs; treated as "not configured"
pub const PLACEHOLDER_BEARER_TOKEN: &str = "YOUR_BEARER_TOKEN_HERE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub twitter: TwitterConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// API base URL
    pub base_url: String,
    /// Bearer token for the v2 recent search endpoint
    pub bearer_token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language filter appended to every query
    pub language: String,
    /// Append `-is:retweet` to every query
    pub exclude_retweets: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound on requested items per run
    pub max_items: usize,
    /// Log a progress line every N processed items
    pub progress_every: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Per-item CSV export
    pub csv_path: PathBuf,
    /// Pie chart artifact
    pub chart_path: PathBuf,
}

impl Config {
    /// Load configuration from file, then `SENTIMENT_*` environment overrides.
    /// A missing file falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let expanded = shellexpand::tilde(&path.as_ref().to_string_lossy()).into_owned();

        let settings = config::Config::builder()
            .add_source(config::File::from(Path::new(&expanded)).required(false))
            .add_source(
                config::Environment::with_prefix("SENTIMENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = [
            "config.toml",
            "config.yaml",
            "~/.config/tweet-sentiment/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Self::load("config.toml")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.analysis.max_items == 0 {
            anyhow::bail!("analysis.max_items must be positive");
        }
        if self.analysis.progress_every == 0 {
            anyhow::bail!("analysis.progress_every must be positive");
        }
        Ok(())
    }
}

impl TwitterConfig {
    /// True when the token is missing or still the sample placeholder
    pub fn has_placeholder_token(&self) -> bool {
        let token = self.bearer_token.trim();
        token.is_empty() || token == PLACEHOLDER_BEARER_TOKEN
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com".to_string(),
            bearer_token: PLACEHOLDER_BEARER_TOKEN.to_string(),
            timeout_secs: 30,
            language: "en".to_string(),
            exclude_retweets: false,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_items: 1000,
            progress_every: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("result.csv"),
            chart_path: PathBuf::from("static/images/plot1.svg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analysis.max_items, 1000);
        assert_eq!(config.analysis.progress_every, 10);
        assert_eq!(config.output.csv_path, PathBuf::from("result.csv"));
        assert!(config.twitter.has_placeholder_token());
        assert!(!config.twitter.exclude_retweets);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.twitter.base_url, "https://api.twitter.com");
        assert_eq!(config.twitter.timeout_secs, 30);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[twitter]\nbearer_token = \"abc123\"\nexclude_retweets = true\n\n[analysis]\nmax_items = 250"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.twitter.bearer_token, "abc123");
        assert!(!config.twitter.has_placeholder_token());
        assert!(config.twitter.exclude_retweets);
        assert_eq!(config.analysis.max_items, 250);
        // untouched sections keep defaults
        assert_eq!(config.analysis.progress_every, 10);
        assert_eq!(config.output.chart_path, PathBuf::from("static/images/plot1.svg"));
    }

    #[test]
    fn test_zero_max_items_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\nmax_items = 0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_placeholder_detection() {
        let mut twitter = TwitterConfig::default();
        assert!(twitter.has_placeholder_token());
        twitter.bearer_token = "   ".to_string();
        assert!(twitter.has_placeholder_token());
        twitter.bearer_token = "real-token".to_string();
        assert!(!twitter.has_placeholder_token());
    }
}
