//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::SentimentError;

    #[test]
    fn test_configuration_error() {
        let err = SentimentError::Configuration("Missing bearer token".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Missing bearer token"));
    }

    #[test]
    fn test_auth_error() {
        let err = SentimentError::Authentication("Unauthorized".to_string());
        assert!(err.to_string().contains("Authentication error"));
    }

    #[test]
    fn test_rate_limited() {
        let err = SentimentError::RateLimited { retry_after_secs: 900 };
        let msg = err.to_string();
        assert!(msg.contains("Rate limited"));
        assert!(msg.contains("900"));
    }

    #[test]
    fn test_search_error() {
        let err = SentimentError::Search("HTTP 503".to_string());
        assert!(err.to_string().contains("Search error"));
    }

    #[test]
    fn test_empty_input_error() {
        let err = SentimentError::EmptyInput("no tweets for 'xyzzy'".to_string());
        assert!(err.to_string().contains("No items to analyze"));
        assert!(err.to_string().contains("xyzzy"));
    }

    #[test]
    fn test_invalid_polarity() {
        let err = SentimentError::InvalidPolarity(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_export_error() {
        let err = SentimentError::Export("permission denied".to_string());
        assert!(err.to_string().contains("Export error"));
    }

    #[test]
    fn test_render_error() {
        let err = SentimentError::Render("font missing".to_string());
        assert!(err.to_string().contains("Render error"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: SentimentError = io.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = SentimentError::Search("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Search"));
    }

    #[test]
    fn test_error_variants_distinct() {
        let search = SentimentError::Search("test".to_string());
        let auth = SentimentError::Authentication("test".to_string());

        // They have different Display outputs
        assert_ne!(search.to_string(), auth.to_string());
    }
}
