//! Unit tests for source module

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io::Write;

    #[test]
    fn test_raw_item_creation() {
        let item = RawItem::new("Rust 2024 edition is out").with_id("123");
        assert_eq!(item.id.as_deref(), Some("123"));
        assert_eq!(item.text, "Rust 2024 edition is out");
        assert!(item.author_id.is_none());
    }

    #[test]
    fn test_raw_item_serialization() {
        let item = RawItem::new("hello").with_id("9");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"id\":\"9\""));
        assert!(json.contains("\"text\":\"hello\""));
    }

    #[tokio::test]
    async fn test_static_source_filters_by_keyword() {
        let source = StaticSource::new(["I love Rust", "python is fine", "RUST all day"]);
        let items = source.fetch_items("rust", 10).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "I love Rust");
        assert_eq!(items[1].text, "RUST all day");
        assert_eq!(items[1].id.as_deref(), Some("static-3"));
    }

    #[tokio::test]
    async fn test_static_source_respects_count() {
        let source = StaticSource::new((0..50).map(|i| format!("rust post {}", i)));
        let items = source.fetch_items("rust", 5).await.unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].text, "rust post 4");
    }

    #[tokio::test]
    async fn test_static_source_no_match() {
        let source = StaticSource::new(["nothing relevant"]);
        let items = source.fetch_items("rust", 5).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(source.name(), "static");
    }

    #[tokio::test]
    async fn test_static_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rust is great\n\n   \nrust is slow to compile\nunrelated").unwrap();

        let source = StaticSource::from_file(file.path()).unwrap();
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());

        let items = source.fetch_items("rust", 10).await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_static_source_missing_file() {
        let err = StaticSource::from_file("/definitely/not/here.txt").err().unwrap();
        assert!(matches!(err, crate::error::SentimentError::Io(_)));
    }
}
