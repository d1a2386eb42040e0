//! Transaction source boundary.
//!
//! The dashboard never fetches data itself; it consumes an already-resolved
//! payload through this trait. The default implementation reads the JSON
//! payload from disk.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::CoreError;
use super::models::TransactionsPayload;

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSource>;

/// A collaborator that resolves the transactions payload
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch the payload. Failures are fatal to the caller; the filter
    /// engine does not retry or degrade.
    async fn fetch(&self) -> Result<TransactionsPayload, CoreError>;
}

/// Reads the payload from a JSON file on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given payload file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    async fn fetch(&self) -> Result<TransactionsPayload, CoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::Fetch {
                message: format!("{}: {}", self.path.display(), e),
            })?;

        serde_json::from_str(&content).map_err(|e| CoreError::InvalidFormat {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let source = JsonFileSource::new(PathBuf::from("/nonexistent/transactions.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CoreError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_format_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("paydash-test-malformed.json");
        tokio::fs::write(&path, "{\"transactions\": 42}").await.unwrap();

        let source = JsonFileSource::new(path.clone());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormat { .. }));

        let _ = tokio::fs::remove_file(path).await;
    }
}
