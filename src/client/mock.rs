//! Mock analysis backend client for testing
//!
//! Provides a mock implementation of [`AnalyzerApi`] for unit testing
//! without making real backend calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::AnalyzerApi;
use super::models::{
    AnalysisResult, AnalyzeRequest, BatchEndpoint, CapturedRequest, CurlExport, DiscoveredEndpoint,
    DocsResponse, ExportFormat, ExportPayload, GeneratedDocs,
};
use crate::error::{ApiError, Result};

/// Mock backend client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAnalyzerClient::new()
///     .with_captured(vec![CapturedRequest { url: Some("https://a".into()), ..Default::default() }])
///     .await;
///
/// let captured = mock.list_captured().await?;
/// assert_eq!(captured.len(), 1);
/// ```
#[derive(Default)]
pub struct MockAnalyzerClient {
    /// Result to return from analyze
    analysis: Arc<Mutex<AnalysisResult>>,
    /// Results to return from batch_analyze
    batch_results: Arc<Mutex<Vec<AnalysisResult>>>,
    /// Endpoints to return from discover
    discovered: Arc<Mutex<Vec<DiscoveredEndpoint>>>,
    /// Captured requests to return from list_captured
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Blob to return from a JSON export
    export_blob: Arc<Mutex<serde_json::Value>>,
    /// Commands to return from a curl export
    curl_commands: Arc<Mutex<Vec<String>>>,
    /// Response to return from generate_docs
    docs: Arc<Mutex<Option<DocsResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by every list_captured call while set
    captured_error: Arc<Mutex<Option<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Analyze requests received, in order
    analyze_requests: Arc<Mutex<Vec<AnalyzeRequest>>>,
}

/// Tracks backend call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub analyze: usize,
    pub batch_analyze: usize,
    pub discover: usize,
    pub list_captured: usize,
    pub clear_captured: usize,
    pub export: usize,
    pub generate_docs: usize,
}

impl CallCounts {
    /// Get total number of backend calls made.
    pub fn total(&self) -> usize {
        self.analyze
            + self.batch_analyze
            + self.discover
            + self.list_captured
            + self.clear_captured
            + self.export
            + self.generate_docs
    }
}

impl MockAnalyzerClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the result returned by analyze.
    pub async fn with_analysis(self, result: AnalysisResult) -> Self {
        *self.analysis.lock().await = result;
        self
    }

    /// Configure the results returned by batch_analyze.
    pub async fn with_batch_results(self, results: Vec<AnalysisResult>) -> Self {
        *self.batch_results.lock().await = results;
        self
    }

    /// Configure the endpoints returned by discover.
    pub async fn with_discovered(self, endpoints: Vec<DiscoveredEndpoint>) -> Self {
        *self.discovered.lock().await = endpoints;
        self
    }

    /// Configure the captured requests returned by list_captured.
    pub async fn with_captured(self, captured: Vec<CapturedRequest>) -> Self {
        *self.captured.lock().await = captured;
        self
    }

    /// Configure the curl commands returned by a curl export.
    pub async fn with_curl_commands(self, commands: Vec<String>) -> Self {
        *self.curl_commands.lock().await = commands;
        self
    }

    /// Configure the blob returned by a JSON export.
    pub async fn with_export_blob(self, blob: serde_json::Value) -> Self {
        *self.export_blob.lock().await = blob;
        self
    }

    /// Configure the response returned by generate_docs.
    pub async fn with_docs(self, docs: DocsResponse) -> Self {
        *self.docs.lock().await = Some(docs);
        self
    }

    /// Configure an error to return on the next backend call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Replace the captured list while the mock is shared.
    pub async fn set_captured(&self, captured: Vec<CapturedRequest>) {
        *self.captured.lock().await = captured;
    }

    /// Make every list_captured call fail until cleared with `None`.
    pub async fn set_captured_error(&self, message: Option<&str>) {
        *self.captured_error.lock().await = message.map(str::to_string);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all analyze requests received.
    pub async fn analyze_requests(&self) -> Vec<AnalyzeRequest> {
        self.analyze_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyzerApi for MockAnalyzerClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.call_count.lock().await.analyze += 1;
        self.check_error().await?;

        self.analyze_requests.lock().await.push(request.clone());
        Ok(self.analysis.lock().await.clone())
    }

    async fn batch_analyze(&self, _endpoints: &[BatchEndpoint]) -> Result<Vec<AnalysisResult>> {
        self.call_count.lock().await.batch_analyze += 1;
        self.check_error().await?;

        Ok(self.batch_results.lock().await.clone())
    }

    async fn discover(&self, _base_url: &str) -> Result<Vec<DiscoveredEndpoint>> {
        self.call_count.lock().await.discover += 1;
        self.check_error().await?;

        Ok(self.discovered.lock().await.clone())
    }

    async fn list_captured(&self) -> Result<Vec<CapturedRequest>> {
        self.call_count.lock().await.list_captured += 1;
        self.check_error().await?;

        if let Some(message) = self.captured_error.lock().await.clone() {
            return Err(ApiError::Network(message).into());
        }

        Ok(self.captured.lock().await.clone())
    }

    async fn clear_captured(&self) -> Result<()> {
        self.call_count.lock().await.clear_captured += 1;
        self.check_error().await?;

        self.captured.lock().await.clear();
        Ok(())
    }

    async fn export(&self, format: ExportFormat) -> Result<ExportPayload> {
        self.call_count.lock().await.export += 1;
        self.check_error().await?;

        Ok(match format {
            ExportFormat::Json => ExportPayload::Json(self.export_blob.lock().await.clone()),
            ExportFormat::Curl => ExportPayload::Curl(CurlExport {
                curl_commands: self.curl_commands.lock().await.clone(),
            }),
        })
    }

    async fn generate_docs(&self) -> Result<DocsResponse> {
        self.call_count.lock().await.generate_docs += 1;
        self.check_error().await?;

        Ok(self
            .docs
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| DocsResponse::Docs(GeneratedDocs::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_captured() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![CapturedRequest {
                url: Some("https://api.example.com".to_string()),
                ..Default::default()
            }])
            .await;

        let captured = mock.list_captured().await.unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(mock.call_counts().await.list_captured, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockAnalyzerClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.discover("https://a").await.is_err());
        assert!(mock.discover("https://a").await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_clear_empties_captured() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![CapturedRequest::default()])
            .await;

        mock.clear_captured().await.unwrap();
        assert!(mock.list_captured().await.unwrap().is_empty());
    }
}
