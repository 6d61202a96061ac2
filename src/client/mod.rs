//! Analysis backend client

use async_trait::async_trait;

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use http::AnalyzerClient;
#[cfg(test)]
pub use mock::MockAnalyzerClient;
pub use models::{
    AnalysisResult, AnalyzeRequest, BatchEndpoint, CapturedRequest, DiscoveredEndpoint,
    DocsResponse, ExportFormat, ExportPayload, GeneratedDocs,
};

/// Operations offered by the analysis backend.
///
/// Every method is a single attempt; retrying is left to the caller.
#[async_trait]
pub trait AnalyzerApi: Send + Sync {
    /// Probe one endpoint (`POST /api/analyze`)
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult>;

    /// Probe several endpoints in one call (`POST /api/batch-analyze`)
    async fn batch_analyze(&self, endpoints: &[BatchEndpoint]) -> Result<Vec<AnalysisResult>>;

    /// Probe common paths under a base URL (`POST /api/discover`)
    async fn discover(&self, base_url: &str) -> Result<Vec<DiscoveredEndpoint>>;

    /// Fetch every captured request (`GET /api/captured`)
    async fn list_captured(&self) -> Result<Vec<CapturedRequest>>;

    /// Drop all captured requests on the backend (`POST /api/clear-captured`)
    async fn clear_captured(&self) -> Result<()>;

    /// Export captured data (`POST /api/export`)
    async fn export(&self, format: ExportFormat) -> Result<ExportPayload>;

    /// Build documentation from captured requests (`POST /api/generate-docs`).
    ///
    /// A backend-reported `{error}` is returned as [`DocsResponse::Error`],
    /// not as an `Err`.
    async fn generate_docs(&self) -> Result<DocsResponse>;
}
