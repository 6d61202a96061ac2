//! HTTP implementation of the analysis backend client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::AnalyzerApi;
use super::models::{
    AnalysisResult, AnalyzeRequest, BatchEndpoint, BatchRequest, BatchResponse, CapturedRequest,
    CapturedResponse, CurlExport, DiscoverRequest, DiscoverResponse, DiscoveredEndpoint,
    DocsResponse, ExportFormat, ExportPayload, ExportRequest,
};
use crate::error::{ApiError, Error, Result};

/// Client for the analysis backend's JSON API
pub struct AnalyzerClient {
    http: HttpClient,
    base_url: String,
}

impl AnalyzerClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// `timeout` bounds each request at the transport level; `None` leaves
    /// requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the body of a successful response
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        debug!("{} -> {} ({} bytes)", path, status, text.len());

        match status {
            s if s.is_success() => Ok(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Err(ApiError::BadRequest(
                backend_error_message(&text).unwrap_or_else(|| "Bad request".to_string()),
            )
            .into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            s if s.is_server_error() => Err(ApiError::ServerError(
                backend_error_message(&text).unwrap_or_else(|| format!("Server error: {}", s)),
            )
            .into()),
            s => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", s)).into()),
        }
    }

    /// Send a request and decode the JSON response body
    async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

/// Pull the `error` message out of a backend error body, if there is one
fn backend_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
}

#[async_trait]
impl AnalyzerApi for AnalyzerClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.request(Method::POST, "/api/analyze", Some(request))
            .await
    }

    async fn batch_analyze(&self, endpoints: &[BatchEndpoint]) -> Result<Vec<AnalysisResult>> {
        let body = BatchRequest {
            endpoints: endpoints.to_vec(),
        };
        let response: BatchResponse = self
            .request(Method::POST, "/api/batch-analyze", Some(&body))
            .await?;
        Ok(response.results)
    }

    async fn discover(&self, base_url: &str) -> Result<Vec<DiscoveredEndpoint>> {
        let body = DiscoverRequest {
            url: base_url.to_string(),
        };
        let response: DiscoverResponse = self
            .request(Method::POST, "/api/discover", Some(&body))
            .await?;
        Ok(response.discovered)
    }

    async fn list_captured(&self) -> Result<Vec<CapturedRequest>> {
        let response: CapturedResponse = self
            .request(Method::GET, "/api/captured", None::<&()>)
            .await?;
        Ok(response.requests)
    }

    async fn clear_captured(&self) -> Result<()> {
        self.send(Method::POST, "/api/clear-captured", None::<&()>)
            .await?;
        Ok(())
    }

    async fn export(&self, format: ExportFormat) -> Result<ExportPayload> {
        let body = ExportRequest { format };
        match format {
            ExportFormat::Json => {
                let blob: Value = self.request(Method::POST, "/api/export", Some(&body)).await?;
                Ok(ExportPayload::Json(blob))
            }
            ExportFormat::Curl => {
                let curl: CurlExport = self.request(Method::POST, "/api/export", Some(&body)).await?;
                Ok(ExportPayload::Curl(curl))
            }
        }
    }

    async fn generate_docs(&self) -> Result<DocsResponse> {
        // The backend answers 400 with {error} when nothing has been captured
        let response: Result<DocsResponse> = self
            .request(Method::POST, "/api/generate-docs", None::<&()>)
            .await;
        match response {
            Err(Error::Api(ApiError::BadRequest(message))) => {
                Ok(DocsResponse::Error { error: message })
            }
            other => other,
        }
    }
}
