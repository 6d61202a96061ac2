//! Application orchestrator
//!
//! One method per user action. Each validates its input, dispatches the
//! backend call under the loading indicator, renders the outcome into its
//! view region, and hands the typed result back to the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::client::{
    AnalysisResult, AnalyzerApi, DiscoveredEndpoint, DocsResponse, ExportFormat,
};
use crate::dispatch::{Dispatcher, Operation};
use crate::downloads::Download;
use crate::error::Result;
use crate::forms::{BatchForm, DiscoveryForm, SingleRequestForm};
use crate::refresher;
use crate::render;
use crate::state::{Region, SharedState, Tab, TabSwitch};

/// Behavior switches taken from configuration
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Refresh the captured mirror after analyze and batch analyze
    pub refresh_after_analyze: bool,
    /// Where downloads are saved
    pub download_dir: PathBuf,
}

pub struct App<C: AnalyzerApi> {
    client: Arc<C>,
    dispatcher: Dispatcher,
    state: SharedState,
    options: AppOptions,
}

impl<C: AnalyzerApi> App<C> {
    pub fn new(
        client: Arc<C>,
        dispatcher: Dispatcher,
        state: SharedState,
        options: AppOptions,
    ) -> Self {
        Self {
            client,
            dispatcher,
            state,
            options,
        }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn download_dir(&self) -> &Path {
        &self.options.download_dir
    }

    /// Analyze a single endpoint
    pub async fn analyze(&self, form: SingleRequestForm) -> Result<AnalysisResult> {
        let request = form.into_request()?;
        self.state
            .write()
            .await
            .set_single_request_url(request.url.clone());

        let result = self
            .dispatcher
            .dispatch(Operation::Analyze, self.client.analyze(&request))
            .await?;

        self.set_view(Region::AnalysisResults, render::render_analysis(&result))
            .await;
        self.refresh_after_analyze().await;

        Ok(result)
    }

    /// Analyze every endpoint of a batch in one backend call
    pub async fn batch_analyze(&self, form: BatchForm) -> Result<Vec<AnalysisResult>> {
        let endpoints = form.into_endpoints()?;

        let results = self
            .dispatcher
            .dispatch(
                Operation::BatchAnalyze,
                self.client.batch_analyze(&endpoints),
            )
            .await?;

        self.set_view(Region::BatchResults, render::render_batch(&results))
            .await;
        self.refresh_after_analyze().await;

        Ok(results)
    }

    /// Probe common paths under a base URL
    pub async fn discover(&self, form: DiscoveryForm) -> Result<Vec<DiscoveredEndpoint>> {
        let base_url = form.into_base_url()?;

        let discovered = self
            .dispatcher
            .dispatch(Operation::Discover, self.client.discover(&base_url))
            .await?;

        self.set_view(
            Region::DiscoveryResults,
            render::render_discovery(&discovered),
        )
        .await;

        Ok(discovered)
    }

    /// Seed the single-request form with a discovered URL and show that tab.
    ///
    /// No request is sent.
    pub async fn analyze_discovered(&self, url: &str) {
        let mut state = self.state.write().await;
        state.set_single_request_url(url);
        state.switch_tab(Tab::SingleRequest);
    }

    /// Make `tab` visible, refreshing the captured list when it is that tab.
    ///
    /// A failed refresh is logged; the tab switch still happens.
    pub async fn show_tab(&self, tab: Tab) -> TabSwitch {
        let switch = self.state.write().await.switch_tab(tab);

        if switch.refresh_captured
            && let Err(e) = self.refresh_captured().await
        {
            warn!("Captured refresh on tab switch failed: {}", e);
        }

        switch
    }

    /// Fetch the captured list now
    pub async fn refresh_captured(&self) -> Result<usize> {
        refresher::refresh_captured(self.client.as_ref(), &self.state).await
    }

    /// Clear captured requests on the backend and empty the local mirror.
    ///
    /// The list is fetched once more afterwards, since a poll that started
    /// before the clear may land after it.
    pub async fn clear_captured(&self) -> Result<()> {
        self.dispatcher
            .dispatch(Operation::ClearCaptured, self.client.clear_captured())
            .await?;

        {
            let mut state = self.state.write().await;
            state.clear_captured();
            state.set_view(Region::CapturedList, render::render_captured(&[]));
        }

        if let Err(e) = self.refresh_captured().await {
            warn!("Captured refresh after clear failed: {}", e);
        }

        Ok(())
    }

    /// Export captured data as an in-memory download
    pub async fn export(&self, format: ExportFormat) -> Result<Download> {
        let payload = self
            .dispatcher
            .dispatch(Operation::Export, self.client.export(format))
            .await?;

        Download::from_export(&payload)
    }

    /// Generate documentation from captured requests.
    ///
    /// A backend-reported error is rendered inline and returned as
    /// [`DocsResponse::Error`].
    pub async fn generate_docs(&self) -> Result<DocsResponse> {
        let response = self
            .dispatcher
            .dispatch(Operation::GenerateDocs, self.client.generate_docs())
            .await?;

        self.set_view(
            Region::GeneratedDocs,
            render::render_docs_response(&response),
        )
        .await;

        Ok(response)
    }

    /// Save a download into the configured directory
    pub fn save(&self, download: &Download) -> Result<PathBuf> {
        download.save(&self.options.download_dir)
    }

    /// Render the whole page from current state
    pub async fn page(&self) -> String {
        render::render_page(&*self.state.read().await)
    }

    async fn set_view(&self, region: Region, html: String) {
        self.state.write().await.set_view(region, html);
    }

    async fn refresh_after_analyze(&self) {
        if !self.options.refresh_after_analyze {
            return;
        }
        match self.refresh_captured().await {
            Ok(count) => debug!("Captured list refreshed after analyze: {} requests", count),
            Err(e) => warn!("Captured refresh after analyze failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CapturedRequest, GeneratedDocs, MockAnalyzerClient};
    use crate::dispatch::testing::CountingIndicator;
    use crate::error::{ApiError, Error, ValidationError};
    use crate::state::AppState;
    use serde_json::json;
    use tempfile::TempDir;

    fn app_with(
        mock: MockAnalyzerClient,
        options: AppOptions,
    ) -> (App<MockAnalyzerClient>, CountingIndicator) {
        let indicator = CountingIndicator::default();
        let app = App::new(
            Arc::new(mock),
            Dispatcher::new(Box::new(indicator.clone())),
            AppState::shared(),
            options,
        );
        (app, indicator)
    }

    fn app(mock: MockAnalyzerClient) -> (App<MockAnalyzerClient>, CountingIndicator) {
        app_with(mock, AppOptions::default())
    }

    fn capture(url: &str) -> CapturedRequest {
        CapturedRequest {
            url: Some(url.to_string()),
            status_code: Some(200),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_analyze_renders_result() {
        let mock = MockAnalyzerClient::new()
            .with_analysis(AnalysisResult {
                url: Some("https://api.example.com/posts".to_string()),
                status_code: Some(200),
                ..Default::default()
            })
            .await;
        let (app, indicator) = app(mock);

        let result = app
            .analyze(SingleRequestForm::new("https://api.example.com/posts"))
            .await
            .unwrap();

        assert_eq!(result.status_code, Some(200));
        assert_eq!(indicator.shows(), 1);
        assert!(!indicator.is_visible());

        let state = app.state().read().await;
        assert!(
            state
                .view(Region::AnalysisResults)
                .unwrap()
                .contains("bg-success")
        );
        assert_eq!(state.single_request_url(), "https://api.example.com/posts");
    }

    #[tokio::test]
    async fn test_validation_failures_make_no_calls() {
        let (app, indicator) = app(MockAnalyzerClient::new());

        let err = app.analyze(SingleRequestForm::new("")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingUrl)
        ));
        assert!(app.batch_analyze(BatchForm::new("")).await.is_err());
        assert!(app.batch_analyze(BatchForm::new("{")).await.is_err());
        assert!(app.discover(DiscoveryForm::new(" ")).await.is_err());

        assert_eq!(app.client().call_counts().await.total(), 0);
        assert_eq!(indicator.shows(), 0);
    }

    #[tokio::test]
    async fn test_analyze_does_not_refresh_by_default() {
        let (app, _) = app(MockAnalyzerClient::new());

        app.analyze(SingleRequestForm::new("https://a")).await.unwrap();

        assert_eq!(app.client().call_counts().await.list_captured, 0);
    }

    #[tokio::test]
    async fn test_analyze_refreshes_when_enabled() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![capture("https://a")])
            .await;
        let (app, _) = app_with(
            mock,
            AppOptions {
                refresh_after_analyze: true,
                ..Default::default()
            },
        );

        app.analyze(SingleRequestForm::new("https://a")).await.unwrap();

        assert_eq!(app.client().call_counts().await.list_captured, 1);
        assert_eq!(app.state().read().await.captured().len(), 1);
    }

    #[tokio::test]
    async fn test_batch_renders_summary() {
        let mock = MockAnalyzerClient::new()
            .with_batch_results(vec![
                AnalysisResult {
                    status_code: Some(200),
                    response_time_ms: Some(10.0),
                    ..Default::default()
                },
                AnalysisResult {
                    error: Some("timeout".to_string()),
                    ..Default::default()
                },
            ])
            .await;
        let (app, _) = app(mock);

        let results = app
            .batch_analyze(BatchForm::new(r#"[{"url": "https://a"}, {"url": "https://b"}]"#))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        let state = app.state().read().await;
        assert!(
            state
                .view(Region::BatchResults)
                .unwrap()
                .contains("(2 endpoints)")
        );
    }

    #[tokio::test]
    async fn test_rejected_call_hides_indicator_and_keeps_view() {
        let mock = MockAnalyzerClient::new()
            .with_error(ApiError::Network("Connection refused".to_string()))
            .await;
        let (app, indicator) = app(mock);

        let err = app
            .discover(DiscoveryForm::new("https://a"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error discovering endpoints: Network error: Connection refused"
        );
        assert!(!indicator.is_visible());
        assert!(
            app.state()
                .read()
                .await
                .view(Region::DiscoveryResults)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_analyze_discovered_switches_tab_without_request() {
        let (app, _) = app(MockAnalyzerClient::new());
        app.show_tab(Tab::Discovery).await;

        app.analyze_discovered("https://api.example.com/v1").await;

        let state = app.state().read().await;
        assert_eq!(state.active_tab(), Tab::SingleRequest);
        assert_eq!(state.single_request_url(), "https://api.example.com/v1");
        drop(state);
        assert_eq!(app.client().call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_captured_tab_forces_refresh() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![capture("https://a")])
            .await;
        let (app, _) = app(mock);

        app.show_tab(Tab::Documentation).await;
        assert_eq!(app.client().call_counts().await.list_captured, 0);

        let switch = app.show_tab(Tab::CapturedRequests).await;
        assert!(switch.refresh_captured);
        assert_eq!(app.client().call_counts().await.list_captured, 1);
    }

    #[tokio::test]
    async fn test_captured_tab_switch_survives_refresh_failure() {
        let (app, _) = app(MockAnalyzerClient::new());
        app.client().set_captured_error(Some("down")).await;

        app.show_tab(Tab::CapturedRequests).await;

        assert_eq!(app.state().read().await.active_tab(), Tab::CapturedRequests);
    }

    #[tokio::test]
    async fn test_clear_empties_mirror() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![capture("https://a")])
            .await;
        let (app, _) = app(mock);
        app.refresh_captured().await.unwrap();

        app.clear_captured().await.unwrap();

        let state = app.state().read().await;
        assert!(state.captured().is_empty());
        assert!(
            state
                .view(Region::CapturedList)
                .unwrap()
                .contains("No requests captured yet")
        );
    }

    #[tokio::test]
    async fn test_clear_refetches_once() {
        let mock = MockAnalyzerClient::new()
            .with_captured(vec![capture("https://a")])
            .await;
        let (app, _) = app(mock);
        app.refresh_captured().await.unwrap();

        // stale data from a poll that completed before the clear
        app.state()
            .write()
            .await
            .replace_captured(vec![capture("https://stale")]);

        app.clear_captured().await.unwrap();

        let counts = app.client().call_counts().await;
        assert_eq!(counts.clear_captured, 1);
        assert_eq!(counts.list_captured, 2);
        assert!(app.state().read().await.captured().is_empty());
    }

    #[tokio::test]
    async fn test_clear_succeeds_when_refetch_fails() {
        let (app, _) = app(MockAnalyzerClient::new());
        app.client().set_captured_error(Some("Connection refused")).await;

        app.clear_captured().await.unwrap();

        let state = app.state().read().await;
        assert!(state.captured().is_empty());
        assert!(
            state
                .view(Region::CapturedList)
                .unwrap()
                .contains("No requests captured yet")
        );
    }

    #[tokio::test]
    async fn test_export_and_save() {
        let temp = TempDir::new().unwrap();
        let mock = MockAnalyzerClient::new()
            .with_export_blob(json!({"total_requests": 0, "data": []}))
            .await;
        let (app, _) = app_with(
            mock,
            AppOptions {
                download_dir: temp.path().to_path_buf(),
                ..Default::default()
            },
        );

        let download = app.export(ExportFormat::Json).await.unwrap();
        let path = app.save(&download).unwrap();

        assert_eq!(path, temp.path().join("api-analysis-export.json"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_curl_export_joins_commands() {
        let mock = MockAnalyzerClient::new()
            .with_curl_commands(vec![
                "curl -X GET 'https://a'".to_string(),
                "curl -X POST 'https://b'".to_string(),
            ])
            .await;
        let (app, indicator) = app(mock);

        let download = app.export(ExportFormat::Curl).await.unwrap();

        assert_eq!(download.filename, "api-curl-commands.txt");
        assert_eq!(
            String::from_utf8(download.bytes).unwrap(),
            "curl -X GET 'https://a'\n\ncurl -X POST 'https://b'"
        );
        assert_eq!(indicator.shows(), indicator.hides());
    }

    #[tokio::test]
    async fn test_discover_renders_cards() {
        let mock = MockAnalyzerClient::new()
            .with_discovered(vec![DiscoveredEndpoint {
                url: "https://api.example.com/api/v1".to_string(),
                status_code: Some(200),
                ..Default::default()
            }])
            .await;
        let (app, _) = app(mock);

        let discovered = app
            .discover(DiscoveryForm::new("https://api.example.com"))
            .await
            .unwrap();

        assert_eq!(discovered.len(), 1);
        let view = app
            .state()
            .read()
            .await
            .view(Region::DiscoveryResults)
            .unwrap()
            .to_string();
        assert!(view.contains("data-url=\"https://api.example.com/api/v1\""));
    }

    #[tokio::test]
    async fn test_docs_error_is_inline() {
        let mock = MockAnalyzerClient::new()
            .with_docs(DocsResponse::Error {
                error: "No captured requests to document".to_string(),
            })
            .await;
        let (app, _) = app(mock);

        let response = app.generate_docs().await.unwrap();

        assert!(matches!(response, DocsResponse::Error { .. }));
        assert!(
            app.state()
                .read()
                .await
                .view(Region::GeneratedDocs)
                .unwrap()
                .contains("No captured requests to document")
        );
    }

    #[tokio::test]
    async fn test_docs_rendered() {
        let mock = MockAnalyzerClient::new()
            .with_docs(DocsResponse::Docs(GeneratedDocs {
                title: "API Docs".to_string(),
                ..Default::default()
            }))
            .await;
        let (app, _) = app(mock);

        app.generate_docs().await.unwrap();

        assert!(app.page().await.contains("<h5>API Docs</h5>"));
    }
}
