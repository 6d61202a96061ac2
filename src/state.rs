//! Application state: captured mirror, active tab, form fields, rendered views

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::CapturedRequest;

/// State shared between user actions and the polling refresher
pub type SharedState = Arc<RwLock<AppState>>;

/// Named panels; exactly one is visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tab {
    SingleRequest,
    BatchAnalysis,
    Discovery,
    CapturedRequests,
    Documentation,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::SingleRequest,
        Tab::BatchAnalysis,
        Tab::Discovery,
        Tab::CapturedRequests,
        Tab::Documentation,
    ];

    /// Element id of the panel
    pub fn id(self) -> &'static str {
        match self {
            Tab::SingleRequest => "single-request",
            Tab::BatchAnalysis => "batch-analysis",
            Tab::Discovery => "discovery",
            Tab::CapturedRequests => "captured-requests",
            Tab::Documentation => "documentation",
        }
    }

    /// Label shown in the tab bar
    pub fn label(self) -> &'static str {
        match self {
            Tab::SingleRequest => "Single Request",
            Tab::BatchAnalysis => "Batch Analysis",
            Tab::Discovery => "Discovery",
            Tab::CapturedRequests => "Captured Requests",
            Tab::Documentation => "Documentation",
        }
    }

    /// View regions rendered inside this tab's panel
    pub fn regions(self) -> &'static [Region] {
        match self {
            Tab::SingleRequest => &[Region::AnalysisResults],
            Tab::BatchAnalysis => &[Region::BatchResults],
            Tab::Discovery => &[Region::DiscoveryResults],
            Tab::CapturedRequests => &[Region::CapturedList],
            Tab::Documentation => &[Region::GeneratedDocs],
        }
    }

    /// Whether activating this tab forces a captured-request refresh
    pub fn refreshes_captured(self) -> bool {
        matches!(self, Tab::CapturedRequests)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Areas of the page that hold a rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    AnalysisResults,
    BatchResults,
    DiscoveryResults,
    CapturedList,
    GeneratedDocs,
}

impl Region {
    /// Element id of the region container
    pub fn id(self) -> &'static str {
        match self {
            Region::AnalysisResults => "analysis-results",
            Region::BatchResults => "batch-results",
            Region::DiscoveryResults => "discovery-results",
            Region::CapturedList => "captured-list",
            Region::GeneratedDocs => "generated-docs",
        }
    }
}

/// Outcome of a tab switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch {
    pub previous: Tab,
    pub refresh_captured: bool,
}

/// Everything the UI layer keeps between actions.
///
/// The captured list is only ever replaced wholesale, never merged.
#[derive(Debug, Clone)]
pub struct AppState {
    captured: Vec<CapturedRequest>,
    active_tab: Tab,
    single_request_url: String,
    views: BTreeMap<Region, String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            captured: Vec::new(),
            active_tab: Tab::SingleRequest,
            single_request_url: String::new(),
            views: BTreeMap::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh state for sharing
    pub fn shared() -> SharedState {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn captured(&self) -> &[CapturedRequest] {
        &self.captured
    }

    /// Replace the captured mirror with the backend's full list
    pub fn replace_captured(&mut self, captured: Vec<CapturedRequest>) {
        self.captured = captured;
    }

    /// Empty the captured mirror
    pub fn clear_captured(&mut self) {
        self.replace_captured(Vec::new());
    }


    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Make `tab` the visible panel.
    ///
    /// The caller is responsible for acting on `refresh_captured`.
    pub fn switch_tab(&mut self, tab: Tab) -> TabSwitch {
        let previous = self.active_tab;
        self.active_tab = tab;
        TabSwitch {
            previous,
            refresh_captured: tab.refreshes_captured(),
        }
    }

    pub fn single_request_url(&self) -> &str {
        &self.single_request_url
    }

    pub fn set_single_request_url(&mut self, url: impl Into<String>) {
        self.single_request_url = url.into();
    }

    /// Rendered fragment for a region, if one has been rendered
    pub fn view(&self, region: Region) -> Option<&str> {
        self.views.get(&region).map(String::as_str)
    }

    pub fn set_view(&mut self, region: Region, html: String) {
        self.views.insert(region, html);
    }
}
