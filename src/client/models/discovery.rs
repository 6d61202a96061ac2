//! Endpoint discovery models

use serde::{Deserialize, Serialize};

/// A live endpoint found by probing common paths under a base URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscoveredEndpoint {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,

    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub status_code: Option<u16>,

    /// Probe method (HEAD for the stock crawler)
    #[serde(default)]
    pub method: Option<String>,
}

/// Response of the discover operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub discovered: Vec<DiscoveredEndpoint>,
}
