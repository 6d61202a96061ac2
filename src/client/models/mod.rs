//! Analysis backend data models
//!
//! Types exchanged with the analysis backend, organized by operation.
//! Every response field is optional on the wire and falls back to a serde
//! default so the renderers never have to deal with missing keys.

use serde::{Deserialize, Deserializer};

mod analysis;
mod captured;
mod discovery;
mod docs;
mod export;
mod request;

pub use analysis::{AnalysisResult, BatchResponse, DataType, PatternInfo, SecurityInfo};
pub use captured::{CapturedRequest, CapturedResponse};
pub use discovery::{DiscoverResponse, DiscoveredEndpoint};
pub use docs::{DocEndpoint, DocSecurity, DocsResponse, GeneratedDocs};
pub use export::{CurlExport, ExportFormat, ExportPayload};
pub use request::{AnalyzeRequest, BatchEndpoint, BatchRequest, DiscoverRequest, ExportRequest};

/// Deserialize an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; the backend also sends
/// `null` for fields it could not fill.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
