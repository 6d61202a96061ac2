//! In-memory file downloads
//!
//! Exports and generated docs are synthesized here and only touch the
//! filesystem when saved.

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::client::models::{CurlExport, ExportPayload, GeneratedDocs};
use crate::error::Result;

pub const EXPORT_JSON_FILENAME: &str = "api-analysis-export.json";
pub const EXPORT_CURL_FILENAME: &str = "api-curl-commands.txt";
pub const DOCS_FILENAME: &str = "api-documentation.json";

/// A named blob ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Pretty-printed JSON document (two-space indent)
    pub fn json<T: Serialize + ?Sized>(value: &T, filename: &str) -> Result<Self> {
        Ok(Self {
            filename: filename.to_string(),
            mime: "application/json",
            bytes: serde_json::to_vec_pretty(value)?,
        })
    }

    pub fn text(text: impl Into<String>, filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            mime: "text/plain",
            bytes: text.into().into_bytes(),
        }
    }

    /// Download for an export result, named by its format
    pub fn from_export(payload: &ExportPayload) -> Result<Self> {
        match payload {
            ExportPayload::Json(blob) => Self::json(blob, EXPORT_JSON_FILENAME),
            ExportPayload::Curl(CurlExport { curl_commands }) => Ok(Self::text(
                curl_commands.join("\n\n"),
                EXPORT_CURL_FILENAME,
            )),
        }
    }

    pub fn from_docs(docs: &GeneratedDocs) -> Result<Self> {
        Self::json(docs, DOCS_FILENAME)
    }

    /// Write into `dir` (created if missing) and return the full path
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}
