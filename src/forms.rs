//! Form input validation
//!
//! Turns raw user input into backend request bodies. Nothing here touches
//! the network; every check runs before a call is dispatched.

use serde_json::{Map, Value};

use crate::client::{AnalyzeRequest, BatchEndpoint};
use crate::error::ValidationError;

/// Method used when the form leaves it blank
pub const DEFAULT_METHOD: &str = "GET";

/// Fields of the single-request form
#[derive(Debug, Clone, Default)]
pub struct SingleRequestForm {
    pub url: String,
    pub method: String,
    /// A JSON object, or one `Key: Value` pair per line
    pub headers: String,
    pub body: String,
    /// JSON object text; empty means no params
    pub params: String,
}

impl SingleRequestForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn into_request(self) -> Result<AnalyzeRequest, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        let method = match self.method.trim() {
            "" => DEFAULT_METHOD.to_string(),
            m => m.to_uppercase(),
        };

        Ok(AnalyzeRequest {
            url: url.to_string(),
            method,
            headers: parse_headers(&self.headers)?,
            data: self.body,
            params: parse_params(&self.params)?,
        })
    }
}

fn parse_headers(text: &str) -> Result<Map<String, Value>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Map::new());
    }

    if text.starts_with('{') {
        return match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ValidationError::MalformedJson {
                field: "headers",
                message: "expected a JSON object".to_string(),
            }),
            Err(e) => Err(ValidationError::MalformedJson {
                field: "headers",
                message: e.to_string(),
            }),
        };
    }

    let mut headers = Map::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| ValidationError::MalformedHeader(line.to_string()))?;
        headers.insert(name.trim().to_string(), Value::String(value.trim().to_string()));
    }
    Ok(headers)
}

fn parse_params(text: &str) -> Result<Map<String, Value>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ValidationError::MalformedJson {
            field: "params",
            message: "expected a JSON object".to_string(),
        }),
        Err(e) => Err(ValidationError::MalformedJson {
            field: "params",
            message: e.to_string(),
        }),
    }
}

/// Batch form: a JSON array of endpoint objects
#[derive(Debug, Clone, Default)]
pub struct BatchForm {
    pub endpoints: String,
}

impl BatchForm {
    pub fn new(endpoints: impl Into<String>) -> Self {
        Self {
            endpoints: endpoints.into(),
        }
    }

    pub fn into_endpoints(self) -> Result<Vec<BatchEndpoint>, ValidationError> {
        if self.endpoints.trim().is_empty() {
            return Err(ValidationError::MissingEndpoints);
        }

        let value: Value =
            serde_json::from_str(&self.endpoints).map_err(|e| ValidationError::MalformedJson {
                field: "endpoints",
                message: e.to_string(),
            })?;

        if !value.is_array() {
            return Err(ValidationError::MalformedJson {
                field: "endpoints",
                message: "expected a JSON array".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| ValidationError::MalformedJson {
            field: "endpoints",
            message: e.to_string(),
        })
    }
}

/// Discovery form: a single base URL
#[derive(Debug, Clone, Default)]
pub struct DiscoveryForm {
    pub base_url: String,
}

impl DiscoveryForm {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn into_base_url(self) -> Result<String, ValidationError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ValidationError::MissingBaseUrl);
        }
        Ok(base_url.to_string())
    }
}
