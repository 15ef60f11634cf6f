//! Client configuration and request inputs.

use std::time::Duration;

use serde::Serialize;

/// Dataset file extensions accepted client-side before submission.
/// Anything else is rejected pre-flight; content validation stays with
/// the service.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["csv", "json", "xlsx", "xls"];

/// Configuration for connecting to the analysis service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration pointing at the default local endpoint.
    pub fn new() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/v1/data-quality".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom service endpoint (base path, without the operation
    /// suffix).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the service endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request analysis options, serialized camelCase into every request
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    #[serde(rename = "performPIICheck")]
    pub perform_pii_check: bool,
    pub perform_bias_check: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            perform_pii_check: true,
            perform_bias_check: false,
        }
    }
}

impl AnalysisOptions {
    /// Enable or disable PII scanning for this request.
    pub fn with_pii_check(mut self, enabled: bool) -> Self {
        self.perform_pii_check = enabled;
        self
    }

    /// Enable or disable bias scanning for this request.
    pub fn with_bias_check(mut self, enabled: bool) -> Self {
        self.perform_bias_check = enabled;
        self
    }
}

/// A dataset file staged for upload. The bytes are sent opaque; parsing
/// happens server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }

    /// True when the extension is in [`SUPPORTED_EXTENSIONS`].
    pub fn has_supported_extension(&self) -> bool {
        self.extension()
            .map_or(false, |ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }
}
