use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::{
    AnalysisOptions, AnalysisTransport, ClientConfig, ClientError, ClientResult, UploadFile,
};
use crate::report::AnalysisReport;

/// HTTP client for the analysis service.
///
/// Thin and stateless beyond request construction: one call per
/// operation, no retries, no streaming.
#[derive(Clone)]
pub struct AnalysisClient {
    config: Arc<ClientConfig>,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UrlRequest<'a> {
    data_url: &'a str,
    #[serde(flatten)]
    options: &'a AnalysisOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineRequest<'a> {
    inline_data: &'a str,
    #[serde(flatten)]
    options: &'a AnalysisOptions,
}

impl AnalysisClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.config.endpoint(), operation)
    }

    /// Decode a response into a report, mapping error statuses and empty
    /// success bodies.
    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<AnalysisReport> {
        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return match status.as_u16() {
                400 => Err(ClientError::InvalidRequest { message: body }),
                code => Err(ClientError::ServerError {
                    status: code,
                    message: body,
                }),
            };
        }

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(ClientError::EmptyResult);
        }

        serde_json::from_str(trimmed).map_err(|e| ClientError::Serialization {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl AnalysisTransport for AnalysisClient {
    #[instrument(skip(self, file, options), fields(file_name = %file.file_name))]
    async fn analyze_file(
        &self,
        file: &UploadFile,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport> {
        debug!(bytes = file.bytes.len(), "submitting dataset file");

        let form = Form::new()
            .part(
                "file",
                Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
            )
            .text("performPIICheck", options.perform_pii_check.to_string())
            .text("performBiasCheck", options.perform_bias_check.to_string());

        let response = self
            .client
            .post(self.url("analyze/file"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        self.handle_response(response).await
    }

    #[instrument(skip(self, options))]
    async fn analyze_url(
        &self,
        data_url: &str,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport> {
        let response = self
            .client
            .post(self.url("analyze/url"))
            .json(&UrlRequest { data_url, options })
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        self.handle_response(response).await
    }

    #[instrument(skip(self, inline_data, options))]
    async fn analyze_inline(
        &self,
        inline_data: &str,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport> {
        debug!(bytes = inline_data.len(), "submitting inline records");

        let response = self
            .client
            .post(self.url("analyze/inline"))
            .json(&InlineRequest {
                inline_data,
                options,
            })
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AnalysisClient::new(ClientConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn test_operation_urls_join_cleanly() {
        let config = ClientConfig::new().with_endpoint("https://dq.example.com/api/v1/data-quality/");
        let client = AnalysisClient::new(config).unwrap();
        assert_eq!(
            client.url("analyze/url"),
            "https://dq.example.com/api/v1/data-quality/analyze/url"
        );
    }

    #[test]
    fn test_url_request_body_matches_contract() {
        let options = AnalysisOptions::default();
        let body = serde_json::to_value(UrlRequest {
            data_url: "https://example.com/data.csv",
            options: &options,
        })
        .unwrap();
        assert_eq!(body["dataUrl"], "https://example.com/data.csv");
        assert_eq!(body["performPIICheck"], true);
        assert_eq!(body["performBiasCheck"], false);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_network_error() {
        let config = ClientConfig::new()
            .with_endpoint("http://localhost:1")
            .with_timeout(std::time::Duration::from_millis(200));
        let client = AnalysisClient::new(config).unwrap();

        let result = client
            .analyze_url("https://example.com/data.csv", &AnalysisOptions::default())
            .await;
        assert!(matches!(result, Err(ClientError::Network { .. })));
    }
}
