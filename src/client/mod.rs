//! Transport adapter for the external analysis service.
//!
//! The service computes all quality metrics; this module only constructs
//! the three request shapes it accepts and maps its responses into
//! [`crate::report::AnalysisReport`] or a [`ClientError`].

mod config;
mod error;
mod http;

use async_trait::async_trait;

use crate::report::AnalysisReport;

pub use config::{AnalysisOptions, ClientConfig, UploadFile, SUPPORTED_EXTENSIONS};
pub use error::{ClientError, ClientResult};
pub use http::AnalysisClient;

/// The three request operations against the analysis service.
///
/// [`AnalysisClient`] is the production implementation; tests substitute
/// an in-memory transport to exercise the ingestion state machine without
/// a network.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Submit an uploaded dataset file for analysis.
    async fn analyze_file(
        &self,
        file: &UploadFile,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport>;

    /// Ask the service to fetch and analyze a dataset by URL.
    async fn analyze_url(
        &self,
        data_url: &str,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport>;

    /// Submit inline serialized records for analysis.
    async fn analyze_inline(
        &self,
        inline_data: &str,
        options: &AnalysisOptions,
    ) -> ClientResult<AnalysisReport>;
}
