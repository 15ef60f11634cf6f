//! Ingestion state machine.
//!
//! Manages the single in-flight analysis request across the three
//! acquisition modes. The lifecycle is an explicit enum-tagged state
//! (`Idle -> Submitting -> Complete | Failed`) with guarded transitions,
//! so illegal combinations (a report and an error at once, two requests
//! in flight) are unrepresentable.

use tracing::{debug, info, warn};

use crate::client::{
    AnalysisOptions, AnalysisTransport, ClientResult, UploadFile,
};
use crate::error::{DatalensError, Result};
use crate::report::AnalysisReport;

/// How the dataset reaches the service. Mutually exclusive; switching
/// modes discards the other modes' draft input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    File,
    Url,
    Inline,
}

/// Lifecycle of the single analysis request.
///
/// Exactly one report (`Complete`) or one error message (`Failed`) can
/// exist, encoded by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestState {
    Idle,
    Submitting,
    Complete(Box<AnalysisReport>),
    Failed(String),
}

impl IngestState {
    fn name(&self) -> &'static str {
        match self {
            IngestState::Idle => "idle",
            IngestState::Submitting => "submitting",
            IngestState::Complete(_) => "complete",
            IngestState::Failed(_) => "failed",
        }
    }
}

/// A validated request ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
enum PreparedRequest {
    File(UploadFile),
    Url(String),
    Inline(String),
}

/// Orchestrates mode selection, validation, and the request lifecycle.
///
/// Generic over [`AnalysisTransport`] so tests can count dispatches with
/// an in-memory transport; production code uses
/// [`crate::client::AnalysisClient`].
pub struct IngestionController<T: AnalysisTransport> {
    transport: T,
    mode: AcquisitionMode,
    state: IngestState,
    options: AnalysisOptions,
    draft_file: Option<UploadFile>,
    draft_url: String,
    draft_inline: String,
}

impl<T: AnalysisTransport> IngestionController<T> {
    /// Create a controller in `Idle` state with file mode selected.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            mode: AcquisitionMode::File,
            state: IngestState::Idle,
            options: AnalysisOptions::default(),
            draft_file: None,
            draft_url: String::new(),
            draft_inline: String::new(),
        }
    }

    /// Switch acquisition mode. Permitted only while `Idle`; the drafts
    /// of the other modes are discarded.
    pub fn select_mode(&mut self, mode: AcquisitionMode) -> Result<()> {
        if self.state != IngestState::Idle {
            return Err(DatalensError::InvalidTransition {
                action: "select_mode",
                state: self.state.name(),
            });
        }
        if mode != AcquisitionMode::File {
            self.draft_file = None;
        }
        if mode != AcquisitionMode::Url {
            self.draft_url.clear();
        }
        if mode != AcquisitionMode::Inline {
            self.draft_inline.clear();
        }
        debug!(?mode, "acquisition mode selected");
        self.mode = mode;
        Ok(())
    }

    /// Stage a dataset file for file-mode submission.
    pub fn attach_file(&mut self, file: UploadFile) {
        self.draft_file = Some(file);
    }

    /// Set the dataset URL for url-mode submission.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.draft_url = url.into();
    }

    /// Set the inline serialized records for inline-mode submission.
    pub fn set_inline(&mut self, data: impl Into<String>) {
        self.draft_inline = data.into();
    }

    /// Set the analysis options sent with every request.
    pub fn set_options(&mut self, options: AnalysisOptions) {
        self.options = options;
    }

    /// Validate the current mode's draft and dispatch exactly one
    /// request.
    ///
    /// Permitted from `Idle` and `Failed` (entering `Submitting` clears
    /// the stored error). A second call while `Submitting` is rejected
    /// with [`DatalensError::RequestInFlight`] and dispatches nothing;
    /// from `Complete`, [`reset`](Self::reset) is required first so a
    /// displayed report is never silently replaced.
    pub async fn submit(&mut self) -> Result<()> {
        let request = self.begin()?;
        let outcome = self.dispatch(request).await;
        self.settle(outcome)
    }

    /// Return to `Idle`, discarding the report or error and all drafts.
    ///
    /// Rejected while `Submitting`: the in-flight request must settle
    /// first, otherwise its result would arrive in a reset session.
    pub fn reset(&mut self) -> Result<()> {
        match self.state {
            IngestState::Idle => Ok(()),
            IngestState::Submitting => Err(DatalensError::RequestInFlight),
            IngestState::Complete(_) | IngestState::Failed(_) => {
                debug!(from = self.state.name(), "resetting to idle");
                self.state = IngestState::Idle;
                self.draft_file = None;
                self.draft_url.clear();
                self.draft_inline.clear();
                Ok(())
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &IngestState {
        &self.state
    }

    /// Currently selected acquisition mode.
    pub fn mode(&self) -> AcquisitionMode {
        self.mode
    }

    /// The completed report, if any.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            IngestState::Complete(report) => Some(report),
            _ => None,
        }
    }

    /// The stored failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            IngestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// True while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == IngestState::Submitting
    }

    /// Synchronous half of `submit`: guard, validate, and enter
    /// `Submitting`. No network is touched; validation failures leave the
    /// state unchanged.
    fn begin(&mut self) -> Result<PreparedRequest> {
        match self.state {
            IngestState::Submitting => return Err(DatalensError::RequestInFlight),
            IngestState::Complete(_) => {
                return Err(DatalensError::InvalidTransition {
                    action: "submit",
                    state: self.state.name(),
                })
            }
            IngestState::Idle | IngestState::Failed(_) => {}
        }

        let request = self.validate_draft()?;
        info!(mode = ?self.mode, "analysis request validated, submitting");
        self.state = IngestState::Submitting;
        Ok(request)
    }

    fn validate_draft(&self) -> Result<PreparedRequest> {
        match self.mode {
            AcquisitionMode::File => {
                let file = self
                    .draft_file
                    .as_ref()
                    .ok_or_else(|| DatalensError::validation("no file selected"))?;
                if !file.has_supported_extension() {
                    return Err(DatalensError::validation("unsupported file format"));
                }
                Ok(PreparedRequest::File(file.clone()))
            }
            AcquisitionMode::Url => {
                let url = self.draft_url.trim();
                if url.is_empty() {
                    return Err(DatalensError::validation("please enter a valid URL"));
                }
                Ok(PreparedRequest::Url(url.to_string()))
            }
            AcquisitionMode::Inline => {
                let data = self.draft_inline.trim();
                if data.is_empty()
                    || serde_json::from_str::<serde_json::Value>(data).is_err()
                {
                    return Err(DatalensError::validation("invalid JSON format"));
                }
                Ok(PreparedRequest::Inline(data.to_string()))
            }
        }
    }

    async fn dispatch(&self, request: PreparedRequest) -> ClientResult<AnalysisReport> {
        match request {
            PreparedRequest::File(file) => {
                self.transport.analyze_file(&file, &self.options).await
            }
            PreparedRequest::Url(url) => self.transport.analyze_url(&url, &self.options).await,
            PreparedRequest::Inline(data) => {
                self.transport.analyze_inline(&data, &self.options).await
            }
        }
    }

    /// Asynchronous half of `submit`: apply the single outcome of the
    /// dispatched request.
    fn settle(&mut self, outcome: ClientResult<AnalysisReport>) -> Result<()> {
        debug_assert_eq!(self.state, IngestState::Submitting);
        match outcome {
            Ok(report) => {
                info!(
                    analysis_id = %report.analysis_id,
                    health_score = report.health_score,
                    "analysis complete"
                );
                self.state = IngestState::Complete(Box::new(report));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "analysis request failed");
                self.state = IngestState::Failed(err.user_message());
                Err(DatalensError::Transport(err))
            }
        }
    }
}
