//! Report export and re-import.
//!
//! The artifact is the report's JSON document, byte-faithful in structure
//! to what the service returned: re-parsing an exported artifact must
//! reproduce a structurally equal report.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DatalensError, Result};
use crate::report::AnalysisReport;

/// Media type of the export artifact.
pub const MEDIA_TYPE: &str = "application/json";

/// A serialized report ready for download or saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// `data-quality-report-<analysisId>.json`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its canonical file name and
    /// return the full path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)
            .map_err(|e| DatalensError::Serialization(format!("failed to write artifact: {e}")))?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "report artifact written");
        Ok(path)
    }
}

/// Serialize a report to its downloadable artifact.
pub fn export(report: &AnalysisReport) -> Result<ExportArtifact> {
    let bytes = serde_json::to_vec_pretty(report)?;
    Ok(ExportArtifact {
        file_name: format!("data-quality-report-{}.json", report.analysis_id),
        bytes,
    })
}

/// Parse an exported artifact back into a report.
pub fn import(bytes: &[u8]) -> Result<AnalysisReport> {
    Ok(serde_json::from_slice(bytes)?)
}
