//! Prelude for commonly used types in datalens.

pub use crate::client::{
    AnalysisClient, AnalysisOptions, AnalysisTransport, ClientConfig, UploadFile,
};
pub use crate::drilldown::ColumnDrilldown;
pub use crate::error::{DatalensError, Result};
pub use crate::ingest::{AcquisitionMode, IngestState, IngestionController};
pub use crate::report::{AnalysisReport, ColumnProfile, QualityLevel};
