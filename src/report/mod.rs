//! Typed schema for analysis reports returned by the quality service.
//!
//! The report is a pure data contract: it is deserialized once per
//! successful request, never mutated, and discarded wholesale on reset.
//! All derived views are computed from it by the [`crate::transform`]
//! module.

mod bands;
mod types;

pub use bands::{band_for_score, score_color, ScoreBand, SCORE_BANDS};
pub use types::{
    AnalysisReport, ColumnProfile, DatasetSummary, DuplicateAnalysis, Issue, IssueSeverity,
    PiiFindings, QualityLevel, QualityMetrics,
};
