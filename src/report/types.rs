//! Wire types for the analysis report.
//!
//! Field names follow the service's camelCase JSON exactly. Optional
//! fields skip serialization when absent so an exported artifact matches
//! the received document, and map-valued fields use `BTreeMap` for
//! deterministic iteration and round-trip stability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Banded categorical label for the overall health score.
///
/// Derived by the analysis service; the client displays it but never
/// recomputes it. See [`crate::report::SCORE_BANDS`] for the cosmetic
/// color mapping that mirrors the same bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

/// Severity of a reported quality issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
    /// Severities this client version does not know about.
    #[serde(untagged)]
    Other(String),
}

/// Root of an analysis report. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub timestamp: String,
    pub health_score: f64,
    pub quality_level: QualityLevel,
    pub summary: DatasetSummary,
    pub quality_metrics: QualityMetrics,
    /// Per-column statistics, in dataset column order.
    pub column_profiles: Vec<ColumnProfile>,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    /// Present iff PII scanning was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_findings: Option<PiiFindings>,
    pub duplicate_analysis: DuplicateAnalysis,
    pub processing_time_ms: u64,
}

/// Shape-level facts about the analyzed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub file_format: String,
    pub data_type: String,
    pub row_count: u64,
    pub column_count: u64,
    pub total_cells: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    pub has_header: bool,
    pub column_names: Vec<String>,
}

/// The six quality dimension scores plus their supporting counters.
///
/// Every score is in `[0, 100]`; every counter is bounded by its
/// corresponding total (e.g. `null_cells <= total_cells`). The client
/// trusts these invariants; [`AnalysisReport::check_invariants`] surfaces
/// violations for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub completeness_score: f64,
    pub total_cells: u64,
    pub null_cells: u64,
    pub null_percentage: f64,
    pub uniqueness_score: f64,
    pub total_rows: u64,
    pub duplicate_rows: u64,
    pub duplicate_percentage: f64,
    pub validity_score: f64,
    pub invalid_values: u64,
    pub invalid_percentage: f64,
    pub consistency_score: f64,
    pub inconsistent_values: u64,
    pub inconsistent_percentage: f64,
    pub accuracy_score: f64,
    pub schema_violations: u64,
    pub timeliness_score: f64,
    pub has_temporal_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_detected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_description: Option<String>,
}

/// Per-column statistics and flags.
///
/// The numeric fields (`mean` through `q3`) are present only for numeric
/// columns; [`crate::transform::numeric_summary`] assembles them into an
/// explicit sum type rather than callers probing individual fields. The
/// wire shape stays flat so export reproduces the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Unique within a report.
    pub column_name: String,
    pub data_type: String,
    pub total_count: u64,
    pub null_count: u64,
    pub unique_count: u64,
    pub null_percentage: f64,
    pub unique_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_counts: Option<BTreeMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_values: Option<Vec<String>>,
    #[serde(rename = "hasPII", skip_serializing_if = "Option::is_none")]
    pub has_pii: Option<bool>,
    /// Non-empty iff `has_pii` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_outliers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier_values: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_anomalies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_issues: Option<Vec<String>>,
}

impl ColumnProfile {
    /// True when the PII flag is set for this column.
    pub fn is_pii(&self) -> bool {
        self.has_pii.unwrap_or(false)
    }

    /// Number of free-text quality issues attached to this column.
    pub fn quality_issue_count(&self) -> usize {
        self.quality_issues.as_ref().map_or(0, Vec::len)
    }
}

/// A single detected quality issue with its recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_type: String,
    pub severity: IssueSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_rows: Option<u64>,
    pub recommendation: String,
}

/// Summary of PII detection across columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiFindings {
    pub pii_detected: bool,
    #[serde(rename = "totalPIIColumns")]
    pub total_pii_columns: u64,
    pub pii_by_column: BTreeMap<String, Vec<String>>,
    pub recommendations: Vec<String>,
}

/// Row-level exact-duplicate detection summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateAnalysis {
    pub total_duplicates: u64,
    pub duplicate_percentage: f64,
    pub duplicate_row_indices: Vec<u64>,
    pub duplicates_by_column: BTreeMap<String, u64>,
    /// Invariant: equals `total_duplicates > 0`.
    pub has_exact_duplicates: bool,
    pub has_fuzzy_duplicates: bool,
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

impl AnalysisReport {
    /// Checks the structural invariants the service is expected to uphold
    /// and returns a description of each violation found.
    ///
    /// The client never repairs a report; this exists for diagnostics and
    /// tests. An empty result means the report is internally consistent.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if !in_percent_range(self.health_score) {
            violations.push(format!("health score {} out of [0, 100]", self.health_score));
        }

        let m = &self.quality_metrics;
        for (name, score) in [
            ("completeness", m.completeness_score),
            ("uniqueness", m.uniqueness_score),
            ("validity", m.validity_score),
            ("consistency", m.consistency_score),
            ("accuracy", m.accuracy_score),
            ("timeliness", m.timeliness_score),
        ] {
            if !in_percent_range(score) {
                violations.push(format!("{name} score {score} out of [0, 100]"));
            }
        }
        if m.null_cells > m.total_cells {
            violations.push(format!(
                "null cells {} exceed total cells {}",
                m.null_cells, m.total_cells
            ));
        }
        if m.duplicate_rows > m.total_rows {
            violations.push(format!(
                "duplicate rows {} exceed total rows {}",
                m.duplicate_rows, m.total_rows
            ));
        }

        for profile in &self.column_profiles {
            let name = &profile.column_name;
            if profile.null_count > profile.total_count {
                violations.push(format!(
                    "column {name}: null count {} exceeds total count {}",
                    profile.null_count, profile.total_count
                ));
            }
            if profile.unique_count > profile.total_count {
                violations.push(format!(
                    "column {name}: unique count {} exceeds total count {}",
                    profile.unique_count, profile.total_count
                ));
            }
            if !in_percent_range(profile.null_percentage) {
                violations.push(format!(
                    "column {name}: null percentage {} out of [0, 100]",
                    profile.null_percentage
                ));
            }
            if !in_percent_range(profile.unique_percentage) {
                violations.push(format!(
                    "column {name}: unique percentage {} out of [0, 100]",
                    profile.unique_percentage
                ));
            }
            let pii_types_empty = profile
                .pii_types
                .as_ref()
                .map_or(true, |types| types.is_empty());
            if profile.is_pii() && pii_types_empty {
                violations.push(format!("column {name}: PII flag set without PII types"));
            }
        }

        let dup = &self.duplicate_analysis;
        if dup.has_exact_duplicates != (dup.total_duplicates > 0) {
            violations.push(format!(
                "exact-duplicate flag {} disagrees with total duplicates {}",
                dup.has_exact_duplicates, dup.total_duplicates
            ));
        }
        if !in_percent_range(dup.duplicate_percentage) {
            violations.push(format!(
                "duplicate percentage {} out of [0, 100]",
                dup.duplicate_percentage
            ));
        }

        violations
    }
}
