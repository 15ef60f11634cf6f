//! Single-column drill-down projection.
//!
//! At most one column is expanded at a time; expanding another column
//! replaces the previous expansion. Detail statistics are computed only
//! for the expanded column, on demand.

use crate::report::ColumnProfile;
use crate::transform::{numeric_summary, top_values, NumericSummary, Truncated, ValueCount};

/// Number of categorical values shown in the detail panel.
const DETAIL_TOP_VALUES: usize = 10;

/// Tracks which column, if any, is expanded for detail display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDrilldown {
    expanded: Option<String>,
}

/// On-demand detail for one expanded column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDetail {
    pub name: String,
    pub data_type: String,
    pub total_count: u64,
    pub null_count: u64,
    pub unique_count: u64,
    pub numeric: Option<NumericSummary>,
    pub top_values: Option<Truncated<ValueCount>>,
    pub pii_types: Vec<String>,
    pub outlier_values: Vec<serde_json::Value>,
    pub quality_issues: Vec<String>,
}

impl ColumnDrilldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `name`, or collapse it if it is already expanded. Any
    /// previously expanded column is replaced.
    pub fn toggle(&mut self, name: &str) {
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        } else {
            self.expanded = Some(name.to_string());
        }
    }

    /// Collapse whatever is expanded.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Name of the expanded column, if any.
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// True when `name` is the expanded column.
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    /// Detail for the expanded column, computed lazily from its profile.
    /// `None` when nothing is expanded or the name matches no profile.
    pub fn detail(&self, profiles: &[ColumnProfile]) -> Option<ColumnDetail> {
        let name = self.expanded.as_deref()?;
        let profile = profiles.iter().find(|p| p.column_name == name)?;
        Some(ColumnDetail {
            name: profile.column_name.clone(),
            data_type: profile.data_type.clone(),
            total_count: profile.total_count,
            null_count: profile.null_count,
            unique_count: profile.unique_count,
            numeric: numeric_summary(profile),
            top_values: top_values(profile, DETAIL_TOP_VALUES),
            pii_types: profile.pii_types.clone().unwrap_or_default(),
            outlier_values: profile.outlier_values.clone().unwrap_or_default(),
            quality_issues: profile.quality_issues.clone().unwrap_or_default(),
        })
    }
}
