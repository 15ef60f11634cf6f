//! Pure view derivations over an analysis report.
//!
//! Every function here is referentially transparent: no shared state,
//! identical output for identical input. Bounded views return
//! [`Truncated`] so the caller can render "…and N more" without
//! recomputing, and descending sorts tie-break on name or value so
//! repeated calls produce byte-identical results.

use std::collections::BTreeMap;

use crate::report::{ColumnProfile, DuplicateAnalysis, QualityMetrics};

/// Maximum display length for column-name labels.
const COLUMN_LABEL_MAX: usize = 15;
/// Maximum display length for categorical value labels.
const VALUE_LABEL_MAX: usize = 20;

/// A bounded view plus the size of the unbounded source, so truncation
/// never loses the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Truncated<T> {
    pub entries: Vec<T>,
    /// Number of qualifying entries before truncation.
    pub total: usize,
}

impl<T> Truncated<T> {
    fn new(mut entries: Vec<T>, limit: usize) -> Self {
        let total = entries.len();
        entries.truncate(limit);
        Self { entries, total }
    }

    /// Entries excluded by the limit.
    pub fn omitted(&self) -> usize {
        self.total - self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One quality dimension with its score, for comparative display.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub label: &'static str,
    pub score: f64,
}

/// A column ranked by null percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct NullRankEntry {
    /// Full column name, preserved for lookups.
    pub name: String,
    /// Shortened name for axis labels.
    pub label: String,
    pub null_percentage: f64,
}

/// Count of columns sharing a data-type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCount {
    pub data_type: String,
    pub count: usize,
}

/// A column's uniqueness percentage, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct UniquenessPoint {
    pub name: String,
    pub label: String,
    pub unique_percentage: f64,
}

/// Five-number summary plus mean for a numeric column.
///
/// Assembled only when the profile carries the full set of numeric
/// fields; absence means "not applicable", never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: Option<f64>,
}

/// A numeric column paired with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub summary: NumericSummary,
}

/// Per-column duplicate contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDuplicates {
    pub name: String,
    pub label: String,
    pub count: u64,
}

/// One categorical value with its occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCount {
    /// Full value, preserved for lookups.
    pub value: String,
    /// Shortened value for axis labels.
    pub label: String,
    pub count: u64,
}

/// Complete-versus-null cell counts for the completeness overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBreakdown {
    pub complete_cells: u64,
    pub null_cells: u64,
}

/// Shortens a label to `max` characters, appending `...` when truncated.
/// Char-boundary safe; the underlying name is never modified.
pub fn shorten_label(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max).collect();
        format!("{truncated}...")
    }
}

/// The six quality dimensions in fixed order for comparative display.
pub fn quality_dimensions(metrics: &QualityMetrics) -> Vec<DimensionScore> {
    vec![
        DimensionScore {
            label: "Completeness",
            score: metrics.completeness_score,
        },
        DimensionScore {
            label: "Uniqueness",
            score: metrics.uniqueness_score,
        },
        DimensionScore {
            label: "Validity",
            score: metrics.validity_score,
        },
        DimensionScore {
            label: "Consistency",
            score: metrics.consistency_score,
        },
        DimensionScore {
            label: "Accuracy",
            score: metrics.accuracy_score,
        },
        DimensionScore {
            label: "Timeliness",
            score: metrics.timeliness_score,
        },
    ]
}

/// Columns with nulls, sorted non-increasing by null percentage and
/// truncated to `limit`.
pub fn null_ranking(profiles: &[ColumnProfile], limit: usize) -> Truncated<NullRankEntry> {
    let mut entries: Vec<NullRankEntry> = profiles
        .iter()
        .filter(|profile| profile.null_percentage > 0.0)
        .map(|profile| NullRankEntry {
            name: profile.column_name.clone(),
            label: shorten_label(&profile.column_name, COLUMN_LABEL_MAX),
            null_percentage: profile.null_percentage,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.null_percentage
            .total_cmp(&a.null_percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    Truncated::new(entries, limit)
}

/// Count of columns per data-type tag, ordered by first occurrence.
pub fn type_distribution(profiles: &[ColumnProfile]) -> Vec<TypeCount> {
    let mut distribution: Vec<TypeCount> = Vec::new();
    for profile in profiles {
        match distribution
            .iter_mut()
            .find(|entry| entry.data_type == profile.data_type)
        {
            Some(entry) => entry.count += 1,
            None => distribution.push(TypeCount {
                data_type: profile.data_type.clone(),
                count: 1,
            }),
        }
    }
    distribution
}

/// The first `limit` columns in dataset order with their uniqueness
/// percentage. Deliberately unsorted; the chart shows a positional trend.
pub fn uniqueness_ranking(profiles: &[ColumnProfile], limit: usize) -> Truncated<UniquenessPoint> {
    let entries: Vec<UniquenessPoint> = profiles
        .iter()
        .map(|profile| UniquenessPoint {
            name: profile.column_name.clone(),
            label: shorten_label(&profile.column_name, COLUMN_LABEL_MAX),
            unique_percentage: profile.unique_percentage,
        })
        .collect();
    Truncated::new(entries, limit)
}

/// Explicit numeric summary for a profile, or `None` when the column is
/// not numeric.
pub fn numeric_summary(profile: &ColumnProfile) -> Option<NumericSummary> {
    Some(NumericSummary {
        min: profile.min?,
        q1: profile.q1?,
        median: profile.median?,
        q3: profile.q3?,
        max: profile.max?,
        mean: profile.mean?,
        std_dev: profile.std_dev,
    })
}

/// The first `limit` numeric columns with their summaries, in dataset
/// order.
pub fn numeric_columns(profiles: &[ColumnProfile], limit: usize) -> Truncated<NumericColumn> {
    let entries: Vec<NumericColumn> = profiles
        .iter()
        .filter_map(|profile| {
            numeric_summary(profile).map(|summary| NumericColumn {
                name: profile.column_name.clone(),
                summary,
            })
        })
        .collect();
    Truncated::new(entries, limit)
}

/// Per-column duplicate counts sorted descending, truncated to `limit`.
pub fn duplicate_breakdown(
    analysis: &DuplicateAnalysis,
    limit: usize,
) -> Truncated<ColumnDuplicates> {
    let mut entries: Vec<ColumnDuplicates> = analysis
        .duplicates_by_column
        .iter()
        .map(|(name, count)| ColumnDuplicates {
            name: name.clone(),
            label: shorten_label(name, COLUMN_LABEL_MAX),
            count: *count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    Truncated::new(entries, limit)
}

/// Categorical value counts sorted descending, truncated to `limit`.
/// `None` when the profile has no categorical summary.
pub fn top_values(profile: &ColumnProfile, limit: usize) -> Option<Truncated<ValueCount>> {
    let counts: &BTreeMap<String, u64> = profile.value_counts.as_ref()?;
    if counts.is_empty() {
        return None;
    }

    let mut entries: Vec<ValueCount> = counts
        .iter()
        .map(|(value, count)| ValueCount {
            value: value.clone(),
            label: shorten_label(value, VALUE_LABEL_MAX),
            count: *count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    Some(Truncated::new(entries, limit))
}

/// Complete versus null cell counts for the completeness overview chart.
pub fn completeness_overview(metrics: &QualityMetrics) -> CellBreakdown {
    CellBreakdown {
        complete_cells: metrics.total_cells.saturating_sub(metrics.null_cells),
        null_cells: metrics.null_cells,
    }
}
