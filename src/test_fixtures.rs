//! Shared fixtures for unit tests: a representative report and small
//! profile builders. Integration tests keep their own copies under
//! `tests/common`.

use std::collections::BTreeMap;

use crate::report::{
    AnalysisReport, ColumnProfile, DatasetSummary, DuplicateAnalysis, Issue, IssueSeverity,
    PiiFindings, QualityLevel, QualityMetrics,
};

/// A minimal profile with the given name and data type and no nulls.
pub fn profile(name: &str, data_type: &str) -> ColumnProfile {
    ColumnProfile {
        column_name: name.to_string(),
        data_type: data_type.to_string(),
        total_count: 1000,
        null_count: 0,
        unique_count: 500,
        null_percentage: 0.0,
        unique_percentage: 50.0,
        mean: None,
        median: None,
        std_dev: None,
        min: None,
        max: None,
        q1: None,
        q3: None,
        value_counts: None,
        top_values: None,
        has_pii: None,
        pii_types: None,
        has_outliers: None,
        outlier_values: None,
        has_anomalies: None,
        quality_issues: None,
    }
}

/// A string profile with the given null percentage (count derived).
pub fn profile_with_nulls(name: &str, null_percentage: f64) -> ColumnProfile {
    let mut p = profile(name, "STRING");
    p.null_percentage = null_percentage;
    p.null_count = (null_percentage * 10.0) as u64;
    p
}

/// A full, internally consistent report covering numeric, categorical,
/// and PII columns plus duplicates.
pub fn sample_report() -> AnalysisReport {
    let mut age = profile("age", "INTEGER");
    age.null_count = 20;
    age.null_percentage = 2.0;
    age.unique_count = 70;
    age.unique_percentage = 7.0;
    age.mean = Some(37.4);
    age.median = Some(34.0);
    age.std_dev = Some(12.8);
    age.min = Some(18.0);
    age.max = Some(92.0);
    age.q1 = Some(27.0);
    age.q3 = Some(51.0);
    age.has_outliers = Some(true);
    age.outlier_values = Some(vec![serde_json::json!(92)]);

    let mut country = profile("country", "STRING");
    country.null_count = 150;
    country.null_percentage = 15.0;
    country.unique_count = 12;
    country.unique_percentage = 1.2;
    let mut counts = BTreeMap::new();
    counts.insert("US".to_string(), 420);
    counts.insert("DE".to_string(), 180);
    counts.insert("FR".to_string(), 130);
    counts.insert("JP".to_string(), 95);
    country.value_counts = Some(counts);
    country.quality_issues = Some(vec!["high null rate".to_string()]);

    let mut email = profile("email", "STRING");
    email.unique_count = 990;
    email.unique_percentage = 99.0;
    email.has_pii = Some(true);
    email.pii_types = Some(vec!["EMAIL".to_string()]);

    let signup_date = profile("signup_date", "DATE");

    let mut duplicates_by_column = BTreeMap::new();
    duplicates_by_column.insert("country".to_string(), 14);
    duplicates_by_column.insert("age".to_string(), 9);
    duplicates_by_column.insert("signup_date".to_string(), 9);

    let mut pii_by_column = BTreeMap::new();
    pii_by_column.insert("email".to_string(), vec!["EMAIL".to_string()]);

    AnalysisReport {
        analysis_id: "a1b2c3d4".to_string(),
        timestamp: "2025-06-01T10:15:30Z".to_string(),
        health_score: 82.5,
        quality_level: QualityLevel::Good,
        summary: DatasetSummary {
            file_format: "CSV".to_string(),
            data_type: "TABULAR".to_string(),
            row_count: 1000,
            column_count: 4,
            total_cells: 4000,
            file_size_bytes: Some(48_210),
            encoding: Some("UTF-8".to_string()),
            has_header: true,
            column_names: vec![
                "age".to_string(),
                "country".to_string(),
                "email".to_string(),
                "signup_date".to_string(),
            ],
        },
        quality_metrics: QualityMetrics {
            completeness_score: 95.75,
            total_cells: 4000,
            null_cells: 170,
            null_percentage: 4.25,
            uniqueness_score: 98.6,
            total_rows: 1000,
            duplicate_rows: 14,
            duplicate_percentage: 1.4,
            validity_score: 97.0,
            invalid_values: 30,
            invalid_percentage: 0.75,
            consistency_score: 92.0,
            inconsistent_values: 80,
            inconsistent_percentage: 2.0,
            accuracy_score: 90.0,
            schema_violations: 2,
            timeliness_score: 88.0,
            has_temporal_data: true,
            bias_score: None,
            bias_detected: None,
            bias_description: None,
        },
        column_profiles: vec![age, country, email, signup_date],
        issues: vec![Issue {
            issue_type: "HIGH_NULL_RATE".to_string(),
            severity: IssueSeverity::Medium,
            column_name: Some("country".to_string()),
            description: "Column 'country' has 15% null values".to_string(),
            affected_rows: Some(150),
            recommendation: "Backfill missing country codes or drop incomplete rows".to_string(),
        }],
        recommendations: vec![
            "Review columns flagged for PII before sharing this dataset".to_string(),
            "Deduplicate rows before downstream aggregation".to_string(),
        ],
        pii_findings: Some(PiiFindings {
            pii_detected: true,
            total_pii_columns: 1,
            pii_by_column,
            recommendations: vec!["Mask the 'email' column in exports".to_string()],
        }),
        duplicate_analysis: DuplicateAnalysis {
            total_duplicates: 14,
            duplicate_percentage: 1.4,
            duplicate_row_indices: vec![12, 47, 311, 902],
            duplicates_by_column,
            has_exact_duplicates: true,
            has_fuzzy_duplicates: false,
        },
        processing_time_ms: 842,
    }
}
