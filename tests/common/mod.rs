//! Shared fixtures for integration tests.
//!
//! The sample report is built from a camelCase JSON document so every
//! test that uses it also exercises the service wire format.
#![allow(dead_code)]

use datalens::report::{AnalysisReport, ColumnProfile};
use serde_json::json;

pub fn sample_report_json() -> serde_json::Value {
    json!({
        "analysisId": "a1b2c3d4",
        "timestamp": "2025-06-01T10:15:30Z",
        "healthScore": 82.5,
        "qualityLevel": "GOOD",
        "summary": {
            "fileFormat": "CSV",
            "dataType": "TABULAR",
            "rowCount": 1000,
            "columnCount": 4,
            "totalCells": 4000,
            "fileSizeBytes": 48210,
            "encoding": "UTF-8",
            "hasHeader": true,
            "columnNames": ["age", "country", "email", "signup_date"]
        },
        "qualityMetrics": {
            "completenessScore": 95.75,
            "totalCells": 4000,
            "nullCells": 170,
            "nullPercentage": 4.25,
            "uniquenessScore": 98.6,
            "totalRows": 1000,
            "duplicateRows": 14,
            "duplicatePercentage": 1.4,
            "validityScore": 97.0,
            "invalidValues": 30,
            "invalidPercentage": 0.75,
            "consistencyScore": 92.0,
            "inconsistentValues": 80,
            "inconsistentPercentage": 2.0,
            "accuracyScore": 90.0,
            "schemaViolations": 2,
            "timelinessScore": 88.0,
            "hasTemporalData": true
        },
        "columnProfiles": [
            {
                "columnName": "age",
                "dataType": "INTEGER",
                "totalCount": 1000,
                "nullCount": 20,
                "uniqueCount": 70,
                "nullPercentage": 2.0,
                "uniquePercentage": 7.0,
                "mean": 37.4,
                "median": 34.0,
                "stdDev": 12.8,
                "min": 18.0,
                "max": 92.0,
                "q1": 27.0,
                "q3": 51.0,
                "hasOutliers": true,
                "outlierValues": [92]
            },
            {
                "columnName": "country",
                "dataType": "STRING",
                "totalCount": 1000,
                "nullCount": 150,
                "uniqueCount": 12,
                "nullPercentage": 15.0,
                "uniquePercentage": 1.2,
                "valueCounts": {"US": 420, "DE": 180, "FR": 130, "JP": 95},
                "qualityIssues": ["high null rate"]
            },
            {
                "columnName": "email",
                "dataType": "STRING",
                "totalCount": 1000,
                "nullCount": 0,
                "uniqueCount": 990,
                "nullPercentage": 0.0,
                "uniquePercentage": 99.0,
                "hasPII": true,
                "piiTypes": ["EMAIL"]
            },
            {
                "columnName": "signup_date",
                "dataType": "DATE",
                "totalCount": 1000,
                "nullCount": 0,
                "uniqueCount": 500,
                "nullPercentage": 0.0,
                "uniquePercentage": 50.0
            }
        ],
        "issues": [
            {
                "issueType": "HIGH_NULL_RATE",
                "severity": "MEDIUM",
                "columnName": "country",
                "description": "Column 'country' has 15% null values",
                "affectedRows": 150,
                "recommendation": "Backfill missing country codes or drop incomplete rows"
            }
        ],
        "recommendations": [
            "Review columns flagged for PII before sharing this dataset",
            "Deduplicate rows before downstream aggregation"
        ],
        "piiFindings": {
            "piiDetected": true,
            "totalPIIColumns": 1,
            "piiByColumn": {"email": ["EMAIL"]},
            "recommendations": ["Mask the 'email' column in exports"]
        },
        "duplicateAnalysis": {
            "totalDuplicates": 14,
            "duplicatePercentage": 1.4,
            "duplicateRowIndices": [12, 47, 311, 902],
            "duplicatesByColumn": {"country": 14, "age": 9, "signup_date": 9},
            "hasExactDuplicates": true,
            "hasFuzzyDuplicates": false
        },
        "processingTimeMs": 842
    })
}

pub fn sample_report() -> AnalysisReport {
    serde_json::from_value(sample_report_json()).expect("sample report should deserialize")
}

/// Minimal string profile with a chosen null percentage.
pub fn profile_with_nulls(name: &str, null_percentage: f64) -> ColumnProfile {
    serde_json::from_value(json!({
        "columnName": name,
        "dataType": "STRING",
        "totalCount": 1000,
        "nullCount": (null_percentage * 10.0) as u64,
        "uniqueCount": 500,
        "nullPercentage": null_percentage,
        "uniquePercentage": 50.0
    }))
    .expect("profile should deserialize")
}
