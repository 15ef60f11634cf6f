//! # Datalens - Data Quality Report Client for Rust
//!
//! Datalens is the client-side ingestion and presentation core for an
//! external data-quality analysis service. It submits a dataset — an
//! uploaded file, a remote URL, or inline JSON records — to the service,
//! receives the computed [`report::AnalysisReport`], and derives the
//! bounded, chart-ready views an interactive report surface renders.
//!
//! The analysis itself (completeness, uniqueness, validity, consistency,
//! accuracy, timeliness, PII and duplicate detection) happens inside the
//! service; this crate owns the request lifecycle and the result
//! transformations, nothing else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datalens::prelude::*;
//! use datalens::transform;
//!
//! # async fn example() -> datalens::Result<()> {
//! let client = AnalysisClient::new(
//!     ClientConfig::new().with_endpoint("https://dq.example.com/api/v1/data-quality"),
//! )?;
//!
//! let mut controller = IngestionController::new(client);
//! controller.select_mode(AcquisitionMode::Url)?;
//! controller.set_url("https://example.com/orders.csv");
//! controller.submit().await?;
//!
//! if let Some(report) = controller.report() {
//!     for dimension in transform::quality_dimensions(&report.quality_metrics) {
//!         println!("{}: {:.1}", dimension.label, dimension.score);
//!     }
//!     let nulls = transform::null_ranking(&report.column_profiles, 10);
//!     println!("{} columns with nulls ({} shown)", nulls.total, nulls.entries.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`report`**: the typed report schema and the score-band table.
//! - **`client`**: reqwest transport adapter for the three request
//!   operations, behind the [`client::AnalysisTransport`] seam.
//! - **`ingest`**: the `Idle -> Submitting -> Complete | Failed` state
//!   machine. Exactly one request may be in flight.
//! - **`transform`**: pure, idempotent chart-view derivations with
//!   truncation bookkeeping.
//! - **`drilldown`**: single-column expansion with lazy detail.
//! - **`export`**: lossless JSON artifact round trip.

pub mod client;
pub mod drilldown;
pub mod error;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod transform;

pub use error::{DatalensError, Result};

#[cfg(test)]
pub mod test_fixtures;
