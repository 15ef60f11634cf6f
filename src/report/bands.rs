//! Score band table shared by level and color presentation.
//!
//! The service derives `qualityLevel` from the health score; the client
//! only selects display colors, but both mappings must agree on the same
//! bands. A single ordered table keeps them consistent.

use crate::report::QualityLevel;

/// One score band: the lowest score that falls in the band, the level the
/// service assigns to it, and the display color used client-side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub lower_bound: f64,
    pub level: QualityLevel,
    pub color: &'static str,
}

/// Bands ordered from best to worst. Lookup walks the table and takes the
/// first band whose lower bound the score meets, so the final entry is the
/// catch-all.
pub const SCORE_BANDS: [ScoreBand; 5] = [
    ScoreBand {
        lower_bound: 90.0,
        level: QualityLevel::Excellent,
        color: "green",
    },
    ScoreBand {
        lower_bound: 75.0,
        level: QualityLevel::Good,
        color: "blue",
    },
    ScoreBand {
        lower_bound: 60.0,
        level: QualityLevel::Fair,
        color: "yellow",
    },
    ScoreBand {
        lower_bound: 40.0,
        level: QualityLevel::Poor,
        color: "orange",
    },
    ScoreBand {
        lower_bound: 0.0,
        level: QualityLevel::Critical,
        color: "red",
    },
];

/// Returns the band a health score falls in. Scores below zero clamp to
/// the bottom band.
pub fn band_for_score(score: f64) -> &'static ScoreBand {
    SCORE_BANDS
        .iter()
        .find(|band| score >= band.lower_bound)
        .unwrap_or(&SCORE_BANDS[SCORE_BANDS.len() - 1])
}

/// Display color for a health score. Purely cosmetic; mirrors the bands
/// the service uses for `qualityLevel`.
pub fn score_color(score: f64) -> &'static str {
    band_for_score(score).color
}

impl QualityLevel {
    /// The level the band table assigns to a score.
    ///
    /// Used to cross-check a received report, never to override the
    /// service's own `qualityLevel`.
    pub fn for_score(score: f64) -> Self {
        band_for_score(score).level
    }

    /// Display color for this level.
    pub fn color(&self) -> &'static str {
        SCORE_BANDS
            .iter()
            .find(|band| band.level == *self)
            .map(|band| band.color)
            .unwrap_or("red")
    }
}
