use serde::Serialize;

use crate::model::bands::ScoreBand;
use crate::model::thresholds::{DEFAULT_THRESHOLDS, ThresholdProfile};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreClass {
    pub score: f64,
    pub band: ScoreBand,
    pub label: &'static str,
    pub color_tag: &'static str,
    pub range: (u8, u8),
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        // NaN bands as Poor
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

pub fn classify_score(score: f64) -> ScoreClass {
    classify_score_with(score, &DEFAULT_THRESHOLDS)
}

pub fn classify_score_with(score: f64, thresholds: &ThresholdProfile) -> ScoreClass {
    let score = clamp_score(score);
    let band = band_for(score, thresholds);
    ScoreClass {
        score,
        band,
        label: band.label(),
        color_tag: band.color_tag(),
        range: band.range(),
    }
}

fn band_for(score: f64, thresholds: &ThresholdProfile) -> ScoreBand {
    if score >= thresholds.band_excellent_min {
        ScoreBand::Excellent
    } else if score >= thresholds.band_good_min {
        ScoreBand::Good
    } else if score >= thresholds.band_needs_improvement_min {
        ScoreBand::NeedsImprovement
    } else {
        ScoreBand::Poor
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/normalize.rs"]
mod tests;
