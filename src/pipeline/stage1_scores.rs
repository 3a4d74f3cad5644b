use serde::Serialize;

use crate::input::AuditInput;
use crate::model::bands::{ScoreBand, band_order};
use crate::scoring::aggregate::{aggregate, overall_score, page_speed_score};
use crate::scoring::normalize::{ScoreClass, classify_score};
use crate::scoring::trend::{Trend, compute_trend};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub name: String,
    pub class: ScoreClass,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandCount {
    pub band: ScoreBand,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage1Output {
    pub categories: Vec<CategoryResult>,
    pub band_counts: Vec<BandCount>,
    pub unmeasured: Vec<String>,
    pub mean: f64,
    pub overall: ScoreClass,
    pub page_speed: Option<ScoreClass>,
    pub trend: Option<Trend>,
}

pub fn run_stage1(input: &AuditInput) -> Stage1Output {
    let named = input.named_scores();

    let categories = named
        .iter()
        .map(|(name, &score)| {
            let class = classify_score(score);
            if class.score != score {
                tracing::warn!(
                    category = %name,
                    raw = score,
                    clamped = class.score,
                    "category score outside 0..=100 was clamped"
                );
            }
            CategoryResult {
                name: name.clone(),
                class,
            }
        })
        .collect::<Vec<_>>();
    let unmeasured = input
        .scores
        .iter()
        .filter(|(_, score)| score.is_none())
        .map(|(name, _)| name.clone())
        .collect::<Vec<_>>();

    let band_counts = band_order()
        .iter()
        .map(|&band| BandCount {
            band,
            count: categories.iter().filter(|c| c.class.band == band).count(),
        })
        .collect();

    if !unmeasured.is_empty() {
        tracing::debug!(?unmeasured, "categories excluded from aggregation");
    }

    let mean = aggregate(&named);
    let overall = classify_score(overall_score(&named));

    let page_speed = input
        .page_speed
        .map(|ps| classify_score(page_speed_score(ps.desktop, ps.mobile)));
    let trend = input
        .previous_overall
        .map(|previous| compute_trend(overall.score, previous));

    Stage1Output {
        categories,
        band_counts,
        unmeasured,
        mean,
        overall,
        page_speed,
        trend,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scores.rs"]
mod tests;
