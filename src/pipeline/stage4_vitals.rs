use serde::Serialize;

use crate::error::ScoreError;
use crate::input::VitalInput;
use crate::model::vitals::{VitalMetric, VitalRating, VitalSample};
use crate::scoring::vitals::classify_sample;

#[derive(Debug, Clone, Serialize)]
pub struct VitalResult {
    pub sample: VitalSample,
    pub rating: VitalRating,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage4Output {
    pub vitals: Vec<VitalResult>,
    pub worst: Option<VitalRating>,
}

pub fn run_stage4(vitals: &[VitalInput]) -> Result<Stage4Output, ScoreError> {
    let mut out = Vec::with_capacity(vitals.len());
    for v in vitals {
        let rated = v.metric.parse::<VitalMetric>().and_then(|metric| {
            let sample = VitalSample {
                metric,
                value: v.value,
            };
            classify_sample(&sample).map(|rating| VitalResult { sample, rating })
        });
        out.push(rated.inspect_err(|err| {
            tracing::error!(metric = %v.metric, value = v.value, "{err}");
        })?);
    }

    let worst = out.iter().map(|v| v.rating).max_by_key(|r| severity(*r));

    Ok(Stage4Output { vitals: out, worst })
}

fn severity(rating: VitalRating) -> u8 {
    match rating {
        VitalRating::Good => 0,
        VitalRating::NeedsImprovement => 1,
        VitalRating::Poor => 2,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_vitals.rs"]
mod tests;
