use crate::error::ScoreError;
use crate::model::thresholds::{DEFAULT_THRESHOLDS, ThresholdProfile};
use crate::model::vitals::{VitalMetric, VitalRating, VitalSample};

pub fn classify_vital(metric: VitalMetric, value: f64) -> Result<VitalRating, ScoreError> {
    classify_vital_with(metric, value, &DEFAULT_THRESHOLDS)
}

pub fn classify_vital_tag(tag: &str, value: f64) -> Result<VitalRating, ScoreError> {
    let metric: VitalMetric = tag.parse()?;
    classify_vital(metric, value)
}

pub fn classify_sample(sample: &VitalSample) -> Result<VitalRating, ScoreError> {
    classify_vital(sample.metric, sample.value)
}

pub fn classify_vital_with(
    metric: VitalMetric,
    value: f64,
    thresholds: &ThresholdProfile,
) -> Result<VitalRating, ScoreError> {
    if value.is_nan() || value < 0.0 {
        return Err(ScoreError::InvalidInput(format!(
            "{} must be a non-negative number, got {value}",
            metric.as_str()
        )));
    }

    let bounds = thresholds.vital(metric);
    Ok(if value <= bounds.good {
        VitalRating::Good
    } else if value <= bounds.poor {
        VitalRating::NeedsImprovement
    } else {
        VitalRating::Poor
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/vitals.rs"]
mod tests;
