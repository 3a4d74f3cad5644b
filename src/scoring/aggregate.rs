use std::collections::BTreeMap;

pub type NamedScoreSet = BTreeMap<String, f64>;

// Not clamped.
pub fn aggregate(scores: &NamedScoreSet) -> f64 {
    aggregate_values(scores.values().copied())
}

pub fn aggregate_values<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for v in values {
        if v.is_nan() {
            continue;
        }
        sum += v;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

pub fn overall_score(scores: &NamedScoreSet) -> f64 {
    aggregate(scores).round()
}

pub fn page_speed_score(desktop: f64, mobile: f64) -> f64 {
    ((desktop + mobile) / 2.0).round()
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/aggregate.rs"]
mod tests;
