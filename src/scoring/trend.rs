use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub change: f64,
    pub direction: TrendDirection,
    pub change_percentage: f64,
}

pub fn compute_trend(current: f64, previous: f64) -> Trend {
    let change = current - previous;
    let change_percentage = if previous == 0.0 {
        0.0
    } else {
        ((change / previous) * 100.0).round().abs()
    };
    let direction = if change > 0.0 {
        TrendDirection::Increase
    } else if change < 0.0 {
        TrendDirection::Decrease
    } else {
        TrendDirection::Neutral
    };

    Trend {
        change,
        direction,
        change_percentage,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/trend.rs"]
mod tests;
