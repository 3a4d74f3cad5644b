use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalMetric {
    Lcp,
    Fid,
    Cls,
}

impl VitalMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalMetric::Lcp => "lcp",
            VitalMetric::Fid => "fid",
            VitalMetric::Cls => "cls",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalMetric::Lcp => "s",
            VitalMetric::Fid => "ms",
            VitalMetric::Cls => "",
        }
    }
}

impl FromStr for VitalMetric {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lcp" => Ok(VitalMetric::Lcp),
            "fid" | "inp" => Ok(VitalMetric::Fid),
            "cls" => Ok(VitalMetric::Cls),
            _ => Err(ScoreError::UnsupportedMetric(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl VitalRating {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalRating::Good => "good",
            VitalRating::NeedsImprovement => "needs-improvement",
            VitalRating::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalSample {
    pub metric: VitalMetric,
    pub value: f64,
}
