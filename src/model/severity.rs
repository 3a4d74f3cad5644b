use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Critical => "critical",
            IssueSeverity::High => "high",
            IssueSeverity::Medium => "medium",
            IssueSeverity::Low => "low",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            IssueSeverity::Critical => "red",
            IssueSeverity::High => "orange",
            IssueSeverity::Medium => "yellow",
            IssueSeverity::Low => "blue",
        }
    }
}

impl FromStr for IssueSeverity {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(IssueSeverity::Critical),
            "high" => Ok(IssueSeverity::High),
            "medium" => Ok(IssueSeverity::Medium),
            "low" => Ok(IssueSeverity::Low),
            _ => Err(ScoreError::InvalidSeverity(s.to_string())),
        }
    }
}

pub fn severity_order() -> &'static [IssueSeverity] {
    &[
        IssueSeverity::Critical,
        IssueSeverity::High,
        IssueSeverity::Medium,
        IssueSeverity::Low,
    ]
}
