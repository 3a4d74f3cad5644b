use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opportunity {
    High,
    Medium,
    Low,
}

impl Opportunity {
    pub fn as_str(self) -> &'static str {
        match self {
            Opportunity::High => "high",
            Opportunity::Medium => "medium",
            Opportunity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpportunityBreakdown {
    pub volume_score: u8,
    pub difficulty_score: u8,
    pub position_score: u8,
    pub total: u8,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "green",
            DifficultyLevel::Medium => "yellow",
            DifficultyLevel::Hard => "red",
        }
    }
}

pub fn opportunity_order() -> &'static [Opportunity] {
    &[Opportunity::High, Opportunity::Medium, Opportunity::Low]
}
