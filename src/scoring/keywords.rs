use crate::error::ScoreError;
use crate::model::keywords::{DifficultyLevel, Opportunity, OpportunityBreakdown};
use crate::model::thresholds::{DEFAULT_THRESHOLDS, ThresholdProfile};

pub fn classify_opportunity(
    volume: i64,
    difficulty: i64,
    position: Option<u32>,
) -> Result<Opportunity, ScoreError> {
    Ok(score_opportunity(volume, difficulty, position)?.opportunity)
}

pub fn score_opportunity(
    volume: i64,
    difficulty: i64,
    position: Option<u32>,
) -> Result<OpportunityBreakdown, ScoreError> {
    score_opportunity_with(volume, difficulty, position, &DEFAULT_THRESHOLDS)
}

pub fn score_opportunity_with(
    volume: i64,
    difficulty: i64,
    position: Option<u32>,
    t: &ThresholdProfile,
) -> Result<OpportunityBreakdown, ScoreError> {
    validate_volume(volume)?;
    validate_difficulty(difficulty)?;

    let volume_score = if volume > t.volume_high {
        3
    } else if volume > t.volume_medium {
        2
    } else {
        1
    };

    let difficulty_score = if difficulty < t.difficulty_easy_below {
        3
    } else if difficulty < t.difficulty_medium_below {
        2
    } else {
        1
    };

    // position 0 = not ranking
    let position_score = match position.filter(|&p| p > 0) {
        None => 2,
        Some(p) if p > t.position_first_page => 1,
        Some(p) if p > t.position_top => 2,
        Some(_) => 3,
    };

    let total = volume_score + difficulty_score + position_score;
    let opportunity = if total >= t.opportunity_high_min {
        Opportunity::High
    } else if total >= t.opportunity_medium_min {
        Opportunity::Medium
    } else {
        Opportunity::Low
    };

    Ok(OpportunityBreakdown {
        volume_score,
        difficulty_score,
        position_score,
        total,
        opportunity,
    })
}

pub fn difficulty_level(difficulty: i64) -> Result<DifficultyLevel, ScoreError> {
    validate_difficulty(difficulty)?;
    let t = &DEFAULT_THRESHOLDS;
    Ok(if difficulty <= t.difficulty_label_easy_max {
        DifficultyLevel::Easy
    } else if difficulty <= t.difficulty_label_medium_max {
        DifficultyLevel::Medium
    } else {
        DifficultyLevel::Hard
    })
}

fn validate_volume(volume: i64) -> Result<(), ScoreError> {
    if volume < 0 {
        return Err(ScoreError::InvalidInput(format!(
            "search volume must be non-negative, got {volume}"
        )));
    }
    Ok(())
}

fn validate_difficulty(difficulty: i64) -> Result<(), ScoreError> {
    if !(0..=100).contains(&difficulty) {
        return Err(ScoreError::InvalidInput(format!(
            "keyword difficulty must be within 0..=100, got {difficulty}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/keywords.rs"]
mod tests;
