use serde::Serialize;

use crate::error::ScoreError;
use crate::input::KeywordInput;
use crate::model::keywords::{
    DifficultyLevel, Opportunity, OpportunityBreakdown, opportunity_order,
};
use crate::scoring::keywords::{difficulty_level, score_opportunity};

#[derive(Debug, Clone, Serialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub search_volume: i64,
    pub difficulty: i64,
    pub position: Option<u32>,
    pub difficulty_level: DifficultyLevel,
    pub difficulty_color_tag: &'static str,
    pub breakdown: OpportunityBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpportunityCount {
    pub opportunity: Opportunity,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage3Output {
    pub keywords: Vec<KeywordResult>,
    pub counts: Vec<OpportunityCount>,
}

pub fn run_stage3(keywords: &[KeywordInput]) -> Result<Stage3Output, ScoreError> {
    let mut out = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let classified = score_opportunity(kw.search_volume, kw.difficulty, kw.position)
            .and_then(|breakdown| Ok((breakdown, difficulty_level(kw.difficulty)?)));
        let (breakdown, level) = classified.inspect_err(|err| {
            tracing::error!(keyword = %kw.keyword, "{err}");
        })?;
        out.push(KeywordResult {
            keyword: kw.keyword.clone(),
            search_volume: kw.search_volume,
            difficulty: kw.difficulty,
            position: kw.position,
            difficulty_level: level,
            difficulty_color_tag: level.color_tag(),
            breakdown,
        });
    }

    let counts = opportunity_order()
        .iter()
        .map(|&opportunity| OpportunityCount {
            opportunity,
            count: out
                .iter()
                .filter(|k| k.breakdown.opportunity == opportunity)
                .count(),
        })
        .collect();

    Ok(Stage3Output {
        keywords: out,
        counts,
    })
}

pub fn top_opportunities(output: &Stage3Output, tier: Opportunity) -> Vec<&KeywordResult> {
    let mut picked = output
        .keywords
        .iter()
        .filter(|k| k.breakdown.opportunity == tier)
        .collect::<Vec<_>>();
    picked.sort_by(|a, b| b.breakdown.total.cmp(&a.breakdown.total));
    picked
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_keywords.rs"]
mod tests;
