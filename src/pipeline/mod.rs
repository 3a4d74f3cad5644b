pub mod stage1_scores;
pub mod stage2_issues;
pub mod stage3_keywords;
pub mod stage4_vitals;
pub mod stage5_report;

use crate::error::ScoreError;
use crate::input::AuditInput;
use crate::report::{AuditReport, ToolMeta};

use stage1_scores::run_stage1;
use stage2_issues::run_stage2;
use stage3_keywords::run_stage3;
use stage4_vitals::run_stage4;

pub fn run_audit(input: &AuditInput) -> Result<AuditReport, ScoreError> {
    let scores = run_stage1(input);
    tracing::info!(
        overall = scores.overall.score,
        band = scores.overall.label,
        "stage1 scores done"
    );

    let issues = run_stage2(&input.issues)?;
    tracing::info!(n = issues.issues.len(), "stage2 issues ranked");

    let keywords = run_stage3(&input.keywords)?;
    tracing::info!(n = keywords.keywords.len(), "stage3 keywords classified");

    let vitals = run_stage4(&input.vitals)?;
    tracing::info!(n = vitals.vitals.len(), "stage4 vitals classified");

    Ok(AuditReport {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        project: input.project.clone(),
        url: input.url.clone(),
        scores,
        issues,
        keywords,
        vitals,
    })
}
