use serde::Serialize;

use crate::error::ScoreError;
use crate::input::IssueInput;
use crate::model::severity::{IssueSeverity, severity_order};
use crate::scoring::prioritize::{rank, sort_by_severity};

#[derive(Debug, Clone, Serialize)]
pub struct RankedIssue {
    pub id: String,
    pub title: String,
    pub category: String,
    pub severity: IssueSeverity,
    pub rank: u8,
    pub color_tag: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCount {
    pub severity: IssueSeverity,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage2Output {
    pub issues: Vec<RankedIssue>,
    pub counts: Vec<SeverityCount>,
}

pub fn run_stage2(issues: &[IssueInput]) -> Result<Stage2Output, ScoreError> {
    let mut ranked = Vec::with_capacity(issues.len());
    for issue in issues {
        let severity = issue.impact.parse::<IssueSeverity>().inspect_err(|err| {
            tracing::error!(issue = %issue.id, title = %issue.title, "{err}");
        })?;
        ranked.push(RankedIssue {
            id: issue.id.clone(),
            title: issue.title.clone(),
            category: issue.category.clone(),
            severity,
            rank: rank(severity),
            color_tag: severity.color_tag(),
        });
    }

    sort_by_severity(&mut ranked, |issue| issue.severity);

    let counts = severity_order()
        .iter()
        .map(|&severity| SeverityCount {
            severity,
            count: ranked.iter().filter(|i| i.severity == severity).count(),
        })
        .collect();

    Ok(Stage2Output {
        issues: ranked,
        counts,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_issues.rs"]
mod tests;
