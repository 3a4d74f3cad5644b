pub mod json;
pub mod text;

use serde::Serialize;

use crate::pipeline::stage1_scores::Stage1Output;
use crate::pipeline::stage2_issues::Stage2Output;
use crate::pipeline::stage3_keywords::Stage3Output;
use crate::pipeline::stage4_vitals::Stage4Output;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub tool: ToolMeta,
    pub project: String,
    pub url: Option<String>,
    pub scores: Stage1Output,
    pub issues: Stage2Output,
    pub keywords: Stage3Output,
    pub vitals: Stage4Output,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_percentage(v: f64) -> String {
    format!("{:.1}%", v)
}

pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        return format!("{}ms", (seconds * 1000.0).round());
    }
    if seconds < 60.0 {
        return format!("{:.1}s", seconds);
    }
    let minutes = (seconds / 60.0).floor();
    let remaining = (seconds % 60.0).floor();
    format!("{}m {}s", minutes, remaining)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
