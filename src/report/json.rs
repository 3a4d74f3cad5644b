use crate::report::AuditReport;

pub fn render_summary_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
