use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RunError;
use crate::report::AuditReport;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
    All,
}

impl ReportFormat {
    fn json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::All)
    }

    fn text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::All)
    }
}

pub fn write_reports(
    report: &AuditReport,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<(), RunError> {
    fs::create_dir_all(out_dir).map_err(|e| report_error(out_dir, e))?;

    if format.json() {
        let path = out_dir.join("summary.json");
        let json = render_summary_json(report)
            .map_err(|e| report_error(&path, std::io::Error::other(e)))?;
        write_text(&path, &json)?;
    }

    if format.text() {
        let path = out_dir.join("report.txt");
        write_text(&path, &render_report_text(report))?;

        let path = out_dir.join("issues.tsv");
        write_issues_tsv(report, &path).map_err(|e| report_error(&path, e))?;
    }

    tracing::info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_issues_tsv(report: &AuditReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = ["rank", "severity", "id", "category", "title"].join("\t");
    writeln!(w, "{}", header)?;

    for issue in &report.issues.issues {
        let row = [
            issue.rank.to_string(),
            issue.severity.as_str().to_string(),
            sanitize(&issue.id),
            sanitize(&issue.category),
            sanitize(&issue.title),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> Result<(), RunError> {
    fs::write(path, contents).map_err(|e| report_error(path, e))
}

fn report_error(path: &Path, source: std::io::Error) -> RunError {
    RunError::Report {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
