use crate::model::keywords::Opportunity;
use crate::model::vitals::VitalMetric;
use crate::pipeline::stage3_keywords::top_opportunities;
use crate::report::{AuditReport, format_duration, format_f64_2, format_percentage};
use crate::scoring::trend::TrendDirection;

pub fn render_report_text(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str("SEO Audit Report\n");
    out.push_str("================\n\n");
    out.push_str(&format!("Project: {}\n", report.project));
    if let Some(url) = &report.url {
        out.push_str(&format!("URL: {}\n", url));
    }
    out.push('\n');

    out.push_str("1. Scores\n");
    let overall = &report.scores.overall;
    out.push_str(&format!(
        "Overall: {} ({})\n",
        format_percentage(overall.score),
        overall.label
    ));
    if let Some(trend) = &report.scores.trend {
        out.push_str(&format!(
            "Trend: {} {} ({}%)\n",
            trend_arrow(trend.direction),
            format_f64_2(trend.change.abs()),
            trend.change_percentage
        ));
    }
    for c in &report.scores.categories {
        out.push_str(&format!(
            "  {:<16} {:>6}  {}\n",
            c.name,
            format_f64_2(c.class.score),
            c.class.label
        ));
    }
    if !report.scores.unmeasured.is_empty() {
        out.push_str(&format!(
            "Not measured: {}\n",
            report.scores.unmeasured.join(", ")
        ));
    }
    if let Some(ps) = &report.scores.page_speed {
        out.push_str(&format!("Page speed: {} ({})\n", ps.score, ps.label));
    }
    out.push('\n');

    out.push_str("2. Issues\n");
    let counts = report
        .issues
        .counts
        .iter()
        .map(|c| format!("{}={}", c.severity.as_str(), c.count))
        .collect::<Vec<_>>();
    out.push_str(&format!("Counts: {}\n", counts.join(", ")));
    for issue in &report.issues.issues {
        out.push_str(&format!(
            "  [{}] {} ({})\n",
            issue.severity.as_str(),
            issue.title,
            issue.category
        ));
    }
    out.push('\n');

    out.push_str("3. Keyword opportunities\n");
    let counts = report
        .keywords
        .counts
        .iter()
        .map(|c| format!("{}={}", c.opportunity.as_str(), c.count))
        .collect::<Vec<_>>();
    out.push_str(&format!("Counts: {}\n", counts.join(", ")));
    for kw in top_opportunities(&report.keywords, Opportunity::High) {
        out.push_str(&format!(
            "  {} (volume {}, difficulty {} {}, score {})\n",
            kw.keyword,
            kw.search_volume,
            kw.difficulty,
            kw.difficulty_level.label(),
            kw.breakdown.total
        ));
    }
    out.push('\n');

    out.push_str("4. Core Web Vitals\n");
    for v in &report.vitals.vitals {
        out.push_str(&format!(
            "  {:<4} {:>10}  {}\n",
            v.sample.metric.as_str().to_ascii_uppercase(),
            format_vital_value(v.sample.metric, v.sample.value),
            v.rating.as_str()
        ));
    }
    match report.vitals.worst {
        Some(worst) => out.push_str(&format!("Worst rating: {}\n", worst.as_str())),
        None => out.push_str("No samples.\n"),
    }

    out
}

fn format_vital_value(metric: VitalMetric, value: f64) -> String {
    match metric {
        VitalMetric::Lcp => format_duration(value),
        VitalMetric::Fid => format!("{}{}", value.round(), metric.unit()),
        VitalMetric::Cls => format!("{:.3}{}", value, metric.unit()),
    }
}

fn trend_arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Increase => "up",
        TrendDirection::Decrease => "down",
        TrendDirection::Neutral => "flat",
    }
}
