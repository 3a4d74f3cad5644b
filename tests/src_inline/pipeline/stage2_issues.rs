use super::*;

fn issue(id: &str, impact: &str) -> IssueInput {
    IssueInput {
        id: id.to_string(),
        title: format!("issue {id}"),
        category: "technical".to_string(),
        impact: impact.to_string(),
    }
}

#[test]
fn test_sorted_most_urgent_first() {
    let issues = vec![
        issue("a", "low"),
        issue("b", "critical"),
        issue("c", "medium"),
        issue("d", "high"),
        issue("e", "critical"),
    ];
    let out = run_stage2(&issues).unwrap();
    let ids = out.issues.iter().map(|i| i.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "e", "d", "c", "a"]);
    assert_eq!(out.issues[0].rank, 1);
    assert_eq!(out.issues[0].color_tag, "red");
}

#[test]
fn test_counts_in_severity_order() {
    let issues = vec![issue("a", "low"), issue("b", "Low"), issue("c", "high")];
    let out = run_stage2(&issues).unwrap();
    let counts = out
        .counts
        .iter()
        .map(|c| (c.severity, c.count))
        .collect::<Vec<_>>();
    assert_eq!(
        counts,
        vec![
            (IssueSeverity::Critical, 0),
            (IssueSeverity::High, 1),
            (IssueSeverity::Medium, 0),
            (IssueSeverity::Low, 2),
        ]
    );
}

#[test]
fn test_unknown_severity_fails_run() {
    let issues = vec![issue("a", "low"), issue("b", "blocker")];
    let err = run_stage2(&issues).unwrap_err();
    assert_eq!(err, ScoreError::InvalidSeverity("blocker".to_string()));
}
