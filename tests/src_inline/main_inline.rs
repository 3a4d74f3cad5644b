use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("seoscore_main_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_run_defaults_to_all_formats() {
    let cli = Cli::try_parse_from(["seoscore", "run", "--input", "audit.json", "--out", "out"])
        .unwrap();
    match cli.command {
        Command::Run(config) => {
            assert_eq!(config.input, PathBuf::from("audit.json"));
            assert_eq!(config.out, PathBuf::from("out"));
            assert_eq!(config.format, FormatArg::All);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_run_json_format() {
    let cli = Cli::try_parse_from([
        "seoscore", "run", "--input", "a.json", "--out", "o", "--format", "json",
    ])
    .unwrap();
    match cli.command {
        Command::Run(config) => {
            assert_eq!(ReportFormat::from(config.format), ReportFormat::Json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_keyword_negative_volume() {
    let cli = Cli::try_parse_from([
        "seoscore", "keyword", "--volume", "-1", "--difficulty", "50",
    ])
    .unwrap();
    assert!(matches!(
        run(cli.command),
        Err(RunError::Score(seoscore::ScoreError::InvalidInput(_)))
    ));
}

#[test]
fn test_run_requires_input() {
    assert!(Cli::try_parse_from(["seoscore", "run", "--out", "o"]).is_err());
}

#[test]
fn test_vital_unsupported_metric() {
    let err = run(Command::Vital {
        metric: "xyz".to_string(),
        value: 1.0,
    })
    .unwrap_err();
    assert!(matches!(
        err,
        RunError::Score(seoscore::ScoreError::UnsupportedMetric(_))
    ));
}

#[test]
fn test_run_bad_severity_writes_no_reports() {
    let dir = make_temp_dir();
    let input = dir.join("audit.json");
    std::fs::write(
        &input,
        r#"{"scores": {"technical": 85},
            "issues": [
              {"id": "i1", "title": "Missing title", "impact": "high"},
              {"id": "i2", "title": "Broken links", "impact": "blocker"}
            ]}"#,
    )
    .unwrap();
    let out = dir.join("out");

    let err = run(Command::Run(RunConfig {
        input,
        out: out.clone(),
        format: FormatArg::All,
    }))
    .unwrap_err();

    assert!(matches!(
        err,
        RunError::Score(seoscore::ScoreError::InvalidSeverity(ref tag)) if tag == "blocker"
    ));
    assert!(!out.join("summary.json").exists());
    assert!(!out.join("report.txt").exists());
    assert!(!out.join("issues.tsv").exists());
}
