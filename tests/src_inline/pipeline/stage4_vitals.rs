use super::*;

fn vital(metric: &str, value: f64) -> VitalInput {
    VitalInput {
        metric: metric.to_string(),
        value,
    }
}

#[test]
fn test_rates_samples_and_worst() {
    let vitals = vec![vital("lcp", 2.1), vital("fid", 250.0), vital("cls", 0.08)];
    let out = run_stage4(&vitals).unwrap();
    let ratings = out.vitals.iter().map(|v| v.rating).collect::<Vec<_>>();
    assert_eq!(
        ratings,
        vec![
            VitalRating::Good,
            VitalRating::NeedsImprovement,
            VitalRating::Good,
        ]
    );
    assert_eq!(out.vitals[1].sample.metric, VitalMetric::Fid);
    assert_eq!(out.worst, Some(VitalRating::NeedsImprovement));
}

#[test]
fn test_no_samples() {
    let out = run_stage4(&[]).unwrap();
    assert!(out.vitals.is_empty());
    assert_eq!(out.worst, None);
}

#[test]
fn test_errors_propagate() {
    assert_eq!(
        run_stage4(&[vital("ttfb", 1.0)]).unwrap_err(),
        ScoreError::UnsupportedMetric("ttfb".to_string())
    );
    assert!(matches!(
        run_stage4(&[vital("lcp", -1.0)]),
        Err(ScoreError::InvalidInput(_))
    ));
}
