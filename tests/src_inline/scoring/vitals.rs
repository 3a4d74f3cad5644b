use super::*;

#[test]
fn test_lcp() {
    assert_eq!(classify_vital_tag("lcp", 2.1), Ok(VitalRating::Good));
    assert_eq!(classify_vital_tag("lcp", 2.5), Ok(VitalRating::Good));
    assert_eq!(
        classify_vital_tag("lcp", 3.0),
        Ok(VitalRating::NeedsImprovement)
    );
    assert_eq!(
        classify_vital_tag("lcp", 4.0),
        Ok(VitalRating::NeedsImprovement)
    );
    assert_eq!(classify_vital_tag("lcp", 5.0), Ok(VitalRating::Poor));
}

#[test]
fn test_fid_and_cls() {
    assert_eq!(classify_vital_tag("fid", 89.0), Ok(VitalRating::Good));
    assert_eq!(classify_vital(VitalMetric::Fid, 100.0), Ok(VitalRating::Good));
    assert_eq!(
        classify_vital(VitalMetric::Fid, 250.0),
        Ok(VitalRating::NeedsImprovement)
    );
    assert_eq!(classify_vital(VitalMetric::Fid, 301.0), Ok(VitalRating::Poor));
    assert_eq!(classify_vital_tag("cls", 0.08), Ok(VitalRating::Good));
    assert_eq!(classify_vital_tag("cls", 0.1), Ok(VitalRating::Good));
    assert_eq!(
        classify_vital_tag("cls", 0.25),
        Ok(VitalRating::NeedsImprovement)
    );
    assert_eq!(classify_vital_tag("cls", 0.3), Ok(VitalRating::Poor));
}

#[test]
fn test_inp_alias_and_case() {
    assert_eq!(classify_vital_tag("INP", 90.0), Ok(VitalRating::Good));
    assert_eq!(classify_vital_tag(" Lcp ", 2.0), Ok(VitalRating::Good));
}

#[test]
fn test_errors() {
    assert_eq!(
        classify_vital_tag("xyz", 1.0),
        Err(ScoreError::UnsupportedMetric("xyz".to_string()))
    );
    assert!(matches!(
        classify_vital_tag("lcp", -1.0),
        Err(ScoreError::InvalidInput(_))
    ));
    assert!(matches!(
        classify_vital(VitalMetric::Cls, f64::NAN),
        Err(ScoreError::InvalidInput(_))
    ));
    assert_eq!(classify_vital(VitalMetric::Lcp, 0.0), Ok(VitalRating::Good));
}

#[test]
fn test_sample() {
    let sample = VitalSample {
        metric: VitalMetric::Lcp,
        value: 4.5,
    };
    assert_eq!(classify_sample(&sample), Ok(VitalRating::Poor));
}
