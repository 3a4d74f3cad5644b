use super::*;

fn set(entries: &[(&str, f64)]) -> NamedScoreSet {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_empty_is_zero() {
    assert_eq!(aggregate(&NamedScoreSet::new()), 0.0);
}

#[test]
fn test_single_is_identity() {
    assert_eq!(aggregate(&set(&[("a", 70.0)])), 70.0);
}

#[test]
fn test_mean() {
    assert_eq!(aggregate(&set(&[("a", 80.0), ("b", 60.0)])), 70.0);
    assert_eq!(aggregate(&set(&[("a", 85.0), ("b", 78.0)])), 81.5);
}

#[test]
fn test_nan_ignored() {
    assert_eq!(aggregate(&set(&[("a", 80.0), ("b", f64::NAN)])), 80.0);
    assert_eq!(aggregate(&set(&[("a", f64::NAN)])), 0.0);
}

#[test]
fn test_not_clamped() {
    assert_eq!(aggregate(&set(&[("a", 120.0), ("b", 100.0)])), 110.0);
}

#[test]
fn test_overall_score_rounds() {
    assert_eq!(overall_score(&set(&[("a", 85.0), ("b", 78.0)])), 82.0);
    assert_eq!(overall_score(&set(&[("a", 85.0), ("b", 78.0), ("c", 80.0)])), 81.0);
}

#[test]
fn test_page_speed_score() {
    assert_eq!(page_speed_score(92.0, 78.0), 85.0);
    assert_eq!(page_speed_score(91.0, 78.0), 85.0);
}
