use std::cmp::Ordering;

use crate::error::ScoreError;
use crate::model::severity::IssueSeverity;

pub fn rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Critical => 1,
        IssueSeverity::High => 2,
        IssueSeverity::Medium => 3,
        IssueSeverity::Low => 4,
    }
}

pub fn rank_tag(tag: &str) -> Result<u8, ScoreError> {
    let severity: IssueSeverity = tag.parse()?;
    Ok(rank(severity))
}

pub fn compare(a: IssueSeverity, b: IssueSeverity) -> i8 {
    match ordering(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn ordering(a: IssueSeverity, b: IssueSeverity) -> Ordering {
    rank(a).cmp(&rank(b))
}

pub fn sort_by_severity<T, F>(items: &mut [T], mut severity_of: F)
where
    F: FnMut(&T) -> IssueSeverity,
{
    items.sort_by(|a, b| ordering(severity_of(a), severity_of(b)));
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/prioritize.rs"]
mod tests;
