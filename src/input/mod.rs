use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::Deserialize;

use crate::error::InputError;
use crate::scoring::aggregate::NamedScoreSet;

#[derive(Debug, Clone, Deserialize)]
pub struct AuditInput {
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default)]
    pub url: Option<String>,
    pub scores: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub previous_overall: Option<f64>,
    #[serde(default)]
    pub page_speed: Option<PageSpeedInput>,
    #[serde(default)]
    pub issues: Vec<IssueInput>,
    #[serde(default)]
    pub keywords: Vec<KeywordInput>,
    #[serde(default)]
    pub vitals: Vec<VitalInput>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageSpeedInput {
    pub desktop: f64,
    pub mobile: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueInput {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub impact: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordInput {
    pub keyword: String,
    pub search_volume: i64,
    pub difficulty: i64,
    #[serde(default)]
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VitalInput {
    pub metric: String,
    pub value: f64,
}

fn default_project() -> String {
    "unnamed".to_string()
}

impl AuditInput {
    pub fn named_scores(&self) -> NamedScoreSet {
        self.scores
            .iter()
            .filter_map(|(name, score)| score.map(|s| (name.clone(), s)))
            .collect()
    }
}

pub fn load_audit(path: &Path) -> Result<AuditInput, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = open_maybe_gz(path)?;
    let audit: AuditInput = serde_json::from_reader(reader)?;

    tracing::info!(
        project = %audit.project,
        categories = audit.scores.len(),
        issues = audit.issues.len(),
        keywords = audit.keywords.len(),
        vitals = audit.vitals.len(),
        "loaded audit input from {}",
        path.display()
    );

    Ok(audit)
}

pub fn parse_audit(json: &str) -> Result<AuditInput, InputError> {
    Ok(serde_json::from_str(json)?)
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
