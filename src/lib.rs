pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use error::{InputError, RunError, ScoreError};
pub use model::bands::ScoreBand;
pub use model::keywords::{DifficultyLevel, Opportunity, OpportunityBreakdown};
pub use model::severity::IssueSeverity;
pub use model::vitals::{VitalMetric, VitalRating, VitalSample};
pub use scoring::aggregate::{NamedScoreSet, aggregate, overall_score, page_speed_score};
pub use scoring::keywords::{classify_opportunity, difficulty_level, score_opportunity};
pub use scoring::normalize::{ScoreClass, classify_score};
pub use scoring::prioritize::{compare, rank, rank_tag, sort_by_severity};
pub use scoring::trend::{Trend, TrendDirection, compute_trend};
pub use scoring::vitals::{classify_vital, classify_vital_tag};
