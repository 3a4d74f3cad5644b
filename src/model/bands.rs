use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "emerald",
            ScoreBand::Good => "green",
            ScoreBand::NeedsImprovement => "yellow",
            ScoreBand::Poor => "red",
        }
    }

    pub fn range(self) -> (u8, u8) {
        match self {
            ScoreBand::Excellent => (90, 100),
            ScoreBand::Good => (70, 89),
            ScoreBand::NeedsImprovement => (50, 69),
            ScoreBand::Poor => (0, 49),
        }
    }
}

pub fn band_order() -> &'static [ScoreBand] {
    &[
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::NeedsImprovement,
        ScoreBand::Poor,
    ]
}
