use crate::model::vitals::VitalMetric;

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdProfile {
    pub band_excellent_min: f64,
    pub band_good_min: f64,
    pub band_needs_improvement_min: f64,

    pub volume_high: i64,
    pub volume_medium: i64,
    pub difficulty_easy_below: i64,
    pub difficulty_medium_below: i64,
    pub position_top: u32,
    pub position_first_page: u32,
    pub opportunity_high_min: u8,
    pub opportunity_medium_min: u8,

    pub difficulty_label_easy_max: i64,
    pub difficulty_label_medium_max: i64,

    pub lcp: VitalThresholds,
    pub fid: VitalThresholds,
    pub cls: VitalThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalThresholds {
    pub good: f64,
    pub poor: f64,
}

impl ThresholdProfile {
    pub const fn default_v1() -> Self {
        Self {
            band_excellent_min: 90.0,
            band_good_min: 70.0,
            band_needs_improvement_min: 50.0,
            volume_high: 1000,
            volume_medium: 100,
            difficulty_easy_below: 30,
            difficulty_medium_below: 70,
            position_top: 3,
            position_first_page: 10,
            opportunity_high_min: 8,
            opportunity_medium_min: 6,
            difficulty_label_easy_max: 30,
            difficulty_label_medium_max: 70,
            lcp: VitalThresholds {
                good: 2.5,
                poor: 4.0,
            },
            fid: VitalThresholds {
                good: 100.0,
                poor: 300.0,
            },
            cls: VitalThresholds {
                good: 0.1,
                poor: 0.25,
            },
        }
    }

    pub fn vital(&self, metric: VitalMetric) -> VitalThresholds {
        match metric {
            VitalMetric::Lcp => self.lcp,
            VitalMetric::Fid => self.fid,
            VitalMetric::Cls => self.cls,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

pub const DEFAULT_THRESHOLDS: ThresholdProfile = ThresholdProfile::default_v1();
