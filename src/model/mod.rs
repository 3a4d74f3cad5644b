pub mod bands;
pub mod keywords;
pub mod severity;
pub mod thresholds;
pub mod vitals;
