pub mod aggregate;
pub mod keywords;
pub mod normalize;
pub mod prioritize;
pub mod trend;
pub mod vitals;
