mod bands;
mod builder;
mod narrative;
pub mod views;

pub use bands::{BandThresholds, InvalidBandThresholds, ScoreBand};
pub use builder::ReportBuilder;
pub use views::QuizReport;
