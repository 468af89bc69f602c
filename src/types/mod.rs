//! Core data types for material-balance analysis

mod regression;
mod study;

pub use regression::{
    AnalysisQuality, AnalysisReport, DriveIndices, DriveMechanism, PlotType, RegressionResult,
};
pub use study::{AquiferModel, DataPoint, MbeTerms, Study};
