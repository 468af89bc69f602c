//! Material-Balance Analysis Engine
//!
//! Havlena-Odeh pipeline over a [`Study`](crate::types::Study):
//!
//! 1. `terms` - per-point expansion terms F, Eo, Eg, Efw
//! 2. `drive` - plot-type selection from the declared drive mechanisms
//! 3. `regression` - ordinary least-squares fits (through-origin and
//!    with-intercept) with R²
//! 4. `analysis` - orchestration, quality grading, drive indices
//! 5. `water_influx` - Fetkovich and Carter-Tracy aquifer models
//!
//! Every step is pure and deterministic: identical input produces
//! bit-identical output, and nothing is cached between calls.

pub mod analysis;
pub mod drive;
pub mod regression;
pub mod terms;
pub mod water_influx;

pub use analysis::perform_havlena_odeh_analysis;
pub use drive::DriveModel;
pub use terms::calculate_mbe_terms;
pub use water_influx::{calculate_carter_tracy_water_influx, calculate_fetkovich_water_influx};

use thiserror::Error;

use crate::formulas::DomainError;

/// Minimum usable data points for a material-balance regression.
pub const MIN_REGRESSION_POINTS: usize = 3;

/// Errors raised when a multi-step analysis cannot be completed with the
/// data provided.
///
/// The caller must supply additional or corrected data before retrying; the
/// engine performs no partial or best-effort degradation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("study contains no data points")]
    EmptyStudy,

    #[error("study is missing initial condition `{field}`")]
    MissingInitialCondition { field: &'static str },

    #[error("study declares a gas cap but no gas-cap ratio m")]
    MissingGasCapRatio,

    #[error("data point {index} has no water influx and the study declares no aquifer model")]
    MissingWaterInflux { index: usize },

    #[error("regression needs at least {needed} usable points, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("data point {index} is invalid: {source}")]
    InvalidDataPoint { index: usize, source: DomainError },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CalculationError {
    /// Machine-readable error code for the surrounding system.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyStudy => "EMPTY_STUDY",
            Self::MissingInitialCondition { .. } => "MISSING_INITIAL_CONDITION",
            Self::MissingGasCapRatio => "MISSING_GAS_CAP_RATIO",
            Self::MissingWaterInflux { .. } => "MISSING_WATER_INFLUX",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InvalidDataPoint { .. } => "INVALID_DATA_POINT",
            Self::Domain(e) => e.code(),
        }
    }
}
