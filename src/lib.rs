//! RESBAL: Reservoir Engineering Calculation & Material-Balance Analysis
//!
//! Pure computation library that turns raw reservoir and well measurements
//! into engineering quantities. Two cooperating components:
//!
//! - **Formula Library**: closed-form petroleum-engineering formulas —
//!   volumetric OOIP/OGIP, Archie water saturation, Larionov shale volume,
//!   Standing and Beggs-Robinson PVT correlations, Vogel inflow performance,
//!   productivity index, Arps decline curves
//! - **Material-Balance Engine**: Havlena-Odeh pipeline — per-point expansion
//!   terms, drive-mechanism plot selection, least-squares regression with
//!   quality grading, drive indices, and Fetkovich/Carter-Tracy water influx
//!
//! All arithmetic is fixed-precision decimal with half-up rounding at a
//! declared output scale. Every function is pure, reentrant, and
//! deterministic; persistence, transport, and display belong to the
//! surrounding system.

pub mod config;
pub mod formulas;
pub mod mbe;
pub mod types;

// Re-export configuration
pub use config::{ArchieConfig, CalculationConfig, ConfigError, QualityThresholds};

// Re-export core types
pub use types::{
    AnalysisQuality, AnalysisReport, AquiferModel, DataPoint, DriveIndices, DriveMechanism,
    MbeTerms, PlotType, RegressionResult, Study,
};

// Re-export the formula library
pub use formulas::{
    calculate_archie_water_saturation, calculate_arps_cumulative, calculate_arps_decline_rate,
    calculate_beggs_robinson_dead_oil_viscosity, calculate_ipr_vogel, calculate_ogip,
    calculate_ooip, calculate_productivity_index, calculate_shale_volume_larionov,
    calculate_shale_volume_larionov_older, calculate_standing_bubble_point,
    calculate_standing_oil_fvf, calculate_vogel_max_rate, gamma_ray_index, DomainError,
    OUTPUT_SCALE,
};

// Re-export the material-balance engine
pub use mbe::{
    calculate_carter_tracy_water_influx, calculate_fetkovich_water_influx, calculate_mbe_terms,
    perform_havlena_odeh_analysis, CalculationError, DriveModel, MIN_REGRESSION_POINTS,
};
