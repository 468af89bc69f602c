//! Formula Library - closed-form petroleum-engineering calculations
//!
//! One pure function per formula, grouped by discipline:
//! - `volumetrics` - OOIP / OGIP in-place estimation
//! - `petrophysics` - Archie water saturation, Larionov shale volume
//! - `pvt` - Standing bubble-point / oil FVF, Beggs-Robinson dead-oil viscosity
//! - `inflow` - Vogel IPR and productivity index
//! - `decline` - Arps decline rate and cumulative production
//!
//! Every function validates its own input domain and returns a typed
//! [`DomainError`] when a constraint is violated. Results are fixed-precision
//! decimals rounded half-up to [`OUTPUT_SCALE`] fractional digits at the
//! return boundary; intermediate arithmetic runs at full `Decimal` precision
//! so chained calls do not accumulate rounding drift.

pub mod decline;
pub mod inflow;
pub mod petrophysics;
pub mod pvt;
pub mod volumetrics;

pub use decline::{calculate_arps_cumulative, calculate_arps_decline_rate};
pub use inflow::{calculate_ipr_vogel, calculate_productivity_index, calculate_vogel_max_rate};
pub use petrophysics::{
    calculate_archie_water_saturation, calculate_shale_volume_larionov,
    calculate_shale_volume_larionov_older, gamma_ray_index,
};
pub use pvt::{
    calculate_beggs_robinson_dead_oil_viscosity, calculate_standing_bubble_point,
    calculate_standing_oil_fvf,
};
pub use volumetrics::{calculate_ogip, calculate_ooip};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits carried by every formula result.
pub const OUTPUT_SCALE: u32 = 6;

/// Errors raised when a formula input violates its physical domain.
///
/// Always caller-recoverable: the caller supplied a physically invalid value
/// and must correct it. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} must lie in [0, 1], got {value}")]
    FractionOutOfRange { field: &'static str, value: Decimal },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: Decimal },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("flowing pressure {flowing} must be below reservoir pressure {reservoir}")]
    InvertedPressures { flowing: Decimal, reservoir: Decimal },

    #[error("shale gamma-ray {shale} must exceed clean gamma-ray {clean}")]
    InvertedGammaRayBounds { clean: Decimal, shale: Decimal },

    #[error("computed water saturation {value} exceeds 1 by more than the {tolerance} tolerance")]
    SaturationAboveTolerance { value: Decimal, tolerance: Decimal },

    #[error("{context} produced a non-physical result")]
    NonPhysicalResult { context: &'static str },

    #[error("numeric overflow while evaluating {context}")]
    NumericOverflow { context: &'static str },
}

impl DomainError {
    /// Machine-readable error code for the surrounding system.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FractionOutOfRange { .. } => "FRACTION_OUT_OF_RANGE",
            Self::NotPositive { .. } => "NOT_POSITIVE",
            Self::Negative { .. } => "NEGATIVE_VALUE",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::InvertedPressures { .. } => "INVERTED_PRESSURES",
            Self::InvertedGammaRayBounds { .. } => "INVERTED_GAMMA_RAY_BOUNDS",
            Self::SaturationAboveTolerance { .. } => "SATURATION_ABOVE_TOLERANCE",
            Self::NonPhysicalResult { .. } => "NON_PHYSICAL_RESULT",
            Self::NumericOverflow { .. } => "NUMERIC_OVERFLOW",
        }
    }
}

// ============================================================================
// Shared validation and rounding helpers
// ============================================================================

/// Round a finished result to [`OUTPUT_SCALE`] digits, half-up.
///
/// Applied exactly once, at each formula's return boundary.
pub(crate) fn round_output(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Require a strictly positive value.
pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<(), DomainError> {
    if value <= Decimal::ZERO {
        return Err(DomainError::NotPositive { field, value });
    }
    Ok(())
}

/// Require a non-negative value.
pub(crate) fn require_non_negative(field: &'static str, value: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::Negative { field, value });
    }
    Ok(())
}

/// Require a fraction in [0, 1].
pub(crate) fn require_fraction(field: &'static str, value: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DomainError::FractionOutOfRange { field, value });
    }
    Ok(())
}
