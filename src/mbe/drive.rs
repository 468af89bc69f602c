//! Step B / Step E — drive-model resolution and drive indices
//!
//! The plot type is selected once per analysis by resolving the study's
//! boolean drive flags into a closed tagged variant, so each regression path
//! stays a distinct, independently testable function.

use rust_decimal::Decimal;
use tracing::debug;

use crate::formulas::round_output;
use crate::types::{DriveIndices, PlotType, Study};

use super::CalculationError;

/// The drive-mechanism combination a study declares, resolved once per
/// analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveModel {
    /// No gas cap, no aquifer: F = N·Eo through the origin
    DepletionOnly,
    /// Gas cap, no aquifer: F = N·(Eo + m·Eg) through the origin
    GasCapDrive { m: Decimal },
    /// Aquifer support (with or without gas cap): F/Eo = N + We/Eo
    WaterDrive,
}

impl DriveModel {
    /// Resolve the study's drive flags.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::MissingGasCapRatio`] when a gas cap is
    /// declared without its ratio `m`.
    pub fn resolve(study: &Study) -> Result<Self, CalculationError> {
        let model = if study.has_aquifer_support {
            Self::WaterDrive
        } else if study.has_gas_cap {
            let m = study
                .gas_cap_ratio
                .ok_or(CalculationError::MissingGasCapRatio)?;
            Self::GasCapDrive { m }
        } else {
            Self::DepletionOnly
        };

        debug!(model = ?model, "resolved drive model");
        Ok(model)
    }

    /// The Havlena-Odeh plot this model regresses on.
    #[must_use]
    pub const fn plot_type(self) -> PlotType {
        match self {
            Self::DepletionOnly => PlotType::FVsEo,
            Self::GasCapDrive { .. } => PlotType::FVsEoPlusMEg,
            Self::WaterDrive => PlotType::FOverEoVsWeOverEo,
        }
    }
}

/// Compute drive indices at the latest data point.
///
/// Fractional contribution of each energy source to total withdrawal:
/// `sdi = N·Eo/F`, `gdi = N·m·Eg/F`, `wdi = We/F`, `cdi = N·Efw/F`, each
/// clamped to [0, 1]. Computable only when the latest point carries terms
/// and a positive withdrawal `F`.
pub(crate) fn compute_drive_indices(
    study: &Study,
    ooip: Decimal,
    gas_cap_ratio: Decimal,
) -> Option<DriveIndices> {
    let latest = study.latest_point()?;
    let terms = latest.terms?;
    if terms.f <= Decimal::ZERO {
        return None;
    }

    let influx = latest.water_influx.unwrap_or(Decimal::ZERO);
    let clamp01 = |value: Decimal| round_output(value.clamp(Decimal::ZERO, Decimal::ONE));

    Some(DriveIndices {
        solution_gas: clamp01(ooip * terms.eo / terms.f),
        gas_cap: clamp01(ooip * gas_cap_ratio * terms.eg / terms.f),
        water: clamp01(influx / terms.f),
        compaction: clamp01(ooip * terms.efw / terms.f),
    })
}
