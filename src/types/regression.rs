//! Regression output types: plot selection, quality grading, drive indices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::QualityThresholds;

use super::Study;

/// The Havlena-Odeh plot form a regression ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotType {
    /// F vs Eo, through the origin (depletion only)
    FVsEo,
    /// F vs (Eo + m·Eg), through the origin (gas-cap drive)
    FVsEoPlusMEg,
    /// F/Eo vs We/Eo, with intercept (water drive)
    FOverEoVsWeOverEo,
}

impl PlotType {
    /// Human-readable plot label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FVsEo => "F vs Eo",
            Self::FVsEoPlusMEg => "F vs (Eo + m·Eg)",
            Self::FOverEoVsWeOverEo => "F/Eo vs We/Eo",
        }
    }
}

/// Quality grade of a material-balance regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AnalysisQuality {
    /// Grade an R² against the configured thresholds.
    #[must_use]
    pub fn from_r_squared(r_squared: Decimal, thresholds: &QualityThresholds) -> Self {
        if r_squared >= thresholds.excellent {
            Self::Excellent
        } else if r_squared >= thresholds.good {
            Self::Good
        } else if r_squared >= thresholds.fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Label as reported to the surrounding system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

/// Reservoir energy source driving production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMechanism {
    SolutionGas,
    GasCap,
    Water,
    Compaction,
}

impl DriveMechanism {
    /// Label as reported to the surrounding system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SolutionGas => "solution-gas drive",
            Self::GasCap => "gas-cap drive",
            Self::Water => "water drive",
            Self::Compaction => "compaction drive",
        }
    }
}

/// Fractional contribution of each energy source to total withdrawal at the
/// latest data point. Each index lies in [0, 1]; the four are expected to sum
/// to ≈ 1 but the sum is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveIndices {
    /// Solution-gas (oil and dissolved-gas expansion) drive index
    pub solution_gas: Decimal,

    /// Gas-cap expansion drive index
    pub gas_cap: Decimal,

    /// Water (aquifer influx) drive index
    pub water: Decimal,

    /// Pore-compaction and connate-water expansion drive index
    pub compaction: Decimal,
}

impl DriveIndices {
    /// The dominant mechanism — the largest index. Ties resolve in the
    /// order solution-gas, gas-cap, water, compaction.
    #[must_use]
    pub fn primary(&self) -> DriveMechanism {
        let mut best = (DriveMechanism::SolutionGas, self.solution_gas);
        for (mechanism, index) in [
            (DriveMechanism::GasCap, self.gas_cap),
            (DriveMechanism::Water, self.water),
            (DriveMechanism::Compaction, self.compaction),
        ] {
            if index > best.1 {
                best = (mechanism, index);
            }
        }
        best.0
    }
}

/// The single output of a Havlena-Odeh analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Estimated original oil in place N (STB)
    pub ooip: Decimal,

    /// Regression slope
    pub slope: Decimal,

    /// Regression intercept (exactly zero for origin-forced forms)
    pub intercept: Decimal,

    /// Coefficient of determination
    pub r_squared: Decimal,

    /// Plot form the regression ran on
    pub plot_type: PlotType,

    /// Quality grade of the fit
    pub quality: AnalysisQuality,

    /// Drive indices at the latest data point, when computable (requires
    /// positive withdrawal F at that point)
    pub drive_indices: Option<DriveIndices>,

    /// Dominant drive mechanism, when indices are computable
    pub primary_drive: Option<DriveMechanism>,
}

/// An analysis run's complete output: the augmented study plus its
/// regression result. Produced fresh per call; never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The input study with per-point terms attached
    pub study: Study,

    /// The regression outcome
    pub regression: RegressionResult,
}
