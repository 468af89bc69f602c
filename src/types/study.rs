//! Study and data-point types — the input value graph of a material-balance
//! analysis run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One material-balance study: initial reservoir conditions, declared drive
/// mechanisms, and the ordered production history.
///
/// Assembled by the caller from historical measurements and passed into the
/// engine once per analysis run. The engine returns it augmented with derived
/// per-point terms; it never mutates caller data it does not own and never
/// persists state between calls.
///
/// Initial-condition fields are optional so a partially assembled study is
/// representable; the engine validates presence and raises a
/// `CalculationError` naming any missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Study {
    /// Initial reservoir pressure Pi (psia)
    pub initial_pressure: Option<Decimal>,

    /// Initial oil formation-volume factor Boi (rb/STB)
    pub initial_oil_fvf: Option<Decimal>,

    /// Initial gas formation-volume factor Bgi (rb/scf); required when a gas
    /// cap is declared
    pub initial_gas_fvf: Option<Decimal>,

    /// Initial solution gas-oil ratio Rsi (scf/STB)
    pub initial_solution_gor: Option<Decimal>,

    /// Initial (connate) water saturation Swi (fraction)
    pub initial_water_saturation: Option<Decimal>,

    /// Whether the reservoir has an initial gas cap
    pub has_gas_cap: bool,

    /// Gas-cap ratio m — initial gas-cap reservoir volume over initial
    /// oil-zone reservoir volume; required when `has_gas_cap`
    pub gas_cap_ratio: Option<Decimal>,

    /// Whether the reservoir has aquifer pressure support
    pub has_aquifer_support: bool,

    /// Water compressibility cw (1/psi)
    pub water_compressibility: Option<Decimal>,

    /// Formation (pore) compressibility cf (1/psi)
    pub formation_compressibility: Option<Decimal>,

    /// Aquifer model used to populate per-point water influx when the caller
    /// has not supplied it
    pub aquifer: Option<AquiferModel>,

    /// Production history, ordered by increasing elapsed time. The first
    /// point is conventionally the initial-condition observation with zero
    /// cumulative production.
    pub data_points: Vec<DataPoint>,
}

impl Study {
    /// The most recent observation, if any.
    #[must_use]
    pub fn latest_point(&self) -> Option<&DataPoint> {
        self.data_points.last()
    }
}

/// One historical observation of pressure, PVT properties, and cumulative
/// production.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoint {
    /// Elapsed time since the start of production (days)
    pub time_days: Decimal,

    /// Reservoir pressure at this time (psia)
    pub pressure: Decimal,

    /// Oil formation-volume factor Bo (rb/STB)
    pub oil_fvf: Decimal,

    /// Gas formation-volume factor Bg (rb/scf)
    pub gas_fvf: Decimal,

    /// Solution gas-oil ratio Rs (scf/STB)
    pub solution_gor: Decimal,

    /// Water formation-volume factor Bw (rb/STB)
    pub water_fvf: Decimal,

    /// Cumulative oil production Np (STB)
    pub cumulative_oil: Decimal,

    /// Cumulative gas production Gp (scf)
    pub cumulative_gas: Decimal,

    /// Cumulative water production Wp (STB)
    pub cumulative_water: Decimal,

    /// Cumulative water influx We (rb), when supplied by the caller. Left
    /// empty, the engine populates it from the study's aquifer model for
    /// water-drive analyses.
    pub water_influx: Option<Decimal>,

    /// Material-balance expansion terms, attached by the engine. Never
    /// caller-supplied; overwritten on every term-computation run.
    pub terms: Option<MbeTerms>,
}

/// Derived Havlena-Odeh expansion terms for one data point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbeTerms {
    /// Total reservoir fluid withdrawn F (rb)
    pub f: Decimal,

    /// Oil and dissolved-gas expansion Eo (rb/STB)
    pub eo: Decimal,

    /// Gas-cap expansion Eg (rb/STB); exactly zero without a gas cap
    pub eg: Decimal,

    /// Formation and connate-water expansion Efw (rb/STB)
    pub efw: Decimal,
}

/// Aquifer model parameters used to populate missing per-point water influx.
///
/// Carter-Tracy influx depends on per-point dimensionless time/pressure
/// values the study does not carry, so it is exposed as a standalone
/// calculation for the caller to precompute into
/// [`DataPoint::water_influx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AquiferModel {
    /// Linear productivity-index model: `We = J · (Pi − P) · Δt`
    Fetkovich {
        /// Aquifer productivity index J (rb/day/psi)
        productivity_index: Decimal,
    },
}
