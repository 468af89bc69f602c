//! Step A — per-point material-balance expansion terms
//!
//! For each data point of a study, computes the Havlena-Odeh terms:
//!
//! - `F  = Np·Bo + (Gp − Np·Rs)·Bg + Wp·Bw` — total reservoir fluid withdrawn
//! - `Eo = (Bo − Boi) + (Rsi − Rs)·Bg` — oil and dissolved-gas expansion
//! - `Eg = Boi·(Bg/Bgi − 1)` — gas-cap expansion (zero without a gas cap)
//! - `Efw = (1 + m)·Boi·((cw·Swi + cf)/(1 − Swi))·(Pi − P)` — formation and
//!   connate-water expansion
//!
//! `F` is written in the product form (not via the produced GOR `Rp = Gp/Np`)
//! so the initial-condition point with `Np = 0` yields an exact zero instead
//! of a division.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::formulas::{require_fraction, require_non_negative, require_positive, round_output};
use crate::types::{DataPoint, MbeTerms, Study};

use super::CalculationError;

/// Compute material-balance expansion terms for every data point.
///
/// Returns the study with [`MbeTerms`] attached to each point. Idempotent:
/// re-running overwrites previously computed terms and changes nothing else.
///
/// # Errors
///
/// Returns a [`CalculationError`] if the study has no data points, is missing
/// a required initial condition (initial pressure, Boi, Rsi — plus Bgi when a
/// gas cap is declared), declares a gas cap without its ratio `m`, or
/// contains a data point with out-of-domain values.
pub fn calculate_mbe_terms(study: Study) -> Result<Study, CalculationError> {
    let mut study = study;
    let initial = InitialConditions::resolve(&study)?;

    if study.data_points.is_empty() {
        return Err(CalculationError::EmptyStudy);
    }

    for (index, point) in study.data_points.iter().enumerate() {
        validate_point(index, point)?;
    }
    warn_on_decreasing_cumulatives(&study.data_points);

    for point in &mut study.data_points {
        point.terms = Some(initial.terms_for(point));
    }

    debug!(
        points = study.data_points.len(),
        has_gas_cap = study.has_gas_cap,
        "computed material-balance expansion terms"
    );

    Ok(study)
}

/// Validated initial conditions shared by every per-point term.
struct InitialConditions {
    pressure: Decimal,
    oil_fvf: Decimal,
    solution_gor: Decimal,
    /// `Bgi` is resolved only when a gas cap is declared.
    gas_fvf: Option<Decimal>,
    water_saturation: Decimal,
    water_compressibility: Decimal,
    formation_compressibility: Decimal,
    gas_cap_ratio: Decimal,
}

impl InitialConditions {
    fn resolve(study: &Study) -> Result<Self, CalculationError> {
        let pressure = study.initial_pressure.ok_or(
            CalculationError::MissingInitialCondition {
                field: "initial_pressure",
            },
        )?;
        let oil_fvf =
            study
                .initial_oil_fvf
                .ok_or(CalculationError::MissingInitialCondition {
                    field: "initial_oil_fvf",
                })?;
        let solution_gor =
            study
                .initial_solution_gor
                .ok_or(CalculationError::MissingInitialCondition {
                    field: "initial_solution_gor",
                })?;

        require_positive("initial pressure", pressure)?;
        require_positive("initial oil formation-volume factor", oil_fvf)?;
        require_non_negative("initial solution gas-oil ratio", solution_gor)?;

        let gas_fvf = if study.has_gas_cap {
            let bgi =
                study
                    .initial_gas_fvf
                    .ok_or(CalculationError::MissingInitialCondition {
                        field: "initial_gas_fvf",
                    })?;
            require_positive("initial gas formation-volume factor", bgi)?;
            Some(bgi)
        } else {
            None
        };

        let water_saturation = study.initial_water_saturation.unwrap_or(Decimal::ZERO);
        require_fraction("initial water saturation", water_saturation)?;
        if water_saturation == Decimal::ONE {
            return Err(crate::formulas::DomainError::NonPhysicalResult {
                context: "formation expansion with no hydrocarbon pore volume (Swi = 1)",
            }
            .into());
        }

        let water_compressibility = study.water_compressibility.unwrap_or(Decimal::ZERO);
        let formation_compressibility = study.formation_compressibility.unwrap_or(Decimal::ZERO);
        require_non_negative("water compressibility", water_compressibility)?;
        require_non_negative("formation compressibility", formation_compressibility)?;

        let gas_cap_ratio = if study.has_gas_cap {
            let m = study
                .gas_cap_ratio
                .ok_or(CalculationError::MissingGasCapRatio)?;
            require_non_negative("gas-cap ratio", m)?;
            m
        } else {
            Decimal::ZERO
        };

        Ok(Self {
            pressure,
            oil_fvf,
            solution_gor,
            gas_fvf,
            water_saturation,
            water_compressibility,
            formation_compressibility,
            gas_cap_ratio,
        })
    }

    fn terms_for(&self, point: &DataPoint) -> MbeTerms {
        let f = point.cumulative_oil * point.oil_fvf
            + (point.cumulative_gas - point.cumulative_oil * point.solution_gor) * point.gas_fvf
            + point.cumulative_water * point.water_fvf;

        let eo = (point.oil_fvf - self.oil_fvf)
            + (self.solution_gor - point.solution_gor) * point.gas_fvf;
        if eo < Decimal::ZERO {
            warn!(
                pressure = %point.pressure,
                eo = %eo,
                "negative oil-expansion term; PVT data is inconsistent with depletion"
            );
        }

        let eg = self
            .gas_fvf
            .map_or(Decimal::ZERO, |bgi| {
                self.oil_fvf * (point.gas_fvf / bgi - Decimal::ONE)
            });

        let pressure_drop = self.pressure - point.pressure;
        let compressibility = (self.water_compressibility * self.water_saturation
            + self.formation_compressibility)
            / (Decimal::ONE - self.water_saturation);
        let efw =
            (Decimal::ONE + self.gas_cap_ratio) * self.oil_fvf * compressibility * pressure_drop;

        MbeTerms {
            f: round_output(f),
            eo: round_output(eo),
            eg: round_output(eg),
            efw: round_output(efw),
        }
    }
}

fn validate_point(index: usize, point: &DataPoint) -> Result<(), CalculationError> {
    let invalid = |source| CalculationError::InvalidDataPoint { index, source };

    require_non_negative("elapsed time", point.time_days).map_err(invalid)?;
    require_positive("pressure", point.pressure).map_err(invalid)?;
    require_positive("oil formation-volume factor", point.oil_fvf).map_err(invalid)?;
    require_positive("gas formation-volume factor", point.gas_fvf).map_err(invalid)?;
    require_positive("water formation-volume factor", point.water_fvf).map_err(invalid)?;
    require_non_negative("solution gas-oil ratio", point.solution_gor).map_err(invalid)?;
    require_non_negative("cumulative oil", point.cumulative_oil).map_err(invalid)?;
    require_non_negative("cumulative gas", point.cumulative_gas).map_err(invalid)?;
    require_non_negative("cumulative water", point.cumulative_water).map_err(invalid)?;
    if let Some(we) = point.water_influx {
        require_non_negative("water influx", we).map_err(invalid)?;
    }
    Ok(())
}

/// Cumulative production should never decrease across an ordered series.
/// The series is accepted as-is (matching the reference behavior), but the
/// excursion is logged so bad assemblies are visible.
fn warn_on_decreasing_cumulatives(points: &[DataPoint]) {
    for (index, pair) in points.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.cumulative_oil < prev.cumulative_oil
            || next.cumulative_gas < prev.cumulative_gas
            || next.cumulative_water < prev.cumulative_water
        {
            warn!(
                index = index + 1,
                "cumulative production decreased between consecutive data points"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn depletion_study() -> Study {
        let mut study = Study {
            initial_pressure: Some(dec!(3000)),
            initial_oil_fvf: Some(dec!(1.25)),
            initial_solution_gor: Some(dec!(500)),
            initial_water_saturation: Some(dec!(0.25)),
            water_compressibility: Some(dec!(0.000003)),
            formation_compressibility: Some(dec!(0.000004)),
            ..Study::default()
        };

        for i in 0u32..4 {
            let i_dec = Decimal::from(i);
            study.data_points.push(DataPoint {
                time_days: i_dec * dec!(30),
                pressure: dec!(3000) - i_dec * dec!(100),
                oil_fvf: dec!(1.25) - i_dec * dec!(0.002),
                gas_fvf: dec!(0.001),
                solution_gor: dec!(500) - i_dec * dec!(10),
                water_fvf: dec!(1.0),
                cumulative_oil: i_dec * dec!(50_000),
                cumulative_gas: i_dec * dec!(25_000_000),
                cumulative_water: Decimal::ZERO,
                ..DataPoint::default()
            });
        }
        study
    }

    fn terms_at(study: &Study, index: usize) -> MbeTerms {
        study.data_points[index]
            .terms
            .expect("terms computed for every point")
    }

    #[test]
    fn test_initial_point_has_zero_withdrawal_and_expansion() {
        let study = calculate_mbe_terms(depletion_study()).expect("valid study");
        let first = terms_at(&study, 0);

        assert_eq!(first.f, dec!(0));
        assert_eq!(first.eo, dec!(0));
        assert_eq!(first.eg, dec!(0));
        assert_eq!(first.efw, dec!(0));
    }

    #[test]
    fn test_withdrawal_increases_with_production() {
        let study = calculate_mbe_terms(depletion_study()).expect("valid study");

        for pair in study.data_points.windows(2) {
            let (prev, next) = (
                pair[0].terms.expect("terms"),
                pair[1].terms.expect("terms"),
            );
            assert!(next.f > prev.f, "F must increase with production");
        }
    }

    #[test]
    fn test_eo_non_decreasing_as_pressure_declines() {
        let study = calculate_mbe_terms(depletion_study()).expect("valid study");

        for pair in study.data_points.windows(2) {
            let (prev, next) = (
                pair[0].terms.expect("terms"),
                pair[1].terms.expect("terms"),
            );
            assert!(next.eo >= prev.eo, "Eo must not decrease with depletion");
        }
    }

    #[test]
    fn test_eg_zero_without_gas_cap() {
        let study = calculate_mbe_terms(depletion_study()).expect("valid study");

        for point in &study.data_points {
            assert_eq!(point.terms.expect("terms").eg, dec!(0));
        }
    }

    #[test]
    fn test_eg_positive_with_expanding_gas_cap() {
        let mut study = depletion_study();
        study.has_gas_cap = true;
        study.gas_cap_ratio = Some(dec!(0.5));
        study.initial_gas_fvf = Some(dec!(0.001));
        for (i, point) in study.data_points.iter_mut().enumerate() {
            point.gas_fvf = dec!(0.001) + Decimal::from(i as u32) * dec!(0.00002);
        }

        let study = calculate_mbe_terms(study).expect("valid study");
        let last = terms_at(&study, 3);

        assert!(last.eg > dec!(0), "gas-cap expansion must be positive");
    }

    #[test]
    fn test_efw_positive_under_depletion() {
        let study = calculate_mbe_terms(depletion_study()).expect("valid study");
        let last = terms_at(&study, 3);

        assert!(last.efw > dec!(0), "formation expansion must be positive");
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let once = calculate_mbe_terms(depletion_study()).expect("valid study");
        let twice = calculate_mbe_terms(once.clone()).expect("valid study");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_study_is_rejected() {
        let mut study = depletion_study();
        study.data_points.clear();

        let err = calculate_mbe_terms(study).expect_err("no data points");
        assert_eq!(err.code(), "EMPTY_STUDY");
    }

    #[test]
    fn test_missing_initial_conditions_are_named() {
        let mut study = depletion_study();
        study.initial_oil_fvf = None;

        let err = calculate_mbe_terms(study).expect_err("missing Boi");
        assert_eq!(err.code(), "MISSING_INITIAL_CONDITION");
        assert!(err.to_string().contains("initial_oil_fvf"));
    }

    #[test]
    fn test_gas_cap_without_ratio_is_rejected() {
        let mut study = depletion_study();
        study.has_gas_cap = true;
        study.initial_gas_fvf = Some(dec!(0.001));

        let err = calculate_mbe_terms(study).expect_err("missing m");
        assert_eq!(err.code(), "MISSING_GAS_CAP_RATIO");
    }

    #[test]
    fn test_invalid_point_reports_index() {
        let mut study = depletion_study();
        study.data_points[2].oil_fvf = dec!(0);

        let err = calculate_mbe_terms(study).expect_err("zero Bo");
        assert_eq!(err.code(), "INVALID_DATA_POINT");
        assert!(err.to_string().contains("data point 2"));
    }
}
