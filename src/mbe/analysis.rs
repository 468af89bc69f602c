//! Havlena-Odeh analysis orchestration
//!
//! Runs the full pipeline over a study: term computation, water-influx
//! population, plot selection, regression, quality grading, and drive
//! indices. Pure and deterministic — identical input produces bit-identical
//! output, so retries are always safe.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculationConfig;
use crate::formulas::round_output;
use crate::types::{AnalysisQuality, AnalysisReport, AquiferModel, RegressionResult, Study};

use super::drive::{compute_drive_indices, DriveModel};
use super::regression::{fit_least_squares, fit_through_origin, LinearFit};
use super::terms::calculate_mbe_terms;
use super::water_influx::calculate_fetkovich_water_influx;
use super::{CalculationError, MIN_REGRESSION_POINTS};

/// Run a complete Havlena-Odeh material-balance analysis.
///
/// Recomputes expansion terms, populates missing per-point water influx for
/// water-drive studies, selects the plot form from the declared drive
/// mechanisms, regresses, grades the fit, and derives drive indices at the
/// latest point. Returns the augmented study together with the regression
/// result.
///
/// # Errors
///
/// Returns a [`CalculationError`] on any term-computation failure, when
/// fewer than [`MIN_REGRESSION_POINTS`] usable points remain for the
/// regression, or when a water-drive study has points with neither supplied
/// water influx nor an aquifer model to compute it from.
pub fn perform_havlena_odeh_analysis(
    study: Study,
    config: &CalculationConfig,
) -> Result<AnalysisReport, CalculationError> {
    let mut study = calculate_mbe_terms(study)?;

    if study.data_points.len() < MIN_REGRESSION_POINTS {
        return Err(CalculationError::InsufficientData {
            needed: MIN_REGRESSION_POINTS,
            available: study.data_points.len(),
        });
    }

    let model = DriveModel::resolve(&study)?;
    if model == DriveModel::WaterDrive {
        populate_water_influx(&mut study)?;
    }

    let fit = match model {
        DriveModel::DepletionOnly => regress_depletion(&study)?,
        DriveModel::GasCapDrive { m } => regress_gas_cap(&study, m)?,
        DriveModel::WaterDrive => regress_water_drive(&study)?,
    };

    // Origin-forced forms carry N in the slope; the water-drive form carries
    // it in the intercept.
    let ooip = match model {
        DriveModel::DepletionOnly | DriveModel::GasCapDrive { .. } => fit.slope,
        DriveModel::WaterDrive => fit.intercept,
    };

    let quality = AnalysisQuality::from_r_squared(fit.r_squared, &config.quality);
    let gas_cap_ratio = study.gas_cap_ratio.unwrap_or(Decimal::ZERO);
    let drive_indices = compute_drive_indices(&study, ooip, gas_cap_ratio);
    let primary_drive = drive_indices.map(|indices| indices.primary());

    debug!(
        plot = model.plot_type().as_str(),
        ooip = %ooip,
        r_squared = %fit.r_squared,
        quality = quality.as_str(),
        "completed Havlena-Odeh analysis"
    );

    let regression = RegressionResult {
        ooip: round_output(ooip),
        slope: round_output(fit.slope),
        intercept: round_output(fit.intercept),
        r_squared: round_output(fit.r_squared),
        plot_type: model.plot_type(),
        quality,
        drive_indices,
        primary_drive,
    };

    Ok(AnalysisReport { study, regression })
}

/// Fill in per-point water influx from the study's aquifer model wherever
/// the caller has not supplied it.
fn populate_water_influx(study: &mut Study) -> Result<(), CalculationError> {
    let initial_pressure =
        study
            .initial_pressure
            .ok_or(CalculationError::MissingInitialCondition {
                field: "initial_pressure",
            })?;

    let aquifer = study.aquifer;
    for (index, point) in study.data_points.iter_mut().enumerate() {
        if point.water_influx.is_some() {
            continue;
        }

        let Some(AquiferModel::Fetkovich { productivity_index }) = aquifer else {
            return Err(CalculationError::MissingWaterInflux { index });
        };

        let influx = calculate_fetkovich_water_influx(
            productivity_index,
            initial_pressure,
            point.pressure,
            point.time_days,
        )
        .map_err(|source| CalculationError::InvalidDataPoint { index, source })?;

        point.water_influx = Some(influx);
    }

    Ok(())
}

/// F vs Eo through the origin.
fn regress_depletion(study: &Study) -> Result<LinearFit, CalculationError> {
    let series: Vec<(Decimal, Decimal)> = study
        .data_points
        .iter()
        .filter_map(|point| point.terms.map(|t| (t.eo, t.f)))
        .collect();

    fit_through_origin(&series)
}

/// F vs (Eo + m·Eg) through the origin.
fn regress_gas_cap(study: &Study, m: Decimal) -> Result<LinearFit, CalculationError> {
    let series: Vec<(Decimal, Decimal)> = study
        .data_points
        .iter()
        .filter_map(|point| point.terms.map(|t| (t.eo + m * t.eg, t.f)))
        .collect();

    fit_through_origin(&series)
}

/// F/Eo vs We/Eo with intercept. Points with `Eo = 0` (the initial-condition
/// observation among them) have no defined ordinate and are excluded.
fn regress_water_drive(study: &Study) -> Result<LinearFit, CalculationError> {
    let series: Vec<(Decimal, Decimal)> = study
        .data_points
        .iter()
        .filter_map(|point| {
            let terms = point.terms?;
            if terms.eo <= Decimal::ZERO {
                return None;
            }
            let influx = point.water_influx.unwrap_or(Decimal::ZERO);
            Some((influx / terms.eo, terms.f / terms.eo))
        })
        .collect();

    fit_least_squares(&series)
}
