//! Step C — ordinary least-squares fits over the selected plot series
//!
//! Two fit forms, each a distinct function:
//! - through the origin (depletion and gas-cap plots, OOIP read from slope)
//! - with intercept (water-drive plot, OOIP read from intercept)
//!
//! R² is computed about the mean of y in both forms, clamped to [0, 1], and
//! defined as 0 when the observations carry no variance to explain.

use rust_decimal::Decimal;

use super::{CalculationError, MIN_REGRESSION_POINTS};

/// Slope, intercept, and coefficient of determination of one linear fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearFit {
    pub slope: Decimal,
    pub intercept: Decimal,
    pub r_squared: Decimal,
}

/// Fit `y = slope·x` through the origin.
///
/// # Errors
///
/// Returns [`CalculationError::InsufficientData`] with fewer than
/// [`MIN_REGRESSION_POINTS`] points, or when every x is zero (no expansion
/// variance to regress against).
pub fn fit_through_origin(points: &[(Decimal, Decimal)]) -> Result<LinearFit, CalculationError> {
    if points.len() < MIN_REGRESSION_POINTS {
        return Err(CalculationError::InsufficientData {
            needed: MIN_REGRESSION_POINTS,
            available: points.len(),
        });
    }

    let mut sum_xy = Decimal::ZERO;
    let mut sum_xx = Decimal::ZERO;
    for &(x, y) in points {
        sum_xy += x * y;
        sum_xx += x * x;
    }

    if sum_xx.is_zero() {
        let nonzero = points.iter().filter(|(x, _)| !x.is_zero()).count();
        return Err(CalculationError::InsufficientData {
            needed: MIN_REGRESSION_POINTS,
            available: nonzero,
        });
    }

    let slope = sum_xy / sum_xx;
    let r_squared = r_squared_about_mean(points, slope, Decimal::ZERO);

    Ok(LinearFit {
        slope,
        intercept: Decimal::ZERO,
        r_squared,
    })
}

/// Fit `y = slope·x + intercept` by least squares.
///
/// # Errors
///
/// Returns [`CalculationError::InsufficientData`] with fewer than
/// [`MIN_REGRESSION_POINTS`] points, or when every x is identical (vertical
/// series).
pub fn fit_least_squares(points: &[(Decimal, Decimal)]) -> Result<LinearFit, CalculationError> {
    if points.len() < MIN_REGRESSION_POINTS {
        return Err(CalculationError::InsufficientData {
            needed: MIN_REGRESSION_POINTS,
            available: points.len(),
        });
    }

    let n = Decimal::from(points.len());
    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
    }
    let x_mean = sum_x / n;
    let y_mean = sum_y / n;

    let mut sum_xy = Decimal::ZERO;
    let mut sum_xx = Decimal::ZERO;
    for &(x, y) in points {
        sum_xy += (x - x_mean) * (y - y_mean);
        sum_xx += (x - x_mean) * (x - x_mean);
    }

    if sum_xx.is_zero() {
        let distinct = points
            .iter()
            .filter(|(x, _)| *x != points[0].0)
            .count()
            + 1;
        return Err(CalculationError::InsufficientData {
            needed: MIN_REGRESSION_POINTS,
            available: distinct.min(points.len()),
        });
    }

    let slope = sum_xy / sum_xx;
    let intercept = y_mean - slope * x_mean;
    let r_squared = r_squared_about_mean(points, slope, intercept);

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

fn r_squared_about_mean(
    points: &[(Decimal, Decimal)],
    slope: Decimal,
    intercept: Decimal,
) -> Decimal {
    let n = Decimal::from(points.len());
    let mut sum_y = Decimal::ZERO;
    for &(_, y) in points {
        sum_y += y;
    }
    let y_mean = sum_y / n;

    let mut ss_tot = Decimal::ZERO;
    let mut ss_res = Decimal::ZERO;
    for &(x, y) in points {
        let predicted = slope * x + intercept;
        ss_tot += (y - y_mean) * (y - y_mean);
        ss_res += (y - predicted) * (y - predicted);
    }

    if ss_tot.is_zero() {
        return Decimal::ZERO;
    }

    (Decimal::ONE - ss_res / ss_tot).clamp(Decimal::ZERO, Decimal::ONE)
}
