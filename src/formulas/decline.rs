//! Arps decline-curve analysis: rate and cumulative production
//!
//! Three closed forms selected by the decline exponent `b`:
//! - `b = 0` — exponential
//! - `0 < b < 1` — hyperbolic
//! - `b = 1` — harmonic
//!
//! Time is in days, rates in volume/day, `Di` in 1/day.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::{require_non_negative, require_positive, round_output, DomainError};

/// Calculate producing rate at time `t` from the Arps decline model
///
/// Formula (by regime):
/// - Exponential: q = qi × e^(−Di·t)
/// - Hyperbolic: q = qi / (1 + b·Di·t)^(1/b)
/// - Harmonic: q = qi / (1 + Di·t)
///
/// At `t = 0` the result is exactly `qi` in all three regimes. `Di = 0`
/// degenerates to a constant rate.
///
/// # Errors
///
/// Returns a [`DomainError`] if `qi` is not strictly positive, `Di` or `t` is
/// negative, or `b` lies outside [0, 1].
pub fn calculate_arps_decline_rate(
    initial_rate: Decimal,
    initial_decline: Decimal,
    exponent: Decimal,
    time_days: Decimal,
) -> Result<Decimal, DomainError> {
    validate_arps_inputs(initial_rate, initial_decline, exponent, time_days)?;

    let rate = if exponent.is_zero() {
        let decay = (-initial_decline * time_days)
            .checked_exp()
            .ok_or(DomainError::NumericOverflow {
                context: "exponential decline",
            })?;
        initial_rate * decay
    } else if exponent == Decimal::ONE {
        initial_rate / (Decimal::ONE + initial_decline * time_days)
    } else {
        let base = Decimal::ONE + exponent * initial_decline * time_days;
        let shrink = base
            .checked_powd(-(Decimal::ONE / exponent))
            .ok_or(DomainError::NumericOverflow {
                context: "hyperbolic decline",
            })?;
        initial_rate * shrink
    };

    Ok(round_output(rate))
}

/// Calculate cumulative production to time `t` from the Arps decline model
///
/// Formula (by regime):
/// - Exponential: Np = (qi − q(t)) / Di
/// - Hyperbolic: Np = qi / (Di·(1 − b)) × (1 − (1 + b·Di·t)^(1 − 1/b))
/// - Harmonic: Np = (qi / Di) × ln(1 + Di·t)
///
/// `Di = 0` degenerates to `Np = qi·t` in every regime.
///
/// # Errors
///
/// Same domain contract as [`calculate_arps_decline_rate`].
pub fn calculate_arps_cumulative(
    initial_rate: Decimal,
    initial_decline: Decimal,
    exponent: Decimal,
    time_days: Decimal,
) -> Result<Decimal, DomainError> {
    validate_arps_inputs(initial_rate, initial_decline, exponent, time_days)?;

    if initial_decline.is_zero() {
        return Ok(round_output(initial_rate * time_days));
    }

    let cumulative = if exponent.is_zero() {
        let decay = (-initial_decline * time_days)
            .checked_exp()
            .ok_or(DomainError::NumericOverflow {
                context: "exponential cumulative",
            })?;
        initial_rate * (Decimal::ONE - decay) / initial_decline
    } else if exponent == Decimal::ONE {
        let growth = (Decimal::ONE + initial_decline * time_days)
            .checked_ln()
            .ok_or(DomainError::NumericOverflow {
                context: "harmonic cumulative",
            })?;
        initial_rate * growth / initial_decline
    } else {
        let base = Decimal::ONE + exponent * initial_decline * time_days;
        let tail = base
            .checked_powd(Decimal::ONE - Decimal::ONE / exponent)
            .ok_or(DomainError::NumericOverflow {
                context: "hyperbolic cumulative",
            })?;
        initial_rate * (Decimal::ONE - tail) / (initial_decline * (Decimal::ONE - exponent))
    };

    Ok(round_output(cumulative))
}

fn validate_arps_inputs(
    initial_rate: Decimal,
    initial_decline: Decimal,
    exponent: Decimal,
    time_days: Decimal,
) -> Result<(), DomainError> {
    require_positive("initial rate", initial_rate)?;
    require_non_negative("initial decline rate", initial_decline)?;
    require_non_negative("time", time_days)?;
    if exponent < Decimal::ZERO || exponent > Decimal::ONE {
        return Err(DomainError::OutOfRange {
            field: "decline exponent",
            value: exponent,
            min: Decimal::ZERO,
            max: Decimal::ONE,
        });
    }
    Ok(())
}
