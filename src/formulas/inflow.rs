//! Inflow performance: Vogel IPR and productivity index

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{require_non_negative, require_positive, round_output, DomainError};

/// Calculate producing rate from the Vogel inflow performance relationship
///
/// Formula: q = q_max × (1 − 0.2·(Pwf/Pr) − 0.8·(Pwf/Pr)²)
///
/// Where:
/// - q_max = Absolute open-flow potential (rate at Pwf = 0)
/// - Pr = Average reservoir pressure
/// - Pwf = Flowing bottomhole pressure
///
/// At `Pwf = 0` the result is exactly `q_max`; at `Pwf = Pr` it is exactly 0.
///
/// # Errors
///
/// Returns a [`DomainError`] if `q_max` or `Pr` is not strictly positive, if
/// `Pwf` is negative, or if `Pwf` exceeds `Pr`.
pub fn calculate_ipr_vogel(
    max_rate: Decimal,
    reservoir_pressure: Decimal,
    flowing_pressure: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("maximum rate", max_rate)?;
    require_positive("reservoir pressure", reservoir_pressure)?;
    require_non_negative("flowing pressure", flowing_pressure)?;
    if flowing_pressure > reservoir_pressure {
        return Err(DomainError::InvertedPressures {
            flowing: flowing_pressure,
            reservoir: reservoir_pressure,
        });
    }

    let ratio = flowing_pressure / reservoir_pressure;
    let drawdown_factor = Decimal::ONE - dec!(0.2) * ratio - dec!(0.8) * ratio * ratio;

    Ok(round_output(max_rate * drawdown_factor))
}

/// Calculate the absolute open-flow potential from a single well test
///
/// Inverts the Vogel relationship: q_max = q_test / (1 − 0.2·r − 0.8·r²)
/// with r = Pwf/Pr. Used to obtain the `q_max` input of
/// [`calculate_ipr_vogel`] from a measured rate/pressure pair.
///
/// # Errors
///
/// Returns a [`DomainError`] if `q_test` or `Pr` is not strictly positive, if
/// `Pwf` is negative, or if `Pwf` is not strictly below `Pr` (a test at zero
/// drawdown carries no deliverability information).
pub fn calculate_vogel_max_rate(
    test_rate: Decimal,
    reservoir_pressure: Decimal,
    flowing_pressure: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("test rate", test_rate)?;
    require_positive("reservoir pressure", reservoir_pressure)?;
    require_non_negative("flowing pressure", flowing_pressure)?;
    if flowing_pressure >= reservoir_pressure {
        return Err(DomainError::InvertedPressures {
            flowing: flowing_pressure,
            reservoir: reservoir_pressure,
        });
    }

    let ratio = flowing_pressure / reservoir_pressure;
    let drawdown_factor = Decimal::ONE - dec!(0.2) * ratio - dec!(0.8) * ratio * ratio;

    Ok(round_output(test_rate / drawdown_factor))
}

/// Calculate the productivity index from a stabilized well test
///
/// Formula: PI = q_test / (Pr − Pwf)
///
/// Zero or negative drawdown is a domain error, never a zero result.
///
/// # Errors
///
/// Returns a [`DomainError`] if `q_test` is not strictly positive, if `Pwf`
/// is negative, or if `Pwf` is not strictly below `Pr`.
pub fn calculate_productivity_index(
    test_rate: Decimal,
    reservoir_pressure: Decimal,
    flowing_pressure: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("test rate", test_rate)?;
    require_positive("reservoir pressure", reservoir_pressure)?;
    require_non_negative("flowing pressure", flowing_pressure)?;
    if flowing_pressure >= reservoir_pressure {
        return Err(DomainError::InvertedPressures {
            flowing: flowing_pressure,
            reservoir: reservoir_pressure,
        });
    }

    Ok(round_output(
        test_rate / (reservoir_pressure - flowing_pressure),
    ))
}
