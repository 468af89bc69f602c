//! Step F — aquifer water-influx models
//!
//! Auxiliary calculations invoked to populate per-point water influx before
//! a water-drive regression. Fetkovich is simple enough for the engine to
//! apply automatically from study data; Carter-Tracy depends on per-point
//! dimensionless aquifer values the caller supplies.

use rust_decimal::Decimal;

use crate::formulas::{require_non_negative, require_positive, round_output, DomainError};

/// Calculate cumulative water influx with the Fetkovich
/// productivity-index model
///
/// Formula: We = J × (Pi − P) × Δt
///
/// Where:
/// - J = Aquifer productivity index (rb/day/psi)
/// - Pi = Initial reservoir pressure (psia)
/// - P = Current reservoir pressure (psia)
/// - Δt = Elapsed time (days)
///
/// Returns cumulative influx in reservoir barrels.
///
/// # Errors
///
/// Returns a [`DomainError`] if `J` or `Δt` is negative, or if the pressure
/// drop `Pi − P` is negative.
pub fn calculate_fetkovich_water_influx(
    productivity_index: Decimal,
    initial_pressure: Decimal,
    pressure: Decimal,
    elapsed_days: Decimal,
) -> Result<Decimal, DomainError> {
    require_non_negative("aquifer productivity index", productivity_index)?;
    require_non_negative("elapsed time", elapsed_days)?;
    require_non_negative("pressure drop", initial_pressure - pressure)?;

    let influx = productivity_index * (initial_pressure - pressure) * elapsed_days;
    Ok(round_output(influx))
}

/// Calculate cumulative water influx with the Carter-Tracy
/// dimensionless-response model
///
/// Single-step bounded form:
/// We = B × ΔP × (tD × pD′) / (pD + tD × pD′)
///
/// Where:
/// - B = Aquifer constant (rb/psi)
/// - ΔP = Pressure drop at the aquifer boundary (psi)
/// - tD = Dimensionless time
/// - pD = Dimensionless pressure
/// - pD′ = Dimensionless pressure derivative
///
/// The influx approaches the full `B·ΔP` response as `tD·pD′` grows, and is
/// exactly zero for a fully relaxed aquifer (`pD′ = 0`) — by construction,
/// never by dividing by zero.
///
/// # Errors
///
/// Returns a [`DomainError`] if `B`, `ΔP`, `tD`, or `pD′` is negative, or if
/// `pD` is not strictly positive.
pub fn calculate_carter_tracy_water_influx(
    aquifer_constant: Decimal,
    pressure_drop: Decimal,
    dimensionless_time: Decimal,
    dimensionless_pressure: Decimal,
    dimensionless_pressure_derivative: Decimal,
) -> Result<Decimal, DomainError> {
    require_non_negative("aquifer constant", aquifer_constant)?;
    require_non_negative("pressure drop", pressure_drop)?;
    require_non_negative("dimensionless time", dimensionless_time)?;
    require_positive("dimensionless pressure", dimensionless_pressure)?;
    require_non_negative(
        "dimensionless pressure derivative",
        dimensionless_pressure_derivative,
    )?;

    if dimensionless_pressure_derivative.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let response = dimensionless_time * dimensionless_pressure_derivative;
    let influx = aquifer_constant * pressure_drop * response / (dimensionless_pressure + response);

    Ok(round_output(influx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fetkovich_reference_scenario() {
        // J 100, Pi 3000, P 2800, one year → 7.3 MMbbl
        let we = calculate_fetkovich_water_influx(dec!(100), dec!(3000), dec!(2800), dec!(365))
            .expect("valid inputs");

        assert!(we > dec!(7_000_000) && we < dec!(8_000_000), "got {we}");
        assert_eq!(we, dec!(7_300_000));
    }

    #[test]
    fn test_fetkovich_zero_drop_means_zero_influx() {
        let we = calculate_fetkovich_water_influx(dec!(100), dec!(3000), dec!(3000), dec!(365))
            .expect("valid inputs");
        assert_eq!(we, dec!(0));
    }

    #[test]
    fn test_fetkovich_rejects_pressure_rise() {
        let err = calculate_fetkovich_water_influx(dec!(100), dec!(2800), dec!(3000), dec!(365))
            .expect_err("negative pressure drop");
        assert_eq!(err.code(), "NEGATIVE_VALUE");
    }

    #[test]
    fn test_carter_tracy_zero_derivative_returns_exact_zero() {
        let we = calculate_carter_tracy_water_influx(
            dec!(500),
            dec!(150),
            dec!(12),
            dec!(1.8),
            dec!(0),
        )
        .expect("valid inputs");

        assert_eq!(we, dec!(0));
    }

    #[test]
    fn test_carter_tracy_bounded_by_full_response() {
        let bound = dec!(500) * dec!(150);
        let we = calculate_carter_tracy_water_influx(
            dec!(500),
            dec!(150),
            dec!(12),
            dec!(1.8),
            dec!(0.04),
        )
        .expect("valid inputs");

        assert!(we > dec!(0) && we < bound, "got {we}, bound {bound}");
    }

    #[test]
    fn test_carter_tracy_grows_with_dimensionless_time() {
        let early = calculate_carter_tracy_water_influx(
            dec!(500),
            dec!(150),
            dec!(5),
            dec!(1.8),
            dec!(0.04),
        )
        .expect("valid inputs");
        let late = calculate_carter_tracy_water_influx(
            dec!(500),
            dec!(150),
            dec!(50),
            dec!(1.8),
            dec!(0.04),
        )
        .expect("valid inputs");

        assert!(late > early, "{late} vs {early}");
    }

    #[test]
    fn test_carter_tracy_rejects_non_positive_dimensionless_pressure() {
        let err = calculate_carter_tracy_water_influx(
            dec!(500),
            dec!(150),
            dec!(12),
            dec!(0),
            dec!(0.04),
        )
        .expect_err("pD must be positive");
        assert_eq!(err.code(), "NOT_POSITIVE");
    }
}
