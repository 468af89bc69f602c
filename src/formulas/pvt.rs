//! PVT correlations: Standing bubble-point and oil FVF, Beggs-Robinson
//! dead-oil viscosity
//!
//! Field-unit correlations: solution GOR in scf/STB, temperature in °F,
//! pressures in psia, stock-tank gravity in °API.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::{require_positive, round_output, DomainError};

/// Calculate bubble-point pressure with the Standing correlation
///
/// Formula: Pb = 18.2 × ((Rs / γg)^0.83 × 10^(0.00091·T − 0.0125·API) − 1.4)
///
/// Where:
/// - Rs = Solution gas-oil ratio (scf/STB)
/// - γg = Gas specific gravity (air = 1)
/// - T = Reservoir temperature (°F)
/// - API = Stock-tank oil gravity (°API)
///
/// Returns bubble-point pressure in psia.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not strictly positive, or if the
/// correlation evaluates to a non-positive pressure (inputs outside the
/// correlation's applicable range).
pub fn calculate_standing_bubble_point(
    solution_gor: Decimal,
    gas_gravity: Decimal,
    temperature_f: Decimal,
    api_gravity: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("solution gas-oil ratio", solution_gor)?;
    require_positive("gas specific gravity", gas_gravity)?;
    require_positive("temperature", temperature_f)?;
    require_positive("API gravity", api_gravity)?;

    let gor_term = (solution_gor / gas_gravity)
        .checked_powd(dec!(0.83))
        .ok_or(DomainError::NumericOverflow {
            context: "standing bubble-point GOR term",
        })?;

    let exponent = dec!(0.00091) * temperature_f - dec!(0.0125) * api_gravity;
    let gravity_term = dec!(10)
        .checked_powd(exponent)
        .ok_or(DomainError::NumericOverflow {
            context: "standing bubble-point gravity term",
        })?;

    let bubble_point = dec!(18.2) * (gor_term * gravity_term - dec!(1.4));
    if bubble_point <= Decimal::ZERO {
        return Err(DomainError::NonPhysicalResult {
            context: "standing bubble-point pressure",
        });
    }

    Ok(round_output(bubble_point))
}

/// Calculate saturated-oil formation-volume factor with the Standing
/// correlation
///
/// Formula: Bo = 0.9759 + 0.00012 × (Rs × √(γg/γo) + 1.25·T)^1.2
///
/// Where γo = 141.5 / (131.5 + API) is the stock-tank oil specific gravity.
///
/// Returns Bo in rb/STB.
///
/// # Errors
///
/// Returns a [`DomainError`] if any input is not strictly positive.
pub fn calculate_standing_oil_fvf(
    solution_gor: Decimal,
    gas_gravity: Decimal,
    api_gravity: Decimal,
    temperature_f: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("solution gas-oil ratio", solution_gor)?;
    require_positive("gas specific gravity", gas_gravity)?;
    require_positive("API gravity", api_gravity)?;
    require_positive("temperature", temperature_f)?;

    let oil_gravity = dec!(141.5) / (dec!(131.5) + api_gravity);
    let gravity_ratio = (gas_gravity / oil_gravity)
        .sqrt()
        .ok_or(DomainError::NumericOverflow {
            context: "standing oil FVF gravity ratio",
        })?;

    let correlating = solution_gor * gravity_ratio + dec!(1.25) * temperature_f;
    let correlating_term = correlating
        .checked_powd(dec!(1.2))
        .ok_or(DomainError::NumericOverflow {
            context: "standing oil FVF correlating term",
        })?;

    Ok(round_output(dec!(0.9759) + dec!(0.00012) * correlating_term))
}

/// Calculate dead-oil viscosity with the Beggs-Robinson correlation
///
/// Formula: μod = 10^x − 1, where x = 10^(3.0324 − 0.02023·API) × T^(−1.163)
///
/// Returns viscosity in centipoise.
///
/// # Errors
///
/// Returns a [`DomainError`] if API gravity or temperature is not strictly
/// positive.
pub fn calculate_beggs_robinson_dead_oil_viscosity(
    api_gravity: Decimal,
    temperature_f: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("API gravity", api_gravity)?;
    require_positive("temperature", temperature_f)?;

    let gravity_exponent = dec!(3.0324) - dec!(0.02023) * api_gravity;
    let gravity_term = dec!(10)
        .checked_powd(gravity_exponent)
        .ok_or(DomainError::NumericOverflow {
            context: "beggs-robinson gravity term",
        })?;

    let temperature_term =
        temperature_f
            .checked_powd(dec!(-1.163))
            .ok_or(DomainError::NumericOverflow {
                context: "beggs-robinson temperature term",
            })?;

    let x = gravity_term * temperature_term;
    let viscosity = dec!(10)
        .checked_powd(x)
        .ok_or(DomainError::NumericOverflow {
            context: "beggs-robinson viscosity",
        })?
        - Decimal::ONE;

    Ok(round_output(viscosity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_bubble_point_mid_gravity_crude() {
        // Rs 350 scf/STB, γg 0.75, 200 °F, 30 °API → Pb ≈ 1890 psia
        let pb = calculate_standing_bubble_point(dec!(350), dec!(0.75), dec!(200), dec!(30))
            .expect("valid inputs");

        assert!(pb > dec!(1800) && pb < dec!(2000), "Pb should be ~1890 psia, got {pb}");
    }

    #[test]
    fn test_standing_bubble_point_rises_with_gor() {
        let low = calculate_standing_bubble_point(dec!(200), dec!(0.75), dec!(200), dec!(30))
            .expect("valid inputs");
        let high = calculate_standing_bubble_point(dec!(600), dec!(0.75), dec!(200), dec!(30))
            .expect("valid inputs");

        assert!(high > low, "more dissolved gas needs more pressure: {high} vs {low}");
    }

    #[test]
    fn test_standing_bubble_point_rejects_non_positive_inputs() {
        assert!(calculate_standing_bubble_point(dec!(0), dec!(0.75), dec!(200), dec!(30)).is_err());
        assert!(calculate_standing_bubble_point(dec!(350), dec!(-1), dec!(200), dec!(30)).is_err());
    }

    #[test]
    fn test_standing_oil_fvf_mid_gravity_crude() {
        // Rs 350 scf/STB, γg 0.75, 30 °API, 200 °F → Bo ≈ 1.22 rb/STB
        let bo = calculate_standing_oil_fvf(dec!(350), dec!(0.75), dec!(30), dec!(200))
            .expect("valid inputs");

        assert!(bo > dec!(1.15) && bo < dec!(1.30), "Bo should be ~1.22, got {bo}");
    }

    #[test]
    fn test_beggs_robinson_mid_gravity_crude() {
        // 30 °API at 150 °F → ~5 cp
        let mu = calculate_beggs_robinson_dead_oil_viscosity(dec!(30), dec!(150))
            .expect("valid inputs");

        assert!(mu > dec!(4) && mu < dec!(6), "viscosity should be ~5 cp, got {mu}");
    }

    #[test]
    fn test_beggs_robinson_thins_with_temperature() {
        let cool = calculate_beggs_robinson_dead_oil_viscosity(dec!(30), dec!(120))
            .expect("valid inputs");
        let hot = calculate_beggs_robinson_dead_oil_viscosity(dec!(30), dec!(220))
            .expect("valid inputs");

        assert!(hot < cool, "oil thins as it heats: {hot} vs {cool}");
    }
}
