//! Volumetric in-place estimation (OOIP / OGIP)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{require_fraction, require_positive, round_output, DomainError};

/// Stock-tank barrels per acre-foot of reservoir rock.
const BBL_PER_ACRE_FT: Decimal = dec!(7758);

/// Cubic feet per acre-foot.
const CUFT_PER_ACRE_FT: Decimal = dec!(43560);

/// Net-pay thickness is supplied in metres and converted to feet internally.
const FT_PER_METER: Decimal = dec!(3.28084);

/// Calculate volumetric Original Oil In Place (OOIP)
///
/// Formula: OOIP = 7758 × A × h × φ × (1 − Sw) / Bo
///
/// Where:
/// - A = Drainage area (acres)
/// - h = Net-pay thickness (metres, converted to feet internally)
/// - φ = Porosity (fraction)
/// - Sw = Water saturation (fraction)
/// - Bo = Oil formation-volume factor (rb/STB)
///
/// Returns OOIP in stock-tank barrels.
///
/// # Errors
///
/// Returns a [`DomainError`] if area, thickness, or Bo is not strictly
/// positive, or if porosity or water saturation lies outside [0, 1].
pub fn calculate_ooip(
    area_acres: Decimal,
    thickness_m: Decimal,
    porosity: Decimal,
    water_saturation: Decimal,
    oil_fvf: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("area", area_acres)?;
    require_positive("thickness", thickness_m)?;
    require_positive("oil formation-volume factor", oil_fvf)?;
    require_fraction("porosity", porosity)?;
    require_fraction("water saturation", water_saturation)?;

    let thickness_ft = thickness_m * FT_PER_METER;
    let pore_volume = BBL_PER_ACRE_FT * area_acres * thickness_ft * porosity;
    let ooip = pore_volume * (Decimal::ONE - water_saturation) / oil_fvf;

    Ok(round_output(ooip))
}

/// Calculate volumetric Original Gas In Place (OGIP)
///
/// Formula: OGIP = 43560 × A × h × φ × (1 − Sw) / Bg
///
/// Where:
/// - A = Drainage area (acres)
/// - h = Net-pay thickness (metres, converted to feet internally)
/// - φ = Porosity (fraction)
/// - Sw = Water saturation (fraction)
/// - Bg = Gas formation-volume factor (rcf/scf)
///
/// Returns OGIP in standard cubic feet.
///
/// # Errors
///
/// Same contract as [`calculate_ooip`], with Bg in place of Bo.
pub fn calculate_ogip(
    area_acres: Decimal,
    thickness_m: Decimal,
    porosity: Decimal,
    water_saturation: Decimal,
    gas_fvf: Decimal,
) -> Result<Decimal, DomainError> {
    require_positive("area", area_acres)?;
    require_positive("thickness", thickness_m)?;
    require_positive("gas formation-volume factor", gas_fvf)?;
    require_fraction("porosity", porosity)?;
    require_fraction("water saturation", water_saturation)?;

    let thickness_ft = thickness_m * FT_PER_METER;
    let pore_volume = CUFT_PER_ACRE_FT * area_acres * thickness_ft * porosity;
    let ogip = pore_volume * (Decimal::ONE - water_saturation) / gas_fvf;

    Ok(round_output(ogip))
}
