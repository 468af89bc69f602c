//! Log-derived petrophysics: Archie water saturation and Larionov shale volume

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::config::ArchieConfig;

use super::{require_positive, round_output, DomainError};

/// Calculate water saturation from the Archie equation
///
/// Formula: Sw = ((a × Rw) / (φ^m × Rt))^(1/n)
///
/// Where:
/// - Rw = Formation-water resistivity (ohm·m)
/// - Rt = True formation resistivity (ohm·m)
/// - φ = Porosity (fraction)
/// - a, m, n = Archie parameters ([`ArchieConfig`], tenant defaults 1.0/2.0/2.0)
///
/// A raw result slightly above 1 is expected from log noise and is clamped to
/// 1 when within `archie.sw_clamp_tolerance`; beyond the tolerance the input
/// is treated as invalid and rejected.
///
/// # Errors
///
/// Returns a [`DomainError`] if porosity is outside (0, 1], if Rw, Rt, or any
/// Archie parameter is not strictly positive, or if the raw saturation
/// exceeds 1 by more than the configured tolerance.
pub fn calculate_archie_water_saturation(
    water_resistivity: Decimal,
    true_resistivity: Decimal,
    porosity: Decimal,
    archie: &ArchieConfig,
) -> Result<Decimal, DomainError> {
    require_positive("water resistivity", water_resistivity)?;
    require_positive("true resistivity", true_resistivity)?;
    require_positive("porosity", porosity)?;
    if porosity > Decimal::ONE {
        return Err(DomainError::FractionOutOfRange {
            field: "porosity",
            value: porosity,
        });
    }
    require_positive("archie parameter a", archie.a)?;
    require_positive("archie parameter m", archie.m)?;
    require_positive("archie parameter n", archie.n)?;

    let porosity_factor = porosity
        .checked_powd(archie.m)
        .ok_or(DomainError::NumericOverflow {
            context: "archie porosity exponent",
        })?;

    let resistivity_ratio = (archie.a * water_resistivity) / (porosity_factor * true_resistivity);
    let raw = resistivity_ratio
        .checked_powd(Decimal::ONE / archie.n)
        .ok_or(DomainError::NumericOverflow {
            context: "archie saturation exponent",
        })?;

    if raw > Decimal::ONE + archie.sw_clamp_tolerance {
        return Err(DomainError::SaturationAboveTolerance {
            value: round_output(raw),
            tolerance: archie.sw_clamp_tolerance,
        });
    }

    Ok(round_output(raw.min(Decimal::ONE)))
}

/// Calculate the linear gamma-ray index
///
/// Formula: GRI = (GR_log − GR_clean) / (GR_shale − GR_clean)
///
/// Log noise commonly pushes readings slightly outside the clean/shale
/// bounds, so the index is clamped to [0, 1] rather than rejected.
///
/// # Errors
///
/// Returns a [`DomainError`] if `gr_shale` does not exceed `gr_clean`.
pub fn gamma_ray_index(
    gr_log: Decimal,
    gr_clean: Decimal,
    gr_shale: Decimal,
) -> Result<Decimal, DomainError> {
    if gr_shale <= gr_clean {
        return Err(DomainError::InvertedGammaRayBounds {
            clean: gr_clean,
            shale: gr_shale,
        });
    }

    let index = (gr_log - gr_clean) / (gr_shale - gr_clean);
    Ok(round_output(index.clamp(Decimal::ZERO, Decimal::ONE)))
}

/// Calculate shale volume with the Larionov tertiary-rocks transform
///
/// Formula: Vsh = 0.083 × (2^(3.7 × GRI) − 1)
///
/// Where GRI is the clamped linear gamma-ray index of
/// [`gamma_ray_index`]. The result lies in [0, 1].
///
/// # Errors
///
/// Returns a [`DomainError`] if `gr_shale` does not exceed `gr_clean`.
pub fn calculate_shale_volume_larionov(
    gr_log: Decimal,
    gr_clean: Decimal,
    gr_shale: Decimal,
) -> Result<Decimal, DomainError> {
    let index = gamma_ray_index(gr_log, gr_clean, gr_shale)?;
    larionov_transform(index, dec!(3.7), dec!(0.083))
}

/// Calculate shale volume with the Larionov older-rocks transform
///
/// Formula: Vsh = 0.33 × (2^(2 × GRI) − 1)
///
/// Companion to [`calculate_shale_volume_larionov`] for consolidated
/// pre-tertiary formations.
///
/// # Errors
///
/// Returns a [`DomainError`] if `gr_shale` does not exceed `gr_clean`.
pub fn calculate_shale_volume_larionov_older(
    gr_log: Decimal,
    gr_clean: Decimal,
    gr_shale: Decimal,
) -> Result<Decimal, DomainError> {
    let index = gamma_ray_index(gr_log, gr_clean, gr_shale)?;
    larionov_transform(index, dec!(2.0), dec!(0.33))
}

fn larionov_transform(
    index: Decimal,
    exponent_scale: Decimal,
    coefficient: Decimal,
) -> Result<Decimal, DomainError> {
    let power = dec!(2)
        .checked_powd(exponent_scale * index)
        .ok_or(DomainError::NumericOverflow {
            context: "larionov transform",
        })?;
    let vsh = coefficient * (power - Decimal::ONE);
    Ok(round_output(vsh.clamp(Decimal::ZERO, Decimal::ONE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archie_typical_pay_zone() {
        // Clean sand, default parameters: Rw 0.05, Rt 20, porosity 20%
        let sw = calculate_archie_water_saturation(
            dec!(0.05),
            dec!(20),
            dec!(0.20),
            &ArchieConfig::default(),
        )
        .expect("valid inputs");

        // Sw = sqrt(0.05 / (0.04 * 20)) = sqrt(0.0625) = 0.25
        assert_eq!(sw, dec!(0.25));
    }

    #[test]
    fn test_archie_clamps_within_tolerance() {
        // Wet zone pushed just past 1 by log noise: raw Sw ≈ 1.02
        let archie = ArchieConfig::default();
        let sw = calculate_archie_water_saturation(dec!(0.0834), dec!(2.0), dec!(0.20), &archie)
            .expect("raw Sw within clamp tolerance");

        assert_eq!(sw, dec!(1));
    }

    #[test]
    fn test_archie_rejects_beyond_tolerance() {
        // Raw Sw ≈ 1.37 — far outside any plausible noise excursion
        let err = calculate_archie_water_saturation(
            dec!(0.15),
            dec!(2.0),
            dec!(0.20),
            &ArchieConfig::default(),
        )
        .expect_err("raw Sw beyond clamp tolerance");

        assert_eq!(err.code(), "SATURATION_ABOVE_TOLERANCE");
    }

    #[test]
    fn test_archie_rejects_zero_porosity() {
        let err = calculate_archie_water_saturation(
            dec!(0.05),
            dec!(20),
            dec!(0),
            &ArchieConfig::default(),
        )
        .expect_err("zero porosity");

        assert_eq!(err.code(), "NOT_POSITIVE");
    }

    #[test]
    fn test_gamma_ray_index_clamps_noise_excursions() {
        let below = gamma_ray_index(dec!(10), dec!(20), dec!(120)).expect("valid bounds");
        let above = gamma_ray_index(dec!(130), dec!(20), dec!(120)).expect("valid bounds");

        assert_eq!(below, dec!(0));
        assert_eq!(above, dec!(1));
    }

    #[test]
    fn test_gamma_ray_index_rejects_inverted_bounds() {
        let err = gamma_ray_index(dec!(60), dec!(120), dec!(20)).expect_err("inverted bounds");
        assert_eq!(err.code(), "INVERTED_GAMMA_RAY_BOUNDS");
    }

    #[test]
    fn test_larionov_endpoints() {
        // Clean rock: zero shale. Pure shale: ~1 after clamping.
        let clean = calculate_shale_volume_larionov(dec!(20), dec!(20), dec!(120))
            .expect("valid bounds");
        let shale = calculate_shale_volume_larionov(dec!(120), dec!(20), dec!(120))
            .expect("valid bounds");

        assert_eq!(clean, dec!(0));
        assert!(shale > dec!(0.99) && shale <= dec!(1), "got {shale}");
    }

    #[test]
    fn test_larionov_tertiary_suppresses_low_index() {
        // The non-linear transform reads well below the linear index mid-range
        let vsh = calculate_shale_volume_larionov(dec!(70), dec!(20), dec!(120))
            .expect("valid bounds");

        assert!(vsh < dec!(0.5), "tertiary transform should be below linear, got {vsh}");
        assert!(vsh > dec!(0.2), "got {vsh}");
    }

    #[test]
    fn test_larionov_older_exceeds_tertiary() {
        let tertiary = calculate_shale_volume_larionov(dec!(70), dec!(20), dec!(120))
            .expect("valid bounds");
        let older = calculate_shale_volume_larionov_older(dec!(70), dec!(20), dec!(120))
            .expect("valid bounds");

        assert!(older > tertiary, "older-rocks transform reads higher: {older} vs {tertiary}");
    }
}
