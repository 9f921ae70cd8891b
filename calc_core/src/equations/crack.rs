//! # Crack Control Formulas (EN 1992-1-1 Section 7.3)
//!
//! Closed-form expressions for the crack width check of 7.3.4 and the minimum
//! reinforcement areas of 7.3.2 and 9.2.1.1. Every function is pure; the
//! fallible ones return a structured error instead of letting a division by
//! zero surface as NaN or infinity.
//!
//! ## Notation
//!
//! - `σ_s` = Steel stress under service load (MPa)
//! - `A_s` = Tension steel area (mm²)
//! - `h_c,eff`, `A_c,eff` = Effective tension height (mm) and area (mm²)
//! - `ρ_p,eff` = A_s / A_c,eff
//! - `s_r,max` = Maximum crack spacing (mm)
//! - `ε_sm − ε_cm` = Mean strain difference between steel and concrete
//! - `w_k` = Characteristic crack width (mm)
//!
//! ## Simplifications
//!
//! - σ_s from a moment uses a lever arm of 0.9·d and a fixed 1.15 factor
//! - f_ct,eff is taken as f_ctm (cracking expected after 28 days)
//! - Crack spacing uses the bonded-bar expression (7.11) with k1 = 0.8
//!
//! ## References
//!
//! - EN 1992-1-1:2004, 7.3.2, 7.3.4, 9.2.1.1

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadType;
use crate::units::{KnM, Millimeters, NMm, SqMm};

/// Bond coefficient k1 for high bond bars
pub const K1: f64 = 0.8;
/// Cover coefficient k3 (recommended value)
pub const K3: f64 = 3.4;
/// Bar coefficient k4 (recommended value)
pub const K4: f64 = 0.425;
/// Upper bound on ρ_p,eff
pub const RHO_P_EFF_MAX: f64 = 0.05;
/// Factor applied to the elastic steel stress derived from a moment
pub const STEEL_STRESS_FACTOR: f64 = 1.15;
/// Lever arm as a fraction of d
pub const LEVER_ARM_FACTOR: f64 = 0.9;
/// Tension stiffening multiplier coefficient of the moment-based strain formula
pub const MOMENT_BASED_STIFFENING: f64 = 35.0;
/// Lower bound on ε_sm − ε_cm as a fraction of σ_s/E_s (stress-based formula)
pub const MIN_STRAIN_FRACTION: f64 = 0.6;

// =============================================================================
// STEEL STRESS
// =============================================================================

/// Steel stress derived from a service moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelStress {
    /// 1.15·M/(A_s·0.9·d) before the yield cap (MPa)
    pub elastic_mpa: f64,
    /// min(elastic, f_yk) (MPa)
    pub stress_mpa: f64,
    /// True when f_yk governed
    pub yield_capped: bool,
}

/// Calculate the service steel stress from a bending moment.
///
/// # Formula
/// σ_s = min(1.15·M / (A_s·0.9·d), f_yk), M converted from kN·m to N·mm
///
/// # Errors
/// `DegenerateSection` when `A_s ≤ 0` or `d ≤ 0`.
///
/// # Example
/// ```rust
/// use calc_core::equations::crack::steel_stress_from_moment;
///
/// let sigma = steel_stress_from_moment(120.0, 804.4, 460.0, 500.0).unwrap();
/// assert!((sigma.stress_mpa - 414.39).abs() < 0.01);
/// assert!(!sigma.yield_capped);
/// ```
pub fn steel_stress_from_moment(
    moment_knm: f64,
    area_mm2: f64,
    effective_depth_mm: f64,
    fyk_mpa: f64,
) -> CalcResult<SteelStress> {
    if area_mm2 <= 0.0 {
        return Err(CalcError::degenerate_section(
            "steel area A_s must be positive to derive the steel stress",
        ));
    }
    if effective_depth_mm <= 0.0 {
        return Err(CalcError::degenerate_section("effective depth d must be positive"));
    }

    let moment: NMm = KnM(moment_knm).into();
    let lever_arm_mm = LEVER_ARM_FACTOR * effective_depth_mm;
    let elastic_mpa = STEEL_STRESS_FACTOR * moment.0 / (area_mm2 * lever_arm_mm);
    let stress_mpa = elastic_mpa.min(fyk_mpa);

    Ok(SteelStress {
        elastic_mpa,
        stress_mpa,
        yield_capped: elastic_mpa > fyk_mpa,
    })
}

// =============================================================================
// EFFECTIVE TENSION AREA
// =============================================================================

/// Effective tension height h_c,eff (mm).
///
/// # Formula (7.3.2(3), Figure 7.1)
/// - Bending: h_c,eff = min(2.5·(h − d), h/2)
/// - Tension: h_c,eff = h/2 (per face)
#[inline]
pub fn effective_tension_height(height_mm: f64, effective_depth_mm: f64, load_type: LoadType) -> f64 {
    match load_type {
        LoadType::Bending => (2.5 * (height_mm - effective_depth_mm)).min(height_mm / 2.0),
        LoadType::Tension => height_mm / 2.0,
    }
}

/// Effective reinforcement ratio with its intermediate terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveRatio {
    /// h_c,eff (mm)
    pub hc_eff_mm: f64,
    /// A_c,eff = b·h_c,eff (mm²)
    pub ac_eff_mm2: f64,
    /// A_s / A_c,eff before the ceiling
    pub unclamped: f64,
    /// ρ_p,eff after the 0.05 ceiling
    pub rho_p_eff: f64,
}

impl EffectiveRatio {
    /// True when the 0.05 ceiling governed
    pub fn is_clamped(&self) -> bool {
        self.unclamped > RHO_P_EFF_MAX
    }
}

/// Calculate ρ_p,eff and the effective tension area.
///
/// # Formula (7.10)
/// ρ_p,eff = min(A_s / A_c,eff, 0.05), A_c,eff = b·h_c,eff
///
/// # Errors
/// `DegenerateSection` when `A_c,eff ≤ 0` (e.g. d ≥ h in bending) or `A_s ≤ 0`.
pub fn effective_reinforcement(
    area_mm2: f64,
    width_mm: f64,
    height_mm: f64,
    effective_depth_mm: f64,
    load_type: LoadType,
) -> CalcResult<EffectiveRatio> {
    let hc_eff_mm = effective_tension_height(height_mm, effective_depth_mm, load_type);
    let ac_eff: SqMm = Millimeters(width_mm) * Millimeters(hc_eff_mm);

    if !(ac_eff.0 > 0.0) {
        return Err(CalcError::degenerate_section(format!(
            "effective tension area A_c,eff = {} mm² is not positive",
            ac_eff.0
        )));
    }
    if area_mm2 <= 0.0 {
        return Err(CalcError::degenerate_section(
            "steel area A_s must be positive; crack width is unbounded",
        ));
    }

    let unclamped = area_mm2 / ac_eff.0;
    Ok(EffectiveRatio {
        hc_eff_mm,
        ac_eff_mm2: ac_eff.0,
        unclamped,
        rho_p_eff: unclamped.min(RHO_P_EFF_MAX),
    })
}

/// Calculate ρ_p,eff only. See [`effective_reinforcement`].
///
/// # Example
/// ```rust
/// use calc_core::equations::crack::effective_reinforcement_ratio;
/// use calc_core::loads::LoadType;
///
/// // h_c,eff = min(2.5·40, 250) = 100 mm, A_c,eff = 30 000 mm²
/// let rho = effective_reinforcement_ratio(804.4, 300.0, 500.0, 460.0, LoadType::Bending).unwrap();
/// assert!((rho - 804.4 / 30_000.0).abs() < 1e-12);
/// ```
pub fn effective_reinforcement_ratio(
    area_mm2: f64,
    width_mm: f64,
    height_mm: f64,
    effective_depth_mm: f64,
    load_type: LoadType,
) -> CalcResult<f64> {
    effective_reinforcement(area_mm2, width_mm, height_mm, effective_depth_mm, load_type)
        .map(|r| r.rho_p_eff)
}

fn require_ratio(rho_p_eff: f64) -> CalcResult<()> {
    if !(rho_p_eff > 0.0) {
        return Err(CalcError::degenerate_section(format!(
            "effective reinforcement ratio ρ_p,eff = {} is not positive",
            rho_p_eff
        )));
    }
    Ok(())
}

// =============================================================================
// CRACK SPACING
// =============================================================================

/// Maximum crack spacing s_r,max (mm).
///
/// # Formula (7.11)
/// s_r,max = k3·c + k1·k2·k4·φ / ρ_p,eff
///
/// with k1 = 0.8, k3 = 3.4, k4 = 0.425 and k2 from the load type.
///
/// # Errors
/// `DegenerateSection` when `ρ_p,eff ≤ 0`.
pub fn max_crack_spacing(
    cover_mm: f64,
    bar_diameter_mm: f64,
    rho_p_eff: f64,
    load_type: LoadType,
) -> CalcResult<f64> {
    require_ratio(rho_p_eff)?;
    Ok(K3 * cover_mm + K1 * load_type.k2() * K4 * bar_diameter_mm / rho_p_eff)
}

// =============================================================================
// STRAIN DIFFERENCE
// =============================================================================

/// Which form of expression (7.9) to evaluate.
///
/// The two forms differ in the tension stiffening multiplier and in whether
/// the 0.6·σ_s/E_s lower bound applies. They are kept as separate modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrainFormula {
    /// Δσ = σ_s − k_t·(f_ct,eff/ρ)·(1 + 35·ρ), result max(Δσ/E_s, 0)
    MomentBased,
    /// Δσ = σ_s − k_t·(f_ct,eff/ρ)·(1 + α_e·ρ), result max(Δσ/E_s, 0.6·σ_s/E_s, 0)
    StressBased { alpha_e: f64 },
}

/// Bound that produced ε_sm − ε_cm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrainBound {
    /// Δσ/E_s governed
    StressDifference,
    /// The 0.6·σ_s/E_s floor governed
    MinimumFloor,
    /// Tension stiffening exceeded σ_s; clamped to zero
    Zero,
}

/// Mean strain difference with every intermediate term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrainDifference {
    /// (1 + 35·ρ) or (1 + α_e·ρ)
    pub stiffening_multiplier: f64,
    /// k_t·(f_ct,eff/ρ_p,eff)·multiplier (MPa)
    pub tension_stiffening_mpa: f64,
    /// Δσ = σ_s − tension stiffening (MPa), may be negative
    pub stress_difference_mpa: f64,
    /// Δσ / E_s, may be negative
    pub raw_strain: f64,
    /// 0.6·σ_s/E_s for the stress-based form
    pub floor_strain: Option<f64>,
    /// ε_sm − ε_cm after bounds, never negative
    pub strain: f64,
    pub governed_by: StrainBound,
}

/// Calculate ε_sm − ε_cm.
///
/// # Formula (7.9)
/// See [`StrainFormula`] for the two variants.
///
/// # Errors
/// `DegenerateSection` when `ρ_p,eff ≤ 0`.
///
/// # Example
/// ```rust
/// use calc_core::equations::crack::{strain_difference, StrainBound, StrainFormula};
///
/// // Stress below the tension stiffening term clamps to zero
/// let eps = strain_difference(StrainFormula::MomentBased, 10.0, 2.9, 0.01, 200_000.0, 0.4).unwrap();
/// assert_eq!(eps.strain, 0.0);
/// assert_eq!(eps.governed_by, StrainBound::Zero);
/// ```
pub fn strain_difference(
    formula: StrainFormula,
    steel_stress_mpa: f64,
    fct_eff_mpa: f64,
    rho_p_eff: f64,
    es_mpa: f64,
    kt: f64,
) -> CalcResult<StrainDifference> {
    require_ratio(rho_p_eff)?;
    if !(es_mpa > 0.0) {
        return Err(CalcError::invalid_input(
            "es_mpa",
            es_mpa.to_string(),
            "Steel modulus must be positive",
        ));
    }

    let stiffening_multiplier = match formula {
        StrainFormula::MomentBased => 1.0 + MOMENT_BASED_STIFFENING * rho_p_eff,
        StrainFormula::StressBased { alpha_e } => 1.0 + alpha_e * rho_p_eff,
    };
    let tension_stiffening_mpa = kt * (fct_eff_mpa / rho_p_eff) * stiffening_multiplier;
    let stress_difference_mpa = steel_stress_mpa - tension_stiffening_mpa;
    let raw_strain = stress_difference_mpa / es_mpa;

    let floor_strain = match formula {
        StrainFormula::MomentBased => None,
        StrainFormula::StressBased { .. } => Some(MIN_STRAIN_FRACTION * steel_stress_mpa / es_mpa),
    };

    let mut strain = raw_strain;
    let mut governed_by = StrainBound::StressDifference;
    if let Some(floor) = floor_strain {
        if floor > strain {
            strain = floor;
            governed_by = StrainBound::MinimumFloor;
        }
    }
    if !(strain > 0.0) {
        strain = 0.0;
        governed_by = StrainBound::Zero;
    }

    Ok(StrainDifference {
        stiffening_multiplier,
        tension_stiffening_mpa,
        stress_difference_mpa,
        raw_strain,
        floor_strain,
        strain,
        governed_by,
    })
}

// =============================================================================
// CRACK WIDTH
// =============================================================================

/// Characteristic crack width (mm).
///
/// # Formula (7.8)
/// w_k = s_r,max·(ε_sm − ε_cm)
#[inline]
pub fn crack_width(max_crack_spacing_mm: f64, strain: f64) -> f64 {
    max_crack_spacing_mm * strain
}

// =============================================================================
// MINIMUM REINFORCEMENT
// =============================================================================

/// Minimum longitudinal tension reinforcement with both terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumReinforcement {
    /// 0.26·(f_ctm/f_yk)·b_t·d (mm²)
    pub strength_term_mm2: f64,
    /// 0.0013·b_t·d (mm²)
    pub ratio_term_mm2: f64,
    /// Larger of the two (mm²)
    pub area_mm2: f64,
}

/// Calculate A_s,min for beams.
///
/// # Formula (9.1N)
/// A_s,min = max(0.26·(f_ctm/f_yk)·b_t·d, 0.0013·b_t·d)
///
/// # Errors
/// `InvalidInput` when `f_yk ≤ 0`.
///
/// # Example
/// ```rust
/// use calc_core::equations::crack::minimum_reinforcement_area;
///
/// let min = minimum_reinforcement_area(2.9, 500.0, 300.0, 460.0).unwrap();
/// assert!((min.ratio_term_mm2 - 179.4).abs() < 1e-9);
/// assert_eq!(min.area_mm2, min.strength_term_mm2);
/// ```
pub fn minimum_reinforcement_area(
    fctm_mpa: f64,
    fyk_mpa: f64,
    width_mm: f64,
    effective_depth_mm: f64,
) -> CalcResult<MinimumReinforcement> {
    if !(fyk_mpa > 0.0) {
        return Err(CalcError::invalid_input(
            "fyk_mpa",
            fyk_mpa.to_string(),
            "Yield strength must be positive",
        ));
    }
    let bd = width_mm * effective_depth_mm;
    let strength_term_mm2 = 0.26 * (fctm_mpa / fyk_mpa) * bd;
    let ratio_term_mm2 = 0.0013 * bd;
    Ok(MinimumReinforcement {
        strength_term_mm2,
        ratio_term_mm2,
        area_mm2: strength_term_mm2.max(ratio_term_mm2),
    })
}

/// Height factor k for non-uniform self-equilibrating stresses.
///
/// Linear approximation of the 7.3.2(2) interpolation between k = 1.0
/// (h ≤ 300 mm) and k = 0.65 (h ≥ 800 mm): k = max(0.65, 1 − (h − 300)/1000).
/// It is not the code's own interpolation and reaches 0.65 only at h = 650 mm.
#[inline]
pub fn height_factor(height_mm: f64) -> f64 {
    if height_mm > 300.0 {
        (1.0 - (height_mm - 300.0) / 1000.0).max(0.65)
    } else {
        1.0
    }
}

/// Concrete area in tension just before cracking, A_ct (mm²).
///
/// b·h/2 in bending (rectangular section), b·h in pure tension.
#[inline]
pub fn cracking_tension_area(width_mm: f64, height_mm: f64, load_type: LoadType) -> f64 {
    match load_type {
        LoadType::Bending => width_mm * height_mm / 2.0,
        LoadType::Tension => width_mm * height_mm,
    }
}

/// Crack control minimum area for a permitted steel stress.
///
/// # Formula (7.1)
/// A_s,min·σ_s = k_c·k·f_ct,eff·A_ct
///
/// # Errors
/// `InvalidInput` when `σ_s ≤ 0`.
pub fn crack_control_area(
    kc: f64,
    k: f64,
    fct_eff_mpa: f64,
    tension_area_mm2: f64,
    steel_stress_mpa: f64,
) -> CalcResult<f64> {
    if !(steel_stress_mpa > 0.0) {
        return Err(CalcError::invalid_input(
            "steel_stress_mpa",
            steel_stress_mpa.to_string(),
            "Steel stress must be positive",
        ));
    }
    Ok(kc * k * fct_eff_mpa * tension_area_mm2 / steel_stress_mpa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_steel_stress_elastic() {
        let sigma = steel_stress_from_moment(120.0, 804.4, 460.0, 500.0).unwrap();
        let expected = 1.15 * 120.0e6 / (804.4 * 0.9 * 460.0);
        assert_relative_eq!(sigma.stress_mpa, expected, epsilon = 1e-9);
        assert_eq!(sigma.elastic_mpa, sigma.stress_mpa);
        assert!(!sigma.yield_capped);
    }

    #[test]
    fn test_steel_stress_capped_at_yield() {
        let sigma = steel_stress_from_moment(120.0, 400.0, 460.0, 500.0).unwrap();
        assert!(sigma.elastic_mpa > 500.0);
        assert_eq!(sigma.stress_mpa, 500.0);
        assert!(sigma.yield_capped);
    }

    #[test]
    fn test_steel_stress_zero_area() {
        let err = steel_stress_from_moment(120.0, 0.0, 460.0, 500.0).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SECTION");
    }

    #[test]
    fn test_effective_tension_height() {
        // 2.5·(500 − 460) = 100 governs over 250
        assert_eq!(effective_tension_height(500.0, 460.0, LoadType::Bending), 100.0);
        // 2.5·(500 − 350) = 375, h/2 = 250 governs
        assert_eq!(effective_tension_height(500.0, 350.0, LoadType::Bending), 250.0);
        assert_eq!(effective_tension_height(500.0, 460.0, LoadType::Tension), 250.0);
    }

    #[test]
    fn test_ratio_clamped() {
        // Far more steel than the effective area can carry
        for area in [1_500.0, 1_501.0, 5_000.0, 1.0e9] {
            let ratio = effective_reinforcement(area, 300.0, 500.0, 460.0, LoadType::Bending).unwrap();
            assert!(ratio.rho_p_eff <= RHO_P_EFF_MAX);
        }
        let ratio = effective_reinforcement(6_000.0, 300.0, 500.0, 460.0, LoadType::Bending).unwrap();
        assert_eq!(ratio.rho_p_eff, 0.05);
        assert!(ratio.is_clamped());
        assert_relative_eq!(ratio.unclamped, 0.2);
    }

    #[test]
    fn test_ratio_degenerate() {
        // d = h leaves no tension zone in bending
        let err = effective_reinforcement_ratio(804.4, 300.0, 500.0, 500.0, LoadType::Bending).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SECTION");

        let err = effective_reinforcement_ratio(0.0, 300.0, 500.0, 460.0, LoadType::Bending).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SECTION");
    }

    #[test]
    fn test_crack_spacing() {
        let rho = 804.4 / 30_000.0;
        let s = max_crack_spacing(35.0, 16.0, rho, LoadType::Bending).unwrap();
        assert_relative_eq!(s, 3.4 * 35.0 + 0.8 * 0.5 * 0.425 * 16.0 / rho, epsilon = 1e-12);

        let s_tension = max_crack_spacing(35.0, 16.0, rho, LoadType::Tension).unwrap();
        assert!(s_tension > s);

        assert!(max_crack_spacing(35.0, 16.0, 0.0, LoadType::Bending).is_err());
    }

    #[test]
    fn test_strain_moment_based() {
        let rho = 0.02;
        let eps = strain_difference(StrainFormula::MomentBased, 300.0, 2.9, rho, 200_000.0, 0.4).unwrap();
        let delta = 300.0 - 0.4 * (2.9 / rho) * (1.0 + 35.0 * rho);
        assert_relative_eq!(eps.stress_difference_mpa, delta, epsilon = 1e-12);
        assert_relative_eq!(eps.strain, delta / 200_000.0, epsilon = 1e-15);
        assert_eq!(eps.floor_strain, None);
        assert_eq!(eps.governed_by, StrainBound::StressDifference);
    }

    #[test]
    fn test_strain_stress_based_floor() {
        // Heavy tension stiffening: the 0.6·σ_s/E_s floor governs
        let formula = StrainFormula::StressBased { alpha_e: 6.0 };
        let eps = strain_difference(formula, 200.0, 2.9, 0.01, 200_000.0, 0.4).unwrap();
        assert_eq!(eps.governed_by, StrainBound::MinimumFloor);
        assert_relative_eq!(eps.strain, 0.6 * 200.0 / 200_000.0, epsilon = 1e-15);

        // Same inputs without the floor fall to the raw value
        let plain = strain_difference(StrainFormula::MomentBased, 200.0, 2.9, 0.01, 200_000.0, 0.4).unwrap();
        assert!(plain.strain < eps.strain);
    }

    #[test]
    fn test_strain_never_negative() {
        let formulas = [StrainFormula::MomentBased, StrainFormula::StressBased { alpha_e: 6.5 }];
        let stresses = [-100.0, 0.0, 1.0, 10.0, 50.0, 200.0, 500.0];
        let ratios = [1.0e-4, 0.001, 0.01, 0.05];
        for formula in formulas {
            for sigma in stresses {
                for rho in ratios {
                    let eps = strain_difference(formula, sigma, 4.1, rho, 200_000.0, 0.6).unwrap();
                    assert!(eps.strain >= 0.0, "{:?} σ={} ρ={}", formula, sigma, rho);
                }
            }
        }
    }

    #[test]
    fn test_crack_width() {
        assert_relative_eq!(crack_width(200.0, 0.0015), 0.3, epsilon = 1e-12);
        assert_eq!(crack_width(200.0, 0.0), 0.0);
    }

    #[test]
    fn test_minimum_reinforcement_worked_example() {
        let min = minimum_reinforcement_area(2.9, 500.0, 300.0, 460.0).unwrap();
        assert_relative_eq!(min.strength_term_mm2, 0.26 * (2.9 / 500.0) * 300.0 * 460.0, epsilon = 1e-9);
        assert_relative_eq!(min.strength_term_mm2, 208.104, epsilon = 1e-6);
        assert_relative_eq!(min.ratio_term_mm2, 179.4, epsilon = 1e-9);
        assert_eq!(min.area_mm2, min.strength_term_mm2);
    }

    #[test]
    fn test_minimum_reinforcement_ratio_governs() {
        // Low f_ctm / high f_yk: 0.26·1.6/550 = 0.000756 < 0.0013
        let min = minimum_reinforcement_area(1.6, 550.0, 300.0, 460.0).unwrap();
        assert_eq!(min.area_mm2, min.ratio_term_mm2);
        assert!(minimum_reinforcement_area(2.9, 0.0, 300.0, 460.0).is_err());
    }

    #[test]
    fn test_height_factor() {
        assert_eq!(height_factor(250.0), 1.0);
        assert_eq!(height_factor(300.0), 1.0);
        assert_relative_eq!(height_factor(500.0), 0.8);
        assert_relative_eq!(height_factor(650.0), 0.65);
        assert_eq!(height_factor(1200.0), 0.65);
    }

    #[test]
    fn test_crack_control_area() {
        let act = cracking_tension_area(300.0, 500.0, LoadType::Bending);
        assert_eq!(act, 75_000.0);
        assert_eq!(cracking_tension_area(300.0, 500.0, LoadType::Tension), 150_000.0);

        let area = crack_control_area(0.4, 0.8, 2.9, act, 200.0).unwrap();
        assert_relative_eq!(area, 348.0, epsilon = 1e-9);
        assert!(crack_control_area(0.4, 0.8, 2.9, act, 0.0).is_err());
    }
}
