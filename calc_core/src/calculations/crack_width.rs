//! # Crack Width Check
//!
//! Checks a reinforced concrete section under service load per EN 1992-1-1
//! 7.3.4, and the provided steel against the minimum area of 9.2.1.1.
//!
//! ## Assumptions
//!
//! - Rectangular section, one layer of tension bars of a single diameter
//! - f_ct,eff = f_ctm
//! - b_t for the minimum area is the full section width
//! - A moment action derives σ_s with z = 0.9d; a steel stress action is used as given
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::crack_width::{calculate, CrackCheckInput};
//! use calc_core::loads::{LoadDuration, LoadType, ServiceAction};
//! use calc_core::materials::{BarDiameter, ConcreteGrade, MaterialProperties, ReinforcementLayout, SteelGrade};
//! use calc_core::section::SectionGeometry;
//!
//! let input = CrackCheckInput {
//!     label: "B-1 midspan".to_string(),
//!     section: SectionGeometry::new(300.0, 500.0, 460.0, 35.0),
//!     materials: MaterialProperties::new(ConcreteGrade::C30_37, SteelGrade::B500),
//!     reinforcement: ReinforcementLayout::bars(BarDiameter::D16, 4),
//!     load_type: LoadType::Bending,
//!     duration: LoadDuration::LongTerm,
//!     action: ServiceAction::moment(120.0),
//!     crack_width_limit_mm: 0.3,
//!     strain_mode: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("σ_s = {:.0} MPa", result.steel_stress_mpa);
//! println!("w_k = {:.3} mm", result.crack_width_mm);
//! assert!(!result.crack_width_ok);
//! assert!(result.minimum_area_ok);
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::equations::crack::{
    crack_width, effective_reinforcement, max_crack_spacing, minimum_reinforcement_area,
    steel_stress_from_moment, strain_difference, EffectiveRatio, StrainBound, StrainDifference,
    StrainFormula, K1, K3, K4,
};
use crate::equations::registry::{Equation, EquationTracker, EquationUsage};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadDuration, LoadType, ServiceAction};
use crate::materials::{ConcreteStrength, MaterialProperties, ReinforcementLayout, ResolvedMaterial};
use crate::section::SectionGeometry;

/// Which form of the strain difference expression (7.9) to use.
///
/// ## JSON Serialization
///
/// `"MomentBased"` or `"StressBased"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrainMode {
    /// (1 + 35ρ) multiplier, no lower bound
    MomentBased,
    /// (1 + α_e·ρ) multiplier, lower bound 0.6σ_s/E_s
    StressBased,
}

impl StrainMode {
    /// Mode used when the caller does not choose one
    pub fn default_for(action: &ServiceAction) -> Self {
        match action {
            ServiceAction::Moment { .. } => StrainMode::MomentBased,
            ServiceAction::SteelStress { .. } => StrainMode::StressBased,
        }
    }

    /// Formula with the material's modular ratio filled in
    pub fn formula(&self, alpha_e: f64) -> StrainFormula {
        match self {
            StrainMode::MomentBased => StrainFormula::MomentBased,
            StrainMode::StressBased => StrainFormula::StressBased { alpha_e },
        }
    }

    /// Registry entry for this mode
    pub fn equation(&self) -> Equation {
        match self {
            StrainMode::MomentBased => Equation::StrainDifferenceMomentBased,
            StrainMode::StressBased => Equation::StrainDifferenceStressBased,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrainMode::MomentBased => "Moment-based (1 + 35ρ)",
            StrainMode::StressBased => "Stress-based (1 + α_e·ρ, 0.6σ_s/E_s floor)",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "momentbased" | "moment" => Some(StrainMode::MomentBased),
            "stressbased" | "stress" => Some(StrainMode::StressBased),
            _ => None,
        }
    }
}

impl std::fmt::Display for StrainMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Input parameters for a crack width check.
///
/// ## JSON Example (moment action)
///
/// ```json
/// {
///   "label": "B-1 midspan",
///   "section": { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 },
///   "materials": { "concrete": { "type": "Grade", "grade": "C30/37" }, "steel": "B500" },
///   "reinforcement": { "type": "Bars", "diameter": "16", "count": 4 },
///   "load_type": "Bending",
///   "action": { "type": "Moment", "moment_knm": 120.0 },
///   "crack_width_limit_mm": 0.3
/// }
/// ```
///
/// ## JSON Example (known steel stress, pure tension)
///
/// ```json
/// {
///   "label": "Tie T-2",
///   "section": { "width_mm": 250.0, "height_mm": 250.0, "effective_depth_mm": 200.0, "cover_mm": 40.0 },
///   "materials": { "concrete": { "type": "Characteristic", "fck_mpa": 28.0 } },
///   "reinforcement": { "type": "Area", "diameter": "12", "area_mm2": 452.0 },
///   "load_type": "Tension",
///   "duration": "ShortTerm",
///   "action": { "type": "SteelStress", "stress_mpa": 220.0 },
///   "crack_width_limit_mm": 0.2,
///   "strain_mode": "StressBased"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackCheckInput {
    /// User label for this check (e.g., "B-1 midspan")
    #[serde(default)]
    pub label: String,

    /// Section dimensions
    pub section: SectionGeometry,

    /// Concrete and steel
    #[serde(default)]
    pub materials: MaterialProperties,

    /// Provided tension reinforcement
    pub reinforcement: ReinforcementLayout,

    /// Bending or pure tension
    #[serde(default)]
    pub load_type: LoadType,

    /// Long or short term loading
    #[serde(default)]
    pub duration: LoadDuration,

    /// Service moment or steel stress
    pub action: ServiceAction,

    /// Limiting crack width w_max (mm)
    pub crack_width_limit_mm: f64,

    /// Strain formula; when absent it follows the action type
    #[serde(default)]
    pub strain_mode: Option<StrainMode>,
}

impl CrackCheckInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.materials.validate()?;
        self.reinforcement.validate()?;
        self.action.validate()?;
        if !self.crack_width_limit_mm.is_finite() || self.crack_width_limit_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "crack_width_limit_mm",
                self.crack_width_limit_mm.to_string(),
                "Crack width limit must be positive",
            ));
        }
        Ok(())
    }

    /// Strain mode after applying the action-dependent default
    pub fn effective_strain_mode(&self) -> StrainMode {
        self.strain_mode.unwrap_or_else(|| StrainMode::default_for(&self.action))
    }
}

/// Crack width evaluation for one section at a given steel stress.
///
/// Shared by the crack width check and the minimum reinforcement solver,
/// which evaluates the same section at many steel areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackWidthModel {
    /// Section dimensions
    pub section: SectionGeometry,
    /// Bar diameter φ (mm)
    pub bar_diameter_mm: f64,
    /// Bending or pure tension
    pub load_type: LoadType,
    /// Selects k_t
    pub duration: LoadDuration,
    /// f_ctm, E_s and α_e
    pub material: ResolvedMaterial,
    /// Strain formula
    pub strain_mode: StrainMode,
}

/// Intermediate terms of one crack width evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackWidthTerms {
    /// h_c,eff, A_c,eff and ρ_p,eff
    pub ratio: EffectiveRatio,
    /// s_r,max (mm)
    pub crack_spacing_mm: f64,
    /// ε_sm − ε_cm with the bound that governed
    pub strain: StrainDifference,
    /// w_k (mm)
    pub crack_width_mm: f64,
}

impl CrackWidthModel {
    /// Evaluate h_c,eff, ρ_p,eff, s_r,max, ε_sm − ε_cm and w_k.
    pub fn evaluate(&self, area_mm2: f64, steel_stress_mpa: f64) -> CalcResult<CrackWidthTerms> {
        let ratio = effective_reinforcement(
            area_mm2,
            self.section.width_mm,
            self.section.height_mm,
            self.section.effective_depth_mm,
            self.load_type,
        )?;
        let crack_spacing_mm = max_crack_spacing(
            self.section.cover_mm,
            self.bar_diameter_mm,
            ratio.rho_p_eff,
            self.load_type,
        )?;
        let strain = strain_difference(
            self.strain_mode.formula(self.material.alpha_e),
            steel_stress_mpa,
            self.material.fctm_mpa,
            ratio.rho_p_eff,
            self.material.es_mpa,
            self.duration.kt(),
        )?;
        let crack_width_mm = crack_width(crack_spacing_mm, strain.strain);

        Ok(CrackWidthTerms {
            ratio,
            crack_spacing_mm,
            strain,
            crack_width_mm,
        })
    }
}

/// Crack width check results.
///
/// Every intermediate quantity is reported so the check can be reproduced by
/// hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackCheckResult {
    /// User label from the input
    pub label: String,

    // === Inputs as applied ===
    pub load_type: LoadType,
    pub duration: LoadDuration,
    /// Strain formula after the action-dependent default
    pub strain_mode: StrainMode,
    /// Provided tension steel A_s (mm²)
    pub provided_area_mm2: f64,
    /// Bar diameter φ (mm)
    pub bar_diameter_mm: f64,

    // === Materials ===
    /// f_ctm, used as f_ct,eff (MPa)
    pub fctm_mpa: f64,
    /// f_yk (MPa)
    pub fyk_mpa: f64,
    /// E_cm (MPa)
    pub ecm_mpa: f64,
    /// Modular ratio E_s/E_cm
    pub alpha_e: f64,

    // === Steel stress ===
    /// σ_s before the yield cap (MPa)
    pub elastic_steel_stress_mpa: f64,
    /// σ_s used in the check (MPa)
    pub steel_stress_mpa: f64,
    /// True when f_yk capped the stress derived from the moment
    pub yield_capped: bool,

    // === Effective tension area ===
    /// h_c,eff (mm)
    pub hc_eff_mm: f64,
    /// A_c,eff = b·h_c,eff (mm²)
    pub ac_eff_mm2: f64,
    /// ρ_p,eff after the 0.05 ceiling
    pub rho_p_eff: f64,
    /// True when the ceiling applied
    pub rho_p_eff_clamped: bool,

    // === Coefficients ===
    /// Bond coefficient k1
    pub k1: f64,
    /// Strain distribution coefficient k2
    pub k2: f64,
    /// Cover coefficient k3
    pub k3: f64,
    /// Spacing coefficient k4
    pub k4: f64,
    /// Load duration factor k_t
    pub kt: f64,

    // === Crack width ===
    /// s_r,max (mm)
    pub crack_spacing_mm: f64,
    /// k_t·(f_ct,eff/ρ)·multiplier (MPa)
    pub tension_stiffening_mpa: f64,
    /// ε_sm − ε_cm
    pub strain_difference: f64,
    /// Formula value or one of its floors
    pub strain_governed_by: StrainBound,
    /// w_k (mm)
    pub crack_width_mm: f64,
    /// w_max (mm)
    pub crack_width_limit_mm: f64,

    // === Minimum area ===
    /// 0.26·(f_ctm/f_yk)·b_t·d (mm²)
    pub min_area_strength_term_mm2: f64,
    /// 0.0013·b_t·d (mm²)
    pub min_area_ratio_term_mm2: f64,
    /// A_s,min (mm²)
    pub min_area_mm2: f64,

    // === Checks ===
    /// w_k ≤ w_max
    pub crack_width_ok: bool,
    /// A_s ≥ A_s,min
    pub minimum_area_ok: bool,

    /// Equations applied, in order
    pub equations: Vec<EquationUsage>,
}

impl CrackCheckResult {
    /// Both the crack width and the minimum area checks pass
    pub fn passes(&self) -> bool {
        self.crack_width_ok && self.minimum_area_ok
    }

    /// w_k / w_max
    pub fn crack_width_unity(&self) -> f64 {
        self.crack_width_mm / self.crack_width_limit_mm
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        match (self.crack_width_ok, self.minimum_area_ok) {
            (true, true) => "OK",
            (false, true) => "Crack width",
            (true, false) => "Minimum reinforcement",
            (false, false) => "Crack width and minimum reinforcement",
        }
    }
}

/// Run the crack width check.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(CrackCheckResult)` - All intermediate values and pass flags
/// * `Err(CalcError)` - `InvalidInput`/`InvalidGrade` for bad input,
///   `DegenerateSection` when the geometry leaves a zero denominator
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::crack_width::{calculate, CrackCheckInput, StrainMode};
/// use calc_core::loads::{LoadDuration, LoadType, ServiceAction};
/// use calc_core::materials::{BarDiameter, MaterialProperties, ReinforcementLayout};
/// use calc_core::section::SectionGeometry;
///
/// let input = CrackCheckInput {
///     label: "Wall strip".to_string(),
///     section: SectionGeometry::new(1000.0, 250.0, 200.0, 40.0),
///     materials: MaterialProperties::default(),
///     reinforcement: ReinforcementLayout::bars(BarDiameter::D12, 5),
///     load_type: LoadType::Bending,
///     duration: LoadDuration::LongTerm,
///     action: ServiceAction::steel_stress(240.0),
///     crack_width_limit_mm: 0.3,
///     strain_mode: None,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert_eq!(result.strain_mode, StrainMode::StressBased);
/// assert!(result.strain_difference >= 0.6 * 240.0 / 200_000.0);
/// ```
#[instrument(skip_all, fields(label = %input.label))]
pub fn calculate(input: &CrackCheckInput) -> CalcResult<CrackCheckResult> {
    input.validate()?;

    let material = input.materials.resolved();
    let section = &input.section;
    let strain_mode = input.effective_strain_mode();
    let area_mm2 = input.reinforcement.area_mm2();
    let mut tracker = EquationTracker::new();

    match input.materials.concrete {
        ConcreteStrength::Grade { grade } => {
            tracker.record(Equation::ConcreteTensileStrengthTable, grade.code());
        }
        ConcreteStrength::Characteristic { fck_mpa } => {
            tracker.record(Equation::ConcreteTensileStrengthFormula, format!("f_ck = {} MPa", fck_mpa));
        }
    }
    if strain_mode == StrainMode::StressBased {
        tracker.record(Equation::ConcreteElasticModulus, "Modular ratio α_e");
    }

    // === Steel stress ===
    let (elastic_steel_stress_mpa, steel_stress_mpa, yield_capped) = match input.action {
        ServiceAction::Moment { moment_knm } => {
            let sigma = steel_stress_from_moment(moment_knm, area_mm2, section.effective_depth_mm, material.fyk_mpa)?;
            tracker.record(Equation::SteelStressFromMoment, format!("M = {} kN·m", moment_knm));
            (sigma.elastic_mpa, sigma.stress_mpa, sigma.yield_capped)
        }
        ServiceAction::SteelStress { stress_mpa } => (stress_mpa, stress_mpa, false),
    };
    tracing::debug!(steel_stress_mpa, yield_capped, "steel stress");

    // === Crack width ===
    let model = CrackWidthModel {
        section: *section,
        bar_diameter_mm: input.reinforcement.diameter_mm(),
        load_type: input.load_type,
        duration: input.duration,
        material,
        strain_mode,
    };
    let terms = model.evaluate(area_mm2, steel_stress_mpa)?;
    let provided = input.reinforcement.display_name();
    tracker.record(Equation::EffectiveTensionHeight, input.load_type.description());
    tracker.record(Equation::EffectiveReinforcementRatio, provided.as_str());
    tracker.record(Equation::MaxCrackSpacing, provided.as_str());
    tracker.record(strain_mode.equation(), input.duration.description());
    tracker.record(Equation::CrackWidth, provided.as_str());
    tracing::debug!(
        hc_eff_mm = terms.ratio.hc_eff_mm,
        rho_p_eff = terms.ratio.rho_p_eff,
        crack_spacing_mm = terms.crack_spacing_mm,
        strain = terms.strain.strain,
        crack_width_mm = terms.crack_width_mm,
        "crack width"
    );

    // === Minimum area ===
    let min = minimum_reinforcement_area(
        material.fctm_mpa,
        material.fyk_mpa,
        section.width_mm,
        section.effective_depth_mm,
    )?;
    tracker.record(Equation::MinimumReinforcementArea, "b_t = b");
    tracing::debug!(min_area_mm2 = min.area_mm2, provided_area_mm2 = area_mm2, "minimum area");

    // === Checks ===
    let crack_width_ok = terms.crack_width_mm <= input.crack_width_limit_mm;
    let minimum_area_ok = area_mm2 >= min.area_mm2;
    tracker.record(
        Equation::CrackWidthLimit,
        format!("w_max = {} mm", input.crack_width_limit_mm),
    );
    tracker.record(Equation::MinimumAreaCheck, provided.as_str());

    Ok(CrackCheckResult {
        label: input.label.clone(),
        load_type: input.load_type,
        duration: input.duration,
        strain_mode,
        provided_area_mm2: area_mm2,
        bar_diameter_mm: model.bar_diameter_mm,
        fctm_mpa: material.fctm_mpa,
        fyk_mpa: material.fyk_mpa,
        ecm_mpa: material.ecm_mpa,
        alpha_e: material.alpha_e,
        elastic_steel_stress_mpa,
        steel_stress_mpa,
        yield_capped,
        hc_eff_mm: terms.ratio.hc_eff_mm,
        ac_eff_mm2: terms.ratio.ac_eff_mm2,
        rho_p_eff: terms.ratio.rho_p_eff,
        rho_p_eff_clamped: terms.ratio.is_clamped(),
        k1: K1,
        k2: input.load_type.k2(),
        k3: K3,
        k4: K4,
        kt: input.duration.kt(),
        crack_spacing_mm: terms.crack_spacing_mm,
        tension_stiffening_mpa: terms.strain.tension_stiffening_mpa,
        strain_difference: terms.strain.strain,
        strain_governed_by: terms.strain.governed_by,
        crack_width_mm: terms.crack_width_mm,
        crack_width_limit_mm: input.crack_width_limit_mm,
        min_area_strength_term_mm2: min.strength_term_mm2,
        min_area_ratio_term_mm2: min.ratio_term_mm2,
        min_area_mm2: min.area_mm2,
        crack_width_ok,
        minimum_area_ok,
        equations: tracker.usages().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{BarDiameter, ConcreteGrade, SteelGrade};
    use approx::assert_relative_eq;

    /// C30/37, B500, 300x500 (d = 460, c = 35), 4 Ø16, M = 120 kN·m
    fn test_input() -> CrackCheckInput {
        CrackCheckInput {
            label: "Test Beam".to_string(),
            section: SectionGeometry::new(300.0, 500.0, 460.0, 35.0),
            materials: MaterialProperties::new(ConcreteGrade::C30_37, SteelGrade::B500),
            reinforcement: ReinforcementLayout::bars(BarDiameter::D16, 4),
            load_type: LoadType::Bending,
            duration: LoadDuration::LongTerm,
            action: ServiceAction::moment(120.0),
            crack_width_limit_mm: 0.3,
            strain_mode: None,
        }
    }

    #[test]
    fn test_steel_stress() {
        let result = calculate(&test_input()).unwrap();
        let expected = 1.15 * 120.0e6 / (804.4 * 0.9 * 460.0);
        assert_relative_eq!(result.steel_stress_mpa, expected, epsilon = 1e-9);
        assert!(!result.yield_capped);
    }

    #[test]
    fn test_effective_area() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.hc_eff_mm, 100.0);
        assert_eq!(result.ac_eff_mm2, 30_000.0);
        assert_relative_eq!(result.rho_p_eff, 804.4 / 30_000.0, epsilon = 1e-12);
        assert!(!result.rho_p_eff_clamped);
    }

    #[test]
    fn test_crack_width_fails_limit() {
        let result = calculate(&test_input()).unwrap();
        // w_k ≈ 0.364 mm against 0.3 mm
        assert!((result.crack_width_mm - 0.364).abs() < 0.002);
        assert!(!result.crack_width_ok);
        assert!(result.minimum_area_ok);
        assert!(!result.passes());
        assert_eq!(result.governing_condition(), "Crack width");
        assert!(result.crack_width_unity() > 1.0);
    }

    #[test]
    fn test_default_strain_mode_follows_action() {
        let mut input = test_input();
        assert_eq!(input.effective_strain_mode(), StrainMode::MomentBased);

        input.action = ServiceAction::steel_stress(250.0);
        assert_eq!(input.effective_strain_mode(), StrainMode::StressBased);

        input.strain_mode = Some(StrainMode::MomentBased);
        let result = calculate(&input).unwrap();
        assert_eq!(result.strain_mode, StrainMode::MomentBased);
    }

    #[test]
    fn test_steel_stress_action_used_as_given() {
        let mut input = test_input();
        input.action = ServiceAction::steel_stress(250.0);
        let result = calculate(&input).unwrap();
        assert_eq!(result.steel_stress_mpa, 250.0);
        assert!(!result
            .equations
            .iter()
            .any(|u| u.equation == Equation::SteelStressFromMoment));
    }

    #[test]
    fn test_minimum_area_fails() {
        let mut input = test_input();
        input.reinforcement = ReinforcementLayout::bars(BarDiameter::D8, 2);
        input.action = ServiceAction::moment(10.0);
        let result = calculate(&input).unwrap();
        assert!(result.provided_area_mm2 < result.min_area_mm2);
        assert!(!result.minimum_area_ok);
        assert!(!result.passes());
    }

    #[test]
    fn test_zero_moment_gives_zero_width() {
        let mut input = test_input();
        input.action = ServiceAction::moment(0.0);
        let result = calculate(&input).unwrap();
        assert_eq!(result.crack_width_mm, 0.0);
        assert_eq!(result.strain_governed_by, StrainBound::Zero);
        assert!(result.passes());
    }

    #[test]
    fn test_tension_uses_half_height() {
        let mut input = test_input();
        input.load_type = LoadType::Tension;
        let result = calculate(&input).unwrap();
        assert_eq!(result.hc_eff_mm, 250.0);
        assert_eq!(result.k2, 1.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = test_input();
        input.crack_width_limit_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_input();
        input.section.effective_depth_mm = 500.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DEGENERATE_SECTION");

        let mut input = test_input();
        input.reinforcement = ReinforcementLayout::area(BarDiameter::D16, 0.0);
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DEGENERATE_SECTION");
    }

    #[test]
    fn test_equations_recorded() {
        let result = calculate(&test_input()).unwrap();
        let used: Vec<Equation> = result.equations.iter().map(|u| u.equation).collect();
        assert_eq!(used.first(), Some(&Equation::ConcreteTensileStrengthTable));
        assert!(used.contains(&Equation::StrainDifferenceMomentBased));
        assert!(!used.contains(&Equation::StrainDifferenceStressBased));
        assert!(used.contains(&Equation::CrackWidth));
        assert!(used.contains(&Equation::MinimumReinforcementArea));
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "label": "B-1",
            "section": { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 },
            "materials": { "concrete": { "type": "Grade", "grade": "c30/37" } },
            "reinforcement": { "type": "Bars", "diameter": "16", "count": 4 },
            "action": { "type": "Moment", "moment_knm": 120.0 },
            "crack_width_limit_mm": 0.3
        }"#;
        let input: CrackCheckInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.materials, test_input().materials);
        assert_eq!(input.load_type, LoadType::Bending);
        assert_eq!(input.duration, LoadDuration::LongTerm);
        assert_eq!(input.strain_mode, None);
        assert_eq!(input.materials.steel, SteelGrade::B500);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: CrackCheckResult = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(roundtrip.crack_width_mm, result.crack_width_mm, epsilon = 1e-12);
        assert_eq!(roundtrip.equations, result.equations);
    }

    #[test]
    fn test_input_with_unknown_grade() {
        let json = r#"{
            "section": { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 },
            "materials": { "concrete": { "type": "Grade", "grade": "C55/67" } },
            "reinforcement": { "type": "Bars", "diameter": "16", "count": 4 },
            "action": { "type": "Moment", "moment_knm": 120.0 },
            "crack_width_limit_mm": 0.3
        }"#;
        let err = serde_json::from_str::<CrackCheckInput>(json)
            .map_err(CalcError::from)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GRADE");
    }

    #[test]
    fn test_strain_mode_parsing() {
        assert_eq!(StrainMode::from_str_flexible("moment-based"), Some(StrainMode::MomentBased));
        assert_eq!(StrainMode::from_str_flexible("Stress"), Some(StrainMode::StressBased));
        assert_eq!(StrainMode::from_str_flexible("other"), None);
    }
}
