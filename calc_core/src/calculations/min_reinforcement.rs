//! # Minimum Reinforcement for Crack Control
//!
//! Finds the smallest tension steel area, in fixed increments, whose crack
//! width at a known steel stress meets a limit.
//!
//! ## Method
//!
//! 1. A_s,abs,min from 9.2.1.1 (9.1N)
//! 2. A_s,initial = k_c·k·f_ct,eff·A_ct / σ_s from 7.3.2 (7.1)
//! 3. Seed A_s = max(A_s,initial, A_s,abs,min), step = `step_fraction`·seed
//! 4. Evaluate w_k at seed, seed + step, seed + 2·step, ... and stop at the
//!    first area with w_k ≤ w_lim + tolerance
//!
//! The seed and `max_iterations` increments above it are tried. If none of
//! them meets the limit the last area is returned with
//! [`SolverStatus::NonConvergence`]. This is a result, not an error; callers
//! check [`MinReinforcementResult::is_converged`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::min_reinforcement::{solve, MinReinforcementInput, SolverStatus};
//! use calc_core::materials::BarDiameter;
//! use calc_core::section::SectionGeometry;
//!
//! let input = MinReinforcementInput::new(
//!     SectionGeometry::new(300.0, 500.0, 460.0, 35.0),
//!     BarDiameter::D16,
//!     200.0, // σ_s (MPa)
//!     0.3,   // w_lim (mm)
//! );
//!
//! let result = solve(&input).unwrap();
//! assert_eq!(result.status, SolverStatus::Converged);
//! assert!(result.area_mm2 >= result.absolute_min_area_mm2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::crack_width::{CrackWidthModel, StrainMode};
use crate::equations::crack::{
    crack_control_area, cracking_tension_area, height_factor, minimum_reinforcement_area,
};
use crate::equations::registry::{Equation, EquationTracker, EquationUsage};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadDuration, LoadType};
use crate::materials::{recommend_layouts, BarDiameter, MaterialProperties, ReinforcementLayout};
use crate::section::SectionGeometry;

/// Search settings.
///
/// Missing fields fall back to the defaults when deserialized.
///
/// ## JSON Example
///
/// ```json
/// { "max_iterations": 100, "tolerance_mm": 0.01, "step_fraction": 0.05 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Maximum number of increments above the seed area
    pub max_iterations: u32,
    /// Accepted excess of w_k over w_lim (mm)
    pub tolerance_mm: f64,
    /// Increment as a fraction of the seed area
    pub step_fraction: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance_mm: 0.01,
            step_fraction: 0.05,
        }
    }
}

impl SolverSettings {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "max_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        if !self.tolerance_mm.is_finite() || self.tolerance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "tolerance_mm",
                self.tolerance_mm.to_string(),
                "Tolerance must be a non-negative number",
            ));
        }
        if !self.step_fraction.is_finite() || self.step_fraction <= 0.0 {
            return Err(CalcError::invalid_input(
                "step_fraction",
                self.step_fraction.to_string(),
                "Step fraction must be positive",
            ));
        }
        Ok(())
    }
}

fn default_strain_mode() -> StrainMode {
    StrainMode::StressBased
}

/// Input parameters for the minimum reinforcement search.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "section": { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 },
///   "materials": { "concrete": { "type": "Grade", "grade": "C30/37" }, "steel": "B500" },
///   "bar_diameter": "16",
///   "load_type": "Bending",
///   "steel_stress_mpa": 200.0,
///   "crack_width_limit_mm": 0.3,
///   "settings": { "max_iterations": 200 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinReinforcementInput {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Section dimensions
    pub section: SectionGeometry,

    /// Concrete and steel
    #[serde(default)]
    pub materials: MaterialProperties,

    /// Bar diameter φ used for crack spacing
    pub bar_diameter: BarDiameter,

    #[serde(default)]
    pub load_type: LoadType,

    #[serde(default)]
    pub duration: LoadDuration,

    /// Permitted steel stress σ_s under service load (MPa)
    pub steel_stress_mpa: f64,

    /// Limiting crack width w_lim (mm)
    pub crack_width_limit_mm: f64,

    /// Strain formula, stress-based unless chosen otherwise
    #[serde(default = "default_strain_mode")]
    pub strain_mode: StrainMode,

    #[serde(default)]
    pub settings: SolverSettings,
}

impl MinReinforcementInput {
    /// Input with C30/37, B500, bending, long term loading and default settings
    pub fn new(
        section: SectionGeometry,
        bar_diameter: BarDiameter,
        steel_stress_mpa: f64,
        crack_width_limit_mm: f64,
    ) -> Self {
        Self {
            label: String::new(),
            section,
            materials: MaterialProperties::default(),
            bar_diameter,
            load_type: LoadType::default(),
            duration: LoadDuration::default(),
            steel_stress_mpa,
            crack_width_limit_mm,
            strain_mode: default_strain_mode(),
            settings: SolverSettings::default(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.materials.validate()?;
        self.settings.validate()?;
        if !self.steel_stress_mpa.is_finite() || self.steel_stress_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel_stress_mpa",
                self.steel_stress_mpa.to_string(),
                "Steel stress must be positive",
            ));
        }
        if !self.crack_width_limit_mm.is_finite() || self.crack_width_limit_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "crack_width_limit_mm",
                self.crack_width_limit_mm.to_string(),
                "Crack width limit must be positive",
            ));
        }
        Ok(())
    }
}

/// Outcome of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverStatus {
    /// w_k ≤ w_lim + tolerance was reached
    Converged,
    /// The iteration budget ran out first
    NonConvergence,
}

impl SolverStatus {
    /// Machine-readable code, in the style of [`CalcError::error_code`]
    pub fn code(&self) -> &'static str {
        match self {
            SolverStatus::Converged => "CONVERGED",
            SolverStatus::NonConvergence => "NON_CONVERGENCE",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverStatus::Converged => write!(f, "Converged"),
            SolverStatus::NonConvergence => write!(f, "Did not converge"),
        }
    }
}

/// One evaluated area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverStep {
    /// 1 for the seed area
    pub iteration: u32,
    /// Trial steel area A_s (mm²)
    pub area_mm2: f64,
    /// w_k at the trial area (mm)
    pub crack_width_mm: f64,
}

/// Minimum reinforcement search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinReinforcementResult {
    /// User label from the input
    pub label: String,
    /// Converged, or the last area reached without meeting the limit
    pub status: SolverStatus,
    /// Crack width evaluations performed
    pub iterations: u32,

    // === Answer ===
    /// Required steel area A_s (mm²)
    pub area_mm2: f64,
    /// w_k at `area_mm2` (mm)
    pub crack_width_mm: f64,
    /// Limiting crack width w_lim (mm)
    pub crack_width_limit_mm: f64,
    /// Steel stress σ_s used for every trial (MPa)
    pub steel_stress_mpa: f64,
    /// Strain formula applied
    pub strain_mode: StrainMode,

    // === Seed ===
    /// A_s,abs,min from (9.1N) (mm²)
    pub absolute_min_area_mm2: f64,
    /// Height factor k
    pub height_factor: f64,
    /// Stress distribution coefficient k_c
    pub kc: f64,
    /// A_ct (mm²)
    pub tension_area_mm2: f64,
    /// k_c·k·f_ct,eff·A_ct/σ_s (mm²)
    pub initial_area_mm2: f64,
    /// max(initial, absolute minimum) (mm²)
    pub seed_area_mm2: f64,
    /// Fixed increment (mm²)
    pub step_mm2: f64,

    /// Every evaluated area, in order
    pub steps: Vec<SolverStep>,
    /// Common bar layouts providing at least `area_mm2`
    pub recommended_layouts: Vec<ReinforcementLayout>,
    /// Equations applied
    pub equations: Vec<EquationUsage>,
}

impl MinReinforcementResult {
    /// True when the returned area meets w_lim + tolerance
    pub fn is_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}

/// Search for the minimum reinforcement area.
///
/// # Returns
///
/// * `Ok(MinReinforcementResult)` - Converged or NonConvergence, with the seed terms and every step
/// * `Err(CalcError)` - Invalid input, or a formula error raised during the search
#[instrument(skip_all, fields(label = %input.label))]
pub fn solve(input: &MinReinforcementInput) -> CalcResult<MinReinforcementResult> {
    input.validate()?;

    let material = input.materials.resolved();
    let section = &input.section;
    let settings = input.settings;
    let sigma = input.steel_stress_mpa;
    let limit = input.crack_width_limit_mm;
    let mut tracker = EquationTracker::new();

    // === Seed ===
    let absolute = minimum_reinforcement_area(
        material.fctm_mpa,
        material.fyk_mpa,
        section.width_mm,
        section.effective_depth_mm,
    )?;
    let k = height_factor(section.height_mm);
    let kc = input.load_type.kc();
    let tension_area_mm2 = cracking_tension_area(section.width_mm, section.height_mm, input.load_type);
    let initial_area_mm2 = crack_control_area(kc, k, material.fctm_mpa, tension_area_mm2, sigma)?;
    let seed_area_mm2 = initial_area_mm2.max(absolute.area_mm2);
    let step_mm2 = settings.step_fraction * seed_area_mm2;

    tracker.record(Equation::MinimumReinforcementArea, "Absolute minimum");
    tracker.record(Equation::HeightFactor, format!("h = {} mm", section.height_mm));
    tracker.record(Equation::CrackControlMinimumArea, format!("σ_s = {} MPa", sigma));
    tracing::debug!(
        absolute_min_area_mm2 = absolute.area_mm2,
        initial_area_mm2,
        seed_area_mm2,
        step_mm2,
        "solver seed"
    );

    // === Sweep ===
    let model = CrackWidthModel {
        section: *section,
        bar_diameter_mm: input.bar_diameter.diameter_mm(),
        load_type: input.load_type,
        duration: input.duration,
        material,
        strain_mode: input.strain_mode,
    };
    tracker.record(input.strain_mode.equation(), "Each trial area");
    tracker.record(Equation::CrackWidth, "Each trial area");

    // The seed plus `max_iterations` increments; the last area reached is
    // checked against the limit like every other.
    let mut steps = Vec::new();
    let mut converged = false;
    for iteration in 1..=settings.max_iterations.saturating_add(1) {
        let area_mm2 = seed_area_mm2 + f64::from(iteration - 1) * step_mm2;
        let crack_width_mm = model.evaluate(area_mm2, sigma)?.crack_width_mm;
        tracing::debug!(iteration, area_mm2, crack_width_mm, "solver step");
        steps.push(SolverStep {
            iteration,
            area_mm2,
            crack_width_mm,
        });

        if crack_width_mm <= limit + settings.tolerance_mm {
            converged = true;
            break;
        }
    }

    let last = steps
        .last()
        .copied()
        .ok_or_else(|| CalcError::Internal {
            message: "Solver evaluated no trial area".to_string(),
        })?;
    let status = if converged {
        SolverStatus::Converged
    } else {
        tracing::warn!(
            max_iterations = settings.max_iterations,
            area_mm2 = last.area_mm2,
            crack_width_mm = last.crack_width_mm,
            crack_width_limit_mm = limit,
            "minimum reinforcement search did not converge"
        );
        SolverStatus::NonConvergence
    };
    let (iterations, area_mm2, crack_width_mm) = (last.iteration, last.area_mm2, last.crack_width_mm);
    tracker.record(Equation::CrackWidthLimit, format!("w_lim = {} mm", limit));

    Ok(MinReinforcementResult {
        label: input.label.clone(),
        status,
        iterations,
        area_mm2,
        crack_width_mm,
        crack_width_limit_mm: limit,
        steel_stress_mpa: sigma,
        strain_mode: input.strain_mode,
        absolute_min_area_mm2: absolute.area_mm2,
        height_factor: k,
        kc,
        tension_area_mm2,
        initial_area_mm2,
        seed_area_mm2,
        step_mm2,
        steps,
        recommended_layouts: recommend_layouts(area_mm2)?,
        equations: tracker.usages().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// C30/37, B500, 300x500 (d = 460, c = 35), Ø16, σ_s = 200 MPa, bending
    fn test_input(limit: f64) -> MinReinforcementInput {
        MinReinforcementInput::new(SectionGeometry::default(), BarDiameter::D16, 200.0, limit)
    }

    #[test]
    fn test_seed() {
        let result = solve(&test_input(0.3)).unwrap();

        // k = 1 − 200/1000 = 0.8, A_ct = 75 000, A_s,initial = 0.4·0.8·2.9·75 000/200
        assert_relative_eq!(result.height_factor, 0.8, epsilon = 1e-12);
        assert_eq!(result.kc, 0.4);
        assert_eq!(result.tension_area_mm2, 75_000.0);
        assert_relative_eq!(result.initial_area_mm2, 348.0, epsilon = 1e-9);
        assert_relative_eq!(result.absolute_min_area_mm2, 208.104, epsilon = 1e-6);
        assert_relative_eq!(result.seed_area_mm2, 348.0, epsilon = 1e-9);
        assert_relative_eq!(result.step_mm2, 17.4, epsilon = 1e-9);
    }

    #[test]
    fn test_converges_at_seed() {
        let result = solve(&test_input(0.3)).unwrap();
        assert!(result.is_converged());
        assert_eq!(result.iterations, 1);
        assert_eq!(result.area_mm2, result.seed_area_mm2);
        // Floor 0.6σ_s/E_s governs: w_k ≈ 0.212 mm
        assert!((result.crack_width_mm - 0.212).abs() < 0.001);
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn test_first_crossing_wins() {
        let result = solve(&test_input(0.15)).unwrap();
        assert!(result.is_converged());
        assert!(result.iterations > 1);

        let (last, earlier) = result.steps.split_last().unwrap();
        assert!(last.crack_width_mm <= 0.15 + 0.01);
        assert!(earlier.iter().all(|s| s.crack_width_mm > 0.15 + 0.01));
        assert_eq!(last.area_mm2, result.area_mm2);
    }

    #[test]
    fn test_non_convergence_is_not_an_error() {
        // ρ_p,eff reaches 0.05 and w_k levels off near 0.147 mm
        let result = solve(&test_input(0.1)).unwrap();
        assert_eq!(result.status, SolverStatus::NonConvergence);
        assert_eq!(result.status.code(), "NON_CONVERGENCE");
        assert!(!result.is_converged());
        assert_eq!(result.iterations, 101);
        assert_eq!(result.steps.len(), 101);
        assert_relative_eq!(result.area_mm2, 348.0 + 100.0 * 17.4, epsilon = 1e-6);
        assert!(result.crack_width_mm > 0.11);

        let last = result.steps.last().unwrap();
        assert_eq!(last.area_mm2, result.area_mm2);
        assert_eq!(last.crack_width_mm, result.crack_width_mm);
    }

    #[test]
    fn test_last_reached_area_is_checked() {
        // w_lim = 0.15 first crosses at iteration 36, A_s = 348 + 35·17.4 = 957
        let full = solve(&test_input(0.15)).unwrap();
        assert_eq!(full.iterations, 36);
        assert_relative_eq!(full.area_mm2, 957.0, epsilon = 1e-9);

        // 35 increments end exactly on that area
        let mut input = test_input(0.15);
        input.settings.max_iterations = 35;
        let result = solve(&input).unwrap();
        assert_eq!(result.status, SolverStatus::Converged);
        assert_eq!(result.iterations, 36);
        assert_eq!(result.steps.len(), 36);
        assert_relative_eq!(result.area_mm2, 957.0, epsilon = 1e-9);
        assert!(result.crack_width_mm <= 0.15 + 0.01);

        // One increment short is a genuine non-convergence at the last area tried
        input.settings.max_iterations = 34;
        let result = solve(&input).unwrap();
        assert_eq!(result.status, SolverStatus::NonConvergence);
        assert_eq!(result.iterations, 35);
        assert_relative_eq!(result.area_mm2, 939.6, epsilon = 1e-9);
        assert!(result.crack_width_mm > 0.15 + 0.01);
        assert_eq!(result.steps.last().unwrap().area_mm2, result.area_mm2);
    }

    #[test]
    fn test_absolute_minimum_seed() {
        // High permitted stress makes (7.1) smaller than (9.1N)
        let mut input = test_input(0.3);
        input.steel_stress_mpa = 400.0;
        let result = solve(&input).unwrap();
        assert!(result.initial_area_mm2 < result.absolute_min_area_mm2);
        assert_eq!(result.seed_area_mm2, result.absolute_min_area_mm2);
    }

    #[test]
    fn test_tension_coefficients() {
        let mut input = test_input(0.2);
        input.load_type = LoadType::Tension;
        let result = solve(&input).unwrap();
        assert_eq!(result.kc, 1.0);
        assert_eq!(result.tension_area_mm2, 150_000.0);
        assert!(result.is_converged());
    }

    #[test]
    fn test_recommended_layouts_cover_area() {
        let result = solve(&test_input(0.2)).unwrap();
        assert!(!result.recommended_layouts.is_empty());
        assert!(result
            .recommended_layouts
            .iter()
            .all(|l| l.area_mm2() >= result.area_mm2));
    }

    #[test]
    fn test_invalid_settings() {
        let mut input = test_input(0.3);
        input.settings.max_iterations = 0;
        assert_eq!(solve(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = test_input(0.3);
        input.settings.step_fraction = 0.0;
        assert!(solve(&input).is_err());

        let mut input = test_input(0.3);
        input.settings.tolerance_mm = -0.01;
        assert!(solve(&input).is_err());
    }

    #[test]
    fn test_invalid_stress_and_limit() {
        assert!(solve(&test_input(0.0)).is_err());

        let mut input = test_input(0.3);
        input.steel_stress_mpa = 0.0;
        assert_eq!(solve(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_settings_defaults_from_json() {
        let settings: SolverSettings = serde_json::from_str(r#"{ "max_iterations": 20 }"#).unwrap();
        assert_eq!(settings.max_iterations, 20);
        assert_eq!(settings.tolerance_mm, 0.01);
        assert_eq!(settings.step_fraction, 0.05);

        let json = r#"{
            "section": { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 },
            "bar_diameter": "16",
            "steel_stress_mpa": 200.0,
            "crack_width_limit_mm": 0.3
        }"#;
        let input: MinReinforcementInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, test_input(0.3));
    }
}
