//! # Equation Registry
//!
//! Central registry of all crack control equations used in calculations.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for step-by-step reports and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationUsage};
//!
//! // Track equation usage during calculation
//! let usage = EquationUsage::new(Equation::CrackWidth, "Service moment");
//!
//! // Get metadata for a report
//! let meta = Equation::CrackWidth.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a design code clause or an engineering simplification.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// EN 1992-1-1 Eurocode 2: Design of concrete structures
    Eurocode2 {
        clause: &'static str,
        equation: Option<&'static str>,
    },
    /// Hand-calculation simplification with no direct code expression
    Simplification { basis: &'static str },
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Eurocode2 { clause, equation: Some(eq) } => {
                format!("EN 1992-1-1 {}, Eq. ({})", clause, eq)
            }
            CodeReference::Eurocode2 { clause, equation: None } => {
                format!("EN 1992-1-1 {}", clause)
            }
            CodeReference::Simplification { basis } => format!("Simplification: {}", basis),
        }
    }

}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Concrete and steel properties
    MaterialProperties,
    /// Steel stress under service load
    Stresses,
    /// Effective tension area and reinforcement ratio
    EffectiveArea,
    /// Crack spacing
    CrackSpacing,
    /// Mean strain difference
    Strains,
    /// Crack width
    CrackWidth,
    /// Minimum reinforcement areas
    MinimumReinforcement,
    /// Pass/fail limits
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::MaterialProperties => "Material Properties",
            EquationCategory::Stresses => "Steel Stress",
            EquationCategory::EffectiveArea => "Effective Tension Area",
            EquationCategory::CrackSpacing => "Crack Spacing",
            EquationCategory::Strains => "Strain Difference",
            EquationCategory::CrackWidth => "Crack Width",
            EquationCategory::MinimumReinforcement => "Minimum Reinforcement",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for reports (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::MaterialProperties => 1,
            EquationCategory::Stresses => 2,
            EquationCategory::EffectiveArea => 3,
            EquationCategory::CrackSpacing => 4,
            EquationCategory::Strains => 5,
            EquationCategory::CrackWidth => 6,
            EquationCategory::MinimumReinforcement => 7,
            EquationCategory::DesignChecks => 8,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "σ_s", "ρ_p,eff")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a crack control equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Maximum Crack Spacing")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All crack control equations used by the engine.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Material properties
    // -------------------------------------------------------------------------
    /// f_ctm from the strength class table
    ConcreteTensileStrengthTable,
    /// f_ctm = 0.3·f_ck^(2/3) or 2.12·ln(1 + f_cm/10)
    ConcreteTensileStrengthFormula,
    /// E_cm = 22·(f_cm/10)^0.3
    ConcreteElasticModulus,

    // -------------------------------------------------------------------------
    // Crack width (7.3.4)
    // -------------------------------------------------------------------------
    /// σ_s = min(1.15·M/(A_s·0.9·d), f_yk)
    SteelStressFromMoment,
    /// h_c,eff = min(2.5(h − d), h/2)
    EffectiveTensionHeight,
    /// ρ_p,eff = A_s/A_c,eff ≤ 0.05
    EffectiveReinforcementRatio,
    /// s_r,max = k3·c + k1·k2·k4·φ/ρ_p,eff
    MaxCrackSpacing,
    /// ε_sm − ε_cm with (1 + 35ρ), no floor
    StrainDifferenceMomentBased,
    /// ε_sm − ε_cm with (1 + α_e·ρ), floor 0.6σ_s/E_s
    StrainDifferenceStressBased,
    /// w_k = s_r,max·(ε_sm − ε_cm)
    CrackWidth,

    // -------------------------------------------------------------------------
    // Minimum reinforcement (7.3.2, 9.2.1.1)
    // -------------------------------------------------------------------------
    /// A_s,min = max(0.26·f_ctm/f_yk·b_t·d, 0.0013·b_t·d)
    MinimumReinforcementArea,
    /// k = max(0.65, 1 − (h − 300)/1000)
    HeightFactor,
    /// A_s·σ_s = k_c·k·f_ct,eff·A_ct
    CrackControlMinimumArea,

    // -------------------------------------------------------------------------
    // Design checks
    // -------------------------------------------------------------------------
    /// w_k ≤ w_max
    CrackWidthLimit,
    /// A_s ≥ A_s,min
    MinimumAreaCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ConcreteTensileStrengthTable => EquationMetadata {
                name: "Mean Tensile Strength (Table)",
                description: "Mean axial tensile strength of concrete looked up by strength class",
                formula_plain: "f_ctm = Table 3.1 (C12/15: 1.6 ... C50/60: 4.1)",
                reference: CodeReference::Eurocode2 { clause: "Table 3.1", equation: None },
                variables: vec![
                    Variable::new("f_ctm", "Mean axial tensile strength", "MPa"),
                ],
                assumptions: vec!["Strength classes C12/15 to C50/60 only"],
                category: EquationCategory::MaterialProperties,
                source_module: "materials/concrete.rs",
                source_function: "concrete_tensile_strength",
            },

            Equation::ConcreteTensileStrengthFormula => EquationMetadata {
                name: "Mean Tensile Strength (Formula)",
                description: "Mean axial tensile strength from the characteristic cylinder strength",
                formula_plain: "f_ctm = 0.30 * f_ck^(2/3) (f_ck <= 50), f_ctm = 2.12 * ln(1 + (f_ck + 8)/10) (f_ck > 50)",
                reference: CodeReference::Eurocode2 { clause: "Table 3.1", equation: None },
                variables: vec![
                    Variable::new("f_ck", "Characteristic cylinder strength", "MPa"),
                    Variable::new("f_ctm", "Mean axial tensile strength", "MPa"),
                ],
                assumptions: vec!["f_cm = f_ck + 8 MPa"],
                category: EquationCategory::MaterialProperties,
                source_module: "materials/concrete.rs",
                source_function: "concrete_tensile_strength_from_fck",
            },

            Equation::ConcreteElasticModulus => EquationMetadata {
                name: "Secant Modulus of Concrete",
                description: "Secant modulus of elasticity used for the modular ratio α_e",
                formula_plain: "E_cm = 22 * ((f_ck + 8)/10)^0.3 * 1000",
                reference: CodeReference::Eurocode2 { clause: "Table 3.1", equation: None },
                variables: vec![
                    Variable::new("f_ck", "Characteristic cylinder strength", "MPa"),
                    Variable::new("E_cm", "Secant modulus of elasticity", "MPa"),
                    Variable::new("α_e", "Modular ratio E_s/E_cm", "-"),
                ],
                assumptions: vec!["Quartzite aggregates"],
                category: EquationCategory::MaterialProperties,
                source_module: "materials/concrete.rs",
                source_function: "concrete_elastic_modulus",
            },

            Equation::SteelStressFromMoment => EquationMetadata {
                name: "Steel Stress from Moment",
                description: "Service stress in the tension steel from the applied moment",
                formula_plain: "σ_s = min(1.15 * M / (A_s * 0.9 * d), f_yk)",
                reference: CodeReference::Simplification { basis: "lever arm z = 0.9d with a 1.15 stress factor" },
                variables: vec![
                    Variable::new("M", "Service bending moment", "N·mm"),
                    Variable::new("A_s", "Tension steel area", "mm²"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("f_yk", "Characteristic yield strength", "MPa"),
                    Variable::new("σ_s", "Steel stress", "MPa"),
                ],
                assumptions: vec!["Cracked section, z = 0.9d", "Capped at f_yk"],
                category: EquationCategory::Stresses,
                source_module: "equations/crack.rs",
                source_function: "steel_stress_from_moment",
            },

            Equation::EffectiveTensionHeight => EquationMetadata {
                name: "Effective Tension Height",
                description: "Depth of concrete surrounding the tension reinforcement",
                formula_plain: "h_c,eff = min(2.5 * (h - d), h/2) (bending), h_c,eff = h/2 (tension)",
                reference: CodeReference::Eurocode2 { clause: "7.3.2(3), Figure 7.1", equation: None },
                variables: vec![
                    Variable::new("h", "Overall section height", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("h_c,eff", "Effective tension height", "mm"),
                ],
                assumptions: vec!["Neutral axis depth term (h - x)/3 not evaluated"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/crack.rs",
                source_function: "effective_tension_height",
            },

            Equation::EffectiveReinforcementRatio => EquationMetadata {
                name: "Effective Reinforcement Ratio",
                description: "Ratio of tension steel to the effective tension area",
                formula_plain: "ρ_p,eff = min(A_s / (b * h_c,eff), 0.05)",
                reference: CodeReference::Eurocode2 { clause: "7.3.4(2)", equation: Some("7.10") },
                variables: vec![
                    Variable::new("A_s", "Tension steel area", "mm²"),
                    Variable::new("A_c,eff", "Effective tension area b·h_c,eff", "mm²"),
                    Variable::new("ρ_p,eff", "Effective reinforcement ratio", "-"),
                ],
                assumptions: vec!["No bonded prestressing steel", "Capped at 0.05"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/crack.rs",
                source_function: "effective_reinforcement",
            },

            Equation::MaxCrackSpacing => EquationMetadata {
                name: "Maximum Crack Spacing",
                description: "Maximum final crack spacing for bonded reinforcement",
                formula_plain: "s_r,max = k3 * c + k1 * k2 * k4 * φ / ρ_p,eff",
                reference: CodeReference::Eurocode2 { clause: "7.3.4(3)", equation: Some("7.11") },
                variables: vec![
                    Variable::new("c", "Cover to longitudinal reinforcement", "mm"),
                    Variable::new("φ", "Bar diameter", "mm"),
                    Variable::new("k1", "Bond coefficient (0.8)", "-"),
                    Variable::new("k2", "Strain distribution (0.5 bending, 1.0 tension)", "-"),
                    Variable::new("k3", "Cover coefficient (3.4)", "-"),
                    Variable::new("k4", "Bar coefficient (0.425)", "-"),
                    Variable::new("s_r,max", "Maximum crack spacing", "mm"),
                ],
                assumptions: vec!["High bond bars", "Bar spacing ≤ 5(c + φ/2)"],
                category: EquationCategory::CrackSpacing,
                source_module: "equations/crack.rs",
                source_function: "max_crack_spacing",
            },

            Equation::StrainDifferenceMomentBased => EquationMetadata {
                name: "Strain Difference (Moment-Based)",
                description: "Mean strain difference with the 1 + 35ρ tension stiffening multiplier",
                formula_plain: "ε_sm - ε_cm = max((σ_s - k_t * f_ct,eff / ρ_p,eff * (1 + 35 * ρ_p,eff)) / E_s, 0)",
                reference: CodeReference::Eurocode2 { clause: "7.3.4(2)", equation: Some("7.9") },
                variables: vec![
                    Variable::new("σ_s", "Steel stress", "MPa"),
                    Variable::new("k_t", "Load duration factor (0.4 long, 0.6 short)", "-"),
                    Variable::new("f_ct,eff", "Effective tensile strength (f_ctm)", "MPa"),
                    Variable::new("E_s", "Steel modulus (200 000)", "MPa"),
                    Variable::new("ε_sm - ε_cm", "Mean strain difference", "-"),
                ],
                assumptions: vec!["No 0.6σ_s/E_s lower bound", "Never negative"],
                category: EquationCategory::Strains,
                source_module: "equations/crack.rs",
                source_function: "strain_difference",
            },

            Equation::StrainDifferenceStressBased => EquationMetadata {
                name: "Strain Difference (Stress-Based)",
                description: "Mean strain difference with the 1 + α_e·ρ multiplier and the code lower bound",
                formula_plain: "ε_sm - ε_cm = max((σ_s - k_t * f_ct,eff / ρ_p,eff * (1 + α_e * ρ_p,eff)) / E_s, 0.6 * σ_s / E_s)",
                reference: CodeReference::Eurocode2 { clause: "7.3.4(2)", equation: Some("7.9") },
                variables: vec![
                    Variable::new("σ_s", "Steel stress", "MPa"),
                    Variable::new("α_e", "Modular ratio E_s/E_cm", "-"),
                    Variable::new("k_t", "Load duration factor (0.4 long, 0.6 short)", "-"),
                    Variable::new("f_ct,eff", "Effective tensile strength (f_ctm)", "MPa"),
                    Variable::new("E_s", "Steel modulus (200 000)", "MPa"),
                    Variable::new("ε_sm - ε_cm", "Mean strain difference", "-"),
                ],
                assumptions: vec!["Lower bound 0.6σ_s/E_s applies"],
                category: EquationCategory::Strains,
                source_module: "equations/crack.rs",
                source_function: "strain_difference",
            },

            Equation::CrackWidth => EquationMetadata {
                name: "Crack Width",
                description: "Characteristic crack width",
                formula_plain: "w_k = s_r,max * (ε_sm - ε_cm)",
                reference: CodeReference::Eurocode2 { clause: "7.3.4(1)", equation: Some("7.8") },
                variables: vec![
                    Variable::new("s_r,max", "Maximum crack spacing", "mm"),
                    Variable::new("ε_sm - ε_cm", "Mean strain difference", "-"),
                    Variable::new("w_k", "Crack width", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::CrackWidth,
                source_module: "equations/crack.rs",
                source_function: "crack_width",
            },

            Equation::MinimumReinforcementArea => EquationMetadata {
                name: "Minimum Longitudinal Reinforcement",
                description: "Absolute minimum tension reinforcement for beams",
                formula_plain: "A_s,min = max(0.26 * f_ctm / f_yk * b_t * d, 0.0013 * b_t * d)",
                reference: CodeReference::Eurocode2 { clause: "9.2.1.1(1)", equation: Some("9.1N") },
                variables: vec![
                    Variable::new("f_ctm", "Mean tensile strength", "MPa"),
                    Variable::new("f_yk", "Characteristic yield strength", "MPa"),
                    Variable::new("b_t", "Mean width of the tension zone", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("A_s,min", "Minimum reinforcement area", "mm²"),
                ],
                assumptions: vec!["b_t taken as the section width"],
                category: EquationCategory::MinimumReinforcement,
                source_module: "equations/crack.rs",
                source_function: "minimum_reinforcement_area",
            },

            Equation::HeightFactor => EquationMetadata {
                name: "Height Factor",
                description: "Factor for non-uniform self-equilibrating stresses",
                formula_plain: "k = max(0.65, 1 - (h - 300)/1000) for h > 300, else 1.0",
                reference: CodeReference::Simplification { basis: "linearised 7.3.2(2) interpolation" },
                variables: vec![
                    Variable::new("h", "Overall section height", "mm"),
                    Variable::new("k", "Height factor", "-"),
                ],
                assumptions: vec!["Approximation, not the code interpolation"],
                category: EquationCategory::MinimumReinforcement,
                source_module: "equations/crack.rs",
                source_function: "height_factor",
            },

            Equation::CrackControlMinimumArea => EquationMetadata {
                name: "Minimum Reinforcement for Crack Control",
                description: "Steel area that carries the cracking force at the permitted stress",
                formula_plain: "A_s = k_c * k * f_ct,eff * A_ct / σ_s",
                reference: CodeReference::Eurocode2 { clause: "7.3.2(2)", equation: Some("7.1") },
                variables: vec![
                    Variable::new("k_c", "Stress distribution (0.4 bending, 1.0 tension)", "-"),
                    Variable::new("k", "Height factor", "-"),
                    Variable::new("A_ct", "Concrete area in tension (b·h/2 or b·h)", "mm²"),
                    Variable::new("σ_s", "Permitted steel stress", "MPa"),
                ],
                assumptions: vec!["Rectangular section", "Seed for the minimum area search"],
                category: EquationCategory::MinimumReinforcement,
                source_module: "equations/crack.rs",
                source_function: "crack_control_area",
            },

            Equation::CrackWidthLimit => EquationMetadata {
                name: "Crack Width Limit",
                description: "Calculated crack width must not exceed the limiting value",
                formula_plain: "w_k <= w_max",
                reference: CodeReference::Eurocode2 { clause: "7.3.1(5), Table 7.1N", equation: None },
                variables: vec![
                    Variable::new("w_k", "Crack width", "mm"),
                    Variable::new("w_max", "Limiting crack width (0.2, 0.3, 0.4)", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/crack_width.rs",
                source_function: "calculate",
            },

            Equation::MinimumAreaCheck => EquationMetadata {
                name: "Minimum Area Check",
                description: "Provided steel must not be less than the minimum area",
                formula_plain: "A_s >= A_s,min",
                reference: CodeReference::Eurocode2 { clause: "9.2.1.1(1)", equation: None },
                variables: vec![
                    Variable::new("A_s", "Provided steel area", "mm²"),
                    Variable::new("A_s,min", "Minimum reinforcement area", "mm²"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/crack_width.rs",
                source_function: "calculate",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            MaterialProperties,
            Stresses,
            EffectiveArea,
            CrackSpacing,
            Strains,
            CrackWidth,
            MinimumReinforcement,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Material properties
    Equation::ConcreteTensileStrengthTable,
    Equation::ConcreteTensileStrengthFormula,
    Equation::ConcreteElasticModulus,
    // Crack width
    Equation::SteelStressFromMoment,
    Equation::EffectiveTensionHeight,
    Equation::EffectiveReinforcementRatio,
    Equation::MaxCrackSpacing,
    Equation::StrainDifferenceMomentBased,
    Equation::StrainDifferenceStressBased,
    Equation::CrackWidth,
    // Minimum reinforcement
    Equation::MinimumReinforcementArea,
    Equation::HeightFactor,
    Equation::CrackControlMinimumArea,
    // Checks
    Equation::CrackWidthLimit,
    Equation::MinimumAreaCheck,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Provided 4 Ø16")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// This function produces a markdown document listing all equations in the registry,
/// organized by category, with formulas, references, and source code links.
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Crack Control Equations Reference"));
/// assert!(markdown.contains("Crack Spacing"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Crack Control Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the EN 1992-1-1 crack control engine.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Length | mm |
| Area | mm² |
| Stress | MPa (N/mm²) |
| Moment | kN·m (input), N·mm (internal) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 15);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let width = Equation::CrackWidth.metadata();
        assert!(width.formula_plain.contains("s_r,max * (ε_sm - ε_cm)"));
    }

    #[test]
    fn test_code_reference_citation() {
        let spacing = Equation::MaxCrackSpacing.metadata().reference;
        assert_eq!(spacing.citation(), "EN 1992-1-1 7.3.4(3), Eq. (7.11)");

        let table = CodeReference::Eurocode2 { clause: "Table 3.1", equation: None };
        assert_eq!(table.citation(), "EN 1992-1-1 Table 3.1");
        assert!(Equation::HeightFactor.metadata().reference.citation().starts_with("Simplification: "));
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CrackWidth, "Step 1");
        tracker.record(Equation::MaxCrackSpacing, "Step 1");
        tracker.record(Equation::CrackWidth, "Step 2");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.usages()[2], EquationUsage::new(Equation::CrackWidth, "Step 2"));

        let json = serde_json::to_string(&tracker).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_every_category_used() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} has no equations", cat);
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Crack Control Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Material Properties"));
        assert!(markdown.contains("## Strain Difference"));
        assert!(markdown.contains("### Maximum Crack Spacing"));
        assert!(markdown.contains("`w_k = s_r,max * (ε_sm - ε_cm)`"));
        assert!(markdown.contains("EN 1992-1-1 9.2.1.1(1), Eq. (9.1N)"));
        assert!(markdown.contains("equations/crack.rs"));
        assert!(markdown.contains("**Total Equations:** 15"));
        assert!(markdown.contains("**Categories:** 8"));
    }

    #[test]
    fn test_tracker_serialization() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CrackWidth, "check");
        let json = serde_json::to_string(&tracker).unwrap();
        assert!(json.starts_with('['));
        let roundtrip: EquationTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(tracker, roundtrip);
    }
}
