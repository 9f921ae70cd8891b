//! # Crack Control Equations
//!
//! This module contains every formula used by the crack width check and the
//! minimum reinforcement solver. Having equations in one place enables:
//! - Easy verification against EN 1992-1-1 clause references
//! - Documentation of assumptions and simplifications
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`crack`] - Steel stress, effective area, crack spacing, strain, crack width, minimum areas
//! - [`registry`] - Equation metadata and tracking for reports and EQUATIONS.md
//!
//! ## Units
//!
//! - **Lengths**: mm
//! - **Areas**: mm²
//! - **Stresses and moduli**: MPa
//! - **Moments**: kN·m at the interface, N·mm internally
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Eurocode 2: Design of concrete structures, Sections 3, 7 and 9

pub mod crack;
pub mod registry;

// Re-export commonly used items
pub use crack::{
    // Steel stress
    steel_stress_from_moment,
    SteelStress,
    // Effective tension area
    effective_tension_height,
    effective_reinforcement,
    effective_reinforcement_ratio,
    EffectiveRatio,
    // Spacing, strain, width
    max_crack_spacing,
    strain_difference,
    crack_width,
    StrainBound,
    StrainDifference,
    StrainFormula,
    // Minimum reinforcement
    minimum_reinforcement_area,
    height_factor,
    cracking_tension_area,
    crack_control_area,
    MinimumReinforcement,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
