//! # Crack Control Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function taking `&*Input` and returning `CalcResult<*Result>`
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`crack_width`] - Crack width and minimum area check of a given section (`calculate`)
//! - [`min_reinforcement`] - Smallest steel area meeting a crack width limit (`solve`)

pub mod crack_width;
pub mod min_reinforcement;

// Re-export commonly used types
pub use crack_width::{CrackCheckInput, CrackCheckResult, CrackWidthModel, CrackWidthTerms, StrainMode};
pub use min_reinforcement::{
    MinReinforcementInput, MinReinforcementResult, SolverSettings, SolverStatus, SolverStep,
};
