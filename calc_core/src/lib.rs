//! # calc_core - Crack Control Calculation Engine
//!
//! `calc_core` checks crack widths in reinforced concrete sections and finds
//! the minimum reinforcement that keeps them within a limit, per EN 1992-1-1
//! (Eurocode 2) Sections 7.3 and 9.2. All inputs and outputs are
//! JSON-serializable, making it easy to drive from a CLI, a script, or an AI
//! assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every result lists the code equations it applied
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{CrackCheckInput, crack_width};
//! use calc_core::loads::{LoadDuration, LoadType, ServiceAction};
//! use calc_core::materials::{BarDiameter, MaterialProperties, ReinforcementLayout};
//! use calc_core::section::SectionGeometry;
//!
//! let input = CrackCheckInput {
//!     label: "B-1".to_string(),
//!     section: SectionGeometry::new(300.0, 500.0, 460.0, 35.0),
//!     materials: MaterialProperties::default(),
//!     reinforcement: ReinforcementLayout::bars(BarDiameter::D20, 4),
//!     load_type: LoadType::Bending,
//!     duration: LoadDuration::LongTerm,
//!     action: ServiceAction::moment(120.0),
//!     crack_width_limit_mm: 0.3,
//!     strain_mode: None,
//! };
//!
//! let result = crack_width::calculate(&input).unwrap();
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("crack_width_mm"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Crack width check and minimum reinforcement search
//! - [`equations`] - EC2 formulas and the equation registry
//! - [`materials`] - Concrete classes, steel grades, bar sizes
//! - [`loads`] - Service actions, load type and duration
//! - [`section`] - Rectangular section geometry
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::SolverStatus;
pub use errors::{CalcError, CalcResult};
pub use section::SectionGeometry;
