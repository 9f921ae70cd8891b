//! Service actions for crack control
//!
//! # Overview
//!
//! - [`LoadType`] - Bending or pure tension
//! - [`LoadDuration`] - Long or short term (k_t)
//! - [`ServiceAction`] - What the caller knows about the service load: the
//!   bending moment, or the steel stress directly
//!
//! # Example
//!
//! ```
//! use calc_core::loads::{ServiceAction, LoadType};
//!
//! let action = ServiceAction::moment(120.0);
//! assert!(action.validate().is_ok());
//! assert_eq!(LoadType::default(), LoadType::Bending);
//! ```

pub mod load_types;

pub use load_types::{LoadDuration, LoadType};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Service load acting on the section.
///
/// The two variants are the two entry points of the crack width check:
/// a moment from which σ_s is derived, or σ_s supplied directly.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Moment", "moment_knm": 120.0 }
/// { "type": "SteelStress", "stress_mpa": 240.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServiceAction {
    /// Service bending moment M (kN·m)
    Moment { moment_knm: f64 },
    /// Steel stress σ_s under service load (MPa)
    SteelStress { stress_mpa: f64 },
}

impl ServiceAction {
    pub fn moment(moment_knm: f64) -> Self {
        ServiceAction::Moment { moment_knm }
    }

    pub fn steel_stress(stress_mpa: f64) -> Self {
        ServiceAction::SteelStress { stress_mpa }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            ServiceAction::Moment { moment_knm } => {
                if !moment_knm.is_finite() || moment_knm < 0.0 {
                    return Err(CalcError::invalid_input(
                        "moment_knm",
                        moment_knm.to_string(),
                        "Moment must be a non-negative number",
                    ));
                }
            }
            ServiceAction::SteelStress { stress_mpa } => {
                if !stress_mpa.is_finite() || stress_mpa < 0.0 {
                    return Err(CalcError::invalid_input(
                        "stress_mpa",
                        stress_mpa.to_string(),
                        "Steel stress must be a non-negative number",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(ServiceAction::moment(0.0).validate().is_ok());
        assert!(ServiceAction::moment(-1.0).validate().is_err());
        assert!(ServiceAction::steel_stress(f64::NAN).validate().is_err());
        assert!(ServiceAction::steel_stress(250.0).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let action = ServiceAction::steel_stress(240.0);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"SteelStress","stress_mpa":240.0}"#);
        let roundtrip: ServiceAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, roundtrip);
    }
}
