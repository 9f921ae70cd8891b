//! # Materials Database
//!
//! Material definitions and property lookups for reinforced concrete
//! crack control.
//!
//! ## Material Types
//!
//! - **Concrete**: strength classes C12/15 to C50/60 per EN 1992-1-1 Table 3.1,
//!   or an arbitrary characteristic strength
//! - **Reinforcing steel**: B400/B500/B550 or a custom yield strength, bar
//!   diameters Ø8 to Ø32 with nominal areas
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{ConcreteGrade, MaterialProperties, SteelGrade};
//!
//! let materials = MaterialProperties::new(ConcreteGrade::C30_37, SteelGrade::B500);
//!
//! let props = materials.resolved();
//! assert_eq!(props.fctm_mpa, 2.9);
//! assert_eq!(props.fyk_mpa, 500.0);
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::{
    concrete_elastic_modulus, concrete_tensile_strength, concrete_tensile_strength_from_fck,
    ConcreteGrade, ConcreteStrength,
};
pub use reinforcement::{
    recommend_layouts, BarDiameter, ReinforcementLayout, SteelGrade, STEEL_ELASTIC_MODULUS_MPA,
};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Concrete and steel specification for one section.
///
/// ## JSON Serialization
///
/// ```json
/// {
///   "concrete": { "type": "Grade", "grade": "C30/37" },
///   "steel": "B500"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub concrete: ConcreteStrength,
    #[serde(default)]
    pub steel: SteelGrade,
}

impl MaterialProperties {
    pub fn new(concrete: impl Into<ConcreteStrength>, steel: SteelGrade) -> Self {
        Self {
            concrete: concrete.into(),
            steel,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        self.steel.validate()
    }

    /// Resolve every material constant the crack control formulas need
    pub fn resolved(&self) -> ResolvedMaterial {
        let ecm_mpa = self.concrete.ecm_mpa();
        ResolvedMaterial {
            fck_mpa: self.concrete.fck_mpa(),
            fctm_mpa: self.concrete.fctm_mpa(),
            ecm_mpa,
            fyk_mpa: self.steel.fyk_mpa(),
            es_mpa: STEEL_ELASTIC_MODULUS_MPA,
            alpha_e: STEEL_ELASTIC_MODULUS_MPA / ecm_mpa,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} / {}", self.concrete.display_name(), self.steel)
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self::new(ConcreteGrade::C30_37, SteelGrade::B500)
    }
}

/// Numeric material constants, ready for the formulas (all MPa except α_e).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMaterial {
    /// Characteristic cylinder strength f_ck
    pub fck_mpa: f64,
    /// Mean tensile strength f_ctm, used as f_ct,eff
    pub fctm_mpa: f64,
    /// Secant modulus E_cm
    pub ecm_mpa: f64,
    /// Steel yield strength f_yk
    pub fyk_mpa: f64,
    /// Steel modulus E_s
    pub es_mpa: f64,
    /// Modular ratio α_e = E_s / E_cm
    pub alpha_e: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_grade() {
        let props = MaterialProperties::default().resolved();
        assert_eq!(props.fck_mpa, 30.0);
        assert_eq!(props.fctm_mpa, 2.9);
        assert_eq!(props.fyk_mpa, 500.0);
        assert_eq!(props.es_mpa, 200_000.0);
        assert!((props.alpha_e - 200_000.0 / concrete_elastic_modulus(30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_resolved_characteristic() {
        let mat = MaterialProperties::new(ConcreteStrength::characteristic(60.0), SteelGrade::B550);
        let props = mat.resolved();
        assert_eq!(props.fctm_mpa, concrete_tensile_strength_from_fck(60.0));
        assert_eq!(props.fyk_mpa, 550.0);
    }

    #[test]
    fn test_validation() {
        let bad_steel = MaterialProperties::new(ConcreteGrade::C25_30, SteelGrade::Custom { fyk_mpa: -1.0 });
        assert!(bad_steel.validate().is_err());
        assert!(MaterialProperties::default().validate().is_ok());
    }

    #[test]
    fn test_serialization_default_steel() {
        let json = r#"{ "concrete": { "type": "Grade", "grade": "C35/45" } }"#;
        let mat: MaterialProperties = serde_json::from_str(json).unwrap();
        assert_eq!(mat.steel, SteelGrade::B500);
        assert_eq!(mat.concrete, ConcreteStrength::grade(ConcreteGrade::C35_45));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(MaterialProperties::default().display_name(), "C30/37 / B500");
    }
}
