//! Concrete Materials (EN 1992-1-1 Table 3.1)
//!
//! Strength classes C12/15 through C50/60 with their tabulated mean axial
//! tensile strength `f_ctm`, plus the continuous Table 3.1 expressions for
//! `f_ctm` and the secant modulus `E_cm` when only `f_ck` is known.
//!
//! The grade table is process-wide read-only data. String lookups go through a
//! lazily built map so every caller shares one instance.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete strength classes supported by the grade table.
///
/// Serialized as the class designation. Deserialization accepts every form
/// [`ConcreteGrade::from_str_flexible`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConcreteGrade {
    #[serde(rename = "C12/15")]
    C12_15,
    #[serde(rename = "C16/20")]
    C16_20,
    #[serde(rename = "C20/25")]
    C20_25,
    #[serde(rename = "C25/30")]
    C25_30,
    #[serde(rename = "C30/37")]
    C30_37,
    #[serde(rename = "C35/45")]
    C35_45,
    #[serde(rename = "C40/50")]
    C40_50,
    #[serde(rename = "C45/55")]
    C45_55,
    #[serde(rename = "C50/60")]
    C50_60,
}

/// Uppercased class name and short cylinder-strength alias to grade.
static GRADE_TABLE: Lazy<HashMap<String, ConcreteGrade>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(ConcreteGrade::ALL.len() * 2);
    for grade in ConcreteGrade::ALL {
        table.insert(grade.code().to_string(), grade);
        table.insert(format!("C{}", grade.fck_mpa()), grade);
    }
    table
});

impl ConcreteGrade {
    /// All grades in ascending strength order for UI selection
    pub const ALL: [ConcreteGrade; 9] = [
        ConcreteGrade::C12_15,
        ConcreteGrade::C16_20,
        ConcreteGrade::C20_25,
        ConcreteGrade::C25_30,
        ConcreteGrade::C30_37,
        ConcreteGrade::C35_45,
        ConcreteGrade::C40_50,
        ConcreteGrade::C45_55,
        ConcreteGrade::C50_60,
    ];

    /// Class designation (e.g., "C30/37")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::C12_15 => "C12/15",
            ConcreteGrade::C16_20 => "C16/20",
            ConcreteGrade::C20_25 => "C20/25",
            ConcreteGrade::C25_30 => "C25/30",
            ConcreteGrade::C30_37 => "C30/37",
            ConcreteGrade::C35_45 => "C35/45",
            ConcreteGrade::C40_50 => "C40/50",
            ConcreteGrade::C45_55 => "C45/55",
            ConcreteGrade::C50_60 => "C50/60",
        }
    }

    /// Characteristic cylinder strength f_ck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::C12_15 => 12.0,
            ConcreteGrade::C16_20 => 16.0,
            ConcreteGrade::C20_25 => 20.0,
            ConcreteGrade::C25_30 => 25.0,
            ConcreteGrade::C30_37 => 30.0,
            ConcreteGrade::C35_45 => 35.0,
            ConcreteGrade::C40_50 => 40.0,
            ConcreteGrade::C45_55 => 45.0,
            ConcreteGrade::C50_60 => 50.0,
        }
    }

    /// Tabulated mean axial tensile strength f_ctm (MPa)
    pub fn fctm_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::C12_15 => 1.6,
            ConcreteGrade::C16_20 => 1.9,
            ConcreteGrade::C20_25 => 2.2,
            ConcreteGrade::C25_30 => 2.6,
            ConcreteGrade::C30_37 => 2.9,
            ConcreteGrade::C35_45 => 3.2,
            ConcreteGrade::C40_50 => 3.5,
            ConcreteGrade::C45_55 => 3.8,
            ConcreteGrade::C50_60 => 4.1,
        }
    }

    /// Parse from common string representations ("C30/37", "c30/37", "C30")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = s.trim().to_uppercase().replace(' ', "");
        GRADE_TABLE
            .get(&key)
            .copied()
            .ok_or_else(|| CalcError::invalid_grade(s))
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for ConcreteGrade {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str_flexible(&s)
    }
}

impl std::str::FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// Mean tensile strength by table lookup on a class name.
///
/// # Example
///
/// ```rust
/// use calc_core::materials::concrete::concrete_tensile_strength;
///
/// assert_eq!(concrete_tensile_strength("C30/37").unwrap(), 2.9);
/// assert!(concrete_tensile_strength("C99/105").is_err());
/// ```
pub fn concrete_tensile_strength(grade: &str) -> CalcResult<f64> {
    ConcreteGrade::from_str_flexible(grade).map(|g| g.fctm_mpa())
}

/// Mean tensile strength from the characteristic cylinder strength.
///
/// # Formula (EN 1992-1-1 Table 3.1)
/// - f_ctm = 0.30·f_ck^(2/3)              for f_ck ≤ 50 MPa
/// - f_ctm = 2.12·ln(1 + (f_ck + 8)/10)   for f_ck > 50 MPa
#[inline]
pub fn concrete_tensile_strength_from_fck(fck_mpa: f64) -> f64 {
    if fck_mpa <= 50.0 {
        0.3 * fck_mpa.powf(2.0 / 3.0)
    } else {
        2.12 * (1.0 + 0.1 * (fck_mpa + 8.0)).ln()
    }
}

/// Secant modulus of elasticity of concrete.
///
/// # Formula (EN 1992-1-1 Table 3.1)
/// E_cm = 22·(f_cm/10)^0.3 GPa, with f_cm = f_ck + 8 MPa, returned in MPa.
#[inline]
pub fn concrete_elastic_modulus(fck_mpa: f64) -> f64 {
    22.0 * ((fck_mpa + 8.0) / 10.0).powf(0.3) * 1000.0
}

/// How the concrete strength is specified by the caller.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Grade", "grade": "C30/37" }
/// { "type": "Characteristic", "fck_mpa": 32.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConcreteStrength {
    /// Named class, f_ctm taken from the grade table
    Grade { grade: ConcreteGrade },
    /// Arbitrary f_ck, f_ctm from the continuous formula
    Characteristic { fck_mpa: f64 },
}

impl ConcreteStrength {
    pub fn grade(grade: ConcreteGrade) -> Self {
        ConcreteStrength::Grade { grade }
    }

    pub fn characteristic(fck_mpa: f64) -> Self {
        ConcreteStrength::Characteristic { fck_mpa }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if let ConcreteStrength::Characteristic { fck_mpa } = *self {
            if !fck_mpa.is_finite() || fck_mpa <= 0.0 || fck_mpa > 90.0 {
                return Err(CalcError::invalid_input(
                    "fck_mpa",
                    fck_mpa.to_string(),
                    "Characteristic strength must be in (0, 90] MPa",
                ));
            }
        }
        Ok(())
    }

    /// Characteristic cylinder strength f_ck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteStrength::Grade { grade } => grade.fck_mpa(),
            ConcreteStrength::Characteristic { fck_mpa } => *fck_mpa,
        }
    }

    /// Mean tensile strength f_ctm (MPa)
    pub fn fctm_mpa(&self) -> f64 {
        match self {
            ConcreteStrength::Grade { grade } => grade.fctm_mpa(),
            ConcreteStrength::Characteristic { fck_mpa } => concrete_tensile_strength_from_fck(*fck_mpa),
        }
    }

    /// Secant modulus E_cm (MPa)
    pub fn ecm_mpa(&self) -> f64 {
        concrete_elastic_modulus(self.fck_mpa())
    }

    pub fn display_name(&self) -> String {
        match self {
            ConcreteStrength::Grade { grade } => grade.code().to_string(),
            ConcreteStrength::Characteristic { fck_mpa } => format!("f_ck = {} MPa", fck_mpa),
        }
    }
}

impl From<ConcreteGrade> for ConcreteStrength {
    fn from(grade: ConcreteGrade) -> Self {
        ConcreteStrength::Grade { grade }
    }
}
