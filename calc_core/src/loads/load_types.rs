//! Load type and load duration definitions per EN 1992-1-1 Section 7.3
//!
//! The action effect on the section (bending or pure tension) and the
//! duration of loading select the coefficients of the crack control clauses.

use serde::{Deserialize, Serialize};

/// Stress distribution in the section prior to cracking
///
/// Selects `k2` in the crack spacing expression (7.11), `k_c` in (7.1),
/// the effective tension height `h_c,eff` and the tension area `A_ct`.
///
/// # Example
/// ```
/// use calc_core::loads::LoadType;
///
/// let bending = LoadType::Bending;
/// assert_eq!(bending.k2(), 0.5);
/// assert_eq!(bending.description(), "Bending");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadType {
    /// Flexure, one face in tension
    #[default]
    Bending,
    /// Pure (axial) tension, whole section in tension
    Tension,
}

impl LoadType {
    /// Strain distribution coefficient k2 for crack spacing (7.11)
    pub fn k2(&self) -> f64 {
        match self {
            LoadType::Bending => 0.5,
            LoadType::Tension => 1.0,
        }
    }

    /// Stress distribution coefficient k_c for minimum reinforcement (7.1)
    pub fn kc(&self) -> f64 {
        match self {
            LoadType::Bending => 0.4,
            LoadType::Tension => 1.0,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Bending => "Bending",
            LoadType::Tension => "Pure tension",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bending" | "flexure" | "b" => Some(LoadType::Bending),
            "tension" | "pure tension" | "axial" | "t" => Some(LoadType::Tension),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Duration of the service load, selecting k_t in (7.9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadDuration {
    /// Long term loading, k_t = 0.4
    #[default]
    LongTerm,
    /// Short term loading, k_t = 0.6
    ShortTerm,
}

impl LoadDuration {
    /// Load duration factor k_t
    pub fn kt(&self) -> f64 {
        match self {
            LoadDuration::LongTerm => 0.4,
            LoadDuration::ShortTerm => 0.6,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoadDuration::LongTerm => "Long term",
            LoadDuration::ShortTerm => "Short term",
        }
    }
}

impl std::fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
