//! Reinforcing Steel
//!
//! Bar sizes with their nominal cross-sectional areas, the common B-grade
//! yield strengths, and bar layouts (a diameter plus either a bar count or an
//! explicit total area).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::reinforcement::{BarDiameter, ReinforcementLayout};
//!
//! let layout = ReinforcementLayout::bars(BarDiameter::D16, 4);
//! assert!((layout.area_mm2() - 804.4).abs() < 1e-9);
//! assert_eq!(layout.diameter_mm(), 16.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of reinforcing steel E_s (MPa), EN 1992-1-1 3.2.7(4)
pub const STEEL_ELASTIC_MODULUS_MPA: f64 = 200_000.0;

/// Nominal bar diameters with tabulated areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarDiameter {
    #[serde(rename = "8")]
    D8,
    #[serde(rename = "10")]
    D10,
    #[serde(rename = "12")]
    D12,
    #[serde(rename = "16")]
    D16,
    #[serde(rename = "20")]
    D20,
    #[serde(rename = "25")]
    D25,
    #[serde(rename = "28")]
    D28,
    #[serde(rename = "32")]
    D32,
}

impl BarDiameter {
    /// All bar sizes in ascending order
    pub const ALL: [BarDiameter; 8] = [
        BarDiameter::D8,
        BarDiameter::D10,
        BarDiameter::D12,
        BarDiameter::D16,
        BarDiameter::D20,
        BarDiameter::D25,
        BarDiameter::D28,
        BarDiameter::D32,
    ];

    /// Nominal diameter φ (mm)
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarDiameter::D8 => 8.0,
            BarDiameter::D10 => 10.0,
            BarDiameter::D12 => 12.0,
            BarDiameter::D16 => 16.0,
            BarDiameter::D20 => 20.0,
            BarDiameter::D25 => 25.0,
            BarDiameter::D28 => 28.0,
            BarDiameter::D32 => 32.0,
        }
    }

    /// Tabulated area of one bar (mm²)
    pub fn area_mm2(&self) -> f64 {
        match self {
            BarDiameter::D8 => 50.3,
            BarDiameter::D10 => 78.5,
            BarDiameter::D12 => 113.1,
            BarDiameter::D16 => 201.1,
            BarDiameter::D20 => 314.2,
            BarDiameter::D25 => 490.9,
            BarDiameter::D28 => 615.8,
            BarDiameter::D32 => 804.2,
        }
    }

    /// Look up a bar size by its nominal diameter in mm
    pub fn from_mm(diameter_mm: u32) -> CalcResult<Self> {
        BarDiameter::ALL
            .into_iter()
            .find(|d| d.diameter_mm() as u32 == diameter_mm)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "diameter_mm",
                    diameter_mm.to_string(),
                    "Supported bar diameters: 8, 10, 12, 16, 20, 25, 28, 32 mm",
                )
            })
    }
}

impl std::fmt::Display for BarDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ø{}", self.diameter_mm())
    }
}

/// Reinforcing steel grades by characteristic yield strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SteelGrade {
    B400,
    B500,
    B550,
    /// Any other characteristic yield strength (MPa)
    Custom { fyk_mpa: f64 },
}

impl SteelGrade {
    /// The standard grades offered for selection
    pub const STANDARD: [SteelGrade; 3] = [SteelGrade::B400, SteelGrade::B500, SteelGrade::B550];

    /// Characteristic yield strength f_yk (MPa)
    pub fn fyk_mpa(&self) -> f64 {
        match self {
            SteelGrade::B400 => 400.0,
            SteelGrade::B500 => 500.0,
            SteelGrade::B550 => 550.0,
            SteelGrade::Custom { fyk_mpa } => *fyk_mpa,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let fyk = self.fyk_mpa();
        if !fyk.is_finite() || fyk <= 0.0 {
            return Err(CalcError::invalid_input(
                "fyk_mpa",
                fyk.to_string(),
                "Yield strength must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::B500
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SteelGrade::Custom { fyk_mpa } => write!(f, "f_yk = {} MPa", fyk_mpa),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Tension reinforcement provided in the section.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Bars", "diameter": "16", "count": 4 }
/// { "type": "Area", "diameter": "16", "area_mm2": 850.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReinforcementLayout {
    /// `count` bars of one diameter
    Bars { diameter: BarDiameter, count: u32 },
    /// Explicit total area with the diameter used for crack spacing
    Area { diameter: BarDiameter, area_mm2: f64 },
}

impl ReinforcementLayout {
    pub fn bars(diameter: BarDiameter, count: u32) -> Self {
        ReinforcementLayout::Bars { diameter, count }
    }

    pub fn area(diameter: BarDiameter, area_mm2: f64) -> Self {
        ReinforcementLayout::Area { diameter, area_mm2 }
    }

    pub fn diameter(&self) -> BarDiameter {
        match self {
            ReinforcementLayout::Bars { diameter, .. } | ReinforcementLayout::Area { diameter, .. } => *diameter,
        }
    }

    /// Bar diameter φ (mm)
    pub fn diameter_mm(&self) -> f64 {
        self.diameter().diameter_mm()
    }

    /// Total steel area A_s (mm²)
    pub fn area_mm2(&self) -> f64 {
        match self {
            ReinforcementLayout::Bars { diameter, count } => f64::from(*count) * diameter.area_mm2(),
            ReinforcementLayout::Area { area_mm2, .. } => *area_mm2,
        }
    }

    /// Validate input parameters.
    ///
    /// A zero area is left to the formulas, which report it as a degenerate
    /// section.
    pub fn validate(&self) -> CalcResult<()> {
        if let ReinforcementLayout::Area { area_mm2, .. } = *self {
            if !area_mm2.is_finite() || area_mm2 < 0.0 {
                return Err(CalcError::invalid_input(
                    "area_mm2",
                    area_mm2.to_string(),
                    "Steel area must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    pub fn display_name(&self) -> String {
        match self {
            ReinforcementLayout::Bars { diameter, count } => format!("{} {}", count, diameter),
            ReinforcementLayout::Area { diameter, area_mm2 } => {
                format!("{:.0} mm² ({})", area_mm2, diameter)
            }
        }
    }
}

impl std::fmt::Display for ReinforcementLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Diameters scanned when suggesting layouts
const RECOMMENDED_DIAMETERS: [BarDiameter; 5] = [
    BarDiameter::D8,
    BarDiameter::D10,
    BarDiameter::D12,
    BarDiameter::D16,
    BarDiameter::D20,
];

/// Bar counts scanned per diameter
const RECOMMENDED_COUNTS: std::ops::RangeInclusive<u32> = 2..=8;

/// Maximum number of suggestions returned
const MAX_RECOMMENDATIONS: usize = 8;

/// Suggest common bar layouts that provide at least `required_area_mm2`.
///
/// Diameters Ø8 to Ø20 are scanned smallest first and, within each, 2 to 8
/// bars; every qualifying layout is kept until eight have been found.
///
/// # Example
///
/// ```rust
/// use calc_core::materials::reinforcement::{recommend_layouts, BarDiameter, ReinforcementLayout};
///
/// let layouts = recommend_layouts(208.1).unwrap();
/// assert_eq!(layouts[0], ReinforcementLayout::bars(BarDiameter::D8, 5));
/// assert!(layouts.iter().all(|l| l.area_mm2() >= 208.1));
/// ```
pub fn recommend_layouts(required_area_mm2: f64) -> CalcResult<Vec<ReinforcementLayout>> {
    if !required_area_mm2.is_finite() || required_area_mm2 < 0.0 {
        return Err(CalcError::invalid_input(
            "required_area_mm2",
            required_area_mm2.to_string(),
            "Required area must be a non-negative number",
        ));
    }

    let mut layouts = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for diameter in RECOMMENDED_DIAMETERS {
        for count in RECOMMENDED_COUNTS {
            let layout = ReinforcementLayout::bars(diameter, count);
            if layout.area_mm2() >= required_area_mm2 {
                layouts.push(layout);
                if layouts.len() >= MAX_RECOMMENDATIONS {
                    return Ok(layouts);
                }
            }
        }
    }
    Ok(layouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_areas() {
        assert_eq!(BarDiameter::D16.area_mm2(), 201.1);
        assert_eq!(BarDiameter::D32.area_mm2(), 804.2);
        for d in BarDiameter::ALL {
            // Tabulated areas round π·φ²/4
            let exact = std::f64::consts::PI * d.diameter_mm().powi(2) / 4.0;
            assert!((d.area_mm2() - exact).abs() < 0.1, "{}", d);
        }
    }

    #[test]
    fn test_from_mm() {
        assert_eq!(BarDiameter::from_mm(20).unwrap(), BarDiameter::D20);
        assert!(BarDiameter::from_mm(14).is_err());
    }

    #[test]
    fn test_layout_area() {
        let bars = ReinforcementLayout::bars(BarDiameter::D16, 4);
        assert!((bars.area_mm2() - 804.4).abs() < 1e-9);

        let area = ReinforcementLayout::area(BarDiameter::D12, 500.0);
        assert_eq!(area.area_mm2(), 500.0);
        assert_eq!(area.diameter_mm(), 12.0);
    }

    #[test]
    fn test_layout_validation() {
        assert!(ReinforcementLayout::area(BarDiameter::D12, -1.0).validate().is_err());
        assert!(ReinforcementLayout::area(BarDiameter::D12, f64::NAN).validate().is_err());
        assert!(ReinforcementLayout::bars(BarDiameter::D12, 0).validate().is_ok());
    }

    #[test]
    fn test_steel_grades() {
        assert_eq!(SteelGrade::default().fyk_mpa(), 500.0);
        assert_eq!(SteelGrade::Custom { fyk_mpa: 460.0 }.fyk_mpa(), 460.0);
        assert!(SteelGrade::Custom { fyk_mpa: 0.0 }.validate().is_err());
        assert_eq!(SteelGrade::B550.to_string(), "B550");
    }

    #[test]
    fn test_recommend_layouts_order() {
        let layouts = recommend_layouts(400.0).unwrap();
        assert_eq!(layouts.len(), MAX_RECOMMENDATIONS);
        // 8 Ø8 = 402.4, then Ø10 from 6 bars (471.0) upward
        assert_eq!(layouts[0], ReinforcementLayout::bars(BarDiameter::D8, 8));
        assert_eq!(layouts[1], ReinforcementLayout::bars(BarDiameter::D10, 6));
        assert_eq!(layouts[3], ReinforcementLayout::bars(BarDiameter::D10, 8));
        assert_eq!(layouts[4], ReinforcementLayout::bars(BarDiameter::D12, 4));
        assert_eq!(layouts[7], ReinforcementLayout::bars(BarDiameter::D12, 7));
    }

    #[test]
    fn test_recommend_layouts_large_requirement() {
        // Only Ø20 bars reach 2000 mm²: 7 and 8 bars
        let layouts = recommend_layouts(2000.0).unwrap();
        assert_eq!(
            layouts,
            vec![
                ReinforcementLayout::bars(BarDiameter::D20, 7),
                ReinforcementLayout::bars(BarDiameter::D20, 8),
            ]
        );
        assert!(recommend_layouts(5000.0).unwrap().is_empty());
        assert!(recommend_layouts(-1.0).is_err());
    }

    #[test]
    fn test_layout_serialization() {
        let layout = ReinforcementLayout::bars(BarDiameter::D16, 4);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"type":"Bars","diameter":"16","count":4}"#);
        let roundtrip: ReinforcementLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
