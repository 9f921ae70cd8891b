//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Fixed Metric Unit Set
//!
//! The crack control formulas of EN 1992-1-1 are written for one consistent
//! unit set, and the engine never converts between systems:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Stress: megapascals (MPa = N/mm²), kept as plain f64
//! - Moment: kilonewton-metres (kN·m) on input, newton-millimetres (N·mm) internally
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KnM, NMm};
//!
//! let moment = KnM(120.0);
//! let moment_nmm: NMm = moment.into();
//! assert_eq!(moment_nmm.0, 120.0e6);
//! ```

use std::ops::Mul;

// ============================================================================
// Length and Area
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millimeters(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SqMm(pub f64);

impl Mul for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Self) -> SqMm {
        SqMm(self.0 * rhs.0)
    }
}

// ============================================================================
// Moment
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let m = KnM(1.5);
        let nmm: NMm = m.into();
        assert_eq!(nmm.0, 1.5e6);
    }

    #[test]
    fn test_length_product_is_area() {
        let area = Millimeters(300.0) * Millimeters(100.0);
        assert_eq!(area, SqMm(30_000.0));
    }
}
