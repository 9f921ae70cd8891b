//! # Rectangular Section Geometry
//!
//! Dimensions of a rectangular reinforced concrete section with one layer of
//! tension reinforcement.
//!
//! ```text
//!     ┌─────────────┐ ─┬─
//!     │             │  │
//!     │             │  d      h
//!     │             │  │
//!     │  ●  ●  ●  ● │ ─┴─
//!     │             │   c (to bar surface)
//!     └─────────────┘
//!           b
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Section dimensions, all in mm.
///
/// ## JSON Example
///
/// ```json
/// { "width_mm": 300.0, "height_mm": 500.0, "effective_depth_mm": 460.0, "cover_mm": 35.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Section width b
    pub width_mm: f64,
    /// Overall height h
    pub height_mm: f64,
    /// Effective depth d to the centroid of the tension steel
    pub effective_depth_mm: f64,
    /// Clear cover c to the longitudinal bars
    pub cover_mm: f64,
}

impl SectionGeometry {
    pub fn new(width_mm: f64, height_mm: f64, effective_depth_mm: f64, cover_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            effective_depth_mm,
            cover_mm,
        }
    }

    /// Validate input parameters.
    ///
    /// Non-positive dimensions are invalid input; `d ≥ h` leaves no concrete
    /// below the steel and is reported as a degenerate section.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("effective_depth_mm", self.effective_depth_mm)?;
        require_positive("cover_mm", self.cover_mm)?;
        if self.effective_depth_mm >= self.height_mm {
            return Err(CalcError::degenerate_section(format!(
                "effective depth d = {} mm must be less than height h = {} mm",
                self.effective_depth_mm, self.height_mm
            )));
        }
        Ok(())
    }
}

impl Default for SectionGeometry {
    fn default() -> Self {
        Self::new(300.0, 500.0, 460.0, 35.0)
    }
}
