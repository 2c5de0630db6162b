//! Converging-diverging nozzle area profile.

use crate::grid::Grid;
use crate::numeric::Real;

/// Parabolic area distribution `A(x) = throat_area + curvature * (x - throat_position)^2`.
///
/// The defaults reproduce the classic normalized test nozzle: unit throat
/// area at x = 1.5 with curvature 2.2.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Nozzle {
    pub throat_position: Real,
    pub throat_area: Real,
    pub curvature: Real,
}

impl Default for Nozzle {
    fn default() -> Self {
        Self {
            throat_position: 1.5,
            throat_area: 1.0,
            curvature: 2.2,
        }
    }
}

impl Nozzle {
    /// Cross-sectional area at axial position `x`.
    pub fn area_at(&self, x: Real) -> Real {
        let d = x - self.throat_position;
        self.throat_area + self.curvature * d * d
    }

    /// Per-node areas over a grid, computed once per run.
    pub fn profile(&self, grid: &Grid) -> Vec<Real> {
        grid.positions().iter().map(|&x| self.area_at(x)).collect()
    }
}
