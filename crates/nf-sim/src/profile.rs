//! Initial state generation from a piecewise-linear profile.

use crate::error::SimResult;
use crate::state::{Conserved, Primitives};
use nf_core::{CoreError, CoreResult, Grid, Real, Tolerances, ensure_positive, nearly_equal};

/// One zone of the initial profile: linear density and temperature in
/// `(x - origin)`, valid up to `upper`.
#[derive(Clone, Copy, Debug)]
pub struct LinearZone {
    pub upper: Real,
    pub origin: Real,
    pub density_at_origin: Real,
    pub density_slope: Real,
    pub temperature_at_origin: Real,
    pub temperature_slope: Real,
}

impl LinearZone {
    fn density_at(&self, x: Real) -> Real {
        self.density_at_origin + self.density_slope * (x - self.origin)
    }

    fn temperature_at(&self, x: Real) -> Real {
        self.temperature_at_origin + self.temperature_slope * (x - self.origin)
    }
}

/// Piecewise-linear initial density/temperature distribution.
///
/// Zones are contiguous and ordered; the last zone extends to the end of
/// the grid. Adjacent zones must agree in value at their shared boundary
/// (the linear formulas do not enforce this on their own, so construction
/// validates it).
#[derive(Clone, Debug)]
pub struct PiecewiseProfile {
    zones: Vec<LinearZone>,
}

impl PiecewiseProfile {
    /// Validate zone continuity and build the profile.
    pub fn new(zones: Vec<LinearZone>) -> CoreResult<Self> {
        if zones.is_empty() {
            return Err(CoreError::InvalidDomain {
                what: "profile needs at least one zone",
            });
        }
        let tol = Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        };
        for pair in zones.windows(2) {
            let x = pair[0].upper;
            if !nearly_equal(pair[0].density_at(x), pair[1].density_at(x), tol) {
                return Err(CoreError::InvalidDomain {
                    what: "density discontinuous at zone boundary",
                });
            }
            if !nearly_equal(pair[0].temperature_at(x), pair[1].temperature_at(x), tol) {
                return Err(CoreError::InvalidDomain {
                    what: "temperature discontinuous at zone boundary",
                });
            }
        }
        Ok(Self { zones })
    }

    /// The classic startup profile for the converging-diverging test
    /// nozzle: stagnant reservoir conditions up to x = 0.5, then two
    /// linear ramps through the throat at x = 1.5.
    pub fn subsonic_inlet_default() -> Self {
        let zones = vec![
            LinearZone {
                upper: 0.5,
                origin: 0.0,
                density_at_origin: 1.0,
                density_slope: 0.0,
                temperature_at_origin: 1.0,
                temperature_slope: 0.0,
            },
            LinearZone {
                upper: 1.5,
                origin: 0.5,
                density_at_origin: 1.0,
                density_slope: -0.366,
                temperature_at_origin: 1.0,
                temperature_slope: -0.167,
            },
            LinearZone {
                upper: Real::INFINITY,
                origin: 1.5,
                density_at_origin: 0.634,
                density_slope: -0.3879,
                temperature_at_origin: 0.833,
                temperature_slope: -0.3507,
            },
        ];
        Self::new(zones).expect("default zones are continuous")
    }

    fn zone_for(&self, x: Real) -> &LinearZone {
        let last = self.zones.len() - 1;
        self.zones[..last]
            .iter()
            .find(|z| x <= z.upper)
            .unwrap_or(&self.zones[last])
    }

    pub fn density_at(&self, x: Real) -> Real {
        self.zone_for(x).density_at(x)
    }

    pub fn temperature_at(&self, x: Real) -> Real {
        self.zone_for(x).temperature_at(x)
    }

    /// Generate the initial primitive and conservative states.
    ///
    /// Pressure follows the normalized state equation `p = rho*T` and the
    /// velocity assumes a uniform mass flow rate `mdot` at t = 0:
    /// `v = mdot / (rho*A)`.
    pub fn initial_state(
        &self,
        grid: &Grid,
        area: &[Real],
        gamma: Real,
        mass_flow: Real,
    ) -> SimResult<(Primitives, Conserved)> {
        let n = grid.len();
        let mut density = Vec::with_capacity(n);
        let mut temperature = Vec::with_capacity(n);
        let mut velocity = Vec::with_capacity(n);
        let mut pressure = Vec::with_capacity(n);
        let mut mach = Vec::with_capacity(n);
        for (i, &x) in grid.positions().iter().enumerate() {
            let rho = ensure_positive(self.density_at(x), "density", i)?;
            let t = ensure_positive(self.temperature_at(x), "temperature", i)?;
            let v = mass_flow / (rho * area[i]);
            density.push(rho);
            temperature.push(t);
            velocity.push(v);
            pressure.push(rho * t);
            mach.push(v / t.sqrt());
        }
        let prim = Primitives {
            density,
            velocity,
            temperature,
            pressure,
            mach,
        };
        let cons = prim.to_conserved(area, gamma);
        Ok((prim, cons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::Nozzle;

    #[test]
    fn default_zones_are_continuous() {
        let profile = PiecewiseProfile::subsonic_inlet_default();
        for x in [0.5, 1.5] {
            let below = profile.density_at(x - 1e-12);
            let above = profile.density_at(x + 1e-12);
            assert!((below - above).abs() < 1e-9);
            let below = profile.temperature_at(x - 1e-12);
            let above = profile.temperature_at(x + 1e-12);
            assert!((below - above).abs() < 1e-9);
        }
        assert_eq!(profile.density_at(0.0), 1.0);
        assert!((profile.density_at(1.5) - 0.634).abs() < 1e-12);
        assert!((profile.temperature_at(1.5) - 0.833).abs() < 1e-12);
    }

    #[test]
    fn discontinuous_zones_are_rejected() {
        let zones = vec![
            LinearZone {
                upper: 1.0,
                origin: 0.0,
                density_at_origin: 1.0,
                density_slope: 0.0,
                temperature_at_origin: 1.0,
                temperature_slope: 0.0,
            },
            LinearZone {
                upper: Real::INFINITY,
                origin: 1.0,
                density_at_origin: 0.5, // jumps from 1.0
                density_slope: 0.0,
                temperature_at_origin: 1.0,
                temperature_slope: 0.0,
            },
        ];
        assert!(PiecewiseProfile::new(zones).is_err());
    }

    #[test]
    fn initial_velocity_matches_mass_flow() {
        let grid = Grid::new(3.0, 0.05).unwrap();
        let area = Nozzle::default().profile(&grid);
        let profile = PiecewiseProfile::subsonic_inlet_default();
        let (prim, cons) = profile.initial_state(&grid, &area, 1.4, 0.59).unwrap();
        for i in 0..grid.len() {
            let mdot = prim.density[i] * area[i] * prim.velocity[i];
            assert!((mdot - 0.59).abs() < 1e-12);
        }
        // U2 = rho*A*v is the mass flow itself at t = 0
        assert!((cons.u2[0] - 0.59).abs() < 1e-12);
    }

    #[test]
    fn cooled_profile_fails_positivity() {
        // Steep enough ramp to push temperature below zero inside [0, 3].
        let zones = vec![LinearZone {
            upper: Real::INFINITY,
            origin: 0.0,
            density_at_origin: 1.0,
            density_slope: 0.0,
            temperature_at_origin: 1.0,
            temperature_slope: -0.5,
        }];
        let profile = PiecewiseProfile::new(zones).unwrap();
        let grid = Grid::new(3.0, 0.05).unwrap();
        let area = Nozzle::default().profile(&grid);
        let err = profile.initial_state(&grid, &area, 1.4, 0.59).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("temperature"));
    }
}
