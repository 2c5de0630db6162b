//! Run loop, case configuration, and solution record.

use crate::boundary::InletEnergyVelocity;
use crate::error::{SimError, SimResult};
use crate::maccormack::MacCormack;
use crate::profile::PiecewiseProfile;
use crate::state::{Conserved, Primitives};
use crate::timestep::stable_dt;
use nf_core::{Grid, Nozzle, Real};

/// Scalar configuration for one nozzle flow case.
///
/// Defaults reproduce the classic converging-diverging test case:
/// L = 3, dx = 0.05, gamma = 1.4, CFL = 0.5, 700 steps, inlet mass flow
/// 0.59.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaseConfig {
    /// Domain length
    pub length: Real,
    /// Grid spacing
    pub dx: Real,
    /// Ratio of specific heats
    pub gamma: Real,
    /// Courant number
    pub cfl: Real,
    /// Number of explicit timesteps
    pub steps: usize,
    /// Inlet mass-flow constant for the startup velocity profile
    pub mass_flow: Real,
    /// Nozzle area profile
    pub nozzle: Nozzle,
    /// Inlet energy boundary ordering (see [`InletEnergyVelocity`])
    pub inlet_mode: InletEnergyVelocity,
    /// Optional early stop once the averaged-residual inf-norm falls below
    /// this tolerance. `None` keeps the fixed-count termination.
    pub stop_when_steady: Option<Real>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            length: 3.0,
            dx: 0.05,
            gamma: 1.4,
            cfl: 0.5,
            steps: 700,
            mass_flow: 0.59,
            nozzle: Nozzle::default(),
            inlet_mode: InletEnergyVelocity::default(),
            stop_when_steady: None,
        }
    }
}

impl CaseConfig {
    /// Validate configuration before the loop starts, including the
    /// domain bounds (`length > 0`, `dx > 0`, at least 3 nodes).
    pub fn validate(&self) -> SimResult<()> {
        Grid::new(self.length, self.dx)?;
        if !(self.gamma > 1.0) {
            return Err(SimError::InvalidDomain {
                what: "gamma must exceed 1",
            });
        }
        if !(self.cfl > 0.0) {
            return Err(SimError::InvalidDomain {
                what: "cfl must be positive",
            });
        }
        if self.steps == 0 {
            return Err(SimError::InvalidDomain {
                what: "steps must be positive",
            });
        }
        if !(self.mass_flow > 0.0) {
            return Err(SimError::InvalidDomain {
                what: "mass_flow must be positive",
            });
        }
        if let Some(tol) = self.stop_when_steady {
            if !(tol > 0.0) {
                return Err(SimError::InvalidDomain {
                    what: "stop_when_steady tolerance must be positive",
                });
            }
        }
        Ok(())
    }
}

/// Final state of a run: the five primitive sequences over the grid plus
/// run bookkeeping.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Node positions
    pub x: Vec<Real>,
    /// Per-node cross-sectional areas
    pub area: Vec<Real>,
    /// Final primitive variables
    pub primitives: Primitives,
    /// Final conservative variables, boundary-enforced
    pub conserved: Conserved,
    /// Accumulated simulated time
    pub sim_time: Real,
    /// Iterations actually run (< steps only with an early steady stop)
    pub iterations: usize,
    /// Step size of the last iteration
    pub last_dt: Real,
}

impl Solution {
    /// Mass flow rho*A*v per node; approximately uniform at steady state.
    pub fn mass_flow(&self) -> Vec<Real> {
        (0..self.x.len())
            .map(|i| self.primitives.density[i] * self.area[i] * self.primitives.velocity[i])
            .collect()
    }

    /// `(position, value)` pairs for one output sequence, for external
    /// reporting or plotting.
    pub fn series<'a>(&'a self, values: &'a [Real]) -> impl Iterator<Item = (Real, Real)> + 'a {
        self.x.iter().copied().zip(values.iter().copied())
    }
}

/// Integrate a case for its fixed number of timesteps and return the final
/// state.
pub fn run_case(case: &CaseConfig) -> SimResult<Solution> {
    case.validate()?;

    let grid = Grid::new(case.length, case.dx)?;
    let area = case.nozzle.profile(&grid);
    let profile = PiecewiseProfile::subsonic_inlet_default();
    let (mut prim, mut u) = profile.initial_state(&grid, &area, case.gamma, case.mass_flow)?;
    prim.validate_positive()?;

    let scheme = MacCormack {
        gamma: case.gamma,
        dx: grid.dx(),
        inlet_mode: case.inlet_mode,
    };

    tracing::info!(
        nodes = grid.len(),
        steps = case.steps,
        cfl = case.cfl,
        "starting nozzle run"
    );

    let mut sim_time = 0.0;
    let mut last_dt = 0.0;
    let mut iterations = 0;
    for iteration in 0..case.steps {
        let dt = stable_dt(&prim, grid.dx(), case.cfl, iteration)?;
        let out = scheme.step(&u, &prim, &area, dt, iteration)?;
        u = out.state;
        prim = out.primitives;
        sim_time += dt;
        last_dt = dt;
        iterations = iteration + 1;

        tracing::trace!(iteration, dt, residual = out.residual, "step");
        if let Some(tol) = case.stop_when_steady {
            if out.residual < tol {
                tracing::info!(iteration, residual = out.residual, "steady stop");
                break;
            }
        }
    }

    tracing::info!(iterations, sim_time, "run finished");

    Ok(Solution {
        x: grid.positions().to_vec(),
        area,
        primitives: prim,
        conserved: u,
        sim_time,
        iterations,
        last_dt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_case_is_the_classic_test_nozzle() {
        let case = CaseConfig::default();
        assert_eq!(case.length, 3.0);
        assert_eq!(case.dx, 0.05);
        assert_eq!(case.gamma, 1.4);
        assert_eq!(case.cfl, 0.5);
        assert_eq!(case.steps, 700);
        assert_eq!(case.mass_flow, 0.59);
        assert!(case.stop_when_steady.is_none());
        assert!(case.validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_domain() {
        for case in [
            CaseConfig {
                dx: -0.05,
                ..Default::default()
            },
            CaseConfig {
                dx: 0.0,
                ..Default::default()
            },
            CaseConfig {
                length: 0.0,
                ..Default::default()
            },
            // 2 nodes: no interior node for the stencil
            CaseConfig {
                length: 1.0,
                dx: 1.0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                case.validate(),
                Err(SimError::InvalidDomain { .. })
            ));
        }
    }

    #[test]
    fn validation_rejects_bad_scalars() {
        for case in [
            CaseConfig {
                gamma: 1.0,
                ..Default::default()
            },
            CaseConfig {
                cfl: 0.0,
                ..Default::default()
            },
            CaseConfig {
                steps: 0,
                ..Default::default()
            },
            CaseConfig {
                mass_flow: -0.5,
                ..Default::default()
            },
            CaseConfig {
                stop_when_steady: Some(0.0),
                ..Default::default()
            },
        ] {
            assert!(case.validate().is_err());
        }
    }

    #[test]
    fn bad_grid_aborts_before_loop() {
        let case = CaseConfig {
            dx: -0.05,
            ..Default::default()
        };
        assert!(matches!(
            run_case(&case),
            Err(SimError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn short_run_advances_the_clock() {
        let case = CaseConfig {
            steps: 5,
            ..Default::default()
        };
        let sol = run_case(&case).unwrap();
        assert_eq!(sol.iterations, 5);
        assert!(sol.sim_time > 0.0);
        assert!(sol.last_dt > 0.0);
        assert!(sol.sim_time >= sol.last_dt);
        assert_eq!(sol.x.len(), sol.primitives.len());
        assert_eq!(
            sol.series(&sol.primitives.pressure).count(),
            sol.x.len()
        );
    }
}
