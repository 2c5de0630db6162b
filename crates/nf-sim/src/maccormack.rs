//! MacCormack predictor-corrector integrator.
//!
//! One step runs: predictor (forward differences) -> provisional advance ->
//! corrector (backward differences) on the provisional state -> average of
//! the two residuals applied to the pre-step snapshot -> boundary
//! enforcement -> primitive recovery -> divergence guard. Phases are pure
//! state-in/state-out functions; nothing aliases the snapshot.

use crate::boundary::{InletEnergyVelocity, enforce_boundaries};
use crate::error::{SimError, SimResult};
use crate::flux::flux_vector;
use crate::source::{Phase, area_source};
use crate::state::{Conserved, Primitives};
use nf_core::Real;

/// Per-node time derivatives of the three conservative variables.
/// Boundary entries stay zero; only interior nodes are advanced.
#[derive(Clone, Debug)]
pub struct Residual {
    pub du1: Vec<Real>,
    pub du2: Vec<Real>,
    pub du3: Vec<Real>,
}

impl Residual {
    fn zeros(n: usize) -> Self {
        Self {
            du1: vec![0.0; n],
            du2: vec![0.0; n],
            du3: vec![0.0; n],
        }
    }

    /// Largest absolute entry across all three components.
    pub fn inf_norm(&self) -> Real {
        self.du1
            .iter()
            .chain(&self.du2)
            .chain(&self.du3)
            .fold(0.0, |acc: Real, &v| acc.max(v.abs()))
    }
}

/// Outcome of one full predictor-corrector cycle.
#[derive(Clone, Debug)]
pub struct StepResult {
    pub state: Conserved,
    pub primitives: Primitives,
    /// Inf-norm of the averaged residual, for steady-stop monitoring.
    pub residual: Real,
}

/// The explicit scheme with its fixed per-run parameters.
#[derive(Clone, Copy, Debug)]
pub struct MacCormack {
    pub gamma: Real,
    pub dx: Real,
    pub inlet_mode: InletEnergyVelocity,
}

impl MacCormack {
    /// Flux-difference plus source residual for one phase.
    ///
    /// The phase picks both the flux stencil and the area-difference
    /// direction: forward for the predictor, backward for the corrector.
    /// The source term enters the momentum component only.
    fn phase_residual(
        &self,
        phase: Phase,
        u: &Conserved,
        prim: &Primitives,
        area: &[Real],
    ) -> Residual {
        let n = u.len();
        let f = flux_vector(u, self.gamma);
        let mut r = Residual::zeros(n);
        for j in 1..n - 1 {
            let (lo, hi) = match phase {
                Phase::Predictor => (j, j + 1),
                Phase::Corrector => (j - 1, j),
            };
            let source = area_source(
                phase,
                j,
                &prim.density,
                &prim.temperature,
                area,
                self.gamma,
                self.dx,
            );
            r.du1[j] = -(f.f1[hi] - f.f1[lo]) / self.dx;
            r.du2[j] = -(f.f2[hi] - f.f2[lo]) / self.dx + source;
            r.du3[j] = -(f.f3[hi] - f.f3[lo]) / self.dx;
        }
        r
    }

    /// Advance one full timestep from `(u, prim)`.
    ///
    /// `prim` must be the primitive recovery of `u`; the caller keeps them
    /// paired across iterations.
    pub fn step(
        &self,
        u: &Conserved,
        prim: &Primitives,
        area: &[Real],
        dt: Real,
        iteration: usize,
    ) -> SimResult<StepResult> {
        let n = u.len();

        let predictor = self.phase_residual(Phase::Predictor, u, prim, area);

        // Provisional advance, interior nodes only.
        let mut predicted = u.clone();
        for j in 1..n - 1 {
            predicted.u1[j] += predictor.du1[j] * dt;
            predicted.u2[j] += predictor.du2[j] * dt;
            predicted.u3[j] += predictor.du3[j] * dt;
        }
        let prim_predicted = predicted.to_primitives(area, self.gamma);

        let corrector = self.phase_residual(Phase::Corrector, &predicted, &prim_predicted, area);

        // Advance from the pre-step snapshot with the averaged residual.
        // The provisional state is discarded beyond its role above.
        let mut next = u.clone();
        let mut averaged = Residual::zeros(n);
        for j in 1..n - 1 {
            averaged.du1[j] = 0.5 * (predictor.du1[j] + corrector.du1[j]);
            averaged.du2[j] = 0.5 * (predictor.du2[j] + corrector.du2[j]);
            averaged.du3[j] = 0.5 * (predictor.du3[j] + corrector.du3[j]);
            next.u1[j] = u.u1[j] + averaged.du1[j] * dt;
            next.u2[j] = u.u2[j] + averaged.du2[j] * dt;
            next.u3[j] = u.u3[j] + averaged.du3[j] * dt;
        }

        enforce_boundaries(&mut next, &prim_predicted, area, self.gamma, self.inlet_mode);
        let prim_next = next.to_primitives(area, self.gamma);

        if let Some((field, node)) = next.first_non_finite() {
            return Err(SimError::NumericalDivergence {
                iteration,
                field,
                node,
            });
        }
        if let Some((field, node)) = prim_next.first_non_finite() {
            return Err(SimError::NumericalDivergence {
                iteration,
                field,
                node,
            });
        }

        Ok(StepResult {
            state: next,
            primitives: prim_next,
            residual: averaged.inf_norm(),
        })
    }
}
