//! CFL-bounded explicit time-step selection.

use crate::error::{SimError, SimResult};
use crate::state::Primitives;
use nf_core::Real;

/// Global step size `dt = cfl * dx / max_i(sqrt(T[i]) + v[i])`.
///
/// One uniform dt is shared by every node. The reduction is a sequential
/// left-to-right fold over the nodes. A negative temperature makes the
/// local sound speed undefined and fails with `NumericalDivergence`.
pub fn stable_dt(prim: &Primitives, dx: Real, cfl: Real, iteration: usize) -> SimResult<Real> {
    let mut fastest: Real = 0.0;
    for (i, (&t, &v)) in prim.temperature.iter().zip(&prim.velocity).enumerate() {
        if t < 0.0 {
            return Err(SimError::NumericalDivergence {
                iteration,
                field: "temperature",
                node: i,
            });
        }
        let speed = t.sqrt() + v;
        if speed > fastest {
            fastest = speed;
        }
    }
    let dt = cfl * dx / fastest;
    if !dt.is_finite() {
        return Err(SimError::NumericalDivergence {
            iteration,
            field: "dt",
            node: 0,
        });
    }
    Ok(dt)
}
