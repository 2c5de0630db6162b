//! Flux vector evaluation for the conservative Euler equations.

use crate::state::Conserved;
use nf_core::Real;

/// Per-node flux components of the quasi-1D Euler system.
#[derive(Clone, Debug)]
pub struct Flux {
    pub f1: Vec<Real>,
    pub f2: Vec<Real>,
    pub f3: Vec<Real>,
}

/// Map a conservative state to its flux vector.
///
/// `F1 = U2`,
/// `F2 = U2^2/U1 + ((gamma-1)/gamma)*(U3 - (gamma/2)*U2^2/U1)`,
/// `F3 = gamma*U2*U3/U1 - (gamma*(gamma-1)/2)*U2^3/U1^2`.
///
/// Requires `U1 != 0` everywhere, which holds whenever density and area are
/// positive.
pub fn flux_vector(u: &Conserved, gamma: Real) -> Flux {
    let n = u.len();
    let mut f1 = Vec::with_capacity(n);
    let mut f2 = Vec::with_capacity(n);
    let mut f3 = Vec::with_capacity(n);
    for i in 0..n {
        let momentum_flux = u.u2[i] * u.u2[i] / u.u1[i];
        f1.push(u.u2[i]);
        f2.push(momentum_flux + (gamma - 1.0) / gamma * (u.u3[i] - 0.5 * gamma * momentum_flux));
        f3.push(
            gamma * u.u2[i] * u.u3[i] / u.u1[i]
                - 0.5 * gamma * (gamma - 1.0) * momentum_flux * u.u2[i] / u.u1[i],
        );
    }
    Flux { f1, f2, f3 }
}
