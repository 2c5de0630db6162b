//! Inlet/outlet boundary enforcement.

use crate::state::{Conserved, Primitives};
use nf_core::Real;

/// Which inlet velocity feeds the inlet energy variable `U3[0]`.
///
/// The classic ordering builds `U3[0]` from the velocity recovered during
/// the corrector phase, which at the inlet equals the previous step's
/// value. Both orderings are offered rather than silently refreshing the
/// value; the classic one is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InletEnergyVelocity {
    /// Use the corrector-phase recovered inlet velocity (default).
    #[default]
    CorrectorRecovery,
    /// Use the freshly extrapolated `U2[0]/U1[0]` instead.
    Extrapolated,
}

/// Overwrite inlet and outlet conservative variables after the averaged
/// interior update.
///
/// Inlet (node 0): `U1` is held at the reservoir value `rho[0]*A[0]`,
/// `U2` is extrapolated as `2*U2[1] - U2[2]`, and `U3` is rebuilt from the
/// held inlet temperature and the inlet velocity selected by `inlet_mode`.
/// Outlet (node n-1): all three variables are linearly extrapolated from
/// the two preceding nodes.
///
/// `prim` is the primitive state the caller recovered during the corrector
/// phase; its inlet entries supply the held reservoir values.
pub fn enforce_boundaries(
    u: &mut Conserved,
    prim: &Primitives,
    area: &[Real],
    gamma: Real,
    inlet_mode: InletEnergyVelocity,
) {
    let n = u.len();

    u.u1[0] = prim.density[0] * area[0];
    u.u2[0] = 2.0 * u.u2[1] - u.u2[2];
    let inlet_velocity = match inlet_mode {
        InletEnergyVelocity::CorrectorRecovery => prim.velocity[0],
        InletEnergyVelocity::Extrapolated => u.u2[0] / u.u1[0],
    };
    u.u3[0] = u.u1[0]
        * (prim.temperature[0] / (gamma - 1.0) + 0.5 * gamma * inlet_velocity * inlet_velocity);

    u.u1[n - 1] = 2.0 * u.u1[n - 2] - u.u1[n - 3];
    u.u2[n - 1] = 2.0 * u.u2[n - 2] - u.u2[n - 3];
    u.u3[n - 1] = 2.0 * u.u3[n - 2] - u.u3[n - 3];
}
