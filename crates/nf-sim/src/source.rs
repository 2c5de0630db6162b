//! Area-divergence pressure source term.

use nf_core::Real;

/// Which half of the MacCormack step is being evaluated.
///
/// The predictor uses forward area differences, the corrector backward
/// ones. The pairing is what makes the averaged scheme second order in
/// space; it must never be collapsed into a central difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Predictor,
    Corrector,
}

/// Source term `J = (1/gamma)*rho*T*dA/dx` at interior node `j`, with the
/// one-sided area difference selected by `phase`.
pub fn area_source(
    phase: Phase,
    j: usize,
    density: &[Real],
    temperature: &[Real],
    area: &[Real],
    gamma: Real,
    dx: Real,
) -> Real {
    let da = match phase {
        Phase::Predictor => area[j + 1] - area[j],
        Phase::Corrector => area[j] - area[j - 1],
    };
    density[j] * temperature[j] * da / (gamma * dx)
}
