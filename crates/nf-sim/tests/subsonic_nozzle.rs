//! Integration test: startup transient through the converging-diverging
//! test nozzle, 700 explicit steps at CFL 0.5.
//!
//! Demonstrates:
//! - The averaged predictor-corrector update reaching a quasi-steady state
//! - Mass flow rho*A*v flattening across the interior (conservation check)
//! - Sonic throat conditions of the isentropic solution (p ~ 0.53, M ~ 1)
//! - Supersonic outflow in the divergent section
//! - Boundary extrapolation identities holding exactly on the final state

use nf_sim::{CaseConfig, InletEnergyVelocity, run_case};

#[test]
fn startup_transient_reaches_quasi_steady_state() {
    let case = CaseConfig::default();
    let sol = run_case(&case).expect("run failed");

    assert_eq!(sol.iterations, 700);
    assert_eq!(sol.x.len(), 61);

    // Simulated time accumulates dt every step; with these parameters the
    // clock lands near 7.4.
    assert!(sol.sim_time > 6.5 && sol.sim_time < 8.5, "sim_time = {}", sol.sim_time);
    assert!(sol.last_dt > 0.0);

    // State stays physical everywhere.
    sol.primitives
        .validate_positive()
        .expect("density/temperature must stay positive");

    // Mass flow is approximately uniform over the interior nodes.
    let mf = sol.mass_flow();
    let interior = &mf[1..mf.len() - 1];
    let mean = interior.iter().sum::<f64>() / interior.len() as f64;
    let min = interior.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = interior.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let spread = (max - min) / mean;
    assert!(
        spread < 2e-2,
        "mass flow spread {spread} exceeds tolerance (min {min}, max {max})"
    );
    // The steady mass flow settles a little below the startup constant.
    assert!((mean - 0.581).abs() < 0.01, "mean mass flow = {mean}");

    // Sonic throat: the isentropic solution has p ~ 0.528 and M = 1 at the
    // area minimum.
    let throat = sol
        .x
        .iter()
        .enumerate()
        .min_by(|a, b| {
            (a.1 - 1.5)
                .abs()
                .partial_cmp(&(b.1 - 1.5).abs())
                .expect("positions are finite")
        })
        .map(|(i, _)| i)
        .expect("grid is non-empty");
    let p_throat = sol.primitives.pressure[throat];
    let m_throat = sol.primitives.mach[throat];
    assert!((p_throat - 0.53).abs() < 0.02, "throat pressure = {p_throat}");
    assert!((m_throat - 1.0).abs() < 0.02, "throat Mach = {m_throat}");

    // Supersonic outflow past the throat.
    let n = sol.x.len();
    assert!(sol.primitives.mach[n - 1] > 1.0);

    // Inlet density is pinned to the reservoir value.
    assert!((sol.primitives.density[0] - 1.0).abs() < 1e-9);

    // Outlet linear-extrapolation identity holds exactly on the enforced
    // conservative state.
    let u = &sol.conserved;
    assert_eq!(u.u1[n - 1], 2.0 * u.u1[n - 2] - u.u1[n - 3]);
    assert_eq!(u.u2[n - 1], 2.0 * u.u2[n - 2] - u.u2[n - 3]);
    assert_eq!(u.u3[n - 1], 2.0 * u.u3[n - 2] - u.u3[n - 3]);
}

#[test]
fn inlet_orderings_converge_to_the_same_state() {
    let classic = run_case(&CaseConfig::default()).expect("default run failed");
    let fresh = run_case(&CaseConfig {
        inlet_mode: InletEnergyVelocity::Extrapolated,
        ..Default::default()
    })
    .expect("extrapolated run failed");

    // Both orderings converge to the same physical solution; the inlet
    // staleness only perturbs the transient.
    let throat = 30;
    let dp = (classic.primitives.pressure[throat] - fresh.primitives.pressure[throat]).abs();
    assert!(dp < 5e-3, "throat pressure differs by {dp}");
}

#[test]
fn steady_stop_is_additive_and_opt_in() {
    // A huge tolerance stops after the very first step; fixed-count
    // termination stays the default elsewhere.
    let sol = run_case(&CaseConfig {
        stop_when_steady: Some(1e9),
        ..Default::default()
    })
    .expect("run failed");
    assert_eq!(sol.iterations, 1);
}
