//! Quasi-one-dimensional nozzle flow solver for nozzleflow.
//!
//! Provides:
//! - Conservative/primitive variable states and their bijective transform
//! - Piecewise-linear initial profile generation
//! - MacCormack predictor-corrector time integration with area source term
//! - CFL-bounded explicit time-step selection
//! - Inlet/outlet boundary enforcement with extrapolation rules
//! - Fixed-iteration run loop with an optional steady-stop criterion

pub mod boundary;
pub mod error;
pub mod flux;
pub mod maccormack;
pub mod profile;
pub mod sim;
pub mod source;
pub mod state;
pub mod timestep;

// Re-exports for public API
pub use boundary::{InletEnergyVelocity, enforce_boundaries};
pub use error::{SimError, SimResult};
pub use flux::{Flux, flux_vector};
pub use maccormack::{MacCormack, StepResult};
pub use profile::{LinearZone, PiecewiseProfile};
pub use sim::{CaseConfig, Solution, run_case};
pub use source::Phase;
pub use state::{Conserved, Primitives};
pub use timestep::stable_dt;
