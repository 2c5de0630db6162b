//! nf-core: stable foundation for nozzleflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - grid (uniform 1-D axial grid)
//! - nozzle (converging-diverging area profile)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod nozzle;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use nozzle::Nozzle;
pub use numeric::*;
