//! Error types for solver operations.

use nf_core::CoreError;
use thiserror::Error;

/// Errors encountered while setting up or advancing a nozzle flow run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid domain: {what}")]
    InvalidDomain { what: &'static str },

    #[error("Non-positive {field} at node {node}: {value}")]
    NonPositiveState {
        field: &'static str,
        node: usize,
        value: f64,
    },

    #[error("Numerical divergence in {field} at node {node} (iteration {iteration})")]
    NumericalDivergence {
        iteration: usize,
        field: &'static str,
        node: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidDomain { what } => SimError::InvalidDomain { what },
            CoreError::NonPositiveState { field, node, value } => SimError::NonPositiveState {
                field,
                node,
                value,
            },
        }
    }
}
