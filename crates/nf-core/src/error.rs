use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid domain: {what}")]
    InvalidDomain { what: &'static str },

    #[error("Non-positive {field} at node {node}: {value}")]
    NonPositiveState {
        field: &'static str,
        node: usize,
        value: f64,
    },
}
