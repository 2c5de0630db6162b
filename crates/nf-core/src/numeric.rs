use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Fail with `NonPositiveState` unless `v > 0`.
pub fn ensure_positive(v: Real, field: &'static str, node: usize) -> Result<Real, CoreError> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositiveState {
            field,
            node,
            value: v,
        })
    }
}
