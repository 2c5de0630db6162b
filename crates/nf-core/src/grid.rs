//! Uniform one-dimensional axial grid.

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// Ordered nodes spanning `[0, length]` with uniform spacing.
///
/// Immutable after construction. The interior stencils downstream need at
/// least one interior node, so construction requires `n >= 3`.
#[derive(Clone, Debug)]
pub struct Grid {
    length: Real,
    dx: Real,
    x: Vec<Real>,
}

impl Grid {
    /// Build a grid over `[0, length]` with spacing `dx`.
    ///
    /// The node count is `round(length/dx) + 1`; rounding (rather than
    /// truncation) keeps exact-ratio inputs like `3.0 / 0.05` stable across
    /// platforms.
    pub fn new(length: Real, dx: Real) -> CoreResult<Self> {
        if !(length > 0.0) {
            return Err(CoreError::InvalidDomain {
                what: "length must be positive",
            });
        }
        if !(dx > 0.0) {
            return Err(CoreError::InvalidDomain {
                what: "dx must be positive",
            });
        }
        let n = (length / dx).round() as usize + 1;
        if n < 3 {
            return Err(CoreError::InvalidDomain {
                what: "grid needs at least 3 nodes (one interior node)",
            });
        }
        let last = (n - 1) as Real;
        let x = (0..n).map(|i| length * i as Real / last).collect();
        Ok(Self { length, dx, x })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn length(&self) -> Real {
        self.length
    }

    /// The configured spacing, as used by downstream differencing.
    ///
    /// When `length/dx` is not an integer the node count is rounded and
    /// nodes sit at `length*i/(n-1)`, so the actual node spacing differs
    /// slightly from this value. The classic formulation differences with
    /// the configured spacing regardless; callers wanting the exact node
    /// spacing should take it from `positions()`.
    pub fn dx(&self) -> Real {
        self.dx
    }

    /// Node positions, ascending.
    pub fn positions(&self) -> &[Real] {
        &self.x
    }
}
