//! Primitive and conservative variable states.
//!
//! The two representations are a bijective pair given the area profile and
//! the ratio of specific heats: `U1 = rho*A`, `U2 = rho*A*v`,
//! `U3 = rho*A*(T/(gamma-1) + (gamma/2)*v^2)`.

use nf_core::{CoreResult, Real, ensure_positive};

/// Per-node primitive variables (normalized by reservoir values).
#[derive(Clone, Debug)]
pub struct Primitives {
    pub density: Vec<Real>,
    pub velocity: Vec<Real>,
    pub temperature: Vec<Real>,
    pub pressure: Vec<Real>,
    pub mach: Vec<Real>,
}

/// Per-node conservative variables (mass-area, momentum-area, energy-area).
#[derive(Clone, Debug)]
pub struct Conserved {
    pub u1: Vec<Real>,
    pub u2: Vec<Real>,
    pub u3: Vec<Real>,
}

impl Primitives {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Convert to conservative form. `area` must match the grid.
    pub fn to_conserved(&self, area: &[Real], gamma: Real) -> Conserved {
        let n = self.len();
        let mut u1 = Vec::with_capacity(n);
        let mut u2 = Vec::with_capacity(n);
        let mut u3 = Vec::with_capacity(n);
        for i in 0..n {
            let ra = self.density[i] * area[i];
            let v = self.velocity[i];
            u1.push(ra);
            u2.push(ra * v);
            u3.push(ra * (self.temperature[i] / (gamma - 1.0) + 0.5 * gamma * v * v));
        }
        Conserved { u1, u2, u3 }
    }

    /// Check the validity invariant: density and temperature positive at
    /// every node.
    pub fn validate_positive(&self) -> CoreResult<()> {
        for i in 0..self.len() {
            ensure_positive(self.density[i], "density", i)?;
            ensure_positive(self.temperature[i], "temperature", i)?;
        }
        Ok(())
    }

    /// First non-finite entry, as (field, node), scanning field-major.
    pub fn first_non_finite(&self) -> Option<(&'static str, usize)> {
        first_bad("density", &self.density)
            .or_else(|| first_bad("velocity", &self.velocity))
            .or_else(|| first_bad("temperature", &self.temperature))
            .or_else(|| first_bad("pressure", &self.pressure))
            .or_else(|| first_bad("mach", &self.mach))
    }
}

impl Conserved {
    pub fn len(&self) -> usize {
        self.u1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u1.is_empty()
    }

    /// Invert to primitive form: `rho = U1/A`, `v = U2/U1`,
    /// `T = (gamma-1)*(U3/U1 - (gamma/2)*v^2)`, `p = rho*T`,
    /// `M = v/sqrt(T)`.
    pub fn to_primitives(&self, area: &[Real], gamma: Real) -> Primitives {
        let n = self.len();
        let mut density = Vec::with_capacity(n);
        let mut velocity = Vec::with_capacity(n);
        let mut temperature = Vec::with_capacity(n);
        let mut pressure = Vec::with_capacity(n);
        let mut mach = Vec::with_capacity(n);
        for i in 0..n {
            let rho = self.u1[i] / area[i];
            let v = self.u2[i] / self.u1[i];
            let t = (gamma - 1.0) * (self.u3[i] / self.u1[i] - 0.5 * gamma * v * v);
            density.push(rho);
            velocity.push(v);
            temperature.push(t);
            pressure.push(rho * t);
            mach.push(v / t.sqrt());
        }
        Primitives {
            density,
            velocity,
            temperature,
            pressure,
            mach,
        }
    }

    /// First non-finite entry, as (field, node).
    pub fn first_non_finite(&self) -> Option<(&'static str, usize)> {
        first_bad("U1", &self.u1)
            .or_else(|| first_bad("U2", &self.u2))
            .or_else(|| first_bad("U3", &self.u3))
    }
}

fn first_bad(field: &'static str, values: &[Real]) -> Option<(&'static str, usize)> {
    values
        .iter()
        .position(|v| !v.is_finite())
        .map(|i| (field, i))
}
