//! Breakpoints - the four corners of a trapezoidal fuzzy set
//!
//! Enforces the ordering rule the membership evaluation relies on

use crate::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Ordered breakpoints `(a, b, c, d)` of a trapezoidal membership function
///
/// `a..b` is the rising edge, `b..c` the plateau, `c..d` the falling edge.
/// Construction guarantees `a <= b <= c <= d` and finiteness, which makes
/// both ramp divisions safe: a ramp branch is only reachable when its edge
/// has nonzero width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Breakpoints {
    /// Create breakpoints with business validation
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> DomainResult<Self> {
        for value in [a, b, c, d] {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteBreakpoint(value));
            }
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(DomainError::UnorderedBreakpoints { a, b, c, d });
        }
        Ok(Self { a, b, c, d })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// Lower bound of the support
    pub fn start(&self) -> f64 {
        self.a
    }

    /// Upper bound of the support
    pub fn end(&self) -> f64 {
        self.d
    }

    /// Width of the support
    pub fn span(&self) -> f64 {
        self.d - self.a
    }
}

impl TryFrom<[f64; 4]> for Breakpoints {
    type Error = DomainError;

    fn try_from(values: [f64; 4]) -> DomainResult<Self> {
        let [a, b, c, d] = values;
        Self::new(a, b, c, d)
    }
}
