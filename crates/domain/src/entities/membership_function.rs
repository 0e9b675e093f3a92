//! MembershipFunction - one trapezoidal fuzzy set
//!
//! Pure evaluation of membership degrees, no side effects

use crate::value_objects::Breakpoints;
use crate::MembershipDegree;
use serde::{Deserialize, Serialize};

/// A named trapezoidal fuzzy set over a scalar domain
///
/// Immutable after construction. Evaluation is a pure function of the
/// breakpoints and the input point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipFunction {
    label: String,
    breakpoints: Breakpoints,
}

/// Materialized `(x, y)` samples of one membership function, for rendering
///
/// Curve points are the function's own values; they are never clipped to
/// the aggregated maximum of the variable that owns the function.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl MembershipFunction {
    pub fn new(label: impl Into<String>, breakpoints: Breakpoints) -> Self {
        Self {
            label: label.into(),
            breakpoints,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Lower bound of this function's support
    pub fn start(&self) -> f64 {
        self.breakpoints.start()
    }

    /// Upper bound of this function's support
    pub fn end(&self) -> f64 {
        self.breakpoints.end()
    }

    /// Width of this function's support
    pub fn span(&self) -> f64 {
        self.breakpoints.span()
    }

    /// Membership degree of `x` in this fuzzy set, in `[0, 1]`
    ///
    /// Rising edge `[a, b)` ramps up linearly, plateau `[b, c]` holds 1,
    /// falling edge `(c, d]` ramps down linearly, everything outside the
    /// support is 0. With a degenerate edge (`a == b` or `c == d`) the
    /// corresponding ramp branch is unreachable, so no division by zero.
    pub fn membership(&self, x: f64) -> MembershipDegree {
        let (a, b, c, d) = (
            self.breakpoints.a(),
            self.breakpoints.b(),
            self.breakpoints.c(),
            self.breakpoints.d(),
        );

        if x < a || x > d {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else if x <= c {
            1.0
        } else {
            (d - x) / (d - c)
        }
    }

    /// Sample sequence over this function's support: `span` points spaced
    /// by 1 domain unit starting at the lower bound, upper bound excluded
    pub fn sample_points(&self) -> impl Iterator<Item = f64> {
        let start = self.start();
        let count = self.span().ceil() as usize;
        (0..count).map(move |step| start + step as f64)
    }

    /// Materialized render curve over the sample sequence
    pub fn curve(&self) -> Curve {
        Curve {
            label: self.label.clone(),
            points: self
                .sample_points()
                .map(|x| (x, self.membership(x)))
                .collect(),
        }
    }
}
