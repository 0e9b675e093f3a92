//! Domain Errors - fuzzy business-rule violations

use thiserror::Error;

/// Domain-specific errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Business validation: trapezoid breakpoints must be sorted ascending
    #[error("Breakpoints must satisfy a <= b <= c <= d, got ({a}, {b}, {c}, {d})")]
    UnorderedBreakpoints { a: f64, b: f64, c: f64, d: f64 },

    /// Business validation: breakpoints must be finite reals
    #[error("Breakpoint is not a finite number: {0}")]
    NonFiniteBreakpoint(f64),

    /// Business validation: a variable domain must be a non-empty interval
    #[error("Invalid domain bounds: start {start} must be less than end {end}")]
    InvalidDomainBounds { start: f64, end: f64 },

    /// Business validation: no variable with the requested title
    #[error("Unknown linguistic variable: {0}")]
    VariableNotFound(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
