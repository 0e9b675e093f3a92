//! Domain Layer - fuzzy membership core
//!
//! Contains ONLY the fuzzy-logic business rules, with no dependencies on:
//! - Rendering (terminal, charts)
//! - Configuration formats or file systems
//! - Logging infrastructure
//!
//! Entities: MembershipFunction, LinguisticVariable
//! Value Objects: Breakpoints
//! Business Rules: trapezoidal membership evaluation, max-rule aggregation

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export core domain types
pub use entities::{Curve, LinguisticVariable, MembershipFunction};
pub use errors::{DomainError, DomainResult};
pub use value_objects::Breakpoints;

/// Domain-specific type aliases
pub type MembershipDegree = f64;
pub type SamplePoint = i64;
