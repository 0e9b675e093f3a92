//! Entities - core fuzzy-logic objects

pub mod linguistic_variable;
pub mod membership_function;

pub use linguistic_variable::LinguisticVariable;
pub use membership_function::{Curve, MembershipFunction};
