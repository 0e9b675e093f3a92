//! Value Objects - immutable domain data

pub mod breakpoints;

pub use breakpoints::Breakpoints;
