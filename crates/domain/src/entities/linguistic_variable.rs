//! LinguisticVariable - a named domain partitioned into fuzzy sets
//!
//! Owns the membership functions sharing one domain and the aggregated
//! point table built from them

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::entities::membership_function::{Curve, MembershipFunction};
use crate::errors::{DomainError, DomainResult};
use crate::{MembershipDegree, SamplePoint};
use serde::{Deserialize, Serialize};

/// A linguistic variable: a titled domain interval with overlapping
/// trapezoidal categories and the per-point maximum-membership table
///
/// The table is rebuilt from scratch by [`aggregate`](Self::aggregate) and
/// only read afterwards; lookups never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinguisticVariable {
    title: String,
    domain_start: f64,
    domain_end: f64,
    functions: Vec<MembershipFunction>,
    table: BTreeMap<SamplePoint, MembershipDegree>,
}

impl LinguisticVariable {
    /// Create an empty variable over `[domain_start, domain_end]`
    pub fn new(
        title: impl Into<String>,
        domain_start: f64,
        domain_end: f64,
    ) -> DomainResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start >= domain_end {
            return Err(DomainError::InvalidDomainBounds {
                start: domain_start,
                end: domain_end,
            });
        }
        Ok(Self {
            title: title.into(),
            domain_start,
            domain_end,
            functions: Vec::new(),
            table: BTreeMap::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn domain_start(&self) -> f64 {
        self.domain_start
    }

    pub fn domain_end(&self) -> f64 {
        self.domain_end
    }

    /// Add a membership function. Duplicate labels are allowed; every
    /// function participates in aggregation regardless of its label.
    pub fn add_function(&mut self, function: MembershipFunction) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[MembershipFunction] {
        &self.functions
    }

    /// Rebuild the aggregated point table
    ///
    /// Samples every function over its own support (step 1, upper bound
    /// excluded) and keeps the point-wise maximum across functions. Ties
    /// overwrite, which is a no-op value-wise. The result is independent
    /// of function order and of how often aggregation runs; the fresh
    /// table replaces the old one in a single assignment.
    pub fn aggregate(&mut self) {
        let mut table: BTreeMap<SamplePoint, MembershipDegree> = BTreeMap::new();

        for function in &self.functions {
            for x in function.sample_points() {
                let new_y = function.membership(x);

                match table.entry(x.round() as SamplePoint) {
                    Entry::Occupied(mut slot) => {
                        if *slot.get() <= new_y {
                            slot.insert(new_y);
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(new_y);
                    }
                }
            }
        }

        self.table = table;
    }

    /// The aggregated point table; empty until [`aggregate`](Self::aggregate)
    pub fn table(&self) -> &BTreeMap<SamplePoint, MembershipDegree> {
        &self.table
    }

    /// Aggregated membership at `point`, or `None` if the point was never
    /// sampled (outside every support, or off the unit sampling grid)
    pub fn lookup(&self, point: f64) -> Option<MembershipDegree> {
        if !point.is_finite() || point.fract() != 0.0 {
            return None;
        }
        self.table.get(&(point as SamplePoint)).copied()
    }

    /// Per-function render curves, unclipped by the aggregate
    pub fn curves(&self) -> Vec<Curve> {
        self.functions.iter().map(MembershipFunction::curve).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Breakpoints;

    fn function(label: &str, breakpoints: [f64; 4]) -> MembershipFunction {
        MembershipFunction::new(label, Breakpoints::try_from(breakpoints).unwrap())
    }

    fn water_temperature() -> LinguisticVariable {
        let mut variable = LinguisticVariable::new("Water Temperature", 40.0, 105.0).unwrap();
        variable.add_function(function("Low temperature", [39.0, 40.0, 57.0, 65.0]));
        variable.add_function(function("Medium temperature", [55.0, 60.0, 79.0, 83.0]));
        variable.add_function(function("High temperature", [78.0, 83.0, 105.0, 106.0]));
        variable
    }

    #[test]
    fn test_invalid_domain_bounds_rejected() {
        assert!(LinguisticVariable::new("x", 10.0, 10.0).is_err());
        assert!(LinguisticVariable::new("x", 10.0, 5.0).is_err());
        assert!(LinguisticVariable::new("x", f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_table_empty_before_aggregation() {
        let variable = water_temperature();
        assert!(variable.table().is_empty());
        assert_eq!(variable.lookup(60.0), None);
    }

    #[test]
    fn test_aggregation_takes_pointwise_maximum() {
        let mut variable = water_temperature();
        variable.aggregate();

        // Low gives 0.625 at 60, Medium reaches its plateau there
        assert_eq!(variable.lookup(60.0), Some(1.0));

        // Only Low covers 45
        assert_eq!(variable.lookup(45.0), Some(1.0));

        // Overlap of Low's falling edge and Medium's rising edge at 58:
        // max((65-58)/8, (58-55)/5) = max(0.875, 0.6)
        assert_eq!(variable.lookup(58.0), Some(0.875));
    }

    #[test]
    fn test_aggregation_against_direct_maximum() {
        let mut variable = water_temperature();
        variable.aggregate();

        for (&point, &value) in variable.table() {
            let expected = variable
                .functions()
                .iter()
                .map(|f| f.membership(point as f64))
                .fold(0.0_f64, f64::max);
            assert_eq!(value, expected, "mismatch at point {point}");
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut variable = water_temperature();
        variable.aggregate();
        let first = variable.table().clone();
        variable.aggregate();
        assert_eq!(&first, variable.table());
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let mut forward = LinguisticVariable::new("v", 0.0, 100.0).unwrap();
        forward.add_function(function("one", [0.0, 10.0, 20.0, 30.0]));
        forward.add_function(function("two", [15.0, 25.0, 35.0, 45.0]));
        forward.aggregate();

        let mut reversed = LinguisticVariable::new("v", 0.0, 100.0).unwrap();
        reversed.add_function(function("two", [15.0, 25.0, 35.0, 45.0]));
        reversed.add_function(function("one", [0.0, 10.0, 20.0, 30.0]));
        reversed.aggregate();

        assert_eq!(forward.table(), reversed.table());
    }

    #[test]
    fn test_lookup_miss_outside_sampled_support() {
        let mut variable = water_temperature();
        variable.aggregate();
        assert_eq!(variable.lookup(200.0), None);
        assert_eq!(variable.lookup(38.0), None);
    }

    #[test]
    fn test_lookup_rejects_off_grid_points() {
        let mut variable = water_temperature();
        variable.aggregate();
        assert_eq!(variable.lookup(60.5), None);
        assert_eq!(variable.lookup(f64::NAN), None);
    }

    #[test]
    fn test_duplicate_labels_both_aggregate() {
        let mut variable = LinguisticVariable::new("v", 0.0, 50.0).unwrap();
        variable.add_function(function("same", [0.0, 5.0, 10.0, 15.0]));
        variable.add_function(function("same", [10.0, 20.0, 30.0, 40.0]));
        variable.aggregate();

        // Second "same" is on its rising edge at 12, first on its falling edge
        let expected = ((15.0 - 12.0) / 5.0_f64).max((12.0 - 10.0) / 10.0);
        assert_eq!(variable.lookup(12.0), Some(expected));
    }

    #[test]
    fn test_curves_cover_all_functions() {
        let variable = water_temperature();
        let curves = variable.curves();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[0].label, "Low temperature");
        // Curves exist before aggregation; they do not depend on the table
        assert!(curves.iter().all(|c| !c.points.is_empty()));
    }
}
