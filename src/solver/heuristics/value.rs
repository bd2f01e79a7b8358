use crate::solver::solution::Domain;

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic {
    /// Given the branching variable's current domain, returns an iterator
    /// over its values in the order they should be tried.
    fn order_values<'a>(&self, domain: &'a Domain) -> Box<dyn Iterator<Item = i64> + 'a>;
}

/// Tries candidate values in ascending numeric order.
///
/// This is the engine's default: deterministic, not informed by
/// constrainedness.
pub struct AscendingValueHeuristic;

impl ValueOrderingHeuristic for AscendingValueHeuristic {
    fn order_values<'a>(&self, domain: &'a Domain) -> Box<dyn Iterator<Item = i64> + 'a> {
        Box::new(domain.iter().copied())
    }
}

/// Tries candidate values in descending numeric order.
pub struct DescendingValueHeuristic;

impl ValueOrderingHeuristic for DescendingValueHeuristic {
    fn order_values<'a>(&self, domain: &'a Domain) -> Box<dyn Iterator<Item = i64> + 'a> {
        let mut values: Vec<i64> = domain.iter().copied().collect();
        values.reverse();
        Box::new(values.into_iter())
    }
}
