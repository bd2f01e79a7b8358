//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    csp::Csp,
    engine::VariableId,
    solution::{Assignment, Domains},
};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned variable the
/// solver should branch on next. A good heuristic can dramatically improve
/// solver performance.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to be assigned.
    ///
    /// Returns `None` only when every variable is already assigned.
    fn select_variable(
        &self,
        csp: &Csp,
        assignment: &Assignment,
        domains: &Domains,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable in the
/// problem's construction order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        csp: &Csp,
        assignment: &Assignment,
        _domains: &Domains,
    ) -> Option<VariableId> {
        (0..csp.variables().len()).find(|&var| !assignment.contains(var))
    }
}

/// A heuristic that selects the variable with the Minimum Remaining Values
/// (MRV) in its current domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, tackling the most difficult parts of the problem early. Ties
/// are broken by construction order, so runs are reproducible.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        csp: &Csp,
        assignment: &Assignment,
        domains: &Domains,
    ) -> Option<VariableId> {
        (0..csp.variables().len())
            .filter(|&var| !assignment.contains(var))
            .min_by_key(|&var| (domains.get(&var).unwrap().len(), var))
    }
}

/// A heuristic that selects an unassigned variable at random.
///
/// Useful for stress-testing the engine's state restoration: any selection
/// order must produce a correct result, just not always the same one.
pub struct RandomVariableHeuristic;

impl VariableSelectionHeuristic for RandomVariableHeuristic {
    fn select_variable(
        &self,
        csp: &Csp,
        assignment: &Assignment,
        _domains: &Domains,
    ) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        (0..csp.variables().len())
            .filter(|&var| !assignment.contains(var))
            .choose(&mut rand::thread_rng())
    }
}
