use std::collections::HashMap;

use crate::solver::{
    csp::Csp,
    heuristics::{
        value::{AscendingValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    solution::{Assignment, Domains},
};

/// Index of a variable in a problem's construction-order variable list.
pub type VariableId = usize;
/// Index of a constraint in a problem's construction-order constraint list.
pub type ConstraintId = usize;

#[derive(Debug, Clone, Default)]
pub struct PerConstraintStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Counters accumulated over a single solve.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub forward_checks: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The result of a search.
///
/// `Unsatisfiable` is a correctly-determined negative result, not an error;
/// `Aborted` is reported only when a node limit was configured and reached,
/// and means the search proved nothing either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Satisfied(Assignment),
    Unsatisfiable,
    Aborted,
}

impl SearchOutcome {
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SearchOutcome::Satisfied(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, SearchOutcome::Satisfied(_))
    }
}

/// Holds one tentative binding and releases it when dropped.
///
/// Every exit path out of a search node (failed forward check, exhausted
/// recursion, early unwind on success) runs the drop, so a stale binding
/// can never leak into a sibling branch.
struct Binding<'a> {
    assignment: &'a mut Assignment,
    var: VariableId,
}

impl<'a> Binding<'a> {
    fn bind(assignment: &'a mut Assignment, var: VariableId, value: i64) -> Self {
        assignment.insert(var, value);
        Self { assignment, var }
    }

    fn assignment(&mut self) -> &mut Assignment {
        self.assignment
    }
}

impl Drop for Binding<'_> {
    fn drop(&mut self) {
        self.assignment.remove(self.var);
    }
}

/// The backtracking search engine.
///
/// Runs one AC-3 pass over the problem's static domains, then a depth-first
/// search: pick an unassigned variable (MRV by default), try its candidate
/// values in order (ascending by default), checking consistency and forward
/// checking after each tentative binding. Search state is `(assignment,
/// domains)`; each node hands its children a fresh pruned domains snapshot
/// and owns its tentative binding through a scoped guard.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    node_limit: Option<u64>,
}

impl SolverEngine {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            node_limit: None,
        }
    }

    /// Caps the number of search nodes visited. When the cap is hit the
    /// search stops with [`SearchOutcome::Aborted`] instead of running to
    /// exhaustion.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Attempts to solve the given problem.
    pub fn solve(&self, csp: &Csp) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();

        let Some(domains) = csp.ac3_traced(None, None, &mut stats) else {
            return (SearchOutcome::Unsatisfiable, stats);
        };

        let mut assignment = Assignment::new();
        let outcome = self.search(csp, &mut assignment, &domains, &mut stats);
        (outcome, stats)
    }

    fn search(
        &self,
        csp: &Csp,
        assignment: &mut Assignment,
        domains: &Domains,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        stats.nodes_visited += 1;
        if let Some(limit) = self.node_limit {
            if stats.nodes_visited > limit {
                return SearchOutcome::Aborted;
            }
        }

        if assignment.len() == csp.variables().len() {
            return SearchOutcome::Satisfied(assignment.clone());
        }

        let Some(var) = self
            .variable_heuristic
            .select_variable(csp, assignment, domains)
        else {
            // Unreachable while the assignment is incomplete.
            return SearchOutcome::Unsatisfiable;
        };

        let domain = domains.get(&var).unwrap().clone();
        for value in self.value_heuristic.order_values(&domain) {
            if !csp.is_consistent(var, value, assignment) {
                stats.backtracks += 1;
                continue;
            }

            let mut binding = Binding::bind(assignment, var, value);

            stats.forward_checks += 1;
            if let Some(pruned) = csp.forward_check(var, binding.assignment(), domains) {
                match self.search(csp, binding.assignment(), &pruned, stats) {
                    SearchOutcome::Satisfied(solution) => return SearchOutcome::Satisfied(solution),
                    SearchOutcome::Aborted => return SearchOutcome::Aborted,
                    SearchOutcome::Unsatisfiable => {}
                }
            }

            stats.backtracks += 1;
            // `binding` drops here, removing the tentative assignment.
        }

        SearchOutcome::Unsatisfiable
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::Constraint, constraints::all_different::AllDifferentConstraint,
        variable::Variable,
    };

    #[test]
    fn binding_is_released_on_drop() {
        let mut assignment = Assignment::new();
        {
            let mut binding = Binding::bind(&mut assignment, 3, 9);
            assert_eq!(binding.assignment().get(3), Some(9));
        }
        assert!(assignment.is_empty());
    }

    fn pigeonhole() -> Csp {
        let variables = vec![
            Variable::new("x1", [1, 2]),
            Variable::new("x2", [1, 2]),
            Variable::new("x3", [1, 2]),
        ];
        let constraints: Vec<Box<dyn Constraint>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1, 2]))];
        Csp::new(variables, constraints).unwrap()
    }

    #[test]
    fn exhausted_search_reports_unsatisfiable() {
        let (outcome, stats) = SolverEngine::default().solve(&pigeonhole());
        assert_eq!(outcome, SearchOutcome::Unsatisfiable);
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn node_limit_aborts_instead_of_claiming_unsatisfiability() {
        let engine = SolverEngine::default().with_node_limit(2);
        let (outcome, stats) = engine.solve(&pigeonhole());
        assert_eq!(outcome, SearchOutcome::Aborted);
        assert_eq!(stats.nodes_visited, 3);
    }

    #[test]
    fn solved_outcome_converts_to_an_assignment() {
        let variables = vec![Variable::new("x1", [1, 2]), Variable::new("x2", [1, 2])];
        let constraints: Vec<Box<dyn Constraint>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1]))];
        let csp = Csp::new(variables, constraints).unwrap();

        let (outcome, _stats) = SolverEngine::default().solve(&csp);
        assert!(outcome.is_satisfied());
        let solution = outcome.into_assignment().unwrap();
        assert_eq!(solution.get(0), Some(1));
        assert_eq!(solution.get(1), Some(2));
    }
}
