use std::collections::HashSet;

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    solution::Assignment,
};

/// A constraint that ensures all variables in a given set have unique values.
///
/// This is the workhorse global constraint of grid puzzles like Sudoku. It is
/// satisfied iff all *currently assigned* scope variables hold pairwise
/// distinct values; unassigned members impose no requirement yet, which makes
/// it monotone over partial assignments.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    vars: Vec<VariableId>,
}

impl AllDifferentConstraint {
    /// Creates a new `AllDifferentConstraint` over the given scope.
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }
}

impl Constraint for AllDifferentConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment) -> bool {
        let mut seen = HashSet::new();
        self.vars
            .iter()
            .filter_map(|&var| assignment.get(var))
            .all(|value| seen.insert(value))
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }
}
