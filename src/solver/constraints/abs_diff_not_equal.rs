use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    solution::Assignment,
};

/// A binary constraint forbidding `|a - b| == difference`.
///
/// The classic use is n-queens: queens in rows `i` and `j` must not share a
/// diagonal, i.e. the absolute difference of their columns must not equal
/// `j - i`.
#[derive(Debug, Clone)]
pub struct AbsoluteDifferenceNotEqualConstraint {
    vars: [VariableId; 2],
    difference: i64,
}

impl AbsoluteDifferenceNotEqualConstraint {
    pub fn new(a: VariableId, b: VariableId, difference: i64) -> Self {
        Self {
            vars: [a, b],
            difference,
        }
    }
}

impl Constraint for AbsoluteDifferenceNotEqualConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match (assignment.get(self.vars[0]), assignment.get(self.vars[1])) {
            (Some(a), Some(b)) => (a - b).abs() != self.difference,
            _ => true,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AbsoluteDifferenceNotEqualConstraint".to_string(),
            description: format!(
                "|?{} - ?{}| != {}",
                self.vars[0], self.vars[1], self.difference
            ),
        }
    }
}
