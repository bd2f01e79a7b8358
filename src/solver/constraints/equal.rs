use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    solution::Assignment,
};

/// A binary constraint requiring its two variables to take the same value.
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    vars: [VariableId; 2],
}

impl EqualConstraint {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self { vars: [a, b] }
    }
}

impl Constraint for EqualConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match (assignment.get(self.vars[0]), assignment.get(self.vars[1])) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "EqualConstraint".to_string(),
            description: format!("?{} == ?{}", self.vars[0], self.vars[1]),
        }
    }
}
