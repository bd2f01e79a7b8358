use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    solution::Assignment,
};

/// A binary constraint requiring its two variables to take different values.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint {
    vars: [VariableId; 2],
}

impl NotEqualConstraint {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self { vars: [a, b] }
    }
}

impl Constraint for NotEqualConstraint {
    fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match (assignment.get(self.vars[0]), assignment.get(self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{} != ?{}", self.vars[0], self.vars[1]),
        }
    }
}
