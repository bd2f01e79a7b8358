use crate::{
    error::ModelError,
    solver::{
        constraint::Constraint,
        engine::{ConstraintId, VariableId},
        variable::Variable,
    },
};

/// The per-variable constraint adjacency: for each variable, the ordered
/// list of constraints whose scope contains it.
///
/// Built once at problem construction and read-only thereafter. Every
/// variable has an entry, even one referenced by no constraint.
#[derive(Debug, Default)]
pub struct ConstraintGraph {
    adjacency: Vec<Vec<ConstraintId>>,
}

impl ConstraintGraph {
    /// Derives the adjacency from the problem's variables and constraints.
    ///
    /// Fails fast if a constraint's scope references a variable id outside
    /// the problem's variable set; that is a configuration error, not a
    /// search-time failure.
    pub fn new(
        variables: &[Variable],
        constraints: &[Box<dyn Constraint>],
    ) -> Result<Self, ModelError> {
        let mut adjacency = vec![Vec::new(); variables.len()];
        for (constraint_id, constraint) in constraints.iter().enumerate() {
            for &var in constraint.variables() {
                if var >= variables.len() {
                    return Err(ModelError::UnknownVariable {
                        constraint: constraint.descriptor().description,
                        variable: var,
                    });
                }
                adjacency[var].push(constraint_id);
            }
        }
        Ok(Self { adjacency })
    }

    /// The constraints touching `var`, in constraint construction order.
    pub fn constraints_on(&self, var: VariableId) -> &[ConstraintId] {
        &self.adjacency[var]
    }
}
