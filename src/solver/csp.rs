use std::collections::HashMap;

use crate::{
    error::{ModelError, Result},
    solver::{
        constraint::Constraint,
        engine::{SolverEngine, VariableId},
        graph::ConstraintGraph,
        solution::{Assignment, Domains},
        variable::Variable,
    },
};

/// A constraint satisfaction problem: variables, constraints, and the
/// constraint graph derived from them.
///
/// Variables and constraints are fixed for the life of the problem; only the
/// transient [`Assignment`] and [`Domains`] values owned by a running solve
/// ever change.
#[derive(Debug)]
pub struct Csp {
    variables: Vec<Variable>,
    constraints: Vec<Box<dyn Constraint>>,
    graph: ConstraintGraph,
    names: HashMap<String, VariableId>,
}

impl Csp {
    /// Builds a problem from its variables and constraints.
    ///
    /// Fails with a configuration error if a variable has an empty domain,
    /// two variables share a name, or a constraint's scope references a
    /// variable outside the problem. These are caller mistakes caught before
    /// any search begins, unrelated to the "no solution exists" outcome,
    /// which [`solve`](Csp::solve) reports as `None`.
    pub fn new(variables: Vec<Variable>, constraints: Vec<Box<dyn Constraint>>) -> Result<Self> {
        let mut names = HashMap::with_capacity(variables.len());
        for (id, var) in variables.iter().enumerate() {
            if var.domain().is_empty() {
                return Err(ModelError::EmptyDomain {
                    name: var.name().to_string(),
                }
                .into());
            }
            if names.insert(var.name().to_string(), id).is_some() {
                return Err(ModelError::DuplicateName {
                    name: var.name().to_string(),
                }
                .into());
            }
        }

        let graph = ConstraintGraph::new(&variables, &constraints)?;

        Ok(Self {
            variables,
            constraints,
            graph,
            names,
        })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// The id a variable was assigned at construction, by name.
    pub fn variable_id(&self, name: &str) -> Option<VariableId> {
        self.names.get(name).copied()
    }

    /// A fresh domains map holding every variable's full static domain.
    pub fn initial_domains(&self) -> Domains {
        self.variables
            .iter()
            .enumerate()
            .map(|(id, var)| (id, var.domain().clone()))
            .collect()
    }

    /// Whether tentatively assigning `value` to `var` violates any
    /// constraint touching `var`, given the bindings already in
    /// `assignment`. Only constraints fully determined by those bindings
    /// plus the tentative one can reject it.
    pub fn is_consistent(&self, var: VariableId, value: i64, assignment: &Assignment) -> bool {
        let probe = assignment.with(var, value);
        self.graph
            .constraints_on(var)
            .iter()
            .all(|&constraint_id| self.constraints[constraint_id].is_satisfied(&probe))
    }

    /// Solves the problem: one AC-3 pass over the static domains, then
    /// backtracking search with MRV ordering and forward checking.
    ///
    /// Returns a complete satisfying assignment, or `None` if none exists.
    pub fn solve(&self) -> Option<Assignment> {
        SolverEngine::default().solve(self).0.into_assignment()
    }
}
