use crate::solver::{engine::VariableId, solution::Assignment};

/// A human-readable description of a constraint, used in error messages and
/// the per-constraint stats table.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over an ordered scope of variables, evaluable against partial
/// assignments.
///
/// # Monotonicity contract
///
/// Every implementation must be *monotone* over partial assignments: if
/// `is_satisfied` returns `false` for some partial assignment, it must also
/// return `false` for every extension of that assignment. Equivalently,
/// binding more scope variables can only turn a `true` result into `false`,
/// never the reverse. The propagation machinery relies on this to treat
/// "no currently-assigned conflict" as provisional consistency; a
/// non-monotone implementation can make AC-3 and forward checking unsound.
pub trait Constraint: std::fmt::Debug {
    /// The constraint's scope. Order is significant: it fixes the iteration
    /// order of neighbours during propagation, keeping runs reproducible.
    fn variables(&self) -> &[VariableId];

    /// Whether the constraint holds under the given (possibly partial)
    /// assignment. Scope variables absent from the assignment impose no
    /// requirement yet.
    fn is_satisfied(&self, assignment: &Assignment) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;

    /// All scope variables except `excluding`, in scope order.
    fn related_variables(&self, excluding: VariableId) -> Vec<VariableId> {
        self.variables()
            .iter()
            .copied()
            .filter(|&var| var != excluding)
            .collect()
    }
}
