use im::{HashMap, OrdSet};
use serde::{Deserialize, Serialize};

use crate::solver::engine::VariableId;

/// The current candidate value set for a single variable.
///
/// Ordered, so value iteration is always in ascending numeric order.
pub type Domain = OrdSet<i64>;

/// A map from each variable to its *current* candidate value set, distinct
/// from the variable's immutable static domain.
///
/// Because this is a persistent (immutable) data structure, a snapshot can be
/// cloned cheaply at every search node. Pruning produces a new snapshot;
/// parent-node snapshots are never mutated by child nodes.
pub type Domains = HashMap<VariableId, Domain>;

/// A mapping from variables to values: partial during search, complete at
/// success.
///
/// The search engine mutates its working assignment in place via
/// [`insert`](Assignment::insert) / [`remove`](Assignment::remove), while
/// consistency checks and propagation build throwaway probes with
/// [`with`](Assignment::with), which never touches the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    bindings: HashMap<VariableId, i64>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: VariableId) -> Option<i64> {
        self.bindings.get(&var).copied()
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.bindings.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn insert(&mut self, var: VariableId, value: i64) {
        self.bindings.insert(var, value);
    }

    pub fn remove(&mut self, var: VariableId) {
        self.bindings.remove(&var);
    }

    /// A new assignment equal to this one plus one extra binding. The
    /// original is left untouched, so probes built during propagation can
    /// never corrupt the caller's state.
    pub fn with(&self, var: VariableId, value: i64) -> Self {
        Self {
            bindings: self.bindings.update(var, value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i64)> + '_ {
        self.bindings.iter().map(|(var, value)| (*var, *value))
    }
}

impl FromIterator<(VariableId, i64)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (VariableId, i64)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
