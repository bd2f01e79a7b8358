use std::hash::{Hash, Hasher};

use im::OrdSet;

/// A named variable with a finite, immutable domain of integer values.
///
/// The domain given at construction is the variable's *static* domain: it is
/// never mutated afterwards. All pruning performed by the solver operates on
/// derived domain snapshots (see [`Domains`]), never on the variable itself.
///
/// Identity is by name only: two variables with the same name are equal and
/// hash identically, regardless of their domains.
///
/// [`Domains`]: crate::solver::solution::Domains
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: OrdSet<i64>,
}

impl Variable {
    /// Creates a variable from a name and an iterable of domain values.
    /// Duplicate values are collapsed; value order is irrelevant.
    pub fn new(name: impl Into<String>, domain: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The static domain, iterated in ascending order.
    pub fn domain(&self) -> &OrdSet<i64> {
        &self.domain
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
