//! Trellis is a generic, reusable constraint satisfaction problem (CSP) solver.
//!
//! A problem is described by a set of [`Variable`]s, each with a finite domain
//! of integer values, and a set of [`Constraint`]s over subsets of those
//! variables. The solver finds a complete assignment of values to variables
//! satisfying every constraint, or proves that none exists.
//!
//! # Core Concepts
//!
//! - **[`Variable`]**: a named variable with an immutable static domain.
//! - **[`Constraint`]**: a trait representing a rule over an ordered scope of
//!   variables, evaluable against partial assignments. The crate provides a
//!   standard library of constraints like [`AllDifferentConstraint`] and
//!   [`NotEqualConstraint`].
//! - **[`Csp`]**: the problem itself: variables, constraints, and the derived
//!   constraint graph. [`Csp::solve`] runs AC-3 propagation followed by a
//!   backtracking search with MRV variable ordering and forward checking.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving for `?a != ?b` where `?a` can be `1` or `2`, and `?b` can only be
//! `1`. The solver deduces that `?a` must be `2`.
//!
//! ```
//! use trellis::solver::constraint::Constraint;
//! use trellis::solver::constraints::not_equal::NotEqualConstraint;
//! use trellis::solver::csp::Csp;
//! use trellis::solver::variable::Variable;
//!
//! let a = Variable::new("a", [1, 2]);
//! let b = Variable::new("b", [1]);
//!
//! // Constraints reference variables by their construction-order index.
//! let constraints: Vec<Box<dyn Constraint>> = vec![Box::new(NotEqualConstraint::new(0, 1))];
//!
//! let csp = Csp::new(vec![a, b], constraints).unwrap();
//! let solution = csp.solve().unwrap();
//!
//! assert_eq!(solution.get(0), Some(2));
//! assert_eq!(solution.get(1), Some(1));
//! ```
//!
//! [`Variable`]: solver::variable::Variable
//! [`Constraint`]: solver::constraint::Constraint
//! [`Csp`]: solver::csp::Csp
//! [`AllDifferentConstraint`]: solver::constraints::all_different::AllDifferentConstraint
//! [`NotEqualConstraint`]: solver::constraints::not_equal::NotEqualConstraint
pub mod error;
pub mod examples;
pub mod solver;
