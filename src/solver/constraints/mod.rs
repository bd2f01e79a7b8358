//! A standard library of reusable constraints.
//!
//! The set is closed but easy to extend: add a new implementation of
//! [`Constraint`](crate::solver::constraint::Constraint) rather than
//! layering behaviour onto an existing one. Every implementation here
//! upholds the monotonicity contract documented on the trait.

pub mod abs_diff_not_equal;
pub mod all_different;
pub mod equal;
pub mod not_equal;
