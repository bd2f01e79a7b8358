//! N-queens: one variable per row holding the queen's column; columns must
//! be pairwise distinct and diagonals are excluded per row pair.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        constraints::{
            abs_diff_not_equal::AbsoluteDifferenceNotEqualConstraint,
            all_different::AllDifferentConstraint,
        },
        csp::Csp,
        variable::Variable,
    },
};

/// Builds the n-queens problem over an `n`×`n` board.
pub fn n_queens(n: usize) -> Result<Csp> {
    let variables = (0..n)
        .map(|row| Variable::new(format!("q{}", row), 0..n as i64))
        .collect();

    let mut constraints: Vec<Box<dyn Constraint>> =
        vec![Box::new(AllDifferentConstraint::new((0..n).collect()))];
    for i in 0..n {
        for j in (i + 1)..n {
            constraints.push(Box::new(AbsoluteDifferenceNotEqualConstraint::new(
                i,
                j,
                (j - i) as i64,
            )));
        }
    }

    Csp::new(variables, constraints)
}

/// Solves n-queens, returning one column per row.
pub fn solve_n_queens(n: usize) -> Option<Vec<i64>> {
    let csp = n_queens(n).ok()?;
    let assignment = csp.solve()?;
    Some((0..n).filter_map(|row| assignment.get(row)).collect())
}

/// Independent check that a placement attacks nothing.
pub fn is_valid_placement(columns: &[i64]) -> bool {
    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            if columns[i] == columns[j] {
                return false;
            }
            if (columns[i] - columns[j]).abs() == (j - i) as i64 {
                return false;
            }
        }
    }
    true
}
