//! The classic Australia map colouring problem: seven regions, three
//! colours, adjacent regions must differ.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        constraints::not_equal::NotEqualConstraint,
        csp::Csp,
        variable::Variable,
    },
};

pub const RED: i64 = 0;
pub const GREEN: i64 = 1;
pub const BLUE: i64 = 2;

pub const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];

/// Adjacent region pairs, as indices into [`REGIONS`].
const BORDERS: [(usize, usize); 9] = [
    (0, 1), // WA / NT
    (0, 2), // WA / SA
    (1, 2), // NT / SA
    (1, 3), // NT / Q
    (2, 3), // SA / Q
    (2, 4), // SA / NSW
    (2, 5), // SA / V
    (3, 4), // Q / NSW
    (4, 5), // NSW / V
];

/// Builds the Australia colouring problem. Tasmania borders nothing, so its
/// variable carries no constraints at all.
pub fn australia() -> Result<Csp> {
    let variables = REGIONS
        .iter()
        .map(|region| Variable::new(*region, [RED, GREEN, BLUE]))
        .collect();

    let constraints: Vec<Box<dyn Constraint>> = BORDERS
        .iter()
        .map(|&(a, b)| Box::new(NotEqualConstraint::new(a, b)) as Box<dyn Constraint>)
        .collect();

    Csp::new(variables, constraints)
}

/// Solves the problem and pairs each region name with its colour.
pub fn colour_australia() -> Option<Vec<(&'static str, i64)>> {
    let csp = australia().ok()?;
    let assignment = csp.solve()?;
    Some(
        REGIONS
            .iter()
            .enumerate()
            .map(|(id, region)| (*region, assignment.get(id).unwrap_or(RED)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraints::equal::EqualConstraint;

    #[test]
    fn adjacent_regions_receive_different_colours() {
        let _ = tracing_subscriber::fmt::try_init();
        let csp = australia().unwrap();
        let solution = csp.solve().unwrap();

        for &(a, b) in &BORDERS {
            assert_ne!(solution.get(a), solution.get(b));
        }
    }

    #[test]
    fn two_colours_cannot_colour_a_triangle() {
        let variables = vec![
            Variable::new("WA", [RED, GREEN]),
            Variable::new("NT", [RED, GREEN]),
            Variable::new("SA", [RED, GREEN]),
        ];
        let constraints: Vec<Box<dyn Constraint>> = vec![
            Box::new(NotEqualConstraint::new(0, 1)),
            Box::new(NotEqualConstraint::new(0, 2)),
            Box::new(NotEqualConstraint::new(1, 2)),
        ];
        let csp = Csp::new(variables, constraints).unwrap();
        assert_eq!(csp.solve(), None);
    }

    #[test]
    fn an_equality_constraint_ties_two_regions_together() {
        let variables = vec![
            Variable::new("WA", [RED, GREEN, BLUE]),
            Variable::new("NT", [RED, GREEN, BLUE]),
            Variable::new("T", [BLUE]),
        ];
        // Tasmania's colour is fixed; WA must match it, NT must not.
        let constraints: Vec<Box<dyn Constraint>> = vec![
            Box::new(EqualConstraint::new(0, 2)),
            Box::new(NotEqualConstraint::new(0, 1)),
        ];
        let csp = Csp::new(variables, constraints).unwrap();
        let solution = csp.solve().unwrap();

        assert_eq!(solution.get(0), Some(BLUE));
        assert_ne!(solution.get(1), Some(BLUE));
    }
}
