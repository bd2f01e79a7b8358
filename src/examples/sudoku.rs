//! A 9×9 Sudoku client: one variable per cell, 27 all-different constraints.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint, constraints::all_different::AllDifferentConstraint, csp::Csp,
        engine::VariableId, solution::Assignment, variable::Variable,
    },
};

/// A puzzle or solution grid. `0` marks an empty cell.
pub type Grid = [[i64; 9]; 9];

const SIZE: usize = 9;
const BOX_SIZE: usize = 3;

/// A Sudoku puzzle encoded as a CSP.
///
/// Each cell `(row, col)` becomes a variable named `r{row}c{col}` whose
/// domain is the given value as a singleton, or 1–9 for an empty cell. Each
/// row, column, and 3×3 box contributes one all-different constraint.
pub struct SudokuProblem {
    csp: Csp,
    cells: Vec<Vec<VariableId>>,
}

impl SudokuProblem {
    pub fn new(grid: &Grid) -> Result<Self> {
        let mut variables = Vec::with_capacity(SIZE * SIZE);
        let mut cells = vec![vec![0; SIZE]; SIZE];
        for (row, grid_row) in grid.iter().enumerate() {
            for (col, &given) in grid_row.iter().enumerate() {
                let domain: Vec<i64> = if given == 0 {
                    (1..=SIZE as i64).collect()
                } else {
                    vec![given]
                };
                cells[row][col] = variables.len();
                variables.push(Variable::new(format!("r{}c{}", row, col), domain));
            }
        }

        let mut constraints: Vec<Box<dyn Constraint>> = Vec::with_capacity(3 * SIZE);
        for row in &cells {
            constraints.push(Box::new(AllDifferentConstraint::new(row.clone())));
        }
        for col in 0..SIZE {
            let scope = (0..SIZE).map(|row| cells[row][col]).collect();
            constraints.push(Box::new(AllDifferentConstraint::new(scope)));
        }
        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                let mut scope = Vec::with_capacity(SIZE);
                for row in (box_row * BOX_SIZE)..((box_row + 1) * BOX_SIZE) {
                    for col in (box_col * BOX_SIZE)..((box_col + 1) * BOX_SIZE) {
                        scope.push(cells[row][col]);
                    }
                }
                constraints.push(Box::new(AllDifferentConstraint::new(scope)));
            }
        }

        let csp = Csp::new(variables, constraints)?;
        Ok(Self { csp, cells })
    }

    pub fn csp(&self) -> &Csp {
        &self.csp
    }

    /// Solves the puzzle. Returns the completed grid, or `None` when the
    /// givens admit no solution.
    pub fn solve(&self) -> Option<Grid> {
        self.csp.solve().map(|assignment| self.decode(&assignment))
    }

    /// Translates a complete assignment back into a grid.
    pub fn decode(&self, assignment: &Assignment) -> Grid {
        let mut grid = [[0i64; SIZE]; SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                grid[row][col] = assignment.get(self.cells[row][col]).unwrap_or(0);
            }
        }
        grid
    }
}

/// Independent validation: every row, column, and box holds 1–9 exactly once.
pub fn is_valid_solution(grid: &Grid) -> bool {
    let all_distinct_1_to_9 = |values: &[i64]| {
        let set: std::collections::HashSet<i64> = values.iter().copied().collect();
        set.len() == SIZE && values.iter().all(|&v| (1..=SIZE as i64).contains(&v))
    };

    for row in grid {
        if !all_distinct_1_to_9(row) {
            return false;
        }
    }
    for col in 0..SIZE {
        let column: Vec<i64> = (0..SIZE).map(|row| grid[row][col]).collect();
        if !all_distinct_1_to_9(&column) {
            return false;
        }
    }
    for box_row in 0..BOX_SIZE {
        for box_col in 0..BOX_SIZE {
            let mut values = Vec::with_capacity(SIZE);
            for row in (box_row * BOX_SIZE)..((box_row + 1) * BOX_SIZE) {
                for col in (box_col * BOX_SIZE)..((box_col + 1) * BOX_SIZE) {
                    values.push(grid[row][col]);
                }
            }
            if !all_distinct_1_to_9(&values) {
                return false;
            }
        }
    }
    true
}

/// Renders a grid with box separators; empty cells print as dots.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for (row, grid_row) in grid.iter().enumerate() {
        if row % BOX_SIZE == 0 && row != 0 {
            out.push_str("- - - + - - - + - - -\n");
        }
        for (col, &value) in grid_row.iter().enumerate() {
            if col % BOX_SIZE == 0 && col != 0 {
                out.push_str("| ");
            }
            if value == 0 {
                out.push_str(". ");
            } else {
                out.push_str(&format!("{} ", value));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub const EASY_PUZZLE: Grid = [
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ];

    #[test]
    fn encoding_produces_81_variables_and_27_constraints() {
        let _ = tracing_subscriber::fmt::try_init();
        let problem = SudokuProblem::new(&EASY_PUZZLE).unwrap();
        assert_eq!(problem.csp().variables().len(), 81);
        assert_eq!(problem.csp().constraints().len(), 27);
    }

    #[test]
    fn a_nearly_complete_puzzle_is_finished_correctly() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut puzzle: Grid = [
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ];
        puzzle[8][8] = 0;

        let solution = SudokuProblem::new(&puzzle).unwrap().solve().unwrap();
        assert_eq!(solution[8][8], 9);
        assert!(is_valid_solution(&solution));
    }

    #[test]
    fn the_easy_puzzle_round_trips_its_givens() {
        let _ = tracing_subscriber::fmt::try_init();
        let solution = SudokuProblem::new(&EASY_PUZZLE).unwrap().solve().unwrap();

        assert!(is_valid_solution(&solution));
        for row in 0..9 {
            for col in 0..9 {
                if EASY_PUZZLE[row][col] != 0 {
                    assert_eq!(solution[row][col], EASY_PUZZLE[row][col]);
                }
            }
        }
    }

    #[test]
    fn conflicting_givens_yield_no_solution() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut puzzle = EASY_PUZZLE;
        // A second 5 in the first row.
        puzzle[0][8] = 5;

        let problem = SudokuProblem::new(&puzzle).unwrap();
        assert_eq!(problem.solve(), None);
    }

    #[test]
    fn validation_rejects_a_repeated_value() {
        let mut grid = SudokuProblem::new(&EASY_PUZZLE).unwrap().solve().unwrap();
        grid[0][0] = grid[0][1];
        assert!(!is_valid_solution(&grid));
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let grid: Grid = [[0; 9]; 9];
        assert!(!is_valid_solution(&grid));
    }

    #[test]
    fn rendering_marks_empty_cells_with_dots() {
        let rendered = render_grid(&EASY_PUZZLE);
        assert!(rendered.contains('.'));
        assert!(rendered.contains("- - - + - - - + - - -"));
        assert_eq!(rendered.lines().count(), 11);
    }
}

#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use sudoku::Sudoku;

    use super::*;

    fn sudoku_bytes_to_grid(bytes: &[u8; 81]) -> Grid {
        let mut grid = [[0i64; 9]; 9];
        for (i, &byte) in bytes.iter().enumerate() {
            grid[i / 9][i % 9] = byte as i64;
        }
        grid
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        // Blank out roughly 40% of a generated solved grid and check that
        // the solver produces a valid completion preserving every given.
        #[test]
        fn generated_puzzles_solve_to_valid_completions(seed in any::<u64>()) {
            let _ = tracing_subscriber::fmt::try_init();
            let mut rng = StdRng::seed_from_u64(seed);

            let solved = Sudoku::generate_solved_with_rng(&mut rng);
            let mut puzzle = sudoku_bytes_to_grid(&solved.to_bytes());
            for row in 0..9 {
                for col in 0..9 {
                    if rng.gen_bool(0.4) {
                        puzzle[row][col] = 0;
                    }
                }
            }

            let solution = SudokuProblem::new(&puzzle).unwrap().solve();
            prop_assert!(solution.is_some(), "a completable puzzle went unsolved");

            let solution = solution.unwrap();
            prop_assert!(is_valid_solution(&solution));
            for row in 0..9 {
                for col in 0..9 {
                    if puzzle[row][col] != 0 {
                        prop_assert_eq!(solution[row][col], puzzle[row][col]);
                    }
                }
            }
        }
    }
}
