//! Worked problem encodings built on the generic solver.
//!
//! The engine knows nothing about cells, rows, regions, or queens; each
//! module here translates a concrete puzzle into variables and constraints,
//! calls the solver, and decodes the assignment back into positional output.

pub mod map_colouring;
pub mod n_queens;
pub mod sudoku;
