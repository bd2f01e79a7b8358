use clap::Parser;
use trellis::examples::sudoku::{is_valid_solution, render_grid, Grid, SudokuProblem};
use trellis::solver::{engine::SolverEngine, stats::render_stats_table};

const EASY_PUZZLE: Grid = [
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

const HARD_PUZZLE: Grid = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 3, 0, 8, 5],
    [0, 0, 1, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 5, 0, 7, 0, 0, 0],
    [0, 0, 4, 0, 0, 0, 1, 0, 0],
    [0, 9, 0, 0, 0, 0, 0, 0, 0],
    [5, 0, 0, 0, 0, 0, 0, 7, 3],
    [0, 0, 2, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 9],
];

/// Solve a Sudoku puzzle with the CSP engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding a 9x9 grid of integers, 0 for empty cells.
    #[arg(long)]
    puzzle: Option<std::path::PathBuf>,

    /// Solve the bundled hard puzzle instead of the easy one.
    #[arg(long, default_value_t = false)]
    hard: bool,

    /// Print per-constraint propagation statistics.
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Print the solved grid as JSON instead of a drawn board.
    #[arg(long, default_value_t = false)]
    json: bool,
}

pub fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let grid: Grid = match &args.puzzle {
        Some(path) => {
            let text = std::fs::read_to_string(path).expect("failed to read puzzle file");
            serde_json::from_str(&text).expect("puzzle file is not a 9x9 JSON grid")
        }
        None if args.hard => HARD_PUZZLE,
        None => EASY_PUZZLE,
    };

    println!("Puzzle:\n{}", render_grid(&grid));

    let problem = SudokuProblem::new(&grid).expect("puzzle did not encode as a CSP");
    let (outcome, stats) = SolverEngine::default().solve(problem.csp());

    match outcome.into_assignment() {
        Some(assignment) => {
            let solution = problem.decode(&assignment);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string(&solution).expect("grid serialization failed")
                );
            } else {
                println!("Solution:\n{}", render_grid(&solution));
                println!(
                    "Valid: {}",
                    if is_valid_solution(&solution) { "yes" } else { "no" }
                );
            }
        }
        None => println!("No solution found."),
    }

    println!(
        "Visited {} nodes, {} backtracks, {} forward checks.",
        stats.nodes_visited, stats.backtracks, stats.forward_checks
    );
    if args.stats {
        println!("{}", render_stats_table(&stats, problem.csp().constraints()));
    }
}
