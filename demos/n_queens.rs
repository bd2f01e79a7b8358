use clap::Parser;
use trellis::examples::n_queens::solve_n_queens;

/// Place n queens on an n x n board so that none attack each other.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size.
    #[arg(long, default_value_t = 8)]
    n: usize,
}

pub fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match solve_n_queens(args.n) {
        Some(placement) => {
            for &queen_col in &placement {
                let row: String = (0..args.n as i64)
                    .map(|col| if col == queen_col { " Q" } else { " ." })
                    .collect();
                println!("{}", row);
            }
        }
        None => println!("No placement exists for n = {}.", args.n),
    }
}
