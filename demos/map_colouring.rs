use trellis::examples::map_colouring::{colour_australia, BLUE, GREEN, RED};

fn colour_name(colour: i64) -> &'static str {
    match colour {
        RED => "red",
        GREEN => "green",
        BLUE => "blue",
        _ => "?",
    }
}

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Colouring the map of Australia with three colours...");

    match colour_australia() {
        Some(colouring) => {
            for (region, colour) in colouring {
                println!("{:>4}: {}", region, colour_name(colour));
            }
        }
        None => println!("No colouring found."),
    }
}
