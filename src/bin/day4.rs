use std::path::PathBuf;

use aoc2024::input;
use aoc2024::search::{cross, word};

const XMAS: [char; 4] = ['X', 'M', 'A', 'S'];
const MAS: [char; 3] = ['M', 'A', 'S'];
const SAM: [char; 3] = ['S', 'A', 'M'];

fn main() {
    tracing_subscriber::fmt::init();

    let path = input_path();
    let grid = match input::read_grid(&path) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "XMAS occurrences: {}",
        word::count_occurrences(&grid, &XMAS)
    );
    println!("X-MAS crossings: {}", cross::count_crosses(&grid, MAS, SAM));
}

fn input_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => PathBuf::from("input.txt"),
        2 if args[1] != "--help" => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: day4 [input-file]   (default: input.txt)");
            std::process::exit(2);
        }
    }
}
