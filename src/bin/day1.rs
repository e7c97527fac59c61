use std::path::PathBuf;

use aoc2024::input;
use aoc2024::lists;

fn main() {
    tracing_subscriber::fmt::init();

    let path = input_path();
    let (left, right) = match input::read_location_lists(&path) {
        Ok(lists) => lists,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("Total distance: {}", lists::total_distance(&left, &right));
    println!(
        "Similarity score: {}",
        lists::similarity_score(&left, &right)
    );
}

fn input_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => PathBuf::from("input.txt"),
        2 if args[1] != "--help" => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: day1 [input-file]   (default: input.txt)");
            std::process::exit(2);
        }
    }
}
