use std::path::PathBuf;

use aoc2024::input;
use aoc2024::ordering::OrderingRules;

fn main() {
    tracing_subscriber::fmt::init();

    let path = input_path();
    let (pairs, updates) = match input::read_print_jobs(&path) {
        Ok(jobs) => jobs,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let rules = OrderingRules::from_pairs(pairs);
    println!(
        "Sum of valid update middles: {}",
        rules.middle_page_sum(&updates)
    );
}

fn input_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => PathBuf::from("input.txt"),
        2 if args[1] != "--help" => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: day5 [input-file]   (default: input.txt)");
            std::process::exit(2);
        }
    }
}
