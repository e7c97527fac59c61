use std::path::PathBuf;

use aoc2024::input;
use aoc2024::reports;

fn main() {
    tracing_subscriber::fmt::init();

    let path = input_path();
    let all = match input::read_reports(&path) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("Safe reports: {}", reports::safe_count(&all));
    println!(
        "Safe reports with dampener: {}",
        reports::safe_count_dampened(&all)
    );
}

fn input_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => PathBuf::from("input.txt"),
        2 if args[1] != "--help" => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: day2 [input-file]   (default: input.txt)");
            std::process::exit(2);
        }
    }
}
