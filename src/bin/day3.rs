use std::path::PathBuf;

use aoc2024::input;
use aoc2024::instructions;

fn main() {
    tracing_subscriber::fmt::init();

    let path = input_path();
    let program = match input::read_program(&path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Sum of multiplications: {}",
        instructions::sum_of_products(&program)
    );
    println!(
        "Sum of enabled multiplications: {}",
        instructions::sum_of_enabled_products(&program)
    );
}

fn input_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => PathBuf::from("input.txt"),
        2 if args[1] != "--help" => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: day3 [input-file]   (default: input.txt)");
            std::process::exit(2);
        }
    }
}
