//! Day 3: scanning corrupted memory for `mul(X,Y)` instructions.
//!
//! Valid tokens are `mul(X,Y)` with 1-3 digit operands, `do()`, and
//! `don't()`; everything else in the stream is noise and skipped.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("token pattern is valid")
});

/// One recognized instruction, in stream order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

/// Every valid instruction in `program`, in the order it appears.
pub fn parse(program: &str) -> Vec<Instruction> {
    TOKEN
        .captures_iter(program)
        .map(|cap| {
            if let (Some(a), Some(b)) = (cap.get(1), cap.get(2)) {
                Instruction::Mul(operand(a), operand(b))
            } else if &cap[0] == "do()" {
                Instruction::Do
            } else {
                Instruction::Dont
            }
        })
        .collect()
}

/// Sum of every multiplication, ignoring the `do()`/`don't()` toggles.
pub fn sum_of_products(program: &str) -> i64 {
    parse(program)
        .iter()
        .map(|inst| match inst {
            Instruction::Mul(a, b) => a * b,
            _ => 0,
        })
        .sum()
}

/// Sum of multiplications with the toggles applied: `don't()` disables
/// following multiplications until a `do()` re-enables them. The stream
/// starts enabled.
pub fn sum_of_enabled_products(program: &str) -> i64 {
    let mut enabled = true;
    let mut sum = 0;

    for inst in parse(program) {
        match inst {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(a, b) if enabled => sum += a * b,
            Instruction::Mul(..) => {}
        }
    }
    sum
}

fn operand(m: regex::Match<'_>) -> i64 {
    // The capture is 1-3 digits, which always fits.
    m.as_str().parse().expect("operand is 1-3 digits")
}
