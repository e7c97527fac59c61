//! Solvers for the Advent of Code 2024 puzzles, days 1 through 5.
//!
//! Each day is an independent pipeline (parse a small text file, compute one
//! number, print it); the shared pieces live here:
//!
//! - [`grid`]: a dense, bounds-aware character grid and the eight compass steps.
//! - [`search`]: the day-4 word search and X-shaped cross search over a grid.
//! - [`input`]: file loaders for every day's input format.
//! - [`lists`], [`reports`], [`instructions`], [`ordering`]: the day 1/2/3/5 logic.
//!
//! The binaries under `src/bin/` are thin drivers over these modules.

pub mod grid;
pub mod input;
pub mod instructions;
pub mod lists;
pub mod ordering;
pub mod reports;
pub mod search;
