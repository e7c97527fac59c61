//! File loaders for each day's input format.
//!
//! Every loader reads a whole small file eagerly and hands back plain
//! in-memory data. Malformed input is reported with its file and line, never
//! repaired; the solvers downstream can assume well-formed data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::grid::{Grid, GridError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    MalformedGrid {
        path: String,
        #[source]
        source: GridError,
    },
    #[error("{path} line {line}: expected two whitespace-separated values, got {got:?}")]
    BadColumns { path: String, line: usize, got: String },
    #[error("{path} line {line}: expected an X|Y ordering rule, got {got:?}")]
    BadRule { path: String, line: usize, got: String },
    #[error("{path} line {line}: {value:?} is not an integer")]
    BadInt {
        path: String,
        line: usize,
        value: String,
    },
}

/// Day 1: two whitespace-separated integer columns, one pair per line.
pub fn read_location_lists(path: &Path) -> Result<(Vec<i64>, Vec<i64>), InputError> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (idx, line) in lines_of(path)?.iter().enumerate() {
        let mut fields = line.split_whitespace();
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(InputError::BadColumns {
                path: display(path),
                line: idx + 1,
                got: line.clone(),
            });
        };
        left.push(parse_num(a, path, idx + 1)?);
        right.push(parse_num(b, path, idx + 1)?);
    }

    Ok((left, right))
}

/// Day 2: one report per line, whitespace-separated levels.
pub fn read_reports(path: &Path) -> Result<Vec<Vec<i64>>, InputError> {
    let mut reports = Vec::new();

    for (idx, line) in lines_of(path)?.iter().enumerate() {
        let mut levels = Vec::new();
        for field in line.split_whitespace() {
            levels.push(parse_num(field, path, idx + 1)?);
        }
        reports.push(levels);
    }

    Ok(reports)
}

/// Day 3: the whole file as one instruction stream.
pub fn read_program(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: display(path),
        source,
    })
}

/// Day 4: a rectangular character grid, one cell per code point.
pub fn read_grid(path: &Path) -> Result<Grid, InputError> {
    Grid::from_lines(&lines_of(path)?).map_err(|source| InputError::MalformedGrid {
        path: display(path),
        source,
    })
}

/// Day 5: `X|Y` ordering rules, a blank separator line, then comma-separated
/// page updates.
pub fn read_print_jobs(path: &Path) -> Result<(Vec<(u32, u32)>, Vec<Vec<u32>>), InputError> {
    let mut rules = Vec::new();
    let mut updates = Vec::new();
    let mut in_rules = true;

    for (idx, line) in lines_of(path)?.iter().enumerate() {
        if line.trim().is_empty() {
            in_rules = false;
            continue;
        }

        if in_rules {
            let Some((before, after)) = line.split_once('|') else {
                return Err(InputError::BadRule {
                    path: display(path),
                    line: idx + 1,
                    got: line.clone(),
                });
            };
            rules.push((
                parse_num(before, path, idx + 1)?,
                parse_num(after, path, idx + 1)?,
            ));
        } else {
            let mut pages = Vec::new();
            for field in line.split(',') {
                pages.push(parse_num(field, path, idx + 1)?);
            }
            updates.push(pages);
        }
    }

    Ok((rules, updates))
}

fn lines_of(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: display(path),
        source,
    })?;

    let mut out = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| InputError::Io {
            path: display(path),
            source,
        })?;
        debug!(%line, "parsed line");
        out.push(line);
    }
    Ok(out)
}

fn parse_num<T>(raw: &str, path: &Path, line: usize) -> Result<T, InputError>
where
    T: FromStr,
{
    raw.trim().parse().map_err(|_| InputError::BadInt {
        path: display(path),
        line,
        value: raw.to_string(),
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
