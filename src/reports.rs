//! Day 2: report safety.
//!
//! A report (a list of levels) is safe when the levels move strictly in one
//! direction and adjacent levels differ by at most 3. The "dampened" variant
//! tolerates one bad level by speculatively removing each level in turn and
//! revalidating from scratch.

/// Strictly monotonic in one direction, adjacent differences in `1..=3`.
pub fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }

    let increasing = levels[1] > levels[0];
    levels.windows(2).all(|pair| {
        let diff = if increasing {
            pair[1] - pair[0]
        } else {
            pair[0] - pair[1]
        };
        (1..=3).contains(&diff)
    })
}

/// Safe as-is, or safe after removing any single level.
///
/// The retry is brute force over removal positions; reports are a handful of
/// levels long, so the quadratic cost is irrelevant.
pub fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let mut rest = Vec::with_capacity(levels.len() - 1);
        rest.extend_from_slice(&levels[..skip]);
        rest.extend_from_slice(&levels[skip + 1..]);
        is_safe(&rest)
    })
}

pub fn safe_count(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|levels| is_safe(levels)).count()
}

pub fn safe_count_dampened(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|levels| is_safe_dampened(levels)).count()
}
