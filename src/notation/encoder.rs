//! Grid-to-notation encoding
//!
//! Compresses a step grid into the shortest matching textual form, in
//! priority order: canonical shorthands, exact Euclidean-rhythm match,
//! then run-length encoding. The run-length fallback always terminates
//! and round-trips to the original grid when re-expanded.

use super::euclidean::euclidean_pattern;
use super::REST;
use crate::pattern::grid::{StepGrid, BAR_STEPS};

/// Encode a step grid as a compact pattern notation string
///
/// Tries, in order:
/// 1. Canonical shorthands: uniform repeats at step intervals 4, 2,
///    and 1 (`tok*4`, `tok*8`, `tok*16` on a 16-step bar), the
///    backbeat (`~ tok ~ tok`), and the half-time hit (`~*2 tok ~`).
/// 2. Exact Euclidean match: if the grid is bit-identical to the
///    canonical distribution of its hit count, `tok(hits,steps)`.
///    Near-misses deliberately fall through to run-length encoding.
/// 3. Run-length encoding over maximal runs: a hit-run of length 1 is
///    `tok`, longer runs `tok*len`; rest-runs are `~` and `~*len`.
///
/// An all-rest grid encodes to the empty string: the instrument layer
/// is silent and should be omitted entirely.
///
/// # Example
///
/// ```
/// use groove_dsp::notation::encode_pattern;
/// use groove_dsp::pattern::StepGrid;
///
/// assert_eq!(encode_pattern(&StepGrid::four_on_floor(), "bd"), "bd*4");
/// assert_eq!(encode_pattern(&StepGrid::backbeat(), "sd"), "~ sd ~ sd");
/// assert_eq!(encode_pattern(&StepGrid::empty(16), "hh"), "");
/// ```
pub fn encode_pattern(grid: &StepGrid, token: &str) -> String {
    let n = grid.len();
    let hits = grid.hit_count();

    if hits == 0 {
        return String::new();
    }

    // Uniform repeats at intervals 4, 2, 1
    for interval in [4usize, 2, 1] {
        if n % interval == 0 && is_uniform(grid, interval) {
            return format!("{}*{}", token, n / interval);
        }
    }

    // Backbeat and half-time shorthands are defined on a 16-step bar
    if n == BAR_STEPS {
        if *grid == StepGrid::backbeat() {
            return format!("{} {} {} {}", REST, token, REST, token);
        }
        if *grid == StepGrid::half_time() {
            return format!("{}*2 {} {}", REST, token, REST);
        }
    }

    // Exact Euclidean-rhythm recognition
    if hits < n {
        // hit_count <= len always holds, so generation cannot fail
        if let Ok(canonical) = euclidean_pattern(hits, n) {
            if canonical == *grid {
                return format!("{}({},{})", token, hits, n);
            }
        }
    }

    run_length_encode(grid, token)
}

/// True if the grid hits exactly on every `interval`-th step
fn is_uniform(grid: &StepGrid, interval: usize) -> bool {
    grid.steps()
        .iter()
        .enumerate()
        .all(|(i, &hit)| hit == (i % interval == 0))
}

fn run_length_encode(grid: &StepGrid, token: &str) -> String {
    let steps = grid.steps();
    let mut parts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < steps.len() {
        let value = steps[i];
        let mut run = 1;
        while i + run < steps.len() && steps[i + run] == value {
            run += 1;
        }

        let symbol = if value { token } else { REST };
        if run > 1 {
            parts.push(format!("{}*{}", symbol, run));
        } else {
            parts.push(symbol.to_string());
        }
        i += run;
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand a run-length pattern string back into step flags
    fn expand_rle(pattern: &str, token: &str) -> Vec<bool> {
        let mut steps = Vec::new();
        for part in pattern.split_whitespace() {
            let (symbol, count) = match part.split_once('*') {
                Some((s, c)) => (s, c.parse::<usize>().unwrap()),
                None => (part, 1),
            };
            let hit = symbol == token;
            assert!(hit || symbol == REST, "unexpected symbol {}", symbol);
            steps.extend(std::iter::repeat(hit).take(count));
        }
        steps
    }

    #[test]
    fn test_encode_four_on_floor() {
        assert_eq!(encode_pattern(&StepGrid::four_on_floor(), "bd"), "bd*4");
    }

    #[test]
    fn test_encode_uniform_repeats() {
        assert_eq!(encode_pattern(&StepGrid::eighths(), "hh"), "hh*8");
        assert_eq!(encode_pattern(&StepGrid::sixteenths(), "hh"), "hh*16");
        // Uniform repeats generalize to other grid lengths
        let half_bar = StepGrid::from_bits(&[1, 0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(encode_pattern(&half_bar, "bd"), "bd*2");
    }

    #[test]
    fn test_encode_backbeat_and_half_time() {
        assert_eq!(encode_pattern(&StepGrid::backbeat(), "sd"), "~ sd ~ sd");
        assert_eq!(encode_pattern(&StepGrid::half_time(), "sd"), "~*2 sd ~");
    }

    #[test]
    fn test_encode_euclidean_match() {
        // The Euclidean(3,8) tresillo pattern
        let grid = StepGrid::from_bits(&[0, 0, 1, 0, 0, 1, 0, 1]);
        assert_eq!(encode_pattern(&grid, "bd"), "bd(3,8)");

        // Euclidean(5,16)
        let grid = euclidean_pattern(5, 16).unwrap();
        assert_eq!(encode_pattern(&grid, "hh"), "hh(5,16)");
    }

    #[test]
    fn test_encode_near_euclidean_falls_through_to_rle() {
        // One hit shifted off the canonical Euclidean(3,8) placement
        let grid = StepGrid::from_bits(&[0, 1, 0, 0, 0, 1, 0, 1]);
        let encoded = encode_pattern(&grid, "bd");
        assert!(!encoded.contains('('), "got {}", encoded);
        assert_eq!(expand_rle(&encoded, "bd"), grid.steps());
    }

    #[test]
    fn test_encode_empty_grid_is_silence() {
        assert_eq!(encode_pattern(&StepGrid::empty(16), "bd"), "");
    }

    #[test]
    fn test_rle_output_format() {
        let grid = StepGrid::from_bits(&[1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0]);
        let encoded = encode_pattern(&grid, "bd");
        assert_eq!(encoded, "bd*3 ~*2 bd ~*7 bd*2 ~");
    }

    #[test]
    fn test_rle_round_trips_arbitrary_grids() {
        // The fallback must reproduce the exact original grid through a
        // compatible expansion.
        let grids = [
            StepGrid::from_bits(&[0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1]),
            StepGrid::from_bits(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            StepGrid::from_bits(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        ];
        for grid in grids {
            let encoded = encode_pattern(&grid, "sd");
            assert_eq!(expand_rle(&encoded, "sd"), grid.steps(), "{}", encoded);
        }
    }
}
