//! Entry extraction: maximal horizontal/vertical runs of length >= 2.
//! Deterministic and pure; used both to report a puzzle's entries and to
//! collect the words placed on a date for the rolling history. Grounded on
//! a `compute_entries`-style two-pass across-then-down scan.

use serde::Serialize;

use super::{Direction, Grid};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub direction: Direction,
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub answer: Option<String>,
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        serializer.serialize_str(s)
    }
}

/// Across entries (ordered by start row then column) before down entries
/// (ordered by start column then row).
pub fn extract_entries(grid: &Grid) -> Vec<Entry> {
    let mut entries = Vec::new();

    for r in 0..grid.rows() {
        let mut c = 0;
        while c < grid.cols() {
            if !grid.is_blocked(r, c) && (c == 0 || grid.is_blocked(r, c - 1)) {
                let mut end_c = c;
                while end_c < grid.cols() && !grid.is_blocked(r, end_c) {
                    end_c += 1;
                }
                let length = end_c - c;
                if length >= 2 {
                    entries.push(Entry {
                        direction: Direction::Across,
                        start_row: r,
                        start_col: c,
                        length,
                        answer: collect_answer(grid, r, c, end_c, true),
                    });
                }
                c = end_c;
            } else {
                c += 1;
            }
        }
    }

    for c in 0..grid.cols() {
        let mut r = 0;
        while r < grid.rows() {
            if !grid.is_blocked(r, c) && (r == 0 || grid.is_blocked(r - 1, c)) {
                let mut end_r = r;
                while end_r < grid.rows() && !grid.is_blocked(end_r, c) {
                    end_r += 1;
                }
                let length = end_r - r;
                if length >= 2 {
                    entries.push(Entry {
                        direction: Direction::Down,
                        start_row: r,
                        start_col: c,
                        length,
                        answer: collect_answer(grid, r, c, end_r, false),
                    });
                }
                r = end_r;
            } else {
                r += 1;
            }
        }
    }

    entries
}

fn collect_answer(grid: &Grid, start_row: usize, start_col: usize, end_exclusive: usize, across: bool) -> Option<String> {
    let mut letters = String::new();
    for i in (if across { start_col } else { start_row })..end_exclusive {
        let (r, c) = if across { (start_row, i) } else { (i, start_col) };
        match grid.get(r, c) {
            Some(ch) => letters.push(ch),
            None => return None,
        }
    }
    Some(letters)
}
