//! Backtracking grid-fill search. Fills cells in row-major order, using the
//! trie to prune per-cell candidates and a running used-words set to
//! enforce the no-duplicate-word invariant across the whole grid.
//!
//! Structured as an explicit `Solver` struct so the commit/undo
//! bookkeeping is a small per-frame record rather than relying on
//! closures capturing mutable state, preferring small owned structs over
//! ad hoc closures (e.g. `grid/random.rs::PlacementAttemptIterator`).

use std::collections::HashSet;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::errors::CrosswordError;
use crate::grid::{Grid, Template};
use crate::is_admissible_word;
use crate::trie::Trie;

/// Letters considered when a cell belongs to no real entry in one or both
/// directions (run length 1): there is no word to validate against, so the
/// trie has nothing to say and any letter of the alphabet is viable.
const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z',
];

/// Inner search attempt budget per date: the caller (`Generator`) retries
/// with a fresh seed up to this many times before surfacing `Unsolvable`.
pub const ATTEMPT_BUDGET: usize = 20;

struct Solver {
    grid: Grid,
    trie: Trie,
    used_words: HashSet<String>,
    positions: Vec<(usize, usize)>,
    rng: StdRng,
}

impl Solver {
    fn new(template: &Template, trie: Trie, seed: u64) -> Self {
        let grid = Grid::new(template);
        let positions = grid.fill_positions();
        Solver {
            grid,
            trie,
            used_words: HashSet::new(),
            positions,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn run(&mut self, index: usize) -> bool {
        if index == self.positions.len() {
            return true;
        }
        let (r, c) = self.positions[index];

        // A direction only constrains this cell's letter if it belongs to a
        // real entry (run length >= 2) in that direction; an isolated run
        // of length 1 has no word to validate, so the trie has nothing to
        // prune with and the full alphabet is admissible from that side.
        let row_active = self.grid.row_run_len(r, c) >= 2;
        let col_active = self.grid.col_run_len(r, c) >= 2;

        let mut candidates: Vec<char> = match (row_active, col_active) {
            (true, true) => {
                let row_prefix = self.grid.row_prefix(r, c);
                let col_prefix = self.grid.col_prefix(r, c);
                let candidates_row = self.trie.next_letters(&row_prefix);
                if candidates_row.is_empty() {
                    return false;
                }
                let candidates_col = self.trie.next_letters(&col_prefix);
                if candidates_col.is_empty() {
                    return false;
                }
                candidates_row.intersection(&candidates_col).copied().collect()
            }
            (true, false) => {
                let row_prefix = self.grid.row_prefix(r, c);
                self.trie.next_letters(&row_prefix).into_iter().collect()
            }
            (false, true) => {
                let col_prefix = self.grid.col_prefix(r, c);
                self.trie.next_letters(&col_prefix).into_iter().collect()
            }
            (false, false) => ALPHABET.to_vec(),
        };
        if candidates.is_empty() {
            return false;
        }
        candidates.sort_unstable();
        candidates.shuffle(&mut self.rng);

        for ch in candidates {
            let close_across = self.grid.completes_across(r, c);
            let close_down = self.grid.completes_down(r, c);

            let mut closed_words: Vec<String> = Vec::with_capacity(2);

            if close_across {
                let word = self.grid.completed_across_word(r, c, ch);
                if word.len() >= 2 && !self.trie.is_word(&word) {
                    continue;
                }
                if word.len() >= 2 {
                    closed_words.push(word);
                }
            }
            if close_down {
                let word = self.grid.completed_down_word(r, c, ch);
                if word.len() >= 2 && !self.trie.is_word(&word) {
                    continue;
                }
                if word.len() >= 2 {
                    closed_words.push(word);
                }
            }

            if closed_words.len() == 2 && closed_words[0] == closed_words[1] {
                // A single placement would create the same word twice.
                continue;
            }
            if closed_words.iter().any(|w| self.used_words.contains(w)) {
                continue;
            }

            trace!("Placing {ch} at ({r},{c}), closing {closed_words:?}");
            self.grid.set(r, c, ch);
            for word in &closed_words {
                self.trie.disable(word);
                self.used_words.insert(word.clone());
            }

            if self.run(index + 1) {
                return true;
            }

            for word in &closed_words {
                self.used_words.remove(word);
                self.trie.enable(word);
            }
            self.grid.clear(r, c);
        }

        false
    }
}

/// FNV-1a hash of `date_iso` folded with `attempt`, giving a seed that is
/// deterministic for a given (date, attempt) pair regardless of process or
/// platform.
pub fn derive_seed(date_iso: &str, attempt: usize) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;
    let mut hash = FNV_OFFSET;
    for byte in date_iso.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^ (attempt as u64).wrapping_mul(FNV_PRIME)
}

/// Runs one solve attempt with the given seed. Checks the trie is restored
/// to its pre-solve state on return (success or failure), halting the
/// process via `Trie::assert_matches` if not.
pub fn solve(template: &Template, words: &HashSet<String>, seed: u64) -> Result<Grid, CrosswordError> {
    let max_len = template.max_word_len();
    let filtered: Vec<&str> = words
        .iter()
        .filter(|w| is_admissible_word(w, 2, max_len))
        .map(String::as_str)
        .collect();
    let trie = Trie::from_words(filtered);
    let snapshot = trie.clone();

    let mut solver = Solver::new(template, trie, seed);
    let solved = solver.run(0);

    solver.trie.assert_matches(&snapshot, "post-solve unwind check");

    if solved {
        debug!("Solved {}x{} grid with seed {seed}", template.rows(), template.cols());
        Ok(solver.grid)
    } else {
        Err(CrosswordError::Unsolvable { attempts: 1 })
    }
}

/// Retries `solve` with seeds derived from `(date_iso, attempt)` up to
/// `ATTEMPT_BUDGET` times.
pub fn solve_with_retries(
    template: &Template,
    words: &HashSet<String>,
    date_iso: &str,
) -> Result<Grid, CrosswordError> {
    for attempt in 0..ATTEMPT_BUDGET {
        let seed = derive_seed(date_iso, attempt);
        match solve(template, words, seed) {
            Ok(grid) => return Ok(grid),
            Err(CrosswordError::Unsolvable { .. }) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(CrosswordError::Unsolvable { attempts: ATTEMPT_BUDGET })
}
