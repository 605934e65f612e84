//! Grid model: a rows x cols board with a set of blocked cells, a partial
//! letter assignment, and the prefix/closing-run helpers the solver prunes
//! on. Backed by `ndarray::Array2`, generalizing a prior boolean-occupancy
//! grid representation (`utils.rs`, `grid/matrix.rs`) to lettered cells.

use std::collections::HashSet;
use std::fmt;

use ndarray::Array2;

pub mod entry;
pub mod template;

pub use entry::{extract_entries, Entry};
pub use template::Template;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

#[derive(Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: HashSet<(usize, usize)>,
    cells: Array2<Option<char>>,
}

impl Grid {
    pub fn new(template: &Template) -> Self {
        Grid {
            rows: template.rows(),
            cols: template.cols(),
            blocked: template.blocked().clone(),
            cells: Array2::from_elem((template.rows(), template.cols()), None),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_blocked(&self, r: usize, c: usize) -> bool {
        self.blocked.contains(&(r, c))
    }

    pub fn get(&self, r: usize, c: usize) -> Option<char> {
        self.cells[[r, c]]
    }

    pub fn set(&mut self, r: usize, c: usize, ch: char) {
        debug_assert!(!self.is_blocked(r, c), "writing into blocked cell ({r},{c})");
        self.cells[[r, c]] = Some(ch);
    }

    pub fn clear(&mut self, r: usize, c: usize) {
        self.cells[[r, c]] = None;
    }

    /// The longest contiguous non-blocked, already-filled run ending
    /// immediately to the left of `(r, c)`. Stops at the first empty cell
    /// or blocked cell/grid edge scanning leftward.
    pub fn row_prefix(&self, r: usize, c: usize) -> String {
        let mut start = c;
        while start > 0 && !self.is_blocked(r, start - 1) && self.cells[[r, start - 1]].is_some() {
            start -= 1;
        }
        (start..c).map(|x| self.cells[[r, x]].unwrap()).collect()
    }

    /// Length of the maximal non-blocked horizontal run containing
    /// `(r, c)`, independent of what (if anything) is currently filled in.
    /// A length of 1 means the cell is not part of any real across entry.
    pub fn row_run_len(&self, r: usize, c: usize) -> usize {
        let mut start = c;
        while start > 0 && !self.is_blocked(r, start - 1) {
            start -= 1;
        }
        let mut end = c;
        while end + 1 < self.cols && !self.is_blocked(r, end + 1) {
            end += 1;
        }
        end - start + 1
    }

    /// Vertical analog of `row_run_len`.
    pub fn col_run_len(&self, r: usize, c: usize) -> usize {
        let mut start = r;
        while start > 0 && !self.is_blocked(start - 1, c) {
            start -= 1;
        }
        let mut end = r;
        while end + 1 < self.rows && !self.is_blocked(end + 1, c) {
            end += 1;
        }
        end - start + 1
    }

    /// Vertical analog of `row_prefix`.
    pub fn col_prefix(&self, r: usize, c: usize) -> String {
        let mut start = r;
        while start > 0 && !self.is_blocked(start - 1, c) && self.cells[[start - 1, c]].is_some() {
            start -= 1;
        }
        (start..r).map(|x| self.cells[[x, c]].unwrap()).collect()
    }

    /// True iff placing a letter at `(r, c)` closes the horizontal run it
    /// belongs to, i.e. `(r, c)` is the last non-blocked cell of its row run.
    pub fn completes_across(&self, r: usize, c: usize) -> bool {
        c == self.cols - 1 || self.is_blocked(r, c + 1)
    }

    /// Vertical analog of `completes_across`.
    pub fn completes_down(&self, r: usize, c: usize) -> bool {
        r == self.rows - 1 || self.is_blocked(r + 1, c)
    }

    /// The full horizontal word formed by placing `ch` at `(r, c)`, given
    /// `completes_across(r, c)` holds: the filled run to the left plus `ch`.
    pub fn completed_across_word(&self, r: usize, c: usize, ch: char) -> String {
        let mut word = self.row_prefix(r, c);
        word.push(ch);
        word
    }

    /// Vertical analog of `completed_across_word`.
    pub fn completed_down_word(&self, r: usize, c: usize, ch: char) -> String {
        let mut word = self.col_prefix(r, c);
        word.push(ch);
        word
    }

    /// Cells in row-major order, skipping blocked ones — the solver's
    /// fixed search order.
    pub fn fill_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(self.rows * self.cols - self.blocked.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                if !self.is_blocked(r, c) {
                    positions.push((r, c));
                }
            }
        }
        positions
    }

    /// Exported `filled_grid`: uppercase letters, blocked cells as `None`.
    pub fn render(&self) -> Vec<Vec<Option<char>>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        if self.is_blocked(r, c) {
                            None
                        } else {
                            self.cells[[r, c]].map(|ch| ch.to_ascii_uppercase())
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid({}x{})", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.is_blocked(r, c) {
                    '#'
                } else {
                    self.cells[[r, c]].unwrap_or('.')
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x2_no_blocks() -> Grid {
        Grid::new(&Template::new(2, 2, HashSet::new()).unwrap())
    }

    #[test]
    fn row_col_prefix_empty_grid() {
        let grid = grid_2x2_no_blocks();
        assert_eq!(grid.row_prefix(0, 0), "");
        assert_eq!(grid.col_prefix(0, 0), "");
    }

    #[test]
    fn row_col_prefix_after_filling() {
        let mut grid = grid_2x2_no_blocks();
        grid.set(0, 0, 'i');
        assert_eq!(grid.row_prefix(0, 1), "i");
        grid.set(0, 1, 't');
        assert_eq!(grid.completed_across_word(0, 1, 't'), "it");
    }

    #[test]
    fn completes_across_down_isolated_cell() {
        let mut blocked = HashSet::new();
        blocked.insert((0, 1));
        let grid = Grid::new(&Template::new(1, 3, blocked).unwrap());
        // The isolated cell at (0,1) is blocked; (0,0) and (0,2) are each
        // singleton runs, closing both across and (trivially) down.
        assert!(grid.completes_across(0, 0));
        assert!(grid.completes_down(0, 0));
        assert!(grid.completes_across(0, 2));
    }

    #[test]
    fn run_len_isolated_cell_is_one() {
        let mut blocked = HashSet::new();
        blocked.insert((0, 1));
        let grid = Grid::new(&Template::new(1, 3, blocked).unwrap());
        assert_eq!(grid.row_run_len(0, 0), 1);
        assert_eq!(grid.col_run_len(0, 0), 1);
        assert_eq!(grid.row_run_len(0, 2), 1);
    }

    #[test]
    fn run_len_spans_whole_unblocked_row() {
        let grid = grid_2x2_no_blocks();
        assert_eq!(grid.row_run_len(0, 0), 2);
        assert_eq!(grid.row_run_len(0, 1), 2);
        assert_eq!(grid.col_run_len(0, 0), 2);
    }

    #[test]
    fn fill_positions_skip_blocked() {
        let mut blocked = HashSet::new();
        blocked.insert((1, 1));
        let grid = Grid::new(&Template::new(3, 3, blocked).unwrap());
        assert_eq!(grid.fill_positions().len(), 8);
        assert!(!grid.fill_positions().contains(&(1, 1)));
    }

    #[test]
    fn render_uppercases_and_nulls_blocked() {
        let mut blocked = HashSet::new();
        blocked.insert((0, 1));
        let mut grid = Grid::new(&Template::new(1, 2, blocked).unwrap());
        grid.set(0, 0, 'a');
        let rendered = grid.render();
        assert_eq!(rendered[0][0], Some('A'));
        assert_eq!(rendered[0][1], None);
    }
}
