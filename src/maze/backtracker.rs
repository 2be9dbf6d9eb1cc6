//! Recursive-backtracker maze carving, one cell visit per step.

use rand::prelude::*;

use crate::maze::grid::{Grid, VISITED, WORKING};
use crate::stepper::Steppable;

/// Default grid dimensions when none are configured.
pub const DEFAULT_WIDTH: usize = 32;
pub const DEFAULT_HEIGHT: usize = 32;

/// Depth-first maze carving with the recursion replaced by an explicit
/// stack of positions, so backtracking can pause between any two cell
/// visits.
///
/// Each step pops one cell. If it has unvisited 4-connected neighbors, one
/// is chosen uniformly at random, the shared wall pair is cleared, and both
/// the cell and the neighbor are pushed so the branch resumes later. A cell
/// with no unvisited neighbors is finalized: its [`WORKING`] flag is
/// cleared and the next step falls back to the previous cell on the stack.
pub struct RecursiveBacktracker {
    grid: Grid,
    stack: Vec<(usize, usize)>,
    rng: ThreadRng,
    done: bool,
}

impl RecursiveBacktracker {
    /// Create a generator over a `width` x `height` grid (clamped to 1x1).
    pub fn new(width: usize, height: usize) -> Self {
        let mut generator = RecursiveBacktracker {
            grid: Grid::with_dims(width, height),
            stack: Vec::new(),
            rng: rand::thread_rng(),
            done: false,
        };
        generator.restart();
        generator
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Reallocate to the new width and restart carving from scratch.
    pub fn set_width(&mut self, width: usize) {
        self.grid.resize(width, self.grid.height());
        self.restart();
    }

    /// Reallocate to the new height and restart carving from scratch.
    pub fn set_height(&mut self, height: usize) {
        self.grid.resize(self.grid.width(), height);
        self.restart();
    }

    /// Refill the grid and seed the walk at the origin.
    fn restart(&mut self) {
        self.grid.reset();
        self.stack.clear();
        self.stack.push((0, 0));
        self.grid.add_flags(0, 0, VISITED | WORKING);
        self.done = false;
    }
}

impl Steppable for RecursiveBacktracker {
    fn step(&mut self) {
        if self.done {
            return;
        }

        let (x, y) = match self.stack.pop() {
            Some(position) => position,
            None => {
                self.done = true;
                return;
            }
        };

        let neighbors = self.grid.unvisited_neighbors(x, y);
        if neighbors.is_empty() {
            // Dead end: finalize this cell and fall back.
            self.grid.remove_flags(x, y, WORKING);
        } else {
            let next = neighbors[self.rng.gen_range(0..neighbors.len())];
            self.grid.clear_wall_between((x, y), next);
            self.grid.add_flags(next.0, next.1, VISITED | WORKING);
            self.stack.push((x, y));
            self.stack.push(next);
        }

        if self.stack.is_empty() {
            self.done = true;
        }
    }

    fn reset(&mut self) {
        self.restart();
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::grid::ALL_WALLS;

    #[test]
    fn test_one_by_one_finishes_in_a_single_step() {
        let mut generator = RecursiveBacktracker::new(1, 1);
        assert!(!generator.is_done());
        generator.step();
        assert!(generator.is_done());
        assert!(!generator.grid().has_flags(0, 0, WORKING));
        assert!(generator.grid().has_flags(0, 0, VISITED));
    }

    #[test]
    fn test_zero_dims_clamp_to_one() {
        let generator = RecursiveBacktracker::new(0, 0);
        assert_eq!(generator.width(), 1);
        assert_eq!(generator.height(), 1);
    }

    #[test]
    fn test_reset_restores_walls_and_seed() {
        let mut generator = RecursiveBacktracker::new(4, 4);
        generator.finish();
        generator.reset();
        assert!(!generator.is_done());
        assert_eq!(generator.grid().flags_at(0, 0), ALL_WALLS | VISITED | WORKING);
        // Every other cell is fully walled and unvisited again.
        for (index, &cell) in generator.grid().cells().iter().enumerate() {
            if index != 0 {
                assert_eq!(cell, ALL_WALLS);
            }
        }
    }

    #[test]
    fn test_resize_restarts() {
        let mut generator = RecursiveBacktracker::new(4, 4);
        generator.finish();
        generator.set_width(6);
        assert_eq!(generator.width(), 6);
        assert_eq!(generator.height(), 4);
        assert!(!generator.is_done());
    }
}
