//! Steppable maze carving over a grid of wall-flag cells.
//!
//! - [`grid`]: the [`Grid`] of cells, each a bitset of visited/working/wall
//!   flags, plus the carving primitives
//! - [`backtracker`]: recursive-backtracker generation, one cell visit per
//!   step
//!
//! The generator owns its grid exclusively and exposes it read-only for
//! drawing. Resizing reallocates the whole grid and restarts the run.
//!
//! [`Grid`]: grid::Grid

pub mod backtracker;
pub mod grid;

pub use backtracker::RecursiveBacktracker;
pub use grid::Grid;
