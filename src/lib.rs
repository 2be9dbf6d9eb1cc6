//! # Introduction
//!
//! stepviz animates classic algorithms one step at a time in the terminal.
//! Every algorithm is re-expressed as an explicit, resumable state machine
//! behind a uniform single-step contract, so the UI can draw between any
//! two steps, run to completion in a tight loop, or sit paused
//! indefinitely.
//!
//! ## Architecture
//!
//! ```text
//! AlgorithmKind → Steppable unit → step() → buffer/grid state → panes → TUI
//! ```
//!
//! 1. [`stepper`] — the stepping contract and the algorithm registry.
//! 2. [`sort`] — bubble sort and quicksort over a shared numeric buffer,
//!    one comparison per step.
//! 3. [`maze`] — recursive-backtracker carving over a wall-flag grid, one
//!    cell visit per step.
//! 4. [`settings`] — best-effort persisted key-value settings.
//! 5. [`ui`] — ratatui-based driver and draw adapters; not part of the
//!    stable library API.
//!
//! The core never draws, blocks, or schedules itself: every unit of work
//! happens inside exactly one `step()` call made by the driver.

pub mod errors;
pub mod maze;
pub mod settings;
pub mod sort;
pub mod stepper;
pub mod ui;
