//! TUI pane rendering modules
//!
//! Stateless draw adapters: each render function takes the current
//! algorithm state read-only and paints it into a [`Frame`] region. Any
//! pacing decision — when and how often a step happens between draws —
//! belongs to [`crate::ui::app`], never here.
//!
//! - [`sort`]: buffer values as a bar chart with comparison highlighting
//! - [`maze`]: the wall-flag grid with the active DFS path highlighted
//! - [`status`]: status bar with keybindings and execution state
//!
//! [`Frame`]: ratatui::Frame

pub mod maze;
pub mod sort;
pub mod status;

pub use maze::render_maze_pane;
pub use sort::render_sort_pane;
pub use status::render_status_bar;
