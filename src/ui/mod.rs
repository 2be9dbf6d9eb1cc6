//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, play/pause
//!   cadence, algorithm switching and resizing
//! - **[`panes`]** — stateless render functions for the algorithm pane and
//!   the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AlgorithmKind`] and saved [`Settings`], then call [`App::run`] to
//! start the event loop.
//!
//! [`AlgorithmKind`]: crate::stepper::AlgorithmKind
//! [`Settings`]: crate::settings::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
