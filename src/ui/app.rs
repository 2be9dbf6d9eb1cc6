//! Main TUI application state and logic
//!
//! The app is the external driver the stepping core is written for: it owns
//! the active unit's lifecycle, decides the stepping cadence (per play tick,
//! one key at a time, or a tight loop for "finish now"), and reads state
//! back out for the panes after every advance. The core never runs on its
//! own between these calls.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::maze::backtracker::{self, RecursiveBacktracker};
use crate::settings::{self, Settings};
use crate::sort::{bubble, quick, BubbleSort, QuickSort};
use crate::stepper::{AlgorithmKind, Steppable};

/// How long play mode waits between bursts of steps.
const PLAY_INTERVAL: Duration = Duration::from_millis(15);
/// Event poll timeout; also the redraw cadence while playing.
const POLL_INTERVAL: Duration = Duration::from_millis(16);
/// Space debounce, to keep key repeat from toggling play mode twice.
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Bounds for the interactive size and speed controls.
const MAX_SORT_LEN: usize = 4096;
const MAX_MAZE_DIM: usize = 128;
const MAZE_DIM_STEP: usize = 4;
const MAX_SPEED: usize = 1024;

/// The active steppable unit.
///
/// The driver advances it through [`Steppable`]; the panes read whichever
/// concrete state the variant exposes (`data`/`active` or the flag grid).
pub enum Algorithm {
    Bubble(BubbleSort),
    Quick(QuickSort),
    Maze(RecursiveBacktracker),
}

impl Algorithm {
    fn unit(&self) -> &dyn Steppable {
        match self {
            Algorithm::Bubble(sorter) => sorter,
            Algorithm::Quick(sorter) => sorter,
            Algorithm::Maze(generator) => generator,
        }
    }

    fn unit_mut(&mut self) -> &mut dyn Steppable {
        match self {
            Algorithm::Bubble(sorter) => sorter,
            Algorithm::Quick(sorter) => sorter,
            Algorithm::Maze(generator) => generator,
        }
    }
}

/// Construction sizes resolved from the command line. `None` falls back to
/// the saved settings, then to the per-algorithm default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub length: Option<usize>,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// The main application state
pub struct App {
    /// The active algorithm instance
    algorithm: Algorithm,
    kind: AlgorithmKind,

    /// Size overrides from the command line, reused across Tab switches
    options: Options,

    /// Persisted settings (best-effort; failures never stop the app)
    settings: Settings,

    /// Status message to display
    status_message: String,

    /// Steps taken since the last reset/resize/switch
    steps_taken: usize,

    /// Steps per play burst
    speed: usize,

    /// Whether auto-play mode is active
    is_playing: bool,

    /// Last time a play burst ran
    last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create an app driving the given algorithm.
    pub fn new(kind: AlgorithmKind, options: Options, settings: Settings) -> Self {
        let speed = settings
            .get_usize(settings::KEY_SPEED)
            .unwrap_or(1)
            .clamp(1, MAX_SPEED);
        let algorithm = build_algorithm(kind, options, &settings);

        App {
            algorithm,
            kind,
            options,
            settings,
            status_message: String::from("Ready!"),
            steps_taken: 0,
            speed,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(SPACE_DEBOUNCE)
                .unwrap_or_else(Instant::now),
            should_quit: false,
        }
    }

    /// Run the TUI event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                self.advance(self.speed);
                if self.algorithm.unit().is_done() {
                    self.is_playing = false;
                    self.status_message = String::from("Run complete");
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout so play mode keeps ticking
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main pane plus a one-line status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let done = self.algorithm.unit().is_done();

        match &self.algorithm {
            Algorithm::Bubble(sorter) => {
                let title = format!("Bubble Sort ({} elements)", sorter.len());
                super::panes::render_sort_pane(frame, chunks[0], sorter.buffer(), done, &title);
            }
            Algorithm::Quick(sorter) => {
                let title = format!("Quick Sort ({} elements)", sorter.len());
                super::panes::render_sort_pane(frame, chunks[0], sorter.buffer(), done, &title);
            }
            Algorithm::Maze(generator) => {
                let title = format!(
                    "Recursive Backtracker ({}x{})",
                    generator.width(),
                    generator.height()
                );
                super::panes::render_maze_pane(frame, chunks[0], generator.grid(), done, &title);
            }
        }

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.steps_taken,
            self.is_playing,
            done,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.advance(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.is_playing = false;
                let stepped = self.advance(1);
                self.status_message = if stepped == 1 {
                    String::from("Stepped forward")
                } else {
                    String::from("Already done (press r to reset)")
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced against key repeat)
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = format!("Playing ({} step/tick)", self.speed);
                    } else {
                        self.status_message = String::from("Paused");
                    }
                }
            }
            KeyCode::Enter => {
                // Run the rest of the algorithm in a tight loop
                self.is_playing = false;
                while !self.algorithm.unit().is_done() {
                    self.algorithm.unit_mut().step();
                    self.steps_taken += 1;
                }
                self.status_message = String::from("Finished");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.algorithm.unit_mut().reset();
                self.steps_taken = 0;
                self.status_message = String::from("Reset");
            }
            KeyCode::Tab => {
                self.switch_algorithm();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.resize_grow();
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.resize_shrink();
            }
            KeyCode::Char(']') => {
                self.speed = (self.speed * 2).min(MAX_SPEED);
                self.settings
                    .set(settings::KEY_SPEED, self.speed.to_string());
                self.status_message = format!("Speed: {} step(s) per tick", self.speed);
            }
            KeyCode::Char('[') => {
                self.speed = (self.speed / 2).max(1);
                self.settings
                    .set(settings::KEY_SPEED, self.speed.to_string());
                self.status_message = format!("Speed: {} step(s) per tick", self.speed);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.export_maze();
            }
            _ => {}
        }
    }

    /// Step up to `n` times, stopping at completion. Returns the number of
    /// steps actually taken.
    fn advance(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.algorithm.unit().is_done() {
                break;
            }
            self.algorithm.unit_mut().step();
            self.steps_taken += 1;
            stepped += 1;
        }
        stepped
    }

    /// Cycle to the next algorithm, constructing a fresh unit for it.
    fn switch_algorithm(&mut self) {
        self.is_playing = false;
        self.kind = self.kind.next();
        self.algorithm = build_algorithm(self.kind, self.options, &self.settings);
        self.steps_taken = 0;
        self.settings
            .set(settings::KEY_ALGORITHM, self.kind.name().to_string());
        self.status_message = format!("Algorithm: {}", self.kind.name());
    }

    fn resize_grow(&mut self) {
        self.is_playing = false;
        match &mut self.algorithm {
            Algorithm::Bubble(sorter) => {
                let len = (sorter.len() * 2).min(MAX_SORT_LEN);
                sorter.set_len(len);
                self.after_sort_resize(len);
            }
            Algorithm::Quick(sorter) => {
                let len = (sorter.len() * 2).min(MAX_SORT_LEN);
                sorter.set_len(len);
                self.after_sort_resize(len);
            }
            Algorithm::Maze(generator) => {
                let width = (generator.width() + MAZE_DIM_STEP).min(MAX_MAZE_DIM);
                let height = (generator.height() + MAZE_DIM_STEP).min(MAX_MAZE_DIM);
                generator.set_width(width);
                generator.set_height(height);
                self.after_maze_resize(width, height);
            }
        }
    }

    fn resize_shrink(&mut self) {
        self.is_playing = false;
        match &mut self.algorithm {
            Algorithm::Bubble(sorter) => {
                let len = (sorter.len() / 2).max(1);
                sorter.set_len(len);
                self.after_sort_resize(len);
            }
            Algorithm::Quick(sorter) => {
                let len = (sorter.len() / 2).max(1);
                sorter.set_len(len);
                self.after_sort_resize(len);
            }
            Algorithm::Maze(generator) => {
                let width = generator.width().saturating_sub(MAZE_DIM_STEP).max(1);
                let height = generator.height().saturating_sub(MAZE_DIM_STEP).max(1);
                generator.set_width(width);
                generator.set_height(height);
                self.after_maze_resize(width, height);
            }
        }
    }

    fn after_sort_resize(&mut self, len: usize) {
        self.steps_taken = 0;
        self.settings
            .set(settings::KEY_SORT_LENGTH, len.to_string());
        self.status_message = format!("Resized to {} elements", len);
    }

    fn after_maze_resize(&mut self, width: usize, height: usize) {
        self.steps_taken = 0;
        self.settings
            .set(settings::KEY_MAZE_WIDTH, width.to_string());
        self.settings
            .set(settings::KEY_MAZE_HEIGHT, height.to_string());
        self.status_message = format!("Resized to {}x{}", width, height);
    }

    /// Write the raw cell flags of the current maze to a file.
    fn export_maze(&mut self) {
        let Algorithm::Maze(generator) = &self.algorithm else {
            self.status_message = String::from("Export works on mazes (Tab to switch)");
            return;
        };

        let path = format!("maze-{}x{}.bin", generator.width(), generator.height());
        match std::fs::write(&path, generator.grid().cells()) {
            Ok(()) => {
                self.status_message = format!("Exported {}", path);
            }
            Err(err) => {
                log::warn!("maze export to {} failed: {}", path, err);
                self.status_message = format!("Export failed: {}", err);
            }
        }
    }
}

/// Construct a unit for `kind`, resolving sizes from the command line,
/// then saved settings, then the per-algorithm default.
fn build_algorithm(kind: AlgorithmKind, options: Options, settings: &Settings) -> Algorithm {
    match kind {
        AlgorithmKind::Bubble => {
            let len = options
                .length
                .or_else(|| settings.get_usize(settings::KEY_SORT_LENGTH))
                .unwrap_or(bubble::DEFAULT_LEN);
            Algorithm::Bubble(BubbleSort::new(len))
        }
        AlgorithmKind::Quick => {
            let len = options
                .length
                .or_else(|| settings.get_usize(settings::KEY_SORT_LENGTH))
                .unwrap_or(quick::DEFAULT_LEN);
            Algorithm::Quick(QuickSort::new(len))
        }
        AlgorithmKind::Backtracker => {
            let width = options
                .width
                .or_else(|| settings.get_usize(settings::KEY_MAZE_WIDTH))
                .unwrap_or(backtracker::DEFAULT_WIDTH);
            let height = options
                .height
                .or_else(|| settings.get_usize(settings::KEY_MAZE_HEIGHT))
                .unwrap_or(backtracker::DEFAULT_HEIGHT);
            Algorithm::Maze(RecursiveBacktracker::new(width, height))
        }
    }
}
