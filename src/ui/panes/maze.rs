//! Maze grid rendering.
//!
//! A `w` x `h` grid renders as `(2w+1)` x `(2h+1)` characters: odd text
//! rows/columns hold cells, even ones hold the shared walls and corners.
//! Wall characters are drawn from the wall flags of the adjacent cell, so
//! the picture always reflects exactly what the generator has carved.
//! Cells on the active depth-first path keep their working highlight until
//! the generator backtracks through them.

use crate::maze::grid::{Grid, VISITED, WALL_BOTTOM, WALL_LEFT, WALL_RIGHT, WALL_TOP, WORKING};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the maze pane.
pub fn render_maze_pane(frame: &mut Frame, area: Rect, grid: &Grid, done: bool, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(DEFAULT_THEME.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let width = grid.width();
    let height = grid.height();

    let text_rows = 2 * height + 1;
    let text_cols = 2 * width + 1;

    let wall = Span::styled("█", Style::default().fg(DEFAULT_THEME.wall));
    let gap = Span::raw(" ");

    let mut lines = Vec::with_capacity(text_rows);
    for text_row in 0..text_rows {
        let mut spans = Vec::with_capacity(text_cols);
        for text_col in 0..text_cols {
            let row_is_cell = text_row % 2 == 1;
            let col_is_cell = text_col % 2 == 1;

            let span = if row_is_cell && col_is_cell {
                let x = (text_col - 1) / 2;
                let y = (text_row - 1) / 2;
                cell_span(grid, x, y, done)
            } else if row_is_cell {
                // Vertical wall between (x-1, y) and (x, y).
                let x = text_col / 2;
                let y = (text_row - 1) / 2;
                let present = if x < width {
                    grid.has_flags(x, y, WALL_LEFT)
                } else {
                    grid.has_flags(width - 1, y, WALL_RIGHT)
                };
                if present { wall.clone() } else { gap.clone() }
            } else if col_is_cell {
                // Horizontal wall between (x, y-1) and (x, y).
                let x = (text_col - 1) / 2;
                let y = text_row / 2;
                let present = if y < height {
                    grid.has_flags(x, y, WALL_TOP)
                } else {
                    grid.has_flags(x, height - 1, WALL_BOTTOM)
                };
                if present { wall.clone() } else { gap.clone() }
            } else {
                // Corners stay filled; carving only ever opens wall centers.
                wall.clone()
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn cell_span(grid: &Grid, x: usize, y: usize, done: bool) -> Span<'static> {
    if !grid.has_flags(x, y, VISITED) {
        Span::styled("░", Style::default().fg(DEFAULT_THEME.unvisited))
    } else if grid.has_flags(x, y, WORKING) {
        Span::styled("█", Style::default().fg(DEFAULT_THEME.working))
    } else if done {
        Span::styled("█", Style::default().fg(DEFAULT_THEME.done))
    } else {
        Span::styled("█", Style::default().fg(DEFAULT_THEME.carved))
    }
}
