//! Sort buffer rendering as a bar chart.
//!
//! Each buffer value in `(0, 1]` becomes a vertical bar scaled to the pane
//! height. Bars taking part in the current comparison are highlighted; once
//! the run is done every bar switches to the settled color. When the buffer
//! is wider than the pane, columns sample the buffer evenly rather than
//! scrolling, so the whole array is always on screen.

use crate::sort::SortBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the sort pane.
pub fn render_sort_pane(frame: &mut Frame, area: Rect, buf: &SortBuffer, done: bool, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(DEFAULT_THEME.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2).max(1) as usize;

    let len = buf.len();
    let data = buf.data();

    // One buffer index per text column; with more elements than columns
    // this samples evenly, with fewer it repeats columns into wider bars.
    let index_for_column = |column: usize| -> usize { (column * len / inner_width).min(len - 1) };

    let mut lines = Vec::with_capacity(inner_height);
    for row in 0..inner_height {
        let mut spans = Vec::with_capacity(inner_width);
        for column in 0..inner_width {
            let index = index_for_column(column);
            let bar_height = (data[index] * inner_height as f64).ceil() as usize;

            // Rows are drawn top-down; a bar of height h fills the bottom h rows.
            if inner_height - row <= bar_height {
                let color = if done {
                    DEFAULT_THEME.done
                } else if buf.is_active(index) {
                    DEFAULT_THEME.active
                } else {
                    DEFAULT_THEME.bar
                };
                spans.push(Span::styled("█", Style::default().fg(color)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
