use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,     // unsettled sort bars
    pub active: Color,  // elements touched by the current step
    pub done: Color,    // finished run
    pub wall: Color,    // maze walls and corners
    pub carved: Color,  // visited maze cells
    pub working: Color, // cells on the active DFS path
    pub unvisited: Color,
    pub border: Color,
    pub title: Color,
    pub status_bg: Color,
    pub status_key: Color,
    pub primary: Color, // step counter badge
    pub accent: Color,  // play indicator
    pub success: Color, // done indicator
    pub comment: Color, // separators, muted text
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(205, 214, 244),     // Near-white bars
    active: Color::Rgb(166, 227, 161),  // Green for the current comparison
    done: Color::Rgb(166, 227, 161),    // Green once settled
    wall: Color::Rgb(108, 112, 134),    // Grey walls
    carved: Color::Rgb(205, 214, 244),  // Near-white carved cells
    working: Color::Rgb(166, 227, 161), // Green DFS path
    unvisited: Color::Rgb(49, 50, 68),  // Dark uncarved cells
    border: Color::Rgb(108, 112, 134),  // Grey border
    title: Color::Rgb(249, 226, 175),   // Yellow pane title
    status_bg: Color::Rgb(50, 50, 70),  // Slightly lighter BG for the bar
    status_key: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250), // Blue
    accent: Color::Rgb(250, 179, 135),  // Orange
    success: Color::Rgb(166, 227, 161), // Green
    comment: Color::Rgb(108, 112, 134),
};
