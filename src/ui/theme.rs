use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
    pub accent: Color, // Pink for counter values
    pub bar_default: Color,
    pub bar_compared: Color,  // Blue
    pub bar_swapped: Color,   // Red
    pub bar_sorted: Color,    // Green
    pub bar_highlight: Color, // Orange
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),      // Grey borders
    status_bg: Color::Rgb(50, 50, 70),      // Slightly lighter BG for the status bar
    accent: Color::Rgb(245, 194, 231),      // Pink for counter values
    bar_default: Color::Rgb(127, 132, 156), // Grey for untouched bars
    bar_compared: Color::Rgb(137, 180, 250), // Blue for compared bars
    bar_swapped: Color::Rgb(243, 139, 168), // Red for swapped bars
    bar_sorted: Color::Rgb(166, 227, 161),  // Green for settled bars
    bar_highlight: Color::Rgb(250, 179, 135), // Orange for pivot/key/cursor
};
