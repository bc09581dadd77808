use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub muted: Color,     // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub accent: Color,    // Pink
    pub info: Color,      // Teal
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub highlight_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    muted: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(245, 194, 231),
    info: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
    highlight_bg: Color::Rgb(69, 71, 90),
};

impl Theme {
    /// Colour for a percentage score
    pub fn score_color(&self, score: f64) -> Color {
        if score >= 80.0 {
            self.success
        } else if score >= 60.0 {
            self.warning
        } else {
            self.error
        }
    }
}
