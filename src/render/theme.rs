use crossterm::style::Color;

pub struct Theme {
    pub token: Color,      // Green
    pub token_alt: Color,  // Yellow
    pub comment: Color,    // Grey
    pub error: Color,      // Red
    pub note: Color,       // Cyan
    pub category: Color,   // Yellow
    pub shift: Color,      // Cyan
    pub reduce: Color,     // Orange
    pub accept: Color,     // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    token: Color::Rgb { r: 166, g: 227, b: 161 },
    token_alt: Color::Rgb { r: 249, g: 226, b: 175 },
    comment: Color::Rgb { r: 108, g: 112, b: 134 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
    note: Color::Rgb { r: 148, g: 226, b: 213 },
    category: Color::Rgb { r: 249, g: 226, b: 175 },
    shift: Color::Rgb { r: 148, g: 226, b: 213 },
    reduce: Color::Rgb { r: 250, g: 179, b: 135 },
    accept: Color::Rgb { r: 166, g: 227, b: 161 },
};
