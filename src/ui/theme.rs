use crate::settings::ThemeKind;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub function: Color,
    pub peg: Color,
    pub base: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub disk_text: Color,
    pub disks: [Color; 8], // Indexed by disk size - 1
}

impl Theme {
    pub fn for_kind(kind: ThemeKind) -> &'static Theme {
        match kind {
            ThemeKind::Light => &LIGHT_THEME,
            ThemeKind::Dark => &DARK_THEME,
        }
    }

    /// Fill color for a disk; sizes past the palette reuse the last color
    pub fn disk_color(&self, disk: u8) -> Color {
        let index = (disk.max(1) as usize - 1).min(self.disks.len() - 1);
        self.disks[index]
    }
}

const DISK_PALETTE: [Color; 8] = [
    Color::Rgb(255, 107, 107), // Red
    Color::Rgb(78, 205, 196),  // Teal
    Color::Rgb(69, 183, 209),  // Blue
    Color::Rgb(249, 202, 36),  // Yellow
    Color::Rgb(240, 147, 43),  // Orange
    Color::Rgb(235, 77, 75),   // Dark red
    Color::Rgb(108, 92, 231),  // Purple
    Color::Rgb(162, 155, 254), // Light purple
];

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(0, 0, 0),
    primary: Color::Rgb(30, 102, 245),
    secondary: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    keyword: Color::Rgb(0, 0, 255),        // Blue for keywords
    number: Color::Rgb(254, 100, 11),      // Orange for numbers
    function: Color::Rgb(0, 128, 128),     // Teal for function names
    peg: Color::Rgb(0, 0, 0),
    base: Color::Rgb(0, 0, 0),
    border_focused: Color::Rgb(223, 142, 29), // Amber border for focus
    border_normal: Color::Rgb(140, 143, 161),
    current_line_bg: Color::Rgb(230, 233, 239),
    disk_text: Color::Rgb(0, 0, 0),
    disks: DISK_PALETTE,
};

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(43, 43, 43),
    fg: Color::Rgb(255, 255, 255),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    number: Color::Rgb(250, 179, 135),
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    peg: Color::Rgb(102, 102, 102),
    base: Color::Rgb(102, 102, 102),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(60, 60, 70),
    disk_text: Color::Rgb(0, 0, 0),
    disks: DISK_PALETTE,
};
