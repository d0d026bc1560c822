use egui::Color32;

/// Columns in the color picker grid.
pub const GRID_COLUMNS: usize = 8;

/// 40 vibrant, kid-friendly colors.
pub const COLOR_PALETTE: [Color32; 40] = [
    // Reds & Pinks
    Color32::from_rgb(0xFF, 0x6B, 0x6B),
    Color32::from_rgb(0xFF, 0x52, 0x52),
    Color32::from_rgb(0xF4, 0x43, 0x36),
    Color32::from_rgb(0xE9, 0x1E, 0x63),
    Color32::from_rgb(0xFF, 0x17, 0x44),
    Color32::from_rgb(0xF5, 0x00, 0x57),
    Color32::from_rgb(0xFF, 0x40, 0x81),
    Color32::from_rgb(0xFF, 0x80, 0xAB),
    // Oranges & Yellows
    Color32::from_rgb(0xFF, 0xA0, 0x7A),
    Color32::from_rgb(0xFF, 0x98, 0x00),
    Color32::from_rgb(0xFF, 0x6F, 0x00),
    Color32::from_rgb(0xFF, 0xB3, 0x00),
    Color32::from_rgb(0xF7, 0xDC, 0x6F),
    Color32::from_rgb(0xFF, 0xEB, 0x3B),
    Color32::from_rgb(0xFD, 0xD8, 0x35),
    Color32::from_rgb(0xFF, 0xFF, 0x00),
    // Greens
    Color32::from_rgb(0x52, 0xBE, 0x80),
    Color32::from_rgb(0x4C, 0xAF, 0x50),
    Color32::from_rgb(0x8B, 0xC3, 0x4A),
    Color32::from_rgb(0xCD, 0xDC, 0x39),
    Color32::from_rgb(0x66, 0xBB, 0x6A),
    Color32::from_rgb(0x81, 0xC7, 0x84),
    Color32::from_rgb(0x00, 0xE6, 0x76),
    Color32::from_rgb(0x69, 0xF0, 0xAE),
    // Blues & Cyans
    Color32::from_rgb(0x45, 0xB7, 0xD1),
    Color32::from_rgb(0x21, 0x96, 0xF3),
    Color32::from_rgb(0x03, 0xA9, 0xF4),
    Color32::from_rgb(0x00, 0xBC, 0xD4),
    Color32::from_rgb(0x00, 0x97, 0xA7),
    Color32::from_rgb(0x00, 0x60, 0x64),
    Color32::from_rgb(0x80, 0xDE, 0xEA),
    Color32::from_rgb(0x84, 0xFF, 0xFF),
    // Purples & Magentas
    Color32::from_rgb(0xBB, 0x8F, 0xCE),
    Color32::from_rgb(0x9C, 0x27, 0xB0),
    Color32::from_rgb(0x67, 0x3A, 0xB7),
    Color32::from_rgb(0x7C, 0x4D, 0xFF),
    Color32::from_rgb(0xD5, 0x00, 0xF9),
    Color32::from_rgb(0xE1, 0xBE, 0xE7),
    Color32::from_rgb(0xCE, 0x93, 0xD8),
    Color32::from_rgb(0xBA, 0x68, 0xC8),
];

/// Starting color on first launch.
pub const DEFAULT_COLOR: Color32 = COLOR_PALETTE[0];
