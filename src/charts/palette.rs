//! Colours shared by the charts.

use egui::Color32;

pub const BAR_COLOR: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue
pub const BAR_ACTIVE_COLOR: Color32 = Color32::from_rgb(255, 127, 14); // Orange
pub const LINE_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
pub const POINT_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub const ARC_STROKE: Color32 = Color32::WHITE;
pub const AXIS_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
pub const GRID_COLOR: Color32 = Color32::from_rgb(220, 220, 220);

/// Twenty-colour categorical palette (paired dark/light hues).
pub const CATEGORY20: [Color32; 20] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(174, 199, 232),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(255, 187, 120),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(152, 223, 138),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(255, 152, 150),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(197, 176, 213),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(196, 156, 148),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(247, 182, 210),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(199, 199, 199),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(219, 219, 141),
    Color32::from_rgb(23, 190, 207),
    Color32::from_rgb(158, 218, 229),
];

/// Palette colour for the element at `index`, cycling after twenty.
pub fn category_color(index: usize) -> Color32 {
    CATEGORY20[index % CATEGORY20.len()]
}

/// Lighter variant used while the pointer is over an element.
pub fn highlight(color: Color32) -> Color32 {
    let lift = |c: u8| c.saturating_add((255 - c) / 3);
    Color32::from_rgb(lift(color.r()), lift(color.g()), lift(color.b()))
}
