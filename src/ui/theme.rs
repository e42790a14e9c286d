//! Theme constants for the Tic-Tac-Toe window

use egui::Color32;

// Cell buttons: red symbols on blue
pub const CELL_BG: Color32 = Color32::from_rgb(0, 0, 255);
pub const CELL_BG_TAKEN: Color32 = Color32::from_rgb(20, 40, 170);
pub const CELL_SYMBOL: Color32 = Color32::from_rgb(255, 0, 0);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAITING: Color32 = Color32::from_rgb(255, 180, 50);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const CELL_SPACING: f32 = 6.0;
pub const MAX_CELL_SIZE: f32 = 140.0;
pub const SYMBOL_SIZE_RATIO: f32 = 0.5;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
