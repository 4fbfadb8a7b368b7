//! GUI-specific constants for layout, colors and carousel projection

use egui;

/// Site window dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const PADDING: f32 = 12.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
/// Fade-in time of a page section when it is first revealed
pub const SECTION_REVEAL_SECS: f32 = 0.6;

/// Desktop side panels
pub const ACCORDION_WIDTH: f32 = 240.0;
pub const CONTENT_PANEL_WIDTH: f32 = 480.0;
/// Width the panel content is laid out at before scaling
pub const CONTENT_NATURAL_WIDTH: f32 = 560.0;

/// Header heights, normal and shrunk
pub const HEADER_HEIGHT: f32 = 64.0;
pub const HEADER_SHRUNK_HEIGHT: f32 = 40.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;

/// Mobile drawer
pub const DRAWER_WIDTH: f32 = 260.0;

/// Section dots
pub const DOT_RADIUS: f32 = 5.0;
pub const DOT_SPACING: f32 = 20.0;

/// Carousel stage
pub const CAROUSEL_STAGE_HEIGHT: f32 = 300.0;
pub const CAROUSEL_FIGURE_SIZE: egui::Vec2 = egui::vec2(130.0, 170.0);
/// CSS-style perspective distance used to project the ring
pub const CAROUSEL_PERSPECTIVE: f32 = 1000.0;

/// Modal
pub const MODAL_WIDTH: f32 = 420.0;

/// Palette
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(214, 112, 143);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(250, 228, 234);
pub const CREAM: egui::Color32 = egui::Color32::from_rgb(255, 249, 240);
pub const COCOA: egui::Color32 = egui::Color32::from_rgb(92, 58, 46);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(40, 150, 70);
pub const BACKDROP: egui::Color32 = egui::Color32::from_black_alpha(160);
