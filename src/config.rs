// ============================================================================
// CLOCK FACE CONFIGURATION
// ============================================================================

use bon::Builder;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 144;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;
/// Stroke width shared by all three rings.
pub const CIRCLE_THICKNESS: i32 = 5;
/// 12 o'clock in screen coordinates (y grows downwards, angles run clockwise).
pub const START_ANGLE_DEGREES: f64 = -90.0;

pub const HOURS_RADIUS: i32 = 20;
pub const MINUTES_RADIUS: i32 = 40;
pub const SECONDS_RADIUS: i32 = 60;

/// Color representation for ring strokes and the background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Everything the face and its host window need to know up front.
#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    #[builder(default = "arcclock".to_string())]
    pub title: String,

    // Screen configuration
    #[builder(default = SCREEN_WIDTH)]
    pub width: u32,
    #[builder(default = SCREEN_HEIGHT)]
    pub height: u32,
    /// Integer upscale applied to the window; the framebuffer keeps `width` x `height`.
    #[builder(default = 3)]
    pub scale: u32,

    // Ring configuration
    #[builder(default = CIRCLE_THICKNESS)]
    pub thickness: i32,
    #[builder(default = START_ANGLE_DEGREES)]
    pub start_angle: f64,
    #[builder(default = HOURS_RADIUS)]
    pub hours_radius: i32,
    #[builder(default = MINUTES_RADIUS)]
    pub minutes_radius: i32,
    #[builder(default = SECONDS_RADIUS)]
    pub seconds_radius: i32,

    // Colors
    #[builder(default = Color::WHITE)]
    pub foreground: Color,
    #[builder(default = Color::BLACK)]
    pub background: Color,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
