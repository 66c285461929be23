// ============================================================================
// ARC MODEL & RENDERER
// ============================================================================

use crate::config::{ClockConfig, Color};
use crate::surface::{ArcStroke, Point, Surface};

/// Progress of one hand as a fraction of a full revolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcModel {
    percent: f64, // Normalized [0,1], not enforced
    radius: i32,
}

impl ArcModel {
    pub fn new(radius: i32) -> Self {
        Self {
            percent: 0.0,
            radius,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Values outside [0, 1] are stored as given and sweep past a full turn
    /// (or backwards).
    pub fn set_percent(&mut self, percent: f64) {
        self.percent = percent;
    }

    pub fn angle_sweep_degrees(&self) -> f64 {
        360.0 * self.percent
    }
}

/// Paints ring segments for [`ArcModel`]s with a fixed stroke.
#[derive(Debug, Clone)]
pub struct ArcRenderer {
    thickness: i32,
    start_angle: f64,
    color: Color,
    background: Color,
}

impl ArcRenderer {
    pub fn new(thickness: i32, start_angle: f64, color: Color, background: Color) -> Self {
        Self {
            thickness,
            start_angle,
            color,
            background,
        }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(
            config.thickness,
            config.start_angle,
            config.foreground,
            config.background,
        )
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// The stroke `paint` would issue for `model` at `origin`.
    pub fn stroke_for(&self, origin: Point, model: &ArcModel) -> ArcStroke {
        ArcStroke {
            center: origin,
            radius: model.radius(),
            thickness: self.thickness,
            start_angle: self.start_angle,
            end_angle: self.start_angle + model.angle_sweep_degrees(),
            color: self.color,
        }
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, model: &ArcModel) {
        surface.stroke_arc(&self.stroke_for(origin, model));
    }

    /// Paint the whole ring of `radius` in the background color, one pixel
    /// wider on both edges to swallow the anti-aliased fringe.
    pub fn erase<S: Surface + ?Sized>(&self, surface: &mut S, origin: Point, radius: i32) {
        surface.stroke_arc(&ArcStroke {
            center: origin,
            radius: radius + 1,
            thickness: self.thickness + 2,
            start_angle: self.start_angle,
            end_angle: self.start_angle + 360.0,
            color: self.background,
        });
    }
}
