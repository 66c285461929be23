//! Drawing collaborators the clock core talks to.
//!
//! The core never owns pixels. It asks a [`Surface`] to stroke arcs and asks
//! a [`Compositor`] to schedule a later render pass for a region.

use crate::config::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned region of the surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square that encloses a ring of `radius` around `center`, plus `margin` on every side.
    pub fn around(center: Point, radius: i32, margin: i32) -> Self {
        let half = radius.max(0) + margin.max(0);
        let side = (2 * half + 1) as u32;
        Self::new(center.x - half, center.y - half, side, side)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width as i32
            && point.y < self.y + self.height as i32
    }
}

/// One stroked ring segment.
///
/// Angles are in degrees, measured clockwise from 3 o'clock in screen
/// coordinates, so -90 is 12 o'clock. The ring covers the band between
/// `radius - thickness` and `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: i32,
    pub thickness: i32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color,
}

impl ArcStroke {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    fn stroke_arc(&mut self, stroke: &ArcStroke);
}

/// Schedules render passes. Implementations may coalesce several requests into one pass.
pub trait Compositor {
    fn mark_dirty(&mut self, region: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_bounds_are_centered() {
        let rect = Rect::around(Point::new(72, 84), 60, 1);
        assert_eq!(rect, Rect::new(11, 23, 123, 123));
        assert!(rect.contains(Point::new(72, 84)));
        assert!(rect.contains(Point::new(11, 23)));
        assert!(!rect.contains(Point::new(134, 84)));
    }

    #[test]
    fn sweep_is_signed() {
        let stroke = ArcStroke {
            center: Point::new(0, 0),
            radius: 10,
            thickness: 2,
            start_angle: -90.0,
            end_angle: -180.0,
            color: Color::WHITE,
        };
        assert_eq!(stroke.sweep(), -90.0);
    }
}
