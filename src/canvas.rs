// ============================================================================
// RGBA FRAMEBUFFER
// ============================================================================

use crate::config::Color;
use crate::surface::{ArcStroke, Surface};

/// RGBA8 pixel buffer, one row after another, as handed out by `pixels`.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4, "frame smaller than {width}x{height}");
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(
            self.frame[idx],
            self.frame[idx + 1],
            self.frame[idx + 2],
        ))
    }

    fn blend(&mut self, x: usize, y: usize, color: Color, alpha: f64) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        let (r, g, b) = color.as_tuple();
        let a = alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| (src as f64 * a + dst as f64 * (1.0 - a)).round() as u8;
        let out = [
            mix(r, self.frame[idx]),
            mix(g, self.frame[idx + 1]),
            mix(b, self.frame[idx + 2]),
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }
}

impl Surface for Canvas<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn clear(&mut self, color: Color) {
        let (r, g, b) = color.as_tuple();
        let len = self.width * self.height * 4;
        for chunk in self.frame[..len].chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, 0xff]);
        }
    }

    fn stroke_arc(&mut self, stroke: &ArcStroke) {
        let (start, sweep) = if stroke.sweep() < 0.0 {
            (stroke.end_angle, -stroke.sweep())
        } else {
            (stroke.start_angle, stroke.sweep())
        };
        // A whole turn skips the angle test so the ring closes without a seam.
        let full_turn = sweep >= 360.0;

        let outer = stroke.radius as f64;
        let inner = (stroke.radius - stroke.thickness) as f64;
        let reach = stroke.radius + 1;
        let (cx, cy) = (stroke.center.x, stroke.center.y);

        let min_x = (cx - reach).max(0);
        let max_x = (cx + reach).min(self.width as i32 - 1);
        let min_y = (cy - reach).max(0);
        let max_y = (cy + reach).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x - cx) as f64;
                let dy = (y - cy) as f64;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < inner - 1.0 || dist > outer + 1.0 {
                    continue;
                }
                let aa = if dist > outer {
                    1.0 - (dist - outer)
                } else if dist < inner {
                    1.0 - (inner - dist)
                } else {
                    1.0
                };
                if aa <= 0.0 {
                    continue;
                }
                if !full_turn && !within_sweep(dx, dy, start, sweep) {
                    continue;
                }
                self.blend(x as usize, y as usize, stroke.color, aa);
            }
        }
    }
}

/// Whether the pixel at offset (dx, dy) lies in the clockwise sweep from
/// `start`. Pixels straddling either end ray count too, so a zero sweep
/// still leaves a one pixel tick.
fn within_sweep(dx: f64, dy: f64, start: f64, sweep: f64) -> bool {
    let angle = dy.atan2(dx).to_degrees();
    let offset = (angle - start).rem_euclid(360.0);
    offset <= sweep || on_ray(dx, dy, start) || on_ray(dx, dy, start + sweep)
}

fn on_ray(dx: f64, dy: f64, angle: f64) -> bool {
    let (sin, cos) = angle.to_radians().sin_cos();
    let along = dx * cos + dy * sin;
    let across = (dx * sin - dy * cos).abs();
    along > 0.0 && across <= 0.5
}
