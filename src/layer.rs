// ============================================================================
// ARC LAYERS
// ============================================================================

use std::fmt;

use crate::arc::{ArcModel, ArcRenderer};
use crate::surface::{Compositor, Point, Rect, Surface};

/// Which clock hand a layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Hours,
    Minutes,
    Seconds,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hours, Hand::Minutes, Hand::Seconds];
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hand::Hours => "hours",
            Hand::Minutes => "minutes",
            Hand::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// One ring on screen: owns its model and knows when it must be repainted.
///
/// The layer is dirty while the model's percent differs from the percent it
/// last rendered. Equality is exact; inputs come from whole seconds, minutes
/// and hours, so they only ever move in discrete steps.
#[derive(Debug, Clone)]
pub struct ArcLayer {
    hand: Hand,
    model: ArcModel,
    origin: Point,
    region: Rect,
    rendered: f64,
}

impl ArcLayer {
    /// A clean layer at 0% for a ring of `radius` around `origin`.
    pub fn new(hand: Hand, radius: i32, origin: Point, thickness: i32) -> Self {
        // The erase stroke reaches one pixel past the ring, plus one for anti-aliasing.
        let region = Rect::around(origin, radius, 2);
        debug_assert!(thickness < radius, "ring thicker than its radius");
        Self {
            hand,
            model: ArcModel::new(radius),
            origin,
            region,
            rendered: 0.0,
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn model(&self) -> &ArcModel {
        &self.model
    }

    pub fn percent(&self) -> f64 {
        self.model.percent()
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn is_dirty(&self) -> bool {
        self.model.percent() != self.rendered
    }

    /// Store `percent` and schedule a repaint if it differs from the current value.
    ///
    /// Returns whether a repaint was scheduled.
    pub fn update<C: Compositor + ?Sized>(&mut self, percent: f64, compositor: &mut C) -> bool {
        if percent == self.model.percent() {
            return false;
        }

        self.model.set_percent(percent);
        compositor.mark_dirty(self.region);
        true
    }

    /// Repaint the ring from the model; the layer is clean afterwards.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, renderer: &ArcRenderer) {
        renderer.erase(surface, self.origin, self.model.radius());
        renderer.paint(surface, self.origin, &self.model);
        self.rendered = self.model.percent();
        log::trace!("{} ring rendered at {:.4}", self.hand, self.rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClockConfig, Color};
    use crate::surface::ArcStroke;

    #[derive(Default)]
    struct CountingCompositor {
        regions: Vec<Rect>,
    }

    impl Compositor for CountingCompositor {
        fn mark_dirty(&mut self, region: Rect) {
            self.regions.push(region);
        }
    }

    #[derive(Default)]
    struct Recorder {
        strokes: Vec<ArcStroke>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (144, 168)
        }

        fn clear(&mut self, _color: Color) {}

        fn stroke_arc(&mut self, stroke: &ArcStroke) {
            self.strokes.push(*stroke);
        }
    }

    fn seconds_layer() -> ArcLayer {
        ArcLayer::new(Hand::Seconds, 60, Point::new(72, 84), 5)
    }

    #[test]
    fn starts_clean_at_zero() {
        let layer = seconds_layer();
        assert_eq!(layer.percent(), 0.0);
        assert!(!layer.is_dirty());
    }

    #[test]
    fn same_value_is_a_noop() {
        let mut layer = seconds_layer();
        let mut compositor = CountingCompositor::default();

        assert!(!layer.update(0.0, &mut compositor));
        assert!(compositor.regions.is_empty());
        assert!(!layer.is_dirty());
    }

    #[test]
    fn duplicate_update_schedules_one_repaint() {
        let mut layer = seconds_layer();
        let mut compositor = CountingCompositor::default();

        assert!(layer.update(0.2, &mut compositor));
        assert!(!layer.update(0.2, &mut compositor));

        assert_eq!(compositor.regions, vec![layer.region()]);
        assert!(layer.is_dirty());
    }

    #[test]
    fn render_cleans_the_layer() {
        let renderer = ArcRenderer::from_config(&ClockConfig::default());
        let mut layer = seconds_layer();
        let mut compositor = CountingCompositor::default();
        let mut surface = Recorder::default();

        layer.update(0.5, &mut compositor);
        layer.render(&mut surface, &renderer);

        assert!(!layer.is_dirty());
        // Erase pass, then the arc itself.
        assert_eq!(surface.strokes.len(), 2);
        assert_eq!(surface.strokes[0].color, Color::BLACK);
        assert_eq!(surface.strokes[1].end_angle, 90.0);
    }

    #[test]
    fn wraparound_is_a_change() {
        let renderer = ArcRenderer::from_config(&ClockConfig::default());
        let mut layer = ArcLayer::new(Hand::Hours, 20, Point::new(72, 84), 5);
        let mut compositor = CountingCompositor::default();
        let mut surface = Recorder::default();

        layer.update(11.0 / 12.0, &mut compositor);
        layer.render(&mut surface, &renderer);
        assert!(layer.update(0.0, &mut compositor));
        assert!(layer.is_dirty());
        assert_eq!(compositor.regions.len(), 2);
    }

    #[test]
    fn region_encloses_the_ring() {
        let layer = seconds_layer();
        let region = layer.region();
        assert!(region.contains(Point::new(72 - 61, 84)));
        assert!(region.contains(Point::new(72 + 61, 84)));
        assert!(region.contains(Point::new(72, 84 - 61)));
        assert!(region.contains(Point::new(72, 84 + 61)));
    }

    #[test]
    fn hands_display_lowercase() {
        let names: Vec<String> = Hand::ALL.iter().map(|hand| hand.to_string()).collect();
        assert_eq!(names, ["hours", "minutes", "seconds"]);
    }
}
