// ============================================================================
// CLOCK FACE (OWNING CONTEXT)
// ============================================================================

use crate::arc::ArcRenderer;
use crate::clock::HandFractions;
use crate::config::{ClockConfig, Color};
use crate::layer::{ArcLayer, Hand};
use crate::surface::{Compositor, Point, Surface};

/// The three concentric rings and the renderer they share.
///
/// A face only exists between [`ClockFace::on_setup`] and
/// [`ClockFace::on_teardown`], so nothing can be drawn before setup.
#[derive(Debug)]
pub struct ClockFace {
    hours: ArcLayer,
    minutes: ArcLayer,
    seconds: ArcLayer,
    renderer: ArcRenderer,
    background: Color,
}

impl ClockFace {
    /// Build the layers and paint the zero baseline of every ring.
    pub fn on_setup<S: Surface + ?Sized>(surface: &mut S, config: &ClockConfig) -> Self {
        let (width, height) = surface.size();
        let origin = Point::new(width as i32 / 2, height as i32 / 2);

        let mut face = Self {
            hours: ArcLayer::new(Hand::Hours, config.hours_radius, origin, config.thickness),
            minutes: ArcLayer::new(Hand::Minutes, config.minutes_radius, origin, config.thickness),
            seconds: ArcLayer::new(Hand::Seconds, config.seconds_radius, origin, config.thickness),
            renderer: ArcRenderer::from_config(config),
            background: config.background,
        };
        face.render_all(surface);

        log::info!("clock face set up on {width}x{height} surface");
        face
    }

    /// Release all layers.
    pub fn on_teardown(self) {
        log::info!(
            "clock face torn down at {:.4}/{:.4}/{:.4}",
            self.hours.percent(),
            self.minutes.percent(),
            self.seconds.percent()
        );
    }

    pub fn layer(&self, hand: Hand) -> &ArcLayer {
        match hand {
            Hand::Hours => &self.hours,
            Hand::Minutes => &self.minutes,
            Hand::Seconds => &self.seconds,
        }
    }

    pub fn layers(&self) -> [&ArcLayer; 3] {
        [&self.hours, &self.minutes, &self.seconds]
    }

    pub fn fractions(&self) -> HandFractions {
        HandFractions {
            hours: self.hours.percent(),
            minutes: self.minutes.percent(),
            seconds: self.seconds.percent(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.layers().iter().any(|layer| layer.is_dirty())
    }

    /// Push a consistent triple into the layers. Returns how many changed.
    pub fn apply<C: Compositor + ?Sized>(
        &mut self,
        fractions: HandFractions,
        compositor: &mut C,
    ) -> usize {
        [
            self.hours.update(fractions.hours, compositor),
            self.minutes.update(fractions.minutes, compositor),
            self.seconds.update(fractions.seconds, compositor),
        ]
        .iter()
        .filter(|changed| **changed)
        .count()
    }

    /// Repaint the layers whose model moved since they were last drawn.
    pub fn render_dirty<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let renderer = &self.renderer;
        let mut painted = 0;
        for layer in [&mut self.hours, &mut self.minutes, &mut self.seconds] {
            if layer.is_dirty() {
                layer.render(surface, renderer);
                painted += 1;
            }
        }
        painted
    }

    /// Repaint everything, for when the surface contents were lost.
    pub fn render_all<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.background);
        let renderer = &self.renderer;
        for layer in [&mut self.hours, &mut self.minutes, &mut self.seconds] {
            layer.render(surface, renderer);
        }
    }
}
