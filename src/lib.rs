// ============================================================================
// CRATE LAYOUT
// ============================================================================
//
// Three concentric rings show the hours, minutes and seconds of the local
// time. The core (`arc`, `layer`, `clock`, `face`) is host independent: it
// strokes arcs on a `Surface` and asks a `Compositor` for repaints. `canvas`
// and `host` supply those on the desktop through pixels and winit.

pub mod arc;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod face;
pub mod host;
pub mod layer;
pub mod surface;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use arc::{ArcModel, ArcRenderer};
pub use canvas::Canvas;
pub use clock::{ClockDriver, ClockTime, HandFractions, LocalClock, TimeSource};
pub use config::{ClockConfig, Color};
pub use face::ClockFace;
pub use layer::{ArcLayer, Hand};
pub use surface::{ArcStroke, Compositor, Point, Rect, Surface};

/// Open a window showing the local time until it is closed.
pub fn show(config: ClockConfig) -> anyhow::Result<()> {
    host::run(config, ClockDriver::new(LocalClock))
}
