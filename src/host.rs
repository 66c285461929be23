// ============================================================================
// DESKTOP HOST (WINIT + PIXELS)
// ============================================================================
//
// Plays the part of the watch platform: owns the window and event loop,
// wakes once per wall-clock second, turns dirty marks into redraw requests
// and hands the framebuffer to the face when a redraw comes in.

use std::time::Instant;

use anyhow::Context;
use chrono::Timelike;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::canvas::Canvas;
use crate::clock::{until_next_second, ClockDriver, TimeSource};
use crate::config::ClockConfig;
use crate::face::ClockFace;
use crate::surface::{Compositor, Rect};

/// Forwards dirty regions to winit, which folds them into a single redraw.
pub struct WindowCompositor<'a> {
    window: &'a Window,
}

impl<'a> WindowCompositor<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl Compositor for WindowCompositor<'_> {
    fn mark_dirty(&mut self, region: Rect) {
        log::trace!("dirty region {region:?}");
        self.window.request_redraw();
    }
}

fn next_tick() -> Instant {
    Instant::now() + until_next_second(chrono::Local::now().nanosecond())
}

/// Open the clock window and run until it is closed.
pub fn run<T: TimeSource>(config: ClockConfig, driver: ClockDriver<T>) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(
            (config.width * config.scale) as f64,
            (config.height * config.scale) as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;

    let window = std::sync::Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(config.width, config.height, surface_texture)
        .map_err(|err| anyhow::anyhow!("failed to create pixel buffer: {err}"))?;
    log::info!(
        "window {}x{} for a {}x{} face",
        size.width,
        size.height,
        config.width,
        config.height
    );

    let (fb_width, fb_height) = (config.width as usize, config.height as usize);
    let mut face: Option<ClockFace> = None;
    let mut deadline = Instant::now();

    event_loop.run(move |event, window_target| match event {
        Event::NewEvents(StartCause::Init) => {
            let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
            let mut clock_face = ClockFace::on_setup(&mut canvas, &config);
            driver.on_tick(&mut clock_face, &mut WindowCompositor::new(&window_clone));
            face = Some(clock_face);
            window_clone.request_redraw();
            deadline = next_tick();
        }
        Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            if let Some(ref mut face) = face {
                driver.on_tick(face, &mut WindowCompositor::new(&window_clone));
            }
            deadline = next_tick();
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                if let Some(face) = face.take() {
                    face.on_teardown();
                }
                window_target.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                    log::error!("failed to resize surface: {err}");
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(ref mut face) = face {
                    let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                    face.render_dirty(&mut canvas);
                }
                if let Err(err) = pixels.render() {
                    log::error!("failed to present frame: {err}");
                    if let Some(face) = face.take() {
                        face.on_teardown();
                    }
                    window_target.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            window_target.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
        _ => {}
    })?;

    Ok(())
}
