use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use rtgp::app::{AppContext, KeyAction};
use rtgp::cli::Cli;
use rtgp::core::{translate_event, Clock, FpsCounter, LogRenderer};
use rtgp::scene::Scene;
use rtgp::settings::AppSettings;
use rtgp::traits::Button;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const HEADLESS_DELTA: f32 = 1.0 / 60.0;

// === Application ===

struct App {
    window: Option<Window>,
    context: AppContext,
    renderer: LogRenderer,
    clock: Clock,
    fps: FpsCounter,
    title: String,
}

impl App {
    fn new(context: AppContext, title: String) -> Self {
        Self {
            window: None,
            context,
            renderer: LogRenderer::default(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            title,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.clock.tick();
        if let Some(fps) = self.fps.tick(time.delta) {
            log::info!("FPS: {:.1}", fps);
        }

        if let Err(e) = self.context.frame(time.delta, &mut self.renderer) {
            log::error!("Render error: {e:#}");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.context.viewport();
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
            .with_resizable(false);

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.context.resize(size.width, size.height);
                self.clock.restart();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.context.resize(size.width, size.height),
            WindowEvent::Focused(false) if !self.context.keys.is_empty() => {
                log::debug!("Focus lost, releasing held keys");
                self.context.keys.clear();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(input) = translate_event(&other) {
                    match self.context.handle_input(input) {
                        KeyAction::Exit => event_loop.exit(),
                        KeyAction::Shoot { origin, velocity } => {
                            log::info!("Projectile launched from {origin:?} at {velocity:?}");
                        }
                        KeyAction::None => {}
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Drive the frame pipeline without a window: walk diagonally while
/// sweeping the view at a fixed 60 Hz step, then shoot once
fn run_headless(mut context: AppContext, frames: u64) -> Result<()> {
    let mut renderer = LogRenderer::new(frames.max(1));
    context.handle_key(Button::KeyW, true);
    context.handle_key(Button::KeyD, true);

    let (cx, cy) = (400.0, 300.0);
    for i in 0..frames {
        context.handle_cursor(cx + i as f32, cy);
        let stats = context.frame(HEADLESS_DELTA, &mut renderer)?;
        log::debug!("frame {} camera at {:?}", stats.frame, stats.camera_position);
    }

    if let KeyAction::Shoot { origin, velocity } = context.handle_key(Button::MouseLeft, true) {
        log::info!("Projectile launched from {origin:?} at {velocity:?}");
    }

    log::info!(
        "Ran {} headless frames; camera at {:?}, yaw {:.1}",
        context.frame_count(),
        context.camera.position,
        context.camera.yaw
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => AppSettings::load(path)?,
        None => AppSettings::default(),
    };

    let scene = Scene::build(cli.demo);
    let context = AppContext::with_ground_lock(scene, &settings, cli.width, cli.height, cli.ground_lock());
    log::info!(
        "Demo {:?}, {} camera, shading {}",
        cli.demo,
        if context.camera.ground_locked { "ground-locked" } else { "free" },
        context.shading.current()
    );

    if let Some(frames) = cli.headless_frames {
        return run_headless(context, frames);
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(context, format!("rtgp - {:?}", cli.demo));

    log::info!("Controls: WASD move, mouse look, L wireframe, P pause spin, 1-9 shading, Escape quits");
    event_loop.run_app(&mut app).context("Event loop terminated with an error")?;

    Ok(())
}
