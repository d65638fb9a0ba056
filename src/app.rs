use anyhow::{Context, Result};
use glam::Vec3;

use crate::animation::Spinner;
use crate::camera::{Camera, CameraMovement};
use crate::core::{FrameTime, InputEvent, KeyState, MouseTracker};
use crate::projection::{cursor_ray, Projection, Ray, SHOOT_INITIAL_SPEED};
use crate::scene::Scene;
use crate::settings::AppSettings;
use crate::shading::ShadingSelector;
use crate::traits::{Button, Controller, FrameRenderer};
use crate::transform::SceneObjectTransform;
use crate::types::FrameUniforms;

/// What the frame driver should do after a key event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    None,
    Exit,
    /// Launch a projectile from `origin` (left click through the cursor)
    Shoot { origin: Vec3, velocity: Vec3 },
}

/// Summary of one processed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub draws: usize,
    pub camera_position: Vec3,
    /// Delta capped for a physics step
    pub simulation_step: f32,
}

/// Everything a demo mutates between frames, owned by the frame driver
#[derive(Debug)]
pub struct AppContext {
    pub camera: Camera,
    pub keys: KeyState,
    pub mouse: MouseTracker,
    pub spinner: Spinner,
    pub shading: ShadingSelector,
    pub wireframe: bool,
    pub projection: Projection,
    pub scene: Scene,
    viewport: (u32, u32),
    frame: u64,
}

impl AppContext {
    pub fn new(scene: Scene, settings: &AppSettings, width: u32, height: u32) -> Self {
        Self::with_ground_lock(scene, settings, width, height, None)
    }

    /// `ground_locked` overrides the scene's camera mode when set
    pub fn with_ground_lock(
        scene: Scene,
        settings: &AppSettings,
        width: u32,
        height: u32,
        ground_locked: Option<bool>,
    ) -> Self {
        let locked = ground_locked.unwrap_or(scene.ground_locked);
        let camera = Camera::with_settings(scene.camera_start, locked, &settings.camera);

        Self {
            camera,
            keys: KeyState::new(),
            mouse: MouseTracker::new(),
            spinner: Spinner::new(settings.spin_speed),
            shading: ShadingSelector::new(&scene.shading_variants),
            wireframe: false,
            projection: Projection::for_viewport(width, height).with_fov(settings.fov_y_degrees),
            scene,
            viewport: (width, height),
            frame: 0,
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn handle_input(&mut self, event: InputEvent) -> KeyAction {
        match event {
            InputEvent::Button { button, pressed } => self.handle_key(button, pressed),
            InputEvent::Cursor { x, y } => {
                self.handle_cursor(x, y);
                KeyAction::None
            }
        }
    }

    pub fn handle_key(&mut self, button: Button, pressed: bool) -> KeyAction {
        if !self.keys.set(button, pressed) {
            return KeyAction::None;
        }

        match button {
            Button::Escape => return KeyAction::Exit,
            Button::KeyL => {
                self.wireframe = !self.wireframe;
                log::info!("Wireframe {}", if self.wireframe { "on" } else { "off" });
            }
            Button::KeyP => {
                let spinning = self.spinner.toggle();
                log::info!("Spinning {}", if spinning { "resumed" } else { "paused" });
            }
            Button::Digit(_) => {
                if let Some(slot) = button.digit_slot() {
                    self.shading.select_slot(slot);
                }
            }
            Button::MouseLeft => {
                if let Some(ray) = self.cursor_ray() {
                    let velocity = ray.launch_velocity(SHOOT_INITIAL_SPEED);
                    log::debug!("Shoot from {:?} with velocity {:?}", ray.origin, velocity);
                    return KeyAction::Shoot {
                        origin: ray.origin,
                        velocity,
                    };
                }
            }
            _ => {}
        }
        KeyAction::None
    }

    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        let (x_offset, y_offset) = self.mouse.offset(x, y);
        self.camera.process_mouse_movement(x_offset, y_offset, true);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.projection.resize(width, height);
    }

    /// Apply WASD movement for this frame
    ///
    /// Compensation is applied only for a true diagonal: exactly one of W/S
    /// and exactly one of A/D held. W+A+D still moves at full speed.
    pub fn apply_camera_movements(&mut self, delta: f32) {
        let down = |b| self.keys.is_down(b);
        let diagonal = (down(Button::KeyW) ^ down(Button::KeyS))
            && (down(Button::KeyA) ^ down(Button::KeyD));
        let moves = [
            (down(Button::KeyW), CameraMovement::Forward),
            (down(Button::KeyS), CameraMovement::Backward),
            (down(Button::KeyA), CameraMovement::Left),
            (down(Button::KeyD), CameraMovement::Right),
        ];

        self.camera.set_diagonal_compensation(diagonal);
        for (held, direction) in moves {
            if held {
                self.camera.process_keyboard(direction, delta);
            }
        }
    }

    /// World-space ray through the last known cursor position
    pub fn cursor_ray(&self) -> Option<Ray> {
        let (x, y) = self.mouse.position()?;
        let (width, height) = self.viewport;
        Some(cursor_ray(
            x,
            y,
            width,
            height,
            self.camera.view_matrix(),
            self.projection.matrix(),
        ))
    }

    /// Run one frame: movement, animation, view, then per-object matrices
    /// handed to the renderer in scene order
    pub fn frame<R: FrameRenderer>(&mut self, delta: f32, renderer: &mut R) -> Result<FrameStats> {
        self.frame += 1;
        self.apply_camera_movements(delta);
        self.spinner.advance(delta);

        let uniforms = FrameUniforms::new(
            self.frame,
            &self.camera,
            self.projection.matrix(),
            self.shading.current(),
            self.wireframe,
        )
        .with_scene_lighting(&self.scene);
        let view = uniforms.view;

        renderer
            .begin_frame(&uniforms)
            .with_context(|| format!("Failed to begin frame {}", self.frame))?;

        for object in &self.scene.objects {
            let transform = SceneObjectTransform::compute(&object.current_transform(&self.spinner), view);
            renderer
                .draw(object, &transform)
                .with_context(|| format!("Failed to draw {}", object.name))?;
        }

        renderer.end_frame().context("Failed to end frame")?;

        Ok(FrameStats {
            frame: self.frame,
            draws: self.scene.objects.len(),
            camera_position: self.camera.position,
            simulation_step: FrameTime::from_delta(delta).step,
        })
    }
}
