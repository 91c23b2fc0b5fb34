//! Trackball camera controls with auto-rotation.
//!
//! The camera orbits a fixed target. Dragging maps the pointer onto a virtual
//! arcball so the globe follows the cursor; releasing keeps the last rotation
//! as damped inertia. Auto-rotation spins the camera about the vertical axis a
//! fixed angle per update.
//!
//! The controls never call out: each operation that moves the camera queues a
//! [`ControlEvent`] which the owner drains and dispatches.

use foundation::math::{Quat, Vec2, Vec3};
use runtime::EventQueue;
use serde::Deserialize;

use crate::camera::{CameraPose, Viewport};

/// Squared eye movement below which an update is not reported as a change.
const CHANGE_EPS: f64 = 1e-6;

/// Rotation angle below which inertia stops.
const INERTIA_THRESHOLD: f64 = 1e-6;

/// Exponential zoom rate per wheel delta unit (before `zoom_speed`).
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Exponential zoom rate per dragged pixel (before `zoom_speed`).
const DRAG_ZOOM_RATE: f64 = 0.005;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// A pointer interaction began.
    Start,
    /// The camera moved.
    Change,
    /// A pointer interaction ended.
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseAction {
    Rotate,
    Zoom,
}

/// Action bound to each mouse button; unbound buttons are ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MouseButtons {
    pub left: Option<MouseAction>,
    pub middle: Option<MouseAction>,
    pub right: Option<MouseAction>,
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self {
            left: Some(MouseAction::Rotate),
            middle: None,
            right: None,
        }
    }
}

impl MouseButtons {
    /// Map a DOM `MouseEvent.button` code (0 left, 1 middle, 2 right).
    pub fn action_for(&self, button: i16) -> Option<MouseAction> {
        match button {
            0 => self.left,
            1 => self.middle,
            2 => self.right,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlsConfig {
    pub rotate_speed: f64,
    pub zoom_speed: f64,
    pub min_distance: f64,
    /// `None` leaves the zoom-out distance unbounded.
    pub max_distance: Option<f64>,
    pub no_rotate: bool,
    pub no_zoom: bool,
    pub mouse_buttons: MouseButtons,
    pub auto_rotate: bool,
    /// Radians per update.
    pub auto_rotate_speed: f64,
    /// When true, motion stops as soon as the pointer does.
    pub static_moving: bool,
    pub dynamic_damping_factor: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 0.7,
            zoom_speed: 0.8,
            min_distance: 101.0,
            max_distance: None,
            no_rotate: false,
            no_zoom: true,
            mouse_buttons: MouseButtons::default(),
            auto_rotate: true,
            auto_rotate_speed: 0.003,
            static_moving: false,
            dynamic_damping_factor: 0.2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Drag {
    Rotate { last_unit: Vec3 },
    Zoom { last_px: Vec2 },
}

#[derive(Debug, Clone)]
pub struct TrackballControls {
    config: ControlsConfig,
    target: Vec3,
    /// Rotates the +z axis onto the target-to-eye direction.
    orientation: Quat,
    distance: f64,
    target_distance: f64,
    viewport: Viewport,
    drag: Option<Drag>,
    /// Rotation dragged since the last update, in camera space.
    pending: Quat,
    /// Last applied drag rotation, replayed with damping after release.
    inertia: Quat,
    last_eye: Vec3,
    events: EventQueue<ControlEvent>,
}

impl TrackballControls {
    pub fn new(config: ControlsConfig, pose: &CameraPose, viewport: Viewport) -> Self {
        let offset = pose.position - pose.target;
        let distance = offset.length();
        let orientation = Quat::from_unit_vectors(Vec3::Z, offset.normalize());
        Self {
            config,
            target: pose.target,
            orientation,
            distance,
            target_distance: distance,
            viewport: Viewport::new(viewport.width.max(1.0), viewport.height.max(1.0)),
            drag: None,
            pending: Quat::IDENTITY,
            inertia: Quat::IDENTITY,
            last_eye: pose.position,
            events: EventQueue::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Viewport::new(viewport.width.max(1.0), viewport.height.max(1.0));
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.orientation.rotate(Vec3::Z * self.distance)
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye(),
            up: self.orientation.rotate(Vec3::Y),
            target: self.target,
        }
    }

    pub fn pointer_down(&mut self, pos_px: Vec2, button: i16) {
        let Some(action) = self.config.mouse_buttons.action_for(button) else {
            return;
        };
        let drag = match action {
            MouseAction::Rotate if !self.config.no_rotate => Drag::Rotate {
                last_unit: self.screen_to_arcball(pos_px),
            },
            MouseAction::Zoom if !self.config.no_zoom => Drag::Zoom { last_px: pos_px },
            _ => return,
        };

        self.inertia = Quat::IDENTITY;
        self.drag = Some(drag);
        self.events.emit(ControlEvent::Start);
    }

    pub fn pointer_move(&mut self, pos_px: Vec2) {
        match self.drag {
            Some(Drag::Rotate { last_unit }) => {
                let next_unit = self.screen_to_arcball(pos_px);
                // Moving the globe from `last` to `next` is the camera moving the other way.
                let delta =
                    Quat::from_unit_vectors(next_unit, last_unit).scaled(self.config.rotate_speed);
                self.pending = (self.pending * delta).normalize();
                self.drag = Some(Drag::Rotate {
                    last_unit: next_unit,
                });
            }
            Some(Drag::Zoom { last_px }) => {
                let dy = (pos_px - last_px).y;
                self.zoom_by(dy * DRAG_ZOOM_RATE);
                self.drag = Some(Drag::Zoom { last_px: pos_px });
            }
            None => {}
        }
    }

    pub fn pointer_up(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.events.emit(ControlEvent::End);
    }

    /// Wheel input; positive `delta` zooms out.
    pub fn wheel(&mut self, delta: f64) {
        if self.config.no_zoom {
            return;
        }
        self.events.emit(ControlEvent::Start);
        self.zoom_by(delta * WHEEL_ZOOM_RATE);
        self.events.emit(ControlEvent::End);
    }

    /// Advance one step. Returns the new eye position when the camera moved.
    pub fn update(&mut self) -> Option<Vec3> {
        if self.pending != Quat::IDENTITY {
            self.orientation = (self.orientation * self.pending).normalize();
            self.inertia = self.pending;
            self.pending = Quat::IDENTITY;
        } else if !self.config.static_moving {
            // Inertia decays on every still update, including while the pointer
            // is held, and only turns the camera once the pointer is released.
            if self.inertia.angle() > INERTIA_THRESHOLD {
                if self.drag.is_none() {
                    self.orientation = (self.orientation * self.inertia).normalize();
                }
                self.inertia = self
                    .inertia
                    .scaled(1.0 - self.config.dynamic_damping_factor);
            } else {
                self.inertia = Quat::IDENTITY;
            }
        }

        if self.config.static_moving && self.drag.is_none() {
            self.inertia = Quat::IDENTITY;
        }

        if self.config.auto_rotate && self.config.auto_rotate_speed != 0.0 {
            let spin = Quat::from_axis_angle(Vec3::Y, self.config.auto_rotate_speed);
            self.orientation = (spin * self.orientation).normalize();
        }

        let (min, max) = self.distance_bounds();
        self.target_distance = self.target_distance.clamp(min, max);
        if self.config.static_moving {
            self.distance = self.target_distance;
        } else {
            self.distance +=
                (self.target_distance - self.distance) * self.config.dynamic_damping_factor.max(0.0);
            if (self.target_distance - self.distance).abs() < 1e-9 {
                self.distance = self.target_distance;
            }
        }
        self.distance = self.distance.clamp(min, max);

        let eye = self.eye();
        if eye.distance_squared(self.last_eye) > CHANGE_EPS {
            self.last_eye = eye;
            self.events.emit(ControlEvent::Change);
            Some(eye)
        } else {
            None
        }
    }

    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain()
    }

    fn distance_bounds(&self) -> (f64, f64) {
        let min = self.config.min_distance.max(0.0);
        let max = self.config.max_distance.unwrap_or(f64::INFINITY).max(min);
        (min, max)
    }

    fn zoom_by(&mut self, amount: f64) {
        let (min, max) = self.distance_bounds();
        let factor = (amount * self.config.zoom_speed).exp();
        self.target_distance = (self.target_distance * factor).clamp(min, max);
    }

    /// Map a pointer position to a unit vector on the virtual arcball.
    fn screen_to_arcball(&self, pos_px: Vec2) -> Vec3 {
        let Viewport { width, height } = self.viewport;
        let min_dim = width.min(height).max(1.0);
        let nx = (2.0 * pos_px.x - width) / min_dim;
        let ny = (height - 2.0 * pos_px.y) / min_dim;

        let r2 = nx * nx + ny * ny;
        if r2 <= 1.0 {
            Vec3::new(nx, ny, (1.0 - r2).sqrt()).normalize()
        } else {
            let inv_r = 1.0 / r2.sqrt();
            Vec3::new(nx * inv_r, ny * inv_r, 0.0).normalize()
        }
    }
}
