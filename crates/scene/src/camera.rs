use foundation::math::Vec3;
use serde::Deserialize;

/// Drawable area in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        if self.height <= 0.0 {
            1.0
        } else {
            (self.width / self.height).max(1e-6)
        }
    }
}

/// Where the camera sits, which way is up, and what it looks at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub up: Vec3,
    pub target: Vec3,
}

/// Perspective camera handle.
pub trait CameraRig {
    /// Set the aspect ratio and refresh the projection matrix.
    fn set_aspect(&mut self, aspect: f64);
    fn aspect(&self) -> f64;
    fn position(&self) -> Vec3;
    fn set_pose(&mut self, pose: &CameraPose);
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSetup {
    /// Distance from the origin along +z.
    pub distance: f64,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self { distance: 400.0 }
    }
}

impl CameraSetup {
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: Vec3::new(0.0, 0.0, self.distance),
            up: Vec3::Y,
            target: Vec3::ZERO,
        }
    }

    pub fn apply<C: CameraRig>(&self, camera: &mut C, viewport: Viewport) {
        camera.set_aspect(viewport.aspect());
        camera.set_pose(&self.pose());
    }
}
