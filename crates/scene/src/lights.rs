use foundation::math::Vec3;
use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f64,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f64,
    /// Light shines from this position towards the origin.
    pub position: [f64; 3],
}

impl DirectionalLight {
    pub fn new(color: u32, intensity: f64, position: [f64; 3]) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    pub fn position(&self) -> Vec3 {
        let [x, y, z] = self.position;
        Vec3::new(x, y, z)
    }
}

/// One ambient fill plus hand-placed key lights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub directional: Vec<DirectionalLight>,
}

impl Default for LightRig {
    fn default() -> Self {
        let key = 0.6 * std::f64::consts::PI;
        Self {
            ambient: AmbientLight::default(),
            directional: vec![
                DirectionalLight::new(0xffffff, key, [1.0, 1.0, 1.0]),
                DirectionalLight::new(0xffffff, key, [-1.0, 0.0, -1.0]),
            ],
        }
    }
}
