//! Globe layer configuration and the surface a globe renderer must expose.

use foundation::math::Vec3;
use rand::Rng;
use serde::Deserialize;

use crate::data::{ACCENT_COLOR, ArcDatum, Dataset, PointDatum};

pub const DEFAULT_GLOBE_IMAGE_URL: &str = "/static/images/2k_earth_particles_map.webp";

/// Map-pin glyph injected into every point label; `fill` follows the label's CSS color.
pub const MARKER_SVG: &str = r##"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 36 36" fill="currentColor">
<path d="M18,0C10.3,0,4,5.6,4,12.6C4,24.1,18,36,18,36s14-12,14-23.4C32,5.6,25.7,0,18,0z M18,21c-3.9,0-7-3.1-7-7s3.1-7,7-7
	s7,3.1,7,7S21.9,21,18,21z"/>
</svg>"##;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Atmosphere {
    /// Thickness as a fraction of the globe radius.
    pub altitude: f64,
    pub color: String,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            altitude: 0.1,
            color: ACCENT_COLOR.to_string(),
        }
    }
}

/// How each point label element is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerStyle {
    pub svg: String,
    pub color: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            svg: MARKER_SVG.to_string(),
            color: ACCENT_COLOR.to_string(),
        }
    }
}

impl MarkerStyle {
    /// CSS width of the label for a point of the given `size`.
    pub fn width_css(&self, size: f64) -> String {
        format!("{size}px")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcDash {
    /// Dash length as a fraction of the arc length.
    pub length: f64,
    pub gap: f64,
    /// Upper bound (exclusive) of the per-arc random initial gap.
    pub initial_gap_max: f64,
    pub animate_time_ms: f64,
}

impl Default for ArcDash {
    fn default() -> Self {
        Self {
            length: 0.4,
            gap: 4.0,
            initial_gap_max: 5.0,
            animate_time_ms: 1000.0,
        }
    }
}

impl ArcDash {
    pub fn sample_initial_gap<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.initial_gap_max <= 0.0 {
            return 0.0;
        }
        rng.gen_range(0.0..self.initial_gap_max)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobeSpec {
    pub image_url: String,
    pub atmosphere: Atmosphere,
    pub marker: MarkerStyle,
    /// Arc field holding the arc color.
    pub arc_color_field: String,
    pub arc_dash: ArcDash,
}

impl Default for GlobeSpec {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_GLOBE_IMAGE_URL.to_string(),
            atmosphere: Atmosphere::default(),
            marker: MarkerStyle::default(),
            arc_color_field: "color".to_string(),
            arc_dash: ArcDash::default(),
        }
    }
}

/// Configuration surface of a globe visual.
///
/// Projection, arc animation and label placement all happen behind this
/// trait; callers only hand over data and styling.
pub trait GlobeLayer {
    type Error;

    fn set_globe_image_url(&mut self, url: &str);
    fn set_atmosphere(&mut self, atmosphere: &Atmosphere);
    fn set_points(&mut self, points: &[PointDatum], marker: &MarkerStyle)
    -> Result<(), Self::Error>;
    fn set_arcs(
        &mut self,
        arcs: &[ArcDatum],
        color_field: &str,
        dash: &ArcDash,
    ) -> Result<(), Self::Error>;

    /// Position of the globe object in scene coordinates.
    fn position(&self) -> Vec3;

    /// Re-orient the layer (label visibility, shading) for a camera at `camera_position`.
    fn set_point_of_view(&mut self, camera_position: Vec3, globe_position: Vec3);
}

impl GlobeSpec {
    pub fn apply<G: GlobeLayer>(&self, globe: &mut G, dataset: &Dataset) -> Result<(), G::Error> {
        globe.set_globe_image_url(&self.image_url);
        globe.set_atmosphere(&self.atmosphere);
        globe.set_points(&dataset.points, &self.marker)?;
        globe.set_arcs(&dataset.arcs, &self.arc_color_field, &self.arc_dash)
    }
}
