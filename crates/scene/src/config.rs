use std::fmt;

use serde::Deserialize;

use crate::camera::CameraSetup;
use crate::controls::ControlsConfig;
use crate::data::DatasetConfig;
use crate::globe::GlobeSpec;
use crate::lights::LightRig;

pub const DEFAULT_SELECTOR: &str = ".elementor-globe3d";

/// Page-level widget configuration. Every field falls back to the built-in look.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// CSS selector of the container elements.
    pub selector: String,
    pub dataset: DatasetConfig,
    pub globe: GlobeSpec,
    pub lights: LightRig,
    pub camera: CameraSetup,
    pub controls: ControlsConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            dataset: DatasetConfig::default(),
            globe: GlobeSpec::default(),
            lights: LightRig::default(),
            camera: CameraSetup::default(),
            controls: ControlsConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "widget config parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl WidgetConfig {
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(payload).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, WidgetConfig};
    use crate::controls::MouseAction;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn defaults_match_the_widget_constants() {
        let config = WidgetConfig::default();
        assert_eq!(config.selector, ".elementor-globe3d");
        assert_eq!(config.dataset.point_count, 30);
        assert_eq!(config.dataset.arc_count, 30);
        assert_eq!(config.camera.distance, 400.0);
        assert_eq!(config.controls.min_distance, 101.0);
        assert_eq!(config.controls.rotate_speed, 0.7);
        assert_eq!(config.controls.zoom_speed, 0.8);
        assert!(config.controls.no_zoom);
        assert!(config.controls.auto_rotate);
        assert_eq!(config.controls.auto_rotate_speed, 0.003);
        assert_eq!(config.controls.mouse_buttons.left, Some(MouseAction::Rotate));
        assert_eq!(config.controls.mouse_buttons.right, None);
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let config = WidgetConfig::from_json(
            r##"{
                "selector": "#hero-globe",
                "globe": { "atmosphere": { "color": "#3355ff" } },
                "controls": { "autoRotateSpeed": 0.01, "mouseButtons": { "right": "zoom" } }
            }"##,
        )
        .unwrap();

        let defaults = WidgetConfig::default();
        assert_eq!(config.selector, "#hero-globe");
        assert_eq!(config.globe.atmosphere.color, "#3355ff");
        assert_eq!(config.globe.atmosphere.altitude, 0.1);
        assert_eq!(config.globe.image_url, defaults.globe.image_url);
        assert_eq!(config.controls.auto_rotate_speed, 0.01);
        assert_eq!(config.controls.mouse_buttons.right, Some(MouseAction::Zoom));
        assert_eq!(config.controls.mouse_buttons.left, Some(MouseAction::Rotate));
        assert_eq!(config.dataset, defaults.dataset);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = WidgetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("widget config parse error"));
    }
}
