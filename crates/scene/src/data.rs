use std::sync::OnceLock;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Accent used for arcs, marker tint and the atmosphere.
pub const ACCENT_COLOR: &str = "#ee761e";

pub const DEFAULT_POINT_COUNT: usize = 30;
pub const DEFAULT_ARC_COUNT: usize = 30;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    White,
    Blue,
    Green,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 4] = [
        MarkerColor::Red,
        MarkerColor::White,
        MarkerColor::Blue,
        MarkerColor::Green,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::White => "white",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
        }
    }

    /// Picks `ALL[round(u * 3)]`; the first and last colors get half weight.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let u: f64 = rng.gen_range(0.0_f64..1.0);
        Self::ALL[((u * 3.0).round() as usize).min(Self::ALL.len() - 1)]
    }
}

/// A point marker, serialized with the field names the globe layer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDatum {
    pub lat: f64,
    pub lng: f64,
    pub size: f64,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcDatum {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetConfig {
    pub point_count: usize,
    pub arc_count: usize,
    pub arc_color: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            arc_count: DEFAULT_ARC_COUNT,
            arc_color: ACCENT_COLOR.to_string(),
        }
    }
}

/// Random markers and arcs shown by every widget on the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub points: Vec<PointDatum>,
    pub arcs: Vec<ArcDatum>,
}

static SHARED: OnceLock<Dataset> = OnceLock::new();

fn latitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen_range(0.0_f64..1.0) - 0.5) * 180.0
}

fn longitude<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen_range(0.0_f64..1.0) - 0.5) * 360.0
}

impl Dataset {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &DatasetConfig) -> Self {
        let points = (0..config.point_count)
            .map(|_| PointDatum {
                lat: latitude(rng),
                lng: longitude(rng),
                size: 7.0 + rng.gen_range(0.0_f64..1.0) * 30.0,
                color: MarkerColor::sample(rng),
            })
            .collect();

        let arcs = (0..config.arc_count)
            .map(|_| ArcDatum {
                start_lat: latitude(rng),
                start_lng: longitude(rng),
                end_lat: latitude(rng),
                end_lng: longitude(rng),
                color: config.arc_color.clone(),
            })
            .collect();

        Self { points, arcs }
    }

    /// Generate the page-wide dataset on first call; later calls return it unchanged.
    pub fn init_shared(config: &DatasetConfig) -> &'static Dataset {
        SHARED.get_or_init(|| Self::generate(&mut rand::thread_rng(), config))
    }

    pub fn shared() -> Option<&'static Dataset> {
        SHARED.get()
    }
}
