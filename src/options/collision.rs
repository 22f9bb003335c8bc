use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Collision", inline)]
#[serde(default)]
/// Collision admission heuristics and query margins.
///
/// The admission filters are deliberately approximate: they match the
/// content of imported city scenes rather than classify solids in general.
pub struct CollisionOptions {
    /// Whether collision queries may block movement at all.
    #[schemars(title = "Collision")]
    pub enabled: bool,
    /// Horizontal expansion of every solid's footprint.
    #[schemars(title = "Camera Radius", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub camera_radius: f32,
    /// Tolerance below a solid's bottom face.
    #[schemars(skip)]
    pub below_margin: f32,
    /// Tolerance above a solid's top face.
    #[schemars(skip)]
    pub above_margin: f32,
    /// Solids wider than this on either horizontal axis count as terrain.
    #[schemars(skip)]
    pub max_footprint: f32,
    /// Solids shorter than this count as decals or road surfaces.
    #[schemars(skip)]
    pub min_height: f32,
    /// Case-insensitive name fragments that exclude a solid.
    #[schemars(skip)]
    pub excluded_names: Vec<String>,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            camera_radius: 2.0,
            below_margin: 0.5,
            above_margin: 1.0,
            max_footprint: 300.0,
            min_height: 1.5,
            excluded_names: vec![
                "ground".to_owned(),
                "floor".to_owned(),
                "road".to_owned(),
            ],
        }
    }
}
