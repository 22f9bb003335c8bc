use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Convert a packed `0xRRGGBB` color into normalized RGB.
fn rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// One fog color + exponential-squared density pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FogPalette {
    /// Fog color in normalized RGB.
    pub color: [f32; 3],
    /// Exponential-squared fog density.
    pub density: f32,
}

impl FogPalette {
    fn new(hex: u32, density: f32) -> Self {
        Self {
            color: rgb(hex),
            density,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Environment", inline)]
#[serde(default)]
/// Fog palettes per altitude band and time of day, plus sky colors.
pub struct EnvironmentOptions {
    /// Whether a new session starts in day mode.
    #[schemars(title = "Start in Daylight")]
    pub start_in_day: bool,
    /// Heights strictly above this use the high-altitude palettes.
    #[schemars(title = "Band Height", range(min = 10.0, max = 200.0), extend("step" = 5.0))]
    pub band_height: f32,
    /// Ground-level fog by day.
    #[schemars(skip)]
    pub ground_day: FogPalette,
    /// High-altitude fog by day.
    #[schemars(skip)]
    pub high_day: FogPalette,
    /// Ground-level fog by night.
    #[schemars(skip)]
    pub ground_night: FogPalette,
    /// High-altitude fog by night.
    #[schemars(skip)]
    pub high_night: FogPalette,
    /// Background color by day.
    #[schemars(skip)]
    pub day_sky: [f32; 3],
    /// Background color by night.
    #[schemars(skip)]
    pub night_sky: [f32; 3],
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        Self {
            start_in_day: true,
            band_height: 50.0,
            ground_day: FogPalette::new(0x87_CE_EB, 0.008),
            high_day: FogPalette::new(0xB0_C4_DE, 0.003),
            ground_night: FogPalette::new(0x19_19_70, 0.012),
            high_night: FogPalette::new(0x2F_2F_4F, 0.005),
            day_sky: rgb(0x87_CE_EB),
            night_sky: rgb(0x19_19_70),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_unpacks_channels() {
        assert_eq!(rgb(0xFF_00_00), [1.0, 0.0, 0.0]);
        assert_eq!(rgb(0x00_FF_00), [0.0, 1.0, 0.0]);
        let sky = rgb(0x87_CE_EB);
        assert!((sky[0] - 135.0 / 255.0).abs() < 1e-6);
        assert!((sky[2] - 235.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn high_altitude_fog_is_lighter() {
        let env = EnvironmentOptions::default();
        assert!(env.high_day.density < env.ground_day.density);
        assert!(env.high_night.density < env.ground_night.density);
    }
}
