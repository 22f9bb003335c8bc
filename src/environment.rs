//! Atmosphere derived from camera altitude and time of day.
//!
//! Fog is recomputed from scratch every frame: the camera height selects an
//! [`AltitudeBand`], the [`TimeOfDay`] selects a palette within it. There is
//! no hysteresis or blending between bands; the exponential-squared falloff
//! keeps the switch visually soft.

use glam::Vec3;

use crate::options::{EnvironmentOptions, FogPalette};

/// Day or night lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeOfDay {
    /// Warm, neutral fog and a sky-blue background.
    #[default]
    Day,
    /// Cool, dark fog and a midnight-blue background.
    Night,
}

impl TimeOfDay {
    /// The other one.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

/// Height band selecting the fog palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AltitudeBand {
    /// At or below the band threshold.
    GroundLevel,
    /// Strictly above the band threshold.
    HighAltitude,
}

/// Fog color and exponential-squared density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Fog color in normalized RGB.
    pub color: Vec3,
    /// Density coefficient.
    pub density: f32,
}

impl Fog {
    /// Fraction of fog color blended in at `distance` from the camera:
    /// `1 - exp(-(density * distance)^2)`.
    #[must_use]
    pub fn factor(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        1.0 - (-(d * d)).exp()
    }
}

impl From<FogPalette> for Fog {
    fn from(palette: FogPalette) -> Self {
        Self {
            color: Vec3::from_array(palette.color),
            density: palette.density,
        }
    }
}

/// Everything the renderer needs about the sky for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Band the camera height fell into.
    pub band: AltitudeBand,
    /// Fog parameters.
    pub fog: Fog,
    /// Background color.
    pub sky: Vec3,
}

/// Fog palettes plus the current time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    options: EnvironmentOptions,
    time_of_day: TimeOfDay,
}

impl Environment {
    /// Environment starting in the time of day chosen by `options`.
    #[must_use]
    pub fn new(options: &EnvironmentOptions) -> Self {
        Self {
            options: options.clone(),
            time_of_day: if options.start_in_day {
                TimeOfDay::Day
            } else {
                TimeOfDay::Night
            },
        }
    }

    /// Current time of day.
    #[must_use]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Set the time of day.
    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.time_of_day = time_of_day;
    }

    /// Band for a camera at `height`.
    #[must_use]
    pub fn band_at(&self, height: f32) -> AltitudeBand {
        if height > self.options.band_height {
            AltitudeBand::HighAltitude
        } else {
            AltitudeBand::GroundLevel
        }
    }

    /// Fog for a camera at `height` under the current time of day.
    #[must_use]
    pub fn fog_at(&self, height: f32) -> Fog {
        let palette = match (self.band_at(height), self.time_of_day) {
            (AltitudeBand::GroundLevel, TimeOfDay::Day) => {
                self.options.ground_day
            }
            (AltitudeBand::HighAltitude, TimeOfDay::Day) => {
                self.options.high_day
            }
            (AltitudeBand::GroundLevel, TimeOfDay::Night) => {
                self.options.ground_night
            }
            (AltitudeBand::HighAltitude, TimeOfDay::Night) => {
                self.options.high_night
            }
        };
        Fog::from(palette)
    }

    /// Background color for the current time of day.
    #[must_use]
    pub fn sky(&self) -> Vec3 {
        Vec3::from_array(match self.time_of_day {
            TimeOfDay::Day => self.options.day_sky,
            TimeOfDay::Night => self.options.night_sky,
        })
    }

    /// Band, fog and sky for a camera at `height`.
    #[must_use]
    pub fn atmosphere_at(&self, height: f32) -> Atmosphere {
        Atmosphere {
            band: self.band_at(height),
            fog: self.fog_at(height),
            sky: self.sky(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> Environment {
        Environment::new(&EnvironmentOptions::default())
    }

    #[test]
    fn day_density_by_band() {
        let env = day();
        let opts = EnvironmentOptions::default();
        assert_eq!(env.fog_at(10.0).density, opts.ground_day.density);
        assert_eq!(env.fog_at(80.0).density, opts.high_day.density);
    }

    #[test]
    fn threshold_is_exclusive() {
        let env = day();
        assert_eq!(env.band_at(50.0), AltitudeBand::GroundLevel);
        assert_eq!(env.band_at(50.01), AltitudeBand::HighAltitude);
    }

    #[test]
    fn night_changes_color_not_band() {
        let mut env = day();
        for height in [10.0, 80.0] {
            let day_atmo = env.atmosphere_at(height);
            env.set_time_of_day(TimeOfDay::Night);
            let night_atmo = env.atmosphere_at(height);
            env.set_time_of_day(TimeOfDay::Day);

            assert_eq!(day_atmo.band, night_atmo.band);
            assert_ne!(day_atmo.fog.color, night_atmo.fog.color);
            assert_ne!(day_atmo.sky, night_atmo.sky);
        }
    }

    #[test]
    fn crossing_threshold_switches_instantly() {
        let env = day();
        let below = env.fog_at(49.99);
        let above = env.fog_at(50.01);
        assert_ne!(below, above);
        assert_eq!(below, env.fog_at(0.0));
        assert_eq!(above, env.fog_at(500.0));
    }

    #[test]
    fn start_in_night_from_options() {
        let env = Environment::new(&EnvironmentOptions {
            start_in_day: false,
            ..EnvironmentOptions::default()
        });
        assert_eq!(env.time_of_day(), TimeOfDay::Night);
        assert_eq!(TimeOfDay::Night.toggled(), TimeOfDay::Day);
    }

    #[test]
    fn fog_factor_is_exponential_squared() {
        let fog = Fog {
            color: Vec3::ONE,
            density: 0.01,
        };
        assert_eq!(fog.factor(0.0), 0.0);
        assert!((fog.factor(100.0) - (1.0 - (-1.0f32).exp())).abs() < 1e-6);
        assert!(fog.factor(1000.0) > 0.99);
    }
}
