use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flight Envelope", inline)]
#[serde(default)]
/// Dome-shaped volume the drone camera is clamped into.
///
/// The ceiling at horizontal distance `r` is
/// `max(floor, ceiling - ceiling_slope * r)`.
pub struct EnvelopeOptions {
    /// Maximum horizontal distance from the world origin.
    #[schemars(skip)]
    pub hard_radius: f32,
    /// Minimum altitude everywhere.
    #[schemars(skip)]
    pub floor: f32,
    /// Ceiling altitude above the world origin.
    #[schemars(title = "Ceiling", range(min = 10.0, max = 500.0), extend("step" = 5.0))]
    pub ceiling: f32,
    /// Ceiling drop per unit of horizontal distance.
    #[schemars(skip)]
    pub ceiling_slope: f32,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            hard_radius: 400.0,
            floor: 5.0,
            ceiling: 150.0,
            ceiling_slope: 0.3,
        }
    }
}
