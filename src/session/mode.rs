use std::fmt;

/// Which rig drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Free flight inside the flight envelope.
    #[default]
    Drone,
    /// Ground-level walking.
    Walk,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Drone => Self::Walk,
            Self::Walk => Self::Drone,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Drone => "drone",
            Self::Walk => "walk",
        })
    }
}
