use glam::Vec3;

use super::bounds::Aabb;
use super::registry::{CollisionRegistry, Rejection, SolidHandle};
use crate::options::CollisionOptions;

/// Margins applied around each solid when testing a candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryMargins {
    /// Horizontal expansion of the footprint on every side.
    pub camera_radius: f32,
    /// Tolerance below the solid's bottom face.
    pub below: f32,
    /// Tolerance above the solid's top face.
    pub above: f32,
}

impl QueryMargins {
    /// Margins from collision options.
    #[must_use]
    pub fn from_options(options: &CollisionOptions) -> Self {
        Self {
            camera_radius: options.camera_radius,
            below: options.below_margin,
            above: options.above_margin,
        }
    }

    /// Whether `candidate` lies inside `bounds` grown by these margins.
    ///
    /// The vertical band is tested first; a candidate outside it is never
    /// blocked by this solid. Bounds are inclusive.
    #[must_use]
    pub fn contains(&self, bounds: &Aabb, candidate: Vec3) -> bool {
        let in_band = candidate.y >= bounds.min.y - self.below
            && candidate.y <= bounds.max.y + self.above;
        if !in_band {
            return false;
        }
        let r = self.camera_radius;
        candidate.x >= bounds.min.x - r
            && candidate.x <= bounds.max.x + r
            && candidate.z >= bounds.min.z - r
            && candidate.z <= bounds.max.z + r
    }
}

/// Collision registry plus the query that tests candidate positions
/// against it.
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    registry: CollisionRegistry,
    margins: QueryMargins,
    enabled: bool,
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new(&CollisionOptions::default())
    }
}

impl CollisionWorld {
    /// Empty world configured from `options`.
    #[must_use]
    pub fn new(options: &CollisionOptions) -> Self {
        Self {
            registry: CollisionRegistry::new(options),
            margins: QueryMargins::from_options(options),
            enabled: options.enabled,
        }
    }

    /// Offer a solid to the registry.
    pub fn register(&mut self, solid: SolidHandle) -> Result<usize, Rejection> {
        self.registry.register(solid)
    }

    /// Offer a batch of solids; returns how many were admitted.
    pub fn register_all(
        &mut self,
        solids: impl IntoIterator<Item = SolidHandle>,
    ) -> usize {
        self.registry.register_all(solids)
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &CollisionRegistry {
        &self.registry
    }

    /// Whether queries can block at all: the flag is set and at least one
    /// solid is registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.registry.is_empty()
    }

    /// The collision-enabled flag as set by the user.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set the collision-enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether moving the camera to `candidate` would penetrate a solid.
    ///
    /// Each solid's bounds are recomputed from its live transform; a solid
    /// whose bounds cannot be computed is skipped.
    #[must_use]
    pub fn is_blocked(&self, candidate: Vec3) -> bool {
        if !self.is_active() {
            return false;
        }
        self.registry.solids().iter().any(|solid| {
            match solid.handle.world_bounds() {
                Ok(bounds) => self.margins.contains(&bounds, candidate),
                Err(e) => {
                    log::trace!(
                        "collision: skipping \"{}\": {e}",
                        solid.handle.name()
                    );
                    false
                }
            }
        })
    }
}
