//! Collision registry: decides which scene solids can block the camera.
//!
//! Imported city geometry carries no explicit "collidable" tag, so admission
//! is inferred from shape and material. The filters are a best-effort
//! classifier: missed obstacles and over-eager exclusions are accepted
//! outcomes, not errors.

use std::fmt;
use std::sync::Arc;

use super::bounds::{Aabb, BoundsError};
use crate::options::CollisionOptions;

/// Scene geometry that can be offered to the collision registry.
///
/// Implemented by the scene loader's mesh type. The registry keeps the
/// handle and asks it for fresh world bounds on every query.
pub trait Solid: fmt::Debug + Send + Sync {
    /// Object name as authored in the source asset (may be empty).
    fn name(&self) -> &str;

    /// Current world-space bounding box.
    fn world_bounds(&self) -> Result<Aabb, BoundsError>;

    /// Whether any of the solid's materials is transparent.
    fn has_transparent_material(&self) -> bool;
}

/// Shared handle to a solid owned by the scene.
pub type SolidHandle = Arc<dyn Solid>;

/// Why a solid was not admitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Bounds could not be computed.
    Degenerate(BoundsError),
    /// Footprint wider than the terrain threshold on the X or Z axis.
    TooWide {
        /// Extent along X.
        width: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// Shorter than the decal/road threshold.
    TooShort {
        /// Extent along Y.
        height: f32,
    },
    /// Name contains an excluded hint.
    ExcludedName {
        /// The hint that matched.
        hint: String,
    },
    /// At least one material is transparent.
    Transparent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate(e) => write!(f, "degenerate bounds ({e})"),
            Self::TooWide { width, depth } => {
                write!(f, "footprint {width:.1} x {depth:.1} is terrain-sized")
            }
            Self::TooShort { height } => {
                write!(f, "height {height:.2} is below obstacle threshold")
            }
            Self::ExcludedName { hint } => {
                write!(f, "name matches excluded hint \"{hint}\"")
            }
            Self::Transparent => write!(f, "transparent material"),
        }
    }
}

/// A solid admitted to the registry, with its bounds at registration time.
#[derive(Debug, Clone)]
pub struct RegisteredSolid {
    /// Handle to the scene geometry.
    pub handle: SolidHandle,
    /// World bounds computed when the solid was admitted.
    pub bounds: Aabb,
}

/// Admission thresholds, lifted from [`CollisionOptions`].
#[derive(Debug, Clone, PartialEq)]
struct AdmissionFilter {
    max_footprint: f32,
    min_height: f32,
    excluded_names: Vec<String>,
}

impl AdmissionFilter {
    fn from_options(options: &CollisionOptions) -> Self {
        Self {
            max_footprint: options.max_footprint,
            min_height: options.min_height,
            excluded_names: options
                .excluded_names
                .iter()
                .map(|hint| hint.to_lowercase())
                .collect(),
        }
    }

    fn check(&self, solid: &dyn Solid) -> Result<Aabb, Rejection> {
        let bounds = solid.world_bounds().map_err(Rejection::Degenerate)?;
        let size = bounds.size();

        if size.x > self.max_footprint || size.z > self.max_footprint {
            return Err(Rejection::TooWide {
                width: size.x,
                depth: size.z,
            });
        }
        if size.y < self.min_height {
            return Err(Rejection::TooShort { height: size.y });
        }

        let name = solid.name().to_lowercase();
        if let Some(hint) =
            self.excluded_names.iter().find(|hint| name.contains(hint.as_str()))
        {
            return Err(Rejection::ExcludedName { hint: hint.clone() });
        }

        if solid.has_transparent_material() {
            return Err(Rejection::Transparent);
        }
        Ok(bounds)
    }
}

/// Append-only set of solids eligible for collision testing.
#[derive(Debug, Clone)]
pub struct CollisionRegistry {
    solids: Vec<RegisteredSolid>,
    filter: AdmissionFilter,
}

impl Default for CollisionRegistry {
    fn default() -> Self {
        Self::new(&CollisionOptions::default())
    }
}

impl CollisionRegistry {
    /// Empty registry using the admission thresholds in `options`.
    #[must_use]
    pub fn new(options: &CollisionOptions) -> Self {
        Self {
            solids: Vec::new(),
            filter: AdmissionFilter::from_options(options),
        }
    }

    /// Offer a solid for registration.
    ///
    /// Returns the solid's index in the registry when admitted, or the first
    /// filter that disqualified it.
    pub fn register(&mut self, solid: SolidHandle) -> Result<usize, Rejection> {
        match self.filter.check(solid.as_ref()) {
            Ok(bounds) => {
                log::debug!(
                    "collision: admitted \"{}\" ({:.1} x {:.1} x {:.1})",
                    solid.name(),
                    bounds.size().x,
                    bounds.size().y,
                    bounds.size().z,
                );
                self.solids.push(RegisteredSolid {
                    handle: solid,
                    bounds,
                });
                Ok(self.solids.len() - 1)
            }
            Err(rejection) => {
                log::debug!(
                    "collision: skipped \"{}\": {rejection}",
                    solid.name()
                );
                Err(rejection)
            }
        }
    }

    /// Offer every solid in `solids`; returns how many were admitted.
    pub fn register_all(
        &mut self,
        solids: impl IntoIterator<Item = SolidHandle>,
    ) -> usize {
        solids
            .into_iter()
            .filter(|solid| self.register(Arc::clone(solid)).is_ok())
            .count()
    }

    /// Admitted solids in registration order.
    #[must_use]
    pub fn solids(&self) -> &[RegisteredSolid] {
        &self.solids
    }

    /// Number of admitted solids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Whether no solid has been admitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
