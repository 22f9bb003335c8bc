//! Collision subsystem: axis-aligned bounds, the admission registry, and
//! the blocked-position query used by the camera rigs.

/// Axis-aligned bounding boxes and geometry errors.
pub mod bounds;
/// Candidate-position test against registered solids.
pub mod query;
/// Heuristic admission of scene solids.
pub mod registry;

pub use bounds::{Aabb, BoundsError};
pub use query::{CollisionWorld, QueryMargins};
pub use registry::{
    CollisionRegistry, RegisteredSolid, Rejection, Solid, SolidHandle,
};
