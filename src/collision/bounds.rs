use std::fmt;

use glam::{Affine3A, Vec3};

/// Why a bounding box could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// The geometry has no vertices.
    Empty,
    /// A vertex or the transform produced NaN or infinite coordinates.
    NonFinite,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "geometry has no vertices"),
            Self::NonFinite => write!(f, "geometry has non-finite coordinates"),
        }
    }
}

impl std::error::Error for BoundsError {}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box from two corners; components are sorted so `min <= max`.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box of the given full size centered on `center`.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing every point.
    pub fn from_points(
        points: impl IntoIterator<Item = Vec3>,
    ) -> Result<Self, BoundsError> {
        let mut bounds: Option<Self> = None;
        for p in points {
            // f32::min drops NaN silently, so check before folding
            if !p.is_finite() {
                return Err(BoundsError::NonFinite);
            }
            bounds = Some(bounds.map_or(Self::new(p, p), |acc| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            }));
        }
        bounds.ok_or(BoundsError::Empty)
    }

    /// The eight corners of the box.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// World-space box enclosing this box after `transform`.
    pub fn transformed(&self, transform: &Affine3A) -> Result<Self, BoundsError> {
        Self::from_points(
            self.corners()
                .into_iter()
                .map(|corner| transform.transform_point3(corner)),
        )
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn from_points_encloses_all() {
        let bounds = Aabb::from_points([
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-1.0, 4.0, 0.0),
            Vec3::new(0.5, 0.0, -5.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -5.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn empty_and_non_finite_geometry_fail() {
        assert_eq!(
            Aabb::from_points(std::iter::empty()),
            Err(BoundsError::Empty)
        );
        assert_eq!(
            Aabb::from_points([Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)]),
            Err(BoundsError::NonFinite)
        );
    }

    #[test]
    fn rotation_swaps_footprint_axes() {
        let local =
            Aabb::from_center_size(Vec3::ZERO, Vec3::new(10.0, 2.0, 4.0));
        let quarter_turn =
            Affine3A::from_rotation_translation(
                Quat::from_rotation_y(FRAC_PI_2),
                Vec3::new(0.0, 1.0, 0.0),
            );
        let world = local.transformed(&quarter_turn).unwrap();
        let size = world.size();
        assert!((size.x - 4.0).abs() < 1e-4);
        assert!((size.z - 10.0).abs() < 1e-4);
        assert!((world.center().y - 1.0).abs() < 1e-5);
    }
}
