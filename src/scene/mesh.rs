use glam::{Affine3A, Quat, Vec3};

use crate::collision::{Aabb, BoundsError, Solid};

/// Primitive geometry, in local space centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned box of the given full size.
    Cuboid {
        /// Edge lengths.
        size: Vec3,
    },
    /// Flat horizontal quad in the XZ plane.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Z.
        depth: f32,
    },
    /// Vertical cylinder or truncated cone.
    Cylinder {
        /// Radius of the top cap.
        radius_top: f32,
        /// Radius of the bottom cap.
        radius_bottom: f32,
        /// Full height.
        height: f32,
    },
    /// Sphere.
    Sphere {
        /// Radius.
        radius: f32,
    },
    /// Arbitrary vertex cloud, e.g. from an imported asset.
    Vertices(Vec<Vec3>),
}

impl Shape {
    /// Local-space bounding box.
    pub fn local_bounds(&self) -> Result<Aabb, BoundsError> {
        match self {
            Self::Cuboid { size } => {
                Ok(Aabb::from_center_size(Vec3::ZERO, *size))
            }
            Self::Plane { width, depth } => Ok(Aabb::from_center_size(
                Vec3::ZERO,
                Vec3::new(*width, 0.0, *depth),
            )),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let r = radius_top.max(*radius_bottom);
                Ok(Aabb::from_center_size(
                    Vec3::ZERO,
                    Vec3::new(2.0 * r, *height, 2.0 * r),
                ))
            }
            Self::Sphere { radius } => Ok(Aabb::from_center_size(
                Vec3::ZERO,
                Vec3::splat(2.0 * radius),
            )),
            Self::Vertices(points) => {
                Aabb::from_points(points.iter().copied())
            }
        }
    }
}

/// Surface appearance; only transparency matters to collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color in normalized RGB.
    pub color: [f32; 3],
    /// Alpha-blended (glass, water, foliage cards).
    pub transparent: bool,
}

impl Material {
    /// Opaque material of the given packed `0xRRGGBB` color.
    #[must_use]
    pub fn opaque(hex: u32) -> Self {
        Self {
            color: [
                ((hex >> 16) & 0xFF) as f32 / 255.0,
                ((hex >> 8) & 0xFF) as f32 / 255.0,
                (hex & 0xFF) as f32 / 255.0,
            ],
            transparent: false,
        }
    }

    /// Same color, alpha-blended.
    #[must_use]
    pub fn transparent(self) -> Self {
        Self {
            transparent: true,
            ..self
        }
    }
}

/// One named mesh placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMesh {
    /// Name as authored.
    pub name: String,
    /// Local geometry.
    pub shape: Shape,
    /// Local-to-world transform.
    pub transform: Affine3A,
    /// Materials of all submeshes.
    pub materials: Vec<Material>,
}

impl SceneMesh {
    /// Mesh with a single material, placed at `translation`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        material: Material,
        translation: Vec3,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            transform: Affine3A::from_translation(translation),
            materials: vec![material],
        }
    }

    /// Replace the transform with translation, rotation and scale.
    #[must_use]
    pub fn with_transform(
        mut self,
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        self.transform = Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        );
        self
    }
}

impl Solid for SceneMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn world_bounds(&self) -> Result<Aabb, BoundsError> {
        self.shape.local_bounds()?.transformed(&self.transform)
    }

    fn has_transparent_material(&self) -> bool {
        self.materials.iter().any(|m| m.transparent)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn cone_uses_wider_radius() {
        let bounds = Shape::Cylinder {
            radius_top: 0.5,
            radius_bottom: 0.8,
            height: 8.0,
        }
        .local_bounds();
        let size = bounds.map(|b| b.size());
        assert_eq!(size, Ok(Vec3::new(1.6, 8.0, 1.6)));
    }

    #[test]
    fn world_bounds_follow_transform() {
        let mesh = SceneMesh::new(
            "tower",
            Shape::Cuboid {
                size: Vec3::new(2.0, 10.0, 4.0),
            },
            Material::opaque(0x696969),
            Vec3::new(0.0, 5.0, 0.0),
        )
        .with_transform(
            Vec3::ONE,
            Quat::from_rotation_y(FRAC_PI_2),
            Vec3::new(10.0, 5.0, 0.0),
        );
        let bounds = mesh.world_bounds();
        assert!(bounds.is_ok());
        let Ok(bounds) = bounds else { return };
        let size_error = bounds.size() - Vec3::new(4.0, 10.0, 2.0);
        assert!(size_error.abs().max_element() < 1e-4);
        assert!((bounds.center() - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn empty_vertex_cloud_has_no_bounds() {
        let mesh = SceneMesh::new(
            "imported",
            Shape::Vertices(Vec::new()),
            Material::opaque(0),
            Vec3::ZERO,
        );
        assert_eq!(mesh.world_bounds(), Err(BoundsError::Empty));
    }

    #[test]
    fn any_transparent_submesh_counts() {
        let mut mesh = SceneMesh::new(
            "shop",
            Shape::Cuboid { size: Vec3::splat(5.0) },
            Material::opaque(0x808080),
            Vec3::ZERO,
        );
        assert!(!mesh.has_transparent_material());
        mesh.materials.push(Material::opaque(0xADD8E6).transparent());
        assert!(mesh.has_transparent_material());
    }
}
