//! Placeholder city used when no external scene is supplied.

use std::sync::Arc;

use glam::Vec3;

use super::mesh::{Material, SceneMesh, Shape};
use crate::collision::SolidHandle;

const GROUND: u32 = 0x8B4513;
const ROAD: u32 = 0x2F2F2F;
const TRUNK: u32 = 0x8B4513;
const CROWN: u32 = 0x228B22;

/// (x, z, width, height, depth, color)
const BUILDINGS: [(f32, f32, f32, f32, f32, u32); 5] = [
    (-30.0, -30.0, 8.0, 15.0, 8.0, 0x8B4513),
    (30.0, -30.0, 10.0, 20.0, 10.0, 0x696969),
    (-30.0, 30.0, 12.0, 18.0, 12.0, 0x8B4513),
    (30.0, 30.0, 9.0, 25.0, 9.0, 0x696969),
    (0.0, -20.0, 15.0, 30.0, 15.0, 0xDAA520),
];

const TREES: [(f32, f32); 8] = [
    (-40.0, -40.0),
    (40.0, -40.0),
    (-40.0, 40.0),
    (40.0, 40.0),
    (-50.0, 0.0),
    (50.0, 0.0),
    (0.0, -50.0),
    (0.0, 50.0),
];

/// Ground plane, two crossing roads, five buildings and eight trees.
///
/// The church stands north of the crossing rather than on it so the walk
/// home position is not inside its collision footprint.
#[must_use]
pub fn placeholder_city() -> Vec<Arc<SceneMesh>> {
    let mut meshes = vec![
        SceneMesh::new(
            "ground",
            Shape::Plane {
                width: 200.0,
                depth: 200.0,
            },
            Material::opaque(GROUND),
            Vec3::ZERO,
        ),
        SceneMesh::new(
            "road_north_south",
            Shape::Plane {
                width: 10.0,
                depth: 200.0,
            },
            Material::opaque(ROAD),
            Vec3::new(0.0, 0.01, 0.0),
        ),
        SceneMesh::new(
            "road_east_west",
            Shape::Plane {
                width: 200.0,
                depth: 10.0,
            },
            Material::opaque(ROAD),
            Vec3::new(0.0, 0.01, 0.0),
        ),
    ];

    for (i, &(x, z, w, h, d, color)) in BUILDINGS.iter().enumerate() {
        meshes.push(SceneMesh::new(
            format!("building_{i}"),
            Shape::Cuboid {
                size: Vec3::new(w, h, d),
            },
            Material::opaque(color),
            Vec3::new(x, h / 2.0, z),
        ));
    }

    for (i, &(x, z)) in TREES.iter().enumerate() {
        meshes.push(SceneMesh::new(
            format!("tree_{i}_trunk"),
            Shape::Cylinder {
                radius_top: 0.5,
                radius_bottom: 0.8,
                height: 8.0,
            },
            Material::opaque(TRUNK),
            Vec3::new(x, 4.0, z),
        ));
        meshes.push(SceneMesh::new(
            format!("tree_{i}_crown"),
            Shape::Sphere { radius: 4.0 },
            Material::opaque(CROWN),
            Vec3::new(x, 10.0, z),
        ));
    }

    meshes.into_iter().map(Arc::new).collect()
}

/// [`placeholder_city`] as collision handles.
#[must_use]
pub fn placeholder_solids() -> Vec<SolidHandle> {
    placeholder_city()
        .into_iter()
        .map(|mesh| -> SolidHandle { mesh })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{CollisionRegistry, Rejection, Solid};

    #[test]
    fn city_layout() {
        let city = placeholder_city();
        assert_eq!(city.len(), 3 + 5 + 16);
        assert!(city.iter().all(|m| !m.has_transparent_material()));
    }

    #[test]
    fn flat_surfaces_are_not_admitted() {
        let mut registry = CollisionRegistry::default();
        let admitted = registry.register_all(placeholder_solids());
        assert_eq!(admitted, 5 + 8 + 8);
        assert!(registry
            .solids()
            .iter()
            .all(|s| !s.handle.name().contains("road")
                && s.handle.name() != "ground"));
    }

    #[test]
    fn walk_home_is_free() {
        let mut world = crate::collision::CollisionWorld::default();
        let _ = world.register_all(placeholder_solids());
        let home = Vec3::from_array(
            crate::options::WalkOptions::default().home_position,
        );
        assert!(!world.is_blocked(home));
        assert!(world.is_blocked(Vec3::new(0.0, 5.0, -12.0)));
    }

    #[test]
    fn ground_rejected_as_too_short() {
        let mut registry = CollisionRegistry::default();
        let ground = placeholder_solids().swap_remove(0);
        assert!(matches!(
            registry.register(ground),
            Err(Rejection::TooShort { .. })
        ));
    }
}
