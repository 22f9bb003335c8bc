//! Scene geometry handed to the collision registry.

mod city;
mod mesh;

pub use city::{placeholder_city, placeholder_solids};
pub use mesh::{Material, SceneMesh, Shape};
