use glam::{Mat4, Vec3};

use super::pose::CameraPose;
use crate::environment::Atmosphere;
use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection from camera options and a viewport aspect ratio.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio after a resize. Zero-sized viewports are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer with the active camera and this frame's fog.
pub struct FrameUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Exponential-squared fog density.
    pub fog_density: f32,
    /// Fog color.
    pub fog_color: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Background (sky) color.
    pub sky_color: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameUniform {
    /// Identity view-projection, no fog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fog_density: 0.0,
            fog_color: [0.0; 3],
            _pad0: 0.0,
            sky_color: [0.0; 3],
            _pad1: 0.0,
        }
    }

    /// Update uniform fields from the active pose and atmosphere.
    pub fn update(
        &mut self,
        pose: &CameraPose,
        projection: &Projection,
        atmosphere: &Atmosphere,
    ) {
        self.view_proj =
            (projection.matrix() * pose.view_matrix()).to_cols_array_2d();
        self.position = pose.position.to_array();
        self.fog_density = atmosphere.fog.density;
        self.fog_color = atmosphere.fog.color.to_array();
        self.sky_color = atmosphere.sky.to_array();
    }

    /// Camera position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}
