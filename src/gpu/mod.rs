//! GPU resource management: wgpu device, surface and the per-frame uniform
//! buffer.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
