//! Shared utilities.

/// Per-frame timestep source for the frame loop.
pub mod frame_timing;
