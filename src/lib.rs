// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera core for exploring a 3D city in a drone or walking perspective.
//!
//! Each frame the active camera rig turns pointer drags into yaw and pitch,
//! smooths held movement keys into a velocity, asks the collision world
//! whether the resulting candidate position is free, and (in drone mode)
//! clamps it into a dome-shaped flight envelope. Fog is then picked from
//! the camera height and the time of day.
//!
//! # Key entry points
//!
//! - [`Session`] - owns both rigs, the mode, the collision world and the
//!   environment; advance it with [`Session::update`]
//! - [`input::InputProcessor`] - folds window events into per-frame input
//!   and discrete [`SessionCommand`]s
//! - [`collision::Solid`] - what scene geometry implements to become
//!   collidable
//! - [`options::Options`] - every tuning constant, loadable from TOML
//!
//! # Example
//!
//! ```
//! use cityscape::{input::FrameInput, options::Options, scene, Session};
//! use glam::Vec3;
//!
//! let mut session = Session::new(&Options::default());
//! let _ = session.register_solids(scene::placeholder_solids());
//! let _ = session.update(&FrameInput::moving(Vec3::NEG_Z), 0.016);
//! assert!(session.telemetry().starts_with("X: "));
//! ```

pub mod camera;
pub mod collision;
pub mod environment;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod scene;
pub mod session;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use error::CityscapeError;
pub use session::{Mode, Session, SessionCommand};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
