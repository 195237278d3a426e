//! # hewn_geometry - Placement Geometry
//!
//! The small set of shapes a drag in the scene view resolves to:
//! a closed 2D footprint ([`Curve2D`]), an axis-aligned box ([`Bounds3`])
//! and the up-[`Axis`] the footprint is extruded along.
//!
//! Vector and matrix types come from `glam` and are re-exported so
//! downstream crates agree on a single version.

pub mod axis;
pub mod bounds;
pub mod curve;
pub mod error;

pub use axis::Axis;
pub use bounds::Bounds3;
pub use curve::Curve2D;
pub use error::{GeometryError, Result};

pub use glam::{Mat4, Vec2, Vec3};

/// Common constants
pub mod consts {
    pub const TAU: f32 = core::f32::consts::TAU;
}
