//! Principal axes used as the extrusion direction.

use glam::{Vec2, Vec3};

/// A principal axis of the scene.
///
/// Footprints live on the plane orthogonal to the axis and are extruded
/// along it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    /// Unit vector pointing along this axis.
    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Index of this axis in a `Vec3`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Lift a footprint point onto the plane orthogonal to this axis.
    ///
    /// For `Y` the footprint's `x`/`y` map onto world `x`/`z`.
    #[inline]
    pub fn plane_point(self, p: Vec2) -> Vec3 {
        match self {
            Axis::X => Vec3::new(0.0, p.x, p.y),
            Axis::Y => Vec3::new(p.x, 0.0, p.y),
            Axis::Z => Vec3::new(p.x, p.y, 0.0),
        }
    }

    /// Lift a footprint point and offset it `height` units along this axis.
    #[inline]
    pub fn extrude_point(self, p: Vec2, height: f32) -> Vec3 {
        self.plane_point(p) + self.unit() * height
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
