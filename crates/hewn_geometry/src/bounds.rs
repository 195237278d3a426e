//! Axis-aligned boxes produced by rectangle drags.

use glam::Vec3;

/// Axis-aligned box described by two corners.
///
/// A drag can run in any direction, so `min` is not guaranteed to be
/// component-wise below `max`; use [`Bounds3::abs_size`] when only the
/// extent matters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::from_center_size(Vec3::ZERO, Vec3::ONE)
    }
}

impl Bounds3 {
    /// Create from two corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from a center point and a full size
    #[inline]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Signed size (`max - min`)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Extent on each axis regardless of drag direction
    #[inline]
    pub fn abs_size(&self) -> Vec3 {
        self.size().abs()
    }

    /// Same box with `min <= max` on every axis
    pub fn normalized(&self) -> Self {
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }

    /// True when every axis is at least `min_length` long.
    pub fn spans_every_axis(&self, min_length: f32) -> bool {
        self.abs_size().cmpge(Vec3::splat(min_length)).all()
    }

    /// True when every axis is shorter than `min_length`.
    pub fn collapsed_on_every_axis(&self, min_length: f32) -> bool {
        self.abs_size().cmplt(Vec3::splat(min_length)).all()
    }

    /// The eight corners; bit 0 selects x, bit 1 y, bit 2 z.
    pub fn corners(&self) -> [Vec3; 8] {
        let b = self.normalized();
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 == 0 { b.min.x } else { b.max.x },
                if i & 2 == 0 { b.min.y } else { b.max.y },
                if i & 4 == 0 { b.min.z } else { b.max.z },
            );
        }
        corners
    }
}
