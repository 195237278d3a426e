//! Placement behavior flags (bitflags-style)

use serde::{Deserialize, Serialize};

/// Modifiers that change how a rectangle drag becomes a box.
///
/// "XZ" names the two axes of the placement plane and "Y" the up-axis,
/// in the generator's local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PlacementFlags(u32);

impl PlacementFlags {
    pub const NONE: Self = Self(0);

    /// Both plane axes get the same length
    pub const SAME_LENGTH_XZ: Self = Self(1 << 0);

    /// Height follows the plane extent
    pub const HEIGHT_EQUALS_XZ: Self = Self(1 << 1);

    /// Height follows half the plane extent
    pub const HEIGHT_EQUALS_HALF_XZ: Self = Self(1 << 2);

    /// Never flip the shape upside down; extrusion stays additive
    pub const ALWAYS_FACE_UP: Self = Self(1 << 3);

    /// Orient the plane axes towards the camera
    pub const ALWAYS_FACE_CAMERA_XZ: Self = Self(1 << 4);

    /// Reuse the height of the previous placement
    pub const USE_LAST_HEIGHT: Self = Self(1 << 5);

    /// Grow outwards from the drag origin on the plane
    pub const GENERATE_FROM_CENTER_XZ: Self = Self(1 << 6);

    /// Grow symmetrically around the drag origin's plane
    pub const GENERATE_FROM_CENTER_Y: Self = Self(1 << 7);

    #[inline]
    pub const fn empty() -> Self {
        Self::NONE
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check that every flag in `other` is set
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check that any flag in `other` is set
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Resolve implied flags for one frame.
    ///
    /// Deriving the height from the plane extent only works when both plane
    /// axes agree, and holding shift reuses the last height.
    pub fn normalize(self, shift_held: bool) -> Self {
        let mut flags = self;
        if flags.intersects(Self::HEIGHT_EQUALS_HALF_XZ.union(Self::HEIGHT_EQUALS_XZ)) {
            flags.insert(Self::SAME_LENGTH_XZ);
        }
        if shift_held {
            flags.insert(Self::USE_LAST_HEIGHT);
        }
        flags
    }
}

impl std::ops::BitOr for PlacementFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for PlacementFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for PlacementFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
