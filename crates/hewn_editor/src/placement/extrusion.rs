//! Results of the per-frame drag query.
//!
//! Projecting the pointer onto the scene, snapping and tracking the
//! mouse buttons happens in the host. Tools only see the outcome: a
//! discrete state and the geometry resolved so far.

use glam::{Mat4, Vec2};
use hewn_geometry::{Axis, Bounds3, Curve2D};

use super::PlacementFlags;
use crate::scene::ObjectId;

/// Screen-space rectangle the drag is confined to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl DragArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// State of a footprint drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeExtrusionState {
    /// Nothing is being dragged
    #[default]
    None,
    /// The footprint was just closed and is being extruded
    Create,
    /// The extrusion height changed
    Modified,
    /// The drag ended and the shape should be kept
    Commit,
    /// The drag was aborted
    Cancel,
}

impl ShapeExtrusionState {
    /// Drag is live and geometry may have changed.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Create | Self::Modified)
    }
}

/// State of a rectangle drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorModeState {
    #[default]
    None,
    Commit,
    Cancel,
    /// Drag is live and the bounds may have changed
    Update,
}

/// One frame of a footprint drag.
#[derive(Clone, Debug)]
pub struct ShapeExtrusion {
    pub state: ShapeExtrusionState,
    pub shape: Curve2D,
    /// Signed distance along the up-axis
    pub height: f32,
    /// Model under the pointer, if any
    pub model_beneath: Option<ObjectId>,
    /// Frame the footprint lives in; its local Y is the extrusion direction
    pub transform: Mat4,
}

/// One frame of a rectangle drag.
#[derive(Clone, Debug)]
pub struct BoundsExtrusion {
    pub state: GeneratorModeState,
    pub bounds: Bounds3,
    /// Signed distance along the up-axis
    pub height: f32,
    pub model_beneath: Option<ObjectId>,
    pub transform: Mat4,
}

/// The host's drag handles, queried once per frame by the active tool.
pub trait ExtrusionHandles {
    /// Footprint drag along `axis`.
    fn shape(&mut self, drag_area: DragArea, axis: Axis) -> ShapeExtrusion;

    /// Rectangle drag along `axis`, shaped by `flags`.
    fn rectangle(&mut self, drag_area: DragArea, flags: PlacementFlags, axis: Axis) -> BoundsExtrusion;
}
