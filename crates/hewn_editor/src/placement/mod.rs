//! Inputs to the placement tools: drag states, extrusion results, flags
//! and the boolean operation a generator contributes with.

mod extrusion;
mod flags;
mod operation;

pub use extrusion::{
    BoundsExtrusion, DragArea, ExtrusionHandles, GeneratorModeState, ShapeExtrusion, ShapeExtrusionState,
};
pub use flags::PlacementFlags;
pub use operation::{resolve_bounds_operation, resolve_operation, CsgOperation};
