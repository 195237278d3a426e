//! Placement tools.
//!
//! Tools are polled once per frame by the host and turn the current drag
//! into a provisional generator, which they commit or discard when the
//! drag ends.

mod bounds_tool;
mod shape_tool;
mod tool;

pub use crate::placement::DragArea;
pub use bounds_tool::BoundsPlacementTool;
pub use shape_tool::ShapePlacementTool;
pub use tool::{Modifiers, PlacementOutcome, PlacementTool, ToolId, ToolRegistry, ViewContext};
