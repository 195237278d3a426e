//! Boolean operation a generator contributes to its model with.

use serde::{Deserialize, Serialize};

use super::PlacementFlags;

/// How a generator's solid combines with the rest of the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CsgOperation {
    #[default]
    Additive,
    Subtractive,
    Intersecting,
}

impl CsgOperation {
    pub fn name(&self) -> &'static str {
        match self {
            CsgOperation::Additive => "Additive",
            CsgOperation::Subtractive => "Subtractive",
            CsgOperation::Intersecting => "Intersecting",
        }
    }
}

/// Operation for a footprint extrusion.
///
/// Extruding downward while over an existing model carves into it.
pub fn resolve_operation(forced: Option<CsgOperation>, height: f32, over_model: bool) -> CsgOperation {
    forced.unwrap_or(if height < 0.0 && over_model {
        CsgOperation::Subtractive
    } else {
        CsgOperation::Additive
    })
}

/// Operation for a bounds extrusion; `ALWAYS_FACE_UP` keeps it additive.
pub fn resolve_bounds_operation(
    forced: Option<CsgOperation>,
    flags: PlacementFlags,
    height: f32,
    over_model: bool,
) -> CsgOperation {
    if flags.contains(PlacementFlags::ALWAYS_FACE_UP) {
        return forced.unwrap_or(CsgOperation::Additive);
    }
    resolve_operation(forced, height, over_model)
}
