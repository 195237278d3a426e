//! Generator definitions and the live instances tools build from them.
//!
//! A definition is the parametric description of one primitive. Tools
//! drive it through two narrow traits, [`ShapeGenerator`] for footprint
//! extrusions and [`BoundsGenerator`] for box drags, and never touch its
//! fields directly.
//!
//! Definitions work in the generator's local frame: footprints lie on the
//! local XZ plane and extrude along local Y.

mod box_brush;
mod cylinder;
mod extruded_shape;
mod sphere;

pub use box_brush::BoxDefinition;
pub use cylinder::CylinderDefinition;
pub use extruded_shape::ExtrudedShapeDefinition;
pub use sphere::SphereDefinition;

use hewn_geometry::{Bounds3, Curve2D};
use serde::Serialize;

use crate::error::SceneResult;
use crate::placement::{CsgOperation, PlacementFlags};
use crate::preview::PreviewRenderer;
use crate::scene::{ObjectId, SceneHost};

/// Parametric description of a primitive.
pub trait GeneratorDefinition: Default + Clone + std::fmt::Debug + Serialize {
    /// Generator kind handed to the object factory.
    const KIND: &'static str;

    /// Restore every parameter to its default.
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp parameters into their valid ranges.
    fn validate(&mut self);

    /// Parameters as sent to the scene host on rebuild.
    fn parameters(&self) -> serde_json::Value {
        match serde_json::to_value(self) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Failed to encode {} parameters: {}", Self::KIND, err);
                serde_json::Value::Null
            }
        }
    }
}

/// A generator placed by drawing a footprint and extruding it.
pub trait ShapeGenerator: GeneratorDefinition {
    /// Take over a footprint that has already been centered on the origin.
    fn apply_initial_shape(&mut self, shape: &Curve2D);

    /// Set the extrusion height.
    fn apply_height(&mut self, height: f32);

    /// Preview outline for a footprint extruded to `height`.
    fn paint(renderer: &mut dyn PreviewRenderer, shape: &Curve2D, height: f32);
}

/// A generator placed by dragging out a box.
pub trait BoundsGenerator: GeneratorDefinition {
    /// Flags this generator places with unless the tool overrides them.
    fn placement_flags() -> PlacementFlags {
        PlacementFlags::NONE
    }

    /// Called once when the generator is created, before the first
    /// [`apply_bounds`](Self::apply_bounds).
    fn apply_initial_bounds(&mut self, _bounds: &Bounds3) {}

    fn apply_bounds(&mut self, bounds: &Bounds3);

    fn paint(renderer: &mut dyn PreviewRenderer, bounds: &Bounds3);
}

/// A definition bound to a scene object and an operation.
#[derive(Clone, Debug)]
pub struct GeneratorInstance<D> {
    object: ObjectId,
    definition: D,
    operation: CsgOperation,
}

impl<D: GeneratorDefinition> GeneratorInstance<D> {
    /// Wrap a freshly created scene object with a reset definition.
    pub fn new(object: ObjectId, operation: CsgOperation) -> Self {
        let mut definition = D::default();
        definition.reset();
        Self {
            object,
            definition,
            operation,
        }
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn definition(&self) -> &D {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut D {
        &mut self.definition
    }

    pub fn operation(&self) -> CsgOperation {
        self.operation
    }

    pub fn set_operation(&mut self, operation: CsgOperation) {
        self.operation = operation;
    }

    /// Push the current parameters to the scene and rebuild.
    pub fn update_generator(&self, scene: &mut dyn SceneHost) -> SceneResult<()> {
        scene.update_generator(self.object, self.operation, self.definition.parameters())
    }

    /// Validate the definition, then rebuild.
    pub fn on_validate(&mut self, scene: &mut dyn SceneHost) -> SceneResult<()> {
        self.definition.validate();
        self.update_generator(scene)
    }
}
