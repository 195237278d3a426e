//! Scene collaborators consumed by placement tools.
//!
//! Tools never own scene objects. They ask a [`SceneHost`] to create,
//! move, rebuild, commit and destroy them, which keeps the tools testable
//! without a running editor.

mod graph;

pub use graph::{SceneGraph, SceneObject, SceneObjectKind};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneResult;
use crate::placement::CsgOperation;

/// Handle to an object owned by the scene host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// How the scene view draws generator outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizationMode {
    None,
    #[default]
    Outline,
    /// Outline without hidden-line or surface overlays, used while placing
    SimpleOutline,
    Surface,
}

/// Effect handle through which placement tools touch the scene.
pub trait SceneHost {
    /// Model a new generator should be parented under.
    ///
    /// Prefers the model under the pointer, then the active model, and
    /// creates one when neither exists. `None` places the generator at the
    /// scene root.
    fn resolve_or_create_active_model(&mut self, beneath: Option<ObjectId>) -> Option<ObjectId>;

    /// Create a provisional generator object with a world transform.
    fn create_generator_object(
        &mut self,
        kind: &str,
        name: &str,
        parent: Option<ObjectId>,
        transform: Mat4,
    ) -> SceneResult<ObjectId>;

    /// Replace the object's world transform.
    fn set_transform(&mut self, object: ObjectId, transform: Mat4) -> SceneResult<()>;

    /// Position relative to the parent.
    fn local_position(&self, object: ObjectId) -> SceneResult<Vec3>;

    fn set_local_position(&mut self, object: ObjectId, position: Vec3) -> SceneResult<()>;

    /// The object's up direction in world space.
    fn up_vector(&self, object: ObjectId) -> SceneResult<Vec3>;

    /// Push new generator parameters and rebuild its brushes.
    fn update_generator(
        &mut self,
        object: ObjectId,
        operation: CsgOperation,
        parameters: serde_json::Value,
    ) -> SceneResult<()>;

    /// Turn a provisional generator into a permanent scene object.
    fn commit(&mut self, object: ObjectId) -> SceneResult<()>;

    /// Remove the object immediately. Unknown ids are ignored.
    fn destroy(&mut self, object: ObjectId);

    fn select(&mut self, _object: ObjectId) {}

    fn outline_mode(&self) -> VisualizationMode;

    fn set_outline_mode(&mut self, mode: VisualizationMode);
}

/// Switch the outline mode only when it differs.
pub fn ensure_outline_mode(scene: &mut dyn SceneHost, mode: VisualizationMode) {
    if scene.outline_mode() != mode {
        scene.set_outline_mode(mode);
    }
}
