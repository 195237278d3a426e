//! Scripted drag frames shared by the placement integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use glam::{Mat4, Vec2, Vec3};
use hewn_editor::*;
use hewn_geometry::{Axis, Bounds3, Curve2D};

/// Replays pre-recorded drag frames in order.
#[derive(Default)]
pub struct ScriptedExtrusion {
    shapes: VecDeque<ShapeExtrusion>,
    rectangles: VecDeque<BoundsExtrusion>,
    /// Flags received by the last rectangle query
    pub last_flags: Option<PlacementFlags>,
}

impl ScriptedExtrusion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_shape(&mut self, frame: ShapeExtrusion) -> &mut Self {
        self.shapes.push_back(frame);
        self
    }

    pub fn push_rectangle(&mut self, frame: BoundsExtrusion) -> &mut Self {
        self.rectangles.push_back(frame);
        self
    }
}

impl ExtrusionHandles for ScriptedExtrusion {
    fn shape(&mut self, _drag_area: DragArea, _axis: Axis) -> ShapeExtrusion {
        self.shapes.pop_front().expect("no scripted footprint frame left")
    }

    fn rectangle(&mut self, _drag_area: DragArea, flags: PlacementFlags, _axis: Axis) -> BoundsExtrusion {
        self.last_flags = Some(flags);
        self.rectangles.pop_front().expect("no scripted rectangle frame left")
    }
}

/// Scene graph whose host calls can be switched to fail.
#[derive(Default)]
pub struct FlakyScene {
    pub graph: SceneGraph,
    pub fail_commit: bool,
    pub fail_rebuild: bool,
}

impl SceneHost for FlakyScene {
    fn resolve_or_create_active_model(&mut self, beneath: Option<ObjectId>) -> Option<ObjectId> {
        self.graph.resolve_or_create_active_model(beneath)
    }

    fn create_generator_object(
        &mut self,
        kind: &str,
        name: &str,
        parent: Option<ObjectId>,
        transform: Mat4,
    ) -> SceneResult<ObjectId> {
        self.graph.create_generator_object(kind, name, parent, transform)
    }

    fn set_transform(&mut self, object: ObjectId, transform: Mat4) -> SceneResult<()> {
        self.graph.set_transform(object, transform)
    }

    fn local_position(&self, object: ObjectId) -> SceneResult<Vec3> {
        self.graph.local_position(object)
    }

    fn set_local_position(&mut self, object: ObjectId, position: Vec3) -> SceneResult<()> {
        self.graph.set_local_position(object, position)
    }

    fn up_vector(&self, object: ObjectId) -> SceneResult<Vec3> {
        self.graph.up_vector(object)
    }

    fn update_generator(
        &mut self,
        object: ObjectId,
        operation: CsgOperation,
        parameters: serde_json::Value,
    ) -> SceneResult<()> {
        if self.fail_rebuild {
            return Err(SceneError::ObjectNotFound(object));
        }
        self.graph.update_generator(object, operation, parameters)
    }

    fn commit(&mut self, object: ObjectId) -> SceneResult<()> {
        if self.fail_commit {
            return Err(SceneError::ObjectNotFound(object));
        }
        self.graph.commit(object)
    }

    fn destroy(&mut self, object: ObjectId) {
        self.graph.destroy(object)
    }

    fn select(&mut self, object: ObjectId) {
        self.graph.select(object)
    }

    fn outline_mode(&self) -> VisualizationMode {
        self.graph.outline_mode()
    }

    fn set_outline_mode(&mut self, mode: VisualizationMode) {
        self.graph.set_outline_mode(mode)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn drag_area() -> DragArea {
    DragArea::new(Vec2::ZERO, Vec2::new(1280.0, 720.0))
}

/// 2x4 rectangle footprint centered on (3, 4).
pub fn footprint() -> Curve2D {
    Curve2D::rectangle(Vec2::new(2.0, 2.0), Vec2::new(4.0, 6.0))
}

pub fn shape_frame(state: ShapeExtrusionState, height: f32, model_beneath: Option<ObjectId>) -> ShapeExtrusion {
    ShapeExtrusion {
        state,
        shape: footprint(),
        height,
        model_beneath,
        transform: Mat4::IDENTITY,
    }
}

/// Box with `size`, resting on the drag plane and extruded by `size.y`.
pub fn bounds_frame(state: GeneratorModeState, size: Vec3, model_beneath: Option<ObjectId>) -> BoundsExtrusion {
    BoundsExtrusion {
        state,
        bounds: Bounds3::new(Vec3::ZERO, size),
        height: size.y,
        model_beneath,
        transform: Mat4::IDENTITY,
    }
}

/// Run one frame of `tool` against the next scripted frame.
pub fn step(
    tool: &mut dyn PlacementTool,
    scene: &mut dyn SceneHost,
    frames: &mut ScriptedExtrusion,
    modifiers: Modifiers,
) -> PlacementOutcome {
    let mut ctx = ViewContext::new(scene, frames).with_modifiers(modifiers);
    tool.on_interact(&mut ctx, drag_area())
}
