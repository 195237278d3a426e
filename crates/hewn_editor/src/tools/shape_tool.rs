//! Footprint placement: draw a closed shape, then extrude it.

use glam::{Mat4, Vec2};
use hewn_geometry::Axis;

use super::{PlacementOutcome, PlacementTool, ToolId, ViewContext};
use crate::config::PlacementPreferences;
use crate::error::SceneResult;
use crate::generators::{GeneratorInstance, ShapeGenerator};
use crate::placement::{resolve_operation, CsgOperation, DragArea, ShapeExtrusion, ShapeExtrusionState};
use crate::preview::{PreviewLines, PreviewRenderer};
use crate::scene::{ensure_outline_mode, ObjectId, SceneHost, VisualizationMode};

/// Places a [`ShapeGenerator`] from a footprint drag.
///
/// The generator is created on the first frame with a non-zero height.
/// Its object sits at the footprint's center and the definition receives
/// the footprint re-centered on the origin.
pub struct ShapePlacementTool<D: ShapeGenerator> {
    id: ToolId,
    group: &'static str,
    shortcut: Option<&'static str>,
    up_axis: Axis,
    outline_mode: VisualizationMode,
    select_on_commit: bool,
    forced_operation: Option<CsgOperation>,
    generated: Option<GeneratorInstance<D>>,
    renderer: PreviewLines,
    created_count: u32,
}

impl<D: ShapeGenerator> ShapePlacementTool<D> {
    pub fn new(name: &'static str, group: &'static str) -> Self {
        Self::with_preferences(name, group, &PlacementPreferences::default())
    }

    pub fn with_preferences(name: &'static str, group: &'static str, prefs: &PlacementPreferences) -> Self {
        Self {
            id: ToolId(name),
            group,
            shortcut: None,
            up_axis: prefs.up_axis,
            outline_mode: prefs.outline_mode,
            select_on_commit: prefs.select_on_commit,
            forced_operation: None,
            generated: None,
            renderer: PreviewLines::new().with_segments(prefs.preview_segments as usize),
            created_count: 0,
        }
    }

    /// Always place with `operation` instead of inferring it.
    pub fn with_forced_operation(mut self, operation: CsgOperation) -> Self {
        self.forced_operation = Some(operation);
        self
    }

    pub fn with_shortcut(mut self, key: &'static str) -> Self {
        self.shortcut = Some(key);
        self
    }

    pub fn forced_operation(&self) -> Option<CsgOperation> {
        self.forced_operation
    }

    /// The provisional generator, if a drag is in progress.
    pub fn generated(&self) -> Option<&GeneratorInstance<D>> {
        self.generated.as_ref()
    }

    /// Lines painted by the last frame.
    pub fn preview(&self) -> &PreviewLines {
        &self.renderer
    }

    fn create(&mut self, scene: &mut dyn SceneHost, extrusion: &ShapeExtrusion) -> PlacementOutcome {
        // A flat footprint has no volume yet.
        if extrusion.height == 0.0 {
            return PlacementOutcome::Idle;
        }

        let mut shape = extrusion.shape.clone();
        let center = Axis::Y.plane_point(shape.center());
        let parent = scene.resolve_or_create_active_model(extrusion.model_beneath);
        let name = format!("{} {}", self.id, self.created_count + 1);
        let transform = extrusion.transform * Mat4::from_translation(center);

        let object = match scene.create_generator_object(D::KIND, &name, parent, transform) {
            Ok(object) => object,
            Err(err) => {
                log::warn!("Could not create {}: {}", name, err);
                return PlacementOutcome::Idle;
            }
        };
        shape.set_center(Vec2::ZERO);

        let mut instance = GeneratorInstance::<D>::new(
            object,
            self.forced_operation.unwrap_or(CsgOperation::Additive),
        );
        instance.definition_mut().apply_initial_shape(&shape);
        instance.definition_mut().apply_height(extrusion.height);
        if let Err(err) = instance.update_generator(scene) {
            log::warn!("Discarding {} after failed rebuild: {}", name, err);
            scene.destroy(object);
            return PlacementOutcome::Idle;
        }

        log::debug!("Created {} as {} ({})", name, object, instance.operation().name());
        self.created_count += 1;
        self.generated = Some(instance);
        PlacementOutcome::Created(object)
    }

    fn update(&mut self, scene: &mut dyn SceneHost, extrusion: &ShapeExtrusion) -> PlacementOutcome {
        let Some(instance) = self.generated.as_mut() else {
            return PlacementOutcome::Idle;
        };
        let object = instance.object();
        let result = Self::apply_height(instance, scene, extrusion, self.forced_operation);
        match result {
            Ok(()) => {
                log::trace!("Updated {} to height {}", object, extrusion.height);
                PlacementOutcome::Updated(object)
            }
            Err(err) => {
                log::warn!("Lost provisional generator {}: {}", object, err);
                self.generated = None;
                scene.destroy(object);
                PlacementOutcome::Cancelled(Some(object))
            }
        }
    }

    fn apply_height(
        instance: &mut GeneratorInstance<D>,
        scene: &mut dyn SceneHost,
        extrusion: &ShapeExtrusion,
        forced: Option<CsgOperation>,
    ) -> SceneResult<()> {
        instance.set_operation(resolve_operation(
            forced,
            extrusion.height,
            extrusion.model_beneath.is_some(),
        ));
        instance.definition_mut().apply_height(extrusion.height);
        instance.on_validate(scene)
    }

    fn commit(&mut self, scene: &mut dyn SceneHost) -> PlacementOutcome {
        let Some(instance) = self.generated.take() else {
            return self.cancel(scene);
        };
        let object = instance.object();
        match scene.commit(object) {
            Ok(()) => {
                if self.select_on_commit {
                    scene.select(object);
                }
                log::debug!("Committed {}", object);
                PlacementOutcome::Committed(object)
            }
            Err(err) => {
                log::warn!("Could not commit {}: {}", object, err);
                scene.destroy(object);
                PlacementOutcome::Cancelled(Some(object))
            }
        }
    }

    fn cancel(&mut self, scene: &mut dyn SceneHost) -> PlacementOutcome {
        let object = self.generated.take().map(|instance| instance.object());
        if let Some(object) = object {
            scene.destroy(object);
            log::debug!("Cancelled placement, destroyed {}", object);
        }
        PlacementOutcome::Cancelled(object)
    }
}

impl<D: ShapeGenerator> PlacementTool for ShapePlacementTool<D> {
    fn id(&self) -> ToolId {
        self.id
    }

    fn group(&self) -> &str {
        self.group
    }

    fn shortcut(&self) -> Option<&str> {
        self.shortcut
    }

    fn on_deactivate(&mut self, scene: &mut dyn SceneHost) {
        self.cancel(scene);
        self.renderer.clear();
    }

    fn on_interact(&mut self, ctx: &mut ViewContext<'_>, drag_area: DragArea) -> PlacementOutcome {
        let extrusion = ctx.extrusion.shape(drag_area, self.up_axis);

        let outcome = match extrusion.state {
            state if state.is_live() => {
                if self.generated.is_none() {
                    self.create(ctx.scene, &extrusion)
                } else {
                    self.update(ctx.scene, &extrusion)
                }
            }
            ShapeExtrusionState::Commit => self.commit(ctx.scene),
            ShapeExtrusionState::Cancel => self.cancel(ctx.scene),
            _ => PlacementOutcome::Idle,
        };

        ensure_outline_mode(ctx.scene, self.outline_mode);
        self.renderer.clear();
        self.renderer.set_matrix(extrusion.transform);
        D::paint(&mut self.renderer, &extrusion.shape, extrusion.height);
        outcome
    }

    fn live_object(&self) -> Option<ObjectId> {
        self.generated.as_ref().map(|instance| instance.object())
    }
}
