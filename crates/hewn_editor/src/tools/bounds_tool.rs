//! Bounds placement: drag out a rectangle, then extrude it into a box.

use glam::Vec3;
use hewn_geometry::Axis;

use super::{PlacementOutcome, PlacementTool, ToolId, ViewContext};
use crate::config::PlacementPreferences;
use crate::error::SceneResult;
use crate::generators::{BoundsGenerator, GeneratorInstance};
use crate::placement::{
    resolve_bounds_operation, BoundsExtrusion, CsgOperation, DragArea, GeneratorModeState, PlacementFlags,
};
use crate::preview::{PreviewLines, PreviewRenderer};
use crate::scene::{ensure_outline_mode, ObjectId, SceneHost, VisualizationMode};

/// Provisional generator plus the pivot captured when it was created.
struct BoundsSession<D> {
    instance: GeneratorInstance<D>,
    /// Local position right after creation, before any pivot shift
    component_position: Vec3,
    /// World up-axis of the object at creation
    up_axis: Vec3,
}

impl<D> BoundsSession<D> {
    /// Position that centers the generator vertically on the drag plane.
    fn centered_position(&self, height: f32) -> Vec3 {
        self.component_position - self.up_axis * height * 0.5
    }
}

/// Places a [`BoundsGenerator`] from a rectangle drag.
pub struct BoundsPlacementTool<D: BoundsGenerator> {
    id: ToolId,
    group: &'static str,
    shortcut: Option<&'static str>,
    up_axis: Axis,
    placement_flags: PlacementFlags,
    minimum_axis_length: f32,
    outline_mode: VisualizationMode,
    select_on_commit: bool,
    forced_operation: Option<CsgOperation>,
    session: Option<BoundsSession<D>>,
    renderer: PreviewLines,
    created_count: u32,
}

impl<D: BoundsGenerator> BoundsPlacementTool<D> {
    pub fn new(name: &'static str, group: &'static str) -> Self {
        Self::with_preferences(name, group, &PlacementPreferences::default())
    }

    pub fn with_preferences(name: &'static str, group: &'static str, prefs: &PlacementPreferences) -> Self {
        Self {
            id: ToolId(name),
            group,
            shortcut: None,
            up_axis: prefs.up_axis,
            placement_flags: D::placement_flags(),
            minimum_axis_length: prefs.minimum_axis_length,
            outline_mode: prefs.outline_mode,
            select_on_commit: prefs.select_on_commit,
            forced_operation: None,
            session: None,
            renderer: PreviewLines::new().with_segments(prefs.preview_segments as usize),
            created_count: 0,
        }
    }

    /// Replace the generator's default placement flags.
    pub fn with_flags(mut self, flags: PlacementFlags) -> Self {
        self.placement_flags = flags;
        self
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

    pub fn placement_flags(&self) -> PlacementFlags {
        self.placement_flags
    }

    pub fn generated(&self) -> Option<&GeneratorInstance<D>> {
        self.session.as_ref().map(|session| &session.instance)
    }

    /// Lines painted by the last frame.
    pub fn preview(&self) -> &PreviewLines {
        &self.renderer
    }

    fn create(
        &mut self,
        scene: &mut dyn SceneHost,
        extrusion: &BoundsExtrusion,
        flags: PlacementFlags,
    ) -> PlacementOutcome {
        // Ignore accidental clicks that barely moved the pointer.
        if !extrusion.bounds.spans_every_axis(self.minimum_axis_length) {
            return PlacementOutcome::Idle;
        }

        let parent = scene.resolve_or_create_active_model(extrusion.model_beneath);
        let name = format!("{} {}", self.id, self.created_count + 1);
        let object = match scene.create_generator_object(D::KIND, &name, parent, extrusion.transform) {
            Ok(object) => object,
            Err(err) => {
                log::warn!("Could not create {}: {}", name, err);
                return PlacementOutcome::Idle;
            }
        };

        let operation = self.forced_operation.unwrap_or(CsgOperation::Additive);
        match Self::initialize(scene, object, operation, extrusion, flags) {
            Ok(session) => {
                log::debug!("Created {} as {} ({})", name, object, operation.name());
                self.created_count += 1;
                self.session = Some(session);
                PlacementOutcome::Created(object)
            }
            Err(err) => {
                log::warn!("Discarding {} after failed setup: {}", name, err);
                scene.destroy(object);
                PlacementOutcome::Idle
            }
        }
    }

    fn initialize(
        scene: &mut dyn SceneHost,
        object: ObjectId,
        operation: CsgOperation,
        extrusion: &BoundsExtrusion,
        flags: PlacementFlags,
    ) -> SceneResult<BoundsSession<D>> {
        let mut session = BoundsSession {
            instance: GeneratorInstance::<D>::new(object, operation),
            component_position: scene.local_position(object)?,
            up_axis: scene.up_vector(object)?,
        };

        let definition = session.instance.definition_mut();
        definition.apply_initial_bounds(&extrusion.bounds);
        definition.apply_bounds(&extrusion.bounds);
        session.instance.on_validate(scene)?;

        if flags.contains(PlacementFlags::GENERATE_FROM_CENTER_Y) {
            scene.set_local_position(object, session.centered_position(extrusion.height))?;
        }
        session.instance.update_generator(scene)?;
        Ok(session)
    }

    fn update(
        &mut self,
        scene: &mut dyn SceneHost,
        extrusion: &BoundsExtrusion,
        flags: PlacementFlags,
    ) -> PlacementOutcome {
        let Some(session) = self.session.as_mut() else {
            return PlacementOutcome::Idle;
        };
        let object = session.instance.object();
        match Self::apply_bounds(session, scene, extrusion, flags, self.forced_operation) {
            Ok(()) => {
                log::trace!("Updated {} to size {:?}", object, extrusion.bounds.size());
                PlacementOutcome::Updated(object)
            }
            Err(err) => {
                log::warn!("Lost provisional generator {}: {}", object, err);
                self.session = None;
                scene.destroy(object);
                PlacementOutcome::Cancelled(Some(object))
            }
        }
    }

    fn apply_bounds(
        session: &mut BoundsSession<D>,
        scene: &mut dyn SceneHost,
        extrusion: &BoundsExtrusion,
        flags: PlacementFlags,
        forced: Option<CsgOperation>,
    ) -> SceneResult<()> {
        let object = session.instance.object();
        scene.set_transform(object, extrusion.transform)?;
        session.instance.set_operation(resolve_bounds_operation(
            forced,
            flags,
            extrusion.height,
            extrusion.model_beneath.is_some(),
        ));
        session.instance.definition_mut().apply_bounds(&extrusion.bounds);
        session.instance.on_validate(scene)?;

        // Always measured from the creation snapshot so repeated frames
        // don't accumulate the shift.
        if flags.contains(PlacementFlags::GENERATE_FROM_CENTER_Y) {
            scene.set_local_position(object, session.centered_position(extrusion.height))?;
        }
        Ok(())
    }

    /// The drag shrank back to nothing: drop the generator.
    fn destroy_collapsed(&mut self, scene: &mut dyn SceneHost) -> PlacementOutcome {
        match self.session.take() {
            Some(session) => {
                let object = session.instance.object();
                scene.destroy(object);
                log::debug!("Destroyed collapsed generator {}", object);
                PlacementOutcome::Destroyed(object)
            }
            None => PlacementOutcome::Idle,
        }
    }

    fn commit(&mut self, scene: &mut dyn SceneHost) -> PlacementOutcome {
        let Some(session) = self.session.take() else {
            return self.cancel(scene);
        };
        let object = session.instance.object();
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
        let object = self.session.take().map(|session| session.instance.object());
        if let Some(object) = object {
            scene.destroy(object);
            log::debug!("Cancelled placement, destroyed {}", object);
        }
        PlacementOutcome::Cancelled(object)
    }
}

impl<D: BoundsGenerator> PlacementTool for BoundsPlacementTool<D> {
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
        let flags = self.placement_flags.normalize(ctx.modifiers.shift);
        let extrusion = ctx.extrusion.rectangle(drag_area, flags, self.up_axis);

        let outcome = match extrusion.state {
            GeneratorModeState::Update if self.session.is_none() => {
                self.create(ctx.scene, &extrusion, flags)
            }
            GeneratorModeState::Update => {
                if extrusion.bounds.collapsed_on_every_axis(self.minimum_axis_length) {
                    // Nothing left to preview either.
                    self.renderer.clear();
                    return self.destroy_collapsed(ctx.scene);
                }
                self.update(ctx.scene, &extrusion, flags)
            }
            GeneratorModeState::Commit => self.commit(ctx.scene),
            GeneratorModeState::Cancel => self.cancel(ctx.scene),
            GeneratorModeState::None => PlacementOutcome::Idle,
        };

        ensure_outline_mode(ctx.scene, self.outline_mode);
        self.renderer.clear();
        self.renderer.set_matrix(extrusion.transform);
        D::paint(&mut self.renderer, &extrusion.bounds);
        outcome
    }

    fn live_object(&self) -> Option<ObjectId> {
        self.session.as_ref().map(|session| session.instance.object())
    }
}
