//! Integration tests for footprint placement
//!
//! Drives `ShapePlacementTool` through scripted drags against the
//! in-memory scene graph.

mod common;

use common::*;
use glam::{Mat4, Vec2, Vec3};
use hewn_editor::*;

fn free_draw() -> ShapePlacementTool<ExtrudedShapeDefinition> {
    ShapePlacementTool::new("Extruded", "Freeform")
}

fn run(
    tool: &mut ShapePlacementTool<ExtrudedShapeDefinition>,
    scene: &mut dyn SceneHost,
    frame: ShapeExtrusion,
) -> PlacementOutcome {
    let mut frames = ScriptedExtrusion::new();
    frames.push_shape(frame);
    step(tool, scene, &mut frames, Modifiers::default())
}

#[test]
fn test_zero_height_creates_nothing() {
    init_logging();
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 0.0, None));

    assert_eq!(outcome, PlacementOutcome::Idle);
    assert!(tool.generated().is_none());
    assert_eq!(scene.generators().count(), 0);
    // Preview still shows the flat footprint.
    assert_eq!(tool.preview().lines().len(), 4);
}

#[test]
fn test_extrude_up_creates_additive_generator() {
    init_logging();
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 5.0, None));

    let PlacementOutcome::Created(id) = outcome else {
        panic!("expected a generator, got {:?}", outcome);
    };
    let instance = tool.generated().unwrap();
    assert_eq!(instance.object(), id);
    assert_eq!(instance.operation(), CsgOperation::Additive);
    assert_eq!(instance.definition().height, 5.0);

    // Footprint is re-centered; the object carries the offset.
    assert_eq!(instance.definition().shape.center(), Vec2::ZERO);
    assert_eq!(scene.local_position(id).unwrap(), Vec3::new(3.0, 0.0, 4.0));

    let object = scene.get(id).unwrap();
    assert!(!object.committed);
    assert_eq!(object.name, "Extruded 1");
    assert_eq!(object.generator_kind(), Some("ExtrudedShape"));
    assert_eq!(object.parameters["height"], serde_json::json!(5.0));
    assert_eq!(object.rebuilds, 1);
}

#[test]
fn test_extrude_down_into_model_turns_subtractive() {
    init_logging();
    let mut scene = SceneGraph::new();
    let model = scene.add_model("Level", Mat4::IDENTITY);
    let mut tool = free_draw();

    let created = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 5.0, None));
    let updated = run(
        &mut tool,
        &mut scene,
        shape_frame(ShapeExtrusionState::Modified, -3.0, Some(model)),
    );

    let id = created.live_object().unwrap();
    assert_eq!(updated, PlacementOutcome::Updated(id));
    let instance = tool.generated().unwrap();
    assert_eq!(instance.operation(), CsgOperation::Subtractive);
    assert_eq!(instance.definition().height, -3.0);
    assert_eq!(scene.get(id).unwrap().operation, CsgOperation::Subtractive);
    assert_eq!(scene.generators().count(), 1);
}

#[test]
fn test_extrude_down_over_empty_space_stays_additive() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 1.0, None));
    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, -2.0, None));

    assert_eq!(tool.generated().unwrap().operation(), CsgOperation::Additive);
}

#[test]
fn test_forced_operation_overrides_inference() {
    let mut scene = SceneGraph::new();
    let model = scene.add_model("Level", Mat4::IDENTITY);
    let mut tool = free_draw().with_forced_operation(CsgOperation::Intersecting);

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, Some(model)));
    assert_eq!(tool.generated().unwrap().operation(), CsgOperation::Intersecting);

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, -2.0, Some(model)));
    assert_eq!(tool.generated().unwrap().operation(), CsgOperation::Intersecting);
}

#[test]
fn test_generator_is_parented_under_model_beneath() {
    let mut scene = SceneGraph::new();
    let _other = scene.add_model("Other", Mat4::IDENTITY);
    let target = scene.add_model("Target", Mat4::IDENTITY);
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 1.0, Some(target)))
        .live_object()
        .unwrap();

    assert_eq!(scene.get(id).unwrap().parent, Some(target));
    assert_eq!(scene.active_model(), Some(target));
}

#[test]
fn test_repeated_update_only_rebuilds() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 4.0, None));
    let definition = tool.generated().unwrap().definition().clone();
    let parameters = scene.get(id).unwrap().parameters.clone();
    let rebuilds = scene.get(id).unwrap().rebuilds;

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 4.0, None));

    assert_eq!(tool.generated().unwrap().definition(), &definition);
    assert_eq!(scene.get(id).unwrap().parameters, parameters);
    assert_eq!(scene.get(id).unwrap().rebuilds, rebuilds + 1);
}

#[test]
fn test_commit_keeps_and_selects_generator() {
    init_logging();
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Commit, 2.0, None));

    assert_eq!(outcome, PlacementOutcome::Committed(id));
    assert!(tool.live_object().is_none());
    assert!(scene.get(id).unwrap().committed);
    assert_eq!(scene.selected(), Some(id));
    assert_eq!(scene.provisional().count(), 0);
}

#[test]
fn test_commit_respects_select_preference() {
    let prefs = PlacementPreferences {
        select_on_commit: false,
        ..Default::default()
    };
    let mut scene = SceneGraph::new();
    let mut tool: ShapePlacementTool<ExtrudedShapeDefinition> =
        ShapePlacementTool::with_preferences("Extruded", "Freeform", &prefs);

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None));
    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Commit, 2.0, None));

    assert_eq!(scene.selected(), None);
}

#[test]
fn test_commit_without_generator_is_a_cancel() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Commit, 0.0, None));

    assert_eq!(outcome, PlacementOutcome::Cancelled(None));
    assert_eq!(scene.generators().count(), 0);
}

#[test]
fn test_cancel_mid_drag_destroys_generator() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Cancel, 2.0, None));

    assert_eq!(outcome, PlacementOutcome::Cancelled(Some(id)));
    assert!(!scene.contains(id));
    assert!(tool.live_object().is_none());
    assert_eq!(scene.selected(), None);

    // Cancelling again is harmless.
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Cancel, 2.0, None));
    assert_eq!(outcome, PlacementOutcome::Cancelled(None));
}

#[test]
fn test_factory_failure_retries_next_frame() {
    init_logging();
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    scene.set_creation_blocked(true);
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None));
    assert_eq!(outcome, PlacementOutcome::Idle);
    assert!(tool.generated().is_none());

    scene.set_creation_blocked(false);
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 3.0, None));
    let id = outcome.live_object().unwrap();
    assert_eq!(scene.get(id).unwrap().name, "Extruded 1");
    assert_eq!(tool.generated().unwrap().definition().height, 3.0);
}

#[test]
fn test_generator_deleted_by_host_ends_session() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    scene.destroy(id);

    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 3.0, None));
    assert_eq!(outcome, PlacementOutcome::Cancelled(Some(id)));
    assert!(tool.live_object().is_none());
}

#[test]
fn test_failed_commit_removes_generator() {
    init_logging();
    let mut scene = FlakyScene::default();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    scene.fail_commit = true;
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Commit, 2.0, None));

    assert_eq!(outcome, PlacementOutcome::Cancelled(Some(id)));
    assert!(tool.live_object().is_none());
    assert!(!scene.graph.contains(id));
    assert_eq!(scene.graph.provisional().count(), 0);
    assert_eq!(scene.graph.selected(), None);
}

#[test]
fn test_failed_rebuild_removes_generator() {
    init_logging();
    let mut scene = FlakyScene::default();
    let mut tool = free_draw();

    let id = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 2.0, None))
        .live_object()
        .unwrap();
    scene.fail_rebuild = true;
    let outcome = run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 3.0, None));

    assert_eq!(outcome, PlacementOutcome::Cancelled(Some(id)));
    assert!(tool.live_object().is_none());
    assert!(!scene.graph.contains(id));
}

#[test]
fn test_names_count_up_across_placements() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    for _ in 0..2 {
        run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 1.0, None));
        run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Commit, 1.0, None));
    }

    let names: Vec<_> = scene.generators().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Extruded 1", "Extruded 2"]);
}

#[test]
fn test_outline_mode_is_set_once() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();

    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::None, 0.0, None));
    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Create, 1.0, None));
    run(&mut tool, &mut scene, shape_frame(ShapeExtrusionState::Modified, 2.0, None));

    assert_eq!(scene.outline_mode(), VisualizationMode::SimpleOutline);
    assert_eq!(scene.outline_mode_changes(), 1);
}

#[test]
fn test_preview_follows_drag_transform() {
    let mut scene = SceneGraph::new();
    let mut tool = free_draw();
    let transform = Mat4::from_translation(Vec3::new(0.0, 10.0, 0.0));

    let mut frame = shape_frame(ShapeExtrusionState::Create, 2.0, None);
    frame.transform = transform;
    run(&mut tool, &mut scene, frame);

    let preview = tool.preview();
    assert_eq!(preview.matrix(), transform);
    assert_eq!(preview.lines().len(), 12);
    assert!(preview.lines().iter().flatten().all(|p| p.y >= 10.0 && p.y <= 12.0));
}
