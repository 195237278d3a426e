//! Hewn Placement Tools
//!
//! Interactive placement of parametric CSG generators in a scene view.
//!
//! ## Features
//!
//! - **Footprint tools**: draw a closed 2D shape, then drag it up or down
//!   into an extruded solid
//! - **Bounds tools**: drag out a rectangle and extrude it into a box,
//!   cylinder or sphere
//! - **Operation inference**: extruding downward into an existing model
//!   carves it instead of adding to it
//! - **Tool registry**: lookup by id, shortcut or menu group
//!
//! ## Architecture
//!
//! The host calls the active tool once per frame:
//!
//! ```text
//! Pointer → ExtrusionHandles → PlacementTool::on_interact → SceneHost
//!                                        ↓
//!                                  PreviewLines
//! ```
//!
//! Each tool owns at most one provisional generator. It is created on the
//! first frame that yields a usable shape, updated every frame after that,
//! and either committed or destroyed when the drag ends.

pub mod config;
pub mod error;
pub mod generators;
pub mod placement;
pub mod preview;
pub mod scene;
pub mod tools;

pub use config::PlacementPreferences;
pub use error::{ConfigError, SceneError, SceneResult};

pub use generators::{
    BoundsGenerator, BoxDefinition, CylinderDefinition, ExtrudedShapeDefinition,
    GeneratorDefinition, GeneratorInstance, ShapeGenerator, SphereDefinition,
};

pub use placement::{
    BoundsExtrusion, CsgOperation, ExtrusionHandles, GeneratorModeState, PlacementFlags,
    ShapeExtrusion, ShapeExtrusionState,
};

pub use preview::{PreviewLines, PreviewRenderer};

pub use scene::{ObjectId, SceneGraph, SceneHost, SceneObject, VisualizationMode};

pub use tools::{
    BoundsPlacementTool, DragArea, Modifiers, PlacementOutcome, PlacementTool,
    ShapePlacementTool, ToolId, ToolRegistry, ViewContext,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
